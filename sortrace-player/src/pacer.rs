use core::time::Duration;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;
pub const DEFAULT_SPEED: u32 = 50;

/// Upper bound for any per-step delay.
pub const MAX_DELAY_MS: u64 = 60_000;

/// How speed maps to a per-step delay. Every curve is non-increasing in speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DelayCurve {
    /// `ceiling_ms - speed`, saturating at zero.
    Linear { ceiling_ms: u64 },
    /// `max(1, (101 - speed) * len / 100)`: larger arrays play slower per step.
    ///
    /// Fractional delays are kept by [`DelayCurve::sample_us`] and [`Pacer::delay`];
    /// [`DelayCurve::sample`] truncates to whole milliseconds.
    SizeScaled { len: usize },
    /// `floor(1.1^(100 - speed) * 2)`: 2ms at full speed, seconds near the bottom.
    #[default]
    Exponential,
    /// A constant delay regardless of speed.
    Fixed { delay_ms: u64 },
}

impl DelayCurve {
    pub const DEFAULT_LINEAR_CEILING_MS: u64 = 500;

    /// Delay in whole milliseconds for `speed` (clamped to `1..=100` first).
    pub fn sample(self, speed: u32) -> u64 {
        self.sample_us(speed) / 1_000
    }

    /// Delay in microseconds for `speed` (clamped to `1..=100` first).
    pub fn sample_us(self, speed: u32) -> u64 {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        let us = match self {
            Self::Linear { ceiling_ms } => ceiling_ms
                .saturating_sub(speed as u64)
                .saturating_mul(1_000),
            Self::SizeScaled { len } => {
                let slowness = (MAX_SPEED + 1 - speed) as u64;
                // ms = slowness * len / 100, so us = slowness * len * 10.
                slowness
                    .saturating_mul(len as u64)
                    .saturating_mul(10)
                    .max(1_000)
            }
            Self::Exponential => {
                let mut factor = 2.0f64;
                for _ in 0..(MAX_SPEED - speed) {
                    factor *= 1.1;
                }
                (factor as u64).saturating_mul(1_000)
            }
            Self::Fixed { delay_ms } => delay_ms.saturating_mul(1_000),
        };
        us.min(MAX_DELAY_MS * 1_000)
    }
}

/// Converts a speed setting (`1..=100`, higher is faster) into a per-step delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pacer {
    speed: u32,
    curve: DelayCurve,
}

impl Pacer {
    /// Creates a pacer on the default exponential curve. `speed` is clamped to `1..=100`.
    pub fn new(speed: u32) -> Self {
        Self {
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            curve: DelayCurve::default(),
        }
    }

    /// A pacer that never waits. Useful for headless replay and tests.
    pub fn immediate() -> Self {
        Self::new(MAX_SPEED).with_curve(DelayCurve::Fixed { delay_ms: 0 })
    }

    pub fn with_curve(mut self, curve: DelayCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn curve(&self) -> DelayCurve {
        self.curve
    }

    pub fn set_curve(&mut self, curve: DelayCurve) {
        self.curve = curve;
    }

    pub fn delay_ms(&self) -> u64 {
        self.curve.sample(self.speed)
    }

    pub fn delay_us(&self) -> u64 {
        self.curve.sample_us(self.speed)
    }

    /// The per-step delay, keeping sub-millisecond precision.
    pub fn delay(&self) -> Duration {
        Duration::from_micros(self.delay_us())
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}
