/// Default cap on counting-sort buckets (`max - min + 1`).
pub const DEFAULT_MAX_COUNTING_RANGE: usize = 1 << 20;

/// Configuration for [`crate::Run`].
///
/// Options are plain data and cheap to copy; build one with the setters and hand it to
/// [`crate::Run::with_options`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunOptions {
    /// Emit `Compare` steps. When `false`, only mutations and the final `Done` step are yielded;
    /// the comparison counter still advances.
    pub emit_compare_steps: bool,

    /// Largest bucket count counting sort will allocate.
    pub max_counting_range: usize,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compare_steps(mut self, emit: bool) -> Self {
        self.emit_compare_steps = emit;
        self
    }

    pub fn with_max_counting_range(mut self, max: usize) -> Self {
        self.max_counting_range = max;
        self
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            emit_compare_steps: true,
            max_counting_range: DEFAULT_MAX_COUNTING_RANGE,
        }
    }
}
