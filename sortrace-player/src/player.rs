use sortrace::{CancelToken, Run, TraceStep};

use crate::Pacer;

/// Longest backlog one `tick` works through. Steps due earlier than this (after a stall)
/// are rescheduled rather than replayed in a burst.
pub const MAX_CATCH_UP_MS: u64 = 100;

/// Most steps one `tick` applies. Bounds the work per frame on a zero-delay pacer.
pub const MAX_STEPS_PER_TICK: usize = 256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackStatus {
    /// No run has been started.
    #[default]
    Idle,
    Playing,
    /// The `Done` step has been applied.
    Finished,
    /// Stopped early; the last applied step stays visible.
    Cancelled,
}

/// Counters a playback controller reports alongside the current step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackStats {
    pub status: PlaybackStatus,
    /// Steps applied so far.
    pub steps: usize,
    pub comparisons: u64,
    /// Wall-clock time from the start of playback to the last applied step (or to completion).
    pub elapsed_ms: u64,
}

/// A framework-neutral playback controller that owns one [`Run`] at a time.
///
/// This type does not sleep. Adapters drive it by calling `tick(now_ms)` from a frame loop or
/// timer. Steps are scheduled on the pacer's timeline: each one is due one delay after the
/// previous one was due, and a tick applies every step that has come due since the last tick.
/// Delays shorter than a frame therefore still control the step rate.
///
/// Starting a new run cancels and drops the previous one first, so two runs never race to
/// update the same displayed state.
#[derive(Debug)]
pub struct Player<T = u32> {
    pacer: Pacer,
    run: Option<Run<T>>,
    token: CancelToken,
    current: Option<TraceStep<T>>,
    stats: PlaybackStats,
    started_ms: u64,
    next_due_us: u64,
}

impl<T: Ord + Clone> Player<T> {
    pub fn new(pacer: Pacer) -> Self {
        Self {
            pacer,
            run: None,
            token: CancelToken::new(),
            current: None,
            stats: PlaybackStats::default(),
            started_ms: 0,
            next_due_us: 0,
        }
    }

    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    /// Speed changes apply from the next delay on.
    pub fn pacer_mut(&mut self) -> &mut Pacer {
        &mut self.pacer
    }

    pub fn status(&self) -> PlaybackStatus {
        self.stats.status
    }

    pub fn stats(&self) -> PlaybackStats {
        self.stats
    }

    pub fn is_playing(&self) -> bool {
        self.stats.status == PlaybackStatus::Playing
    }

    /// The most recently applied step, if any.
    pub fn current(&self) -> Option<&TraceStep<T>> {
        self.current.as_ref()
    }

    /// A handle to the active run's cancellation flag.
    ///
    /// Flipping it (e.g. from another thread) stops the run at its next step boundary; the
    /// next `tick` then reports the run as cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// The first tick time at which the next step is due, if a run is playing.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.is_playing().then_some(self.next_due_us.div_ceil(1_000))
    }

    /// Installs `run` and starts playing it. The first step is due immediately.
    ///
    /// Any run still in progress is cancelled and retired first.
    pub fn start(&mut self, mut run: Run<T>, now_ms: u64) {
        self.retire();

        self.token = CancelToken::new();
        run.set_cancel_token(Some(self.token.clone()));
        pdebug!(
            algorithm = run.algorithm().name(),
            len = run.len(),
            speed = self.pacer.speed(),
            "Player::start"
        );
        self.run = Some(run);
        self.current = None;
        self.stats = PlaybackStats {
            status: PlaybackStatus::Playing,
            ..PlaybackStats::default()
        };
        self.started_ms = now_ms;
        self.next_due_us = now_ms.saturating_mul(1_000);
    }

    /// Cancels the active run. The last applied step stays as [`Player::current`].
    pub fn cancel(&mut self) {
        if self.run.is_some() {
            self.retire();
        }
    }

    fn retire(&mut self) {
        self.token.cancel();
        if let Some(mut run) = self.run.take() {
            pdebug!(
                algorithm = run.algorithm().name(),
                steps = run.steps_emitted(),
                "Player: retiring run"
            );
            run.cancel();
            if self.stats.status == PlaybackStatus::Playing {
                self.stats.status = PlaybackStatus::Cancelled;
            }
        }
    }

    /// Advances playback to `now_ms`.
    ///
    /// Applies every step that has come due, up to [`MAX_STEPS_PER_TICK`], and returns the
    /// last one applied. Returns `None` when nothing was due (or the player is idle, finished,
    /// or cancelled). A backlog older than [`MAX_CATCH_UP_MS`] is dropped from the schedule.
    pub fn tick(&mut self, now_ms: u64) -> Option<&TraceStep<T>> {
        if self.run.is_none() {
            return None;
        }
        if self.token.is_cancelled() {
            // Flipped through a handle.
            self.retire();
            return None;
        }

        let now_us = now_ms.saturating_mul(1_000);
        let floor_us = now_ms.saturating_sub(MAX_CATCH_UP_MS).saturating_mul(1_000);
        if self.next_due_us < floor_us {
            ptrace!(
                dropped_us = floor_us - self.next_due_us,
                now_ms,
                "Player: dropping backlog"
            );
            self.next_due_us = floor_us;
        }

        let mut applied = 0usize;
        while applied < MAX_STEPS_PER_TICK && self.next_due_us <= now_us {
            let Some(run) = self.run.as_mut() else {
                break;
            };
            let Some(step) = run.next() else {
                self.retire();
                break;
            };
            applied += 1;

            self.stats.steps += 1;
            self.stats.comparisons = step.comparisons;
            self.stats.elapsed_ms = now_ms.saturating_sub(self.started_ms);

            if step.is_done() {
                pdebug!(
                    steps = self.stats.steps,
                    comparisons = self.stats.comparisons,
                    elapsed_ms = self.stats.elapsed_ms,
                    "Player: run finished"
                );
                self.stats.status = PlaybackStatus::Finished;
                self.run = None;
            } else {
                self.next_due_us = self.next_due_us.saturating_add(self.pacer.delay_us());
            }
            self.current = Some(step);
        }

        ptrace!(applied, now_ms, "Player::tick");
        if applied == 0 {
            None
        } else {
            self.current.as_ref()
        }
    }
}

impl<T: Ord + Clone> Default for Player<T> {
    fn default() -> Self {
        Self::new(Pacer::default())
    }
}
