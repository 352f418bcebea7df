use std::thread;
use std::time::{Duration, Instant};

use sortrace::{Algorithm, CancelToken, CountingKey, Run, SortError, TraceStep};

use crate::{Pacer, PlaybackStats, PlaybackStatus};

/// Longest uninterrupted sleep; cancellation is re-checked at least this often.
const SLEEP_SLICE: Duration = Duration::from_millis(10);

/// A blocking, real-time view of a [`Run`].
///
/// After each step is computed, `next` sleeps for the pacer's delay before handing the step
/// over. If the token is flipped before or during that sleep, the step is dropped and the
/// sequence ends without a `Done` step. The `Done` step itself is returned without a delay.
#[derive(Debug)]
pub struct Paced<T = u32> {
    run: Run<T>,
    pacer: Pacer,
    token: CancelToken,
    started: Option<Instant>,
    elapsed: Option<Duration>,
    steps: usize,
    comparisons: u64,
}

impl<T: Ord + Clone> Paced<T> {
    /// Wraps `run`, attaching `token` so the run itself also observes cancellation.
    pub fn new(run: Run<T>, pacer: Pacer, token: CancelToken) -> Self {
        Self {
            run: run.with_cancel(token.clone()),
            pacer,
            token,
            started: None,
            elapsed: None,
            steps: 0,
            comparisons: 0,
        }
    }

    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.token
    }

    pub fn is_finished(&self) -> bool {
        self.run.is_finished()
    }

    pub fn is_cancelled(&self) -> bool {
        self.run.is_cancelled()
    }

    /// Time since the first step was requested; frozen once playback ends.
    pub fn elapsed(&self) -> Duration {
        match (self.elapsed, self.started) {
            (Some(elapsed), _) => elapsed,
            (None, Some(started)) => started.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn stats(&self) -> PlaybackStats {
        let status = if self.run.is_finished() {
            PlaybackStatus::Finished
        } else if self.run.is_cancelled() {
            PlaybackStatus::Cancelled
        } else if self.started.is_some() {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Idle
        };
        PlaybackStats {
            status,
            steps: self.steps,
            comparisons: self.comparisons,
            elapsed_ms: u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Sleeps for `total` in short slices. Returns `false` as soon as cancellation is seen.
    fn wait(&self, total: Duration) -> bool {
        let deadline = Instant::now() + total;
        loop {
            if self.token.is_cancelled() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep((deadline - now).min(SLEEP_SLICE));
        }
    }

    fn stop_clock(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = self.started.map(|s| s.elapsed());
        }
    }
}

impl<T: Ord + Clone> Iterator for Paced<T> {
    type Item = TraceStep<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.started.get_or_insert_with(Instant::now);

        let Some(step) = self.run.next() else {
            self.stop_clock();
            return None;
        };

        if !step.is_done() && !self.wait(self.pacer.delay()) {
            self.run.cancel();
            self.stop_clock();
            return None;
        }

        self.steps += 1;
        self.comparisons = step.comparisons;
        if step.is_done() {
            self.stop_clock();
        }
        Some(step)
    }
}

/// Creates a paced run of `algorithm` over `input`.
///
/// Fails before any step if the algorithm's precondition does not hold (counting sort range).
pub fn paced<T: CountingKey>(
    algorithm: Algorithm,
    input: &[T],
    pacer: Pacer,
    token: CancelToken,
) -> Result<Paced<T>, SortError> {
    Ok(Paced::new(Run::new(algorithm, input)?, pacer, token))
}

/// Plays `run` to the end (or until `token` is flipped), handing every step to `apply`.
///
/// Blocks the calling thread for the whole playback. Returns the final counters; the status
/// is [`PlaybackStatus::Finished`] or [`PlaybackStatus::Cancelled`].
pub fn play<T, F>(run: Run<T>, pacer: Pacer, token: CancelToken, mut apply: F) -> PlaybackStats
where
    T: Ord + Clone,
    F: FnMut(&TraceStep<T>),
{
    let mut paced = Paced::new(run, pacer, token);
    for step in paced.by_ref() {
        apply(&step);
    }
    let stats = paced.stats();
    pdebug!(
        status = ?stats.status,
        steps = stats.steps,
        comparisons = stats.comparisons,
        elapsed_ms = stats.elapsed_ms,
        "play finished"
    );
    stats
}
