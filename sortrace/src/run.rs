use alloc::vec::Vec;
use core::mem;

use crate::algorithms::{Bubble, Counting, Heap, Insertion, Merge, Quick, Selection, Shell};
use crate::machine::{Machine, Workspace};
use crate::{
    Algorithm, CancelToken, CountingKey, Highlight, RunOptions, SortError, StepKind, TraceStep,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunState {
    Running,
    Finished,
    Cancelled,
}

/// One execution of one algorithm over a private copy of the input.
///
/// A run is a lazy, finite [`Iterator`] of [`TraceStep`]s. Each call to `next` performs the
/// algorithm's work up to the next observable event and returns a snapshot; nothing runs ahead.
/// The last step is always [`StepKind::Done`] unless the run is cancelled first.
///
/// Runs are not restartable: create a new one from the input to replay. Given the same input
/// and options, two runs yield identical sequences.
///
/// ```
/// use sortrace::{Run, StepKind};
///
/// let steps: Vec<_> = Run::bubble(&[5u32, 3, 8, 1]).collect();
/// let last = steps.last().unwrap();
/// assert_eq!(last.kind, StepKind::Done);
/// assert_eq!(last.values, vec![1, 3, 5, 8]);
/// assert_eq!(last.comparisons, 6);
/// ```
#[derive(Clone, Debug)]
pub struct Run<T = u32> {
    algorithm: Algorithm,
    options: RunOptions,
    workspace: Workspace<T>,
    machine: Machine<T>,
    cancel: Option<CancelToken>,
    state: RunState,
    len: usize,
    emitted: usize,
}

impl<T: CountingKey> Run<T> {
    /// Creates a run for any algorithm with default options.
    ///
    /// Fails only for [`Algorithm::Counting`] when the value range exceeds the bucket limit.
    pub fn new(algorithm: Algorithm, input: &[T]) -> Result<Self, SortError> {
        Self::with_options(algorithm, input, RunOptions::default())
    }

    pub fn with_options(
        algorithm: Algorithm,
        input: &[T],
        options: RunOptions,
    ) -> Result<Self, SortError> {
        match Self::comparison(algorithm, input, options) {
            Some(run) => Ok(run),
            None => Self::counting_with_options(input, options),
        }
    }

    /// Counting sort. Requires `max - min + 1 <= options.max_counting_range`.
    pub fn counting(input: &[T]) -> Result<Self, SortError> {
        Self::counting_with_options(input, RunOptions::default())
    }

    pub fn counting_with_options(input: &[T], options: RunOptions) -> Result<Self, SortError> {
        let machine = if input.len() < 2 {
            Machine::Idle
        } else {
            Machine::Counting(Counting::new(input, options.max_counting_range)?)
        };
        Ok(Self::from_parts(Algorithm::Counting, input, options, move |_| {
            machine
        }))
    }
}

impl<T: Ord + Clone> Run<T> {
    pub fn bubble(input: &[T]) -> Self {
        Self::from_parts(Algorithm::Bubble, input, RunOptions::default(), |_| {
            Machine::Bubble(Bubble::new())
        })
    }

    pub fn selection(input: &[T]) -> Self {
        Self::from_parts(Algorithm::Selection, input, RunOptions::default(), |_| {
            Machine::Selection(Selection::new())
        })
    }

    pub fn insertion(input: &[T]) -> Self {
        Self::from_parts(Algorithm::Insertion, input, RunOptions::default(), |_| {
            Machine::Insertion(Insertion::new())
        })
    }

    pub fn quick(input: &[T]) -> Self {
        Self::from_parts(Algorithm::Quick, input, RunOptions::default(), |n| {
            Machine::Quick(Quick::new(n))
        })
    }

    pub fn merge(input: &[T]) -> Self {
        Self::from_parts(Algorithm::Merge, input, RunOptions::default(), |n| {
            Machine::Merge(Merge::new(n))
        })
    }

    pub fn heap(input: &[T]) -> Self {
        Self::from_parts(Algorithm::Heap, input, RunOptions::default(), |n| {
            Machine::Heap(Heap::new(n))
        })
    }

    pub fn shell(input: &[T]) -> Self {
        Self::from_parts(Algorithm::Shell, input, RunOptions::default(), |n| {
            Machine::Shell(Shell::new(n))
        })
    }

    /// Creates a run for a comparison-based algorithm with explicit options.
    ///
    /// Returns `None` for [`Algorithm::Counting`], which needs integer keys; use
    /// [`Run::counting_with_options`] for that.
    pub fn comparison(algorithm: Algorithm, input: &[T], options: RunOptions) -> Option<Self> {
        let build: fn(usize) -> Machine<T> = match algorithm {
            Algorithm::Counting => return None,
            Algorithm::Bubble => |_| Machine::Bubble(Bubble::new()),
            Algorithm::Selection => |_| Machine::Selection(Selection::new()),
            Algorithm::Insertion => |_| Machine::Insertion(Insertion::new()),
            Algorithm::Quick => |n| Machine::Quick(Quick::new(n)),
            Algorithm::Merge => |n| Machine::Merge(Merge::new(n)),
            Algorithm::Heap => |n| Machine::Heap(Heap::new(n)),
            Algorithm::Shell => |n| Machine::Shell(Shell::new(n)),
        };
        Some(Self::from_parts(algorithm, input, options, build))
    }
}

impl<T> Run<T> {
    /// Attaches a cancellation token, polled before every step.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn set_cancel_token(&mut self, token: Option<CancelToken>) {
        self.cancel = token;
    }

    /// `build` receives the input length and is only called for inputs of two or more
    /// elements; shorter inputs are already sorted and go straight to `Done`.
    fn from_parts(
        algorithm: Algorithm,
        input: &[T],
        options: RunOptions,
        build: impl FnOnce(usize) -> Machine<T>,
    ) -> Self
    where
        T: Clone,
    {
        let machine = if input.len() < 2 {
            Machine::Idle
        } else {
            build(input.len())
        };
        sdebug!(
            algorithm = algorithm.name(),
            len = input.len(),
            emit_compare_steps = options.emit_compare_steps,
            "Run::new"
        );
        Self {
            algorithm,
            options,
            workspace: Workspace::new(input.to_vec()),
            machine,
            cancel: None,
            state: RunState::Running,
            len: input.len(),
            emitted: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    pub fn cancel_token(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }

    /// Number of elements being sorted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Comparisons performed so far.
    pub fn comparisons(&self) -> u64 {
        self.workspace.comparisons
    }

    /// Steps yielded so far, including the `Done` step.
    pub fn steps_emitted(&self) -> usize {
        self.emitted
    }

    /// `true` once the `Done` step has been yielded.
    pub fn is_finished(&self) -> bool {
        self.state == RunState::Finished
    }

    /// `true` once cancellation has been observed. A cancelled run never yields `Done`.
    pub fn is_cancelled(&self) -> bool {
        self.state == RunState::Cancelled
    }

    /// Stops the run at the current step boundary, as if its token had been flipped.
    pub fn cancel(&mut self) {
        if self.state == RunState::Running {
            self.retire_cancelled();
        }
    }

    fn retire_cancelled(&mut self) {
        sdebug!(
            algorithm = self.algorithm.name(),
            steps = self.emitted,
            comparisons = self.workspace.comparisons,
            "run cancelled"
        );
        self.state = RunState::Cancelled;
        self.machine = Machine::Idle;
        self.workspace.values = Vec::new();
    }

    fn cancellation_requested(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

impl<T: Ord + Clone> Iterator for Run<T> {
    type Item = TraceStep<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != RunState::Running {
            return None;
        }
        if self.cancellation_requested() {
            self.retire_cancelled();
            return None;
        }

        loop {
            match self.machine.advance(&mut self.workspace) {
                Some(event) => {
                    if event.kind == StepKind::Compare && !self.options.emit_compare_steps {
                        continue;
                    }
                    strace!(
                        kind = ?event.kind,
                        comparisons = self.workspace.comparisons,
                        "step"
                    );
                    self.emitted += 1;
                    return Some(TraceStep {
                        values: self.workspace.values.clone(),
                        highlight: event.highlight,
                        comparisons: self.workspace.comparisons,
                        kind: event.kind,
                    });
                }
                None => {
                    debug_assert!(self.workspace.values.windows(2).all(|w| w[0] <= w[1]));
                    sdebug!(
                        algorithm = self.algorithm.name(),
                        steps = self.emitted + 1,
                        comparisons = self.workspace.comparisons,
                        "run finished"
                    );
                    self.state = RunState::Finished;
                    self.machine = Machine::Idle;
                    self.emitted += 1;
                    return Some(TraceStep {
                        values: mem::take(&mut self.workspace.values),
                        highlight: Highlight::NONE,
                        comparisons: self.workspace.comparisons,
                        kind: StepKind::Done,
                    });
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            RunState::Running => (usize::from(!self.cancellation_requested()), None),
            _ => (0, Some(0)),
        }
    }
}

impl<T: Ord + Clone> core::iter::FusedIterator for Run<T> {}
