use alloc::vec::Vec;

use crate::algorithms::{Bubble, Counting, Heap, Insertion, Merge, Quick, Selection, Shell};
use crate::{Highlight, StepKind};

/// Private state shared by every step machine: the working copy and the comparison counter.
#[derive(Clone, Debug)]
pub(crate) struct Workspace<T> {
    pub(crate) values: Vec<T>,
    pub(crate) comparisons: u64,
}

impl<T> Workspace<T> {
    pub(crate) fn new(values: Vec<T>) -> Self {
        Self {
            values,
            comparisons: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub(crate) fn count_comparison(&mut self) {
        self.comparisons = self.comparisons.saturating_add(1);
    }
}

/// What a machine reports after advancing by one observable event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Event {
    pub(crate) kind: StepKind,
    pub(crate) highlight: Highlight,
}

impl Event {
    pub(crate) fn compare(highlight: Highlight) -> Self {
        Self {
            kind: StepKind::Compare,
            highlight,
        }
    }

    pub(crate) fn swap(highlight: Highlight) -> Self {
        Self {
            kind: StepKind::Swap,
            highlight,
        }
    }

    pub(crate) fn overwrite(highlight: Highlight) -> Self {
        Self {
            kind: StepKind::Overwrite,
            highlight,
        }
    }
}

/// A resumable algorithm. Each `advance` performs work up to and including the next
/// observable event and returns it; `None` means the array is sorted.
#[derive(Clone, Debug)]
pub(crate) enum Machine<T> {
    /// Nothing to do (fewer than two elements).
    Idle,
    Bubble(Bubble),
    Selection(Selection),
    Insertion(Insertion),
    Quick(Quick),
    Merge(Merge<T>),
    Heap(Heap),
    Shell(Shell<T>),
    Counting(Counting<T>),
}

impl<T: Ord + Clone> Machine<T> {
    pub(crate) fn advance(&mut self, ws: &mut Workspace<T>) -> Option<Event> {
        match self {
            Self::Idle => None,
            Self::Bubble(m) => m.advance(ws),
            Self::Selection(m) => m.advance(ws),
            Self::Insertion(m) => m.advance(ws),
            Self::Quick(m) => m.advance(ws),
            Self::Merge(m) => m.advance(ws),
            Self::Heap(m) => m.advance(ws),
            Self::Shell(m) => m.advance(ws),
            Self::Counting(m) => m.advance(ws),
        }
    }
}
