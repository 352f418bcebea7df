use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::ParseAlgorithmError;

/// The kind of event a [`TraceStep`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// A comparison is about to be decided. The snapshot shows the pre-decision state.
    Compare,
    /// Two slots were exchanged.
    Swap,
    /// A single slot was written (merge/shell/counting output building).
    Overwrite,
    /// Terminal step. The snapshot is the fully sorted array.
    Done,
}

impl StepKind {
    pub fn is_mutation(self) -> bool {
        matches!(self, Self::Swap | Self::Overwrite)
    }
}

/// Up to three role-tagged indices relevant to the current operation.
///
/// What each role means depends on the algorithm; see [`crate::Algorithm`] for the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Highlight {
    pub pivot: Option<usize>,
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
}

impl Highlight {
    pub const NONE: Self = Self {
        pivot: None,
        primary: None,
        secondary: None,
    };

    pub fn single(primary: usize) -> Self {
        Self {
            primary: Some(primary),
            ..Self::NONE
        }
    }

    pub fn pair(primary: usize, secondary: usize) -> Self {
        Self {
            primary: Some(primary),
            secondary: Some(secondary),
            ..Self::NONE
        }
    }

    pub fn with_pivot(mut self, pivot: usize) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pivot.is_none() && self.primary.is_none() && self.secondary.is_none()
    }

    /// Iterates the set roles in `pivot, primary, secondary` order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        [self.pivot, self.primary, self.secondary].into_iter().flatten()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices().any(|i| i == index)
    }
}

/// One observable moment in a run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceStep<T = u32> {
    /// Full snapshot of the working array after this event.
    pub values: Vec<T>,
    pub highlight: Highlight,
    /// Comparisons performed since the run began (including the one a `Compare` step shows).
    pub comparisons: u64,
    pub kind: StepKind,
}

impl<T> TraceStep<T> {
    pub fn is_done(&self) -> bool {
        self.kind == StepKind::Done
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The sorting algorithms a [`crate::Run`] can trace.
///
/// Highlight roles per algorithm (`pivot` / `primary` / `secondary`):
///
/// | Algorithm | Compare step | Mutation step |
/// |---|---|---|
/// | Bubble | `-` / `j` / `j+1` | `-` / `j` / `j+1` |
/// | Selection | `i` / current min / `j` | `-` / min / `i` |
/// | Insertion | `i` / `j-1` / `j` | `i` / `j-1` / `j` |
/// | Quick | `high` / `j` / store | store swap: `high` / store / `j`; placement: final pivot / store / `high` |
/// | Merge | `-` / write target / right head | `-` / write target / `-` |
/// | Heap | sift root / largest / child | `-` / parent / child (`0` / end on extraction) |
/// | Shell | `i` / `j-gap` / `j` | shift: `i` / `j` / `j-gap`; placement: `i` / `j` / `-` |
/// | Counting | tally: `-` / `i` / `-` | `-` / output slot / `-` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Quick,
    Heap,
    Shell,
    Counting,
    Bubble,
    Selection,
    Insertion,
    Merge,
}

impl Algorithm {
    pub const ALL: [Self; 8] = [
        Self::Quick,
        Self::Heap,
        Self::Shell,
        Self::Counting,
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Shell => "shell",
            Self::Counting => "counting",
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
        }
    }

    /// Whether equal elements always keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion | Self::Merge)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts `"quick"`, `"Quick"`, `"quick-sort"`, `"quick_sort"` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let base = ["-sort", "_sort", " sort"]
            .iter()
            .find_map(|suffix| {
                let cut = trimmed.len().checked_sub(suffix.len())?;
                let (head, tail) = (trimmed.get(..cut)?, trimmed.get(cut..)?);
                tail.eq_ignore_ascii_case(suffix).then_some(head)
            })
            .unwrap_or(trimmed);

        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(base))
            .ok_or_else(|| ParseAlgorithmError::new(s))
    }
}
