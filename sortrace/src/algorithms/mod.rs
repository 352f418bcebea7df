//! Step machines, one per algorithm.
//!
//! Every machine follows the same emission policy: a `Compare` event is produced *before* the
//! comparison's outcome is applied (the caller's snapshot still shows the pre-decision state,
//! but the counter already includes the comparison), and mutation events are produced *after*
//! the mutation is committed.

mod bubble;
mod counting;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
mod shell;

pub(crate) use bubble::Bubble;
pub(crate) use counting::Counting;
pub(crate) use heap::Heap;
pub(crate) use insertion::Insertion;
pub(crate) use merge::Merge;
pub(crate) use quick::Quick;
pub(crate) use selection::Selection;
pub(crate) use shell::Shell;
