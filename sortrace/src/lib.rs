//! A headless, step-emitting sorting engine for algorithm visualizers.
//!
//! For pacing and playback utilities (speed curves, tick-driven and blocking players), see
//! the `sortrace-player` crate.
//!
//! This crate turns classic sorting algorithms (quick, heap, shell, counting, bubble,
//! selection, insertion, merge) into lazy sequences of [`TraceStep`]s: full array snapshots
//! plus the indices being compared or moved and a running comparison count.
//!
//! It is UI-agnostic. A renderer is expected to:
//! - create a [`Run`] from its current array
//! - pull steps at whatever pace it likes and draw `values` / `highlight`
//! - flip a [`CancelToken`] to stop a run early
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod algorithms;
mod cancel;
mod error;
mod key;
mod machine;
mod options;
mod run;
mod types;

#[cfg(test)]
mod tests;

pub use cancel::CancelToken;
pub use error::{ParseAlgorithmError, SortError};
pub use key::CountingKey;
pub use options::{DEFAULT_MAX_COUNTING_RANGE, RunOptions};
pub use run::Run;
pub use types::{Algorithm, Highlight, StepKind, TraceStep};
