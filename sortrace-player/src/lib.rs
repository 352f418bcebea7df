//! Pacing and playback utilities for the `sortrace` crate.
//!
//! The `sortrace` crate produces steps as fast as they are pulled. This crate provides the
//! timing side a visualizer needs, without tying it to any UI framework:
//!
//! - [`Pacer`]: speed (`1..=100`) to per-step delay, on a choice of curves
//! - [`Player`]: a tick-driven controller for frame loops (never sleeps)
//! - [`Paced`] / [`play`]: blocking real-time playback with prompt cancellation (`std` only)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod paced;
mod pacer;
mod player;


#[cfg(feature = "std")]
pub use paced::{Paced, paced, play};
pub use pacer::{DEFAULT_SPEED, DelayCurve, MAX_DELAY_MS, MAX_SPEED, MIN_SPEED, Pacer};
pub use player::{MAX_CATCH_UP_MS, MAX_STEPS_PER_TICK, PlaybackStats, PlaybackStatus, Player};
