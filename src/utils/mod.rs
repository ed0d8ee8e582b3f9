//! Utility functions and helpers
//!
//! This module contains the clock abstraction and timestamp helpers.

pub mod time;

pub use time::{truncate_to_minute, Clock, FixedClock, SystemClock};
