//! Session error types.

use derive_more::{Display, Error};

/// A history jump outside `0..len`.
///
/// Callers only offer steps taken from the move list, so this signals a
/// bug in the caller rather than a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Step {} is out of range (history has {} entries)", step, len)]
pub struct OutOfRangeError {
    /// Requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}
