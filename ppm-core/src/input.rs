//! Pulse source trait and error types.

use core::future::Future;

/// Error type for pulse retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseError {
    /// No pulse arrived within the bounded wait. Benign, the caller retries.
    Timeout,
    /// The capture side dropped pulses because the queue was full.
    Overrun,
    /// The capture side is gone.
    Disconnected,
}

/// Async trait for pulse-width sources.
///
/// A source yields the width (µs) between consecutive pulse edges, one at a
/// time, and reports whether a synchronized pulse train is being received.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait PulseSource {
    /// Wait for the next pulse width.
    ///
    /// Implementations bound the wait and return [`PulseError::Timeout`]
    /// when it elapses.
    fn next_pulse(&mut self) -> impl Future<Output = Result<u16, PulseError>>;

    /// Check if a valid pulse train is currently being received.
    fn is_available(&self) -> bool;
}
