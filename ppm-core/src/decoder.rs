//! PPM frame decoder.
//!
//! Splits a stream of pulse widths into frames and channel slots:
//!
//! ```text
//!   +--------------+  width < threshold && available
//!   | Accumulating |<-----------------------------+
//!   +--------------+------------------------------+
//!          |  width >= threshold || !available
//!          v
//!   +--------------+
//!   |   Boundary   |  map buffer, publish, cursor = 0
//!   +--------------+----> Accumulating
//! ```
//!
//! Two tolerance rules are kept on purpose and covered by tests:
//!
//! - A boundary that fires before all `N` slots were written still maps the
//!   buffer. Unwritten slots keep their values from earlier frames.
//! - Pulses past slot `N - 1` are counted but not stored.

use crate::config::{ConfigError, ExtRxConfig, DEFAULT_CONFIG};
use crate::mapping::map_channels;
use crate::telemetry::ExtRxLog;
use crate::types::{CommandRecord, RawChannels};

/// Outcome of feeding one pulse to the decoder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameEvent {
    /// The pulse was a channel pulse in slot `index`.
    ///
    /// `stored` is false when the slot lies past the buffer and the
    /// value was dropped.
    Channel { index: usize, stored: bool },
    /// The pulse closed the frame.
    Boundary {
        /// Command mapped from the buffer at the time of the boundary.
        record: CommandRecord,
        /// Channel pulses seen in the frame that just closed.
        pulses: usize,
    },
}

impl FrameEvent {
    /// The mapped command, if this event closed a frame.
    #[inline]
    #[must_use]
    pub fn record(&self) -> Option<CommandRecord> {
        match self {
            FrameEvent::Boundary { record, .. } => Some(*record),
            FrameEvent::Channel { .. } => None,
        }
    }
}

/// Passive frame counters.
///
/// These never turn into errors; they only make the tolerance paths
/// observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStats {
    /// Frame boundaries handled.
    pub frames: u32,
    /// Boundaries that fired with fewer than `N` channel pulses.
    pub short_frames: u32,
    /// Boundaries that fired with more than `N` channel pulses.
    pub overlong_frames: u32,
    /// Channel pulses not stored because the frame was already full.
    pub dropped_pulses: u32,
}

impl FrameStats {
    pub const ZERO: Self = Self {
        frames: 0,
        short_frames: 0,
        overlong_frames: 0,
        dropped_pulses: 0,
    };
}

/// Decoder state for an `N` channel PPM receiver.
pub struct FrameDecoder<const N: usize> {
    channels: RawChannels<N>,
    cursor: usize,
    config: ExtRxConfig,
    last_command: CommandRecord,
    stats: FrameStats,
}

impl<const N: usize> FrameDecoder<N> {
    /// Create a decoder with a validated configuration.
    ///
    /// The channel buffer starts zeroed.
    pub fn new(config: ExtRxConfig) -> Result<Self, ConfigError> {
        config.validate::<N>()?;
        Ok(Self {
            channels: [0; N],
            cursor: 0,
            config,
            last_command: CommandRecord::IDLE,
            stats: FrameStats::ZERO,
        })
    }

    /// Create a decoder with [`DEFAULT_CONFIG`].
    pub fn with_default_config() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_CONFIG)
    }

    /// Feed one pulse width (µs) to the decoder.
    ///
    /// `available` is the pulse source's availability flag sampled for this
    /// pulse. A pulse that arrives while the source is unavailable closes
    /// the frame like a synchronization gap.
    pub fn on_pulse(&mut self, width_us: u16, available: bool) -> FrameEvent {
        if available && width_us < self.config.boundary_threshold_us {
            let index = self.cursor;
            let stored = index < N;
            if stored {
                self.channels[index] = width_us;
            } else {
                self.stats.dropped_pulses = self.stats.dropped_pulses.wrapping_add(1);
            }
            self.cursor = self.cursor.saturating_add(1);
            FrameEvent::Channel { index, stored }
        } else {
            let pulses = self.cursor;
            let record = self.close_frame();
            FrameEvent::Boundary { record, pulses }
        }
    }

    fn close_frame(&mut self) -> CommandRecord {
        let record = map_channels(&self.channels, &self.config);

        self.stats.frames = self.stats.frames.wrapping_add(1);
        if self.cursor < N {
            self.stats.short_frames = self.stats.short_frames.wrapping_add(1);
        } else if self.cursor > N {
            self.stats.overlong_frames = self.stats.overlong_frames.wrapping_add(1);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("PPM frame: {} pulses -> {:?}", self.cursor, record);

        self.last_command = record;
        self.cursor = 0;
        record
    }

    /// Raw channel buffer.
    #[inline]
    #[must_use]
    pub fn channels(&self) -> &RawChannels<N> {
        &self.channels
    }

    /// Channel pulses seen in the current frame.
    ///
    /// Can exceed `N` on an over-long frame.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Command produced by the most recent frame boundary.
    #[inline]
    #[must_use]
    pub fn last_command(&self) -> CommandRecord {
        self.last_command
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ExtRxConfig {
        &self.config
    }

    /// Snapshot of the `extrx` log group.
    #[must_use]
    pub fn log(&self) -> ExtRxLog {
        ExtRxLog::new(&self.channels, self.last_command)
    }
}
