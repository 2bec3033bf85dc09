//! Receiver configuration: channel assignment and per-axis calibration.
//!
//! Everything here is fixed at build time. The struct form exists so tests
//! and alternative airframes can supply their own calibration without
//! touching the decoder.

/// Channel count of the default receiver build.
pub const DEFAULT_CHANNEL_COUNT: usize = 6;

/// Pulses at or above this width (µs) mark a frame boundary.
pub const BOUNDARY_THRESHOLD_US: u16 = 2100;

/// Nominal minimum channel pulse width (µs).
pub const PPM_MIN_US: u16 = 1000;

/// Nominal maximum channel pulse width (µs).
pub const PPM_MAX_US: u16 = 2000;

/// Nominal center channel pulse width (µs).
pub const PPM_CENTER_US: u16 = (PPM_MIN_US + PPM_MAX_US) / 2;

/// Nominal raw pulse-width range of the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawRange {
    pub min: u16,
    pub max: u16,
}

impl RawRange {
    pub const NOMINAL: Self = Self {
        min: PPM_MIN_US,
        max: PPM_MAX_US,
    };

    /// Width of the range in microseconds.
    #[inline]
    #[must_use]
    pub const fn span(self) -> u16 {
        self.max.saturating_sub(self.min)
    }

    #[inline]
    #[must_use]
    pub fn clamp(self, raw: u16) -> u16 {
        raw.max(self.min).min(self.max)
    }
}

/// Mapping of one signed axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConfig {
    /// Channel index in the raw buffer.
    pub channel: usize,
    /// Negate the scaled value (mounting / stick convention).
    pub invert: bool,
    /// Output spans `[-scale, +scale]` over the raw range.
    pub scale: f32,
}

/// Full receiver configuration.
///
/// Customize this at compile-time by creating your own const.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExtRxConfig {
    /// Channel index for thrust.
    pub thrust: usize,
    pub roll: AxisConfig,
    pub pitch: AxisConfig,
    pub yaw: AxisConfig,
    /// Pulses at or above this width close the current frame.
    pub boundary_threshold_us: u16,
    /// Raw range mapped onto the output ranges.
    pub raw: RawRange,
    /// Clamp raw values into `raw` before mapping.
    ///
    /// With clamping off, axes extrapolate linearly and thrust saturates
    /// at the `u16` bounds.
    pub clamp: bool,
}

/// Default receiver wiring.
///
/// - CH1 (Roll) -> roll, inverted, ±40
/// - CH2 (Pitch) -> pitch, inverted, ±40
/// - CH3 (Throttle) -> thrust
/// - CH4 (Yaw) -> yaw, inverted, ±400
pub const DEFAULT_CONFIG: ExtRxConfig = ExtRxConfig {
    thrust: 2,
    roll: AxisConfig {
        channel: 0,
        invert: true,
        scale: 40.0,
    },
    pitch: AxisConfig {
        channel: 1,
        invert: true,
        scale: 40.0,
    },
    yaw: AxisConfig {
        channel: 3,
        invert: true,
        scale: 400.0,
    },
    boundary_threshold_us: BOUNDARY_THRESHOLD_US,
    raw: RawRange::NOMINAL,
    clamp: true,
};

impl Default for ExtRxConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

/// Error type for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The decoder was built with zero channels.
    NoChannels,
    /// An axis refers to a channel index beyond the channel count.
    ChannelOutOfRange {
        /// Offending channel index.
        channel: usize,
        /// Channel count of the decoder.
        count: usize,
    },
    /// `raw.min` is not below `raw.max`.
    EmptyRawRange,
}

impl ExtRxConfig {
    /// Check this configuration against a decoder with `N` channels.
    pub fn validate<const N: usize>(&self) -> Result<(), ConfigError> {
        if N == 0 {
            return Err(ConfigError::NoChannels);
        }
        for channel in [
            self.thrust,
            self.roll.channel,
            self.pitch.channel,
            self.yaw.channel,
        ] {
            if channel >= N {
                return Err(ConfigError::ChannelOutOfRange { channel, count: N });
            }
        }
        if self.raw.min >= self.raw.max {
            return Err(ConfigError::EmptyRawRange);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(DEFAULT_CONFIG.validate::<DEFAULT_CHANNEL_COUNT>(), Ok(()));
        assert_eq!(DEFAULT_CONFIG.validate::<4>(), Ok(()));
    }

    #[test]
    fn test_default_wiring() {
        assert_eq!(DEFAULT_CONFIG.roll.channel, 0);
        assert_eq!(DEFAULT_CONFIG.pitch.channel, 1);
        assert_eq!(DEFAULT_CONFIG.thrust, 2);
        assert_eq!(DEFAULT_CONFIG.yaw.channel, 3);
        assert_eq!(DEFAULT_CONFIG.boundary_threshold_us, 2100);
    }

    #[test]
    fn test_channel_out_of_range() {
        assert_eq!(
            DEFAULT_CONFIG.validate::<3>(),
            Err(ConfigError::ChannelOutOfRange { channel: 3, count: 3 })
        );
    }

    #[test]
    fn test_zero_channels_rejected() {
        assert_eq!(DEFAULT_CONFIG.validate::<0>(), Err(ConfigError::NoChannels));
    }

    #[test]
    fn test_empty_raw_range_rejected() {
        let mut config = DEFAULT_CONFIG;
        config.raw = RawRange { min: 1500, max: 1500 };
        assert_eq!(config.validate::<4>(), Err(ConfigError::EmptyRawRange));
    }

    #[test]
    fn test_raw_range_helpers() {
        assert_eq!(RawRange::NOMINAL.span(), 1000);
        assert_eq!(RawRange::NOMINAL.clamp(900), 1000);
        assert_eq!(RawRange::NOMINAL.clamp(2500), 2000);
        assert_eq!(RawRange::NOMINAL.clamp(1234), 1234);
        assert_eq!(PPM_CENTER_US, 1500);
    }
}
