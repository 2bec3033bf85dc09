//! Core command types: CommandRecord and the raw channel buffer.

/// Raw pulse widths for one PPM frame, in microseconds.
///
/// Slot `i` holds the width of the `i`-th channel pulse seen since the
/// last frame boundary. Slots not reached in the current frame keep the
/// value from an earlier frame.
pub type RawChannels<const N: usize> = [u16; N];

/// Normalized flight command produced once per PPM frame.
///
/// - `thrust`: unsigned, 0 at the bottom of the raw range and
///   [`u16::MAX`] at the top.
/// - `roll`, `pitch`, `yaw`: signed, symmetric around the raw center,
///   in the calibrated unit of each axis (degrees or degrees/second).
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandRecord {
    pub thrust: u16,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl CommandRecord {
    /// Zero thrust, all axes centered.
    pub const IDLE: Self = Self {
        thrust: 0,
        roll: 0.0,
        pitch: 0.0,
        yaw: 0.0,
    };

    #[must_use]
    pub const fn new(thrust: u16, roll: f32, pitch: f32, yaw: f32) -> Self {
        Self {
            thrust,
            roll,
            pitch,
            yaw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_record_is_default() {
        assert_eq!(CommandRecord::IDLE, CommandRecord::default());
    }

    #[test]
    fn test_new_sets_fields() {
        let record = CommandRecord::new(100, 1.0, -2.0, 3.0);
        assert_eq!(record.thrust, 100);
        assert_eq!(record.roll, 1.0);
        assert_eq!(record.pitch, -2.0);
        assert_eq!(record.yaw, 3.0);
    }
}
