//! Read-only log variables for the external telemetry facility.
//!
//! The `extrx` log group exposes the first four raw channels and the last
//! command as named scalars. Telemetry polls a snapshot at its own rate;
//! nothing is pushed.

use crate::types::CommandRecord;

/// Name of the log group.
pub const LOG_GROUP: &str = "extrx";

/// Number of raw channels exposed as `ch0..ch3`.
pub const LOGGED_CHANNELS: usize = 4;

/// Number of variables in the group.
pub const LOG_VARIABLE_COUNT: usize = LOGGED_CHANNELS + 4;

/// Type tag of a log variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogType {
    Uint16,
    Float,
}

/// Value of a log variable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogValue {
    Uint16(u16),
    Float(f32),
}

impl LogValue {
    #[inline]
    #[must_use]
    pub const fn log_type(self) -> LogType {
        match self {
            LogValue::Uint16(_) => LogType::Uint16,
            LogValue::Float(_) => LogType::Float,
        }
    }
}

/// One named scalar in the log group.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogVariable {
    pub name: &'static str,
    pub value: LogValue,
}

/// Snapshot of the `extrx` log group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExtRxLog {
    /// Raw widths of channels 0-3. Zero for channels the decoder lacks.
    pub channels: [u16; LOGGED_CHANNELS],
    pub command: CommandRecord,
}

impl ExtRxLog {
    /// All channels and the command zeroed.
    pub const EMPTY: Self = Self {
        channels: [0; LOGGED_CHANNELS],
        command: CommandRecord::IDLE,
    };

    /// Build a snapshot from a raw buffer of any width.
    #[must_use]
    pub fn new(raw: &[u16], command: CommandRecord) -> Self {
        let mut channels = [0; LOGGED_CHANNELS];
        for (slot, &value) in channels.iter_mut().zip(raw) {
            *slot = value;
        }
        Self { channels, command }
    }

    /// All variables in registration order.
    #[must_use]
    pub fn variables(&self) -> [LogVariable; LOG_VARIABLE_COUNT] {
        let ch = |name, i: usize| LogVariable {
            name,
            value: LogValue::Uint16(self.channels[i]),
        };
        [
            ch("ch0", 0),
            ch("ch1", 1),
            ch("ch2", 2),
            ch("ch3", 3),
            LogVariable {
                name: "thrust",
                value: LogValue::Uint16(self.command.thrust),
            },
            LogVariable {
                name: "roll",
                value: LogValue::Float(self.command.roll),
            },
            LogVariable {
                name: "pitch",
                value: LogValue::Float(self.command.pitch),
            },
            LogVariable {
                name: "yaw",
                value: LogValue::Float(self.command.yaw),
            },
        ]
    }

    /// Look up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<LogValue> {
        self.variables()
            .into_iter()
            .find(|var| var.name == name)
            .map(|var| var.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_names_and_types() {
        let log = ExtRxLog::default();
        let vars = log.variables();
        let names = vars.map(|v| v.name);
        assert_eq!(
            names,
            ["ch0", "ch1", "ch2", "ch3", "thrust", "roll", "pitch", "yaw"]
        );
        for var in &vars[..5] {
            assert_eq!(var.value.log_type(), LogType::Uint16);
        }
        for var in &vars[5..] {
            assert_eq!(var.value.log_type(), LogType::Float);
        }
    }

    #[test]
    fn test_snapshot_from_wide_buffer() {
        let command = CommandRecord::new(1234, 1.0, 2.0, 3.0);
        let log = ExtRxLog::new(&[1000, 1100, 1200, 1300, 1400, 1500], command);

        assert_eq!(log.get("ch0"), Some(LogValue::Uint16(1000)));
        assert_eq!(log.get("ch3"), Some(LogValue::Uint16(1300)));
        assert_eq!(log.get("thrust"), Some(LogValue::Uint16(1234)));
        assert_eq!(log.get("yaw"), Some(LogValue::Float(3.0)));
        assert_eq!(log.get("ch4"), None);
    }

    #[test]
    fn test_empty_snapshot_is_default() {
        assert_eq!(ExtRxLog::EMPTY, ExtRxLog::default());
    }

    #[test]
    fn test_snapshot_from_narrow_buffer() {
        let log = ExtRxLog::new(&[1500, 1600], CommandRecord::IDLE);
        assert_eq!(log.channels, [1500, 1600, 0, 0]);
    }
}
