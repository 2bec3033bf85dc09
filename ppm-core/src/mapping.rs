//! Raw channel to command mapping.
//!
//! PPM channels carry pulse widths of roughly 1000-2000 µs (center 1500).
//! This module turns those widths into a [`CommandRecord`].

use crate::config::{AxisConfig, ExtRxConfig, RawRange};
use crate::types::CommandRecord;

/// Linearly map `raw` from `range` onto `[min, max]`.
///
/// No clamping happens here: values outside `range` extrapolate.
#[inline]
#[must_use]
pub fn scale_to_float(raw: u16, range: RawRange, min: f32, max: f32) -> f32 {
    let fraction = (f32::from(raw) - f32::from(range.min)) / f32::from(range.span());
    min + (max - min) * fraction
}

/// Convert a raw pulse width to a signed axis value in `[-scale, +scale]`.
#[inline]
#[must_use]
pub fn raw_to_axis(raw: u16, axis: &AxisConfig, range: RawRange, clamp: bool) -> f32 {
    let raw = if clamp { range.clamp(raw) } else { raw };
    let scaled = scale_to_float(raw, range, -axis.scale, axis.scale);
    if axis.invert { -scaled } else { scaled }
}

/// Convert a raw pulse width to thrust (0 to 65535).
///
/// Below-range input saturates at 0 and above-range input at
/// [`u16::MAX`], whether or not `clamp` is set.
#[inline]
#[must_use]
pub fn raw_to_thrust(raw: u16, range: RawRange, clamp: bool) -> u16 {
    let raw = if clamp { range.clamp(raw) } else { raw };
    let offset = u32::from(raw.saturating_sub(range.min));
    let scaled = (offset * u32::from(u16::MAX))
        .checked_div(u32::from(range.span()))
        .unwrap_or(0);
    scaled.min(u32::from(u16::MAX)) as u16
}

/// Map a raw channel buffer to a command using the given configuration.
///
/// The configuration must have been validated for `N` channels.
#[must_use]
pub fn map_channels<const N: usize>(channels: &[u16; N], config: &ExtRxConfig) -> CommandRecord {
    let axis = |cfg: &AxisConfig| raw_to_axis(channels[cfg.channel], cfg, config.raw, config.clamp);

    CommandRecord {
        thrust: raw_to_thrust(channels[config.thrust], config.raw, config.clamp),
        roll: axis(&config.roll),
        pitch: axis(&config.pitch),
        yaw: axis(&config.yaw),
    }
}
