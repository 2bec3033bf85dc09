//! Platform-agnostic PPM frame decoding and RC command mapping.
//!
//! This crate turns a stream of PPM pulse widths into flight commands
//! (thrust, roll, pitch, yaw) without any platform-specific dependencies.
//! It can be used both in embedded `no_std` environments and on host for
//! testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`types`]: Core data structures ([`CommandRecord`], [`RawChannels`])
//! - [`config`]: Channel assignment and calibration ([`ExtRxConfig`], [`DEFAULT_CONFIG`])
//! - [`decoder`]: Frame synchronization ([`FrameDecoder`])
//! - [`mapping`]: Raw width to command conversion ([`map_channels`])
//! - [`input`]: Pulse source trait ([`PulseSource`])
//! - [`output`]: Command sink trait ([`CommandSink`])
//! - [`bridge`]: Orchestrates source-to-sink flow ([`ExtRxBridge`])
//! - [`telemetry`]: Named log variables ([`ExtRxLog`])
//!
//! # PPM Frames
//!
//! A PPM frame is a train of channel pulses (about 1000-2000 µs each)
//! followed by a synchronization gap. Any pulse of 2100 µs or more is
//! taken as the gap:
//!
//! ```text
//! | ch0 | ch1 | ch2 | ch3 | ... |      sync gap      | ch0 | ...
//! ```
//!
//! # Example
//!
//! ```rust
//! use ppm_core::{FrameDecoder, DEFAULT_CONFIG};
//!
//! let mut decoder = FrameDecoder::<4>::new(DEFAULT_CONFIG).unwrap();
//! for width in [1500, 1500, 1500, 1500] {
//!     assert!(decoder.on_pulse(width, true).record().is_none());
//! }
//!
//! let record = decoder.on_pulse(2200, true).record().unwrap();
//! assert_eq!(record.thrust, 32767);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and frame tracing (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod bridge;
pub mod config;
pub mod decoder;
pub mod input;
pub mod mapping;
pub mod output;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use bridge::ExtRxBridge;
pub use config::{
    AxisConfig, ConfigError, ExtRxConfig, RawRange, BOUNDARY_THRESHOLD_US, DEFAULT_CHANNEL_COUNT,
    DEFAULT_CONFIG, PPM_CENTER_US, PPM_MAX_US, PPM_MIN_US,
};
pub use decoder::{FrameDecoder, FrameEvent, FrameStats};
pub use input::{PulseError, PulseSource};
pub use mapping::{map_channels, raw_to_axis, raw_to_thrust, scale_to_float};
pub use output::CommandSink;
pub use telemetry::{ExtRxLog, LogType, LogValue, LogVariable, LOG_GROUP};
pub use types::{CommandRecord, RawChannels};
