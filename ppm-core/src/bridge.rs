//! ExtRxBridge: connects a pulse source to the decoder and a command sink.

use core::future::Future;

use embassy_futures::select::{select, Either};

use crate::decoder::{FrameDecoder, FrameEvent};
use crate::input::{PulseError, PulseSource};
use crate::output::CommandSink;
use crate::telemetry::ExtRxLog;
use crate::types::CommandRecord;

/// Task loop glue for the external receiver.
///
/// Pulls one pulse at a time from the source, feeds it to the decoder and
/// publishes every mapped command to the sink.
///
/// # Error Handling
///
/// Timeouts are treated as "no pulse" and the loop simply retries. Other
/// source errors are returned from [`process_one`](Self::process_one) but
/// never touch decoder state.
pub struct ExtRxBridge<S, C, const N: usize> {
    source: S,
    sink: C,
    decoder: FrameDecoder<N>,
}

impl<S: PulseSource, C: CommandSink, const N: usize> ExtRxBridge<S, C, N> {
    /// Create a new bridge from a source, a sink and a configured decoder.
    pub fn new(source: S, sink: C, decoder: FrameDecoder<N>) -> Self {
        Self {
            source,
            sink,
            decoder,
        }
    }

    /// Run the bridge indefinitely.
    ///
    /// This method never returns under normal operation.
    pub async fn run(&mut self) -> ! {
        loop {
            let _ = self.process_one().await;
        }
    }

    /// Run the bridge until `stop` resolves.
    ///
    /// Cancellation happens while waiting for a pulse, never in the middle
    /// of decoding one.
    pub async fn run_until<F: Future>(&mut self, stop: F) -> F::Output {
        match select(stop, self.run()).await {
            Either::First(output) => output,
            Either::Second(never) => never,
        }
    }

    /// Wait for one pulse and process it.
    ///
    /// Returns the published command when the pulse closed a frame.
    pub async fn process_one(&mut self) -> Result<Option<CommandRecord>, PulseError> {
        let width = match self.source.next_pulse().await {
            Ok(width) => width,
            Err(PulseError::Timeout) => return Ok(None),
            Err(e) => return Err(e),
        };

        let available = self.source.is_available();
        match self.decoder.on_pulse(width, available) {
            FrameEvent::Boundary { record, .. } => {
                self.sink.publish(&record);
                Ok(Some(record))
            }
            FrameEvent::Channel { .. } => Ok(None),
        }
    }

    /// Get a reference to the decoder.
    pub fn decoder(&self) -> &FrameDecoder<N> {
        &self.decoder
    }

    /// Snapshot of the `extrx` log group.
    pub fn log(&self) -> ExtRxLog {
        self.decoder.log()
    }

    /// Get a reference to the pulse source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the pulse source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the command sink.
    pub fn sink(&self) -> &C {
        &self.sink
    }

    /// Decompose the bridge into its source, sink and decoder.
    pub fn into_parts(self) -> (S, C, FrameDecoder<N>) {
        (self.source, self.sink, self.decoder)
    }
}
