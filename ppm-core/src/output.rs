//! Command sink trait.

use crate::types::CommandRecord;

/// Destination for decoded commands (command arbitration).
///
/// Each call replaces the previously published command; sinks do not
/// queue. Publishing is synchronous and cannot fail. A sink that is read
/// from another execution context handles its own synchronization.
pub trait CommandSink {
    /// Publish the command decoded from the latest frame.
    fn publish(&mut self, record: &CommandRecord);
}

