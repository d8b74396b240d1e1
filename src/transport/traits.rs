//! Link trait abstraction between the send routine and the physical port

use async_trait::async_trait;

use super::TransportError;

/// A line-oriented command link to the cue controller.
#[async_trait]
pub trait CommandLink {
    /// Write the UTF-8 bytes of `line` followed by a single `\n`, then flush.
    async fn send_line(&mut self, line: &str) -> Result<(), TransportError>;

    /// Whether unread input is immediately available. Never blocks.
    fn has_pending(&mut self) -> Result<bool, TransportError>;

    /// Read the next line, bounded by the link's read timeout.
    ///
    /// On timeout the bytes received so far are returned as-is, newline or
    /// not. The terminator is kept; callers strip trailing whitespace.
    async fn read_line(&mut self) -> Result<String, TransportError>;
}
