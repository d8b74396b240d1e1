//! Serial transport for cue commands
//!
//! This module handles:
//! - The single error taxonomy for every link failure
//! - The `CommandLink` seam between the send routine and the physical port
//! - The tokio-serial implementation of that seam

mod serial;
mod traits;

pub use serial::SerialLink;
pub use traits::CommandLink;

use thiserror::Error;

/// Any failure on the serial link, from open to decode.
///
/// The CLI reports these as one printed line and carries on; nothing in this
/// taxonomy is fatal to the process.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: tokio_serial::Error,
    },

    #[error("write failed: {0}")]
    Write(std::io::Error),

    #[error("read failed: {0}")]
    Read(std::io::Error),

    #[error("response was not valid UTF-8: {0}")]
    Decode(std::string::FromUtf8Error),
}
