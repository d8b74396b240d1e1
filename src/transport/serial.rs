//! tokio-serial implementation of the command link.

use std::time::Duration;

use async_trait::async_trait;
use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::time;
use tokio_serial::{SerialPort, SerialPortBuilderExt, SerialStream};
use tracing::debug;

use super::{CommandLink, TransportError};
use crate::config::LinkConfig;

/// An open serial connection to the cue controller.
///
/// Dropping the link closes the port, so holding it in a scope is enough to
/// guarantee release on every exit path.
pub struct SerialLink {
    stream: SerialStream,
    read_timeout: Duration,
    buf: BytesMut,
}

impl SerialLink {
    /// Open the port described by `config`. Must run inside the tokio
    /// runtime; the stream registers with the reactor on creation.
    pub fn open(config: &LinkConfig) -> Result<Self, TransportError> {
        let stream = tokio_serial::new(&config.port, config.baud)
            .timeout(config.read_timeout)
            .open_native_async()
            .map_err(|source| TransportError::Open {
                path: config.port.clone(),
                source,
            })?;
        debug!("opened {} at {} baud", config.port, config.baud);

        Ok(Self {
            stream,
            read_timeout: config.read_timeout,
            buf: BytesMut::with_capacity(256),
        })
    }

    /// Split the first `len` buffered bytes off as a decoded line.
    fn take_line(&mut self, len: usize) -> Result<String, TransportError> {
        let bytes = self.buf.split_to(len);
        String::from_utf8(bytes.to_vec()).map_err(TransportError::Decode)
    }
}

#[async_trait]
impl CommandLink for SerialLink {
    async fn send_line(&mut self, line: &str) -> Result<(), TransportError> {
        let mut frame = BytesMut::with_capacity(line.len() + 1);
        frame.put(line.as_bytes());
        frame.put_u8(b'\n');

        self.stream
            .write_all(&frame)
            .await
            .map_err(TransportError::Write)?;
        self.stream.flush().await.map_err(TransportError::Write)?;
        debug!("wrote {} bytes", frame.len());
        Ok(())
    }

    fn has_pending(&mut self) -> Result<bool, TransportError> {
        if !self.buf.is_empty() {
            return Ok(true);
        }
        let waiting = self
            .stream
            .bytes_to_read()
            .map_err(|e| TransportError::Read(e.into()))?;
        Ok(waiting > 0)
    }

    async fn read_line(&mut self) -> Result<String, TransportError> {
        loop {
            if let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
                return self.take_line(pos + 1);
            }

            let mut chunk = [0u8; 256];
            match time::timeout(self.read_timeout, self.stream.read(&mut chunk)).await {
                // Port went away mid-line; hand back whatever arrived.
                Ok(Ok(0)) => return self.take_line(self.buf.len()),
                Ok(Ok(n)) => self.buf.extend_from_slice(&chunk[..n]),
                Ok(Err(e)) => return Err(TransportError::Read(e)),
                // No full line within the window. The firmware terminates
                // every cue ack, so a bare fragment is still worth showing.
                Err(_) => return self.take_line(self.buf.len()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_missing_device_fails() {
        let config = LinkConfig {
            port: "/dev/serial-cue-no-such-device".into(),
            ..Default::default()
        };

        let err = match SerialLink::open(&config) {
            Ok(_) => panic!("open should fail for a missing device"),
            Err(e) => e,
        };
        match err {
            TransportError::Open { path, .. } => assert_eq!(path, config.port),
            other => panic!("unexpected error: {}", other),
        }
    }
}
