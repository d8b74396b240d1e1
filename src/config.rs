//! Link configuration.

use std::time::Duration;

/// Configuration for the serial link to the cue controller.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Serial device path (on the Jetson the controller enumerates as
    /// `/dev/ttyACM0`, occasionally `/dev/ttyUSB0`).
    pub port: String,
    /// Baud rate agreed with the firmware.
    pub baud: u32,
    /// Upper bound for a single response line read.
    pub read_timeout: Duration,
    /// Pause between the write and the response drain.
    pub response_delay: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            port: "/dev/ttyACM0".into(),
            baud: 115_200,
            read_timeout: Duration::from_secs(1),
            response_delay: Duration::from_millis(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LinkConfig::default();
        assert_eq!(config.port, "/dev/ttyACM0");
        assert_eq!(config.baud, 115_200);
        assert_eq!(config.read_timeout, Duration::from_secs(1));
        assert_eq!(config.response_delay, Duration::from_millis(100));
    }
}
