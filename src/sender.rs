//! The send operation: announce, write, pause, drain responses.

use std::time::Duration;

use tokio::time;

use crate::command::CueCommand;
use crate::config::LinkConfig;
use crate::transport::{CommandLink, SerialLink, TransportError};

/// Write `command` over `link`, wait `response_delay`, then print every
/// response line that is already available.
///
/// The drain stops as soon as the link reports no pending input and reads
/// nothing if the device stayed silent. A device that streams without pause
/// keeps the loop alive; the firmware is only expected to emit a short ack.
pub async fn send(
    link: &mut dyn CommandLink,
    command: CueCommand,
    response_delay: Duration,
) -> Result<(), TransportError> {
    println!("Sending command: {}", command);
    link.send_line(command.as_str()).await?;

    // Give the firmware a moment to answer before polling.
    time::sleep(response_delay).await;

    while link.has_pending()? {
        let line = link.read_line().await?;
        println!("Response: {}", line.trim_end());
    }
    Ok(())
}

/// Open the configured port, run [`send`] over it, and close the port again.
///
/// The link lives only inside this call; dropping it releases the port on
/// every path, error or not. Callers are expected to have validated the
/// command already.
pub async fn send_to_device(
    config: &LinkConfig,
    command: CueCommand,
) -> Result<(), TransportError> {
    let mut link = SerialLink::open(config)?;
    send(&mut link, command, config.response_delay).await
}
