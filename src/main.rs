mod command;
mod config;
mod sender;
mod transport;

use std::env;

use command::CueCommand;
use config::LinkConfig;

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries the Sending/Response lines.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = LinkConfig::default();
    debug!("link config: {:?}", config);

    match env::args().nth(1) {
        Some(arg) => match arg.parse::<CueCommand>() {
            Ok(cmd) => run_send(&config, cmd).await,
            Err(_) => {
                println!("Invalid command. Available: {}", CueCommand::available());
            }
        },
        None => {
            println!("Usage: serial-cue <command>");
            println!("Available commands: {}", CueCommand::available());
            println!();
            println!("Testing '{}' command...", CueCommand::DEFAULT);
            run_send(&config, CueCommand::DEFAULT).await;
        }
    }
}

/// Run one send and report any link failure without failing the process.
async fn run_send(config: &LinkConfig, command: CueCommand) {
    if let Err(e) = sender::send_to_device(config, command).await {
        println!("Error: {}", e);
    }
}
