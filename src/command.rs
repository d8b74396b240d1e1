//! The fixed cue-command set understood by the arm controller.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A command string that is not one of the known cues.
#[derive(Debug, Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

/// Cue commands the controller firmware reacts to.
///
/// Each command makes the firmware play a distinct audio cue; this tool does
/// not interpret them beyond the literal wire string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueCommand {
    /// Boot/acknowledge jingle.
    Ready,
    /// Sequence-start cue.
    StartSeq,
    /// Motion cue.
    Move,
    /// Grip cue.
    Grip,
    /// Warning cue.
    Alert,
    /// Completion fanfare.
    Finish,
}

impl CueCommand {
    /// All commands, in the order the usage text lists them.
    pub const ALL: [CueCommand; 6] = [
        CueCommand::Ready,
        CueCommand::StartSeq,
        CueCommand::Move,
        CueCommand::Grip,
        CueCommand::Alert,
        CueCommand::Finish,
    ];

    /// Command sent when the CLI is invoked with no argument.
    pub const DEFAULT: CueCommand = CueCommand::Ready;

    /// The exact string written to the wire, without the newline terminator.
    pub fn as_str(&self) -> &'static str {
        match self {
            CueCommand::Ready => "ready",
            CueCommand::StartSeq => "start_seq",
            CueCommand::Move => "move",
            CueCommand::Grip => "grip",
            CueCommand::Alert => "alert",
            CueCommand::Finish => "finish",
        }
    }

    /// Comma-separated list of every command string, for usage and error text.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CueCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CueCommand {
    type Err = UnknownCommand;

    // Exact match only: no aliases, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}
