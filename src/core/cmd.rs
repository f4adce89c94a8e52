use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render requests travel through Cmd::RequestRender and are coalesced by AppRunner.
    Resize { width: u16, height: u16 },
}

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via the render request channel and coalesced by AppRunner
    RequestRender,

    /// Restart the hero banner countdown
    ResetRotation,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            Cmd::Tui(..) | Cmd::RequestRender => 0,
            Cmd::ResetRotation => 1,
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),
            Cmd::None => 255,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::RequestRender => "RequestRender",
            Cmd::ResetRotation => "ResetRotation",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::Batch(_) => "Batch",
            Cmd::None => "None",
        }
    }
}
