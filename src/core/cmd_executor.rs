use std::fmt;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Requests the executor forwards to whoever owns the rotation timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationControl {
    Reset,
}

/// A command whose channel could not take it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdFailure {
    pub command: &'static str,
    pub error: String,
}

impl fmt::Display for CmdFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to execute {}: {}", self.command, self.error)
    }
}

/// Bridges Elm commands to the channels AppRunner listens on
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
    rotation_sender: Option<mpsc::UnboundedSender<RotationControl>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn set_rotation_sender(&mut self, sender: mpsc::UnboundedSender<RotationControl>) {
        self.rotation_sender = Some(sender);
    }

    /// Execute a single command by forwarding it to the matching channel
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::RequestRender => {
                if let Some(tx) = &self.render_req_sender {
                    // Multiple requests per cycle are coalesced by the runner
                    let _ = tx.send(());
                }
            }

            Cmd::ResetRotation => {
                if let Some(tx) = &self.rotation_sender {
                    tx.send(RotationControl::Reset)?;
                } else {
                    log::warn!("ResetRotation ignored: no rotation timer attached");
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands; failures are logged and returned, not propagated
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<CmdFailure> {
        let mut failures = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => log::trace!("Executed: {}", cmd.name()),
                Err(e) => {
                    let failure = CmdFailure {
                        command: cmd.name(),
                        error: e.to_string(),
                    };
                    log::error!("{failure}");
                    failures.push(failure);
                }
            }
        }

        failures
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_tui_sender: self.tui_sender.is_some(),
            has_render_sender: self.render_req_sender.is_some(),
            has_rotation_sender: self.rotation_sender.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub has_tui_sender: bool,
    pub has_render_sender: bool,
    pub has_rotation_sender: bool,
}
