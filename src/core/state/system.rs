use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

/// Status text may come from errors or configuration; keep escape sequences off the screen
fn sanitize(message: &str) -> String {
    strip_ansi_escapes::strip_str(message)
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(sanitize(&message));
                vec![Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                if self.status_message.take().is_some() {
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }

            SystemMsg::ShowError(error) => {
                let message = format!("Error: {}", sanitize(&error));
                self.status_message = Some(message.clone());
                vec![Cmd::LogError { message }, Cmd::RequestRender]
            }
        }
    }
}
