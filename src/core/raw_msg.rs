use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw messages from external sources (terminal input, timers, the runner itself)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Hero banner timer fired; carries the generation of the timer that sent it
    RotationTick(u64),

    // System status
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
