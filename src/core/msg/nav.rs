use serde::{Deserialize, Serialize};

/// Messages specific to NavState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    ToggleMenu,
    CloseMenu,
    SelectNext,
    SelectPrevious,
    /// Follow the selected link; handled in `update` because it also scrolls the page
    Follow,
}
