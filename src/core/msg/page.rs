use serde::{Deserialize, Serialize};

use crate::domain::layout::Section;

/// Messages specific to PageState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMsg {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    JumpTo(Section),
}
