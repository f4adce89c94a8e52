use serde::{Deserialize, Serialize};

pub mod hero;
pub mod nav;
pub mod page;
pub mod system;

use hero::HeroMsg;
use nav::NavMsg;
use page::PageMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and delegated to the matching sub-state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Hero banner operations (delegated to HeroState)
    Hero(HeroMsg),

    // Navigation menu operations (delegated to NavState)
    Nav(NavMsg),

    // Page scrolling (delegated to PageState)
    Page(PageMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Hero(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}
