use serde::{Deserialize, Serialize};

/// Messages specific to HeroState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroMsg {
    /// Timer fire; always advances by one slide
    AutoAdvance,
    Next,
    Previous,
    GoTo(usize),
}

impl HeroMsg {
    /// Timer fires arrive every cadence and would flood debug logs
    pub fn is_frequent(&self) -> bool {
        matches!(self, HeroMsg::AutoAdvance)
    }

    /// Whether the viewer asked for this move
    pub fn is_manual(&self) -> bool {
        !matches!(self, HeroMsg::AutoAdvance)
    }
}
