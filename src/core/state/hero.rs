use crate::{
    core::{cmd::Cmd, msg::hero::HeroMsg},
    domain::rotator::{RotatorError, SlideRotator},
};

/// Hero banner state: the rotator plus how manual navigation treats the timer
#[derive(Debug, Clone)]
pub struct HeroState {
    pub rotator: SlideRotator,
    pub reset_on_navigation: bool,
}

impl HeroState {
    pub fn new(rotator: SlideRotator, reset_on_navigation: bool) -> Self {
        Self {
            rotator,
            reset_on_navigation,
        }
    }

    /// Apply a hero message; a rejected jump leaves the rotator untouched
    pub fn update(&mut self, msg: HeroMsg) -> Result<Vec<Cmd>, RotatorError> {
        let manual = msg.is_manual();
        match msg {
            HeroMsg::AutoAdvance | HeroMsg::Next => self.rotator.next(),
            HeroMsg::Previous => self.rotator.previous(),
            HeroMsg::GoTo(index) => self.rotator.go_to(index)?,
        }

        let mut cmds = Vec::with_capacity(2);
        if manual && self.reset_on_navigation {
            cmds.push(Cmd::ResetRotation);
        }
        cmds.push(Cmd::RequestRender);
        Ok(cmds)
    }
}
