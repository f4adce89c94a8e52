use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{hero::HeroMsg, nav::NavMsg, page::PageMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Timer fire is an unconditional advance; stale ticks never reach here
        RawMsg::RotationTick(_) => vec![Msg::Hero(HeroMsg::AutoAdvance)],

        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    let menu_open = state.nav.menu_open;
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        Action::NextSlide => vec![Msg::Hero(HeroMsg::Next)],
        Action::PreviousSlide => vec![Msg::Hero(HeroMsg::Previous)],
        Action::GoToSlide(index) => vec![Msg::Hero(HeroMsg::GoTo(*index))],

        // While the menu is open, vertical movement drives its selection
        Action::ScrollUp if menu_open => vec![Msg::Nav(NavMsg::SelectPrevious)],
        Action::ScrollDown if menu_open => vec![Msg::Nav(NavMsg::SelectNext)],
        Action::ScrollUp => vec![Msg::Page(PageMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::Page(PageMsg::ScrollDown)],
        Action::PageUp => vec![Msg::Page(PageMsg::PageUp)],
        Action::PageDown => vec![Msg::Page(PageMsg::PageDown)],
        Action::ScrollToTop => vec![Msg::Page(PageMsg::ScrollToTop)],
        Action::ScrollToBottom => vec![Msg::Page(PageMsg::ScrollToBottom)],

        Action::ToggleMenu => vec![Msg::Nav(NavMsg::ToggleMenu)],
        Action::FollowLink if menu_open => vec![Msg::Nav(NavMsg::Follow)],
        Action::FollowLink => vec![],
        Action::Unselect if menu_open => vec![Msg::Nav(NavMsg::CloseMenu)],
        Action::Unselect => vec![Msg::System(SystemMsg::ClearStatusMessage)],
    }
}
