use crate::{
    core::{
        cmd::Cmd,
        msg::{hero::HeroMsg, nav::NavMsg, page::PageMsg, system::SystemMsg, Msg},
        state::AppState,
    },
    domain::layout::Section,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Resizing also re-lays out the page, which needs the catalog
        Msg::System(SystemMsg::Resize(width, height)) => {
            let mut commands = state.system.update(SystemMsg::Resize(width, height));
            let catalog = state.config.config.catalog.clone();
            state.page.resize(width, height, &catalog);
            commands.push(Cmd::RequestRender);
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Hero messages (delegated to HeroState); a rejected jump becomes a status error
        Msg::Hero(hero_msg) => {
            let commands = update_hero(hero_msg, &mut state);
            (state, commands)
        }

        Msg::Nav(NavMsg::Follow) => {
            let commands = follow_selected_link(&mut state);
            (state, commands)
        }

        // Navigation menu (delegated to NavState)
        Msg::Nav(nav_msg) => {
            let commands = state.nav.update(nav_msg);
            (state, commands)
        }

        // Page scrolling (delegated to PageState)
        Msg::Page(page_msg) => {
            let commands = state.page.update(page_msg);
            (state, commands)
        }
    }
}

fn update_hero(msg: HeroMsg, state: &mut AppState) -> Vec<Cmd> {
    match state.hero.update(msg) {
        Ok(commands) => commands,
        Err(e) => state.system.update(SystemMsg::ShowError(e.to_string())),
    }
}

/// Close the menu, scroll to the category tiles and report the chosen link
fn follow_selected_link(state: &mut AppState) -> Vec<Cmd> {
    let Some(index) = state.nav.selected_link() else {
        return vec![];
    };
    let Some(link) = state.catalog().nav_links.get(index).cloned() else {
        return vec![];
    };

    let mut commands = state.nav.update(NavMsg::Follow);
    commands.extend(state.page.update(PageMsg::JumpTo(Section::Categories)));
    commands.extend(state.system.update(SystemMsg::UpdateStatusMessage(format!(
        "Browsing {} ({})",
        link.name, link.href
    ))));
    commands.push(Cmd::LogInfo {
        message: format!("Followed navigation link {}", link.href),
    });
    commands
}
