//! Component collection and management
//!
//! Components are stateless renderers that receive [`AppState`] as a
//! parameter. The layout is a sticky header, the scrollable page and a
//! one-line status bar, with the navigation menu drawn on top.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::layout::{HEADER_HEIGHT, STATUS_BAR_HEIGHT},
};

pub mod header;
pub mod nav_menu;
pub mod page;
pub mod status_bar;

pub use header::HeaderComponent;
pub use nav_menu::NavMenuComponent;
pub use page::PageComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub page: PageComponent,
    pub nav_menu: NavMenuComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let [header, page, status_bar] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(frame.area());

        self.header.view(state, frame, header);
        self.page.view(state, frame, page);
        self.status_bar.view(state, frame, status_bar);
        self.nav_menu.view(state, frame, page);
    }
}
