//! Navigation menu overlay, drawn under the header while the menu is open

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::text::truncate_to_width};

const MENU_WIDTH: u16 = 34;

#[derive(Debug, Clone, Default)]
pub struct NavMenuComponent;

impl NavMenuComponent {
    pub fn new() -> Self {
        Self
    }

    /// Popup placed at the top-left corner of `area`, clipped to it
    pub fn popup_area(link_count: usize, area: Rect) -> Rect {
        let height = u16::try_from(link_count)
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        Rect::new(area.x + 1, area.y, MENU_WIDTH, height).intersection(area)
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.nav.menu_open {
            return;
        }
        let styles = &state.config.config.styles;
        let links = &state.catalog().nav_links;
        let popup = Self::popup_area(links.len(), area);
        if popup.is_empty() {
            return;
        }

        let block = Block::bordered()
            .title(" Menu ")
            .border_type(BorderType::Rounded)
            .border_style(styles.style("menu.border"));
        let width = usize::from(block.inner(popup).width.saturating_sub(2));

        let lines: Vec<Line> = links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let name = truncate_to_width(&link.name, width);
                if i == state.nav.selected {
                    Line::styled(format!("› {name}"), styles.style("menu.selected"))
                } else {
                    Line::raw(format!("  {name}"))
                }
            })
            .collect();

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}
