//! Sticky storefront header
//!
//! Five rows: contact/shipping top bar, a spacer, the brand row with search
//! and account affordances, the navigation row and a bottom rule.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        catalog::{
            BRAND_NAME, CONTACT_EMAIL, CONTACT_PHONE, CURRENCIES, SEARCH_PLACEHOLDER,
            SHIPPING_BANNER,
        },
        layout::Breakpoint,
        text::truncate_to_width,
    },
    presentation::config::Styles,
};

const MENU_BUTTON: &str = "[☰ Menu]";
const MENU_BUTTON_OPEN: &str = "[✕ Close]";
const ACCOUNT_ICONS: &str = "♡ Wishlist  ◯ Account  ⊕ Cart (0)";

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let breakpoint = state.page.metrics.breakpoint;

        let [top_bar, _, brand_row, nav_row, rule] =
            Layout::vertical([Constraint::Length(1); 5]).areas(area);

        frame.render_widget(Clear, area);
        frame.render_widget(self.top_bar(breakpoint, styles, top_bar.width), top_bar);
        self.render_brand_row(breakpoint, styles, frame, brand_row);
        frame.render_widget(self.nav_row(state, breakpoint, styles), nav_row);
        frame.render_widget(
            Block::new()
                .borders(Borders::TOP)
                .border_style(styles.style("card.border")),
            rule,
        );
    }

    fn top_bar(&self, breakpoint: Breakpoint, styles: &Styles, width: u16) -> Paragraph<'static> {
        let text = if breakpoint.is_compact() {
            SHIPPING_BANNER.to_string()
        } else {
            format!(
                "☎ {CONTACT_PHONE}  ✉ {CONTACT_EMAIL}  │  {SHIPPING_BANNER}  │  {}",
                CURRENCIES.join(" ")
            )
        };
        Paragraph::new(truncate_to_width(&text, usize::from(width)))
            .alignment(Alignment::Center)
            .style(styles.style("header.top_bar"))
    }

    fn render_brand_row(
        &self,
        breakpoint: Breakpoint,
        styles: &Styles,
        frame: &mut Frame,
        area: Rect,
    ) {
        let brand = Span::styled(format!(" {BRAND_NAME}"), styles.style("header.brand"));
        frame.render_widget(Paragraph::new(brand), area);

        if breakpoint.is_compact() {
            return;
        }

        let [_, search, icons] = Layout::horizontal([
            Constraint::Length(20),
            Constraint::Fill(1),
            Constraint::Length(u16::try_from(ACCOUNT_ICONS.chars().count() + 2).unwrap_or(0)),
        ])
        .areas(area);

        let search_text = format!("[ ⌕ {SEARCH_PLACEHOLDER} ]");
        frame.render_widget(
            Paragraph::new(truncate_to_width(&search_text, usize::from(search.width)))
                .alignment(Alignment::Center)
                .style(styles.style("header.search")),
            search,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(ACCOUNT_ICONS, styles.style("header.badge")))
                .alignment(Alignment::Right),
            icons,
        );
    }

    fn nav_row(&self, state: &AppState, breakpoint: Breakpoint, styles: &Styles) -> Paragraph<'static> {
        if breakpoint.is_compact() {
            let label = if state.nav.menu_open {
                MENU_BUTTON_OPEN
            } else {
                MENU_BUTTON
            };
            return Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(label, styles.style("header.nav_active")),
            ]));
        }

        let mut spans = Vec::new();
        for (i, link) in state.catalog().nav_links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(link.name.clone(), styles.style("header.nav")));
        }
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}
