//! One-line status bar
//!
//! Shows the status message (or key hints when there is none) on the left and
//! the slide position and scroll percentage on the right.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::text::truncate_to_width};

pub const KEY_HINTS: &str = "h/l slides · 1-9 jump · j/k scroll · m menu · q quit";

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn position_text(state: &AppState) -> String {
        format!(
            "Slide {}/{} · {}%",
            state.hero.rotator.active_index() + 1,
            state.hero.rotator.len(),
            state.page.scroll_percent()
        )
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let position = Self::position_text(state);
        let position_width = u16::try_from(position.chars().count() + 1).unwrap_or(0);

        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(position_width)])
                .areas(area);

        frame.render_widget(Clear, area);
        frame.render_widget(Block::new().style(styles.style("status_bar")), area);

        let (text, style) = match state.system.status_message.as_deref() {
            Some(message) => (message, styles.style("status_bar.message")),
            None => (KEY_HINTS, styles.style("status_bar")),
        };
        frame.render_widget(
            Paragraph::new(truncate_to_width(&format!(" {text}"), usize::from(left.width)))
                .style(style),
            left,
        );
        frame.render_widget(
            Paragraph::new(position).alignment(Alignment::Right),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{
        core::msg::{hero::HeroMsg, system::SystemMsg},
        infrastructure::{config::Config, tui::test::buffer_text},
    };

    fn render(state: &AppState) -> Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 1))?;
        terminal.draw(|f| StatusBarComponent::new().view(state, f, f.area()))?;
        Ok(buffer_text(terminal.backend().buffer()))
    }

    #[test]
    fn test_hints_and_position() -> Result<()> {
        let state = AppState::new_with_config(Config::default())?;
        let text = render(&state)?;
        assert!(text.contains(KEY_HINTS));
        assert!(text.trim_end().ends_with("Slide 1/4 · 0%"));
        Ok(())
    }

    #[test]
    fn test_message_replaces_hints() -> Result<()> {
        let mut state = AppState::new_with_config(Config::default())?;
        state.hero.update(HeroMsg::Next)?;
        state
            .system
            .update(SystemMsg::UpdateStatusMessage("Browsing Sale (#sale)".into()));

        let text = render(&state)?;
        assert!(text.contains("Browsing Sale (#sale)"));
        assert!(!text.contains(KEY_HINTS));
        assert_eq!(StatusBarComponent::position_text(&state), "Slide 2/4 · 0%");
        Ok(())
    }
}
