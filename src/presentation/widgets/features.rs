use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{
    domain::{
        catalog::Feature,
        layout::{Breakpoint, FEATURE_CARD_HEIGHT},
        text::{truncate_to_width, wrap_clamped},
    },
    presentation::{
        config::Styles,
        widgets::grid::{grid_cells, inset},
    },
};

/// Strip of selling points below the hero banner
pub struct FeaturesWidget<'a> {
    features: &'a [Feature],
    breakpoint: Breakpoint,
    styles: &'a Styles,
}

impl<'a> FeaturesWidget<'a> {
    pub fn new(features: &'a [Feature], breakpoint: Breakpoint, styles: &'a Styles) -> Self {
        Self {
            features,
            breakpoint,
            styles,
        }
    }
}

impl Widget for FeaturesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.styles.style("section.alt_background"));
        let grid = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(2))
            .intersection(area);

        let cells = grid_cells(
            grid,
            self.features.len(),
            self.breakpoint.feature_columns(),
            FEATURE_CARD_HEIGHT,
        );
        for (feature, cell) in self.features.iter().zip(cells) {
            let cell = inset(cell, 1);
            let width = usize::from(cell.width);
            let mut lines = vec![Line::from(vec![
                Span::styled(feature.icon.clone(), self.styles.style("feature.icon")),
                Span::raw(" "),
                Span::styled(
                    truncate_to_width(&feature.title, width.saturating_sub(2)),
                    self.styles.style("card.title"),
                ),
            ])];
            lines.extend(
                wrap_clamped(&feature.description, width, 2)
                    .into_iter()
                    .map(|l| Line::styled(l, self.styles.style("section.subtitle"))),
            );
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            catalog::{default_features, Catalog},
            layout::{PageMetrics, Section},
        },
        infrastructure::tui::test::buffer_text,
    };

    #[test]
    fn test_all_features_visible_on_wide_layout() {
        let features = default_features();
        let styles = Styles::default();
        let metrics = PageMetrics::compute(160, &Catalog::default());
        let height = metrics.span(Section::Features).map(|s| s.height).unwrap_or(0);
        let area = Rect::new(0, 0, 160, height);
        let mut buf = Buffer::empty(area);

        FeaturesWidget::new(&features, Breakpoint::Wide, &styles).render(area, &mut buf);

        let text = buffer_text(&buf);
        for feature in &features {
            assert!(text.contains(&feature.title), "missing {}", feature.title);
        }
        assert!(text.contains("7-day hassle-free return policy"));
    }
}
