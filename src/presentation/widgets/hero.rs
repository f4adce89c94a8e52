use ratatui::{
    buffer::Buffer,
    layout::{self, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{
    domain::{
        rotator::SlideRotator,
        slide::{Alignment, Slide},
        text::{truncate_to_width, wrap_clamped},
    },
    presentation::{config::Styles, widgets::grid::row},
};

const SIDE_MARGIN: u16 = 4;
const MAX_CONTENT_WIDTH: u16 = 64;
const ACTIVE_DOT: &str = "━━━";
const DOT: &str = "━";

/// Rotating hero banner showing the rotator's current slide
pub struct HeroWidget<'a> {
    rotator: &'a SlideRotator,
    styles: &'a Styles,
}

impl<'a> HeroWidget<'a> {
    pub fn new(rotator: &'a SlideRotator, styles: &'a Styles) -> Self {
        Self { rotator, styles }
    }

    /// Content block placed according to the slide alignment
    fn content_area(area: Rect, alignment: Alignment) -> Rect {
        let available = area.width.saturating_sub(SIDE_MARGIN * 2);
        let width = available.min(MAX_CONTENT_WIDTH);
        let x = match alignment {
            Alignment::Left => area.x + SIDE_MARGIN.min(area.width),
            Alignment::Center => area.x + (area.width - width) / 2,
            Alignment::Right => area.right().saturating_sub(SIDE_MARGIN + width),
        };
        Rect::new(x, area.y, width, area.height)
    }

    fn text_alignment(alignment: Alignment) -> layout::Alignment {
        match alignment {
            Alignment::Left => layout::Alignment::Left,
            Alignment::Center => layout::Alignment::Center,
            Alignment::Right => layout::Alignment::Right,
        }
    }

    fn content_lines(&self, slide: &Slide, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled(
                truncate_to_width(&slide.title, width),
                self.styles.style("hero.title"),
            ),
            Line::default(),
        ];
        lines.extend(
            wrap_clamped(&slide.subtitle, width, 2)
                .into_iter()
                .map(|l| Line::styled(l, self.styles.style("hero.subtitle"))),
        );
        lines.extend(
            wrap_clamped(&slide.description, width, 2)
                .into_iter()
                .map(|l| Line::styled(l, self.styles.style("hero.description"))),
        );
        lines.push(Line::default());
        lines.push(Line::styled(
            truncate_to_width(&format!(" {} ", slide.cta_label()), width),
            self.styles.style("hero.cta"),
        ));
        lines
    }

    fn dots(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.rotator.len() * 2);
        for i in 0..self.rotator.len() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            if i == self.rotator.active_index() {
                spans.push(Span::styled(ACTIVE_DOT, self.styles.style("hero.dot_active")));
            } else {
                spans.push(Span::styled(DOT, self.styles.style("hero.dot")));
            }
        }
        Line::from(spans)
    }
}

impl Widget for HeroWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.styles.style("hero.background"));

        let slide = self.rotator.current();
        // rows: 1..=10 content, 11 dots, 12 caption
        let body = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(4));
        let content = Self::content_area(body, slide.alignment);
        let lines = self.content_lines(slide, usize::from(content.width));
        let top_pad = body
            .height
            .saturating_sub(u16::try_from(lines.len()).unwrap_or(u16::MAX))
            / 2;
        let content = Rect::new(
            content.x,
            content.y + top_pad,
            content.width,
            content.height.saturating_sub(top_pad),
        );
        Paragraph::new(lines)
            .alignment(Self::text_alignment(slide.alignment))
            .render(content, buf);

        // Previous / next arrows on the vertical middle
        if area.width > 4 {
            let middle = area.y + area.height / 2;
            let arrow = self.styles.style("hero.arrow");
            buf.set_string(area.x + 1, middle, "‹", arrow);
            buf.set_string(area.right() - 2, middle, "›", arrow);
        }

        Paragraph::new(self.dots())
            .alignment(layout::Alignment::Center)
            .render(row(area, area.height.saturating_sub(3)), buf);

        let caption = format!("▣ {}", slide.image);
        Paragraph::new(Line::styled(
            truncate_to_width(&caption, usize::from(area.width.saturating_sub(4))),
            self.styles.style("hero.caption"),
        ))
        .render(
            Rect::new(
                area.x + area.width.min(2),
                area.y + area.height.saturating_sub(2),
                area.width.saturating_sub(4),
                1,
            )
            .intersection(area),
            buf,
        );
    }
}
