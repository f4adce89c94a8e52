use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{
    domain::{
        catalog::{
            ABOUT_TEXT, BRAND_NAME, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, COPYRIGHT,
            CUSTOMER_SERVICE_LINKS, LEGAL_LINKS, NEWSLETTER_HEADING, NEWSLETTER_PLACEHOLDER,
            NEWSLETTER_TEXT, QUICK_LINKS, SOCIAL_LINKS,
        },
        layout::{Breakpoint, FOOTER_BOTTOM_HEIGHT, FOOTER_COLUMN_HEIGHT, NEWSLETTER_HEIGHT},
        text::{truncate_to_width, wrap_clamped},
    },
    presentation::{
        config::Styles,
        widgets::grid::{grid_cells, inset, row},
    },
};

/// Newsletter banner, four link columns and the legal bar
pub struct FooterWidget<'a> {
    breakpoint: Breakpoint,
    styles: &'a Styles,
}

impl<'a> FooterWidget<'a> {
    pub fn new(breakpoint: Breakpoint, styles: &'a Styles) -> Self {
        Self { breakpoint, styles }
    }

    fn render_newsletter(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::default(),
            Line::styled(NEWSLETTER_HEADING, self.styles.style("footer.heading")),
            Line::styled(NEWSLETTER_TEXT, self.styles.style("footer.accent")),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!("[ {NEWSLETTER_PLACEHOLDER:<28} ]"),
                    self.styles.style("section.background"),
                ),
                Span::raw(" "),
                Span::styled("[ Subscribe ]", self.styles.style("button")),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn column(&self, heading: &str, body: Vec<Line<'static>>) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled(heading.to_string(), self.styles.style("footer.heading")),
            Line::default(),
        ];
        lines.extend(body);
        lines
    }

    fn link_lines(&self, links: &[&str], width: usize) -> Vec<Line<'static>> {
        links
            .iter()
            .map(|link| Line::raw(truncate_to_width(link, width)))
            .collect()
    }

    fn columns(&self, width: usize) -> [Vec<Line<'static>>; 4] {
        let mut about: Vec<Line<'static>> = wrap_clamped(ABOUT_TEXT, width, 5)
            .into_iter()
            .map(Line::raw)
            .collect();
        about.push(Line::styled(
            truncate_to_width(&SOCIAL_LINKS.join(" · "), width),
            self.styles.style("footer.accent"),
        ));

        let contact = CONTACT_ADDRESS
            .iter()
            .map(|line| format!("⌂ {line}"))
            .chain([format!("☎ {CONTACT_PHONE}"), format!("✉ {CONTACT_EMAIL}")])
            .map(|line| Line::raw(truncate_to_width(&line, width)))
            .collect();

        [
            self.column(BRAND_NAME, about),
            self.column("Quick Links", self.link_lines(&QUICK_LINKS, width)),
            self.column(
                "Customer Service",
                self.link_lines(&CUSTOMER_SERVICE_LINKS, width),
            ),
            self.column("Contact Us", contact),
        ]
    }

    fn render_bottom(&self, area: Rect, buf: &mut Buffer) {
        let rule = "─".repeat(usize::from(area.width));
        buf.set_string(area.x, area.y, rule, self.styles.style("card.border"));

        let bottom = format!("{COPYRIGHT}   {}", LEGAL_LINKS.join(" · "));
        Paragraph::new(Line::raw(truncate_to_width(&bottom, usize::from(area.width))))
            .alignment(Alignment::Center)
            .render(row(area, 1), buf);
    }
}

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.styles.style("footer.background"));

        let newsletter = Rect::new(area.x, area.y, area.width, NEWSLETTER_HEIGHT).intersection(area);
        self.render_newsletter(newsletter, buf);

        let body = Rect::new(
            area.x,
            area.y + NEWSLETTER_HEIGHT,
            area.width,
            area.height
                .saturating_sub(NEWSLETTER_HEIGHT + FOOTER_BOTTOM_HEIGHT),
        )
        .intersection(area);
        let cells = grid_cells(
            inset(body, 1),
            4,
            self.breakpoint.footer_columns(),
            FOOTER_COLUMN_HEIGHT,
        );
        let width = cells
            .first()
            .map(|cell| usize::from(cell.width.saturating_sub(4)))
            .unwrap_or_default();
        for (lines, cell) in self.columns(width).into_iter().zip(cells) {
            Paragraph::new(lines).render(inset(cell, 2), buf);
        }

        let bottom = Rect::new(
            area.x,
            area.bottom().saturating_sub(FOOTER_BOTTOM_HEIGHT),
            area.width,
            FOOTER_BOTTOM_HEIGHT,
        )
        .intersection(area);
        self.render_bottom(bottom, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::test::buffer_text;

    #[test]
    fn test_footer_sections() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 160, 18);
        let mut buf = Buffer::empty(area);

        FooterWidget::new(Breakpoint::Wide, &styles).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains(NEWSLETTER_HEADING));
        assert!(text.contains("[ Subscribe ]"));
        assert!(text.contains("Quick Links"));
        assert!(text.contains("Customer Service"));
        assert!(text.contains(CONTACT_EMAIL));
        assert!(text.contains("Terms of Service"));
        assert!(text.contains(COPYRIGHT));
    }

    #[test]
    fn test_compact_footer_stacks_columns() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 60, 48);
        let mut buf = Buffer::empty(area);

        FooterWidget::new(Breakpoint::Compact, &styles).render(area, &mut buf);

        let text = buffer_text(&buf);
        let quick = text.lines().position(|l| l.contains("Quick Links"));
        let service = text.lines().position(|l| l.contains("Customer Service"));
        assert!(quick < service);
        assert!(text.contains(COPYRIGHT));
    }
}
