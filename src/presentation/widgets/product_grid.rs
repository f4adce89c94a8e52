use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        catalog::{Product, PRODUCT_HEADING, PRODUCT_RATING, PRODUCT_SUBHEADING},
        layout::{Breakpoint, PRODUCT_CARD_HEIGHT, SECTION_TITLE_HEIGHT, VIEW_ALL_HEIGHT},
        text::{truncate_to_width, wrap_clamped},
    },
    presentation::{
        config::Styles,
        widgets::grid::{grid_cells, inset, render_section_title, row},
    },
};

const STARS: &str = "★★★★★";
const ADD_TO_CART: &str = "[ Add to Cart ]";
const VIEW_ALL: &str = "[ View All Products ]";
const FREE_SHIPPING: &str = "Free Shipping Available";

/// "Featured Products" grid
pub struct ProductGridWidget<'a> {
    products: &'a [Product],
    breakpoint: Breakpoint,
    styles: &'a Styles,
}

impl<'a> ProductGridWidget<'a> {
    pub fn new(products: &'a [Product], breakpoint: Breakpoint, styles: &'a Styles) -> Self {
        Self {
            products,
            breakpoint,
            styles,
        }
    }

    /// Discount badge on the left, merchandising tag on the right
    fn badge_line(&self, product: &Product, width: usize) -> Line<'static> {
        let discount = product
            .discount_badge()
            .map(|badge| format!(" {badge} "))
            .unwrap_or_default();
        let tag = format!(" {} ", product.tag);
        let gap = width.saturating_sub(discount.width() + tag.width());
        if gap == 0 {
            return Line::styled(truncate_to_width(&tag, width), self.styles.style("product.tag"));
        }
        Line::from(vec![
            Span::styled(discount, self.styles.style("product.discount")),
            Span::raw(" ".repeat(gap)),
            Span::styled(tag, self.styles.style("product.tag")),
        ])
    }

    fn render_card(&self, product: &Product, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.styles.style("card.border"));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let mut lines = vec![self.badge_line(product, width)];

        let mut name = wrap_clamped(&product.name, width, 2);
        name.resize(2, String::new());
        lines.extend(
            name.into_iter()
                .map(|l| Line::styled(l, self.styles.style("card.title"))),
        );

        lines.push(Line::from(vec![
            Span::styled(product.display_price(), self.styles.style("product.price")),
            Span::raw(" "),
            Span::styled(
                product.display_original_price(),
                self.styles.style("product.original_price"),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(STARS, self.styles.style("product.stars")),
            Span::raw(" "),
            Span::styled(PRODUCT_RATING, self.styles.style("section.subtitle")),
        ]));
        lines.push(Line::styled(
            truncate_to_width(FREE_SHIPPING, width),
            self.styles.style("product.shipping"),
        ));
        lines.push(
            Line::styled(ADD_TO_CART, self.styles.style("button")).alignment(Alignment::Center),
        );

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for ProductGridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.styles.style("section.alt_background"));
        render_section_title(
            area,
            buf,
            PRODUCT_HEADING,
            PRODUCT_SUBHEADING,
            self.styles.style("section.title"),
            self.styles.style("section.subtitle"),
        );

        let grid = Rect::new(
            area.x,
            area.y + SECTION_TITLE_HEIGHT,
            area.width,
            area.height
                .saturating_sub(SECTION_TITLE_HEIGHT + VIEW_ALL_HEIGHT),
        )
        .intersection(area);
        let cells = grid_cells(
            inset(grid, 1),
            self.products.len(),
            self.breakpoint.product_columns(),
            PRODUCT_CARD_HEIGHT,
        );
        for (product, cell) in self.products.iter().zip(cells) {
            self.render_card(product, inset(cell, 1), buf);
        }

        let view_all = row(area, area.height.saturating_sub(VIEW_ALL_HEIGHT - 1));
        Paragraph::new(Line::styled(VIEW_ALL, self.styles.style("button")))
            .alignment(Alignment::Center)
            .render(view_all, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{domain::catalog::default_products, infrastructure::tui::test::buffer_text};

    fn render(width: u16, breakpoint: Breakpoint) -> String {
        let products = default_products();
        let styles = Styles::default();
        let rows = products.len().div_ceil(breakpoint.product_columns()) as u16;
        let height = rows * PRODUCT_CARD_HEIGHT + SECTION_TITLE_HEIGHT + VIEW_ALL_HEIGHT;
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        ProductGridWidget::new(&products, breakpoint, &styles).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_cards_show_prices_and_discount() {
        let text = render(160, Breakpoint::Wide);
        assert!(text.contains(PRODUCT_HEADING));
        assert!(text.contains("27% OFF"));
        assert!(text.contains("Bestseller"));
        assert!(text.contains("₹15,999"));
        assert!(text.contains("₹21,999"));
        assert!(text.contains("Free Shipping Available"));
        assert_eq!(text.matches(ADD_TO_CART).count(), 8);
        assert!(text.contains(VIEW_ALL));
    }

    #[test]
    fn test_compact_layout_stacks_cards() {
        let text = render(60, Breakpoint::Compact);
        assert_eq!(text.matches(ADD_TO_CART).count(), 8);
        assert!(text.contains("₹19,999"));
    }

    #[test]
    fn test_original_price_is_struck_through() {
        let products = default_products();
        let styles = Styles(
            [(
                "product.original_price".to_string(),
                ratatui::style::Style::default()
                    .add_modifier(ratatui::style::Modifier::CROSSED_OUT),
            )]
            .into_iter()
            .collect(),
        );
        let area = Rect::new(0, 0, 40, PRODUCT_CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        let widget = ProductGridWidget::new(&products, Breakpoint::Compact, &styles);
        widget.render_card(&products[0], area, &mut buf);

        // border, badge, two name rows, then the price row
        let price_row = 4;
        let text = buffer_text(&buf);
        let line = text.lines().nth(price_row).unwrap_or_default();
        let start = line.find("₹21,999").map(|byte| line[..byte].chars().count());
        let Some(x) = start else {
            panic!("original price missing in {line:?}");
        };
        let cell = buf.cell((x as u16, price_row as u16));
        assert!(cell
            .map(|c| c.modifier.contains(ratatui::style::Modifier::CROSSED_OUT))
            .unwrap_or(false));
    }
}
