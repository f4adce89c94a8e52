use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::{
    domain::{
        catalog::{Category, CATEGORY_HEADING, CATEGORY_SUBHEADING},
        layout::{Breakpoint, CATEGORY_TILE_HEIGHT, SECTION_TITLE_HEIGHT},
        text::truncate_to_width,
    },
    presentation::{
        config::Styles,
        widgets::grid::{grid_cells, inset, render_section_title},
    },
};

/// "Shop by Category" tiles
pub struct CategoriesWidget<'a> {
    categories: &'a [Category],
    breakpoint: Breakpoint,
    styles: &'a Styles,
}

impl<'a> CategoriesWidget<'a> {
    pub fn new(categories: &'a [Category], breakpoint: Breakpoint, styles: &'a Styles) -> Self {
        Self {
            categories,
            breakpoint,
            styles,
        }
    }

    fn render_tile(&self, category: &Category, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.styles.style("card.border"));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let lines = vec![
            Line::styled(
                truncate_to_width(&category.name, width),
                self.styles.style("card.title"),
            ),
            Line::styled(
                truncate_to_width(&category.count, width),
                self.styles.style("category.count"),
            ),
            Line::styled(
                truncate_to_width(&format!("▣ {}", category.image), width),
                self.styles.style("hero.caption"),
            ),
            Line::styled("Shop Now →", self.styles.style("category.cta")),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for CategoriesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.styles.style("section.background"));
        render_section_title(
            area,
            buf,
            CATEGORY_HEADING,
            CATEGORY_SUBHEADING,
            self.styles.style("section.title"),
            self.styles.style("section.subtitle"),
        );

        let grid = Rect::new(
            area.x,
            area.y + SECTION_TITLE_HEIGHT,
            area.width,
            area.height.saturating_sub(SECTION_TITLE_HEIGHT + 1),
        )
        .intersection(area);
        let cells = grid_cells(
            inset(grid, 1),
            self.categories.len(),
            self.breakpoint.category_columns(),
            CATEGORY_TILE_HEIGHT,
        );
        for (category, cell) in self.categories.iter().zip(cells) {
            self.render_tile(category, inset(cell, 1), buf);
        }
    }
}
