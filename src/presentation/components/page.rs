//! Scrollable landing page
//!
//! Each section is drawn into its own offscreen buffer, sized by
//! [`PageMetrics`](crate::domain::layout::PageMetrics), and only the rows
//! inside the viewport are copied onto the frame.

use ratatui::{buffer::Buffer, prelude::*};

use crate::{
    core::state::AppState,
    domain::layout::{Section, SectionSpan},
    presentation::widgets::{
        CategoriesWidget, FeaturesWidget, FooterWidget, HeroWidget, ProductGridWidget,
    },
};

#[derive(Debug, Clone, Default)]
pub struct PageComponent;

impl PageComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        self.render(state, area, frame.buffer_mut());
    }

    /// Draw the part of the page starting at `state.page.offset` into `area`
    pub fn render(&self, state: &AppState, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let top = state.page.offset;
        let bottom = top.saturating_add(area.height);

        for span in &state.page.metrics.spans {
            let span_bottom = span.offset.saturating_add(span.height);
            if span_bottom <= top || span.offset >= bottom || span.height == 0 {
                continue;
            }

            let section_area = Rect::new(0, 0, area.width, span.height);
            let mut section_buf = Buffer::empty(section_area);
            self.render_section(state, span, section_area, &mut section_buf);

            for y in span.offset.max(top)..span_bottom.min(bottom) {
                copy_row(&section_buf, y - span.offset, buf, area, y - top);
            }
        }
    }

    fn render_section(&self, state: &AppState, span: &SectionSpan, area: Rect, buf: &mut Buffer) {
        let styles = &state.config.config.styles;
        let catalog = state.catalog();
        let breakpoint = state.page.metrics.breakpoint;

        match span.section {
            Section::Hero => HeroWidget::new(&state.hero.rotator, styles).render(area, buf),
            Section::Features => {
                FeaturesWidget::new(&catalog.features, breakpoint, styles).render(area, buf)
            }
            Section::Categories => {
                CategoriesWidget::new(&catalog.categories, breakpoint, styles).render(area, buf)
            }
            Section::Products => {
                ProductGridWidget::new(&catalog.products, breakpoint, styles).render(area, buf)
            }
            Section::Footer => FooterWidget::new(breakpoint, styles).render(area, buf),
        }
    }
}

fn copy_row(src: &Buffer, src_y: u16, dst: &mut Buffer, area: Rect, row: u16) {
    for x in 0..area.width {
        let Some(cell) = src.cell((x, src_y)) else {
            continue;
        };
        if let Some(target) = dst.cell_mut((area.x + x, area.y + row)) {
            *target = cell.clone();
        }
    }
}
