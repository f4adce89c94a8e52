//! Page geometry
//!
//! The landing page is taller than a terminal, so it is laid out on a virtual
//! canvas and scrolled. Section heights depend only on the viewport width and
//! on how many entries each catalog list has, which lets the update logic
//! clamp scrolling with exactly the numbers the renderer draws with.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::catalog::Catalog;

/// Rows taken by the sticky header (top bar, brand row, navigation row)
pub const HEADER_HEIGHT: u16 = 5;
pub const STATUS_BAR_HEIGHT: u16 = 1;

pub const HERO_HEIGHT: u16 = 14;
pub const SECTION_TITLE_HEIGHT: u16 = 3;
pub const FEATURE_CARD_HEIGHT: u16 = 4;
pub const CATEGORY_TILE_HEIGHT: u16 = 6;
pub const PRODUCT_CARD_HEIGHT: u16 = 9;
pub const VIEW_ALL_HEIGHT: u16 = 3;
pub const NEWSLETTER_HEIGHT: u16 = 6;
pub const FOOTER_COLUMN_HEIGHT: u16 = 10;
pub const FOOTER_BOTTOM_HEIGHT: u16 = 2;

/// Responsive width class, mirroring the small/medium/large grid steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Breakpoint {
    Compact,
    Medium,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=79 => Breakpoint::Compact,
            80..=119 => Breakpoint::Medium,
            _ => Breakpoint::Wide,
        }
    }

    pub fn is_compact(self) -> bool {
        self == Breakpoint::Compact
    }

    pub fn feature_columns(self) -> usize {
        match self {
            Breakpoint::Compact => 1,
            Breakpoint::Medium => 2,
            Breakpoint::Wide => 4,
        }
    }

    pub fn category_columns(self) -> usize {
        match self {
            Breakpoint::Compact => 1,
            Breakpoint::Medium => 2,
            Breakpoint::Wide => 3,
        }
    }

    pub fn product_columns(self) -> usize {
        self.feature_columns()
    }

    pub fn footer_columns(self) -> usize {
        self.feature_columns()
    }
}

/// Landing page sections in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Section {
    Hero,
    Features,
    Categories,
    Products,
    Footer,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Features,
        Section::Categories,
        Section::Products,
        Section::Footer,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub offset: u16,
    pub height: u16,
}

/// Vertical placement of every section for one viewport width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetrics {
    pub breakpoint: Breakpoint,
    pub spans: Vec<SectionSpan>,
    pub total_height: u16,
}

fn grid_rows(items: usize, columns: usize) -> u16 {
    u16::try_from(items.div_ceil(columns.max(1))).unwrap_or(u16::MAX)
}

impl PageMetrics {
    pub fn compute(width: u16, catalog: &Catalog) -> Self {
        let breakpoint = Breakpoint::from_width(width);

        let mut spans = Vec::with_capacity(Section::ALL.len());
        let mut offset: u16 = 0;
        for section in Section::ALL {
            let height = Self::section_height(section, breakpoint, catalog);
            spans.push(SectionSpan {
                section,
                offset,
                height,
            });
            offset = offset.saturating_add(height);
        }

        Self {
            breakpoint,
            spans,
            total_height: offset,
        }
    }

    fn section_height(section: Section, breakpoint: Breakpoint, catalog: &Catalog) -> u16 {
        match section {
            Section::Hero => HERO_HEIGHT,
            Section::Features => {
                let rows = grid_rows(catalog.features.len(), breakpoint.feature_columns());
                rows.saturating_mul(FEATURE_CARD_HEIGHT).saturating_add(2)
            }
            Section::Categories => {
                let rows = grid_rows(catalog.categories.len(), breakpoint.category_columns());
                rows.saturating_mul(CATEGORY_TILE_HEIGHT)
                    .saturating_add(SECTION_TITLE_HEIGHT + 1)
            }
            Section::Products => {
                let rows = grid_rows(catalog.products.len(), breakpoint.product_columns());
                rows.saturating_mul(PRODUCT_CARD_HEIGHT)
                    .saturating_add(SECTION_TITLE_HEIGHT + VIEW_ALL_HEIGHT)
            }
            Section::Footer => {
                let rows = grid_rows(4, breakpoint.footer_columns());
                rows.saturating_mul(FOOTER_COLUMN_HEIGHT)
                    .saturating_add(NEWSLETTER_HEIGHT + FOOTER_BOTTOM_HEIGHT)
            }
        }
    }

    pub fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans.iter().find(|span| span.section == section).copied()
    }

    pub fn offset_of(&self, section: Section) -> u16 {
        self.span(section).map(|span| span.offset).unwrap_or(0)
    }

    /// Largest scroll offset that still fills a page area `viewport_height` rows tall
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height.saturating_sub(viewport_height)
    }
}

/// Rows left for the scrollable page once header and status bar are placed
pub fn page_viewport_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT)
}
