use crate::{
    core::{cmd::Cmd, msg::page::PageMsg},
    domain::{
        catalog::Catalog,
        layout::{page_viewport_height, PageMetrics},
    },
};

/// Rows moved by a single scroll step
pub const SCROLL_STEP: u16 = 3;

/// Scroll position of the page area between header and status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub offset: u16,
    /// Terminal width
    pub width: u16,
    /// Terminal height, including header and status bar
    pub height: u16,
    pub metrics: PageMetrics,
}

impl PageState {
    pub fn new(width: u16, height: u16, catalog: &Catalog) -> Self {
        Self {
            offset: 0,
            width,
            height,
            metrics: PageMetrics::compute(width, catalog),
        }
    }

    pub fn viewport_height(&self) -> u16 {
        page_viewport_height(self.height)
    }

    pub fn max_offset(&self) -> u16 {
        self.metrics.max_scroll(self.viewport_height())
    }

    /// Recompute the layout for a new terminal size and keep the offset in range
    pub fn resize(&mut self, width: u16, height: u16, catalog: &Catalog) {
        self.width = width;
        self.height = height;
        self.metrics = PageMetrics::compute(width, catalog);
        self.offset = self.offset.min(self.max_offset());
    }

    /// How far down the page the viewport is, 0..=100
    pub fn scroll_percent(&self) -> u16 {
        let max = self.max_offset();
        if max == 0 {
            return 100;
        }
        let percent = u32::from(self.offset) * 100 / u32::from(max);
        u16::try_from(percent).unwrap_or(100)
    }

    pub fn update(&mut self, msg: PageMsg) -> Vec<Cmd> {
        let page = self.viewport_height().saturating_sub(1).max(1);
        let target = match msg {
            PageMsg::ScrollUp => self.offset.saturating_sub(SCROLL_STEP),
            PageMsg::ScrollDown => self.offset.saturating_add(SCROLL_STEP),
            PageMsg::PageUp => self.offset.saturating_sub(page),
            PageMsg::PageDown => self.offset.saturating_add(page),
            PageMsg::ScrollToTop => 0,
            PageMsg::ScrollToBottom => u16::MAX,
            PageMsg::JumpTo(section) => self.metrics.offset_of(section),
        };

        let target = target.min(self.max_offset());
        if target == self.offset {
            return vec![];
        }
        self.offset = target;
        vec![Cmd::RequestRender]
    }
}
