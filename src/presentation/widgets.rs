//! Reusable storefront widgets
//!
//! Each landing page section is a plain ratatui [`Widget`](ratatui::widgets::Widget)
//! that fills exactly the rows [`PageMetrics`](crate::domain::layout::PageMetrics)
//! assigns to it.

pub mod categories;
pub mod features;
pub mod footer;
pub mod grid;
pub mod hero;
pub mod product_grid;

pub use categories::CategoriesWidget;
pub use features::FeaturesWidget;
pub use footer::FooterWidget;
pub use hero::HeroWidget;
pub use product_grid::ProductGridWidget;
