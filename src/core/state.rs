pub mod hero;
pub mod nav;
pub mod page;
pub mod system;

pub use hero::HeroState;
pub use nav::NavState;
pub use page::PageState;
pub use system::SystemState;

use crate::{
    domain::{
        catalog::Catalog,
        rotator::{RotatorError, SlideRotator},
    },
    infrastructure::config::Config,
};

/// Terminal size assumed until the first resize arrives
pub const INITIAL_SIZE: (u16, u16) = (80, 24);

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub system: SystemState,
    pub hero: HeroState,
    pub nav: NavState,
    pub page: PageState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Build the state around an already mounted rotator
    pub fn new(config: Config, rotator: SlideRotator) -> Self {
        let (width, height) = INITIAL_SIZE;
        Self {
            system: SystemState::default(),
            hero: HeroState::new(rotator, config.hero.reset_on_navigation),
            nav: NavState::new(config.catalog.nav_links.len()),
            page: PageState::new(width, height, &config.catalog),
            config: ConfigState { config },
        }
    }

    /// Build the state and its rotator from the configured slides
    pub fn new_with_config(config: Config) -> Result<Self, RotatorError> {
        let rotator = SlideRotator::new(config.catalog.slides.clone())?;
        Ok(Self::new(config, rotator))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.config.config.catalog
    }
}
