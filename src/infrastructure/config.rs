use std::{path::PathBuf, time::Duration};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::catalog::Catalog,
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Cadence of the hero banner when nothing else is configured
pub const DEFAULT_CADENCE_MS: u64 = 5000;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HeroConfig {
    #[serde(default = "default_cadence_ms")]
    pub cadence_ms: u64,
    /// Restart the auto-advance countdown whenever the viewer navigates manually
    #[serde(default)]
    pub reset_on_navigation: bool,
}

fn default_cadence_ms() -> u64 {
    DEFAULT_CADENCE_MS
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            cadence_ms: DEFAULT_CADENCE_MS,
            reset_on_navigation: false,
        }
    }
}

impl HeroConfig {
    pub fn cadence(&self) -> Duration {
        Duration::from_millis(self.cadence_ms)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub catalog: Catalog,
}

impl Config {
    /// The configuration embedded in the binary, without any user file
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load the user configuration (if any) and merge the embedded defaults into it
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config).validated()
    }

    /// Fill in every keybinding and style the user did not set
    pub fn merge_defaults(mut self, default_config: Config) -> Self {
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
        self
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.hero.cadence_ms == 0 {
            return Err(ConfigError::Message(String::from(
                "hero.cadence_ms must be greater than zero",
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::config::keybindings::Action;

    #[test]
    fn test_embedded_config_parses() -> Result<(), ConfigError> {
        let c = Config::embedded()?;
        assert_eq!(
            c.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())]),
            Some(&Action::Quit)
        );
        assert_eq!(
            c.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('1'), KeyModifiers::empty())]),
            Some(&Action::GoToSlide(0))
        );
        assert_eq!(c.hero, HeroConfig::default());
        assert_eq!(c.hero.cadence(), Duration::from_millis(5000));
        assert_eq!(c.catalog, Catalog::default());
        assert!(!c.styles.is_empty());
        Ok(())
    }

    #[test]
    fn test_merge_keeps_user_overrides() -> Result<(), ConfigError> {
        let quit_key = vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())];
        let mut user = Config::default();
        user.keybindings.insert(quit_key.clone(), Action::ToggleMenu);

        let merged = user.merge_defaults(Config::embedded()?);
        assert_eq!(merged.keybindings.get(&quit_key), Some(&Action::ToggleMenu));
        assert_eq!(
            merged
                .keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)]),
            Some(&Action::Quit)
        );
        Ok(())
    }

    #[test]
    fn test_zero_cadence_is_rejected() {
        let cfg = Config {
            hero: HeroConfig {
                cadence_ms: 0,
                reset_on_navigation: false,
            },
            ..Default::default()
        };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn test_hero_section_partial() -> Result<(), json5::Error> {
        let cfg: Config = json5::from_str(r#"{ hero: { reset_on_navigation: true } }"#)?;
        assert_eq!(cfg.hero.cadence_ms, DEFAULT_CADENCE_MS);
        assert!(cfg.hero.reset_on_navigation);
        Ok(())
    }
}
