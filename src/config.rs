//! Shaper configuration loaded from TOML.
//!
//! Every field has a default, so an empty file is a valid config:
//!
//! ```toml
//! [window]
//! min_words = 40
//! max_words = 50
//!
//! [padding]
//! max_fillers = 10
//! placeholder = "Изображение."
//! fillers = [
//!     "Это придаёт сцене тёплую и уютную атмосферу.",
//!     "Вижу лёгкую ностальгию в этих деталях.",
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::filler::{FillerCatalog, DEFAULT_FILLERS, MAX_FILLER_SENTENCES};
use crate::shaper::{Shaper, DEFAULT_PLACEHOLDER};
use crate::window::{WordWindow, MAX_WORDS, MIN_WORDS};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Word bounds.
    pub window: WindowConfig,
    /// Filler padding settings.
    pub padding: PaddingConfig,
}

/// The `[window]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    /// Minimum words in a shaped description.
    pub min_words: usize,
    /// Selection budget in words.
    pub max_words: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_words: MIN_WORDS,
            max_words: MAX_WORDS,
        }
    }
}

/// The `[padding]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaddingConfig {
    /// Cap on filler sentences appended per description.
    pub max_fillers: usize,
    /// Base text when both inputs are blank.
    pub placeholder: String,
    /// Filler sentences, in cycling order.
    pub fillers: Vec<String>,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            max_fillers: MAX_FILLER_SENTENCES,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            fillers: DEFAULT_FILLERS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TOML is malformed or has unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Config`]
    /// if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The configured word window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] if the bounds are inconsistent.
    pub fn word_window(&self) -> Result<WordWindow> {
        Ok(WordWindow::new(
            self.window.min_words,
            self.window.max_words,
        )?)
    }

    /// The configured filler catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalog`] if no filler sentence is usable.
    pub fn filler_catalog(&self) -> Result<FillerCatalog> {
        Ok(FillerCatalog::new(&self.padding.fillers)?.with_max_fillers(self.padding.max_fillers))
    }

    /// Check every setting without building anything.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.build_shaper().map(|_| ())
    }

    /// Build a [`Shaper`] from this config.
    ///
    /// # Errors
    ///
    /// Returns an error if the window, catalog or placeholder is invalid.
    pub fn build_shaper(&self) -> Result<Shaper> {
        let shaper = Shaper::new()
            .with_window(self.word_window()?)
            .with_catalog(self.filler_catalog()?)
            .with_placeholder(&self.padding.placeholder)?;
        Ok(shaper)
    }
}

impl TryFrom<&Config> for Shaper {
    type Error = Error;

    fn try_from(config: &Config) -> Result<Self> {
        config.build_shaper()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowError;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.build_shaper().unwrap(), Shaper::default());
    }

    #[test]
    fn test_partial_tables() {
        let config = Config::from_toml_str("[window]\nmin_words = 20\n").unwrap();
        assert_eq!(config.window.min_words, 20);
        assert_eq!(config.window.max_words, MAX_WORDS);
        assert_eq!(config.padding, PaddingConfig::default());
    }

    #[test]
    fn test_custom_padding() {
        let config = Config::from_toml_str(
            r#"
            [padding]
            max_fillers = 3
            placeholder = "Фото."
            fillers = ["Свет.", "Тень."]
            "#,
        )
        .unwrap();

        let shaper = config.build_shaper().unwrap();
        assert_eq!(shaper.placeholder(), "Фото.");
        assert_eq!(shaper.catalog().sentences(), ["Свет.", "Тень."]);
        assert_eq!(shaper.catalog().max_fillers(), 3);
    }

    #[test]
    fn test_invalid_window_rejected() {
        let config = Config::from_toml_str("[window]\nmin_words = 60\nmax_words = 50\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidWindow(WindowError::MaxLessThanMin { min: 60, max: 50 }))
        ));
    }

    #[test]
    fn test_empty_fillers_rejected() {
        let config = Config::from_toml_str("[padding]\nfillers = []\n").unwrap();
        assert!(matches!(config.validate(), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_blank_placeholder_rejected() {
        let config = Config::from_toml_str("[padding]\nplaceholder = \" \"\n").unwrap();
        assert!(matches!(config.validate(), Err(Error::EmptyPlaceholder)));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(matches!(
            Config::from_toml_str("[window]\nmax = 3\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/lathe.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
