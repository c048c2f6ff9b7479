//! `tessera-theme.toml` loading.
//!
//! ```toml
//! seed = "#006494"
//! variant = "TONAL_SPOT"
//! contrast_level = 0.0
//! mode = "light"
//! projection = "role-direct"
//! spec_version = "2021"
//!
//! [[custom_colors]]
//! name = "brand"
//! value = "#ff0000"
//! blend = true
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    color::ColorInput,
    engine::{MaterialPaletteEngine, SpecVersion},
    error::ThemeError,
    store::StoreOptions,
    theme::{ContrastLevel, CustomColor, MaterialTheme, ThemeBuilder, ThemeMode},
    token::Projection,
    variant::Variant,
};

/// Default file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "tessera-theme.toml";

/// Errors raised while loading a theme config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unexpected keys.
    #[error("failed to parse theme config")]
    Parse(#[from] toml::de::Error),
    /// The config parsed but describes an invalid theme.
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Contents of a `tessera-theme.toml` file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Seed color, hex string or integer.
    pub seed: ColorInput,
    /// Palette strategy. Unknown names fall back to tonal spot.
    #[serde(default)]
    pub variant: Variant,
    /// Contrast level in `[-1.0, 1.0]`.
    #[serde(default)]
    pub contrast_level: f64,
    /// Initial mode.
    #[serde(default)]
    pub mode: ThemeMode,
    /// Token projection policy.
    #[serde(default)]
    pub projection: Projection,
    /// Color spec revision for the palette engine.
    #[serde(default)]
    pub spec_version: SpecVersion,
    /// Custom colors, in definition order.
    #[serde(default)]
    pub custom_colors: Vec<CustomColorConfig>,
}

/// One `[[custom_colors]]` entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomColorConfig {
    /// Name of the color.
    pub name: String,
    /// Base value, hex string or integer.
    pub value: ColorInput,
    /// Whether to harmonize the value toward the seed.
    #[serde(default)]
    pub blend: bool,
}

impl From<&CustomColorConfig> for CustomColor {
    fn from(config: &CustomColorConfig) -> Self {
        CustomColor::new(config.name.clone(), config.value.clone(), config.blend)
    }
}

impl ThemeConfig {
    /// Creates a config with default settings for `seed`.
    pub fn new(seed: impl Into<ColorInput>) -> Self {
        Self {
            seed: seed.into(),
            variant: Variant::default(),
            contrast_level: ContrastLevel::STANDARD,
            mode: ThemeMode::default(),
            projection: Projection::default(),
            spec_version: SpecVersion::default(),
            custom_colors: Vec::new(),
        }
    }

    /// Reads and parses a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses config contents.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Custom color definitions for the builder or the store.
    pub fn custom_colors(&self) -> Vec<CustomColor> {
        self.custom_colors.iter().map(CustomColor::from).collect()
    }

    /// The palette engine selected by `spec_version`.
    pub fn engine(&self) -> MaterialPaletteEngine {
        MaterialPaletteEngine::new(self.spec_version)
    }

    /// Builds the described theme.
    pub fn build_theme(&self) -> Result<MaterialTheme, ConfigError> {
        let theme = ThemeBuilder::new(self.engine()).build(
            self.seed.clone(),
            self.variant,
            self.contrast_level,
            &self.custom_colors(),
        )?;
        Ok(theme)
    }

    /// Initial store inputs. The seed is applied separately through
    /// [`crate::store::ThemeStore::set_source_color`].
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            variant: self.variant,
            contrast_level: self.contrast_level,
            mode: self.mode,
            custom_colors: self.custom_colors(),
            projection: self.projection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = ThemeConfig::from_toml_str("seed = \"#006494\"").unwrap();
        assert_eq!(config, ThemeConfig::new("#006494"));
        assert_eq!(config.engine().spec_version(), SpecVersion::Spec2021);

        let options = config.store_options();
        assert_eq!(options, StoreOptions::default());
    }

    #[test]
    fn test_full_config() {
        let config = ThemeConfig::from_toml_str(
            r##"
seed = 25748
variant = "vibrant"
contrast_level = 0.5
mode = "dark"
projection = "tone-direct"
spec_version = "2025"

[[custom_colors]]
name = "brand"
value = "#ff0000"
blend = true

[[custom_colors]]
name = "accent"
value = "#00ff00"
"##,
        )
        .unwrap();

        assert_eq!(config.seed, ColorInput::Int(0x006494));
        assert_eq!(config.variant, Variant::Vibrant);
        assert_eq!(config.mode, ThemeMode::Dark);
        assert_eq!(config.projection, Projection::ToneDirect);
        assert_eq!(config.spec_version, SpecVersion::Spec2025);
        assert_eq!(
            config.custom_colors(),
            vec![
                CustomColor::new("brand", "#ff0000", true),
                CustomColor::new("accent", "#00ff00", false),
            ]
        );
    }

    #[test]
    fn test_unknown_variant_falls_back() {
        let config =
            ThemeConfig::from_toml_str("seed = \"#006494\"\nvariant = \"SPARKLY\"").unwrap();
        assert_eq!(config.variant, Variant::TonalSpot);
    }

    #[test]
    fn test_missing_seed_is_a_parse_error() {
        let err = ThemeConfig::from_toml_str("variant = \"VIBRANT\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bad_seed_fails_at_build() {
        let config = ThemeConfig::from_toml_str("seed = \"#zzzzzz\"").unwrap();
        let err = config.build_theme().unwrap_err();
        assert!(matches!(err, ConfigError::Theme(ThemeError::InvalidColor { .. })));
    }

    #[test]
    fn test_build_theme() {
        let config = ThemeConfig::from_toml_str(
            "seed = \"#006494\"\n[[custom_colors]]\nname = \"brand\"\nvalue = \"#ff0000\"",
        )
        .unwrap();
        let theme = config.build_theme().unwrap();
        assert_eq!(theme.source, Rgb::from_channels(0x00, 0x64, 0x94));
        assert!(theme.custom_color("brand").is_some());
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = ThemeConfig::load("/nonexistent/tessera-theme.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
