pub mod stream;
pub mod theme;
pub mod tokens;
pub mod variants;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use tessera_theme::{CONFIG_FILE_NAME, ColorInput, MaterialTheme, ThemeConfig, Variant};

use crate::output;

/// Theme inputs shared by `tokens` and `theme`. Flags override the config file.
#[derive(Args)]
pub struct ThemeArgs {
    /// Seed color, e.g. #006494
    #[arg(short, long)]
    seed: Option<String>,
    /// Palette strategy, e.g. TONAL_SPOT or vibrant
    #[arg(short, long)]
    variant: Option<String>,
    /// Contrast level in [-1.0, 1.0]
    #[arg(short, long, allow_hyphen_values = true)]
    contrast: Option<f64>,
    /// Path to a tessera-theme.toml (default: ./tessera-theme.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ThemeArgs {
    /// Merges the config file with command line overrides.
    pub fn resolve(&self) -> Result<ThemeConfig> {
        let mut config = match load_config(self.config.as_deref())? {
            Some(config) => config,
            None => {
                let seed = self.seed.as_deref().ok_or_else(|| {
                    anyhow!("No seed color given; pass --seed or create {CONFIG_FILE_NAME}")
                })?;
                ThemeConfig::new(seed)
            }
        };

        if let Some(seed) = &self.seed {
            config.seed = ColorInput::from(seed.as_str());
        }
        if let Some(name) = &self.variant {
            config.variant = parse_variant(name);
        }
        if let Some(contrast) = self.contrast {
            config.contrast_level = contrast;
        }
        Ok(config)
    }
}

/// Loads `path`, or `./tessera-theme.toml` when no path is given and the file
/// exists.
pub fn load_config(path: Option<&Path>) -> Result<Option<ThemeConfig>> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(CONFIG_FILE_NAME);
            if !default.exists() {
                return Ok(None);
            }
            default
        }
    };
    let config = ThemeConfig::load(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    output::status("Loaded", path.display().to_string());
    Ok(Some(config))
}

pub fn build(config: &ThemeConfig) -> Result<MaterialTheme> {
    config
        .build_theme()
        .with_context(|| format!("Failed to build theme from seed {}", config.seed))
}

fn parse_variant(name: &str) -> Variant {
    name.parse().unwrap_or_else(|_| {
        output::warn(format!("unknown variant `{name}`, using TONAL_SPOT"));
        Variant::TonalSpot
    })
}
