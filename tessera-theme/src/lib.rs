//! Material 3 color themes and design tokens from a single seed color.
//!
//! # Usage
//!
//! Build a theme and project it to tokens for one mode:
//!
//! ```
//! use tessera_theme::{ThemeMode, Variant, build_theme, project_tokens};
//!
//! let theme = build_theme("#006494", Variant::TonalSpot, 0.0, &[]).unwrap();
//! let tokens = project_tokens(&theme, ThemeMode::Light);
//! assert_eq!(tokens.len(), 49);
//! assert!(tokens.get("primary").is_some());
//! ```
//!
//! # Theme Store
//!
//! [`ThemeStore`] holds the current theme, rebuilds it when the seed, variant,
//! contrast or custom colors change and republishes complete token maps to
//! attached [`StyleSurface`]s.
//!
//! ```
//! use std::sync::Arc;
//! use tessera_theme::{CssStyleSurface, StoreOptions, ThemeMode, ThemeStore};
//!
//! let store = ThemeStore::new(StoreOptions::default()).unwrap();
//! let surface = Arc::new(CssStyleSurface::default());
//! store.attach_surface(surface.clone());
//!
//! store.set_source_color("#006494").unwrap();
//! store.set_mode(ThemeMode::Dark);
//! assert!(surface.stylesheet().unwrap().starts_with(":root {"));
//! ```
//!
//! Invalid input never replaces the current theme:
//!
//! ```
//! # use tessera_theme::{StoreOptions, ThemeStore};
//! let store = ThemeStore::new(StoreOptions::default()).unwrap();
//! store.set_source_color("#006494").unwrap();
//! assert!(store.set_source_color("#gggggg").is_err());
//! assert_eq!(store.current_theme().unwrap().source.to_hex(), "#006494");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod scheme;
pub mod store;
pub mod surface;
pub mod theme;
pub mod token;
pub mod variant;

pub use crate::{
    color::{ColorInput, Rgb},
    config::{CONFIG_FILE_NAME, ConfigError, CustomColorConfig, ThemeConfig},
    engine::{MaterialPaletteEngine, PaletteEngine, SpecVersion},
    error::ThemeError,
    scheme::{ColorRole, PaletteKind, ROLE_COUNT, Scheme, SchemePalettes, TonalPalette},
    store::{StoreEvent, StoreOptions, SubscriptionId, ThemeSnapshot, ThemeStore},
    surface::{CssStyleSurface, StyleSurface},
    theme::{
        ContrastLevel, CustomColor, CustomColorGroup, CustomColorRoles, MaterialTheme,
        ResolvedCustomColor, Schemes, ThemeBuilder, ThemeMode, build_theme,
    },
    token::{
        DEFAULT_CSS_PREFIX, Projection, TokenMap, ToneStop, project_tokens, project_tokens_with,
        tone_stop,
    },
    variant::Variant,
};
