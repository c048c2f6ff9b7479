//! Palette-generation strategies.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ThemeError;

/// Which palette-generation strategy the engine applies to a seed color.
///
/// Carries no behavior of its own; [`crate::engine::PaletteEngine`]
/// implementations dispatch on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Variant {
    /// Grayscale palettes.
    Monochrome,
    /// Near-grayscale palettes with a hint of the seed hue.
    Neutral,
    /// Calm palettes with a single accent. The fallback for unknown names.
    #[default]
    TonalSpot,
    /// Maximum colorfulness for the primary palette.
    Vibrant,
    /// Playful palettes whose primary hue drifts away from the seed.
    Expressive,
    /// Keeps the seed color recognizable in primary containers.
    Fidelity,
    /// Like `Fidelity`, tuned for content-derived seeds.
    Content,
    /// Colorful tertiary roles over a grayscale neutral base.
    Rainbow,
    /// Primary and secondary hues rotated away from the seed.
    FruitSalad,
}

impl Variant {
    /// All variants in declaration order.
    pub const ALL: [Variant; 9] = [
        Variant::Monochrome,
        Variant::Neutral,
        Variant::TonalSpot,
        Variant::Vibrant,
        Variant::Expressive,
        Variant::Fidelity,
        Variant::Content,
        Variant::Rainbow,
        Variant::FruitSalad,
    ];

    /// Canonical `SCREAMING_SNAKE_CASE` name.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Monochrome => "MONOCHROME",
            Variant::Neutral => "NEUTRAL",
            Variant::TonalSpot => "TONAL_SPOT",
            Variant::Vibrant => "VIBRANT",
            Variant::Expressive => "EXPRESSIVE",
            Variant::Fidelity => "FIDELITY",
            Variant::Content => "CONTENT",
            Variant::Rainbow => "RAINBOW",
            Variant::FruitSalad => "FRUIT_SALAD",
        }
    }

    /// Lenient lookup: unknown names resolve to [`Variant::TonalSpot`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown variant '{name}', falling back to TONAL_SPOT");
            Variant::default()
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ThemeError;

    /// Accepts `TONAL_SPOT`, `tonal-spot`, `tonal_spot`, `TonalSpot` and
    /// `tonalspot`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name().replace('_', "").eq_ignore_ascii_case(&key))
            .ok_or_else(|| ThemeError::UnsupportedVariant(s.to_owned()))
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::from_name_or_default(&value)
    }
}

impl From<Variant> for &'static str {
    fn from(value: Variant) -> Self {
        value.name()
    }
}
