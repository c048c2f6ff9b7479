//! Material theme construction from a seed color.
//!
//! ## Usage
//!
//! Build a light/dark scheme pair plus custom color groups, then hand the
//! result to [`crate::token::project_tokens`] or a [`crate::store::ThemeStore`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    color::{ColorInput, Rgb},
    engine::{MaterialPaletteEngine, PaletteEngine},
    error::ThemeError,
    scheme::Scheme,
    variant::Variant,
};

/// Standard Material contrast levels.
pub struct ContrastLevel;

impl ContrastLevel {
    /// Lowest supported contrast.
    pub const REDUCED: f64 = -1.0;
    /// Default contrast.
    pub const STANDARD: f64 = 0.0;
    /// Medium contrast.
    pub const MEDIUM: f64 = 0.5;
    /// Highest supported contrast.
    pub const HIGH: f64 = 1.0;

    /// Rejects non-finite values and values outside `[-1.0, 1.0]`.
    pub fn validate(level: f64) -> Result<f64, ThemeError> {
        if level.is_finite() && (Self::REDUCED..=Self::HIGH).contains(&level) {
            Ok(level)
        } else {
            Err(ThemeError::InvalidContrast(level))
        }
    }
}

/// Light or dark appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl ThemeMode {
    /// Returns `true` for [`ThemeMode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown mode `{other}`, expected `light` or `dark`")),
        }
    }
}

/// A user-supplied custom color definition, validated when a theme is built.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomColor {
    /// Name of the color, e.g. `brand`.
    pub name: String,
    /// Unvalidated base value.
    pub value: ColorInput,
    /// Whether to shift the hue toward the seed before deriving roles.
    pub blend: bool,
}

impl CustomColor {
    /// Creates a custom color definition.
    pub fn new(name: impl Into<String>, value: impl Into<ColorInput>, blend: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            blend,
        }
    }
}

/// A custom color definition after validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedCustomColor {
    /// Name of the color.
    pub name: String,
    /// Validated base value, before blending.
    pub value: Rgb,
    /// Whether the value was blended toward the seed.
    pub blend: bool,
}

/// The four roles derived for a custom color in one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CustomColorRoles {
    /// The custom color itself.
    pub color: Rgb,
    /// Content color on top of `color`.
    pub on_color: Rgb,
    /// Container variant of `color`.
    pub color_container: Rgb,
    /// Content color on top of `color_container`.
    pub on_color_container: Rgb,
}

impl CustomColorRoles {
    fn from_scheme(scheme: &Scheme) -> Self {
        Self {
            color: scheme.primary,
            on_color: scheme.on_primary,
            color_container: scheme.primary_container,
            on_color_container: scheme.on_primary_container,
        }
    }
}

/// Light and dark roles derived from one custom color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomColorGroup {
    /// The validated definition.
    pub color: ResolvedCustomColor,
    /// The value roles were derived from, after optional blending.
    pub value: Rgb,
    /// Roles for light mode.
    pub light: CustomColorRoles,
    /// Roles for dark mode.
    pub dark: CustomColorRoles,
}

impl CustomColorGroup {
    /// Roles for `mode`.
    pub fn roles(&self, mode: ThemeMode) -> &CustomColorRoles {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// The light and dark schemes of a theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Schemes {
    /// Light scheme.
    pub light: Scheme,
    /// Dark scheme.
    pub dark: Scheme,
}

/// A complete Material theme derived from one seed color.
///
/// Immutable. Changing any input produces a new theme.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialTheme {
    /// The seed color.
    pub source: Rgb,
    /// Strategy the schemes were generated with.
    pub variant: Variant,
    /// Contrast level the schemes were generated with.
    pub contrast_level: f64,
    /// Light and dark schemes.
    pub schemes: Schemes,
    /// Custom color groups, in definition order.
    pub custom_colors: Vec<CustomColorGroup>,
}

impl MaterialTheme {
    /// Scheme for `mode`.
    pub fn scheme(&self, mode: ThemeMode) -> &Scheme {
        match mode {
            ThemeMode::Light => &self.schemes.light,
            ThemeMode::Dark => &self.schemes.dark,
        }
    }

    /// Looks a custom color group up by name.
    pub fn custom_color(&self, name: &str) -> Option<&CustomColorGroup> {
        self.custom_colors.iter().find(|group| group.color.name == name)
    }
}

/// Builds [`MaterialTheme`]s with a particular [`PaletteEngine`].
#[derive(Clone, Debug, Default)]
pub struct ThemeBuilder<E = MaterialPaletteEngine> {
    engine: E,
}

impl<E: PaletteEngine> ThemeBuilder<E> {
    /// Creates a builder around `engine`.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// The engine used for palette math.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Builds a theme.
    ///
    /// Every input is validated before the engine is called, so a failed
    /// build has no side effects.
    pub fn build(
        &self,
        seed: impl Into<ColorInput>,
        variant: Variant,
        contrast_level: f64,
        custom_colors: &[CustomColor],
    ) -> Result<MaterialTheme, ThemeError> {
        let source = seed.into().resolve()?;
        let contrast_level = ContrastLevel::validate(contrast_level)?;
        let resolved = custom_colors
            .iter()
            .map(resolve_custom_color)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Building {variant} theme from {source} with {} custom colors",
            resolved.len()
        );

        let schemes = Schemes {
            light: self.engine.scheme(source, variant, false, contrast_level),
            dark: self.engine.scheme(source, variant, true, contrast_level),
        };
        let custom_colors = resolved
            .into_iter()
            .map(|color| self.custom_color_group(source, contrast_level, color))
            .collect();

        Ok(MaterialTheme {
            source,
            variant,
            contrast_level,
            schemes,
            custom_colors,
        })
    }

    fn custom_color_group(
        &self,
        source: Rgb,
        contrast_level: f64,
        color: ResolvedCustomColor,
    ) -> CustomColorGroup {
        let value = if color.blend {
            self.engine.harmonize(color.value, source)
        } else {
            color.value
        };
        let light = self
            .engine
            .scheme(value, Variant::TonalSpot, false, contrast_level);
        let dark = self
            .engine
            .scheme(value, Variant::TonalSpot, true, contrast_level);

        CustomColorGroup {
            color,
            value,
            light: CustomColorRoles::from_scheme(&light),
            dark: CustomColorRoles::from_scheme(&dark),
        }
    }
}

/// Checks a contrast level and custom color definitions without building.
pub(crate) fn validate_inputs(
    contrast_level: f64,
    custom_colors: &[CustomColor],
) -> Result<(), ThemeError> {
    ContrastLevel::validate(contrast_level)?;
    custom_colors
        .iter()
        .try_for_each(|color| resolve_custom_color(color).map(drop))
}

fn resolve_custom_color(color: &CustomColor) -> Result<ResolvedCustomColor, ThemeError> {
    let value = color
        .value
        .resolve()
        .map_err(|err| ThemeError::InvalidCustomColor {
            name: color.name.clone(),
            source: Box::new(err),
        })?;
    Ok(ResolvedCustomColor {
        name: color.name.clone(),
        value,
        blend: color.blend,
    })
}

/// Builds a theme with the default [`MaterialPaletteEngine`].
pub fn build_theme(
    seed: impl Into<ColorInput>,
    variant: Variant,
    contrast_level: f64,
    custom_colors: &[CustomColor],
) -> Result<MaterialTheme, ThemeError> {
    ThemeBuilder::<MaterialPaletteEngine>::default().build(
        seed,
        variant,
        contrast_level,
        custom_colors,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::ColorRole;

    #[test]
    fn test_builds_requested_theme() {
        let theme =
            build_theme(0x006494, Variant::TonalSpot, ContrastLevel::STANDARD, &[]).unwrap();
        assert_eq!(theme.source.value(), 0x006494);
        assert_eq!(theme.variant, Variant::TonalSpot);
        assert!(theme.custom_colors.is_empty());
        assert!(!theme.schemes.light.is_dark);
        assert!(theme.schemes.dark.is_dark);
    }

    #[test]
    fn test_rejects_out_of_range_seeds() {
        for seed in [-1, 0x1000000] {
            let err = build_theme(seed, Variant::TonalSpot, 0.0, &[]).unwrap_err();
            assert!(matches!(err, ThemeError::InvalidColor { .. }), "{err}");
        }
        assert!(build_theme("#00649", Variant::TonalSpot, 0.0, &[]).is_err());
    }

    #[test]
    fn test_rejects_invalid_contrast() {
        for level in [1.5, -1.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                build_theme("#006494", Variant::TonalSpot, level, &[]),
                Err(ThemeError::InvalidContrast(_))
            ));
        }
        assert!(build_theme("#006494", Variant::TonalSpot, ContrastLevel::HIGH, &[]).is_ok());
        assert!(build_theme("#006494", Variant::TonalSpot, ContrastLevel::REDUCED, &[]).is_ok());
    }

    #[test]
    fn test_variants_dispatch_to_distinct_strategies() {
        let monochrome = build_theme("#006494", Variant::Monochrome, 0.0, &[]).unwrap();
        let vibrant = build_theme("#006494", Variant::Vibrant, 0.0, &[]).unwrap();
        let differs = ColorRole::ALL
            .into_iter()
            .any(|role| monochrome.schemes.light.role(role) != vibrant.schemes.light.role(role));
        assert!(differs);
    }

    #[test]
    fn test_custom_color_groups() {
        let custom = [
            CustomColor::new("brand", 0xFF0000, true),
            CustomColor::new("accent", "#00ff00", false),
        ];
        let theme = build_theme("#006494", Variant::TonalSpot, 0.0, &custom).unwrap();
        assert_eq!(theme.custom_colors.len(), 2);

        let brand = &theme.custom_colors[0];
        assert_eq!(brand.color.name, "brand");
        assert_eq!(brand.color.value.value(), 0xFF0000);
        assert!(brand.color.blend);
        assert_ne!(brand.light.color, brand.light.on_color);
        assert_ne!(brand.light.color, brand.dark.color);

        let accent = theme.custom_color("accent").unwrap();
        assert_eq!(accent.value.value(), 0x00FF00);
        assert_eq!(accent.roles(ThemeMode::Dark), &accent.dark);
    }

    #[test]
    fn test_invalid_custom_color_names_the_definition() {
        let custom = [CustomColor::new("brand", "#zzzzzz", false)];
        let err = build_theme("#006494", Variant::TonalSpot, 0.0, &custom).unwrap_err();
        assert!(err.is_invalid_color());
        match err {
            ThemeError::InvalidCustomColor { name, .. } => assert_eq!(name, "brand"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let custom = [CustomColor::new("brand", 0xFF0000, true)];
        let first = build_theme("#006494", Variant::Expressive, 0.5, &custom).unwrap();
        let second = build_theme("#006494", Variant::Expressive, 0.5, &custom).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert!("dim".parse::<ThemeMode>().is_err());
    }
}
