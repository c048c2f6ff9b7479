//! Color roles, tonal palettes and the per-mode [`Scheme`].
//!
//! ## Usage
//!
//! Read role colors off a scheme produced by a [`crate::engine::PaletteEngine`].

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{color::Rgb, error::ThemeError};

/// Number of canonical color roles.
pub const ROLE_COUNT: usize = 49;

/// A named Material color role.
///
/// Declared in the alphabetical order of the token names, which is also the
/// iteration order of [`crate::token::TokenMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRole {
    /// `background`.
    Background,
    /// `error`.
    Error,
    /// `error-container`.
    ErrorContainer,
    /// `inverse-on-surface`.
    InverseOnSurface,
    /// `inverse-primary`.
    InversePrimary,
    /// `inverse-surface`.
    InverseSurface,
    /// `on-background`.
    OnBackground,
    /// `on-error`.
    OnError,
    /// `on-error-container`.
    OnErrorContainer,
    /// `on-primary`.
    OnPrimary,
    /// `on-primary-container`.
    OnPrimaryContainer,
    /// `on-primary-fixed`.
    OnPrimaryFixed,
    /// `on-primary-fixed-variant`.
    OnPrimaryFixedVariant,
    /// `on-secondary`.
    OnSecondary,
    /// `on-secondary-container`.
    OnSecondaryContainer,
    /// `on-secondary-fixed`.
    OnSecondaryFixed,
    /// `on-secondary-fixed-variant`.
    OnSecondaryFixedVariant,
    /// `on-surface`.
    OnSurface,
    /// `on-surface-variant`.
    OnSurfaceVariant,
    /// `on-tertiary`.
    OnTertiary,
    /// `on-tertiary-container`.
    OnTertiaryContainer,
    /// `on-tertiary-fixed`.
    OnTertiaryFixed,
    /// `on-tertiary-fixed-variant`.
    OnTertiaryFixedVariant,
    /// `outline`.
    Outline,
    /// `outline-variant`.
    OutlineVariant,
    /// `primary`.
    Primary,
    /// `primary-container`.
    PrimaryContainer,
    /// `primary-fixed`.
    PrimaryFixed,
    /// `primary-fixed-dim`.
    PrimaryFixedDim,
    /// `scrim`.
    Scrim,
    /// `secondary`.
    Secondary,
    /// `secondary-container`.
    SecondaryContainer,
    /// `secondary-fixed`.
    SecondaryFixed,
    /// `secondary-fixed-dim`.
    SecondaryFixedDim,
    /// `shadow`.
    Shadow,
    /// `surface`.
    Surface,
    /// `surface-bright`.
    SurfaceBright,
    /// `surface-container`.
    SurfaceContainer,
    /// `surface-container-high`.
    SurfaceContainerHigh,
    /// `surface-container-highest`.
    SurfaceContainerHighest,
    /// `surface-container-low`.
    SurfaceContainerLow,
    /// `surface-container-lowest`.
    SurfaceContainerLowest,
    /// `surface-dim`.
    SurfaceDim,
    /// `surface-tint`.
    SurfaceTint,
    /// `surface-variant`.
    SurfaceVariant,
    /// `tertiary`.
    Tertiary,
    /// `tertiary-container`.
    TertiaryContainer,
    /// `tertiary-fixed`.
    TertiaryFixed,
    /// `tertiary-fixed-dim`.
    TertiaryFixedDim,
}

impl ColorRole {
    /// Every role, in token order.
    pub const ALL: [ColorRole; ROLE_COUNT] = [
        ColorRole::Background,
        ColorRole::Error,
        ColorRole::ErrorContainer,
        ColorRole::InverseOnSurface,
        ColorRole::InversePrimary,
        ColorRole::InverseSurface,
        ColorRole::OnBackground,
        ColorRole::OnError,
        ColorRole::OnErrorContainer,
        ColorRole::OnPrimary,
        ColorRole::OnPrimaryContainer,
        ColorRole::OnPrimaryFixed,
        ColorRole::OnPrimaryFixedVariant,
        ColorRole::OnSecondary,
        ColorRole::OnSecondaryContainer,
        ColorRole::OnSecondaryFixed,
        ColorRole::OnSecondaryFixedVariant,
        ColorRole::OnSurface,
        ColorRole::OnSurfaceVariant,
        ColorRole::OnTertiary,
        ColorRole::OnTertiaryContainer,
        ColorRole::OnTertiaryFixed,
        ColorRole::OnTertiaryFixedVariant,
        ColorRole::Outline,
        ColorRole::OutlineVariant,
        ColorRole::Primary,
        ColorRole::PrimaryContainer,
        ColorRole::PrimaryFixed,
        ColorRole::PrimaryFixedDim,
        ColorRole::Scrim,
        ColorRole::Secondary,
        ColorRole::SecondaryContainer,
        ColorRole::SecondaryFixed,
        ColorRole::SecondaryFixedDim,
        ColorRole::Shadow,
        ColorRole::Surface,
        ColorRole::SurfaceBright,
        ColorRole::SurfaceContainer,
        ColorRole::SurfaceContainerHigh,
        ColorRole::SurfaceContainerHighest,
        ColorRole::SurfaceContainerLow,
        ColorRole::SurfaceContainerLowest,
        ColorRole::SurfaceDim,
        ColorRole::SurfaceTint,
        ColorRole::SurfaceVariant,
        ColorRole::Tertiary,
        ColorRole::TertiaryContainer,
        ColorRole::TertiaryFixed,
        ColorRole::TertiaryFixedDim,
    ];

    /// Kebab-case token name, e.g. `on-primary-container`.
    pub const fn token_name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Error => "error",
            ColorRole::ErrorContainer => "error-container",
            ColorRole::InverseOnSurface => "inverse-on-surface",
            ColorRole::InversePrimary => "inverse-primary",
            ColorRole::InverseSurface => "inverse-surface",
            ColorRole::OnBackground => "on-background",
            ColorRole::OnError => "on-error",
            ColorRole::OnErrorContainer => "on-error-container",
            ColorRole::OnPrimary => "on-primary",
            ColorRole::OnPrimaryContainer => "on-primary-container",
            ColorRole::OnPrimaryFixed => "on-primary-fixed",
            ColorRole::OnPrimaryFixedVariant => "on-primary-fixed-variant",
            ColorRole::OnSecondary => "on-secondary",
            ColorRole::OnSecondaryContainer => "on-secondary-container",
            ColorRole::OnSecondaryFixed => "on-secondary-fixed",
            ColorRole::OnSecondaryFixedVariant => "on-secondary-fixed-variant",
            ColorRole::OnSurface => "on-surface",
            ColorRole::OnSurfaceVariant => "on-surface-variant",
            ColorRole::OnTertiary => "on-tertiary",
            ColorRole::OnTertiaryContainer => "on-tertiary-container",
            ColorRole::OnTertiaryFixed => "on-tertiary-fixed",
            ColorRole::OnTertiaryFixedVariant => "on-tertiary-fixed-variant",
            ColorRole::Outline => "outline",
            ColorRole::OutlineVariant => "outline-variant",
            ColorRole::Primary => "primary",
            ColorRole::PrimaryContainer => "primary-container",
            ColorRole::PrimaryFixed => "primary-fixed",
            ColorRole::PrimaryFixedDim => "primary-fixed-dim",
            ColorRole::Scrim => "scrim",
            ColorRole::Secondary => "secondary",
            ColorRole::SecondaryContainer => "secondary-container",
            ColorRole::SecondaryFixed => "secondary-fixed",
            ColorRole::SecondaryFixedDim => "secondary-fixed-dim",
            ColorRole::Shadow => "shadow",
            ColorRole::Surface => "surface",
            ColorRole::SurfaceBright => "surface-bright",
            ColorRole::SurfaceContainer => "surface-container",
            ColorRole::SurfaceContainerHigh => "surface-container-high",
            ColorRole::SurfaceContainerHighest => "surface-container-highest",
            ColorRole::SurfaceContainerLow => "surface-container-low",
            ColorRole::SurfaceContainerLowest => "surface-container-lowest",
            ColorRole::SurfaceDim => "surface-dim",
            ColorRole::SurfaceTint => "surface-tint",
            ColorRole::SurfaceVariant => "surface-variant",
            ColorRole::Tertiary => "tertiary",
            ColorRole::TertiaryContainer => "tertiary-container",
            ColorRole::TertiaryFixed => "tertiary-fixed",
            ColorRole::TertiaryFixedDim => "tertiary-fixed-dim",
        }
    }

    /// Looks a role up by its token name.
    pub fn from_token_name(name: &str) -> Option<Self> {
        ColorRole::ALL
            .into_iter()
            .find(|role| role.token_name() == name)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token_name())
    }
}

impl FromStr for ColorRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorRole::from_token_name(s).ok_or_else(|| ThemeError::UnknownToken(s.to_owned()))
    }
}

/// The tonal palettes underlying a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteKind {
    /// Palette behind the primary roles.
    Primary,
    /// Palette behind the secondary roles.
    Secondary,
    /// Palette behind the tertiary roles.
    Tertiary,
    /// Palette behind surfaces and backgrounds.
    Neutral,
    /// Palette behind surface variants and outlines.
    NeutralVariant,
    /// Palette behind the error roles.
    Error,
}

impl PaletteKind {
    /// All palettes.
    pub const ALL: [PaletteKind; 6] = [
        PaletteKind::Primary,
        PaletteKind::Secondary,
        PaletteKind::Tertiary,
        PaletteKind::Neutral,
        PaletteKind::NeutralVariant,
        PaletteKind::Error,
    ];
}

/// A family of colors sharing hue and chroma, indexed by tone `0..=100`.
///
/// Tones are sampled once from the engine when the scheme is built, so the
/// palette is plain data and safe to share across threads.
#[derive(Clone, PartialEq, Eq)]
pub struct TonalPalette {
    tones: Box<[Rgb]>,
}

impl TonalPalette {
    /// Highest tone.
    pub const MAX_TONE: u8 = 100;

    /// Samples `tone_fn` at every tone from 0 to 100.
    pub fn from_fn(mut tone_fn: impl FnMut(u8) -> Rgb) -> Self {
        let tones = (0..=Self::MAX_TONE).map(&mut tone_fn).collect();
        Self { tones }
    }

    /// Color at `tone`, clamped to 100.
    pub fn tone(&self, tone: u8) -> Rgb {
        self.tones[usize::from(tone.min(Self::MAX_TONE))]
    }
}

impl fmt::Debug for TonalPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TonalPalette")
            .field("tone_0", &self.tone(0))
            .field("tone_50", &self.tone(50))
            .field("tone_100", &self.tone(100))
            .finish()
    }
}

/// The six palettes of one scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemePalettes {
    /// Primary palette.
    pub primary: TonalPalette,
    /// Secondary palette.
    pub secondary: TonalPalette,
    /// Tertiary palette.
    pub tertiary: TonalPalette,
    /// Neutral palette.
    pub neutral: TonalPalette,
    /// Neutral variant palette.
    pub neutral_variant: TonalPalette,
    /// Error palette.
    pub error: TonalPalette,
}

impl SchemePalettes {
    /// Returns the palette of the given kind.
    pub fn get(&self, kind: PaletteKind) -> &TonalPalette {
        match kind {
            PaletteKind::Primary => &self.primary,
            PaletteKind::Secondary => &self.secondary,
            PaletteKind::Tertiary => &self.tertiary,
            PaletteKind::Neutral => &self.neutral,
            PaletteKind::NeutralVariant => &self.neutral_variant,
            PaletteKind::Error => &self.error,
        }
    }
}

/// A Material color scheme for one mode (light or dark) of one theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scheme {
    /// Indicates if the scheme is dark mode (`true`) or light mode (`false`).
    pub is_dark: bool,
    /// The background color of the scheme.
    pub background: Rgb,
    /// The error color of the scheme.
    pub error: Rgb,
    /// A container color for `error`.
    pub error_container: Rgb,
    /// Color used for content on top of `inverse_surface`.
    pub inverse_on_surface: Rgb,
    /// An inverse of the primary color.
    pub inverse_primary: Rgb,
    /// An inverse of the surface color.
    pub inverse_surface: Rgb,
    /// Color used for content on top of `background`.
    pub on_background: Rgb,
    /// Color used for content on top of `error`.
    pub on_error: Rgb,
    /// Color used for content on top of `error_container`.
    pub on_error_container: Rgb,
    /// Color used for content on top of `primary`.
    pub on_primary: Rgb,
    /// Color used for content on top of `primary_container`.
    pub on_primary_container: Rgb,
    /// Content color used on `primary_fixed` and `primary_fixed_dim`.
    pub on_primary_fixed: Rgb,
    /// Lower-emphasis content color used on `primary_fixed` roles.
    pub on_primary_fixed_variant: Rgb,
    /// Color used for content on top of `secondary`.
    pub on_secondary: Rgb,
    /// Color used for content on top of `secondary_container`.
    pub on_secondary_container: Rgb,
    /// Content color used on `secondary_fixed` and `secondary_fixed_dim`.
    pub on_secondary_fixed: Rgb,
    /// Lower-emphasis content color used on `secondary_fixed` roles.
    pub on_secondary_fixed_variant: Rgb,
    /// Color used for content on top of `surface`.
    pub on_surface: Rgb,
    /// Color used for content on top of `surface_variant`.
    pub on_surface_variant: Rgb,
    /// Color used for content on top of `tertiary`.
    pub on_tertiary: Rgb,
    /// Color used for content on top of `tertiary_container`.
    pub on_tertiary_container: Rgb,
    /// Content color used on `tertiary_fixed` and `tertiary_fixed_dim`.
    pub on_tertiary_fixed: Rgb,
    /// Lower-emphasis content color used on `tertiary_fixed` roles.
    pub on_tertiary_fixed_variant: Rgb,
    /// The outline color.
    pub outline: Rgb,
    /// A variant of the outline color.
    pub outline_variant: Rgb,
    /// The primary color of the scheme.
    pub primary: Rgb,
    /// A container color for `primary`.
    pub primary_container: Rgb,
    /// Primary role that keeps the same tone in light and dark schemes.
    pub primary_fixed: Rgb,
    /// Dimmer `primary_fixed`.
    pub primary_fixed_dim: Rgb,
    /// The scrim color.
    pub scrim: Rgb,
    /// The secondary color of the scheme.
    pub secondary: Rgb,
    /// A container color for `secondary`.
    pub secondary_container: Rgb,
    /// Secondary role that keeps the same tone in light and dark schemes.
    pub secondary_fixed: Rgb,
    /// Dimmer `secondary_fixed`.
    pub secondary_fixed_dim: Rgb,
    /// The shadow color.
    pub shadow: Rgb,
    /// The surface color of the scheme.
    pub surface: Rgb,
    /// Brightest surface role.
    pub surface_bright: Rgb,
    /// Default container surface.
    pub surface_container: Rgb,
    /// High-emphasis container surface.
    pub surface_container_high: Rgb,
    /// Highest-emphasis container surface.
    pub surface_container_highest: Rgb,
    /// Low-emphasis container surface.
    pub surface_container_low: Rgb,
    /// Lowest-emphasis container surface.
    pub surface_container_lowest: Rgb,
    /// Dimmest surface role.
    pub surface_dim: Rgb,
    /// Tint used by tonal elevation overlays.
    pub surface_tint: Rgb,
    /// A variant of the surface color.
    pub surface_variant: Rgb,
    /// The tertiary color of the scheme.
    pub tertiary: Rgb,
    /// A container color for `tertiary`.
    pub tertiary_container: Rgb,
    /// Tertiary role that keeps the same tone in light and dark schemes.
    pub tertiary_fixed: Rgb,
    /// Dimmer `tertiary_fixed`.
    pub tertiary_fixed_dim: Rgb,
    /// Tonal palettes the roles were drawn from.
    #[serde(skip)]
    pub palettes: SchemePalettes,
}

impl Scheme {
    /// Returns the color assigned to `role`.
    pub fn role(&self, role: ColorRole) -> Rgb {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Error => self.error,
            ColorRole::ErrorContainer => self.error_container,
            ColorRole::InverseOnSurface => self.inverse_on_surface,
            ColorRole::InversePrimary => self.inverse_primary,
            ColorRole::InverseSurface => self.inverse_surface,
            ColorRole::OnBackground => self.on_background,
            ColorRole::OnError => self.on_error,
            ColorRole::OnErrorContainer => self.on_error_container,
            ColorRole::OnPrimary => self.on_primary,
            ColorRole::OnPrimaryContainer => self.on_primary_container,
            ColorRole::OnPrimaryFixed => self.on_primary_fixed,
            ColorRole::OnPrimaryFixedVariant => self.on_primary_fixed_variant,
            ColorRole::OnSecondary => self.on_secondary,
            ColorRole::OnSecondaryContainer => self.on_secondary_container,
            ColorRole::OnSecondaryFixed => self.on_secondary_fixed,
            ColorRole::OnSecondaryFixedVariant => self.on_secondary_fixed_variant,
            ColorRole::OnSurface => self.on_surface,
            ColorRole::OnSurfaceVariant => self.on_surface_variant,
            ColorRole::OnTertiary => self.on_tertiary,
            ColorRole::OnTertiaryContainer => self.on_tertiary_container,
            ColorRole::OnTertiaryFixed => self.on_tertiary_fixed,
            ColorRole::OnTertiaryFixedVariant => self.on_tertiary_fixed_variant,
            ColorRole::Outline => self.outline,
            ColorRole::OutlineVariant => self.outline_variant,
            ColorRole::Primary => self.primary,
            ColorRole::PrimaryContainer => self.primary_container,
            ColorRole::PrimaryFixed => self.primary_fixed,
            ColorRole::PrimaryFixedDim => self.primary_fixed_dim,
            ColorRole::Scrim => self.scrim,
            ColorRole::Secondary => self.secondary,
            ColorRole::SecondaryContainer => self.secondary_container,
            ColorRole::SecondaryFixed => self.secondary_fixed,
            ColorRole::SecondaryFixedDim => self.secondary_fixed_dim,
            ColorRole::Shadow => self.shadow,
            ColorRole::Surface => self.surface,
            ColorRole::SurfaceBright => self.surface_bright,
            ColorRole::SurfaceContainer => self.surface_container,
            ColorRole::SurfaceContainerHigh => self.surface_container_high,
            ColorRole::SurfaceContainerHighest => self.surface_container_highest,
            ColorRole::SurfaceContainerLow => self.surface_container_low,
            ColorRole::SurfaceContainerLowest => self.surface_container_lowest,
            ColorRole::SurfaceDim => self.surface_dim,
            ColorRole::SurfaceTint => self.surface_tint,
            ColorRole::SurfaceVariant => self.surface_variant,
            ColorRole::Tertiary => self.tertiary,
            ColorRole::TertiaryContainer => self.tertiary_container,
            ColorRole::TertiaryFixed => self.tertiary_fixed,
            ColorRole::TertiaryFixedDim => self.tertiary_fixed_dim,
        }
    }

    /// Returns the palette of the given kind.
    pub fn palette(&self, kind: PaletteKind) -> &TonalPalette {
        self.palettes.get(kind)
    }

    /// Returns the matching content color for a background role.
    ///
    /// Surface containers map to `on_surface`, fixed roles to their
    /// `on_*_fixed` counterpart. Roles that are not backgrounds return `None`.
    pub fn content_role_for(background: ColorRole) -> Option<ColorRole> {
        use ColorRole::*;
        let content = match background {
            Primary => OnPrimary,
            Secondary => OnSecondary,
            Tertiary => OnTertiary,
            Error => OnError,
            Background => OnBackground,
            PrimaryContainer => OnPrimaryContainer,
            SecondaryContainer => OnSecondaryContainer,
            TertiaryContainer => OnTertiaryContainer,
            ErrorContainer => OnErrorContainer,
            InverseSurface => InverseOnSurface,
            Surface | SurfaceBright | SurfaceDim | SurfaceContainer | SurfaceContainerHigh
            | SurfaceContainerHighest | SurfaceContainerLow | SurfaceContainerLowest => OnSurface,
            SurfaceVariant => OnSurfaceVariant,
            PrimaryFixed | PrimaryFixedDim => OnPrimaryFixed,
            SecondaryFixed | SecondaryFixedDim => OnSecondaryFixed,
            TertiaryFixed | TertiaryFixedDim => OnTertiaryFixed,
            _ => return None,
        };
        Some(content)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_roles_are_in_token_order() {
        let names: Vec<_> = ColorRole::ALL.iter().map(|role| role.token_name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        let mut roles = ColorRole::ALL.to_vec();
        roles.sort();
        assert_eq!(roles, ColorRole::ALL.to_vec());
    }

    #[test]
    fn test_token_names_are_unique() {
        let unique: HashSet<_> = ColorRole::ALL.iter().map(|role| role.token_name()).collect();
        assert_eq!(unique.len(), ROLE_COUNT);
    }

    #[test]
    fn test_token_name_lookup() {
        for role in ColorRole::ALL {
            assert_eq!(role.token_name().parse::<ColorRole>().unwrap(), role);
        }
        assert_eq!(ColorRole::OnPrimaryFixedVariant.to_string(), "on-primary-fixed-variant");
        assert!(ColorRole::from_token_name("color-primary").is_none());
        assert!("primary_container".parse::<ColorRole>().is_err());
    }

    #[test]
    fn test_tonal_palette_sampling() {
        let palette = TonalPalette::from_fn(|tone| Rgb::from_channels(tone, tone, tone));
        assert_eq!(palette.tone(0), Rgb::BLACK);
        assert_eq!(palette.tone(40), Rgb::from_channels(40, 40, 40));
        assert_eq!(palette.tone(200), Rgb::from_channels(100, 100, 100));
    }

    #[test]
    fn test_content_role_for() {
        assert_eq!(
            Scheme::content_role_for(ColorRole::Primary),
            Some(ColorRole::OnPrimary)
        );
        assert_eq!(
            Scheme::content_role_for(ColorRole::SurfaceContainerHighest),
            Some(ColorRole::OnSurface)
        );
        assert_eq!(
            Scheme::content_role_for(ColorRole::TertiaryFixedDim),
            Some(ColorRole::OnTertiaryFixed)
        );
        assert_eq!(Scheme::content_role_for(ColorRole::Outline), None);
    }
}
