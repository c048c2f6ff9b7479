//! Palette engine seam.
//!
//! ## Usage
//!
//! All perceptual color math (HCT, tonal palettes, contrast curves, hue
//! harmonization) happens behind [`PaletteEngine`]. The default
//! implementation, [`MaterialPaletteEngine`], delegates to
//! `material-color-utilities`.

use material_color_utilities::{
    blend,
    dynamiccolor::{
        DynamicSchemeBuilder, MaterialDynamicColors, SpecVersion as EngineSpecVersion,
        Variant as EngineVariant,
    },
    hct::Hct,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    color::Rgb,
    scheme::{Scheme, SchemePalettes, TonalPalette},
    variant::Variant,
};

/// External capability that turns a seed color into schemes.
///
/// Implementations must be pure: identical arguments yield identical schemes.
pub trait PaletteEngine: Send + Sync {
    /// Builds the scheme for one mode using the strategy selected by
    /// `variant`. `contrast_level` has already been validated to lie in
    /// `[-1.0, 1.0]`.
    fn scheme(&self, source: Rgb, variant: Variant, is_dark: bool, contrast_level: f64) -> Scheme;

    /// Shifts the hue of `design` toward `source`.
    fn harmonize(&self, design: Rgb, source: Rgb) -> Rgb;
}

/// Revision of the Material color spec used by [`MaterialPaletteEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecVersion {
    /// The 2021 spec. Defines all nine variants.
    #[default]
    #[serde(rename = "2021")]
    Spec2021,
    /// The 2025 expressive spec.
    #[serde(rename = "2025")]
    Spec2025,
}

impl SpecVersion {
    fn engine(self) -> EngineSpecVersion {
        match self {
            SpecVersion::Spec2021 => EngineSpecVersion::Spec2021,
            SpecVersion::Spec2025 => EngineSpecVersion::Spec2025,
        }
    }
}

impl Variant {
    /// Strategy table: each variant selects exactly one engine entry point.
    fn engine_variant(self) -> EngineVariant {
        match self {
            Variant::Monochrome => EngineVariant::Monochrome,
            Variant::Neutral => EngineVariant::Neutral,
            Variant::TonalSpot => EngineVariant::TonalSpot,
            Variant::Vibrant => EngineVariant::Vibrant,
            Variant::Expressive => EngineVariant::Expressive,
            Variant::Fidelity => EngineVariant::Fidelity,
            Variant::Content => EngineVariant::Content,
            Variant::Rainbow => EngineVariant::Rainbow,
            Variant::FruitSalad => EngineVariant::FruitSalad,
        }
    }
}

/// [`PaletteEngine`] backed by `material-color-utilities` dynamic schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaterialPaletteEngine {
    spec_version: SpecVersion,
}

impl MaterialPaletteEngine {
    /// Creates an engine for the given spec revision.
    pub fn new(spec_version: SpecVersion) -> Self {
        Self { spec_version }
    }

    /// The spec revision this engine builds against.
    pub fn spec_version(&self) -> SpecVersion {
        self.spec_version
    }
}

impl PaletteEngine for MaterialPaletteEngine {
    fn scheme(&self, source: Rgb, variant: Variant, is_dark: bool, contrast_level: f64) -> Scheme {
        trace!(
            "Building {variant} scheme for {source} (dark: {is_dark}, contrast: {contrast_level})"
        );
        let scheme = DynamicSchemeBuilder::default()
            .source_color_hct(Hct::from_int(source.to_argb()))
            .variant(variant.engine_variant())
            .spec_version(self.spec_version.engine())
            .contrast_level(contrast_level)
            .is_dark(is_dark)
            .build();
        let dynamic_colors = MaterialDynamicColors::new();

        let palettes = SchemePalettes {
            primary: TonalPalette::from_fn(|tone| {
                Rgb::from_argb(scheme.primary_palette().tone(tone.into()))
            }),
            secondary: TonalPalette::from_fn(|tone| {
                Rgb::from_argb(scheme.secondary_palette().tone(tone.into()))
            }),
            tertiary: TonalPalette::from_fn(|tone| {
                Rgb::from_argb(scheme.tertiary_palette().tone(tone.into()))
            }),
            neutral: TonalPalette::from_fn(|tone| {
                Rgb::from_argb(scheme.neutral_palette().tone(tone.into()))
            }),
            neutral_variant: TonalPalette::from_fn(|tone| {
                Rgb::from_argb(scheme.neutral_variant_palette().tone(tone.into()))
            }),
            error: TonalPalette::from_fn(|tone| {
                Rgb::from_argb(scheme.error_palette().tone(tone.into()))
            }),
        };

        Scheme {
            is_dark,
            background: Rgb::from_argb(dynamic_colors.background().get_argb(&scheme)),
            error: Rgb::from_argb(dynamic_colors.error().get_argb(&scheme)),
            error_container: Rgb::from_argb(dynamic_colors.error_container().get_argb(&scheme)),
            inverse_on_surface: Rgb::from_argb(
                dynamic_colors.inverse_on_surface().get_argb(&scheme),
            ),
            inverse_primary: Rgb::from_argb(dynamic_colors.inverse_primary().get_argb(&scheme)),
            inverse_surface: Rgb::from_argb(dynamic_colors.inverse_surface().get_argb(&scheme)),
            on_background: Rgb::from_argb(dynamic_colors.on_background().get_argb(&scheme)),
            on_error: Rgb::from_argb(dynamic_colors.on_error().get_argb(&scheme)),
            on_error_container: Rgb::from_argb(
                dynamic_colors.on_error_container().get_argb(&scheme),
            ),
            on_primary: Rgb::from_argb(dynamic_colors.on_primary().get_argb(&scheme)),
            on_primary_container: Rgb::from_argb(
                dynamic_colors.on_primary_container().get_argb(&scheme),
            ),
            on_primary_fixed: Rgb::from_argb(dynamic_colors.on_primary_fixed().get_argb(&scheme)),
            on_primary_fixed_variant: Rgb::from_argb(
                dynamic_colors.on_primary_fixed_variant().get_argb(&scheme),
            ),
            on_secondary: Rgb::from_argb(dynamic_colors.on_secondary().get_argb(&scheme)),
            on_secondary_container: Rgb::from_argb(
                dynamic_colors.on_secondary_container().get_argb(&scheme),
            ),
            on_secondary_fixed: Rgb::from_argb(
                dynamic_colors.on_secondary_fixed().get_argb(&scheme),
            ),
            on_secondary_fixed_variant: Rgb::from_argb(
                dynamic_colors.on_secondary_fixed_variant().get_argb(&scheme),
            ),
            on_surface: Rgb::from_argb(dynamic_colors.on_surface().get_argb(&scheme)),
            on_surface_variant: Rgb::from_argb(
                dynamic_colors.on_surface_variant().get_argb(&scheme),
            ),
            on_tertiary: Rgb::from_argb(dynamic_colors.on_tertiary().get_argb(&scheme)),
            on_tertiary_container: Rgb::from_argb(
                dynamic_colors.on_tertiary_container().get_argb(&scheme),
            ),
            on_tertiary_fixed: Rgb::from_argb(dynamic_colors.on_tertiary_fixed().get_argb(&scheme)),
            on_tertiary_fixed_variant: Rgb::from_argb(
                dynamic_colors.on_tertiary_fixed_variant().get_argb(&scheme),
            ),
            outline: Rgb::from_argb(dynamic_colors.outline().get_argb(&scheme)),
            outline_variant: Rgb::from_argb(dynamic_colors.outline_variant().get_argb(&scheme)),
            primary: Rgb::from_argb(dynamic_colors.primary().get_argb(&scheme)),
            primary_container: Rgb::from_argb(dynamic_colors.primary_container().get_argb(&scheme)),
            primary_fixed: Rgb::from_argb(dynamic_colors.primary_fixed().get_argb(&scheme)),
            primary_fixed_dim: Rgb::from_argb(dynamic_colors.primary_fixed_dim().get_argb(&scheme)),
            scrim: Rgb::from_argb(dynamic_colors.scrim().get_argb(&scheme)),
            secondary: Rgb::from_argb(dynamic_colors.secondary().get_argb(&scheme)),
            secondary_container: Rgb::from_argb(
                dynamic_colors.secondary_container().get_argb(&scheme),
            ),
            secondary_fixed: Rgb::from_argb(dynamic_colors.secondary_fixed().get_argb(&scheme)),
            secondary_fixed_dim: Rgb::from_argb(
                dynamic_colors.secondary_fixed_dim().get_argb(&scheme),
            ),
            shadow: Rgb::from_argb(dynamic_colors.shadow().get_argb(&scheme)),
            surface: Rgb::from_argb(dynamic_colors.surface().get_argb(&scheme)),
            surface_bright: Rgb::from_argb(dynamic_colors.surface_bright().get_argb(&scheme)),
            surface_container: Rgb::from_argb(dynamic_colors.surface_container().get_argb(&scheme)),
            surface_container_high: Rgb::from_argb(
                dynamic_colors.surface_container_high().get_argb(&scheme),
            ),
            surface_container_highest: Rgb::from_argb(
                dynamic_colors.surface_container_highest().get_argb(&scheme),
            ),
            surface_container_low: Rgb::from_argb(
                dynamic_colors.surface_container_low().get_argb(&scheme),
            ),
            surface_container_lowest: Rgb::from_argb(
                dynamic_colors.surface_container_lowest().get_argb(&scheme),
            ),
            surface_dim: Rgb::from_argb(dynamic_colors.surface_dim().get_argb(&scheme)),
            surface_tint: Rgb::from_argb(dynamic_colors.surface_tint().get_argb(&scheme)),
            surface_variant: Rgb::from_argb(dynamic_colors.surface_variant().get_argb(&scheme)),
            tertiary: Rgb::from_argb(dynamic_colors.tertiary().get_argb(&scheme)),
            tertiary_container: Rgb::from_argb(
                dynamic_colors.tertiary_container().get_argb(&scheme),
            ),
            tertiary_fixed: Rgb::from_argb(dynamic_colors.tertiary_fixed().get_argb(&scheme)),
            tertiary_fixed_dim: Rgb::from_argb(
                dynamic_colors.tertiary_fixed_dim().get_argb(&scheme),
            ),
            palettes,
        }
    }

    fn harmonize(&self, design: Rgb, source: Rgb) -> Rgb {
        Rgb::from_argb(blend::harmonize(design.to_argb(), source.to_argb()))
    }
}
