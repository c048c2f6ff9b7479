//! Projection of a theme onto the flat design-token map.
//!
//! ## Usage
//!
//! Turn a [`MaterialTheme`] into the 49 `name -> #rrggbb` tokens a style
//! surface consumes.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use tracing::debug;

use crate::{
    color::Rgb,
    scheme::{ColorRole, PaletteKind, ROLE_COUNT},
    theme::{MaterialTheme, ThemeMode},
};

/// Default CSS custom property prefix.
pub const DEFAULT_CSS_PREFIX: &str = "md-sys-color";

/// How token values are read off a theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    /// Each token reads its role off the scheme, trusting whatever tone the
    /// engine assigned.
    #[default]
    RoleDirect,
    /// Each token reads a fixed tone off one tonal palette (see
    /// [`tone_stop`]).
    ToneDirect,
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Projection::RoleDirect => "role-direct",
            Projection::ToneDirect => "tone-direct",
        })
    }
}

impl FromStr for Projection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "role-direct" | "role" => Ok(Projection::RoleDirect),
            "tone-direct" | "tone" => Ok(Projection::ToneDirect),
            other => Err(format!(
                "unknown projection `{other}`, expected `role-direct` or `tone-direct`"
            )),
        }
    }
}

/// Fixed tone stops of one token under [`Projection::ToneDirect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToneStop {
    /// Palette the tone is read from.
    pub palette: PaletteKind,
    /// Tone in light mode.
    pub light: u8,
    /// Tone in dark mode.
    pub dark: u8,
}

impl ToneStop {
    const fn new(palette: PaletteKind, light: u8, dark: u8) -> Self {
        Self {
            palette,
            light,
            dark,
        }
    }

    /// Tone for `mode`.
    pub fn tone(self, mode: ThemeMode) -> u8 {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }
}

/// Tone-stop table for [`Projection::ToneDirect`].
pub const fn tone_stop(role: ColorRole) -> ToneStop {
    use PaletteKind::{Error, Neutral, NeutralVariant, Primary, Secondary, Tertiary};

    match role {
        ColorRole::Primary => ToneStop::new(Primary, 40, 80),
        ColorRole::OnPrimary => ToneStop::new(Primary, 100, 20),
        ColorRole::PrimaryContainer => ToneStop::new(Primary, 90, 30),
        ColorRole::OnPrimaryContainer => ToneStop::new(Primary, 10, 90),
        ColorRole::Secondary => ToneStop::new(Secondary, 40, 80),
        ColorRole::OnSecondary => ToneStop::new(Secondary, 100, 20),
        ColorRole::SecondaryContainer => ToneStop::new(Secondary, 90, 30),
        ColorRole::OnSecondaryContainer => ToneStop::new(Secondary, 10, 90),
        ColorRole::Tertiary => ToneStop::new(Tertiary, 40, 80),
        ColorRole::OnTertiary => ToneStop::new(Tertiary, 100, 20),
        ColorRole::TertiaryContainer => ToneStop::new(Tertiary, 90, 30),
        ColorRole::OnTertiaryContainer => ToneStop::new(Tertiary, 10, 90),
        ColorRole::Error => ToneStop::new(Error, 40, 80),
        ColorRole::OnError => ToneStop::new(Error, 100, 20),
        ColorRole::ErrorContainer => ToneStop::new(Error, 90, 30),
        ColorRole::OnErrorContainer => ToneStop::new(Error, 10, 90),
        ColorRole::Background => ToneStop::new(Neutral, 98, 6),
        ColorRole::OnBackground => ToneStop::new(Neutral, 10, 90),
        ColorRole::Surface => ToneStop::new(Neutral, 98, 6),
        ColorRole::OnSurface => ToneStop::new(Neutral, 10, 90),
        ColorRole::SurfaceVariant => ToneStop::new(NeutralVariant, 90, 30),
        ColorRole::OnSurfaceVariant => ToneStop::new(NeutralVariant, 30, 80),
        ColorRole::Outline => ToneStop::new(NeutralVariant, 50, 60),
        ColorRole::OutlineVariant => ToneStop::new(NeutralVariant, 80, 30),
        ColorRole::Shadow => ToneStop::new(Neutral, 0, 0),
        ColorRole::Scrim => ToneStop::new(Neutral, 0, 0),
        ColorRole::InverseSurface => ToneStop::new(Neutral, 20, 90),
        ColorRole::InverseOnSurface => ToneStop::new(Neutral, 95, 20),
        ColorRole::InversePrimary => ToneStop::new(Primary, 80, 40),
        ColorRole::SurfaceTint => ToneStop::new(Primary, 40, 80),
        ColorRole::SurfaceDim => ToneStop::new(Neutral, 87, 6),
        ColorRole::SurfaceBright => ToneStop::new(Neutral, 98, 24),
        ColorRole::SurfaceContainerLowest => ToneStop::new(Neutral, 100, 4),
        ColorRole::SurfaceContainerLow => ToneStop::new(Neutral, 96, 10),
        ColorRole::SurfaceContainer => ToneStop::new(Neutral, 94, 12),
        ColorRole::SurfaceContainerHigh => ToneStop::new(Neutral, 92, 17),
        ColorRole::SurfaceContainerHighest => ToneStop::new(Neutral, 90, 22),
        // Fixed roles keep their tone in both modes.
        ColorRole::PrimaryFixed => ToneStop::new(Primary, 90, 90),
        ColorRole::PrimaryFixedDim => ToneStop::new(Primary, 80, 80),
        ColorRole::OnPrimaryFixed => ToneStop::new(Primary, 10, 10),
        ColorRole::OnPrimaryFixedVariant => ToneStop::new(Primary, 30, 30),
        ColorRole::SecondaryFixed => ToneStop::new(Secondary, 90, 90),
        ColorRole::SecondaryFixedDim => ToneStop::new(Secondary, 80, 80),
        ColorRole::OnSecondaryFixed => ToneStop::new(Secondary, 10, 10),
        ColorRole::OnSecondaryFixedVariant => ToneStop::new(Secondary, 30, 30),
        ColorRole::TertiaryFixed => ToneStop::new(Tertiary, 90, 90),
        ColorRole::TertiaryFixedDim => ToneStop::new(Tertiary, 80, 80),
        ColorRole::OnTertiaryFixed => ToneStop::new(Tertiary, 10, 10),
        ColorRole::OnTertiaryFixedVariant => ToneStop::new(Tertiary, 30, 30),
    }
}

/// Ordered mapping from token name to `#rrggbb` value.
///
/// Always holds every canonical token exactly once; iteration follows
/// [`ColorRole::ALL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMap {
    mode: ThemeMode,
    entries: BTreeMap<ColorRole, Rgb>,
}

impl TokenMap {
    /// Mode the tokens were projected for.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Hex value of the token called `name`, e.g. `on-primary`.
    pub fn get(&self, name: &str) -> Option<String> {
        ColorRole::from_token_name(name).and_then(|role| self.color(role).map(Rgb::to_hex))
    }

    /// Color of `role`.
    pub fn color(&self, role: ColorRole) -> Option<Rgb> {
        self.entries.get(&role).copied()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a projected map.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(token name, color)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Rgb)> + '_ {
        self.entries
            .iter()
            .map(|(role, color)| (role.token_name(), *color))
    }

    /// Renders the tokens as CSS custom properties inside `selector`.
    ///
    /// ```
    /// use tessera_theme::{ThemeMode, Variant, build_theme, project_tokens};
    ///
    /// let theme = build_theme("#006494", Variant::TonalSpot, 0.0, &[]).unwrap();
    /// let css = project_tokens(&theme, ThemeMode::Light).to_css(":root", "md-sys-color");
    /// assert!(css.contains("--md-sys-color-primary: #"));
    /// ```
    pub fn to_css(&self, selector: &str, prefix: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, color) in self.iter() {
            css.push_str(&format!("  --{prefix}-{name}: {color};\n"));
        }
        css.push_str("}\n");
        css
    }
}

impl Serialize for TokenMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, color) in self.iter() {
            map.serialize_entry(name, &color)?;
        }
        map.end()
    }
}

/// Projects `theme` for `mode` with [`Projection::RoleDirect`].
pub fn project_tokens(theme: &MaterialTheme, mode: ThemeMode) -> TokenMap {
    project_tokens_with(theme, mode, Projection::RoleDirect)
}

/// Projects `theme` for `mode` with an explicit projection policy.
pub fn project_tokens_with(
    theme: &MaterialTheme,
    mode: ThemeMode,
    projection: Projection,
) -> TokenMap {
    let scheme = theme.scheme(mode);
    let entries: BTreeMap<_, _> = ColorRole::ALL
        .into_iter()
        .map(|role| {
            let color = match projection {
                Projection::RoleDirect => scheme.role(role),
                Projection::ToneDirect => {
                    let stop = tone_stop(role);
                    scheme.palette(stop.palette).tone(stop.tone(mode))
                }
            };
            (role, color)
        })
        .collect();
    debug_assert_eq!(entries.len(), ROLE_COUNT);
    debug!(
        "Projected {} tokens for {mode} mode ({projection}) from {}",
        entries.len(),
        theme.source
    );

    TokenMap { mode, entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        theme::{CustomColor, build_theme},
        variant::Variant,
    };

    fn theme() -> MaterialTheme {
        build_theme(0x006494, Variant::TonalSpot, 0.0, &[]).unwrap()
    }

    fn assert_hex(value: &str) {
        assert_eq!(value.len(), 7, "{value}");
        assert!(value.starts_with('#'));
        assert!(value[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_every_mode_has_every_token() {
        let theme = theme();
        for projection in [Projection::RoleDirect, Projection::ToneDirect] {
            for mode in [ThemeMode::Light, ThemeMode::Dark] {
                let tokens = project_tokens_with(&theme, mode, projection);
                assert_eq!(tokens.len(), ROLE_COUNT);
                assert_eq!(tokens.mode(), mode);
                for role in ColorRole::ALL {
                    assert_hex(&tokens.get(role.token_name()).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_primary_and_on_primary_differ() {
        let tokens = project_tokens(&theme(), ThemeMode::Light);
        let primary = tokens.get("primary").unwrap();
        let on_primary = tokens.get("on-primary").unwrap();
        assert_ne!(primary, on_primary);
    }

    #[test]
    fn test_role_direct_reads_scheme_roles() {
        let theme = theme();
        let tokens = project_tokens(&theme, ThemeMode::Dark);
        for role in ColorRole::ALL {
            assert_eq!(tokens.color(role), Some(theme.schemes.dark.role(role)));
        }
    }

    #[test]
    fn test_tone_direct_reads_fixed_stops() {
        let theme = theme();
        let light = project_tokens_with(&theme, ThemeMode::Light, Projection::ToneDirect);
        let dark = project_tokens_with(&theme, ThemeMode::Dark, Projection::ToneDirect);
        let primary_palette = theme.schemes.light.palette(PaletteKind::Primary);
        assert_eq!(light.color(ColorRole::Primary), Some(primary_palette.tone(40)));
        let dark_primary_palette = theme.schemes.dark.palette(PaletteKind::Primary);
        assert_eq!(dark.color(ColorRole::Primary), Some(dark_primary_palette.tone(80)));
        assert_eq!(light.color(ColorRole::Scrim), Some(Rgb::BLACK));
        assert_eq!(light.color(ColorRole::SurfaceContainerLowest), Some(Rgb::WHITE));
    }

    #[test]
    fn test_fixed_roles_share_stops_across_modes() {
        for role in ColorRole::ALL {
            let stop = tone_stop(role);
            if role.token_name().contains("fixed") {
                assert_eq!(stop.light, stop.dark, "{role}");
            }
            assert!(stop.light <= 100 && stop.dark <= 100);
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let custom = [CustomColor::new("brand", 0xFF0000, true)];
        let first = build_theme("#006494", Variant::Rainbow, 0.0, &custom).unwrap();
        let second = build_theme("#006494", Variant::Rainbow, 0.0, &custom).unwrap();
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let a = project_tokens(&first, mode);
            let b = project_tokens(&second, mode);
            assert_eq!(a, b);
            assert_eq!(
                a.to_css(":root", DEFAULT_CSS_PREFIX),
                b.to_css(":root", DEFAULT_CSS_PREFIX)
            );
        }
    }

    #[test]
    fn test_unknown_token_name() {
        let tokens = project_tokens(&theme(), ThemeMode::Light);
        assert_eq!(tokens.get("color-primary"), None);
        assert_eq!(tokens.get(""), None);
    }

    #[test]
    fn test_css_rendering() {
        let tokens = project_tokens(&theme(), ThemeMode::Light);
        let css = tokens.to_css("body", "md-sys-color");
        assert!(css.starts_with("body {\n"));
        assert!(css.ends_with("}\n"));
        assert_eq!(css.matches("--md-sys-color-").count(), ROLE_COUNT);
        let primary = tokens.get("primary").unwrap();
        assert!(css.contains(&format!("  --md-sys-color-primary: {primary};\n")));
    }

    #[test]
    fn test_json_serialization() {
        let tokens = project_tokens(&theme(), ThemeMode::Dark);
        let value = serde_json::to_value(&tokens).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), ROLE_COUNT);
        assert_eq!(
            object["surface-container-high"].as_str().map(str::to_owned),
            tokens.get("surface-container-high")
        );
    }

    #[test]
    fn test_projection_parsing() {
        assert_eq!("tone-direct".parse::<Projection>().unwrap(), Projection::ToneDirect);
        assert_eq!("ROLE_DIRECT".parse::<Projection>().unwrap(), Projection::RoleDirect);
        assert!("diagonal".parse::<Projection>().is_err());
    }
}
