//! Style surfaces that receive published token maps.

use parking_lot::RwLock;

use crate::token::{DEFAULT_CSS_PREFIX, TokenMap};

/// Receives the complete token map every time a store publishes.
///
/// Publishing is always a full replace; implementations never see partial
/// updates.
pub trait StyleSurface: Send + Sync {
    /// Applies `tokens`, replacing anything applied before.
    fn apply(&self, tokens: &TokenMap);
}

impl<F> StyleSurface for F
where
    F: Fn(&TokenMap) + Send + Sync,
{
    fn apply(&self, tokens: &TokenMap) {
        self(tokens)
    }
}

/// Renders published tokens as CSS custom properties on one selector.
pub struct CssStyleSurface {
    selector: String,
    prefix: String,
    stylesheet: RwLock<Option<String>>,
}

impl Default for CssStyleSurface {
    fn default() -> Self {
        Self::new(":root", DEFAULT_CSS_PREFIX)
    }
}

impl CssStyleSurface {
    /// Creates a surface writing `--<prefix>-<token>` properties on `selector`.
    pub fn new(selector: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            prefix: prefix.into(),
            stylesheet: RwLock::new(None),
        }
    }

    /// The most recently applied stylesheet, if any.
    pub fn stylesheet(&self) -> Option<String> {
        self.stylesheet.read().clone()
    }
}

impl StyleSurface for CssStyleSurface {
    fn apply(&self, tokens: &TokenMap) {
        let css = tokens.to_css(&self.selector, &self.prefix);
        *self.stylesheet.write() = Some(css);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ThemeMode, Variant, build_theme, project_tokens};

    #[test]
    fn test_css_surface_replaces_stylesheet() {
        let surface = CssStyleSurface::new("body", "app-color");
        assert!(surface.stylesheet().is_none());

        let blue = build_theme("#006494", Variant::TonalSpot, 0.0, &[]).unwrap();
        let red = build_theme("#ff0000", Variant::TonalSpot, 0.0, &[]).unwrap();

        surface.apply(&project_tokens(&blue, ThemeMode::Light));
        let first = surface.stylesheet().unwrap();
        assert!(first.starts_with("body {"));
        assert!(first.contains("--app-color-primary:"));

        let red_tokens = project_tokens(&red, ThemeMode::Light);
        surface.apply(&red_tokens);
        let second = surface.stylesheet().unwrap();
        assert_eq!(second, red_tokens.to_css("body", "app-color"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_closures_are_surfaces() {
        let seen = RwLock::new(0usize);
        let surface = |tokens: &TokenMap| *seen.write() += tokens.len();
        let theme = build_theme("#006494", Variant::TonalSpot, 0.0, &[]).unwrap();
        surface.apply(&project_tokens(&theme, ThemeMode::Dark));
        assert_eq!(*seen.read(), crate::scheme::ROLE_COUNT);
    }
}
