//! Light/dark theme model and the reactive context that carries it.
//!
//! The theme is the only piece of state the page reacts to: the hero image
//! swaps between two fixed files and the toggle in the nav flips it.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

/// Hero screenshot used on light backgrounds
pub const HERO_IMAGE_LIGHT: &str = "/hero-image-light.jpeg";
/// Hero screenshot used on dark backgrounds
pub const HERO_IMAGE_DARK: &str = "/hero-image-dark.png";

/// Color scheme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light palette
    Light,
    /// Dark palette (default)
    #[default]
    Dark,
}

impl Theme {
    /// Image shown in the hero section for this theme.
    pub fn hero_image(self) -> &'static str {
        match self {
            Theme::Light => HERO_IMAGE_LIGHT,
            Theme::Dark => HERO_IMAGE_DARK,
        }
    }

    /// Lowercase name, also used as the root CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Lenient conversion from a stored preference.
    ///
    /// Only an exact `"light"` selects [`Theme::Light`]; `"system"`, empty
    /// strings and anything unrecognized fall through to dark.
    pub fn from_preference(value: &str) -> Self {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a theme name is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

/// Reactive theme handle shared through Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    /// Current theme; writing to it re-renders theme-dependent views
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Create a context holding `initial`.
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

/// Create a [`ThemeContext`] and make it available to descendants.
pub fn provide_theme_context(initial: Theme) -> ThemeContext {
    let ctx = ThemeContext::new(initial);
    provide_context(ctx);
    ctx
}

/// Look up the theme context, falling back to a default-themed one.
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext::new(Theme::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_image_switches_with_theme() {
        assert_eq!(Theme::Light.hero_image(), "/hero-image-light.jpeg");
        assert_eq!(Theme::Dark.hero_image(), "/hero-image-dark.png");
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn toggled_swaps() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn from_preference_only_accepts_exact_light() {
        assert_eq!(Theme::from_preference("light"), Theme::Light);
        assert_eq!(Theme::from_preference("dark"), Theme::Dark);
        assert_eq!(Theme::from_preference("system"), Theme::Dark);
        assert_eq!(Theme::from_preference(""), Theme::Dark);
        assert_eq!(Theme::from_preference("Light"), Theme::Dark);
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
        let err = "system".parse::<Theme>().unwrap_err();
        assert_eq!(err, ThemeParseError("system".into()));
        assert!(err.to_string().contains("system"));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn context_toggle_updates_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_theme_context(Theme::Light);
            ctx.toggle();
            assert_eq!(ctx.theme.get_untracked(), Theme::Dark);
            assert_eq!(use_theme_context().theme.get_untracked(), Theme::Dark);
        });
    }

    #[test]
    fn missing_context_falls_back_to_default() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_theme_context().theme.get_untracked(), Theme::Dark);
        });
    }
}
