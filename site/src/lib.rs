//! # entropy-site
//!
//! Leptos components for the Entropy landing page, plus a static renderer.
//!
//! The same components run in two places:
//!
//! - **SSR** (`ssr` feature, default) - [`render_page`] turns the page into a
//!   complete HTML document; the `entropy-export` CLI writes it to disk.
//! - **CSR** (`csr` feature) - the `entropy-landing` wasm app mounts
//!   [`components::LandingPage`] in the browser and owns theme persistence.
//!
//! ## Quick Start
//!
//! ```rust
//! use entropy_site::{render_page, Theme};
//!
//! let html = render_page(Theme::Light);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("/hero-image-light.jpeg"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - hard-coded copy and the benefit/service/feature/FAQ lists
//! - [`theme`] - light/dark model and its reactive context
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ---
//!
//! Developed by The Entropy Team (c)2025

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod styles;
pub mod theme;

pub use theme::{Theme, ThemeContext, ThemeParseError, provide_theme_context, use_theme_context};

#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page for `theme`.
///
/// Returns a full HTML document, including `<!DOCTYPE html>`.
///
/// ```rust
/// use entropy_site::{render_page, Theme};
///
/// let html = render_page(Theme::Dark);
/// assert!(html.contains("class=\"dark\""));
/// assert!(html.contains("/hero-image-dark.png"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(theme: Theme) -> String {
    render_document(theme, None)
}

/// Like [`render_page`], but the document links `stylesheet` instead of
/// inlining the CSS. The caller ships [`styles::SITE_CSS`] at that href.
///
/// ```rust
/// use entropy_site::{render_page_linked, Theme};
///
/// let html = render_page_linked(Theme::Light, "styles.css");
/// assert!(html.contains("href=\"styles.css\""));
/// assert!(!html.contains("<style>"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page_linked(theme: Theme, stylesheet: &'static str) -> String {
    render_document(theme, Some(stylesheet))
}

#[cfg(feature = "ssr")]
fn render_document(theme: Theme, stylesheet: Option<&'static str>) -> String {
    use components::LandingDocument;

    let html = render_fragment(move || view! { <LandingDocument theme=theme stylesheet=stylesheet /> });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render any view to an HTML string.
///
/// Runs under a fresh reactive [`Owner`], so signals and context work
/// without a browser.
#[cfg(feature = "ssr")]
pub fn render_fragment<V: RenderHtml>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn renders_full_document() {
        let html = render_page(Theme::Dark);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<style>"));
        assert!(html.contains("Entropy - AI Assisted Trading"));
        assert!(!html.contains("rel=\"stylesheet\""));
    }

    #[test]
    fn linked_page_references_stylesheet_instead_of_inlining() {
        let html = render_page_linked(Theme::Dark, "styles.css");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\""));
        assert!(!html.contains("<style>"));
        assert!(html.contains("/hero-image-dark.png"));
    }

    #[test]
    fn theme_sets_root_class_and_hero_image() {
        let light = render_page(Theme::Light);
        assert!(light.contains("class=\"light\""));
        assert!(light.contains("/hero-image-light.jpeg"));
        assert!(!light.contains("/hero-image-dark.png"));

        let dark = render_page(Theme::Dark);
        assert!(dark.contains("class=\"dark\""));
        assert!(dark.contains("/hero-image-dark.png"));
        assert!(!dark.contains("/hero-image-light.jpeg"));
    }

    #[test]
    fn page_has_one_pro_badge_and_four_benefits() {
        let html = render_page(Theme::Dark);

        assert_eq!(html.matches("class=\"benefit-card\"").count(), 4);
        assert_eq!(html.matches("class=\"pro-badge\"").count(), 1);
    }
}
