use leptos::prelude::*;

use super::{Icon, LucideIcon};
use crate::content::BRAND;
use crate::theme::{Theme, use_theme_context};

/// Anchor links shown in the header, in page order
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#benefits", "Benefits"),
    ("#features", "Features"),
    ("#services", "Services"),
    ("#faq", "FAQ"),
];

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href="#hero" class="nav-brand">{BRAND}</a>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| view! { <a href=href class="nav-link">{label}</a> })
                        .collect::<Vec<_>>()}
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}

/// Flips the context theme; shows the sun in dark mode and the moon in light mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme_context();
    let theme = ctx.theme;

    view! {
        <button
            class="theme-toggle"
            title="Toggle light/dark mode"
            aria-label="Toggle theme"
            data-theme=move || theme.get().as_str()
            on:click=move |_| ctx.toggle()
        >
            {move || {
                let icon = match theme.get() {
                    Theme::Dark => LucideIcon::Sun,
                    Theme::Light => LucideIcon::Moon,
                };
                view! { <Icon icon=icon size="20" /> }
            }}
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::render_fragment;
    use crate::theme::provide_theme_context;

    #[test]
    fn toggle_icon_follows_theme() {
        let html = render_fragment(|| {
            provide_theme_context(Theme::Dark);
            view! { <ThemeToggle /> }
        });
        assert!(html.contains("data-icon=\"Sun\""));
        assert!(html.contains("data-theme=\"dark\""));

        let html = render_fragment(|| {
            provide_theme_context(Theme::Light);
            view! { <ThemeToggle /> }
        });
        assert!(html.contains("data-icon=\"Moon\""));
    }

    #[test]
    fn links_every_section() {
        let html = render_fragment(|| view! { <Nav /> });
        for (href, label) in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{href}\"")));
            assert!(html.contains(label));
        }
    }
}
