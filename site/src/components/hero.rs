use leptos::prelude::*;

use super::{Icon, LucideIcon};
use crate::content::{
    HERO_BADGE, HERO_BADGE_HREF, HERO_IMAGE_ALT, HERO_IMAGE_SIZE, HERO_PRIMARY_CTA,
    HERO_PRIMARY_HREF, HERO_REPOSITORY_URL, HERO_SECONDARY_CTA, HERO_SUBTITLE, HERO_TITLE_ACCENT,
    HERO_TITLE_LEAD, HERO_TITLE_TAIL,
};
use crate::theme::use_theme_context;

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme_context().theme;

    view! {
        <section id="hero" class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <a href=HERO_BADGE_HREF class="hero-badge">
                        <span>{HERO_BADGE}</span>
                    </a>
                    <h1 class="hero-title">
                        {HERO_TITLE_LEAD}
                        " "
                        <span class="hero-title-accent">{HERO_TITLE_ACCENT}</span>
                        " "
                        {HERO_TITLE_TAIL}
                    </h1>
                    <p class="hero-description">{HERO_SUBTITLE}</p>
                    <div class="hero-actions">
                        <a href=HERO_PRIMARY_HREF class="btn btn-primary">
                            {HERO_PRIMARY_CTA}
                            <Icon icon=LucideIcon::ArrowRight size="20" class="btn-arrow" />
                        </a>
                        <a href=HERO_REPOSITORY_URL target="_blank" rel="noopener" class="btn btn-secondary">
                            {HERO_SECONDARY_CTA}
                        </a>
                    </div>
                </div>
                <HeroImage src=Signal::derive(move || theme.get().hero_image()) />
            </div>
        </section>
    }
}

#[component]
fn HeroImage(#[prop(into)] src: Signal<&'static str>) -> impl IntoView {
    view! {
        <div class="hero-image-frame">
            <div class="hero-image-glow"></div>
            <img
                class="hero-image"
                width=HERO_IMAGE_SIZE
                height=HERO_IMAGE_SIZE
                src=move || src.get()
                alt=HERO_IMAGE_ALT
            />
            <div class="hero-image-fade"></div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::render_fragment;
    use crate::theme::{Theme, provide_theme_context};

    fn render_hero(theme: Theme) -> String {
        render_fragment(move || {
            provide_theme_context(theme);
            view! { <Hero /> }
        })
    }

    #[test]
    fn light_theme_uses_light_image() {
        let html = render_hero(Theme::Light);
        assert!(html.contains("src=\"/hero-image-light.jpeg\""));
        assert!(!html.contains("hero-image-dark.png"));
    }

    #[test]
    fn dark_theme_uses_dark_image() {
        let html = render_hero(Theme::Dark);
        assert!(html.contains("src=\"/hero-image-dark.png\""));
        assert!(!html.contains("hero-image-light.jpeg"));
    }

    #[test]
    fn image_follows_theme_toggle() {
        let html = render_fragment(|| {
            let ctx = provide_theme_context(Theme::Light);
            ctx.toggle();
            view! { <Hero /> }
        });
        assert!(html.contains("src=\"/hero-image-dark.png\""));
        assert!(!html.contains("hero-image-light.jpeg"));
    }

    #[test]
    fn renders_copy_and_actions() {
        let html = render_hero(Theme::Dark);
        assert!(html.contains("Try our Bot !"));
        assert!(html.contains(">Entropy<"));
        assert!(html.contains("Get Started"));
        assert!(html.contains("Github Repository"));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("alt=\"dashboard\""));
    }
}
