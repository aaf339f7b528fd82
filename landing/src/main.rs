// Entropy Landing Page — Leptos 0.8 Edition
// Developed by The Entropy Team (c)2025

mod console;
mod theme_store;

use entropy_site::components::LandingPage;
use entropy_site::provide_theme_context;
use entropy_site::styles::SITE_CSS;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let ctx = provide_theme_context(theme_store::load_theme());

    // Runs on mount and again on every toggle
    Effect::new(move || {
        let theme = ctx.theme.get();
        theme_store::apply_theme(theme);
        theme_store::store_theme(theme);
    });

    Effect::new(move || {
        console::print_banner();
    });

    view! {
        <style>{SITE_CSS}</style>
        <LandingPage />
    }
}
