//! Root document component - the complete HTML page

use leptos::either::Either;
use leptos::prelude::*;

use super::LandingPage;
use crate::content::{BENEFITS_HEADING, BRAND};
use crate::styles::SITE_CSS;
use crate::theme::{Theme, provide_theme_context};

/// Full `<html>` document for static rendering.
///
/// Provides the theme context itself, so it can be rendered standalone.
/// With `stylesheet` set the page links that file instead of inlining
/// [`SITE_CSS`].
#[component]
pub fn LandingDocument(
    theme: Theme,
    #[prop(default = None)] stylesheet: Option<&'static str>,
) -> impl IntoView {
    let ctx = provide_theme_context(theme);
    let title = format!("{BRAND} - AI Assisted Trading");

    view! {
        <html lang="en" class=move || ctx.theme.get().as_str()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=BENEFITS_HEADING.description />
                <title>{title}</title>
                {match stylesheet {
                    Some(href) => Either::Left(view! { <link rel="stylesheet" href=href /> }),
                    None => Either::Right(view! { <style>{SITE_CSS}</style> }),
                }}
            </head>
            <body>
                <LandingPage />
            </body>
        </html>
    }
}
