//! Shared heading block for the grid sections

use leptos::prelude::*;

use crate::content::SectionHeading;

#[component]
pub fn SectionHeader(
    heading: SectionHeading,
    /// Center the block (services, features, FAQ) or keep it left-aligned (benefits)
    #[prop(default = true)]
    centered: bool,
) -> impl IntoView {
    let class = if centered {
        "section-header centered"
    } else {
        "section-header"
    };
    view! {
        <div class=class>
            <p class="section-eyebrow">{heading.eyebrow}</p>
            <h2 class="section-title">{heading.title}</h2>
            <p class="section-description">{heading.description}</p>
        </div>
    }
}
