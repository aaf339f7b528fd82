use leptos::prelude::*;

use super::{Icon, SectionHeader};
use crate::content::{FEATURES, FEATURES_HEADING, Feature};

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <SectionHeader heading=FEATURES_HEADING />
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|&feature| view! { <FeatureCard feature=feature /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card" data-key=feature.title>
            <div class="feature-icon">
                <Icon icon=feature.icon size="24" />
            </div>
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-description">{feature.description}</p>
        </article>
    }
}
