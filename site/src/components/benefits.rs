use leptos::prelude::*;

use super::{Icon, SectionHeader};
use crate::content::{BENEFITS, BENEFITS_HEADING, Benefit};

/// Two-digit, 1-based card number (`01`, `02`, ...).
pub fn benefit_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[component]
pub fn BenefitsSection() -> impl IntoView {
    view! {
        <section id="benefits" class="benefits">
            <div class="container benefits-grid">
                <SectionHeader heading=BENEFITS_HEADING centered=false />
                <div class="benefits-cards">
                    {BENEFITS
                        .iter()
                        .enumerate()
                        .map(|(index, &benefit)| view! { <BenefitCard benefit=benefit index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn BenefitCard(benefit: Benefit, index: usize) -> impl IntoView {
    view! {
        <article class="benefit-card" data-key=benefit.title>
            <div class="benefit-card-header">
                <Icon icon=benefit.icon size="32" class="benefit-icon" />
                <span class="benefit-number">{benefit_number(index)}</span>
            </div>
            <h3 class="card-title">{benefit.title}</h3>
            <p class="card-description">{benefit.description}</p>
        </article>
    }
}
