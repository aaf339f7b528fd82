use leptos::prelude::*;

use super::SectionHeader;
use crate::content::{SERVICES, SERVICES_HEADING, Service};

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <SectionHeader heading=SERVICES_HEADING />
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|&service| view! { <ServiceCard service=service /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Service card; the PRO badge exists only for `pro` services.
#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <article class="service-card" data-key=service.title data-pro=service.pro.to_string()>
            <h3 class="card-title">{service.title}</h3>
            <p class="card-description">{service.description}</p>
            {service.pro.then(|| view! { <ProBadge /> })}
        </article>
    }
}

#[component]
fn ProBadge() -> impl IntoView {
    view! { <span class="pro-badge">"PRO"</span> }
}
