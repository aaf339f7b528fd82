use leptos::prelude::*;

use super::{BenefitsSection, FaqSection, FeaturesSection, Footer, Hero, Nav, ServicesSection};

/// The whole landing page, sections in their fixed order.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <BenefitsSection />
            <FeaturesSection />
            <ServicesSection />
            <FaqSection />
        </main>
        <Footer />
    }
}
