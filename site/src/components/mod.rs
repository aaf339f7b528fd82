//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument (SSR only)
//! └── LandingPage
//!     ├── Nav
//!     │   └── ThemeToggle
//!     ├── Hero
//!     ├── BenefitsSection
//!     │   └── BenefitCard × 4
//!     ├── FeaturesSection
//!     ├── ServicesSection
//!     │   └── ServiceCard × 4 (PRO badge when flagged)
//!     ├── FaqSection
//!     └── Footer
//! ```
//!
//! The CSR app mounts [`LandingPage`] directly; the export path wraps it in
//! [`LandingDocument`].

mod benefits;
mod document;
mod faq;
mod features;
mod footer;
mod hero;
mod icons;
mod nav;
mod page;
mod section;
mod services;

pub use benefits::{BenefitCard, BenefitsSection, benefit_number};
pub use document::LandingDocument;
pub use faq::FaqSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::{Icon, LucideIcon};
pub use nav::{NAV_LINKS, Nav, ThemeToggle};
pub use page::LandingPage;
pub use section::SectionHeader;
pub use services::{ServiceCard, ServicesSection};
