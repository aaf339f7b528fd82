//! Hard-coded page copy.
//!
//! Every list here is a compile-time constant; the section components map
//! them straight into cards.

use crate::components::LucideIcon;

/// One product claim in the benefits grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    /// Icon shown in the card header
    pub icon: LucideIcon,
    /// Card title
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
}

/// One offered service; `pro` services carry a PRO badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    /// Card title
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
    /// Whether the service is part of the paid tier
    pub pro: bool,
}

/// One capability in the features grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Icon shown above the title
    pub icon: LucideIcon,
    /// Card title
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
}

/// Question/answer pair in the FAQ accordion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    /// Question, always visible
    pub question: &'static str,
    /// Answer, shown when expanded
    pub answer: &'static str,
}

/// Heading block shared by the grid sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionHeading {
    /// Small accent line above the title
    pub eyebrow: &'static str,
    /// Section title
    pub title: &'static str,
    /// Lead paragraph
    pub description: &'static str,
}

pub const BRAND: &str = "Entropy";

pub const HERO_BADGE: &str = "Try our Bot !";
pub const HERO_BADGE_HREF: &str = "#";
pub const HERO_TITLE_LEAD: &str = "Experience the Power of";
pub const HERO_TITLE_ACCENT: &str = "Entropy";
pub const HERO_TITLE_TAIL: &str = "with AI Assisted Trading.";
pub const HERO_SUBTITLE: &str = "We are more than just a tool, we are a community of passionate \
     traders. Get access to exclusive resources, tutorials, and support.";
pub const HERO_PRIMARY_CTA: &str = "Get Started";
pub const HERO_PRIMARY_HREF: &str = "#benefits";
pub const HERO_SECONDARY_CTA: &str = "Github Repository";
pub const HERO_REPOSITORY_URL: &str = "#";
pub const HERO_IMAGE_ALT: &str = "dashboard";
pub const HERO_IMAGE_SIZE: &str = "1200";

pub const BENEFITS_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Benefits",
    title: "Take this chance",
    description: "Entropy is a platform that provides AI-generated trade suggestions. \
        Users can subscribe to AI models, run inferences for specific tokens, and receive \
        cryptographic proof for verification.",
};

pub const BENEFITS: [Benefit; 4] = [
    Benefit {
        icon: LucideIcon::Blocks,
        title: "Wallet Integration",
        description: "We create the user's wallet directly from Telegram using Argent X wallet functions.",
    },
    Benefit {
        icon: LucideIcon::LineChart,
        title: "More Trades",
        description: "Our model is trained to predict the next profitable trade to take on Starknet.",
    },
    Benefit {
        icon: LucideIcon::Wallet,
        title: "Green Portfolio",
        description: "Our AI model predicts the right move for you and you can act on that prediction.",
    },
    Benefit {
        icon: LucideIcon::Sparkle,
        title: "Telegram Bot",
        description: "A one-stop Telegram bot you can use for sending and receiving tokens.",
    },
];

pub const FEATURES_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Features",
    title: "What Makes Us Different",
    description: "Forecasts you can check, a wallet you already carry, and a bot that lives \
        where you chat.",
};

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: LucideIcon::LineChart,
        title: "Token Forecasts",
        description: "Run an inference for any supported Starknet token and get the predicted next move.",
    },
    Feature {
        icon: LucideIcon::ShieldCheck,
        title: "Verifiable Proofs",
        description: "Every suggestion ships with a cryptographic proof you can verify on your own.",
    },
    Feature {
        icon: LucideIcon::Sparkle,
        title: "Model Subscriptions",
        description: "Subscribe to the AI models that match your strategy and switch at any time.",
    },
    Feature {
        icon: LucideIcon::Send,
        title: "Chat-Native Transfers",
        description: "Send and receive tokens without leaving Telegram.",
    },
    Feature {
        icon: LucideIcon::Wallet,
        title: "Self-Custody",
        description: "Wallets are created with Argent X account functions and stay under your control.",
    },
    Feature {
        icon: LucideIcon::Blocks,
        title: "Built on Starknet",
        description: "Low fees and fast confirmation make acting on a signal practical.",
    },
];

pub const SERVICES_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Services",
    title: "Grow Your Portfolio",
    description: "From your first trade to a tuned strategy, pick the tools you need. \
        Core services are free; optimization is part of the PRO tier.",
};

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Trade",
        description: "Act on AI trade suggestions straight from the bot.",
        pro: false,
    },
    Service {
        title: "Wallet Integrations",
        description: "Create and connect Argent X wallets from a chat message.",
        pro: false,
    },
    Service {
        title: "Bot Integrations",
        description: "Use the Telegram bot for transfers and alerts.",
        pro: false,
    },
    Service {
        title: "Optimization",
        description: "Portfolio-level tuning of position sizes and timing.",
        pro: true,
    },
];

pub const FAQ_HEADING: SectionHeading = SectionHeading {
    eyebrow: "FAQ",
    title: "Common Questions",
    description: "Short answers to what people ask before their first trade.",
};

pub const FAQS: [FaqEntry; 5] = [
    FaqEntry {
        question: "Is Entropy free to use?",
        answer: "Trading, wallet and bot services are free. Optimization is a PRO service.",
    },
    FaqEntry {
        question: "Which network does Entropy run on?",
        answer: "Entropy targets Starknet and uses Argent X account functions for wallets.",
    },
    FaqEntry {
        question: "Does Entropy trade on my behalf?",
        answer: "No. The model suggests a move; you decide whether to take it.",
    },
    FaqEntry {
        question: "How can I verify a prediction?",
        answer: "Each inference comes with a cryptographic proof that can be checked independently.",
    },
    FaqEntry {
        question: "How do I start?",
        answer: "Open the Telegram bot, create a wallet, and request your first forecast.",
    },
];

pub const FOOTER_COPYRIGHT: &str = "© 2025 Entropy. All rights reserved.";
