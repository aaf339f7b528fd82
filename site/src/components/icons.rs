//! Inline SVG icons from the [Lucide](https://lucide.dev/) set.
//!
//! Lucide icons are 24×24 stroke drawings; each variant stores the `d`
//! attribute of every path it needs.

use leptos::prelude::*;

/// Icons used across the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LucideIcon {
    Blocks,
    LineChart,
    Wallet,
    Sparkle,
    ShieldCheck,
    Send,
    ArrowRight,
    Sun,
    Moon,
    ChevronDown,
}

impl LucideIcon {
    /// Lucide identifier, e.g. `"LineChart"`.
    pub fn name(self) -> &'static str {
        match self {
            LucideIcon::Blocks => "Blocks",
            LucideIcon::LineChart => "LineChart",
            LucideIcon::Wallet => "Wallet",
            LucideIcon::Sparkle => "Sparkle",
            LucideIcon::ShieldCheck => "ShieldCheck",
            LucideIcon::Send => "Send",
            LucideIcon::ArrowRight => "ArrowRight",
            LucideIcon::Sun => "Sun",
            LucideIcon::Moon => "Moon",
            LucideIcon::ChevronDown => "ChevronDown",
        }
    }

    /// Stroke path data, drawn in order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            LucideIcon::Blocks => &[
                "M15 3h5a1 1 0 0 1 1 1v5a1 1 0 0 1-1 1h-5a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
                "M10 21V8a1 1 0 0 0-1-1H4a1 1 0 0 0-1 1v12a1 1 0 0 0 1 1h12a1 1 0 0 0 1-1v-5a1 1 0 0 0-1-1H3",
            ],
            LucideIcon::LineChart => &["M3 3v18h18", "m19 9-5 5-4-4-3 3"],
            LucideIcon::Wallet => &[
                "M21 12V7H5a2 2 0 0 1 0-4h14v4",
                "M3 5v14a2 2 0 0 0 2 2h16v-5",
                "M18 12a2 2 0 0 0 0 4h4v-4Z",
            ],
            LucideIcon::Sparkle => &[
                "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
            ],
            LucideIcon::ShieldCheck => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
                "m9 12 2 2 4-4",
            ],
            LucideIcon::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            LucideIcon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            LucideIcon::Sun => &[
                "M12 8a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            LucideIcon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            LucideIcon::ChevronDown => &["m6 9 6 6 6-6"],
        }
    }
}

/// Renders a Lucide icon as inline SVG.
///
/// ```rust,ignore
/// view! { <Icon icon=LucideIcon::Wallet size="32" class="benefit-icon" /> }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw
    icon: LucideIcon,
    /// Width and height in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Stroke color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke=color
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-icon=icon.name()
            aria-hidden="true"
        >
            {icon.paths().iter().map(|&d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}
