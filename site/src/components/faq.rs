use leptos::prelude::*;

use super::{Icon, LucideIcon, SectionHeader};
use crate::content::{FAQ_HEADING, FAQS, FaqEntry};

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="faq">
            <div class="container faq-container">
                <SectionHeader heading=FAQ_HEADING />
                <div class="faq-list">
                    {FAQS.iter().map(|&entry| view! { <FaqItem entry=entry /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Accordion row, collapsed until the question is clicked
#[component]
fn FaqItem(
    entry: FaqEntry,
    #[prop(default = RwSignal::new(false))] is_open: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="faq-item" class:open=move || is_open.get()>
            <button
                class="faq-question"
                on:click=move |_| toggle(is_open)
                aria-expanded=move || is_open.get().to_string()
            >
                <span>{entry.question}</span>
                <Icon icon=LucideIcon::ChevronDown size="20" class="faq-chevron" />
            </button>
            <div class="faq-answer" hidden=move || !is_open.get()>
                <p>{entry.answer}</p>
            </div>
        </div>
    }
}

fn toggle(is_open: RwSignal<bool>) {
    is_open.update(|open| *open = !*open);
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::render_fragment;

    #[test]
    fn items_start_collapsed() {
        let html = render_fragment(|| view! { <FaqSection /> });
        assert_eq!(html.matches("aria-expanded=\"false\"").count(), FAQS.len());
        assert!(!html.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn renders_every_question() {
        let html = render_fragment(|| view! { <FaqSection /> });
        assert!(html.contains("id=\"faq\""));
        for entry in FAQS {
            assert!(html.contains(entry.question), "missing {}", entry.question);
        }
    }

    #[test]
    fn toggled_item_is_expanded() {
        let html = render_fragment(|| {
            let is_open = RwSignal::new(false);
            toggle(is_open);
            view! { <FaqItem entry=FAQS[0] is_open=is_open /> }
        });
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(!html.contains(" hidden"));
    }

    #[test]
    fn second_toggle_collapses_again() {
        let html = render_fragment(|| {
            let is_open = RwSignal::new(false);
            toggle(is_open);
            toggle(is_open);
            view! { <FaqItem entry=FAQS[0] is_open=is_open /> }
        });
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains(" hidden"));
    }
}
