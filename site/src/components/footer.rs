use leptos::prelude::*;

use crate::content::{BRAND, FOOTER_COPYRIGHT};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <span class="footer-brand">{BRAND}</span>
                <p class="footer-copyright">{FOOTER_COPYRIGHT}</p>
            </div>
        </footer>
    }
}
