use leptos::prelude::*;

use crate::content::Icon;

/// Inline lucide icon. Colour follows `currentColor`, size comes from `class`.
#[component]
pub fn Glyph(icon: Icon, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
            inner_html=icon.svg_body()
        ></svg>
    }
}
