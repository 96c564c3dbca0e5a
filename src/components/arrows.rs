//! Arrow Icons
//!
//! Move-control glyphs for the item cards.

use leptos::prelude::*;

/// Points toward list 3 from list 2
#[component]
pub fn LeftArrow() -> impl IntoView {
    view! {
        <svg class="arrow-icon" width="24" height="24" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M15 5 L8 12 L15 19" fill="none" stroke="currentColor" stroke-width="2" />
        </svg>
    }
}

/// Points toward list 3 from list 1
#[component]
pub fn RightArrow() -> impl IntoView {
    view! {
        <svg class="arrow-icon" width="24" height="24" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M9 5 L16 12 L9 19" fill="none" stroke="currentColor" stroke-width="2" />
        </svg>
    }
}
