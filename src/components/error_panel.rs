//! Error Panel Component
//!
//! Inline fetch failure message with a retry button.

use leptos::prelude::*;

use crate::context::use_list_context;

#[component]
pub fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    let ctx = use_list_context();

    view! {
        <div class="error-panel">
            <p>{message}</p>
            <button class="primary-btn" on:click=move |_| ctx.retry()>
                "Try Again"
            </button>
        </div>
    }
}
