//! Action Bar Component
//!
//! Cancel / Submit pair shown while list 3 is visible.

use leptos::prelude::*;

use crate::board::Action;
use crate::context::use_list_context;

#[component]
pub fn ActionBar() -> impl IntoView {
    let ctx = use_list_context();

    view! {
        <div class="action-bar">
            <button class="secondary-btn" on:click=move |_| ctx.dispatch(Action::Cancel)>
                "Cancel"
            </button>
            <button class="primary-btn" on:click=move |_| ctx.dispatch(Action::Submit)>
                "Submit"
            </button>
        </div>
    }
}
