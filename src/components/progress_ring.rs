//! Progress Ring Component
//!
//! Circular loading indicator driven by the loader progress.

use leptos::prelude::*;

use crate::board::BoardStateStoreFields;
use crate::loader::RING_CIRCUMFERENCE;
use crate::store::use_board_store;

#[component]
pub fn ProgressRing() -> impl IntoView {
    let store = use_board_store();
    let dash_offset = move || store.progress().get().dash_offset().to_string();
    let percent = move || store.progress().get().value().to_string();

    view! {
        <div class="progress-overlay">
            <svg width="100" height="100" viewBox="0 0 100 100" role="progressbar" aria-valuenow=percent>
                <circle
                    class="progress-ring"
                    cx="50"
                    cy="50"
                    r="40"
                    stroke="#007bff"
                    stroke-width="8"
                    fill="none"
                    stroke-dasharray=RING_CIRCUMFERENCE.to_string()
                    stroke-dashoffset=dash_offset
                />
            </svg>
        </div>
    }
}
