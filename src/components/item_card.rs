//! Item Card Component
//!
//! A single list entry. Cards in lists 1 and 2 gain a move control once
//! list 3 is revealed.

use leptos::prelude::*;

use crate::board::{Action, BoardStateStoreFields};
use crate::components::{LeftArrow, RightArrow};
use crate::context::use_list_context;
use crate::models::{ListGroup, ListItem};

#[component]
pub fn ItemCard(item: ListItem, group: ListGroup) -> impl IntoView {
    let ctx = use_list_context();
    let store = ctx.store;
    let item_id = item.id;

    let can_move = move || group != ListGroup::Three && store.show_list_three().get();

    // List 2 sits right of list 3, so its arrow points left
    let arrow = move || match group {
        ListGroup::Two => view! { <LeftArrow /> }.into_any(),
        _ => view! { <RightArrow /> }.into_any(),
    };

    view! {
        <div class="item-card">
            <h4>{item.name}</h4>
            <p>{item.description}</p>
            <Show when=can_move>
                <div class="card-actions">
                    <button
                        class="move-btn"
                        title="Move to List 3"
                        on:click=move |_| ctx.dispatch(Action::MoveItem { item_id, from: group })
                    >
                        {arrow}
                    </button>
                </div>
            </Show>
        </div>
    }
}
