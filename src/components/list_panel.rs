//! List Panel Component
//!
//! Scrollable column for one list. Source lists show a selection checkbox
//! until list 3 is revealed, then per-card move controls.

use leptos::prelude::*;

use crate::board::{Action, BoardStateStoreFields};
use crate::components::ItemCard;
use crate::context::use_list_context;
use crate::models::{ListGroup, ListItem};
use crate::store::BoardStore;

fn group_items(store: BoardStore, group: ListGroup) -> Vec<ListItem> {
    match group {
        ListGroup::One => store.list_one().get(),
        ListGroup::Two => store.list_two().get(),
        ListGroup::Three => store.list_three().get(),
    }
}

#[component]
pub fn ListPanel(group: ListGroup) -> impl IntoView {
    let ctx = use_list_context();
    let store = ctx.store;
    let number = group.number();

    let items = Memo::new(move |_| group_items(store, group));
    let committed = move || store.show_list_three().get();
    let is_checked = move || store.selected().with(|selected| selected.contains(&number));
    let title = move || group.title(items.with(Vec::len));

    let header = move || {
        if group == ListGroup::Three || committed() {
            view! { <h3>{title}</h3> }.into_any()
        } else {
            view! {
                <h3>
                    <input
                        type="checkbox"
                        prop:checked=is_checked
                        on:change=move |_| ctx.dispatch(Action::ToggleList(number))
                    />
                    {title}
                </h3>
            }
            .into_any()
        }
    };

    let panel_class = if group == ListGroup::Three { "list-panel merged" } else { "list-panel" };

    view! {
        <div class=panel_class>
            {header}
            <For
                each=move || items.get()
                key=ListItem::key
                children=move |item| view! { <ItemCard item=item group=group /> }
            />
        </div>
    }
}
