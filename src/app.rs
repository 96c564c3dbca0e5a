//! List Creation App
//!
//! Loader, fetch error, and the three-panel board.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{Action, BoardState, BoardStateStoreFields, FetchState};
use crate::components::{ActionBar, ErrorPanel, ListPanel, ProgressRing};
use crate::config::AppConfig;
use crate::context::ListContext;
use crate::models::ListGroup;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(BoardState::default());
    let ctx = ListContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Loader runs on mount and hands off to the first fetch
    ctx.start_progress();

    let is_loading = move || store.fetch().with(FetchState::is_loading);
    let fetch_error = move || store.fetch().with(|fetch| fetch.error().map(str::to_string));
    let show_list_three = move || store.show_list_three().get();

    view! {
        <div class="list-creation">
            <Show when=is_loading>
                <ProgressRing />
            </Show>

            {move || fetch_error().map(|message| view! { <ErrorPanel message=message /> })}

            <Show when=move || !is_loading() && fetch_error().is_none()>
                <div class="board">
                    <div class="board-header">
                        <h1>"List Creation"</h1>
                        <button class="primary-btn" on:click=move |_| ctx.dispatch(Action::CreateList)>
                            "Create a new list"
                        </button>
                    </div>

                    <div class="board-columns">
                        <ListPanel group=ListGroup::One />
                        <Show when=show_list_three>
                            <ListPanel group=ListGroup::Three />
                        </Show>
                        <ListPanel group=ListGroup::Two />
                    </div>

                    <Show when=show_list_three>
                        <ActionBar />
                    </Show>
                </div>
            </Show>
        </div>
    }
}
