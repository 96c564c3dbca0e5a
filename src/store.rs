//! Board Store
//!
//! Leptos reactive_stores holding the board state. The reducer result replaces
//! the whole root, which notifies every field; panels memoize their own list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{self, Action, BoardState, Command};

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

/// Run the reducer against the current state and write the result back.
/// Returns the commands the transition requested.
pub fn store_apply(store: &BoardStore, action: Action) -> Vec<Command> {
    let transition = store.with_untracked(|state| board::reduce(state, action));
    if store.with_untracked(|state| *state != transition.state) {
        *store.write() = transition.state;
    }
    transition.commands
}
