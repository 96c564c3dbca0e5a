//! UI Components
//!
//! Leptos components for the list creation board.

mod arrows;
mod progress_ring;
mod error_panel;
mod item_card;
mod list_panel;
mod action_bar;

pub use arrows::{LeftArrow, RightArrow};
pub use progress_ring::ProgressRing;
pub use error_panel::ErrorPanel;
pub use item_card::ItemCard;
pub use list_panel::ListPanel;
pub use action_bar::ActionBar;
