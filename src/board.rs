//! Board State and Reducer
//!
//! Every transition of the widget is `reduce(&state, action) -> Transition`.
//! The reducer never touches the DOM or the network; side effects are
//! returned as a [`Command`] for the context to run.

use std::collections::BTreeSet;

use reactive_stores::Store;
use serde::Serialize;

use crate::api::{partition_lists, PartitionedLists};
use crate::error::MergeError;
use crate::loader::{Progress, Tick};
use crate::models::{ListGroup, ListItem};

/// Number of lists that must be selected before a merge
pub const REQUIRED_SELECTION: usize = 2;

const PLACEHOLDER_DESCRIPTION: &str = "This is a dynamically created list.";

/// Lifecycle of the list request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Loader still running, nothing requested yet
    #[default]
    Pending,
    InFlight,
    Failed(String),
    Loaded,
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Pending | FetchState::InFlight)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Complete widget state
#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct BoardState {
    pub progress: Progress,
    pub fetch: FetchState,
    pub list_one: Vec<ListItem>,
    pub list_two: Vec<ListItem>,
    pub list_three: Vec<ListItem>,
    /// Toggled list numbers
    pub selected: BTreeSet<u32>,
    pub show_list_three: bool,
    /// Placeholders appended on merge initiation. Never rendered.
    pub pending_lists: Vec<ListItem>,
}

impl BoardState {
    pub fn is_selected(&self, group: ListGroup) -> bool {
        self.selected.contains(&group.number())
    }

    fn list_mut(&mut self, group: ListGroup) -> &mut Vec<ListItem> {
        match group {
            ListGroup::One => &mut self.list_one,
            ListGroup::Two => &mut self.list_two,
            ListGroup::Three => &mut self.list_three,
        }
    }

    fn submission(&self) -> Submission {
        Submission {
            list_one: self.list_one.clone(),
            list_two: self.list_two.clone(),
            list_three: self.list_three.clone(),
        }
    }
}

/// Snapshot of the three lists handed off on submit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub list_one: Vec<ListItem>,
    pub list_two: Vec<ListItem>,
    pub list_three: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Loader timer tick
    AdvanceProgress { step: u8 },
    /// Initial fetch after loading, or a retry
    Fetch,
    FetchSucceeded(Vec<ListItem>),
    FetchFailed(String),
    ToggleList(u32),
    CreateList,
    MoveItem { item_id: u32, from: ListGroup },
    Submit,
    Cancel,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Stop the loader timer
    StopProgress,
    /// Issue the list request
    StartFetch,
    Alert(MergeError),
    Submit(Submission),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: BoardState,
    pub commands: Vec<Command>,
}

impl Transition {
    fn unchanged(state: &BoardState) -> Self {
        Self { state: state.clone(), commands: Vec::new() }
    }
}

/// Apply `action` to `state`
pub fn reduce(state: &BoardState, action: Action) -> Transition {
    let mut next = state.clone();
    let mut commands = Vec::new();

    match action {
        Action::AdvanceProgress { step } => match next.progress.advance(step) {
            Tick::Advanced(_) => {}
            Tick::Completed => {
                commands.push(Command::StopProgress);
                commands.extend(begin_fetch(&mut next));
            }
            Tick::Idle => return Transition::unchanged(state),
        },
        Action::Fetch => match begin_fetch(&mut next) {
            Some(command) => commands.push(command),
            None => return Transition::unchanged(state),
        },
        Action::FetchSucceeded(items) => {
            let PartitionedLists { list_one, list_two } = partition_lists(items);
            next.list_one = list_one;
            next.list_two = list_two;
            next.fetch = FetchState::Loaded;
        }
        Action::FetchFailed(message) => {
            next.fetch = FetchState::Failed(message);
        }
        Action::ToggleList(number) => {
            if next.show_list_three {
                return Transition::unchanged(state);
            }
            if !next.selected.remove(&number) {
                next.selected.insert(number);
            }
            tracing::debug!(number, "list toggled");
        }
        Action::CreateList => {
            if next.selected.len() != REQUIRED_SELECTION {
                let err = MergeError::WrongSelectionCount { selected: next.selected.len() };
                return Transition { state: state.clone(), commands: vec![Command::Alert(err)] };
            }
            let number = next.pending_lists.len() as u32 + 3;
            next.pending_lists.push(ListItem {
                id: number,
                name: format!("List {}", number),
                description: PLACEHOLDER_DESCRIPTION.to_string(),
                list_number: ListGroup::Three.number(),
            });
            let both_sources = next.is_selected(ListGroup::One) && next.is_selected(ListGroup::Two);
            if both_sources {
                next.show_list_three = true;
            }
        }
        Action::MoveItem { item_id, from } => {
            if !next.show_list_three || from == ListGroup::Three {
                return Transition::unchanged(state);
            }
            let source = next.list_mut(from);
            let Some(index) = source.iter().position(|item| item.id == item_id) else {
                return Transition::unchanged(state);
            };
            let item = source.remove(index);
            next.list_three.push(item);
        }
        Action::Submit => {
            next.show_list_three = true;
            next.selected = BTreeSet::from([1, 2, 3]);
            commands.push(Command::Submit(next.submission()));
        }
        Action::Cancel => {
            for item in std::mem::take(&mut next.list_three) {
                match ListGroup::from_number(item.list_number) {
                    Some(ListGroup::One) => next.list_one.push(item),
                    Some(ListGroup::Two) => next.list_two.push(item),
                    _ => tracing::debug!(id = item.id, "dropping item with no source list"),
                }
            }
            next.show_list_three = false;
            next.selected.clear();
        }
    }

    Transition { state: next, commands }
}

/// Single-flight: no command while a request is outstanding
fn begin_fetch(state: &mut BoardState) -> Option<Command> {
    if state.fetch == FetchState::InFlight {
        tracing::debug!("fetch already in flight");
        return None;
    }
    state.fetch = FetchState::InFlight;
    Some(Command::StartFetch)
}
