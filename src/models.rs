//! Frontend Models
//!
//! Data structures matching the list service payload.

use serde::{Deserialize, Serialize};

/// A single list entry as returned by the list service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Group the item originated from. Not rewritten when the item moves into list 3.
    pub list_number: u32,
}

impl ListItem {
    /// Render key. Ids are only unique within their origin group, and list 3
    /// holds items from both.
    pub fn key(&self) -> (u32, u32) {
        (self.list_number, self.id)
    }
}

/// Response body of `GET /list-creation/lists`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListsResponse {
    pub lists: Vec<ListItem>,
}

/// One of the three rendered panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListGroup {
    One,
    Two,
    Three,
}

impl ListGroup {
    pub const fn number(self) -> u32 {
        match self {
            ListGroup::One => 1,
            ListGroup::Two => 2,
            ListGroup::Three => 3,
        }
    }

    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(ListGroup::One),
            2 => Some(ListGroup::Two),
            3 => Some(ListGroup::Three),
            _ => None,
        }
    }

    pub fn title(self, count: usize) -> String {
        format!("List {}({})", self.number(), count)
    }
}
