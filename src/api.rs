//! List Service Client
//!
//! Reads the remote lists and splits them into the two source groups.

use crate::error::FetchError;
use crate::models::{ListItem, ListsResponse};

/// Fetch every list entry from the service
pub async fn fetch_lists(url: &str) -> Result<Vec<ListItem>, FetchError> {
    tracing::debug!(url, "fetching lists");
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body: ListsResponse = response.json().await?;
    tracing::debug!(count = body.lists.len(), "lists received");
    Ok(body.lists)
}

/// Lists split by origin group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionedLists {
    pub list_one: Vec<ListItem>,
    pub list_two: Vec<ListItem>,
}

/// Split items by `list_number`. Items outside groups 1 and 2 are dropped.
pub fn partition_lists(items: Vec<ListItem>) -> PartitionedLists {
    let mut partitioned = PartitionedLists::default();
    let mut dropped = 0usize;
    for item in items {
        match item.list_number {
            1 => partitioned.list_one.push(item),
            2 => partitioned.list_two.push(item),
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "ignored items outside lists 1 and 2");
    }
    partitioned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, list_number: u32) -> ListItem {
        ListItem {
            id,
            name: format!("Item {}", id),
            description: format!("Description {}", id),
            list_number,
        }
    }

    #[test]
    fn test_partition_by_list_number() {
        let items = vec![make_item(1, 1), make_item(2, 2), make_item(3, 1), make_item(4, 2)];

        let partitioned = partition_lists(items);

        let ones: Vec<u32> = partitioned.list_one.iter().map(|i| i.id).collect();
        let twos: Vec<u32> = partitioned.list_two.iter().map(|i| i.id).collect();
        assert_eq!(ones, vec![1, 3]);
        assert_eq!(twos, vec![2, 4]);
    }

    #[test]
    fn test_partition_drops_other_groups() {
        let items = vec![make_item(1, 1), make_item(2, 3), make_item(3, 0), make_item(4, 2)];

        let partitioned = partition_lists(items);

        let all: Vec<u32> = partitioned
            .list_one
            .iter()
            .chain(partitioned.list_two.iter())
            .map(|i| i.id)
            .collect();
        assert_eq!(all, vec![1, 4]);
    }

    #[test]
    fn test_partition_empty() {
        assert_eq!(partition_lists(Vec::new()), PartitionedLists::default());
    }
}
