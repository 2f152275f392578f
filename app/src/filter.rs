//! View filter
//!
//! Pure derivation of the visible subset of todos from the full collection
//! and a filter mode. The visible view is never mutated independently.

use todoflow_client::Todo;

/// The user-selected subset criterion applied to the view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Show everything
    #[default]
    All,
    /// Only todos with `completed == false`
    Active,
    /// Only todos with `completed == true`
    Completed,
}

/// Derive the visible subset of `items` for the given mode
///
/// Pure and order-preserving: the result is a subsequence of `items`.
#[must_use]
pub fn visible(items: &[Todo], mode: FilterMode) -> Vec<Todo> {
    items
        .iter()
        .filter(|todo| match mode {
            FilterMode::All => true,
            FilterMode::Active => !todo.completed,
            FilterMode::Completed => todo.completed,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("todo {id}"),
            completed,
        }
    }

    #[test]
    fn all_returns_items_unchanged() {
        let items = vec![todo(1, false), todo(2, true), todo(3, false)];
        assert_eq!(visible(&items, FilterMode::All), items);
    }

    #[test]
    fn active_keeps_only_uncompleted() {
        let items = vec![todo(1, false), todo(2, true)];
        let shown = visible(&items, FilterMode::Active);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, 1);
    }

    #[test]
    fn completed_keeps_only_completed() {
        let items = vec![todo(1, false), todo(2, true)];
        let shown = visible(&items, FilterMode::Completed);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, 2);
    }

    #[test]
    fn active_and_completed_partition_the_collection() {
        let items = vec![todo(1, false), todo(2, true), todo(3, true), todo(4, false)];
        let active = visible(&items, FilterMode::Active);
        let completed = visible(&items, FilterMode::Completed);

        assert_eq!(active.len() + completed.len(), items.len());
        for item in &items {
            let in_active = active.iter().any(|t| t.id == item.id);
            let in_completed = completed.iter().any(|t| t.id == item.id);
            assert!(in_active ^ in_completed);
        }
    }

    #[test]
    fn order_is_preserved() {
        let items = vec![todo(3, true), todo(1, true), todo(2, true)];
        let shown = visible(&items, FilterMode::Completed);
        let ids: Vec<i64> = shown.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
