//! Context-menu actions for the current selection.
//!
//! The grid widget asks, for a given selection, which named actions to
//! offer; it later dispatches the chosen action back to the
//! [`TreeGrid`](crate::grid::TreeGrid) façade. Actions are only offered
//! for a single-row selection in row mode; every other selection shape
//! gets an empty list rather than an error.

use crate::row::RowId;
use crate::selection::SelectionMode;

/// A structural action available from the row context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Insert a sibling task after the selected row's subtree.
    AddTaskBelow,
    /// Insert a sibling task directly before the selected row.
    AddTaskAbove,
    /// Insert a group row plus one default child task below the selection.
    AddTaskGroupBelow,
    /// Re-parent the selected row under the row above it.
    MakeChildTask,
    /// Move the selected row one level up, next to its former parent.
    PromoteTask,
    /// Remove the selected row and its whole subtree.
    RemoveTask,
}

impl MenuAction {
    /// All actions, in menu order.
    pub const ALL: [MenuAction; 6] = [
        MenuAction::AddTaskBelow,
        MenuAction::AddTaskAbove,
        MenuAction::AddTaskGroupBelow,
        MenuAction::MakeChildTask,
        MenuAction::PromoteTask,
        MenuAction::RemoveTask,
    ];

    /// Stable identifier for dispatch plumbing.
    pub fn id(&self) -> &'static str {
        match self {
            MenuAction::AddTaskBelow => "add-task-below",
            MenuAction::AddTaskAbove => "add-task-above",
            MenuAction::AddTaskGroupBelow => "add-task-group-below",
            MenuAction::MakeChildTask => "make-child-task",
            MenuAction::PromoteTask => "promote-task",
            MenuAction::RemoveTask => "remove-task",
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddTaskBelow => "Add Task Below",
            MenuAction::AddTaskAbove => "Add Task Above",
            MenuAction::AddTaskGroupBelow => "Add Task Group Below",
            MenuAction::MakeChildTask => "Make Child Task",
            MenuAction::PromoteTask => "Promote Task",
            MenuAction::RemoveTask => "Remove Task",
        }
    }
}

/// Returns the actions available for the given selection, or an empty list
/// for selection shapes the menu doesn't support.
pub fn menu_actions(selected: &[RowId], mode: SelectionMode) -> Vec<MenuAction> {
    if mode == SelectionMode::Row && selected.len() == 1 && selected[0] != RowId::HEADER {
        MenuAction::ALL.to_vec()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_selection_yields_actions() {
        let id = RowId::next();
        let actions = menu_actions(&[id], SelectionMode::Row);
        assert_eq!(actions, MenuAction::ALL.to_vec());
    }

    #[test]
    fn test_other_selection_shapes_yield_nothing() {
        let a = RowId::next();
        let b = RowId::next();
        assert!(menu_actions(&[a, b], SelectionMode::Row).is_empty());
        assert!(menu_actions(&[], SelectionMode::Row).is_empty());
        assert!(menu_actions(&[a], SelectionMode::Column).is_empty());
        assert!(menu_actions(&[a], SelectionMode::Range).is_empty());
        assert!(menu_actions(&[RowId::HEADER], SelectionMode::Row).is_empty());
    }

    #[test]
    fn test_action_ids_are_distinct() {
        let mut ids: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), MenuAction::ALL.len());
    }
}
