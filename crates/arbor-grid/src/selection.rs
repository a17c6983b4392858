//! Selection shapes reported by the grid widget.

/// What kind of range the widget's current selection covers.
///
/// Context-menu actions are only offered for single-row selections in
/// [`SelectionMode::Row`]; other shapes simply yield no actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Whole rows are selected.
    #[default]
    Row,
    /// Whole columns are selected.
    Column,
    /// A rectangular cell range is selected.
    Range,
}
