//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Quick-add form
pub const FORM_TITLE: &str = "New Task";
pub const FORM_PLACEHOLDER: &str = "What needs to be done?";

// Task list
pub const LIST_TITLE: &str = "Tasks";
pub const TASK_PENDING_ICON: &str = "[ ]";
pub const TASK_COMPLETED_ICON: &str = "[x]";
pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Press 'a' to add one.";

// Status bar hints
pub const FORM_HINTS: &str = "Enter: add • Tab: priority • ↑/↓: due date • Esc: back";
pub const LIST_HINTS: &str = "a: add • Space: toggle • d: delete • ?: help • q: quit";

// UI Layout Constants
/// Height of the collapsed quick-add form in rows
pub const FORM_COLLAPSED_HEIGHT: u16 = 3;
/// Height of the expanded quick-add form in rows, without the error row
pub const FORM_EXPANDED_HEIGHT: u16 = 6;
/// Height of the status bar in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;
