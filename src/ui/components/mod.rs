//! Reusable UI components

pub mod badge;

// Component architecture
pub mod help_panel;
pub mod quick_add;
pub mod status_bar;
pub mod task_list;

// Component exports
pub use help_panel::HelpPanel;
pub use quick_add::QuickAddComponent;
pub use status_bar::StatusBar;
pub use task_list::TaskListComponent;
