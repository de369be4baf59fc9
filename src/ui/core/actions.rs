use crate::tasks::NewTask;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,

    // Task operations
    CreateTask(NewTask),
    ToggleTask(Uuid),
    DeleteTask(Uuid),

    // Focus changes
    FocusQuickAdd,
    FocusTaskList,

    // UI operations
    ShowHelp(bool),

    // App control
    Quit,
    None,
}
