//! Task model and the in-memory task store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priority levels, in cycling order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Human-readable label for this priority.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Next priority in cycling order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous priority in cycling order, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

/// Payload of a task creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub content: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

/// A stored task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub content: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a task from a creation request.
    #[must_use]
    pub fn new(new_task: NewTask) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: new_task.content,
            priority: new_task.priority,
            due_date: new_task.due_date,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// In-memory task collection, newest first.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a task from a creation request and return its id.
    pub fn add(&mut self, new_task: NewTask) -> Uuid {
        let task = Task::new(new_task);
        let id = task.id;
        self.tasks.insert(0, task);
        id
    }

    /// Toggle completion of the given task. Returns false for an unknown id.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the given task, returning it when it was present.
    pub fn remove(&mut self, id: Uuid) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks not yet completed.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }
}
