//! Frontend Models
//!
//! Task, theme and filter types plus the persisted task shape.

use serde::{Deserialize, Serialize};

/// Why a task is waiting to be detached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    /// The row's own remove control
    Single,
    /// Part of a clear-completed batch
    ClearCompleted,
}

/// Marker carried by a task while its fade-out runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRemoval {
    pub token: u64,
    pub cause: RemovalCause,
}

/// A single task row
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Not persisted
    pub pending_removal: Option<PendingRemoval>,
}

impl Task {
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            pending_removal: None,
        }
    }

    /// Row class for the completed/uncompleted pair
    pub fn state_class(&self) -> &'static str {
        if self.completed { "completed" } else { "uncompleted" }
    }

    pub fn is_fading(&self) -> bool {
        self.pending_removal.is_some()
    }
}

/// Persisted task shape.
///
/// `checked` and `completed` both mirror `Task::completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub completed: bool,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            text: task.text.clone(),
            checked: task.completed,
            completed: task.completed,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            text: record.text,
            completed: record.completed || record.checked,
            pending_removal: None,
        }
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to light
    pub fn parse(s: &str) -> Self {
        match s.trim().trim_matches('"') {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to the root element
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }
}

/// List view filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn shows(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// DOM id of the filter link
    pub fn element_id(&self) -> &'static str {
        match self {
            Filter::All => "show-all",
            Filter::Active => "show-active",
            Filter::Completed => "show-completed",
        }
    }
}
