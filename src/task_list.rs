//! List Model
//!
//! Ordered task sequence. Display order, drag order and storage order are
//! all this one vector.

use crate::ids;
use crate::models::{Filter, PendingRemoval, RemovalCause, Task, TaskRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the list from persisted records, in order.
    ///
    /// A record repeating an earlier id gets a fresh one.
    pub fn hydrate(records: Vec<TaskRecord>) -> Self {
        let mut list = Self::new();
        for record in records {
            let mut task = Task::from(record);
            if list.contains(&task.id) {
                let fresh = ids::generate_unique_id(|candidate| list.contains(candidate));
                log::warn!("[STORAGE] repeated task id `{}`, reassigned to `{}`", task.id, fresh);
                task.id = fresh;
            }
            list.push(task);
        }
        list
    }

    /// Persisted snapshot in display order
    pub fn serialize(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(TaskRecord::from).collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append a task; blank text is ignored
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = ids::generate_unique_id(|candidate| self.contains(candidate));
        self.push(Task::new(id, text.to_string()))
    }

    /// Append a prepared task unless its id is taken
    pub fn push(&mut self, task: Task) -> Option<&Task> {
        if self.contains(&task.id) {
            return None;
        }
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Flip completion. Returns the new state.
    ///
    /// Re-activating a row that was fading out for clear-completed keeps it.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        let clearing = matches!(
            task.pending_removal,
            Some(PendingRemoval { cause: RemovalCause::ClearCompleted, .. })
        );
        if !task.completed && clearing {
            task.pending_removal = None;
        }
        Some(task.completed)
    }

    /// Start a single-row fade. False if unknown or already fading.
    pub fn mark_for_removal(&mut self, id: &str, token: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) if task.pending_removal.is_none() => {
                task.pending_removal = Some(PendingRemoval {
                    token,
                    cause: RemovalCause::Single,
                });
                true
            }
            _ => false,
        }
    }

    /// Start the fade for every completed row. Returns how many were marked.
    pub fn mark_completed_for_removal(&mut self, token: u64) -> usize {
        let mut marked = 0;
        let pending = self
            .tasks
            .iter_mut()
            .filter(|t| t.completed && t.pending_removal.is_none());
        for task in pending {
            task.pending_removal = Some(PendingRemoval {
                token,
                cause: RemovalCause::ClearCompleted,
            });
            marked += 1;
        }
        marked
    }

    /// Detach every row carrying `token`. Returns how many were removed.
    pub fn finish_removal(&mut self, token: u64) -> usize {
        let before = self.tasks.len();
        self.tasks
            .retain(|t| !matches!(t.pending_removal, Some(p) if p.token == token));
        before - self.tasks.len()
    }

    /// Drag-and-drop move of `dragged` to just after `target`
    pub fn reorder(&mut self, dragged: &str, target: &str) -> bool {
        leptos_dragdrop::reorder_by_key(&mut self.tasks, |t| t.id.as_str(), dragged, target)
    }

    /// Number of tasks not completed
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Tasks shown under a filter, in order
    pub fn visible(&self, filter: Filter) -> Vec<Task> {
        self.tasks.iter().filter(|t| filter.shows(t)).cloned().collect()
    }
}

/// Counter text under the list
pub fn items_left_label(remaining: usize) -> String {
    format!("{} items left", remaining)
}
