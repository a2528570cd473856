//! Global Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::config::WidgetConfig;
use crate::models::{Filter, Task, Theme};
use crate::storage::{self, KeyValueStore};
use crate::task_list::TaskList;

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct WidgetState {
    /// Ordered tasks
    pub tasks: TaskList,
    /// Active view filter (not persisted)
    pub filter: Filter,
    /// Current color theme
    pub theme: Theme,
    /// Last issued removal token
    pub removal_seq: u64,
}

impl WidgetState {
    /// Rebuild state from persisted records, falling back to defaults
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, config: &WidgetConfig) -> Self {
        let tasks = TaskList::hydrate(storage::load_tasks(store, config.tasks_key));
        let theme = storage::load_theme(store, config.theme_key);
        log::info!("[STORE] loaded {} tasks, theme={}", tasks.len(), theme.as_str());
        Self {
            tasks,
            theme,
            ..Default::default()
        }
    }

    /// Next removal token
    pub fn issue_token(&mut self) -> u64 {
        self.removal_seq += 1;
        self.removal_seq
    }

    /// Rows under the active filter
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.tasks.visible(self.filter)
    }

    /// Empty-state placeholder is shown when nothing is left to do
    pub fn show_empty_state(&self) -> bool {
        self.tasks.remaining() == 0
    }
}

/// Type alias for the store
pub type AppStore = Store<WidgetState>;
