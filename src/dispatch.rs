//! Interaction Dispatch
//!
//! Every user gesture becomes an `Interaction`. `WidgetState::dispatch`
//! is the single table mapping interactions to state changes; what has to
//! happen outside the state (storage writes, timers, DOM) comes back as
//! `Effect`s for the caller to run.

use crate::config::WidgetConfig;
use crate::error::StorageResult;
use crate::models::{Filter, Theme};
use crate::storage::{self, KeyValueStore};
use crate::store::WidgetState;

#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Enter pressed in the new-item input
    Submit(String),
    /// Row checkbox changed
    ToggleComplete(String),
    /// Row cross clicked
    Remove(String),
    /// Fade timer fired
    FinishRemoval(u64),
    ClearCompleted,
    SelectFilter(Filter),
    ToggleTheme,
    /// Row dropped on another row
    Reorder { dragged: String, target: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the full task snapshot
    PersistTasks,
    /// Write the theme and apply its class
    PersistTheme(Theme),
    /// Empty the new-item input
    ClearInput,
    /// Dispatch `FinishRemoval(token)` after the fade delay
    ScheduleRemoval(u64),
}

impl WidgetState {
    pub fn dispatch(&mut self, interaction: Interaction) -> Vec<Effect> {
        match interaction {
            Interaction::Submit(text) => match self.tasks.add(&text) {
                Some(task) => {
                    log::debug!("[DISPATCH] added {}", task.id);
                    vec![Effect::ClearInput, Effect::PersistTasks]
                }
                None => Vec::new(),
            },
            Interaction::ToggleComplete(id) => match self.tasks.toggle(&id) {
                Some(completed) => {
                    log::debug!("[DISPATCH] {} completed={}", id, completed);
                    vec![Effect::PersistTasks]
                }
                None => Vec::new(),
            },
            Interaction::Remove(id) => {
                let token = self.removal_seq + 1;
                if self.tasks.mark_for_removal(&id, token) {
                    self.issue_token();
                    vec![Effect::ScheduleRemoval(token)]
                } else {
                    Vec::new()
                }
            }
            Interaction::ClearCompleted => {
                let token = self.removal_seq + 1;
                if self.tasks.mark_completed_for_removal(token) > 0 {
                    self.issue_token();
                    vec![Effect::ScheduleRemoval(token)]
                } else {
                    Vec::new()
                }
            }
            Interaction::FinishRemoval(token) => {
                let removed = self.tasks.finish_removal(token);
                log::debug!("[DISPATCH] removal {} detached {} rows", token, removed);
                if removed > 0 {
                    vec![Effect::PersistTasks]
                } else {
                    Vec::new()
                }
            }
            Interaction::SelectFilter(filter) => {
                self.filter = filter;
                Vec::new()
            }
            Interaction::ToggleTheme => {
                self.theme = self.theme.toggled();
                vec![Effect::PersistTheme(self.theme)]
            }
            Interaction::Reorder { dragged, target } => {
                if self.tasks.reorder(&dragged, &target) {
                    log::debug!("[DND] moved {} after {}", dragged, target);
                    vec![Effect::PersistTasks]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

/// Run the storage half of an effect; other effects are ignored here
pub fn write_through<S: KeyValueStore + ?Sized>(
    state: &WidgetState,
    effect: &Effect,
    store: &S,
    config: &WidgetConfig,
) -> StorageResult<()> {
    match effect {
        Effect::PersistTasks => {
            storage::save_tasks(store, config.tasks_key, &state.tasks.serialize())
        }
        Effect::PersistTheme(theme) => storage::save_theme(store, config.theme_key, *theme),
        Effect::ClearInput | Effect::ScheduleRemoval(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    /// Dispatch and persist like the browser context does, collecting timers
    struct Harness {
        state: WidgetState,
        store: MemoryStorage,
        config: WidgetConfig,
        timers: Vec<u64>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: WidgetState::default(),
                store: MemoryStorage::new(),
                config: WidgetConfig::default(),
                timers: Vec::new(),
            }
        }

        fn run(&mut self, interaction: Interaction) -> Vec<Effect> {
            let effects = self.state.dispatch(interaction);
            for effect in &effects {
                write_through(&self.state, effect, &self.store, &self.config).unwrap();
                if let Effect::ScheduleRemoval(token) = effect {
                    self.timers.push(*token);
                }
            }
            effects
        }

        /// Let every pending fade finish
        fn elapse(&mut self) {
            for token in std::mem::take(&mut self.timers) {
                self.run(Interaction::FinishRemoval(token));
            }
        }

        fn add(&mut self, text: &str) -> String {
            self.run(Interaction::Submit(text.to_string()));
            self.state.tasks.tasks().last().unwrap().id.clone()
        }

        fn persisted(&self) -> Vec<(String, bool)> {
            storage::load_tasks(&self.store, "tasks")
                .into_iter()
                .map(|r| (r.text, r.completed))
                .collect()
        }
    }

    #[test]
    fn test_submit_adds_and_persists() {
        let mut h = Harness::new();
        let effects = h.run(Interaction::Submit("  Read book ".to_string()));
        assert_eq!(effects, vec![Effect::ClearInput, Effect::PersistTasks]);
        assert_eq!(h.persisted(), vec![("Read book".to_string(), false)]);
    }

    #[test]
    fn test_blank_submit_changes_nothing() {
        let mut h = Harness::new();
        h.add("keep");
        let before = h.state.clone();
        assert!(h.run(Interaction::Submit("  ".to_string())).is_empty());
        assert_eq!(h.state, before);
    }

    #[test]
    fn test_toggle_persists_and_updates_counts() {
        let mut h = Harness::new();
        let a = h.add("a");
        h.add("b");
        assert_eq!(h.run(Interaction::ToggleComplete(a)), vec![Effect::PersistTasks]);
        assert_eq!(h.state.tasks.remaining(), 1);
        assert!(!h.state.show_empty_state());
        assert_eq!(h.persisted(), vec![("a".to_string(), true), ("b".to_string(), false)]);
    }

    #[test]
    fn test_empty_state_follows_remaining() {
        let mut h = Harness::new();
        assert!(h.state.show_empty_state());
        let a = h.add("a");
        assert!(!h.state.show_empty_state());
        h.run(Interaction::ToggleComplete(a));
        assert!(h.state.show_empty_state());
    }

    #[test]
    fn test_remove_waits_for_timer() {
        let mut h = Harness::new();
        let a = h.add("a");
        h.add("b");

        let effects = h.run(Interaction::Remove(a.clone()));
        assert_eq!(effects, vec![Effect::ScheduleRemoval(1)]);
        // Still counted and persisted during the fade
        assert_eq!(h.state.tasks.remaining(), 2);
        assert_eq!(h.persisted().len(), 2);

        // Second click on a fading row is ignored
        assert!(h.run(Interaction::Remove(a)).is_empty());

        h.elapse();
        assert_eq!(h.persisted(), vec![("b".to_string(), false)]);
        assert_eq!(h.state.tasks.remaining(), 1);
    }

    #[test]
    fn test_clear_completed_after_delay() {
        let mut h = Harness::new();
        let a = h.add("a");
        h.add("b");
        let c = h.add("c");
        h.run(Interaction::ToggleComplete(a));
        h.run(Interaction::ToggleComplete(c));

        let effects = h.run(Interaction::ClearCompleted);
        assert_eq!(effects.len(), 1);
        assert_eq!(h.state.tasks.len(), 3);

        h.elapse();
        assert_eq!(h.persisted(), vec![("b".to_string(), false)]);
    }

    #[test]
    fn test_clear_completed_with_nothing_done() {
        let mut h = Harness::new();
        h.add("a");
        assert!(h.run(Interaction::ClearCompleted).is_empty());
        assert_eq!(h.state.removal_seq, 0);
    }

    #[test]
    fn test_stale_finish_is_noop() {
        let mut h = Harness::new();
        h.add("a");
        assert!(h.run(Interaction::FinishRemoval(99)).is_empty());
        assert_eq!(h.state.tasks.len(), 1);
    }

    #[test]
    fn test_filter_switch_does_not_persist() {
        let mut h = Harness::new();
        h.add("a");
        let b = h.add("b");
        h.add("c");
        h.run(Interaction::ToggleComplete(b));
        let snapshot = h.store.get_item("tasks");

        assert!(h.run(Interaction::SelectFilter(Filter::Completed)).is_empty());
        assert_eq!(h.state.visible_tasks().len(), 1);
        h.run(Interaction::SelectFilter(Filter::Active));
        assert_eq!(h.state.visible_tasks().len(), 2);
        h.run(Interaction::SelectFilter(Filter::All));
        assert_eq!(h.state.visible_tasks().len(), 3);

        assert_eq!(h.store.get_item("tasks"), snapshot);
    }

    #[test]
    fn test_added_row_respects_active_filter() {
        let mut h = Harness::new();
        h.run(Interaction::SelectFilter(Filter::Completed));
        h.add("new");
        assert!(h.state.visible_tasks().is_empty());
        h.run(Interaction::SelectFilter(Filter::Active));
        assert_eq!(h.state.visible_tasks().len(), 1);
    }

    #[test]
    fn test_reorder_persists_only_real_moves() {
        let mut h = Harness::new();
        let a = h.add("a");
        let b = h.add("b");
        h.add("c");

        let noop = Interaction::Reorder { dragged: b.clone(), target: a.clone() };
        assert!(h.run(noop).is_empty());

        let same = Interaction::Reorder { dragged: a.clone(), target: a.clone() };
        assert!(h.run(same).is_empty());

        let moved = Interaction::Reorder { dragged: a, target: b };
        assert_eq!(h.run(moved), vec![Effect::PersistTasks]);
        let order: Vec<_> = h.persisted().into_iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_theme_toggle_twice_restores() {
        let mut h = Harness::new();
        h.run(Interaction::ToggleTheme);
        assert_eq!(h.store.get_item("theme").as_deref(), Some("dark"));
        assert_eq!(h.state.theme.class_name(), "dark-theme");
        assert_eq!(h.config.theme_icon(h.state.theme), "./images/icon-moon.svg");

        h.run(Interaction::ToggleTheme);
        assert_eq!(h.store.get_item("theme").as_deref(), Some("light"));
        assert_eq!(h.state.theme.class_name(), "light-theme");
        assert_eq!(storage::load_theme(&h.store, "theme"), Theme::Light);
    }

    #[test]
    fn test_reload_reproduces_state() {
        let mut h = Harness::new();
        let a = h.add("a");
        let b = h.add("b");
        h.run(Interaction::ToggleComplete(b.clone()));
        h.run(Interaction::Reorder { dragged: a, target: b });
        h.run(Interaction::ToggleTheme);

        let reloaded = WidgetState::load(&h.store, &h.config);
        assert_eq!(reloaded.tasks, h.state.tasks);
        assert_eq!(reloaded.theme, Theme::Dark);
    }
}
