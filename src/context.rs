//! Application Context
//!
//! Handle passed to every component instead of global element lookups.
//! Components turn gestures into `Interaction`s and hand them to
//! `AppContext::dispatch`, which updates the store and runs the effects.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::dispatch::{self, Effect, Interaction};
use crate::storage::BrowserStorage;
use crate::store::AppStore;
use crate::theme;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Widget state
    pub store: AppStore,
    pub config: WidgetConfig,
    /// Text typed into the new-item input
    pub draft: RwSignal<String>,
    storage: BrowserStorage,
}

impl AppContext {
    pub fn new(store: AppStore, config: WidgetConfig) -> Self {
        Self {
            store,
            config,
            draft: RwSignal::new(String::new()),
            storage: BrowserStorage,
        }
    }

    /// Apply an interaction and run its effects
    pub fn dispatch(&self, interaction: Interaction) {
        let effects = self
            .store
            .try_update(|state| state.dispatch(interaction))
            .unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let written = self.store.with_untracked(|state| {
            dispatch::write_through(state, &effect, &self.storage, &self.config)
        });
        if let Err(e) = written {
            log::error!("[STORE] {}", e);
        }

        match effect {
            Effect::PersistTasks => {}
            Effect::PersistTheme(theme) => theme::apply_theme(theme),
            Effect::ClearInput => self.draft.set(String::new()),
            Effect::ScheduleRemoval(token) => self.schedule_removal(token),
        }
    }

    /// Detach fading rows once the delay is over
    fn schedule_removal(&self, token: u64) {
        let ctx = *self;
        Timeout::new(self.config.removal_delay_ms, move || {
            ctx.dispatch(Interaction::FinishRemoval(token));
        })
        .forget();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
