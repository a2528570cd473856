//! Todo Widget App
//!
//! Root component: loads persisted state, applies the theme and lays out
//! header, input, list and footer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, TaskInput, TaskListView, ThemeToggle};
use crate::config::WidgetConfig;
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::WidgetState;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    let config = WidgetConfig::default();

    // Rebuild from localStorage; bad or missing records fall back to defaults
    let state = WidgetState::load(&BrowserStorage, &config);
    theme::apply_theme(state.theme);

    let store = Store::new(state);
    provide_context(AppContext::new(store, config));

    view! {
        <main class="container">
            <ThemeToggle />
            <TaskInput />
            <div class="todo-box">
                <TaskListView />
                <FilterBar />
            </div>
            <p class="drag-hint">"Drag and drop to reorder list"</p>
        </main>
    }
}
