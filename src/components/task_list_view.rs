//! Task List View Component
//!
//! Renders the rows that pass the active filter, with drag-and-drop
//! reordering, and the empty-state placeholder.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::TaskRow;
use crate::context::use_app_context;
use crate::models::Task;

/// Rows are keyed by id alone so toggling or fading keeps the same `<li>`
fn row_key(task: &Task) -> String {
    task.id.clone()
}

/// Task list with DnD support
#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_app_context();

    let dnd = create_dnd_signals::<String>();

    let visible = move || ctx.store.with(|s| s.visible_tasks());
    let show_empty = move || ctx.store.with(|s| s.show_empty_state());

    view! {
        <ul id="list" class="todo-list">
            <For
                each=visible
                key=row_key
                children=move |task| view! { <TaskRow task=task dnd=dnd /> }
            />
        </ul>
        <div
            class="empty-list"
            style:display=move || if show_empty() { "flex" } else { "none" }
        >
            <p>"Nothing left to do"</p>
        </div>
    }
}
