//! Task Row Component
//!
//! One draggable list row: checkbox, check indicator, label and remove cross.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_app_context;
use crate::dispatch::Interaction;
use crate::models::Task;
use crate::store::WidgetStateStoreFields;

/// A single task row.
///
/// The row stays mounted while it is toggled or fades out; completion and
/// fade state are read from the store so CSS transitions can run.
#[component]
pub fn TaskRow(task: Task, dnd: DndSignals<String>) -> impl IntoView {
    let ctx = use_app_context();

    let id = task.id.clone();
    let initially_completed = task.completed;

    // (completed, fading) of this row, or None once it is detached
    let row_state = {
        let id = id.clone();
        move || {
            ctx.store
                .tasks()
                .with(|tasks| tasks.get(&id).map(|t| (t.completed, t.is_fading())))
        }
    };

    let on_dragstart = make_on_dragstart(dnd, id.clone());
    let on_dragover = make_on_dragover(dnd, id.clone());
    let on_dragleave = make_on_dragleave(dnd, id.clone());
    let on_drop = make_on_drop(dnd, id.clone(), move |dragged, target| {
        ctx.dispatch(Interaction::Reorder { dragged, target });
    });
    let on_dragend = make_on_dragend(dnd);

    let row_class = {
        let id = id.clone();
        let row_state = row_state.clone();
        move || {
            let (completed, fading) = row_state().unwrap_or((initially_completed, false));
            let mut c = String::from(if completed { "completed" } else { "uncompleted" });
            if fading {
                c.push_str(" fading");
            }
            dnd.session.with(|s| {
                if s.is_dragging(&id) {
                    c.push_str(" dragging");
                }
                if s.is_over(&id) {
                    c.push_str(" drop-target");
                }
            });
            c
        }
    };
    let is_checked = move || row_state().map(|(completed, _)| completed).unwrap_or(false);

    let input_id = id.clone();
    let toggle_id = id.clone();
    let remove_id = id.clone();

    view! {
        <li
            class=row_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <input
                type="checkbox"
                class="todo-checkbox"
                id=input_id
                prop:checked=is_checked
                on:change=move |_| {
                    ctx.dispatch(Interaction::ToggleComplete(toggle_id.clone()));
                }
            />
            <span class="custom-checkbox"></span>
            <img class="check-icon" src=ctx.config.icon_check alt="Check Icon" />
            <label for=id>{task.text}</label>
            <img
                class="cross"
                src=ctx.config.icon_cross
                alt="Remove List Item"
                on:click=move |_| ctx.dispatch(Interaction::Remove(remove_id.clone()))
            />
        </li>
    }
}
