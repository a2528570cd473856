//! Task Input Component
//!
//! Text field that adds a task on Enter.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dispatch::Interaction;

/// Input for creating new tasks
#[component]
pub fn TaskInput() -> impl IntoView {
    let ctx = use_app_context();
    let draft = ctx.draft;

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ctx.dispatch(Interaction::Submit(draft.get_untracked()));
        }
    };

    view! {
        <div class="new-item">
            <span class="custom-checkbox"></span>
            <input
                id="new-item-input"
                type="text"
                placeholder="Create a new todo..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </div>
    }
}
