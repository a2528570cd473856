//! Filter Bar Component
//!
//! Items-left counter, All/Active/Completed view switch and clear-completed.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dispatch::Interaction;
use crate::models::Filter;
use crate::store::WidgetStateStoreFields;
use crate::task_list::items_left_label;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    let items_left = move || ctx.store.tasks().with(|t| items_left_label(t.remaining()));

    view! {
        <div class="list-footer">
            <span class="items-left">{items_left}</span>
            <div class="filters">
                {Filter::ALL.iter().map(|&filter| {
                    let is_active = move || ctx.store.filter().get() == filter;
                    view! {
                        <a
                            href="#"
                            id=filter.element_id()
                            class=move || if is_active() { "active" } else { "" }
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.dispatch(Interaction::SelectFilter(filter));
                            }
                        >
                            {filter.label()}
                        </a>
                    }
                }).collect_view()}
            </div>
            <a
                href="#"
                id="clear-completed"
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.dispatch(Interaction::ClearCompleted);
                }
            >
                "Clear Completed"
            </a>
        </div>
    }
}
