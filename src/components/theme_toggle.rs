//! Theme Toggle Component
//!
//! Page header with the light/dark switch.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dispatch::Interaction;
use crate::store::WidgetStateStoreFields;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();

    let icon = move || ctx.config.theme_icon(ctx.store.theme().get());

    view! {
        <header class="header">
            <h1>"TODO"</h1>
            <button
                id="theme-toggle"
                type="button"
                on:click=move |_| ctx.dispatch(Interaction::ToggleTheme)
            >
                <img id="theme-icon" src=icon alt="Toggle theme" />
            </button>
        </header>
    }
}
