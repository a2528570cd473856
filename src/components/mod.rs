//! UI Components
//!
//! Leptos components of the task widget.

mod task_input;
mod task_row;
mod task_list_view;
mod filter_bar;
mod theme_toggle;

pub use task_input::TaskInput;
pub use task_row::TaskRow;
pub use task_list_view::TaskListView;
pub use filter_bar::FilterBar;
pub use theme_toggle::ThemeToggle;
