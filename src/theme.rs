//! Theme Application
//!
//! Puts the `light-theme`/`dark-theme` class pair on `<html>`.

use crate::models::Theme;

/// Apply `theme` to the document root, removing the opposite class
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("[THEME] no document element, skipping {}", theme.as_str());
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_1(theme.toggled().class_name());
    let _ = classes.add_1(theme.class_name());
}
