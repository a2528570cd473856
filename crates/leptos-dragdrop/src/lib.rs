//! Leptos DragDrop Utilities
//!
//! Sibling reordering for Leptos lists using native HTML5 drag events.
//! Every draggable row is also a drop target; dropping a row on another
//! moves it right after the target.

use leptos::prelude::*;

/// Transient drag state: the row being dragged and the row under the pointer
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<K> {
    dragged: Option<K>,
    over: Option<K>,
}

impl<K> Default for DragSession<K> {
    fn default() -> Self {
        Self { dragged: None, over: None }
    }
}

impl<K: Clone + PartialEq> DragSession<K> {
    /// dragstart: remember the source row
    pub fn start(&mut self, key: K) {
        self.dragged = Some(key);
        self.over = None;
    }

    /// dragover: track the hovered row (never the source itself).
    /// Returns true when the hover marker changed.
    pub fn hover(&mut self, key: &K) -> bool {
        let next = match &self.dragged {
            Some(dragged) if dragged != key => Some(key.clone()),
            _ => None,
        };
        if self.over == next {
            return false;
        }
        self.over = next;
        true
    }

    /// drop: the (dragged, target) pair when the drop is a real move
    pub fn drop_on(&self, target: &K) -> Option<(K, K)> {
        match &self.dragged {
            Some(dragged) if dragged != target => Some((dragged.clone(), target.clone())),
            _ => None,
        }
    }

    /// dragend: fires whether or not a drop happened
    pub fn end(&mut self) {
        self.dragged = None;
        self.over = None;
    }

    pub fn dragged(&self) -> Option<&K> {
        self.dragged.as_ref()
    }

    pub fn over(&self) -> Option<&K> {
        self.over.as_ref()
    }

    pub fn is_dragging(&self, key: &K) -> bool {
        self.dragged.as_ref() == Some(key)
    }

    pub fn is_over(&self, key: &K) -> bool {
        self.over.as_ref() == Some(key)
    }
}

/// Move `dragged` so it lands right after `target`.
///
/// The dragged row is inserted before the target's next sibling, or before
/// the sibling after that when the next sibling is the dragged row itself.
/// With no such sibling the row goes to the end. Returns true when the
/// order changed.
pub fn reorder<K: PartialEq>(order: &mut Vec<K>, dragged: &K, target: &K) -> bool {
    reorder_by_key(order, |k| k, dragged, target)
}

/// `reorder` for rows identified by a key field
pub fn reorder_by_key<T, K, F>(rows: &mut Vec<T>, key: F, dragged: &K, target: &K) -> bool
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    if dragged == target {
        return false;
    }
    let Some(from) = rows.iter().position(|r| key(r) == dragged) else {
        return false;
    };
    let Some(to) = rows.iter().position(|r| key(r) == target) else {
        return false;
    };

    let mut anchor = to + 1;
    if anchor == from {
        anchor += 1;
    }

    let row = rows.remove(from);
    // Indices past the removed slot shift left by one
    let insert_at = if anchor > from { anchor - 1 } else { anchor };
    let insert_at = insert_at.min(rows.len());
    rows.insert(insert_at, row);

    insert_at != from
}

/// DnD state signal
pub struct DndSignals<K: Send + Sync + 'static> {
    pub session: RwSignal<DragSession<K>>,
}

impl<K: Send + Sync + 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for DndSignals<K> {}

pub fn create_dnd_signals<K: Send + Sync + 'static>() -> DndSignals<K> {
    DndSignals {
        session: RwSignal::new(DragSession::default()),
    }
}

/// End drag operation
pub fn end_drag<K: Clone + PartialEq + Send + Sync + 'static>(dnd: &DndSignals<K>) {
    dnd.session.update(|s| s.end());
}

/// Create dragstart handler for a row
pub fn make_on_dragstart<K>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::DragEvent| {
        // Firefox refuses to start a drag without payload
        if let Some(data) = ev.data_transfer() {
            let _ = data.set_data("text/plain", "");
        }
        let key = key.clone();
        dnd.session.update(move |s| s.start(key));
    }
}

/// Create dragover handler for a row.
/// Suppresses the default so the row accepts drops.
pub fn make_on_dragover<K>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let changed = dnd
            .session
            .try_update_untracked(|s| s.hover(&key))
            .unwrap_or(false);
        if changed {
            dnd.session.notify();
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave<K>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::DragEvent| {
        if dnd.session.with_untracked(|s| s.is_over(&key)) {
            dnd.session.update(|s| s.over = None);
        }
    }
}

/// Create drop handler for a row; `on_drop(dragged, target)` runs for real moves only
pub fn make_on_drop<K, F>(dnd: DndSignals<K>, key: K, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(K, K) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some((dragged, target)) = dnd.session.with_untracked(|s| s.drop_on(&key)) {
            on_drop(dragged, target);
        }
    }
}

/// Create dragend handler
pub fn make_on_dragend<K>(dnd: DndSignals<K>) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::DragEvent| end_drag(&dnd)
}
