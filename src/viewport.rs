//! The viewport size and its resize notifications.
//!
//! Like the document, the viewport lives in a thread local and must only be
//! used from the UI thread. Call [`resize`] whenever the host window changes
//! size, or to force a relayout at the current size; every registered
//! listener runs synchronously, once per call.

use std::{cell::RefCell, rc::Rc};

use peniko::kurbo::Size;
use slotmap::{SlotMap, new_key_type};
use tracing::trace;

pub type ResizeCallback = dyn Fn(Size);

new_key_type! {
    /// Handle to a registered resize listener.
    pub struct ListenerId;
}

/// The size a viewport has before the first [`resize`].
pub const DEFAULT_SIZE: Size = Size::new(800.0, 600.0);

thread_local! {
    static VIEWPORT: RefCell<ViewportState> = RefCell::new(ViewportState::new());
}

struct ViewportState {
    size: Size,
    listeners: SlotMap<ListenerId, Rc<ResizeCallback>>,
}

impl ViewportState {
    fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            listeners: SlotMap::with_key(),
        }
    }
}

pub fn size() -> Size {
    VIEWPORT.with_borrow(|v| v.size)
}

/// The viewport width breakpoints are resolved against.
pub fn width() -> f64 {
    size().width
}

/// Set the viewport size and notify every listener.
///
/// Every call notifies, including one that repeats the current size.
/// Listeners may add or remove listeners while being notified; a listener
/// removed during the dispatch is not called afterwards, one added during it
/// is not called until the next resize.
pub fn resize(size: impl Into<Size>) {
    let size = size.into();
    let listeners: Vec<(ListenerId, Rc<ResizeCallback>)> = VIEWPORT.with_borrow_mut(|v| {
        v.size = size;
        v.listeners
            .iter()
            .map(|(id, callback)| (id, callback.clone()))
            .collect()
    });
    if listeners.is_empty() {
        return;
    }
    trace!(
        width = size.width,
        height = size.height,
        listeners = listeners.len(),
        "viewport resized"
    );
    for (id, callback) in listeners {
        if VIEWPORT.with_borrow(|v| v.listeners.contains_key(id)) {
            callback(size);
        }
    }
}

pub fn add_resize_listener(callback: Rc<ResizeCallback>) -> ListenerId {
    VIEWPORT.with_borrow_mut(|v| v.listeners.insert(callback))
}

/// Remove a listener. Returns whether it was still registered, removing an
/// unknown listener is a no-op.
pub fn remove_resize_listener(id: ListenerId) -> bool {
    VIEWPORT.with_borrow_mut(|v| v.listeners.remove(id).is_some())
}

/// [`remove_resize_listener`] for drop paths: does nothing once the viewport
/// has been torn down at thread exit.
pub(crate) fn release_resize_listener(id: ListenerId) {
    let _ = VIEWPORT.try_with(|v| v.borrow_mut().listeners.remove(id));
}

pub fn listener_count() -> usize {
    VIEWPORT.with_borrow(|v| v.listeners.len())
}
