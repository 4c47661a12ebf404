use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Normalized scroll position of a document inside a viewport.
///
/// Returns 0 when nothing can scroll.
pub fn scroll_progress(offset: f32, document_height: f32, viewport_height: f32) -> f32 {
    let scrollable = document_height - viewport_height;
    if scrollable > 0.0 {
        (offset / scrollable).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Listener invoked with the new progress after every scroll
pub type ScrollListener = Box<dyn FnMut(f32)>;

type ListenerList = RefCell<Vec<(u64, ScrollListener)>>;

/// Set of scroll listeners shared with the guards that remove them
#[derive(Default)]
struct ScrollListeners {
    next_id: u64,
    list: Rc<ListenerList>,
}

impl ScrollListeners {
    fn register(&mut self, listener: ScrollListener) -> ListenerGuard {
        let id = self.next_id;
        self.next_id += 1;
        self.list.borrow_mut().push((id, listener));

        ListenerGuard {
            id,
            list: Rc::downgrade(&self.list),
        }
    }

    // Listeners must not drop their own guard while being notified.
    fn notify(&self, progress: f32) {
        for (_, listener) in self.list.borrow_mut().iter_mut() {
            listener(progress);
        }
    }

    fn len(&self) -> usize {
        self.list.borrow().len()
    }
}

/// Keeps a scroll listener registered; dropping it deregisters the listener
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct ListenerGuard {
    id: u64,
    list: Weak<ListenerList>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(list) = self.list.upgrade() {
            list.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Tracks the scroll offset of a virtual page `page_height` viewports tall
pub struct ScrollTracker {
    page_height: f32,
    viewport_height: f32,
    offset: f32,
    listeners: ScrollListeners,
}

impl ScrollTracker {
    /// Create tracker for a page measured in viewport heights
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height: page_height.max(1.0),
            viewport_height: 0.0,
            offset: 0.0,
            listeners: ScrollListeners::default(),
        }
    }

    /// Register a listener for progress updates
    pub fn subscribe(&mut self, listener: impl FnMut(f32) + 'static) -> ListenerGuard {
        self.listeners.register(Box::new(listener))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Viewport changed size; keeps the offset inside the new range
    pub fn resize(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height.max(0.0);
        self.set_offset(self.offset);
    }

    /// Scroll by a pixel delta (positive = down)
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        self.set_offset(self.offset + delta)
    }

    /// Scroll to an absolute pixel offset
    pub fn scroll_to(&mut self, offset: f32) -> f32 {
        self.set_offset(offset)
    }

    pub fn scroll_to_end(&mut self) -> f32 {
        self.set_offset(self.scrollable_height())
    }

    fn set_offset(&mut self, offset: f32) -> f32 {
        self.offset = offset.clamp(0.0, self.scrollable_height().max(0.0));
        let progress = self.progress();
        self.listeners.notify(progress);
        progress
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn document_height(&self) -> f32 {
        self.viewport_height * self.page_height
    }

    pub fn scrollable_height(&self) -> f32 {
        self.document_height() - self.viewport_height
    }

    pub fn progress(&self) -> f32 {
        scroll_progress(self.offset, self.document_height(), self.viewport_height)
    }
}
