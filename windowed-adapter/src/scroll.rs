use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// A listener invoked with the new scroll offset after every effective scroll.
pub type ScrollListener = Rc<dyn Fn(u64)>;

struct ContainerInner {
    viewport_height: u32,
    content_height: u64,
    scroll_offset: u64,
    listeners: Vec<(u64, ScrollListener)>,
    next_listener_id: u64,
}

impl ContainerInner {
    fn max_scroll_offset(&self) -> u64 {
        self.content_height.saturating_sub(self.viewport_height as u64)
    }

    /// Clamps and stores `offset`; returns the listeners to notify when it changed.
    fn move_to(&mut self, offset: u64) -> Option<(u64, Vec<ScrollListener>)> {
        let clamped = offset.min(self.max_scroll_offset());
        if clamped == self.scroll_offset {
            return None;
        }
        self.scroll_offset = clamped;
        let listeners = self.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
        Some((clamped, listeners))
    }
}

/// A single-threaded model of a native scrollable element.
///
/// The container has a fixed viewport height, a content height (the height of whatever it
/// scrolls, e.g. a spacer) and a scroll offset that always stays within
/// `0..=content_height - viewport_height`. Like a DOM element, it emits a scroll event only when
/// the offset actually changes, including when a shrinking content height forces the offset
/// back into range.
///
/// Cloning is cheap and yields another handle to the same element. Listeners run synchronously
/// after the internal borrow is released, so they may query or scroll the container again.
#[derive(Clone)]
pub struct ScrollContainer {
    inner: Rc<RefCell<ContainerInner>>,
}

impl ScrollContainer {
    pub fn new(viewport_height: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ContainerInner {
                viewport_height,
                content_height: 0,
                scroll_offset: 0,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    pub fn viewport_height(&self) -> u32 {
        self.inner.borrow().viewport_height
    }

    pub fn content_height(&self) -> u64 {
        self.inner.borrow().content_height
    }

    pub fn scroll_offset(&self) -> u64 {
        self.inner.borrow().scroll_offset
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.inner.borrow().max_scroll_offset()
    }

    pub fn set_viewport_height(&self, viewport_height: u32) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            if inner.viewport_height == viewport_height {
                return;
            }
            inner.viewport_height = viewport_height;
            let offset = inner.scroll_offset;
            inner.move_to(offset)
        };
        Self::dispatch(pending);
    }

    pub fn set_content_height(&self, content_height: u64) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            if inner.content_height == content_height {
                return;
            }
            inner.content_height = content_height;
            let offset = inner.scroll_offset;
            inner.move_to(offset)
        };
        Self::dispatch(pending);
    }

    /// Scrolls to `offset` (clamped) and returns the resulting offset.
    pub fn scroll_to(&self, offset: u64) -> u64 {
        let pending = self.inner.borrow_mut().move_to(offset);
        Self::dispatch(pending);
        self.scroll_offset()
    }

    /// Scrolls by a signed delta (e.g. a wheel step) and returns the resulting offset.
    pub fn scroll_by(&self, delta: i64) -> u64 {
        let current = self.scroll_offset();
        let target = if delta >= 0 {
            current.saturating_add(delta as u64)
        } else {
            current.saturating_sub(delta.unsigned_abs())
        };
        self.scroll_to(target)
    }

    /// Registers `listener` for scroll events until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(u64) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id = id.wrapping_add(1);
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            container: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn dispatch(pending: Option<(u64, Vec<ScrollListener>)>) {
        if let Some((offset, listeners)) = pending {
            for listener in listeners {
                listener(offset);
            }
        }
    }
}

impl fmt::Debug for ScrollContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(inner) => f
                .debug_struct("ScrollContainer")
                .field("viewport_height", &inner.viewport_height)
                .field("content_height", &inner.content_height)
                .field("scroll_offset", &inner.scroll_offset)
                .field("listeners", &inner.listeners.len())
                .finish(),
            Err(_) => f.write_str("ScrollContainer(<borrowed>)"),
        }
    }
}

/// Keeps a scroll listener registered; unsubscribes on drop.
///
/// The guard does not keep the container alive. Dropping it after the container is gone is a
/// no-op.
pub struct Subscription {
    container: Weak<RefCell<ContainerInner>>,
    id: Option<u64>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.container.strong_count() > 0
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        let Some(inner) = self.container.upgrade() else {
            return;
        };
        // Listeners are never called while the container is borrowed, so this only fails if
        // the guard is dropped from inside a container method.
        if let Ok(mut inner) = inner.try_borrow_mut() {
            inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
