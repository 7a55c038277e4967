use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use windowed::{
    Align, ConfigError, RenderConfig, ScrollDirection, Viewport, ViewportState, Window,
    WindowLayout, item_offset,
};

use crate::{ContainerBox, ListFrame, Overflow, RenderedItem, ScrollContainer, Subscription};

/// A callback fired after every accepted scroll event, with the new viewport state.
///
/// Hosts typically use it to schedule the next [`VirtualList::render`].
pub type OnChangeCallback = Rc<dyn Fn(ViewportState)>;

/// A fixed-height virtual list renderer.
///
/// The list owns the scroll position (the only mutable state) and nothing else: items are
/// borrowed for the duration of [`VirtualList::render`], and only the items inside the
/// computed window are passed to the render callback. The number of rendered items is bounded
/// by the container height and overscan, never by the length of the sequence.
///
/// Scroll events arrive either from a mounted [`ScrollContainer`] or through
/// [`VirtualList::on_scroll`]. Both update the scroll position synchronously; the window is
/// recomputed from the latest position on the next render. The container subscription is
/// released on [`VirtualList::unmount`], on remount and when the list is dropped.
pub struct VirtualList {
    viewport: Rc<RefCell<Viewport>>,
    container: Option<ScrollContainer>,
    subscription: Option<Subscription>,
    on_change: Option<OnChangeCallback>,
}

impl VirtualList {
    /// Creates a list with the default overscan.
    pub fn new(item_height: u32, height: u32) -> Self {
        Self::from_config(RenderConfig::new(item_height, height))
    }

    pub fn from_config(config: RenderConfig) -> Self {
        Self {
            viewport: Rc::new(RefCell::new(Viewport::new(config))),
            container: None,
            subscription: None,
            on_change: None,
        }
    }

    /// Same as [`VirtualList::from_config`], but rejects zero heights.
    pub fn try_new(config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    pub fn with_overscan(self, overscan: usize) -> Self {
        let config = self.config().with_overscan(overscan);
        self.viewport.borrow_mut().set_config(config);
        self
    }

    pub fn with_on_change(mut self, on_change: impl Fn(ViewportState) + 'static) -> Self {
        let on_change: OnChangeCallback = Rc::new(on_change);
        self.set_on_change(Some(on_change));
        self
    }

    /// Replaces the on-change callback; `None` clears it.
    pub fn set_on_change(&mut self, on_change: Option<OnChangeCallback>) {
        self.on_change = on_change;
        // The listener captures the callback; resubscribe so it sees the new one.
        if let Some(container) = self.container.clone() {
            self.subscribe_to(&container);
        }
    }

    pub fn config(&self) -> RenderConfig {
        *self.viewport.borrow().config()
    }

    /// Replaces the layout constants and resets the window to the top.
    pub fn reconfigure(&mut self, config: RenderConfig) {
        wdebug!(
            item_height = config.item_height,
            container_height = config.container_height,
            overscan = config.overscan,
            "VirtualList::reconfigure"
        );
        self.viewport.borrow_mut().set_config(config);
        if let Some(container) = &self.container {
            container.set_viewport_height(config.container_height);
            container.scroll_to(0);
        }
    }

    /// Attaches the list to a scroll container.
    ///
    /// The container is sized to the configured height and the list adopts its current
    /// offset (0 for a fresh container). Any previous subscription is released first.
    pub fn mount(&mut self, container: &ScrollContainer) {
        self.unmount();
        container.set_viewport_height(self.config().container_height);
        let state = ViewportState::new(container.scroll_offset());
        self.viewport.borrow_mut().restore_state(state);
        self.subscribe_to(container);
        self.container = Some(container.clone());
        wdebug!(
            offset = container.scroll_offset(),
            listeners = container.listener_count(),
            "VirtualList::mount"
        );
    }

    /// Detaches from the scroll container, if any. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            wdebug!("VirtualList::unmount");
        }
        self.container = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    pub fn container(&self) -> Option<&ScrollContainer> {
        self.container.as_ref()
    }

    fn subscribe_to(&mut self, container: &ScrollContainer) {
        // Release the old listener before registering the new one.
        self.subscription = None;

        let viewport = Rc::downgrade(&self.viewport);
        let on_change = self.on_change.clone();
        self.subscription = Some(container.subscribe(move |offset| {
            let Some(viewport) = viewport.upgrade() else {
                return;
            };
            let state = {
                let mut viewport = viewport.borrow_mut();
                viewport.set_scroll_offset(offset);
                viewport.state()
            };
            wtrace!(offset, "scroll event");
            if let Some(on_change) = &on_change {
                on_change(state);
            }
        }));
    }

    /// Feeds a scroll offset reported by the host.
    ///
    /// When mounted, the offset is applied to the container (clamped) and arrives back through
    /// its scroll event. Otherwise it is applied to the viewport as is.
    pub fn on_scroll(&mut self, offset: u64) {
        if let Some(container) = &self.container {
            container.scroll_to(offset);
            return;
        }
        let state = {
            let mut viewport = self.viewport.borrow_mut();
            viewport.set_scroll_offset(offset);
            viewport.state()
        };
        wtrace!(offset, "VirtualList::on_scroll");
        if let Some(on_change) = &self.on_change {
            on_change(state);
        }
    }

    /// Scrolls so that `index` is in view and returns the applied offset.
    ///
    /// Uses the sequence length seen by the last render.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let target = self.viewport.borrow().scroll_to_index_offset(index, align);
        self.on_scroll(target);
        self.scroll_offset()
    }

    pub fn state(&self) -> ViewportState {
        self.viewport.borrow().state()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.viewport.borrow().scroll_offset()
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.viewport.borrow().scroll_direction()
    }

    /// The window for the current offset and the length seen by the last render.
    pub fn layout(&self) -> WindowLayout {
        self.viewport.borrow().layout()
    }

    pub fn window(&self) -> Window {
        self.layout().window
    }

    /// Renders the windowed slice of `items`.
    ///
    /// `render_item` is called once per in-window item, in index order, with the item and its
    /// original index.
    pub fn render<T, N>(
        &mut self,
        items: &[T],
        mut render_item: impl FnMut(&T, usize) -> N,
    ) -> ListFrame<N> {
        let (config, total_height) = {
            let mut viewport = self.viewport.borrow_mut();
            viewport.set_len(items.len());
            (*viewport.config(), viewport.total_height())
        };

        // Resizing the spacer may clamp the container's offset and emit a scroll event.
        if let Some(container) = &self.container {
            container.set_content_height(total_height);
        }

        let layout = self.viewport.borrow().layout();
        wtrace!(
            len = items.len(),
            start = layout.window.start_index,
            end = layout.window.end_index,
            "VirtualList::render"
        );

        let window = layout.window;
        let slice = items.get(window.range()).unwrap_or(&[]);
        let mut rendered = Vec::with_capacity(slice.len());
        for (index, item) in window.range().zip(slice) {
            let top = item_offset(index, &config);
            rendered.push(RenderedItem {
                key: index,
                index,
                top,
                relative_top: top.saturating_sub(layout.offset_y),
                height: config.item_height,
                node: render_item(item, index),
            });
        }

        ListFrame {
            container: ContainerBox {
                height: config.container_height,
                overflow: Overflow::Auto,
            },
            spacer_height: layout.total_height,
            offset_y: layout.offset_y,
            window,
            items: rendered,
        }
    }
}

impl fmt::Debug for VirtualList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("VirtualList");
        match self.viewport.try_borrow() {
            Ok(viewport) => s
                .field("config", viewport.config())
                .field("len", &viewport.len())
                .field("state", &viewport.state()),
            Err(_) => s.field("viewport", &"<borrowed>"),
        };
        s.field("mounted", &self.is_mounted());
        s.finish_non_exhaustive()
    }
}

/// Renders a single frame without keeping any state.
///
/// Equivalent to a [`VirtualList`] that has just received `scroll_offset`.
pub fn render_window<T, N>(
    items: &[T],
    config: RenderConfig,
    scroll_offset: u64,
    render_item: impl FnMut(&T, usize) -> N,
) -> ListFrame<N> {
    let mut list = VirtualList::from_config(config);
    list.on_scroll(scroll_offset);
    list.render(items, render_item)
}
