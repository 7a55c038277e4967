use alloc::vec::Vec;

use crate::calculator;
use crate::{
    Align, RenderConfig, ScrollDirection, ViewportState, Window, WindowCache, WindowLayout,
    WindowedItem,
};

/// Scroll state plus layout constants for one fixed-height sequence.
///
/// This type is UI-agnostic:
/// - It does not hold the items, only their count.
/// - Your adapter drives it with scroll offsets and the current sequence length.
/// - Rendering is exposed via the memoized [`Viewport::layout`] and the zero-allocation
///   [`Viewport::for_each_windowed_item`].
///
/// For a renderer that owns a scroll subscription and produces frames, see the
/// `windowed-adapter` crate.
#[derive(Clone, Debug)]
pub struct Viewport {
    config: RenderConfig,
    len: usize,
    state: ViewportState,
    scroll_direction: Option<ScrollDirection>,
    cache: WindowCache,
}

impl Viewport {
    /// Creates a viewport at scroll offset 0 for an empty sequence.
    ///
    /// An invalid `config` is accepted; every window it produces is empty.
    pub fn new(config: RenderConfig) -> Self {
        if !config.is_valid() {
            wwarn!(
                item_height = config.item_height,
                container_height = config.container_height,
                "Viewport::new with degenerate config; windows will be empty"
            );
        }
        wdebug!(
            item_height = config.item_height,
            container_height = config.container_height,
            overscan = config.overscan,
            "Viewport::new"
        );
        Self {
            config,
            len: 0,
            state: ViewportState::default(),
            scroll_direction: None,
            cache: WindowCache::new(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replaces the layout constants. The window is reset to the top of the sequence.
    pub fn set_config(&mut self, config: RenderConfig) {
        wdebug!(
            item_height = config.item_height,
            container_height = config.container_height,
            overscan = config.overscan,
            "Viewport::set_config"
        );
        self.config = config;
        self.state = ViewportState::default();
        self.scroll_direction = None;
        self.cache.invalidate();
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Updates the sequence length. The scroll offset is left untouched; the window clamps.
    pub fn set_len(&mut self, len: usize) {
        if self.len != len {
            wtrace!(prev = self.len, len, "Viewport::set_len");
            self.len = len;
        }
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Restores a previously captured scroll position.
    pub fn restore_state(&mut self, state: ViewportState) {
        self.set_scroll_offset(state.scroll_offset);
    }

    pub fn scroll_offset(&self) -> u64 {
        self.state.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if let Some(direction) = self.state.scroll_to(offset) {
            self.scroll_direction = Some(direction);
        }
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    pub fn max_scroll_offset(&self) -> u64 {
        calculator::max_scroll_offset(&self.config, self.len)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn total_height(&self) -> u64 {
        calculator::total_height(&self.config, self.len)
    }

    /// The current window layout, recomputed only when offset, config or length changed.
    pub fn layout(&self) -> WindowLayout {
        self.cache.get(self.state.scroll_offset, &self.config, self.len)
    }

    pub fn window(&self) -> Window {
        self.layout().window
    }

    pub fn visible_window(&self) -> Window {
        calculator::visible_window(self.state.scroll_offset, &self.config, self.len)
    }

    pub fn cache(&self) -> &WindowCache {
        &self.cache
    }

    pub fn item_top(&self, index: usize) -> Option<u64> {
        (index < self.len).then(|| calculator::item_offset(index, &self.config))
    }

    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        calculator::index_at_offset(offset, &self.config, self.len)
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        calculator::scroll_to_index_offset(
            index,
            align,
            self.state.scroll_offset,
            &self.config,
            self.len,
        )
    }

    /// Programmatically scrolls to an index and returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn for_each_windowed_item(&self, mut f: impl FnMut(WindowedItem)) {
        let layout = self.layout();
        let height = self.config.item_height;
        let mut top = layout.offset_y;
        for index in layout.window.range() {
            f(WindowedItem { index, top, height });
            top = top.saturating_add(height as u64);
        }
    }

    /// Collects windowed items into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_windowed_item`]; reuse the buffer
    /// across frames to avoid reallocating.
    pub fn collect_windowed_items(&self, out: &mut Vec<WindowedItem>) {
        out.clear();
        self.for_each_windowed_item(|item| out.push(item));
    }
}
