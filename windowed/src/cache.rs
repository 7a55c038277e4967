use core::cell::Cell;

use crate::{RenderConfig, WindowLayout, compute_window};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CacheKey {
    scroll_offset: u64,
    config: RenderConfig,
    len: usize,
}

/// A single-entry memo for [`compute_window`].
///
/// The entry is keyed on the full input tuple `(scroll_offset, config, len)`, so a lookup with
/// unchanged inputs returns the previous layout and any change recomputes. Lookups take
/// `&self`; the cache is meant to live next to the scroll state it memoizes and is not `Sync`.
#[derive(Clone, Debug, Default)]
pub struct WindowCache {
    entry: Cell<Option<(CacheKey, WindowLayout)>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl WindowCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, scroll_offset: u64, config: &RenderConfig, len: usize) -> WindowLayout {
        let key = CacheKey {
            scroll_offset,
            config: *config,
            len,
        };
        if let Some((cached_key, layout)) = self.entry.get() {
            if cached_key == key {
                self.hits.set(self.hits.get().saturating_add(1));
                return layout;
            }
        }

        let layout = compute_window(scroll_offset, config, len);
        self.misses.set(self.misses.get().saturating_add(1));
        self.entry.set(Some((key, layout)));
        layout
    }

    /// Returns the last computed layout without recomputing.
    pub fn peek(&self) -> Option<WindowLayout> {
        self.entry.get().map(|(_, layout)| layout)
    }

    pub fn invalidate(&self) {
        self.entry.set(None);
    }

    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    pub fn misses(&self) -> u64 {
        self.misses.get()
    }
}
