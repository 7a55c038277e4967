use core::cmp;

use crate::ScrollDirection;

/// A lightweight, serializable snapshot of the scroll position.
///
/// This is the only mutable state a renderer owns; the window is always derived from it.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: u64,
}

impl ViewportState {
    pub fn new(scroll_offset: u64) -> Self {
        Self { scroll_offset }
    }

    /// Moves to `offset` and reports which way it moved (`None` when unchanged).
    pub fn scroll_to(&mut self, offset: u64) -> Option<ScrollDirection> {
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => None,
        }
    }
}
