use core::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A contiguous index range `[start_index, end_index)` of a sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl Window {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub const fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

/// The full result of a window computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowLayout {
    pub window: Window,
    /// Height of the whole sequence (`len * item_height`); sizes the spacer.
    pub total_height: u64,
    /// Translation that places the first windowed item at its true position.
    pub offset_y: u64,
}

impl WindowLayout {
    pub fn start_index(&self) -> usize {
        self.window.start_index
    }

    pub fn end_index(&self) -> usize {
        self.window.end_index
    }

    pub fn rendered_count(&self) -> usize {
        self.window.len()
    }
}

/// One in-window item with its absolute position in the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowedItem {
    pub index: usize,
    pub top: u64,
    pub height: u32,
}

impl WindowedItem {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}
