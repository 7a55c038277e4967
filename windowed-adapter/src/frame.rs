use alloc::vec::Vec;

use windowed::Window;

/// CSS-style overflow behavior of the outer scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
    #[default]
    Auto,
}

/// The outer, fixed-height scroll container of a rendered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerBox {
    pub height: u32,
    pub overflow: Overflow,
}

/// A windowed item produced by a render callback, tagged with its original index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedItem<N> {
    /// Stable identity key. Equal to the original index.
    pub key: usize,
    pub index: usize,
    /// Absolute position inside the spacer (`index * item_height`).
    pub top: u64,
    /// Position inside the translating wrapper (`top - offset_y`).
    pub relative_top: u64,
    pub height: u32,
    pub node: N,
}

/// One rendered frame of a virtual list.
///
/// Layout, outermost first:
/// - `container`: fixed height, scrolls its content
/// - a spacer of `spacer_height`, so scrollbar proportions reflect the whole sequence
/// - a wrapper translated by `offset_y`
/// - `items`, stacked inside the wrapper
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListFrame<N> {
    pub container: ContainerBox,
    pub spacer_height: u64,
    pub offset_y: u64,
    pub window: Window,
    pub items: Vec<RenderedItem<N>>,
}

impl<N> ListFrame<N> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|item| item.key)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.items.iter().map(|item| &item.node)
    }

    /// Maps every rendered node, keeping positions and keys.
    pub fn map<M>(self, mut f: impl FnMut(N) -> M) -> ListFrame<M> {
        ListFrame {
            container: self.container,
            spacer_height: self.spacer_height,
            offset_y: self.offset_y,
            window: self.window,
            items: self
                .items
                .into_iter()
                .map(|item| RenderedItem {
                    key: item.key,
                    index: item.index,
                    top: item.top,
                    relative_top: item.relative_top,
                    height: item.height,
                    node: f(item.node),
                })
                .collect(),
        }
    }
}
