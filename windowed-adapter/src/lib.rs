//! List and table renderers for the `windowed` crate.
//!
//! The `windowed` crate is UI-agnostic and only does the window arithmetic. This crate adds the
//! pieces a host needs to put it on screen:
//!
//! - [`ScrollContainer`]: a model of a native scroll element with RAII scroll subscriptions
//! - [`VirtualList`]: owns the scroll position and renders only the windowed slice
//! - [`VirtualTable`]: a non-virtualized header row over a windowed body
//!
//! Rendering produces plain frames ([`ListFrame`], [`TableFrame`]) describing the container,
//! the spacer, the translating wrapper and the keyed items, with caller-defined node types.
//! Everything is single-threaded and synchronous.
//!
//! ```
//! use windowed_adapter::{ScrollContainer, VirtualList};
//!
//! let items: Vec<u32> = (0..1000).collect();
//! let container = ScrollContainer::new(400);
//! let mut list = VirtualList::new(50, 400).with_overscan(5);
//! list.mount(&container);
//!
//! let frame = list.render(&items, |item, _| *item);
//! assert_eq!(frame.spacer_height, 50_000);
//!
//! container.scroll_to(1000);
//! let frame = list.render(&items, |item, _| *item);
//! assert_eq!(frame.window.start_index, 15);
//! assert_eq!(frame.len(), 18);
//! assert_eq!(frame.offset_y, 750);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod frame;
mod list;
mod scroll;
mod table;


pub use frame::{ContainerBox, ListFrame, Overflow, RenderedItem};
pub use list::{OnChangeCallback, VirtualList, render_window};
pub use scroll::{ScrollContainer, ScrollListener, Subscription};
pub use table::{
    Column, HeaderCell, HeaderRow, TableCell, TableError, TableFrame, TableRow, VirtualTable,
};
