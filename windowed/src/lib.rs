//! A headless windowing engine for fixed-height sequences.
//!
//! For list and table renderers that own a scroll subscription, see the `windowed-adapter`
//! crate.
//!
//! This crate holds the arithmetic needed to render huge lists at interactive frame rates:
//! given a scroll offset, an item height, a container height and an overscan, it computes the
//! index window to materialize, the spacer height that keeps scrollbar proportions honest, and
//! the translation that puts the windowed slice at its true position. The number of rendered
//! items never grows with the length of the sequence.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the container height and the (uniform) item height
//! - the scroll offset, on every scroll event
//! - the current sequence length
//!
//! ```
//! use windowed::{RenderConfig, compute_window};
//!
//! let config = RenderConfig::new(50, 400).with_overscan(5);
//! let layout = compute_window(1000, &config, 1000);
//! assert_eq!(layout.window.start_index, 15);
//! assert_eq!(layout.window.end_index, 33);
//! assert_eq!(layout.total_height, 50_000);
//! assert_eq!(layout.offset_y, 750);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod calculator;
mod config;
mod state;
mod types;
mod viewport;

#[cfg(test)]
mod tests;

pub use cache::WindowCache;
pub use calculator::{
    compute_window, index_at_offset, item_offset, max_scroll_offset, rendered_count_bound,
    scroll_to_index_offset, total_height, visible_window,
};
pub use config::{ConfigError, DEFAULT_OVERSCAN, RenderConfig};
pub use state::ViewportState;
pub use types::{Align, ScrollDirection, Window, WindowLayout, WindowedItem};
pub use viewport::Viewport;
