//! Pure window arithmetic for fixed-height sequences.
//!
//! Every function here is a total function of its inputs: no allocation, no interior state,
//! and no panics for degenerate configs (zero heights yield empty windows).

use crate::{Align, RenderConfig, Window, WindowLayout};

fn offset_to_index(offset: u64) -> usize {
    usize::try_from(offset).unwrap_or(usize::MAX)
}

/// Total scrollable height of a sequence of `len` items.
pub fn total_height(config: &RenderConfig, len: usize) -> u64 {
    (len as u64).saturating_mul(config.item_height as u64)
}

/// Offset of the item at `index` from the top of the sequence.
pub fn item_offset(index: usize, config: &RenderConfig) -> u64 {
    (index as u64).saturating_mul(config.item_height as u64)
}

/// The largest scroll offset at which the container is still filled.
pub fn max_scroll_offset(config: &RenderConfig, len: usize) -> u64 {
    total_height(config, len).saturating_sub(config.container_height as u64)
}

/// Upper bound on the number of items [`compute_window`] can ever return for `config`,
/// independent of the sequence length.
pub fn rendered_count_bound(config: &RenderConfig) -> usize {
    config
        .items_per_view()
        .saturating_add(config.overscan.saturating_mul(2))
        .saturating_add(1)
}

/// The strictly visible range (no overscan).
pub fn visible_window(scroll_offset: u64, config: &RenderConfig, len: usize) -> Window {
    if len == 0 || config.item_height == 0 || config.container_height == 0 {
        return Window::EMPTY;
    }

    let raw_start = offset_to_index(scroll_offset / config.item_height as u64);
    let raw_end = raw_start.saturating_add(config.items_per_view()).min(len);

    Window {
        start_index: raw_start.min(raw_end),
        end_index: raw_end,
    }
}

/// Computes the window to render for `scroll_offset`, padded by `config.overscan` on both
/// sides and clamped to `[0, len]`.
///
/// `start_index <= end_index <= len` holds for every input, including offsets past the end
/// of a sequence that has just shrunk.
pub fn compute_window(scroll_offset: u64, config: &RenderConfig, len: usize) -> WindowLayout {
    let total_height = total_height(config, len);
    if len == 0 || config.item_height == 0 || config.container_height == 0 {
        return WindowLayout {
            window: Window::EMPTY,
            total_height,
            offset_y: 0,
        };
    }

    let item_height = config.item_height as u64;
    let raw_start = offset_to_index(scroll_offset / item_height);
    let raw_end = raw_start.saturating_add(config.items_per_view()).min(len);

    let end_index = raw_end.saturating_add(config.overscan).min(len);
    let start_index = raw_start.saturating_sub(config.overscan).min(end_index);

    wtrace!(scroll_offset, len, start_index, end_index, "compute_window");

    WindowLayout {
        window: Window {
            start_index,
            end_index,
        },
        total_height,
        offset_y: item_offset(start_index, config),
    }
}

/// Returns the item covering `offset`, clamped to the last item.
///
/// Returns `None` for empty sequences or a zero item height.
pub fn index_at_offset(offset: u64, config: &RenderConfig, len: usize) -> Option<usize> {
    if len == 0 || config.item_height == 0 {
        return None;
    }
    let index = offset_to_index(offset / config.item_height as u64);
    Some(index.min(len - 1))
}

/// Computes the scroll offset that brings `index` into view with the given alignment.
///
/// `current_offset` is only consulted for [`Align::Auto`]. The result is clamped to
/// [`max_scroll_offset`].
pub fn scroll_to_index_offset(
    index: usize,
    align: Align,
    current_offset: u64,
    config: &RenderConfig,
    len: usize,
) -> u64 {
    if len == 0 || config.item_height == 0 {
        return 0;
    }
    let index = index.min(len - 1);
    let item_height = config.item_height as u64;
    let start = item_offset(index, config);
    let end = start.saturating_add(item_height);
    let view = config.container_height as u64;

    let target = match align {
        Align::Start => start,
        Align::End => end.saturating_sub(view),
        Align::Center => {
            let center = start.saturating_add(item_height / 2);
            center.saturating_sub(view / 2)
        }
        Align::Auto => {
            let cur_end = current_offset.saturating_add(view);
            if start >= current_offset && end <= cur_end {
                current_offset
            } else if start < current_offset {
                start
            } else {
                end.saturating_sub(view)
            }
        }
    };

    target.min(max_scroll_offset(config, len))
}
