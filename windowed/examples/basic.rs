// Example: computing windows for a large fixed-height list.
use windowed::{Align, RenderConfig, Viewport, compute_window, rendered_count_bound};

fn main() {
    let config = RenderConfig::new(50, 400).with_overscan(5);
    let layout = compute_window(1000, &config, 1_000_000);
    let (total, offset_y) = (layout.total_height, layout.offset_y);
    println!("window={:?}", layout.window);
    println!("total_height={total} offset_y={offset_y}");
    println!("bound={}", rendered_count_bound(&config));

    let mut viewport = Viewport::new(config);
    viewport.set_len(1_000_000);
    let off = viewport.scroll_to_index_offset(999_999, Align::End);
    viewport.set_scroll_offset_clamped(off);
    let (offset, window) = (viewport.scroll_offset(), viewport.window());
    println!("after scroll_to_index: offset={offset} window={window:?}");

    viewport.for_each_windowed_item(|item| {
        if item.index + 1 == viewport.len() {
            println!("last item top={} bottom={}", item.top, item.bottom());
        }
    });
}
