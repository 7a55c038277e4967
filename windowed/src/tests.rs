use crate::*;

use alloc::string::ToString;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn expected_window(scroll_offset: u64, config: &RenderConfig, len: usize) -> Window {
    // Reference model: filter every index by the slot it occupies instead of clamping a range.
    if len == 0 || config.item_height == 0 || config.container_height == 0 {
        return Window::EMPTY;
    }
    let first_slot = scroll_offset / config.item_height as u64;
    let slots = config.items_per_view() as u64;
    let overscan = config.overscan as u64;
    let mut included = (0..len).filter(|&i| {
        let i = i as u64;
        i + overscan >= first_slot && i < first_slot + slots + overscan
    });
    match included.next() {
        Some(first) => {
            let last = included.last().unwrap_or(first);
            Window::new(first, last + 1)
        }
        None => Window::new(len, len),
    }
}

#[test]
fn reference_scenario() {
    let config = RenderConfig::new(50, 400).with_overscan(5);
    let visible = visible_window(1000, &config, 1000);
    assert_eq!(visible.start_index, 20);
    assert_eq!(visible.end_index, 28);

    let layout = compute_window(1000, &config, 1000);
    assert_eq!(layout.window.start_index, 15);
    assert_eq!(layout.window.end_index, 33);
    assert_eq!(layout.rendered_count(), 18);
    assert_eq!(layout.total_height, 50_000);
    assert_eq!(layout.offset_y, 750);
}

#[test]
fn empty_sequence_renders_nothing_at_any_offset() {
    let config = RenderConfig::new(50, 400);
    for offset in [0u64, 1, 49, 50, 1000, u64::MAX] {
        let layout = compute_window(offset, &config, 0);
        assert_eq!(layout.window, Window::EMPTY);
        assert_eq!(layout.total_height, 0);
        assert_eq!(layout.offset_y, 0);
    }
}

#[test]
fn shrunk_sequence_clamps_window() {
    let config = RenderConfig::new(50, 400).with_overscan(5);
    // Offset 1000 implies raw_start = 20, but only 10 items remain.
    let layout = compute_window(1000, &config, 10);
    assert_eq!(layout.window.end_index, 10);
    assert!(layout.window.start_index <= 10);
    assert!(layout.window.is_empty());
    assert_eq!(layout.total_height, 500);
}

#[test]
fn top_of_list_never_goes_negative() {
    let config = RenderConfig::new(20, 100).with_overscan(50);
    let layout = compute_window(0, &config, 1000);
    assert_eq!(layout.window.start_index, 0);
    assert_eq!(layout.offset_y, 0);
    // 5 visible + 50 overscan
    assert_eq!(layout.window.end_index, 55);
}

#[test]
fn max_offset_reaches_the_last_item_exactly() {
    let config = RenderConfig::new(30, 100).with_overscan(2);
    let len = 77;
    let max = max_scroll_offset(&config, len);
    assert_eq!(max, 77 * 30 - 100);
    for offset in [max, max + 1, max + 1000, u64::MAX] {
        assert_eq!(compute_window(offset, &config, len).window.end_index, len);
    }
}

#[test]
fn container_taller_than_content_renders_everything() {
    let config = RenderConfig::new(10, 1000).with_overscan(0);
    let layout = compute_window(0, &config, 7);
    assert_eq!(layout.window, Window::new(0, 7));
    assert_eq!(max_scroll_offset(&config, 7), 0);
}

#[test]
fn zero_heights_degrade_to_empty_windows() {
    let zero_container = RenderConfig::new(10, 0);
    let layout = compute_window(100, &zero_container, 50);
    assert!(layout.window.is_empty());
    assert_eq!(layout.total_height, 500);

    let zero_item = RenderConfig::new(0, 100);
    let layout = compute_window(100, &zero_item, 50);
    assert!(layout.window.is_empty());
    assert_eq!(layout.total_height, 0);
    assert_eq!(index_at_offset(0, &zero_item, 50), None);
    let target = scroll_to_index_offset(10, Align::Start, 0, &zero_item, 50);
    assert_eq!(target, 0);
}

#[test]
fn partial_rows_round_up() {
    // 95 / 10 rounds up to 10 slots.
    let config = RenderConfig::new(10, 95).with_overscan(0);
    let layout = compute_window(5, &config, 100);
    assert_eq!(layout.window, Window::new(0, 10));
    assert_eq!(config.items_per_view(), 10);
}

#[test]
fn try_new_rejects_zero_heights() {
    let zero_item = RenderConfig::try_new(0, 10);
    assert_eq!(zero_item, Err(ConfigError::ZeroItemHeight));
    let zero_container = RenderConfig::try_new(10, 0);
    assert_eq!(zero_container, Err(ConfigError::ZeroContainerHeight));
    let config = RenderConfig::try_new(10, 20).unwrap();
    assert_eq!(config.overscan, DEFAULT_OVERSCAN);
    assert_eq!(
        ConfigError::ZeroItemHeight.to_string(),
        "item height must be greater than zero"
    );
}

#[test]
fn index_and_offset_helpers() {
    let config = RenderConfig::new(25, 100);
    assert_eq!(item_offset(4, &config), 100);
    assert_eq!(total_height(&config, 8), 200);
    assert_eq!(index_at_offset(0, &config, 8), Some(0));
    assert_eq!(index_at_offset(24, &config, 8), Some(0));
    assert_eq!(index_at_offset(25, &config, 8), Some(1));
    assert_eq!(index_at_offset(10_000, &config, 8), Some(7));
    assert_eq!(index_at_offset(0, &config, 0), None);
    assert_eq!(rendered_count_bound(&config.with_overscan(3)), 4 + 6 + 1);
}

#[test]
fn scroll_to_index_offset_alignments() {
    let config = RenderConfig::new(10, 50);
    let target = |index, align| scroll_to_index_offset(index, align, 0, &config, 100);
    assert_eq!(target(20, Align::Start), 200);
    // end(20) = 210, minus view 50
    assert_eq!(target(20, Align::End), 160);
    // center(20) = 205, minus half view 25
    assert_eq!(target(20, Align::Center), 180);
    // Clamped to max scroll offset (1000 - 50).
    assert_eq!(target(99, Align::Start), 950);
    assert_eq!(target(5000, Align::Start), 950);
    assert_eq!(scroll_to_index_offset(3, Align::Start, 0, &config, 0), 0);
}

#[test]
fn align_auto_keeps_fully_visible_items_in_place() {
    let config = RenderConfig::new(10, 50);
    let auto = |index| scroll_to_index_offset(index, Align::Auto, 100, &config, 100);
    // Viewport covers [100, 150); item 12 is [120, 130).
    assert_eq!(auto(12), 100);
    // Item 5 is above: align to start.
    assert_eq!(auto(5), 50);
    // Item 20 is below: align to end. end = 210, 210 - 50 = 160
    assert_eq!(auto(20), 160);
}

#[test]
fn window_cache_memoizes_on_identical_inputs() {
    let cache = WindowCache::new();
    let config = RenderConfig::new(50, 400);
    let a = cache.get(1000, &config, 1000);
    let b = cache.get(1000, &config, 1000);
    assert_eq!(a, b);
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 1);

    let c = cache.get(1050, &config, 1000);
    assert_eq!(c.window.start_index, 16);
    assert_eq!(cache.misses(), 2);

    // Changing any component of the key recomputes.
    cache.get(1050, &config, 10);
    cache.get(1050, &config.with_overscan(0), 10);
    assert_eq!(cache.misses(), 4);
    let last = compute_window(1050, &config.with_overscan(0), 10);
    assert_eq!(cache.peek(), Some(last));

    cache.invalidate();
    assert_eq!(cache.peek(), None);
}

#[test]
fn viewport_tracks_direction_and_memoizes_layout() {
    let mut v = Viewport::new(RenderConfig::new(50, 400));
    v.set_len(1000);
    assert_eq!(v.scroll_offset(), 0);
    assert_eq!(v.scroll_direction(), None);

    v.set_scroll_offset(1000);
    assert_eq!(v.scroll_direction(), Some(ScrollDirection::Forward));
    assert_eq!(v.window(), Window::new(15, 33));
    let _ = v.layout();
    assert_eq!(v.cache().misses(), 1);
    assert!(v.cache().hits() >= 1);

    v.set_scroll_offset(500);
    assert_eq!(v.scroll_direction(), Some(ScrollDirection::Backward));
    // Same offset again keeps the last direction.
    v.set_scroll_offset(500);
    assert_eq!(v.scroll_direction(), Some(ScrollDirection::Backward));
}

#[test]
fn viewport_set_config_resets_the_window() {
    let mut v = Viewport::new(RenderConfig::new(50, 400));
    v.set_len(1000);
    v.set_scroll_offset(5000);
    assert_eq!(v.window().start_index, 95);

    v.set_config(RenderConfig::new(20, 100).with_overscan(1));
    assert_eq!(v.scroll_offset(), 0);
    assert_eq!(v.scroll_direction(), None);
    assert_eq!(v.window(), Window::new(0, 6));
    assert_eq!(v.total_height(), 20_000);
}

#[test]
fn viewport_shrink_keeps_window_in_bounds() {
    let mut v = Viewport::new(RenderConfig::new(50, 400));
    v.set_len(1000);
    v.set_scroll_offset(1000);
    v.set_len(10);
    let w = v.window();
    assert_eq!(w.end_index, 10);
    assert!(w.start_index <= w.end_index);

    v.set_scroll_offset_clamped(v.scroll_offset());
    assert_eq!(v.scroll_offset(), 100);
    assert_eq!(v.window(), Window::new(0, 10));
}

#[test]
fn viewport_windowed_items_are_positioned_by_index() {
    let mut v = Viewport::new(RenderConfig::new(50, 400).with_overscan(1));
    v.set_len(1000);
    v.set_scroll_offset(1020);

    let mut items = Vec::new();
    v.collect_windowed_items(&mut items);
    assert_eq!(items.first().map(|it| it.index), Some(19));
    assert_eq!(items.len(), v.window().len());
    for it in &items {
        assert_eq!(it.top, it.index as u64 * 50);
        assert_eq!(it.bottom(), it.top + 50);
    }

    // Buffer is cleared on reuse.
    v.set_len(0);
    v.collect_windowed_items(&mut items);
    assert!(items.is_empty());
}

#[test]
fn viewport_item_queries_and_restore() {
    let mut v = Viewport::new(RenderConfig::new(10, 30));
    v.set_len(5);
    assert_eq!(v.item_top(4), Some(40));
    assert_eq!(v.item_top(5), None);
    assert_eq!(v.index_at_offset(35), Some(3));
    assert_eq!(v.max_scroll_offset(), 20);
    assert_eq!(v.clamp_scroll_offset(999), 20);

    assert_eq!(v.scroll_to_index(4, Align::Start), 20);
    let saved = v.state();
    v.set_scroll_offset(0);
    v.restore_state(saved);
    assert_eq!(v.scroll_offset(), 20);
    assert_eq!(v.visible_window(), Window::new(2, 5));
}

#[test]
fn randomized_windows_match_reference_model() {
    let mut rng = Lcg::new(0x5eed_1234);
    for _ in 0..500 {
        let len = rng.gen_range_usize(0, 200);
        let config = RenderConfig::new(rng.gen_range_u32(1, 40), rng.gen_range_u32(1, 300))
            .with_overscan(rng.gen_range_usize(0, 8));
        let total = total_height(&config, len);
        let span = total + 2 * config.container_height as u64 + 1;
        let offset = rng.gen_range_u64(0, span);

        let layout = compute_window(offset, &config, len);
        let w = layout.window;
        assert!(w.start_index <= w.end_index);
        assert!(w.end_index <= len);
        assert!(w.len() <= rendered_count_bound(&config));
        assert_eq!(layout.total_height, len as u64 * config.item_height as u64);
        let start_top = w.start_index as u64 * config.item_height as u64;
        assert_eq!(layout.offset_y, start_top);

        let expected = expected_window(offset, &config, len);
        assert_eq!(w, expected, "offset={offset} len={len} config={config:?}");
    }
}

#[test]
fn randomized_start_is_monotonic_in_offset() {
    let mut rng = Lcg::new(42);
    for _ in 0..100 {
        let len = rng.gen_range_usize(1, 500);
        let config = RenderConfig::new(rng.gen_range_u32(1, 50), rng.gen_range_u32(1, 400))
            .with_overscan(rng.gen_range_usize(0, 6));
        let total = total_height(&config, len);
        let mut prev = 0usize;
        let mut offset = 0u64;
        while offset <= total + 100 {
            let start = compute_window(offset, &config, len).window.start_index;
            assert!(start >= prev, "start went backwards at offset {offset}");
            prev = start;
            offset += rng.gen_range_u64(1, 64);
        }
    }
}
