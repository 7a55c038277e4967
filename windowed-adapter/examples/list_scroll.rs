// Example: a virtual list driven by a scroll container.
use windowed_adapter::{ScrollContainer, VirtualList};

fn main() {
    let rows: Vec<String> = (0..100_000).map(|i| format!("row {i}")).collect();

    let container = ScrollContainer::new(300);
    let mut list = VirtualList::new(20, 300)
        .with_overscan(3)
        .with_on_change(|state| println!("scrolled to {}", state.scroll_offset));
    list.mount(&container);

    let frame = list.render(&rows, |row, _| row.clone());
    let (spacer, rendered) = (frame.spacer_height, frame.len());
    println!("spacer={spacer} rendered={rendered}");

    for delta in [120, 4_000, -1_000] {
        container.scroll_by(delta);
        let frame = list.render(&rows, |row, _| row.clone());
        let first = frame.nodes().next().map(String::as_str).unwrap_or("-");
        let (window, offset_y) = (frame.window, frame.offset_y);
        println!("window={window:?} offset_y={offset_y} first={first}");
    }

    list.unmount();
    println!("listeners after unmount={}", container.listener_count());
}
