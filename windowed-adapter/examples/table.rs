// Example: a virtual table with a fixed header row.
use windowed::RenderConfig;
use windowed_adapter::{Column, ScrollContainer, VirtualTable};

struct Order {
    id: u64,
    customer: String,
    total_cents: u64,
}

fn main() {
    let orders: Vec<Order> = (0..50_000)
        .map(|i| Order {
            id: 10_000 + i,
            customer: format!("customer-{}", i % 97),
            total_cents: i * 137 % 100_000,
        })
        .collect();

    let columns = vec![
        Column::new("id", "Order", |o: &Order, _| o.id.to_string()).with_width(8),
        Column::new("customer", "Customer", |o: &Order, _| o.customer.clone()),
        Column::new("total", "Total", |o: &Order, _| {
            format!("{}.{:02}", o.total_cents / 100, o.total_cents % 100)
        })
        .with_width(10),
    ];

    let container = ScrollContainer::new(240);
    let mut table = match VirtualTable::with_config(RenderConfig::new(24, 240), columns) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("invalid table: {err}");
            return;
        }
    };
    table.mount(&container);
    table.render(&orders);
    container.scroll_to(24 * 1_000);

    let frame = table.render(&orders);
    let header: Vec<&str> = frame.header.cells.iter().map(|c| c.header.as_str()).collect();
    println!("{}", header.join(" | "));
    for row in frame.body.nodes() {
        let cells: Vec<&str> = row.cells.iter().map(|c| c.content.as_str()).collect();
        println!("{}", cells.join(" | "));
    }
}
