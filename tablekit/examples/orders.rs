use std::error::Error;
use std::fs::File;

use chrono::{DateTime, Duration, TimeZone, Utc};
use simplelog::{Config, LevelFilter, WriteLogger};
use tablekit::prelude::*;

#[derive(Debug, Clone)]
struct Order {
    id: u32,
    customer: String,
    status: &'static str,
    total_cents: u32,
    placed_at: DateTime<Utc>,
}

fn orders() -> Vec<Order> {
    let customers = ["Ada", "Grace", "Linus", "Barbara", "Ken", "Margaret", "Dennis"];
    let statuses = ["pending", "shipped", "delivered", "cancelled"];
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    (1..=23)
        .map(|i| Order {
            id: i,
            customer: customers[i as usize % customers.len()].to_string(),
            status: statuses[i as usize % statuses.len()],
            total_cents: (i * 1379) % 25000 + 499,
            placed_at: start + Duration::hours(i64::from(i) * 7),
        })
        .collect()
}

fn columns() -> Vec<Column<Order>> {
    vec![
        Column::new("id", |o: &Order| Value::from(o.id))
            .header("Order")
            .numeric()
            .width(80.0),
        Column::new("customer", |o: &Order| Value::from(&o.customer)).header("Customer"),
        Column::new("status", |o: &Order| Value::from(o.status))
            .header("Status")
            .select_filter(vec![
                FilterOption::new("Pending", "pending"),
                FilterOption::new("Shipped", "shipped"),
                FilterOption::new("Delivered", "delivered"),
                FilterOption::new("Cancelled", "cancelled"),
            ]),
        Column::new("total", |o: &Order| {
            Value::from(f64::from(o.total_cents) / 100.0)
        })
        .header("Total")
        .numeric(),
        Column::new("placed_at", |o: &Order| Value::from(o.placed_at))
            .header("Placed")
            .sortable(false),
    ]
}

fn print_page(table: &TableStore<Order>) {
    let columns = table.visible_columns();
    let header: Vec<String> = columns
        .iter()
        .map(|c| format!("{:<12}", c.header))
        .collect();
    println!("{}", header.join(" "));
    for row in table.paged_rows() {
        let marker = if table.is_selected(row) { "*" } else { " " };
        let cells: Vec<String> = columns
            .iter()
            .map(|c| format!("{:<12}", c.text(row)))
            .collect();
        println!("{} {}", marker, cells.join(" "));
    }
    let pagination = table.pagination();
    println!(
        "page {}/{} ({} rows, {} selected)\n",
        pagination.page_index + 1,
        pagination.page_count.max(1),
        table.total_rows(),
        table.selected_count()
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("orders.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let options = TableOptions::default()
        .with_features(Features::all())
        .with_page_size(5)
        .with_sorting(vec![SortEntry::desc("total")]);
    let mut table = create_table(orders(), columns(), |o: &Order| o.id.to_string(), options)?;
    table.on_selection_change(|snapshot| {
        log::info!("selection changed: {:?}", snapshot.ids);
    });

    println!("Top orders by total");
    print_page(&table);

    table.set_filter("status", "shipped");
    table.toggle_all_on_page();
    println!("Shipped orders, page selected");
    print_page(&table);

    table.set_filter("status", "");
    table.set_global_filter("grace");
    table.toggle_sort("customer");
    println!("Orders for Grace");
    print_page(&table);

    if let Some(mut session) = table.begin_resize("customer", 300.0, ListenerGuard::noop) {
        session.pointer_move(360.0);
        println!("customer column is {:?}px wide", session.width());
    }

    table.set_global_filter("");
    println!("{}", table.export("csv")?);
    Ok(())
}
