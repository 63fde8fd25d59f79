use crate::reports::Aggregates;
use crate::util::format_number;
use tabled::{settings::Style, Table, Tabled};

/// Markdown table of at most `max_rows` rows.
pub fn preview_table_rows<T>(rows: &[T], max_rows: usize) -> String
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(slice).with(Style::markdown()).to_string()
}

/// Print the aggregate tables the charts are built from.
pub fn preview_aggregates(agg: &Aggregates, max_rows: usize) {
    println!("Yearly Sales by Region\n");
    println!("{}\n", preview_table_rows(&agg.yearly, max_rows));
    println!("Monthly Sales Trend\n");
    println!("{}\n", preview_table_rows(&agg.monthly, 12));
    println!("Sales by Product\n");
    println!("{}\n", preview_table_rows(&agg.products, max_rows));
    println!("Sales/Profit Correlation\n");
    println!("{}\n", correlation_table(agg));
    println!("Total Sales: {}\n", format_number(agg.total_sales, 2));
}

fn correlation_table(agg: &Aggregates) -> String {
    let m = &agg.correlation;
    let cell = |v: Option<f64>| v.map(|c| format!("{c:.3}")).unwrap_or_else(|| "-".to_string());
    let mut builder = tabled::builder::Builder::default();
    let mut header = vec![String::new()];
    header.extend(m.labels.iter().map(|l| l.to_string()));
    builder.push_record(header);
    for (i, label) in m.labels.iter().enumerate() {
        builder.push_record([label.to_string(), cell(m.get(i, 0)), cell(m.get(i, 1))]);
    }
    builder.build().with(Style::markdown()).to_string()
}
