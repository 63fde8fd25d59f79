use crate::error::{DashboardError, Result};
use crate::types::{RawRow, SalesRecord, REQUIRED_COLUMNS};
use crate::util::{non_empty_label, parse_f64_safe, parse_i32_safe, parse_month_safe};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Load every row of the sales file. Any bad row aborts the whole load.
pub fn load_sales<P: AsRef<Path>>(path: P) -> Result<Vec<SalesRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DashboardError::FileNotFound(path.display().to_string()),
        _ => DashboardError::Io(e),
    })?;
    let records = load_sales_from_reader(file)?;
    info!(
        "Loaded {} sales rows from {}",
        crate::util::format_int(records.len()),
        path.display()
    );
    Ok(records)
}

pub fn load_sales_from_reader<R: Read>(reader: R) -> Result<Vec<SalesRecord>> {
    let mut rdr = ReaderBuilder::new().from_reader(reader);
    let headers = rdr.headers()?.clone();
    validate_headers(&headers)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: RawRow = record.deserialize(Some(&headers))?;
        records.push(clean_row(row, line)?);
    }
    debug!("Parsed {} rows", records.len());
    Ok(records)
}

/// Every required column must appear in the header, spelled exactly.
pub fn validate_headers(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DashboardError::Schema { missing })
    }
}

fn clean_row(row: RawRow, line: u64) -> Result<SalesRecord> {
    let bad = |field: &str, value: Option<&str>| DashboardError::Parse {
        line,
        message: format!("invalid {field} {:?}", value.unwrap_or("")),
    };

    let year = parse_i32_safe(row.year.as_deref()).ok_or_else(|| bad("Year", row.year.as_deref()))?;
    let month =
        parse_month_safe(row.month.as_deref()).ok_or_else(|| bad("Month", row.month.as_deref()))?;
    let sales =
        parse_f64_safe(row.sales.as_deref()).ok_or_else(|| bad("Sales", row.sales.as_deref()))?;
    let profit =
        parse_f64_safe(row.profit.as_deref()).ok_or_else(|| bad("Profit", row.profit.as_deref()))?;
    let region = non_empty_label(row.region).ok_or_else(|| bad("Region", None))?;
    let product = non_empty_label(row.product).ok_or_else(|| bad("Product", None))?;

    Ok(SalesRecord {
        year,
        month,
        region,
        product,
        sales,
        profit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    const SAMPLE: &str = "\
Year,Month,Region,Product,Sales,Profit
2022,January,East,Widgets,100,20
2022,January,West,Widgets,50,5
2023,January,East,Gadgets,200,50
";

    #[test]
    fn loads_well_formed_rows() {
        let records = load_sales_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            SalesRecord {
                year: 2022,
                month: Month::January,
                region: "East".to_string(),
                product: "Widgets".to_string(),
                sales: 100.0,
                profit: 20.0,
            }
        );
    }

    #[test]
    fn column_order_and_extra_columns_do_not_matter() {
        let csv = "Profit,Notes,Sales,Product,Region,Month,Year\n5,x,\"1,500\",Widgets,West,Feb,2021\n";
        let records = load_sales_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records[0].sales, 1500.0);
        assert_eq!(records[0].month, Month::February);
        assert_eq!(records[0].year, 2021);
    }

    #[test]
    fn missing_columns_are_a_schema_error() {
        let csv = "Year,Month,Region,Product,Sales\n2022,January,East,Widgets,100\n";
        match load_sales_from_reader(csv.as_bytes()) {
            Err(DashboardError::Schema { missing }) => assert_eq!(missing, vec!["Profit"]),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let csv = "year,Month,Region,Product,sales,Profit\n";
        match load_sales_from_reader(csv.as_bytes()) {
            Err(DashboardError::Schema { missing }) => assert_eq!(missing, vec!["Year", "Sales"]),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn bad_value_reports_its_line() {
        let csv = "Year,Month,Region,Product,Sales,Profit\n2022,January,East,Widgets,100,20\n2022,Smarch,East,Widgets,1,1\n";
        match load_sales_from_reader(csv.as_bytes()) {
            Err(DashboardError::Parse { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("Month"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn exponent_notation_is_numeric() {
        let csv = "Year,Month,Region,Product,Sales,Profit\n2022,January,East,Widgets,1e3,2.5E2\n";
        let records = load_sales_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records[0].sales, 1000.0);
        assert_eq!(records[0].profit, 250.0);
    }

    #[test]
    fn nan_profit_is_fatal() {
        let csv = "Year,Month,Region,Product,Sales,Profit\n2022,January,East,Widgets,10,NaN\n";
        assert!(matches!(
            load_sales_from_reader(csv.as_bytes()),
            Err(DashboardError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn non_numeric_sales_is_fatal() {
        let csv = "Year,Month,Region,Product,Sales,Profit\n2022,May,East,Widgets,lots,20\n";
        assert!(matches!(
            load_sales_from_reader(csv.as_bytes()),
            Err(DashboardError::Parse { .. })
        ));
    }

    #[test]
    fn header_only_file_is_empty() {
        let csv = "Year,Month,Region,Product,Sales,Profit\n";
        assert!(load_sales_from_reader(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        match load_sales("definitely/not/here.csv") {
            Err(DashboardError::FileNotFound(path)) => assert!(path.ends_with("here.csv")),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
