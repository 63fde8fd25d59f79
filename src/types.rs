use chrono::Month;
use serde::Deserialize;
use tabled::Tabled;

/// Column names the sales file must carry, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 6] = ["Year", "Month", "Region", "Product", "Sales", "Profit"];

#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Month")]
    pub month: Option<String>,
    #[serde(rename = "Region")]
    pub region: Option<String>,
    #[serde(rename = "Product")]
    pub product: Option<String>,
    #[serde(rename = "Sales")]
    pub sales: Option<String>,
    #[serde(rename = "Profit")]
    pub profit: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub year: i32,
    pub month: Month,
    pub region: String,
    pub product: String,
    pub sales: f64,
    pub profit: f64,
}

#[derive(Debug, Tabled, Clone, PartialEq)]
pub struct YearRegionSales {
    #[tabled(rename = "Year")]
    pub year: i32,
    #[tabled(rename = "Region")]
    pub region: String,
    #[tabled(rename = "Sales", display_with = "display_amount")]
    pub sales: f64,
}

#[derive(Debug, Tabled, Clone, PartialEq)]
pub struct MonthSales {
    #[tabled(rename = "Month")]
    pub month: &'static str,
    /// `None` when no record falls in this month.
    #[tabled(rename = "Sales", display_with = "display_optional_amount")]
    pub sales: Option<f64>,
}

impl MonthSales {
    pub fn value_or_zero(&self) -> f64 {
        self.sales.unwrap_or(0.0)
    }
}

#[derive(Debug, Tabled, Clone, PartialEq)]
pub struct ProductSales {
    #[tabled(rename = "Product")]
    pub product: String,
    #[tabled(rename = "Sales", display_with = "display_amount")]
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesProfitPoint {
    pub sales: f64,
    pub profit: f64,
    pub region: String,
}

/// Pairwise Pearson correlation between the Sales and Profit columns.
///
/// `values[i][j]` is indexed by [`CorrelationMatrix::LABELS`]. A cell is
/// `None` when the correlation is undefined (constant column, fewer than two
/// rows).
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: [&'static str; 2],
    pub values: [[Option<f64>; 2]; 2],
}

impl CorrelationMatrix {
    pub const LABELS: [&'static str; 2] = ["Sales", "Profit"];

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values[row][col]
    }

    pub fn is_symmetric(&self) -> bool {
        self.values[0][1] == self.values[1][0]
    }
}

fn display_amount(v: &f64) -> String {
    crate::util::format_number(*v, 2)
}

fn display_optional_amount(v: &Option<f64>) -> String {
    match v {
        Some(n) => crate::util::format_number(*n, 2),
        None => "-".to_string(),
    }
}
