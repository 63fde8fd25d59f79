use crate::types::{
    CorrelationMatrix, MonthSales, ProductSales, SalesProfitPoint, SalesRecord, YearRegionSales,
};
use crate::util::{mean, CALENDAR};
use std::collections::{BTreeMap, HashMap};

/// The five derived views, computed once from the full record set.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub yearly: Vec<YearRegionSales>,
    pub monthly: Vec<MonthSales>,
    pub products: Vec<ProductSales>,
    pub pairs: Vec<SalesProfitPoint>,
    pub correlation: CorrelationMatrix,
    /// Regions in order of first appearance; fixes each region's colour.
    pub regions: Vec<String>,
    pub total_sales: f64,
}

impl Aggregates {
    pub fn compute(data: &[SalesRecord]) -> Self {
        Self {
            yearly: yearly_regional_sales(data),
            monthly: monthly_sales_trend(data),
            products: product_distribution(data),
            pairs: sales_profit_pairs(data),
            correlation: correlation_matrix(data),
            regions: region_order(data),
            total_sales: data.iter().map(|r| r.sales).sum(),
        }
    }
}

/// Sales summed per (Year, Region), ordered by year then region.
pub fn yearly_regional_sales(data: &[SalesRecord]) -> Vec<YearRegionSales> {
    let mut map: BTreeMap<(i32, String), f64> = BTreeMap::new();
    for r in data {
        *map.entry((r.year, r.region.clone())).or_insert(0.0) += r.sales;
    }
    map.into_iter()
        .map(|((year, region), sales)| YearRegionSales { year, region, sales })
        .collect()
}

/// Distinct regions in the order they first occur in the data.
pub fn region_order(data: &[SalesRecord]) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for r in data {
        if !regions.contains(&r.region) {
            regions.push(r.region.clone());
        }
    }
    regions
}

/// Collapse the regional split back into one total per year.
pub fn yearly_totals(rows: &[YearRegionSales]) -> Vec<(i32, f64)> {
    let mut map: BTreeMap<i32, f64> = BTreeMap::new();
    for row in rows {
        *map.entry(row.year).or_insert(0.0) += row.sales;
    }
    map.into_iter().collect()
}

/// Twelve rows, January through December, whatever order the input is in.
/// A month without records keeps `sales: None`.
pub fn monthly_sales_trend(data: &[SalesRecord]) -> Vec<MonthSales> {
    let mut sums: HashMap<u32, f64> = HashMap::new();
    for r in data {
        *sums.entry(r.month.number_from_month()).or_insert(0.0) += r.sales;
    }
    CALENDAR
        .iter()
        .map(|m| MonthSales {
            month: m.name(),
            sales: sums.get(&m.number_from_month()).copied(),
        })
        .collect()
}

pub fn product_distribution(data: &[SalesRecord]) -> Vec<ProductSales> {
    let mut map: BTreeMap<String, f64> = BTreeMap::new();
    for r in data {
        *map.entry(r.product.clone()).or_insert(0.0) += r.sales;
    }
    map.into_iter()
        .map(|(product, sales)| ProductSales { product, sales })
        .collect()
}

pub fn sales_profit_pairs(data: &[SalesRecord]) -> Vec<SalesProfitPoint> {
    data.iter()
        .map(|r| SalesProfitPoint {
            sales: r.sales,
            profit: r.profit,
            region: r.region.clone(),
        })
        .collect()
}

/// Pearson correlation of Sales against Profit, laid out as a 2x2 matrix.
pub fn correlation_matrix(data: &[SalesRecord]) -> CorrelationMatrix {
    let sales: Vec<f64> = data.iter().map(|r| r.sales).collect();
    let profit: Vec<f64> = data.iter().map(|r| r.profit).collect();
    let columns = [sales.as_slice(), profit.as_slice()];

    let mut values = [[None; 2]; 2];
    for i in 0..2 {
        values[i][i] = if columns[i].len() >= 2 && variance_sum(columns[i]) > 0.0 {
            Some(1.0)
        } else {
            None
        };
    }
    let off = pearson(columns[0], columns[1]);
    values[0][1] = off;
    values[1][0] = off;
    CorrelationMatrix {
        labels: CorrelationMatrix::LABELS,
        values,
    }
}

/// `None` with fewer than two observations or when either side is constant.
fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let (mx, my) = (mean(x), mean(y));
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a - mx, b - my);
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    if vx <= 0.0 || vy <= 0.0 {
        return None;
    }
    Some((cov / (vx.sqrt() * vy.sqrt())).clamp(-1.0, 1.0))
}

fn variance_sum(x: &[f64]) -> f64 {
    let m = mean(x);
    x.iter().map(|v| (v - m) * (v - m)).sum()
}
