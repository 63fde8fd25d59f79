// Chart specifications for the five dashboard figures.
//
// Each builder turns one aggregate view into a declarative description plus
// a Plotly figure (`data` traces and `layout`) that the page hands to
// plotly.js unchanged.
use crate::reports::Aggregates;
use crate::types::{CorrelationMatrix, MonthSales, ProductSales, SalesProfitPoint, YearRegionSales};
use log::debug;
use serde_json::{json, Value};

/// Sequential "Blues" ramp, lightest first; cycled for categorical colours.
pub const BLUES: [&str; 9] = [
    "rgb(247,251,255)",
    "rgb(222,235,247)",
    "rgb(198,219,239)",
    "rgb(158,202,225)",
    "rgb(107,174,214)",
    "rgb(66,146,198)",
    "rgb(33,113,181)",
    "rgb(8,81,156)",
    "rgb(8,48,107)",
];

/// Continuous colour scale name for the heatmap.
pub const BLUES_SCALE: &str = "Blues";

/// Largest bubble diameter in the scatter chart, in pixels.
pub const MAX_MARKER_SIZE: f64 = 20.0;

pub const YEARLY_TITLE: &str = "Yearly Sales Comparison";
pub const MONTHLY_TITLE: &str = "Monthly Sales Trend";
pub const PRODUCT_TITLE: &str = "Product Category Distribution";
pub const SCATTER_TITLE: &str = "Sales vs Profit Relationship";
pub const HEATMAP_TITLE: &str = "Sales Correlation Matrix";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    GroupedBar,
    Line,
    Pie,
    Scatter,
    Heatmap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// DOM id of the placeholder the figure is drawn into
    pub id: &'static str,
    pub kind: ChartKind,
    pub title: &'static str,
    pub x: Option<&'static str>,
    pub y: Option<&'static str>,
    pub color: Option<&'static str>,
    pub palette: Vec<&'static str>,
    pub data: Vec<Value>,
    pub layout: Value,
}

impl ChartSpec {
    /// The `{data, layout}` object plotly.js expects.
    pub fn figure(&self) -> Value {
        json!({ "data": self.data, "layout": self.layout })
    }
}

/// All five charts, in page order.
pub fn build_charts(agg: &Aggregates) -> Vec<ChartSpec> {
    let charts = vec![
        yearly_bar_chart(&agg.yearly, &agg.regions),
        monthly_line_chart(&agg.monthly),
        product_pie_chart(&agg.products),
        sales_profit_scatter(&agg.pairs, &agg.regions),
        correlation_heatmap(&agg.correlation),
    ];
    for c in &charts {
        debug!("Built {:?} chart {:?} with {} trace(s)", c.kind, c.title, c.data.len());
    }
    charts
}

fn palette_color(idx: usize) -> &'static str {
    BLUES[idx % BLUES.len()]
}

fn base_layout(title: &str) -> Value {
    json!({ "title": { "text": title } })
}

/// One trace per region. `regions` sets trace order and therefore colour,
/// shared with the scatter chart.
pub fn yearly_bar_chart(rows: &[YearRegionSales], regions: &[String]) -> ChartSpec {
    let data = regions
        .iter()
        .enumerate()
        .map(|(idx, region)| {
            let (x, y): (Vec<i32>, Vec<f64>) = rows
                .iter()
                .filter(|r| r.region == *region)
                .map(|r| (r.year, r.sales))
                .unzip();
            json!({
                "type": "bar",
                "name": region,
                "x": x,
                "y": y,
                "marker": { "color": palette_color(idx) },
            })
        })
        .collect();

    let mut layout = base_layout(YEARLY_TITLE);
    layout["barmode"] = json!("group");
    layout["xaxis"] = json!({ "title": { "text": "Year" } });
    layout["yaxis"] = json!({ "title": { "text": "Sales" } });
    layout["legend"] = json!({ "title": { "text": "Region" } });

    ChartSpec {
        id: "yearly-sales",
        kind: ChartKind::GroupedBar,
        title: YEARLY_TITLE,
        x: Some("Year"),
        y: Some("Sales"),
        color: Some("Region"),
        palette: BLUES.to_vec(),
        data,
        layout,
    }
}

/// Absent months go out as `null`, which plotly.js draws as a gap.
pub fn monthly_line_chart(rows: &[MonthSales]) -> ChartSpec {
    let x: Vec<&str> = rows.iter().map(|m| m.month).collect();
    let y: Vec<Option<f64>> = rows.iter().map(|m| m.sales).collect();
    let data = vec![json!({
        "type": "scatter",
        "mode": "lines+markers",
        "x": x,
        "y": y,
        "line": { "shape": "spline" },
        "connectgaps": false,
    })];

    let mut layout = base_layout(MONTHLY_TITLE);
    layout["xaxis"] = json!({ "title": { "text": "Month" }, "categoryorder": "array", "categoryarray": x });
    layout["yaxis"] = json!({ "title": { "text": "Sales" } });

    ChartSpec {
        id: "monthly-trend",
        kind: ChartKind::Line,
        title: MONTHLY_TITLE,
        x: Some("Month"),
        y: Some("Sales"),
        color: None,
        palette: Vec::new(),
        data,
        layout,
    }
}

pub fn product_pie_chart(rows: &[ProductSales]) -> ChartSpec {
    let labels: Vec<&str> = rows.iter().map(|p| p.product.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|p| p.sales).collect();
    let colors: Vec<&str> = (0..rows.len()).map(palette_color).collect();
    let data = vec![json!({
        "type": "pie",
        "labels": labels,
        "values": values,
        "marker": { "colors": colors },
    })];

    ChartSpec {
        id: "product-distribution",
        kind: ChartKind::Pie,
        title: PRODUCT_TITLE,
        x: None,
        y: Some("Sales"),
        color: Some("Product"),
        palette: BLUES.to_vec(),
        data,
        layout: base_layout(PRODUCT_TITLE),
    }
}

/// One bubble trace per region, in `regions` order.
pub fn sales_profit_scatter(points: &[SalesProfitPoint], regions: &[String]) -> ChartSpec {
    let max_sales = points.iter().map(|p| p.sales).fold(0.0_f64, f64::max);
    let sizeref = if max_sales > 0.0 {
        2.0 * max_sales / (MAX_MARKER_SIZE * MAX_MARKER_SIZE)
    } else {
        1.0
    };

    let data = regions
        .iter()
        .enumerate()
        .map(|(idx, region)| {
            let members: Vec<&SalesProfitPoint> =
                points.iter().filter(|p| p.region == *region).collect();
            let x: Vec<f64> = members.iter().map(|p| p.sales).collect();
            let y: Vec<f64> = members.iter().map(|p| p.profit).collect();
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": region,
                "x": x,
                "y": y,
                "marker": {
                    "color": palette_color(idx),
                    "size": x,
                    "sizemode": "area",
                    "sizeref": sizeref,
                },
            })
        })
        .collect();

    let mut layout = base_layout(SCATTER_TITLE);
    layout["xaxis"] = json!({ "title": { "text": "Sales" } });
    layout["yaxis"] = json!({ "title": { "text": "Profit" } });
    layout["legend"] = json!({ "title": { "text": "Region" } });

    ChartSpec {
        id: "sales-profit",
        kind: ChartKind::Scatter,
        title: SCATTER_TITLE,
        x: Some("Sales"),
        y: Some("Profit"),
        color: Some("Region"),
        palette: BLUES.to_vec(),
        data,
        layout,
    }
}

pub fn correlation_heatmap(matrix: &CorrelationMatrix) -> ChartSpec {
    let data = vec![json!({
        "type": "heatmap",
        "x": matrix.labels,
        "y": matrix.labels,
        "z": matrix.values,
        "colorscale": BLUES_SCALE,
        "texttemplate": "%{z}",
        "hoverongaps": false,
    })];

    let mut layout = base_layout(HEATMAP_TITLE);
    layout["yaxis"] = json!({ "autorange": "reversed" });
    layout["xaxis"] = json!({ "constrain": "domain" });

    ChartSpec {
        id: "correlation-matrix",
        kind: ChartKind::Heatmap,
        title: HEATMAP_TITLE,
        x: Some("Sales,Profit"),
        y: Some("Sales,Profit"),
        color: None,
        palette: vec![BLUES_SCALE],
        data,
        layout,
    }
}
