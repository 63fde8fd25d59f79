//! Sales dashboard: load a sales CSV, derive five chart datasets and serve
//! them on a single static page.
pub mod charts;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod logging;
pub mod output;
pub mod reports;
pub mod server;
pub mod types;
pub mod util;

use config::DashboardConfig;
use error::Result;
use log::info;

/// Everything computed at startup. Built once, then only read.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub aggregates: reports::Aggregates,
    pub layout: layout::PageLayout,
    pub html: String,
}

impl Dashboard {
    /// Load, aggregate, chart and render. Any failure aborts before a page exists.
    pub fn build(config: &DashboardConfig) -> Result<Self> {
        let records = loader::load_sales(&config.data_path)?;
        Self::from_records(&records)
    }

    pub fn from_records(records: &[types::SalesRecord]) -> Result<Self> {
        let aggregates = reports::Aggregates::compute(records);
        info!(
            "Aggregated {} year/region groups, {} products, {} points",
            aggregates.yearly.len(),
            aggregates.products.len(),
            aggregates.pairs.len()
        );
        let charts = charts::build_charts(&aggregates);
        info!("Built {} charts", charts.len());
        let layout = layout::build_layout(charts);
        let html = layout::render_html(&layout)?;
        Ok(Self {
            aggregates,
            layout,
            html,
        })
    }
}
