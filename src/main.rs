// Entry point: build the dashboard once, print the aggregate tables, then
// serve the page until the process is stopped.
use log::error;
use sales_dashboard::config::DashboardConfig;
use sales_dashboard::{logging, output, server, Dashboard};
use std::process;

#[tokio::main]
async fn main() {
    logging::init_logger();
    let config = DashboardConfig::default();
    logging::log_config_info(&config);

    let dashboard = match Dashboard::build(&config) {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to build dashboard: {e}");
            process::exit(1);
        }
    };
    output::preview_aggregates(&dashboard.aggregates, 10);

    if let Err(e) = server::serve(&config, dashboard.html).await {
        error!("{e}");
        process::exit(1);
    }
}
