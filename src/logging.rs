use crate::config::DashboardConfig;
use log::{debug, info};

/// Initialize the logger. `RUST_LOG` overrides the default `info` level.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized");
}

pub fn log_config_info(config: &DashboardConfig) {
    info!(
        "Configuration: data_path={}, bind_addr={}",
        config.data_path.display(),
        config.bind_addr
    );
}
