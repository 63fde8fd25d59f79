use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

/// Relative path of the sales dataset.
pub const DEFAULT_DATA_PATH: &str = "sales_data.csv";

/// Port the page is served on.
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// CSV file loaded once at startup
    pub data_path: PathBuf,

    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
        }
    }
}
