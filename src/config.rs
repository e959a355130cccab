use std::net::SocketAddr;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Runtime configuration
// ---------------------------------------------------------------------------

const DATA_ENV: &str = "KLIIMA_DATA";
const ADDR_ENV: &str = "KLIIMA_HTTP_ADDR";

const DEFAULT_DATA_PATH: &str = "energeetika.csv";
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8050);

/// Process configuration, read from the environment. There are no CLI
/// flags; the defaults match the shipped dataset and port.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the input CSV.
    pub data_path: PathBuf,
    /// Address the embedded server listens on.
    pub http_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        let data_path = std::env::var(DATA_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));

        let http_addr = match std::env::var(ADDR_ENV) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("{ADDR_ENV}='{raw}' is not a socket address, using default");
                default_addr()
            }),
            Err(_) => default_addr(),
        };

        Config {
            data_path,
            http_addr,
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(DEFAULT_ADDR)
}
