mod client_config;
pub mod myconfig;

pub use self::client_config::HttpClientConfig;
pub use self::myconfig::{Config, StoreBackend};
