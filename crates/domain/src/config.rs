pub mod chain;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use chain::{ChainConfig, HandlerDirective, ECHO_CLIENT_SUBNET, RESPOND};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
