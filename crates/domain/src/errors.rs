use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid prefix length /{prefix} for {family} (max {max})")]
    InvalidPrefixLength {
        family: &'static str,
        prefix: u8,
        max: u8,
    },

    #[error("Invalid client subnet: {0}")]
    InvalidClientSubnet(String),

    #[error("Invalid DNS record: {0}")]
    InvalidRecord(String),

    #[error("No next handler after {0}")]
    NoNextHandler(String),

    #[error("Failed to write response: {0}")]
    ResponseWrite(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
