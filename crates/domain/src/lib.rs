//! Subnet Echo Domain Layer
pub mod client_subnet;
pub mod config;
pub mod dns_record;
pub mod dns_reply;
pub mod dns_request;
pub mod errors;
pub mod subnet_report;

pub use client_subnet::{AddressFamily, ClientSubnet, EDNS_CLIENT_SUBNET_CODE};
pub use config::{CliOverrides, Config, ConfigError, HandlerDirective};
pub use dns_record::{fqdn, RecordType, TxtRecord, ECHO_TTL};
pub use dns_reply::{DnsReply, ResponseCode};
pub use dns_request::{DnsRequest, EdnsOption, Question};
pub use errors::DomainError;
pub use subnet_report::SubnetReport;
