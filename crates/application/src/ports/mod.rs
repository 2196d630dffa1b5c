mod dns_handler;
mod response_writer;

pub use dns_handler::{next_or_failure, DnsHandler};
pub use response_writer::ResponseWriter;
