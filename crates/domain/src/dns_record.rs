mod record_type;
mod txt_record;

pub use record_type::RecordType;
pub use txt_record::{fqdn, TxtRecord, ECHO_TTL};
