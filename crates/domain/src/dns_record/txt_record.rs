use std::sync::Arc;

/// TTL, in seconds, of every synthesized echo answer.
pub const ECHO_TTL: u32 = 50;

/// A single-string TXT answer in the IN class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    pub name: Arc<str>,
    pub ttl: u32,
    pub text: String,
}

impl TxtRecord {
    /// Owner names are always stored fully qualified.
    pub fn new(name: &str, ttl: u32, text: impl Into<String>) -> Self {
        Self {
            name: Arc::from(fqdn(name).as_str()),
            ttl,
            text: text.into(),
        }
    }
}

pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
