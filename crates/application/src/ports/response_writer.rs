use async_trait::async_trait;
use subnet_echo_domain::{DnsReply, DomainError};

/// Channel back to the client a request arrived from.
#[async_trait]
pub trait ResponseWriter: Send {
    async fn write_reply(&mut self, reply: DnsReply) -> Result<(), DomainError>;

    /// Whether a reply has already gone out on this channel.
    fn written(&self) -> bool;
}
