use super::ResponseWriter;
use async_trait::async_trait;
use subnet_echo_domain::{DnsRequest, DomainError, ResponseCode};
use std::sync::Arc;

/// One link of a handler chain.
#[async_trait]
pub trait DnsHandler: Send + Sync {
    /// Answer the request through `writer` or pass it on.
    ///
    /// The returned code is the one the handler answered with; a handler that
    /// delegates returns whatever its successor returned.
    async fn serve(
        &self,
        request: &DnsRequest,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError>;

    fn name(&self) -> &'static str;
}

/// Forward to `next`, or fail when the chain ends here.
pub async fn next_or_failure(
    name: &str,
    next: Option<&Arc<dyn DnsHandler>>,
    request: &DnsRequest,
    writer: &mut dyn ResponseWriter,
) -> Result<ResponseCode, DomainError> {
    match next {
        Some(handler) => handler.serve(request, writer).await,
        None => Err(DomainError::NoNextHandler(name.to_string())),
    }
}
