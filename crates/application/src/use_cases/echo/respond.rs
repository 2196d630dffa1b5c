use crate::ports::{DnsHandler, ResponseWriter};
use async_trait::async_trait;
use subnet_echo_domain::config::RESPOND;
use subnet_echo_domain::{DnsReply, DnsRequest, DomainError, ResponseCode};
use tracing::debug;

/// End of a chain: answers every request with an empty reply.
pub struct RespondHandler {
    code: ResponseCode,
}

impl RespondHandler {
    pub fn new(code: ResponseCode) -> Self {
        Self { code }
    }
}

impl Default for RespondHandler {
    fn default() -> Self {
        Self::new(ResponseCode::Refused)
    }
}

#[async_trait]
impl DnsHandler for RespondHandler {
    async fn serve(
        &self,
        request: &DnsRequest,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        debug!(code = %self.code, remote = %request.remote_addr, "Sending empty response");
        let reply = DnsReply::for_request(request).with_response_code(self.code);
        writer.write_reply(reply).await?;
        Ok(self.code)
    }

    fn name(&self) -> &'static str {
        RESPOND
    }
}
