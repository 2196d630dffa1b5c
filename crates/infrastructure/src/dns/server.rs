use super::{ReplyBuilder, RequestMapper};
use async_trait::async_trait;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use subnet_echo_application::ports::ResponseWriter;
use subnet_echo_application::services::HandlerChain;
use subnet_echo_domain::{DnsReply, DomainError, ResponseCode};
use tracing::{debug, error, info};

/// Bridges hickory's `RequestHandler` to the handler chain.
#[derive(Clone)]
pub struct DnsServerHandler {
    chain: HandlerChain,
}

impl DnsServerHandler {
    pub fn new(chain: HandlerChain) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: R,
    ) -> ResponseInfo {
        let mut writer = HickoryResponseWriter::new(request, response_handle);

        let dns_request = match RequestMapper::from_parts(
            request.header(),
            request.queries().iter().map(|query| query.original()),
            request.edns(),
            request.src(),
        ) {
            Ok(dns_request) => dns_request,
            Err(e) => {
                debug!(error = %e, client = %request.src(), "Malformed EDNS options");
                let header = request.header();
                let reply = DnsReply::new(header.id(), header.recursion_desired())
                    .with_response_code(ResponseCode::FormErr);
                send_error_response(&mut writer, reply).await;
                return writer.finish();
            }
        };

        if let Some(question) = dns_request.first_question() {
            info!(
                domain = %question.name,
                record_type = %question.record_type,
                client = %dns_request.remote_addr,
                "DNS query received"
            );
        }

        let result = self.chain.serve(&dns_request, &mut writer).await;

        if !writer.written() {
            // Nothing reached the client: answer with the code the chain settled on.
            let code = match result {
                Ok(code) => code,
                Err(e) => {
                    error!(error = %e, client = %dns_request.remote_addr, "Handler chain failed");
                    ResponseCode::ServFail
                }
            };
            let reply = DnsReply::for_request(&dns_request).with_response_code(code);
            send_error_response(&mut writer, reply).await;
        }

        writer.finish()
    }
}

/// `ResponseWriter` over a hickory `ResponseHandler`.
pub struct HickoryResponseWriter<'a, R: ResponseHandler> {
    request: &'a Request,
    handle: R,
    info: Option<ResponseInfo>,
}

impl<'a, R: ResponseHandler> HickoryResponseWriter<'a, R> {
    pub fn new(request: &'a Request, handle: R) -> Self {
        Self {
            request,
            handle,
            info: None,
        }
    }

    /// Info of the reply sent, or the request header when nothing went out.
    pub fn finish(self) -> ResponseInfo {
        match self.info {
            Some(info) => info,
            None => ResponseInfo::from(*self.request.header()),
        }
    }
}

#[async_trait]
impl<'a, R: ResponseHandler> ResponseWriter for HickoryResponseWriter<'a, R> {
    async fn write_reply(&mut self, reply: DnsReply) -> Result<(), DomainError> {
        let answers = ReplyBuilder::answer_records(&reply)?;
        let header = ReplyBuilder::response_header(self.request.header(), &reply);
        let builder = MessageResponseBuilder::from_message_request(self.request);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        debug!(
            code = %reply.response_code,
            answers = answers.len(),
            "Sending response"
        );

        let info = self
            .handle
            .send_response(response)
            .await
            .map_err(|e| DomainError::ResponseWrite(e.to_string()))?;
        self.info = Some(info);
        Ok(())
    }

    fn written(&self) -> bool {
        self.info.is_some()
    }
}

async fn send_error_response<R: ResponseHandler>(
    writer: &mut HickoryResponseWriter<'_, R>,
    reply: DnsReply,
) {
    debug!(code = %reply.response_code, "Sending error response");
    if let Err(e) = writer.write_reply(reply).await {
        error!(error = %e, "Failed to send error response");
    }
}
