use crate::ports::{next_or_failure, DnsHandler, ResponseWriter};
use async_trait::async_trait;
use subnet_echo_domain::config::ECHO_CLIENT_SUBNET;
use subnet_echo_domain::{
    DnsReply, DnsRequest, DomainError, ResponseCode, SubnetReport, TxtRecord, ECHO_TTL,
};
use std::sync::Arc;
use tracing::{debug, Span};

/// Answers TXT queries with the request's EDNS Client Subnet and the
/// observed remote address. Every other query goes to `next`.
pub struct EchoClientSubnetHandler {
    next: Option<Arc<dyn DnsHandler>>,
    span: Span,
}

impl EchoClientSubnetHandler {
    pub fn new(next: Option<Arc<dyn DnsHandler>>) -> Self {
        Self {
            next,
            span: tracing::debug_span!("handler", name = ECHO_CLIENT_SUBNET),
        }
    }

    /// Log through `span` instead of the default handler span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    async fn delegate(
        &self,
        request: &DnsRequest,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        next_or_failure(self.name(), self.next.as_ref(), request, writer).await
    }
}

#[async_trait]
impl DnsHandler for EchoClientSubnetHandler {
    async fn serve(
        &self,
        request: &DnsRequest,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        // No question to classify: treat like any query this handler doesn't own.
        let Some(question) = request.first_question() else {
            self.span.in_scope(|| {
                debug!(remote = %request.remote_addr, "Request carries no question, delegating");
            });
            return self.delegate(request, writer).await;
        };

        if !question.record_type.is_txt() {
            return self.delegate(request, writer).await;
        }

        let report = SubnetReport::from_request(request);
        self.span.in_scope(|| match report {
            SubnetReport::NoEdns => {
                debug!(remote = %request.remote_addr, "No EDNS options in request")
            }
            SubnetReport::NoClientSubnet => {
                debug!(remote = %request.remote_addr, "No EDNS client subnet option in request")
            }
            SubnetReport::Subnet(_) => {}
        });

        let answer = TxtRecord::new(
            &question.name.to_ascii_lowercase(),
            ECHO_TTL,
            report.render(request.remote_addr),
        );
        let reply = DnsReply::for_request(request).with_answer(answer);

        writer.write_reply(reply).await?;
        Ok(ResponseCode::NoError)
    }

    fn name(&self) -> &'static str {
        ECHO_CLIENT_SUBNET
    }
}
