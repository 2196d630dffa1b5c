use crate::ports::{DnsHandler, ResponseWriter};
use crate::use_cases::{EchoClientSubnetHandler, RespondHandler};
use subnet_echo_domain::{DnsRequest, DomainError, HandlerDirective, ResponseCode};
use std::sync::Arc;

/// Handlers wired front to back, each holding its successor directly.
#[derive(Clone)]
pub struct HandlerChain {
    head: Arc<dyn DnsHandler>,
    names: Vec<&'static str>,
}

impl HandlerChain {
    /// Build the chain from last directive to first so every handler is
    /// constructed with its successor already in hand.
    pub fn from_directives(directives: &[HandlerDirective]) -> Result<Self, DomainError> {
        let Some((last, rest)) = directives.split_last() else {
            return Err(DomainError::ConfigError("handler chain is empty".to_string()));
        };

        if let Some(terminal) = rest.iter().find(|d| d.is_terminal()) {
            return Err(DomainError::ConfigError(format!(
                "'{}' never delegates and must be the last handler",
                terminal.name()
            )));
        }

        let mut head = Self::build(last, None);
        for directive in rest.iter().rev() {
            head = Self::build(directive, Some(head));
        }

        Ok(Self {
            head,
            names: directives.iter().map(|d| d.name()).collect(),
        })
    }

    fn build(
        directive: &HandlerDirective,
        next: Option<Arc<dyn DnsHandler>>,
    ) -> Arc<dyn DnsHandler> {
        match directive {
            HandlerDirective::EchoClientSubnet => Arc::new(EchoClientSubnetHandler::new(next)),
            HandlerDirective::Respond(code) => Arc::new(RespondHandler::new(*code)),
        }
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub async fn serve(
        &self,
        request: &DnsRequest,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        self.head.serve(request, writer).await
    }
}
