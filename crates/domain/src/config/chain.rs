use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::ResponseCode;

pub const ECHO_CLIENT_SUBNET: &str = "echo_client_subnet";
pub const RESPOND: &str = "respond";

/// Ordered handler chain, one Corefile-style directive per entry.
///
/// ```toml
/// [chain]
/// handlers = ["echo_client_subnet", "respond refused"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainConfig {
    #[serde(default = "default_handlers")]
    pub handlers: Vec<String>,
}

impl ChainConfig {
    pub fn directives(&self) -> Result<Vec<HandlerDirective>, ConfigError> {
        self.handlers
            .iter()
            .map(|line| HandlerDirective::parse(line))
            .collect()
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            handlers: default_handlers(),
        }
    }
}

fn default_handlers() -> Vec<String> {
    vec![ECHO_CLIENT_SUBNET.to_string(), format!("{} refused", RESPOND)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerDirective {
    /// Takes no arguments.
    EchoClientSubnet,
    /// Terminal: answers everything it receives with an empty reply.
    Respond(ResponseCode),
}

impl HandlerDirective {
    pub fn parse(line: &str) -> Result<Self, ConfigError> {
        let mut tokens = line.split_whitespace();
        let fail = |reason: &str| ConfigError::Directive {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let keyword = tokens.next().ok_or_else(|| fail("empty directive"))?;
        match keyword {
            ECHO_CLIENT_SUBNET => {
                if tokens.next().is_some() {
                    return Err(fail("echo_client_subnet takes no arguments"));
                }
                Ok(HandlerDirective::EchoClientSubnet)
            }
            RESPOND => {
                let code = match tokens.next() {
                    Some(token) => token.parse::<ResponseCode>().map_err(|e| fail(&e))?,
                    None => ResponseCode::Refused,
                };
                if tokens.next().is_some() {
                    return Err(fail("respond takes at most one argument"));
                }
                Ok(HandlerDirective::Respond(code))
            }
            other => Err(fail(&format!("unknown handler '{}'", other))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandlerDirective::EchoClientSubnet => ECHO_CLIENT_SUBNET,
            HandlerDirective::Respond(_) => RESPOND,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, HandlerDirective::Respond(_))
    }
}
