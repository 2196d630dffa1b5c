use super::{DnsRequest, Question, TxtRecord};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NOERROR" => Ok(ResponseCode::NoError),
            "FORMERR" => Ok(ResponseCode::FormErr),
            "SERVFAIL" => Ok(ResponseCode::ServFail),
            "NXDOMAIN" => Ok(ResponseCode::NXDomain),
            "NOTIMP" => Ok(ResponseCode::NotImp),
            "REFUSED" => Ok(ResponseCode::Refused),
            _ => Err(format!("Unknown response code: {}", s)),
        }
    }
}

/// Reply keyed to a request: id and RD are mirrored from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsReply {
    pub id: u16,
    pub recursion_desired: bool,
    pub response_code: ResponseCode,
    pub question: Option<Question>,
    pub answers: Vec<TxtRecord>,
}

impl DnsReply {
    /// Bare reply with no question, for requests that never made it into a `DnsRequest`.
    pub fn new(id: u16, recursion_desired: bool) -> Self {
        Self {
            id,
            recursion_desired,
            response_code: ResponseCode::NoError,
            question: None,
            answers: Vec::new(),
        }
    }

    pub fn for_request(request: &DnsRequest) -> Self {
        Self {
            question: request.first_question().cloned(),
            ..Self::new(request.id, request.recursion_desired)
        }
    }

    pub fn with_response_code(mut self, code: ResponseCode) -> Self {
        self.response_code = code;
        self
    }

    pub fn with_answer(mut self, answer: TxtRecord) -> Self {
        self.answers.push(answer);
        self
    }
}
