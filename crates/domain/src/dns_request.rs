use super::{ClientSubnet, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdnsOption {
    ClientSubnet(ClientSubnet),
    Other { code: u16 },
}

impl EdnsOption {
    pub fn code(&self) -> u16 {
        match self {
            EdnsOption::ClientSubnet(_) => super::EDNS_CLIENT_SUBNET_CODE,
            EdnsOption::Other { code } => *code,
        }
    }
}

/// An incoming query together with the transport address it arrived from.
///
/// `edns` is `None` when the request carried no OPT record at all and
/// `Some(vec![])` when the OPT record was present without options.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub id: u16,
    pub recursion_desired: bool,
    pub questions: Vec<Question>,
    pub edns: Option<Vec<EdnsOption>>,
    pub remote_addr: SocketAddr,
}

impl DnsRequest {
    pub fn new(question: Question, remote_addr: SocketAddr) -> Self {
        Self {
            id: 0,
            recursion_desired: true,
            questions: vec![question],
            edns: None,
            remote_addr,
        }
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn with_edns(mut self, options: Vec<EdnsOption>) -> Self {
        self.edns = Some(options);
        self
    }

    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// The first Client Subnet option; any later ones are ignored.
    pub fn client_subnet(&self) -> Option<&ClientSubnet> {
        self.edns.as_deref()?.iter().find_map(|option| match option {
            EdnsOption::ClientSubnet(subnet) => Some(subnet),
            EdnsOption::Other { .. } => None,
        })
    }
}
