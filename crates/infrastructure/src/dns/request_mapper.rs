//! Wire message → domain `DnsRequest`.

use hickory_proto::op::{Edns, Header, Message, Query};
use hickory_proto::rr::rdata::opt::EdnsOption as HickoryEdnsOption;
use subnet_echo_domain::{ClientSubnet, DnsRequest, DomainError, EdnsOption, Question, RecordType};
use std::net::SocketAddr;

pub struct RequestMapper;

impl RequestMapper {
    pub fn from_message(
        message: &Message,
        remote_addr: SocketAddr,
    ) -> Result<DnsRequest, DomainError> {
        Self::from_parts(
            message.header(),
            message.queries().iter(),
            message.extensions().as_ref(),
            remote_addr,
        )
    }

    /// Fails when a Client Subnet option carries a prefix longer than its
    /// address family allows; such a request is a FORMERR.
    pub fn from_parts<'q>(
        header: &Header,
        queries: impl Iterator<Item = &'q Query>,
        edns: Option<&Edns>,
        remote_addr: SocketAddr,
    ) -> Result<DnsRequest, DomainError> {
        let questions = queries
            .map(|query| {
                Question::new(
                    query.name().to_utf8(),
                    RecordType::from_u16(u16::from(query.query_type())),
                )
            })
            .collect();

        Ok(DnsRequest {
            id: header.id(),
            recursion_desired: header.recursion_desired(),
            questions,
            edns: edns.map(Self::map_options).transpose()?,
            remote_addr,
        })
    }

    /// Keeps wire order so the first Client Subnet option stays first.
    fn map_options(edns: &Edns) -> Result<Vec<EdnsOption>, DomainError> {
        edns.options()
            .as_ref()
            .iter()
            .map(|(code, option)| match option {
                HickoryEdnsOption::Subnet(subnet) => ClientSubnet::new(
                    subnet.addr(),
                    subnet.source_prefix(),
                    subnet.scope_prefix(),
                )
                .map(EdnsOption::ClientSubnet),
                _ => Ok(EdnsOption::Other {
                    code: u16::from(*code),
                }),
            })
            .collect()
    }
}
