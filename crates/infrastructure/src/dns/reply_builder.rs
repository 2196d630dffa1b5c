//! Domain `DnsReply` → wire header and records.

use hickory_proto::op::{Header, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{Name, RData, Record};
use subnet_echo_domain::{DnsReply, DomainError, ResponseCode};
use std::str::FromStr;

pub struct ReplyBuilder;

impl ReplyBuilder {
    /// Header for `reply`, keyed to the request it answers.
    pub fn response_header(request_header: &Header, reply: &DnsReply) -> Header {
        let mut header = Header::response_from_request(request_header);
        header.set_id(reply.id);
        header.set_recursion_desired(reply.recursion_desired);
        header.set_response_code(Self::response_code(reply.response_code));
        header
    }

    pub fn answer_records(reply: &DnsReply) -> Result<Vec<Record>, DomainError> {
        reply
            .answers
            .iter()
            .map(|answer| {
                let name = Name::from_str(&answer.name).map_err(|e| {
                    DomainError::InvalidRecord(format!("{}: {}", answer.name, e))
                })?;
                let rdata = RData::TXT(TXT::new(vec![answer.text.clone()]));
                Ok(Record::from_rdata(name, answer.ttl, rdata))
            })
            .collect()
    }

    pub fn response_code(code: ResponseCode) -> HickoryResponseCode {
        match code {
            ResponseCode::NoError => HickoryResponseCode::NoError,
            ResponseCode::FormErr => HickoryResponseCode::FormErr,
            ResponseCode::ServFail => HickoryResponseCode::ServFail,
            ResponseCode::NXDomain => HickoryResponseCode::NXDomain,
            ResponseCode::NotImp => HickoryResponseCode::NotImp,
            ResponseCode::Refused => HickoryResponseCode::Refused,
        }
    }
}
