use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::opt::{ClientSubnet, EdnsOption};
use hickory_proto::rr::{Name, RecordType};
use std::net::IpAddr;

pub fn query_message(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    message
}

pub fn subnet_option(address: &str, source_prefix: u8) -> EdnsOption {
    let address: IpAddr = address.parse().unwrap();
    EdnsOption::Subnet(ClientSubnet::new(address, source_prefix, 0))
}

/// Attach an OPT record carrying `options` (possibly none).
pub fn with_edns(mut message: Message, options: Vec<EdnsOption>) -> Message {
    let mut edns = Edns::new();
    edns.set_max_payload(1232);
    edns.set_version(0);
    for option in options {
        edns.options_mut().insert(option);
    }
    message.set_edns(edns);
    message
}

/// Option-8 payload as it appears on the wire: family, source, scope, then
/// the address truncated to the source prefix.
pub fn subnet_option_bytes(family: u16, source_prefix: u8, scope_prefix: u8, address: &[u8]) -> Vec<u8> {
    let mut data = family.to_be_bytes().to_vec();
    data.push(source_prefix);
    data.push(scope_prefix);
    data.extend_from_slice(address);
    data
}

/// Hand-encoded query with RD set and one OPT record carrying `options`
/// verbatim, in the given order.
pub fn raw_query_with_options(id: u16, name: &str, query_type: u16, options: &[(u16, Vec<u8>)]) -> Vec<u8> {
    let mut wire = Vec::new();
    wire.extend_from_slice(&id.to_be_bytes());
    wire.extend_from_slice(&0x0100u16.to_be_bytes());
    wire.extend_from_slice(&1u16.to_be_bytes());
    wire.extend_from_slice(&0u16.to_be_bytes());
    wire.extend_from_slice(&0u16.to_be_bytes());
    wire.extend_from_slice(&1u16.to_be_bytes());

    for label in name.trim_end_matches('.').split('.') {
        wire.push(label.len() as u8);
        wire.extend_from_slice(label.as_bytes());
    }
    wire.push(0);
    wire.extend_from_slice(&query_type.to_be_bytes());
    wire.extend_from_slice(&1u16.to_be_bytes());

    let mut rdata = Vec::new();
    for (code, data) in options {
        rdata.extend_from_slice(&code.to_be_bytes());
        rdata.extend_from_slice(&(data.len() as u16).to_be_bytes());
        rdata.extend_from_slice(data);
    }

    wire.push(0);
    wire.extend_from_slice(&41u16.to_be_bytes());
    wire.extend_from_slice(&1232u16.to_be_bytes());
    wire.extend_from_slice(&0u32.to_be_bytes());
    wire.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    wire.extend_from_slice(&rdata);
    wire
}
