use super::{ClientSubnet, DnsRequest};
use std::net::SocketAddr;

/// What the echo handler found in a request's EDNS0 data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubnetReport {
    NoEdns,
    NoClientSubnet,
    Subnet(ClientSubnet),
}

impl SubnetReport {
    pub fn from_request(request: &DnsRequest) -> Self {
        if request.edns.is_none() {
            return SubnetReport::NoEdns;
        }

        match request.client_subnet() {
            Some(subnet) => SubnetReport::Subnet(*subnet),
            None => SubnetReport::NoClientSubnet,
        }
    }

    /// Single-line TXT payload for this report.
    pub fn render(&self, remote_addr: SocketAddr) -> String {
        match self {
            SubnetReport::NoEdns => {
                format!("No EDNS options found. Remote address: {}", remote_addr)
            }
            SubnetReport::NoClientSubnet => format!(
                "No EDNS Client subnet option found. Remote address: {}",
                remote_addr
            ),
            SubnetReport::Subnet(subnet) => {
                format!("{}. Remote address: {}", subnet, remote_addr)
            }
        }
    }
}
