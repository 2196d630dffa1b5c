use crate::DomainError;
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Option code of EDNS0 Client Subnet (RFC 7871).
pub const EDNS_CLIENT_SUBNET_CODE: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4 = 1,
    Ipv6 = 2,
}

impl AddressFamily {
    pub fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }

    pub fn code(&self) -> u16 {
        *self as u16
    }

    pub fn max_prefix(&self) -> u8 {
        match self {
            AddressFamily::Ipv4 => 32,
            AddressFamily::Ipv6 => 128,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
        }
    }
}

/// Decoded EDNS0 Client Subnet option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientSubnet {
    address: IpAddr,
    source_prefix: u8,
    scope_prefix: u8,
}

impl ClientSubnet {
    pub fn new(address: IpAddr, source_prefix: u8, scope_prefix: u8) -> Result<Self, DomainError> {
        let family = AddressFamily::of(&address);
        for prefix in [source_prefix, scope_prefix] {
            IpNetwork::new(address, prefix).map_err(|_| DomainError::InvalidPrefixLength {
                family: family.as_str(),
                prefix,
                max: family.max_prefix(),
            })?;
        }

        Ok(Self {
            address,
            source_prefix,
            scope_prefix,
        })
    }

    pub fn family(&self) -> AddressFamily {
        AddressFamily::of(&self.address)
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn source_prefix(&self) -> u8 {
        self.source_prefix
    }

    pub fn scope_prefix(&self) -> u8 {
        self.scope_prefix
    }
}

impl fmt::Display for ClientSubnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.address, self.source_prefix, self.scope_prefix
        )
    }
}

/// Accepts `address/source` or `address/source/scope`.
impl FromStr for ClientSubnet {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('/');
        let invalid = || DomainError::InvalidClientSubnet(s.to_string());

        let address: IpAddr = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let source_prefix: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let scope_prefix: u8 = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 0,
        };

        if parts.next().is_some() {
            return Err(invalid());
        }

        Self::new(address, source_prefix, scope_prefix)
    }
}
