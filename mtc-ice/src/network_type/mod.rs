
use serde::{Deserialize, Serialize};
use shared::error::*;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

pub(crate) const UDP: &str = "udp";
pub(crate) const TCP: &str = "tcp";

pub(crate) const UDP4: &str = "udp4";
pub(crate) const UDP6: &str = "udp6";
pub(crate) const TCP4: &str = "tcp4";
pub(crate) const TCP6: &str = "tcp6";

/// Represents the type of network.
///
/// There is no unspecified value: an address either classifies as one of the
/// four combinations or classification fails with an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    /// Indicates UDP over IPv4.
    #[serde(rename = "udp4")]
    Udp4,

    /// Indicates UDP over IPv6.
    #[serde(rename = "udp6")]
    Udp6,

    /// Indicates TCP over IPv4.
    #[serde(rename = "tcp4")]
    Tcp4,

    /// Indicates TCP over IPv6.
    #[serde(rename = "tcp6")]
    Tcp6,
}

// String makes NetworkType printable
impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            NetworkType::Udp4 => UDP4,
            NetworkType::Udp6 => UDP6,
            NetworkType::Tcp4 => TCP4,
            NetworkType::Tcp6 => TCP6,
        };
        write!(f, "{s}")
    }
}

impl FromStr for NetworkType {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            UDP4 => Ok(NetworkType::Udp4),
            UDP6 => Ok(NetworkType::Udp6),
            TCP4 => Ok(NetworkType::Tcp4),
            TCP6 => Ok(NetworkType::Tcp6),
            _ => Err(Error::ErrUnknownType),
        }
    }
}

impl NetworkType {
    /// Returns true when network is UDP4 or UDP6.
    pub fn is_udp(&self) -> bool {
        *self == NetworkType::Udp4 || *self == NetworkType::Udp6
    }

    /// Returns true when network is TCP4 or TCP6.
    pub fn is_tcp(&self) -> bool {
        *self == NetworkType::Tcp4 || *self == NetworkType::Tcp6
    }

    /// Returns the short network description.
    pub fn network_short(&self) -> &'static str {
        match *self {
            NetworkType::Udp4 | NetworkType::Udp6 => UDP,
            NetworkType::Tcp4 | NetworkType::Tcp6 => TCP,
        }
    }

    /// Returns true if the network is reliable.
    pub fn is_reliable(&self) -> bool {
        match *self {
            NetworkType::Tcp4 | NetworkType::Tcp6 => true,
            NetworkType::Udp4 | NetworkType::Udp6 => false,
        }
    }

    /// Returns whether the network type is IPv4 or not.
    pub fn is_ipv4(&self) -> bool {
        match *self {
            NetworkType::Udp4 | NetworkType::Tcp4 => true,
            NetworkType::Udp6 | NetworkType::Tcp6 => false,
        }
    }

    /// Returns whether the network type is IPv6 or not.
    pub fn is_ipv6(&self) -> bool {
        match *self {
            NetworkType::Udp6 | NetworkType::Tcp6 => true,
            NetworkType::Udp4 | NetworkType::Tcp4 => false,
        }
    }
}

/// Returns the network types supported by this implementation.
///
/// The order is stable and is the order candidates are gathered in: UDP
/// before TCP, IPv4 before IPv6 within each transport.
pub fn supported_network_types() -> Vec<NetworkType> {
    vec![
        NetworkType::Udp4,
        NetworkType::Udp6,
        NetworkType::Tcp4,
        NetworkType::Tcp6,
    ]
}

/// Determines the type of network based on the short network description
/// and an IP address.
///
/// The network token is matched case-insensitively by prefix, so "udp",
/// "UDP4" and "udp6" all select UDP.
pub fn determine_network_type(network: &str, ip: &IpAddr) -> Result<NetworkType> {
    // An IPv4-mapped IPv6 address classifies by its embedded IPv4 address.
    let ip = ip.to_canonical();
    let lowered = network.to_lowercase();
    if lowered.starts_with(UDP) {
        if ip.is_ipv4() {
            Ok(NetworkType::Udp4)
        } else {
            Ok(NetworkType::Udp6)
        }
    } else if lowered.starts_with(TCP) {
        if ip.is_ipv4() {
            Ok(NetworkType::Tcp4)
        } else {
            Ok(NetworkType::Tcp6)
        }
    } else {
        Err(Error::ErrDetermineNetworkType {
            network: network.to_owned(),
            ip,
        })
    }
}
