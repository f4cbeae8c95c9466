#[cfg(test)]
mod tcp_type_test;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of ICE TCP candidate as described in
/// <https://tools.ietf.org/html/rfc6544#section-4.5>
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TcpType {
    /// The default value. For example UDP candidates do not need this field.
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,
    /// Active TCP candidate, which initiates TCP connections.
    #[serde(rename = "active")]
    Active,
    /// Passive TCP candidate, only accepts TCP connections.
    #[serde(rename = "passive")]
    Passive,
    /// Like `Active` and `Passive` at the same time.
    #[serde(rename = "so")]
    SimultaneousOpen,
}

// from &str to TcpType
impl From<&str> for TcpType {
    fn from(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "passive" => Self::Passive,
            "so" => Self::SimultaneousOpen,
            _ => Self::Unspecified,
        }
    }
}

impl fmt::Display for TcpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            TcpType::Active => "active",
            TcpType::Passive => "passive",
            TcpType::SimultaneousOpen => "so",
            TcpType::Unspecified => "unspecified",
        };
        write!(f, "{s}")
    }
}
