#![allow(dead_code)]

use std::net;
use std::net::IpAddr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    // ICE errors
    /// Indicates an error with Unknown info.
    #[error("Unknown type")]
    ErrUnknownType,

    /// Indicates the network token matched neither UDP nor TCP.
    /// Carries the offending token and address for diagnostics.
    #[error("unable to determine networkType from {network} {ip}")]
    ErrDetermineNetworkType { network: String, ip: IpAddr },

    //RTP errors
    #[error("packet is not large enough")]
    ErrShortPacket,

    //Third Party Error
    #[error("parse ip: {0}")]
    ParseIp(#[from] net::AddrParseError),

    //Other Errors
    #[error("{0}")]
    Other(String),
}
