#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod network_type;
pub mod tcp_type;
