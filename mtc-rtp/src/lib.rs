#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod packetizer;

pub use packetizer::{Depacketizer, Payloader};
