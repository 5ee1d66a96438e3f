//! Adapters - implementations of ports plus the HTTP surface.

pub mod http;
pub mod random;
pub mod storage;
