//! # ipgate common
//!
//! Parsing of administrator-written IP allow-lists and the membership check
//! that gates client addresses against them.
//!
//! * [`network::range`]: strict parsing of `"192.168.1.1, 10.0.0.0/8"` style specifications.
//! * [`network::permit`]: the fail-closed membership check.
//! * [`error`]: the two error kinds surfaced to callers.

pub mod config;
pub mod error;
pub mod network;

pub use error::{InvalidClientAddress, InvalidIpRangeSpecification, RangeTokenError};
pub use network::permit::permitted_ip;
pub use network::range::{IpRangeSet, NetworkRange, parse_ip_range};
