//! # Error Kinds
//!
//! [`InvalidIpRangeSpecification`] is raised while parsing an allow-list and is
//! meant to reach whoever loaded the configuration. [`InvalidClientAddress`] is
//! raised while reading the address under test and is never absorbed by
//! [`crate::permitted_ip`].

use std::net::AddrParseError;
use std::str::Utf8Error;

use thiserror::Error;

/// Why a single comma-separated entry of a specification was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeTokenError {
    #[error("empty range entry")]
    Empty,
    #[error("not valid UTF-8 text: {0}")]
    Encoding(Utf8Error),
    #[error("'{0}' is not a valid IPv4 or IPv6 address")]
    Address(String),
    #[error("'{0}' is not a valid prefix length")]
    Prefix(String),
    #[error("'{0}' is not a valid netmask")]
    Netmask(String),
    #[error("{0} has host bits set")]
    HostBitsSet(String),
    #[error("only one '/' permitted")]
    TooManySlashes,
}

/// An allow-list entry failed to parse.
///
/// Parsing stops at the first bad entry, so `token` is the first offender only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid IP range specification '{token}': {reason}")]
pub struct InvalidIpRangeSpecification {
    pub token: String,
    pub reason: RangeTokenError,
}

/// The address under test could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidClientAddress {
    #[error("client address is not valid UTF-8 text: {0}")]
    Encoding(#[source] Utf8Error),
    #[error("invalid client address '{input}': {source}")]
    Address {
        input: String,
        source: AddrParseError,
    },
}
