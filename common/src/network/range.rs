//! # IP Range Specification
//!
//! Parses allow-list specifications into validated network ranges.
//!
//! A specification is one or more comma-separated entries, each either:
//! * A single IPv4/IPv6 address (e.g., `192.168.1.1`, `::1`).
//! * A CIDR block (e.g., `192.168.0.0/16`, `2001:db8::/32`).
//! * An IPv4 block with a netmask or hostmask (e.g., `10.0.0.0/255.0.0.0`, `10.0.0.0/0.255.255.255`).
//!
//! Whitespace around entries is ignored. Entries with host bits set below the
//! prefix (`10.0.0.5/24`) are rejected rather than masked.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use pnet::ipnetwork::{self, IpNetwork};
use tracing::debug;

use crate::error::{InvalidIpRangeSpecification, RangeTokenError};
use crate::network::text;

/// A single host or CIDR block from an allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkRange(IpNetwork);

impl NetworkRange {
    /// A range matching exactly `addr` (prefix 32 or 128).
    pub fn host(addr: IpAddr) -> Self {
        Self(IpNetwork::from(addr))
    }

    /// Builds the block `addr/prefix`.
    ///
    /// `addr` must already be the network address.
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self, RangeTokenError> {
        let network = IpNetwork::new(addr, prefix)
            .map_err(|_| RangeTokenError::Prefix(prefix.to_string()))?;

        if network.network() != addr {
            return Err(RangeTokenError::HostBitsSet(format!("{addr}/{prefix}")));
        }

        Ok(Self(network))
    }

    pub fn network(&self) -> IpAddr {
        self.0.network()
    }

    pub fn prefix(&self) -> u8 {
        self.0.prefix()
    }

    pub fn is_ipv4(&self) -> bool {
        self.0.is_ipv4()
    }

    pub fn is_ipv6(&self) -> bool {
        self.0.is_ipv6()
    }

    /// True when `addr` is inside this block. Addresses of the other family never match.
    pub fn contains(&self, addr: IpAddr) -> bool {
        self.0.contains(addr)
    }

    pub fn as_ip_network(&self) -> IpNetwork {
        self.0
    }
}

impl fmt::Display for NetworkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix())
    }
}

impl From<NetworkRange> for IpNetwork {
    fn from(range: NetworkRange) -> Self {
        range.0
    }
}

impl FromStr for NetworkRange {
    type Err = RangeTokenError;

    /// Parses one already-trimmed entry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RangeTokenError::Empty);
        }

        let Some((addr_str, prefix_str)) = s.split_once('/') else {
            return parse_addr(s).map(Self::host);
        };

        if prefix_str.contains('/') {
            return Err(RangeTokenError::TooManySlashes);
        }

        let addr = parse_addr(addr_str)?;
        let prefix = match addr {
            IpAddr::V4(_) => parse_ipv4_prefix(prefix_str)?,
            IpAddr::V6(_) => parse_prefix_len(prefix_str, 128)?,
        };

        Self::new(addr, prefix)
    }
}

/// The ordered result of parsing one specification.
///
/// Order follows the input but carries no meaning for membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpRangeSet {
    ranges: Vec<NetworkRange>,
}

impl IpRangeSet {
    pub fn new(ranges: Vec<NetworkRange>) -> Self {
        Self { ranges }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NetworkRange> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn as_slice(&self) -> &[NetworkRange] {
        &self.ranges
    }

    /// True when any range contains `addr`. An empty set contains nothing.
    pub fn contains(&self, addr: IpAddr) -> bool {
        self.ranges.iter().any(|range| range.contains(addr))
    }
}

impl fmt::Display for IpRangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

impl FromStr for IpRangeSet {
    type Err = InvalidIpRangeSpecification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ip_range(s)
    }
}

impl IntoIterator for IpRangeSet {
    type Item = NetworkRange;
    type IntoIter = std::vec::IntoIter<NetworkRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a> IntoIterator for &'a IpRangeSet {
    type Item = &'a NetworkRange;
    type IntoIter = std::slice::Iter<'a, NetworkRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

/// Parses a comma-separated allow-list (e.g., `"192.168.1.1, 10.0.0.0/8"`).
///
/// Stops at the first entry that is not a single address or a network and
/// reports that entry. Empty entries, including an empty or blank
/// specification, are errors.
pub fn parse_ip_range<T>(ip_range: T) -> Result<IpRangeSet, InvalidIpRangeSpecification>
where
    T: AsRef<[u8]>,
{
    let raw: &[u8] = ip_range.as_ref();
    let spec = text::normalize(raw).map_err(|e| InvalidIpRangeSpecification {
        token: String::from_utf8_lossy(raw).into_owned(),
        reason: RangeTokenError::Encoding(e),
    })?;

    let mut ranges = Vec::new();

    for part in spec.split(',') {
        let part = part.trim();

        let range = part
            .parse::<NetworkRange>()
            .map_err(|reason| InvalidIpRangeSpecification {
                token: part.to_string(),
                reason,
            })?;

        debug!("Parsed allow-list entry '{part}' as {range}");
        ranges.push(range);
    }

    Ok(IpRangeSet::new(ranges))
}

fn parse_addr(s: &str) -> Result<IpAddr, RangeTokenError> {
    s.parse::<IpAddr>()
        .map_err(|_| RangeTokenError::Address(s.to_string()))
}

/// Decimal prefix length, leading zeros allowed, at most `max`.
fn parse_prefix_len(s: &str, max: u8) -> Result<u8, RangeTokenError> {
    let invalid = || RangeTokenError::Prefix(s.to_string());

    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let digits = s.trim_start_matches('0');
    let prefix: u8 = if digits.is_empty() {
        0
    } else {
        digits.parse().map_err(|_| invalid())?
    };

    if prefix > max {
        return Err(invalid());
    }
    Ok(prefix)
}

/// IPv4 prefix given as a length, a netmask, or a hostmask (tried in that order).
fn parse_ipv4_prefix(s: &str) -> Result<u8, RangeTokenError> {
    if !s.contains('.') {
        return parse_prefix_len(s, 32);
    }

    let mask = s
        .parse::<Ipv4Addr>()
        .map_err(|_| RangeTokenError::Netmask(s.to_string()))?;
    let host_mask = Ipv4Addr::from(!u32::from(mask));

    ipnetwork::ipv4_mask_to_prefix(mask)
        .or_else(|_| ipnetwork::ipv4_mask_to_prefix(host_mask))
        .map_err(|_| RangeTokenError::Netmask(s.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
