//! # Allow-list Gate
//!
//! Runtime membership check of a client address against an allow-list.
//!
//! A broken allow-list denies everyone. A broken client address is the
//! caller's fault and comes back as an error.

use std::net::IpAddr;

use tracing::{trace, warn};

use crate::error::InvalidClientAddress;
use crate::network::range::parse_ip_range;
use crate::network::text;

/// Returns `Ok(true)` if `client_ip` falls in any range of `ip_range`.
///
/// The specification is parsed fresh on every call. If it does not parse the
/// answer is `Ok(false)`; use [`parse_ip_range`] at configuration time to see
/// why. Only a malformed `client_ip` produces an `Err`.
pub fn permitted_ip<C, R>(client_ip: C, ip_range: R) -> Result<bool, InvalidClientAddress>
where
    C: AsRef<[u8]>,
    R: AsRef<[u8]>,
{
    let allowed = match parse_ip_range(ip_range) {
        Ok(allowed) => allowed,
        Err(e) => {
            warn!("Denying access, allow-list is unusable: {e}");
            return Ok(false);
        }
    };

    let ip = parse_client_ip(client_ip)?;
    let permitted = allowed.contains(ip);

    trace!("{ip} checked against [{allowed}]: permitted={permitted}");
    Ok(permitted)
}

/// Reads a single client address.
pub fn parse_client_ip<C>(client_ip: C) -> Result<IpAddr, InvalidClientAddress>
where
    C: AsRef<[u8]>,
{
    let s = text::normalize(client_ip.as_ref()).map_err(InvalidClientAddress::Encoding)?;

    s.parse::<IpAddr>()
        .map_err(|source| InvalidClientAddress::Address {
            input: s.to_string(),
            source,
        })
}
