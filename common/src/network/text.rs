//! Boundary normalization for address text.
//!
//! Callers may hand us `&str`, `String`, `&[u8]` or `Vec<u8>`. Everything is
//! brought to a borrowed `&str` here before any tokenizing happens, so the
//! parsers only ever see one representation.

use std::str::Utf8Error;

/// Borrows `input` as UTF-8 text.
///
/// No copy is made. Non-ASCII text is let through; it simply never parses as
/// an address afterwards.
pub fn normalize<T>(input: &T) -> Result<&str, Utf8Error>
where
    T: AsRef<[u8]> + ?Sized,
{
    std::str::from_utf8(input.as_ref())
}
