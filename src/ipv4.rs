//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for representing CIDR ranges, the dotted-quad
//! address codec, and the containment/overlap predicates on ranges.

use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_subtract::ipv4::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::InvalidPrefixLength(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        // Shift via u64, a u32 shift by 32 (len = 0) would overflow.
        let all_bits = u32::MAX as u64;
        let mask = (all_bits >> right_len) << right_len;
        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Decode a dotted-quad address. Exactly four parts, each 0-255, no
/// whitespace tolerance (trimming is the caller's job).
pub fn decode_addr(text: &str) -> Result<Ipv4Addr, CidrError> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(CidrError::InvalidAddress(text.to_string()));
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        *octet = part
            .parse()
            .map_err(|_| CidrError::InvalidAddress(text.to_string()))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// IPv4 range in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address as given, host bits included.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}
impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}
impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}
impl Ipv4 {
    /// Parse `address/prefix` text. The address may carry host bits below
    /// the prefix (e.g. `192.168.1.5/24`); it is kept as given and
    /// normalized on demand by [`Ipv4::lo`] and [`Ipv4::hi`].
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(CidrError::InvalidCidrSyntax(addr_cidr.to_string()));
        }
        let addr = decode_addr(parts[0])?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| CidrError::InvalidPrefixLength(parts[1].to_string()))?;
        if mask > MAX_LENGTH {
            return Err(CidrError::InvalidPrefixLength(parts[1].to_string()));
        }
        Ok(Ipv4 { addr, mask })
    }
    pub fn is_valid(addr_cidr: &str) -> bool {
        Ipv4::new(addr_cidr).is_ok()
    }
    /// Network address, bits below the mask cleared.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating minimum address for {self}: {e}"))
    }
    /// Broadcast address, bits below the mask set.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {e}"))
    }
    /// Number of addresses covered. A /0 spans the whole 2^32 space, so u64.
    pub fn size(&self) -> u64 {
        u64::from(u32::from(self.hi())) - u64::from(u32::from(self.lo())) + 1
    }
    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }
    /// Check if `other` is fully contained within this subnet. Reflexive:
    /// a range contains itself.
    pub fn contains_range(&self, other: &Ipv4) -> bool {
        self.lo() <= other.lo() && self.hi() >= other.hi()
    }
    pub fn overlaps(&self, other: &Ipv4) -> bool {
        !(self.hi() < other.lo() || other.hi() < self.lo())
    }
}
impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
