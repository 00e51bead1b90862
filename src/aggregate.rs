//! Merge overlapping or adjacent CIDR blocks into a minimal list.

use crate::decompose::range_to_blocks;
use crate::error::CidrError;
use crate::ipv4::Ipv4;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Coalesce `blocks` into the fewest CIDR blocks covering the same
/// addresses. Sorts by network address, merges overlapping and contiguous
/// intervals in one pass, then re-covers each merged interval (a merged
/// interval is generally not CIDR-aligned and may split again).
pub fn aggregate(blocks: &[Ipv4]) -> Result<Vec<Ipv4>, CidrError> {
    if blocks.is_empty() {
        return Ok(Vec::new());
    }
    let sorted: Vec<&Ipv4> = blocks.iter().sorted_by_key(|b| b.lo()).collect();

    let mut merged: Vec<(u32, u32)> = Vec::new();
    let mut current = (u32::from(sorted[0].lo()), u32::from(sorted[0].hi()));
    for block in &sorted[1..] {
        let next = (u32::from(block.lo()), u32::from(block.hi()));
        // Adjacency in u64, current can already end at 255.255.255.255.
        if u64::from(next.0) <= u64::from(current.1) + 1 {
            current.1 = current.1.max(next.1);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);
    log::debug!(
        "aggregate merged {} blocks into {} intervals",
        blocks.len(),
        merged.len()
    );

    let mut out = Vec::new();
    for (lo, hi) in merged {
        out.extend(range_to_blocks(Ipv4Addr::from(lo), Ipv4Addr::from(hi))?);
    }
    Ok(out)
}

/// String level convenience: parse, aggregate, format.
pub fn aggregate_cidrs(cidrs: &[&str]) -> Result<Vec<String>, CidrError> {
    let blocks: Vec<Ipv4> = cidrs
        .iter()
        .map(|c| Ipv4::new(c))
        .collect::<Result<_, _>>()?;
    Ok(aggregate(&blocks)?.iter().map(Ipv4::to_string).collect())
}
