//! Remove one CIDR range from another and cover what is left.

use crate::aggregate::aggregate;
use crate::decompose::range_to_blocks;
use crate::error::CidrError;
use crate::ipv4::Ipv4;
use std::net::Ipv4Addr;

/// Remainder of `outer` after removing `inner`, both inclusive address
/// intervals. None when `inner` does not sit fully inside `outer`.
fn interval_gaps(outer: (u32, u32), inner: (u32, u32)) -> Option<Vec<(u32, u32)>> {
    if inner.0 < outer.0 || inner.1 > outer.1 {
        return None;
    }
    let mut gaps = Vec::new();
    if inner.0 > outer.0 {
        gaps.push((outer.0, inner.0 - 1));
    }
    if inner.1 < outer.1 {
        gaps.push((inner.1 + 1, outer.1));
    }
    Some(gaps)
}

/// Subtract `cidr_b` from `cidr_a` and return the remaining address space
/// as a minimal CIDR block list.
///
/// Disjoint ranges return `cidr_a` untouched. When the ranges overlap, the
/// smaller one must sit fully inside the larger one; equal sizes (including
/// identical ranges) keep the first input as the range subtracted from.
/// Identical ranges therefore come back empty.
pub fn subtract(cidr_a: &str, cidr_b: &str) -> Result<Vec<Ipv4>, CidrError> {
    let a = Ipv4::new(cidr_a)?;
    let b = Ipv4::new(cidr_b)?;
    log::debug!(
        "subtract {a} [{}-{}] minus {b} [{}-{}]",
        a.lo(),
        a.hi(),
        b.lo(),
        b.hi()
    );

    if !a.overlaps(&b) {
        log::info!("ranges {a} and {b} are disjoint, keeping {a}");
        return Ok(vec![a]);
    }
    // b wins only when strictly bigger, a tie keeps the first input on top.
    let (larger, smaller) = if b.size() > a.size() { (b, a) } else { (a, b) };
    let gaps = interval_gaps(
        (u32::from(larger.lo()), u32::from(larger.hi())),
        (u32::from(smaller.lo()), u32::from(smaller.hi())),
    )
    .ok_or_else(|| CidrError::UnsupportedPartialOverlap {
        a: a.to_string(),
        b: b.to_string(),
    })?;

    let mut blocks = Vec::new();
    for (lo, hi) in gaps {
        blocks.extend(range_to_blocks(Ipv4Addr::from(lo), Ipv4Addr::from(hi))?);
    }
    log::debug!("gap cover holds {} blocks before aggregation", blocks.len());
    aggregate(&blocks)
}

/// The external boundary: CIDR text in, CIDR text out.
pub fn subtract_to_strings(cidr_a: &str, cidr_b: &str) -> Result<Vec<String>, CidrError> {
    Ok(subtract(cidr_a, cidr_b)?
        .iter()
        .map(Ipv4::to_string)
        .collect())
}

pub fn is_valid_cidr(text: &str) -> bool {
    Ipv4::is_valid(text)
}
