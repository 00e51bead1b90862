//! Cover an inclusive address interval with the fewest CIDR blocks.

use crate::error::CidrError;
use crate::ipv4::{Ipv4, MAX_LENGTH};
use std::net::Ipv4Addr;

// A 32-bit interval never needs more than 62 blocks (31 growing plus 31
// shrinking); anything past this is a logic defect, not a bigger input.
const MAX_BLOCKS: usize = 64;

/// Decompose `[start, end]` into CIDR blocks whose union is exactly that
/// interval. Greedy: each step emits the largest block that both starts at
/// the cursor (alignment) and still fits in what is left (size). Alignment
/// wins when it is the tighter constraint.
pub fn range_to_blocks(start: Ipv4Addr, end: Ipv4Addr) -> Result<Vec<Ipv4>, CidrError> {
    if start > end {
        return Err(CidrError::Internal(format!(
            "range start {start} is above end {end}"
        )));
    }
    let end_bits = u32::from(end);
    let mut blocks: Vec<Ipv4> = Vec::new();
    let mut cursor = u32::from(start);
    loop {
        if blocks.len() >= MAX_BLOCKS {
            return Err(CidrError::Internal(format!(
                "block cover of {start}-{end} exceeded {MAX_BLOCKS} blocks"
            )));
        }
        // trailing_zeros() is 32 for cursor 0, the whole-space case.
        let alignment = cursor.trailing_zeros();
        // Inclusive length in u64: [0, u32::MAX] is 2^32 and must not wrap.
        let remaining = u64::from(end_bits) - u64::from(cursor) + 1;
        let size_from_range = 63 - remaining.leading_zeros();
        let block_bits = alignment.min(size_from_range);
        blocks.push(Ipv4 {
            addr: Ipv4Addr::from(cursor),
            mask: (u32::from(MAX_LENGTH) - block_bits) as u8,
        });
        let block_last = u64::from(cursor) + (1u64 << block_bits) - 1;
        debug_assert!(block_last <= u64::from(end_bits));
        if block_last >= u64::from(end_bits) {
            break;
        }
        cursor = match (block_last as u32).checked_add(1) {
            Some(next) if next > cursor => next,
            // Top of the address space, or a non-increasing advance; either
            // way the loop must end rather than spin.
            _ => break,
        };
    }
    log::debug!("range {start}-{end} covered by {} blocks", blocks.len());
    Ok(blocks)
}
