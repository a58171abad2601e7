//! Word-splitting helpers for counters stored across two state words

/// Split a u64 into its (low, high) 32-bit halves
#[inline(always)]
pub fn u64_to_u32_pair(value: u64) -> (u32, u32) {
    (value as u32, (value >> 32) as u32)
}

/// Join (low, high) 32-bit halves into a u64
#[inline(always)]
pub fn u64_from_u32_pair(low: u32, high: u32) -> u64 {
    (low as u64) | ((high as u64) << 32)
}
