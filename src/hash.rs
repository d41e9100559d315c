use alloy_primitives::{keccak256, Address, B256};

/// Hash an address into its leaf hash: `keccak256(address_bytes)`.
///
/// The preimage is the tightly packed 20-byte address, matching the
/// on-chain `keccak256(abi.encodePacked(addr))`.
pub fn leaf_hash(address: Address) -> B256 {
    keccak256(address.as_slice())
}

/// Combine two sibling nodes: `keccak256(min || max)`.
///
/// Canonicalizing the pair order lets the verifier recompute the root
/// without knowing whether the claimed leaf was a left or right child, so
/// proofs carry no position flags.
pub fn combine(a: B256, b: B256) -> B256 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo.as_slice());
    buf[32..].copy_from_slice(hi.as_slice());
    keccak256(buf)
}
