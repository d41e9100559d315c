//! Sorted-pair Keccak-256 Merkle tree for token-sale allow-lists.
//!
//! Two disjoint allow-lists (a small advisory list and a larger general-sale
//! list) are each committed to a single 32-byte root; a holder later proves
//! membership with an authentication path of sibling hashes. The hashing
//! scheme matches the on-chain Solidity verifier exactly:
//!
//! - leaf hash: `keccak256(address_bytes)` — the tightly packed 20-byte
//!   `address` encoding
//! - node hash: `keccak256(min(a, b) || max(a, b))` — sorted pairs
//! - leaf level sorted ascending; an unpaired trailing node is promoted
//!   unchanged to the next level
//!
//! Proofs are flat sibling lists: the sorted-pair rule makes left/right
//! position flags unnecessary. An empty proof for a multi-leaf tree can
//! never verify, which is how negative membership is signalled downstream.

#![warn(missing_docs)]

mod artifact;
mod error;
mod hash;
mod leaf;
mod proof;
mod tree;
mod verify;


pub use artifact::AllowlistArtifact;
pub use error::AllowlistTreeError;
pub use hash::{combine, leaf_hash};
pub use leaf::{checksummed, normalize_address, normalize_allowlist};
pub use proof::MerkleProof;
pub use tree::AllowlistMerkleTree;
pub use verify::verify_proof;

pub use alloy_primitives::{Address, B256};
