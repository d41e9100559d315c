//! Proof verification — the functional mirror of the on-chain verifier.
//!
//! Pure function, no tree required. Folds the claimed leaf hash with each
//! sibling under the sorted-pair rule and compares against the committed
//! root, exactly like the Solidity `MerkleProof.processProof` loop the
//! sale contract runs.

use alloy_primitives::B256;

use crate::{hash::combine, proof::MerkleProof};

/// Recompute a root from `leaf` and `siblings` and compare it to `root`.
pub fn verify_proof(leaf: B256, siblings: &[B256], root: B256) -> bool {
    siblings.iter().fold(leaf, |acc, s| combine(acc, *s)) == root
}

impl MerkleProof {
    /// Verify this path for `leaf` against `root`.
    pub fn verify(&self, leaf: B256, root: B256) -> bool {
        verify_proof(leaf, self.siblings(), root)
    }
}
