//! Authentication-path extraction.

use alloy_primitives::{Address, B256};

use crate::{hash::leaf_hash, tree::AllowlistMerkleTree};

/// An authentication path from one leaf to the root.
///
/// A flat, ordered list of sibling hashes, leaf level first. The
/// sorted-pair convention removes the need for left/right position flags.
/// An empty path is valid only for a single-leaf tree; against any other
/// root it can never verify, which is how a non-member claim is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof {
    siblings: Vec<B256>,
}

impl MerkleProof {
    pub(crate) fn new(siblings: Vec<B256>) -> Self {
        Self { siblings }
    }

    /// Sibling hashes, leaf level first.
    pub fn siblings(&self) -> &[B256] {
        &self.siblings
    }

    /// Number of siblings in the path.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the path carries no siblings.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Hex-encoded siblings (`0x…`), the claim-transaction payload form.
    pub fn to_hex(&self) -> Vec<String> {
        self.siblings.iter().map(|h| format!("{h:#x}")).collect()
    }
}

impl AllowlistMerkleTree {
    /// Authentication path for a normalized address, or `None` if the
    /// address is not a member.
    pub fn proof_for_address(&self, address: Address) -> Option<MerkleProof> {
        self.proof_for_leaf(leaf_hash(address), None)
    }

    /// Authentication path for a leaf hash.
    ///
    /// The leaf is located by hash equality; pass an explicit `index` into
    /// the sorted leaf level when duplicate leaf hashes make the lookup
    /// ambiguous. Returns `None` when the leaf is not in the tree — a valid
    /// negative-membership answer, not an error.
    pub fn proof_for_leaf(&self, leaf: B256, index: Option<usize>) -> Option<MerkleProof> {
        let leaves = self.leaf_hashes();
        let mut idx = match index {
            Some(i) if i < leaves.len() && leaves[i] == leaf => i,
            Some(_) => return None,
            None => leaves.iter().position(|h| *h == leaf)?,
        };

        let mut siblings = Vec::new();
        for level in &self.levels()[..self.height() - 1] {
            let sibling = idx ^ 1;
            // A trailing odd node has no sibling; it was promoted unchanged.
            if sibling < level.len() {
                siblings.push(level[sibling]);
            }
            idx /= 2;
        }

        Some(MerkleProof::new(siblings))
    }
}
