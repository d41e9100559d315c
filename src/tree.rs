use alloy_primitives::{Address, B256};

use crate::{
    hash::{combine, leaf_hash},
    AllowlistTreeError,
};

/// A fully materialized allow-list Merkle tree.
///
/// Holds every level from the sorted leaf hashes (level 0) up to the root,
/// so authentication paths can be extracted without recomputation. Built
/// once per list version; changing membership means rebuilding the tree and
/// committing a new root.
///
/// Building a tree of N leaves costs O(N) hash calls across O(log N)
/// levels and O(N) memory for the full level structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowlistMerkleTree {
    /// `levels[0]` = sorted leaf hashes, `levels.last()` = `[root]`.
    levels: Vec<Vec<B256>>,
}

impl AllowlistMerkleTree {
    /// Build a tree from normalized addresses.
    pub fn from_addresses(addresses: &[Address]) -> Result<Self, AllowlistTreeError> {
        Self::from_leaf_hashes(addresses.iter().copied().map(leaf_hash).collect())
    }

    /// Build a tree from pre-hashed leaves.
    ///
    /// Leaf hashes are sorted ascending before pairing, so the root depends
    /// only on the leaf *set*, never on input order. At each level
    /// consecutive nodes are paired and merged under the sorted-pair rule;
    /// an unpaired trailing node is promoted unchanged to the next level.
    pub fn from_leaf_hashes(mut leaf_hashes: Vec<B256>) -> Result<Self, AllowlistTreeError> {
        if leaf_hashes.is_empty() {
            return Err(AllowlistTreeError::EmptyTree);
        }
        leaf_hashes.sort_unstable();

        let mut levels: Vec<Vec<B256>> = Vec::new();
        let mut level = leaf_hashes;
        while level.len() > 1 {
            let next: Vec<B256> = level
                .chunks(2)
                .map(|pair| {
                    if pair.len() == 2 {
                        combine(pair[0], pair[1])
                    } else {
                        pair[0]
                    }
                })
                .collect();
            levels.push(level);
            level = next;
        }
        levels.push(level);

        Ok(Self { levels })
    }

    /// The committed root hash.
    pub fn root(&self) -> B256 {
        self.levels[self.levels.len() - 1][0]
    }

    /// Root as a `0x`-prefixed hex string, the form written into contract
    /// deployment parameters.
    pub fn root_hex(&self) -> String {
        format!("{:#x}", self.root())
    }

    /// Sorted leaf hashes (level 0).
    pub fn leaf_hashes(&self) -> &[B256] {
        &self.levels[0]
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels from leaves to root (1 for a single-leaf tree).
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// All levels, leaves first. Exposed for audit tooling.
    pub fn levels(&self) -> &[Vec<B256>] {
        &self.levels
    }
}
