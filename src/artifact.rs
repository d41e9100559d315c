//! Exported `{ root, leaves }` artifact.
//!
//! One artifact is written per list version (advisory and general sale).
//! It pins the committed root together with the canonical checksummed leaf
//! list, so clients can regenerate proofs without re-deriving the list and
//! auditors can reproduce the root offline.

use std::{fs, path::Path};

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::{
    leaf::{checksummed, normalize_allowlist},
    tree::AllowlistMerkleTree,
    AllowlistTreeError,
};

/// Committed root plus the canonical leaf list it commits to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowlistArtifact {
    /// The 32-byte root written into contract deployment parameters.
    pub root: B256,
    /// EIP-55 checksummed addresses in canonical (sorted) order.
    pub leaves: Vec<String>,
}

impl AllowlistArtifact {
    /// Run the full generation pipeline on a raw address list.
    ///
    /// Normalizes (fail-closed), sorts, builds the tree, and returns the
    /// artifact alongside the tree so callers can extract proofs
    /// immediately.
    pub fn generate<S: AsRef<str>>(
        raw: &[S],
    ) -> Result<(Self, AllowlistMerkleTree), AllowlistTreeError> {
        let addresses = normalize_allowlist(raw)?;
        let tree = AllowlistMerkleTree::from_addresses(&addresses)?;
        let artifact = Self {
            root: tree.root(),
            leaves: addresses.into_iter().map(checksummed).collect(),
        };
        Ok((artifact, tree))
    }

    /// Rebuild the tree from the artifact's leaf list.
    ///
    /// Client-side proof regeneration: the recomputed root must equal the
    /// recorded one, otherwise the artifact is corrupt.
    pub fn rebuild(&self) -> Result<AllowlistMerkleTree, AllowlistTreeError> {
        let addresses = normalize_allowlist(&self.leaves)?;
        let tree = AllowlistMerkleTree::from_addresses(&addresses)?;
        if tree.root() != self.root {
            return Err(AllowlistTreeError::Artifact(format!(
                "recomputed root {:#x} does not match recorded root {:#x}",
                tree.root(),
                self.root
            )));
        }
        Ok(tree)
    }

    /// Write the artifact as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), AllowlistTreeError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AllowlistTreeError::Artifact(format!("encode error: {}", e)))?;
        fs::write(path, json)
            .map_err(|e| AllowlistTreeError::Artifact(format!("write error: {}", e)))
    }

    /// Read an artifact back from JSON.
    pub fn read_json(path: impl AsRef<Path>) -> Result<Self, AllowlistTreeError> {
        let json = fs::read_to_string(path)
            .map_err(|e| AllowlistTreeError::Artifact(format!("read error: {}", e)))?;
        serde_json::from_str(&json)
            .map_err(|e| AllowlistTreeError::Artifact(format!("decode error: {}", e)))
    }
}
