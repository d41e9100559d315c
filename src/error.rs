use thiserror::Error;

/// Errors from allow-list Merkle tree operations.
#[derive(Debug, Error)]
pub enum AllowlistTreeError {
    /// The input string is not a valid Ethereum address. A single bad entry
    /// aborts the whole batch: silently dropping it would change set
    /// membership from what was intended.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// Attempted to build a tree from zero leaves. A deployment must never
    /// proceed with a zero or placeholder root.
    #[error("cannot build a Merkle tree from an empty allow-list")]
    EmptyTree,
    /// Artifact export/import failure.
    #[error("artifact error: {0}")]
    Artifact(String),
}
