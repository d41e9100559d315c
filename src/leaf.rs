//! Address normalization for allow-list input.
//!
//! Raw allow-list files arrive as arbitrarily cased hex strings. Every
//! entry is canonicalized to its EIP-55 checksummed form before hashing;
//! a single malformed entry aborts the whole batch.

use std::str::FromStr;

use alloy_primitives::Address;

use crate::AllowlistTreeError;

/// Parse and canonicalize one raw address string.
///
/// Accepts an optional `0x` prefix. Mixed-case input must carry a valid
/// EIP-55 checksum; all-lowercase and all-uppercase hex are accepted as-is
/// and re-checksummed.
pub fn normalize_address(raw: &str) -> Result<Address, AllowlistTreeError> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    if body.len() != 40 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AllowlistTreeError::InvalidAddress(format!(
            "expected 40 hex chars, got {:?}",
            trimmed
        )));
    }

    let address = Address::from_str(body)
        .map_err(|e| AllowlistTreeError::InvalidAddress(format!("{}: {:?}", e, trimmed)))?;

    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower {
        let expected = address.to_checksum(None);
        if &expected[2..] != body {
            return Err(AllowlistTreeError::InvalidAddress(format!(
                "bad EIP-55 checksum: {:?}",
                trimmed
            )));
        }
    }

    Ok(address)
}

/// Normalize a whole allow-list and sort it into canonical order.
///
/// Fail-closed: the first malformed entry aborts the batch. Duplicates are
/// NOT removed — deduplication is the caller's responsibility.
pub fn normalize_allowlist<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Address>, AllowlistTreeError> {
    let mut addresses = raw
        .iter()
        .map(|s| normalize_address(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    // Canonical export order: byte-wise sort of the checksummed strings.
    addresses.sort_by_key(|a| a.to_checksum(None));
    Ok(addresses)
}

/// EIP-55 checksummed string form of an address.
pub fn checksummed(address: Address) -> String {
    address.to_checksum(None)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::AllowlistTreeError;

    #[test]
    fn test_normalize_lowercase() {
        let addr = normalize_address("0x8ba1f109551bd432803012645ac136ddd64dba72")
            .expect("lowercase address should parse");
        assert_eq!(checksummed(addr), "0x8ba1f109551bD432803012645Ac136ddd64DBA72");
    }

    #[test]
    fn test_normalize_valid_checksum() {
        let addr = normalize_address("0x8ba1f109551bD432803012645Ac136ddd64DBA72")
            .expect("checksummed address should parse");
        assert_eq!(checksummed(addr), "0x8ba1f109551bD432803012645Ac136ddd64DBA72");
    }

    #[test]
    fn test_normalize_bad_checksum_rejected() {
        // Same address with one letter's case flipped
        let result = normalize_address("0x8Ba1f109551bD432803012645Ac136ddd64DBA72");
        assert_matches!(result, Err(AllowlistTreeError::InvalidAddress(_)));
    }

    #[test]
    fn test_normalize_without_prefix() {
        let addr = normalize_address("8ba1f109551bd432803012645ac136ddd64dba72")
            .expect("prefixless address should parse");
        assert_eq!(checksummed(addr), "0x8ba1f109551bD432803012645Ac136ddd64DBA72");
    }

    #[test]
    fn test_normalize_surrounding_whitespace() {
        normalize_address("  0x8ba1f109551bd432803012645ac136ddd64dba72\n")
            .expect("trimmed address should parse");
    }

    #[test]
    fn test_normalize_wrong_length() {
        assert_matches!(
            normalize_address("0x1234"),
            Err(AllowlistTreeError::InvalidAddress(_))
        );
    }

    #[test]
    fn test_normalize_bad_hex() {
        assert_matches!(
            normalize_address("0xzz61f109551bd432803012645ac136ddd64dba72"),
            Err(AllowlistTreeError::InvalidAddress(_))
        );
    }

    #[test]
    fn test_batch_aborts_on_first_bad_entry() {
        let raw = [
            "0x1111111111111111111111111111111111111111",
            "not-an-address",
            "0x2222222222222222222222222222222222222222",
        ];
        assert_matches!(
            normalize_allowlist(&raw),
            Err(AllowlistTreeError::InvalidAddress(_))
        );
    }

    #[test]
    fn test_batch_sorts_and_keeps_duplicates() {
        let raw = [
            "0x2222222222222222222222222222222222222222",
            "0x1111111111111111111111111111111111111111",
            "0x2222222222222222222222222222222222222222",
        ];
        let addresses = normalize_allowlist(&raw).expect("all entries valid");
        let strings: Vec<String> = addresses.into_iter().map(checksummed).collect();
        assert_eq!(
            strings,
            [
                "0x1111111111111111111111111111111111111111",
                "0x2222222222222222222222222222222222222222",
                "0x2222222222222222222222222222222222222222",
            ]
        );
    }
}
