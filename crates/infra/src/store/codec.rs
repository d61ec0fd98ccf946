//! JSON encoding shared by every store implementation.
//!
//! Layout: one JSON object, keys are usernames, values are
//! `{"whole": .., "fraction": .., "credential": ..}`. No schema version.

use super::r#trait::{AccountMap, StoreError};

pub fn encode(accounts: &AccountMap) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(accounts)
        .map_err(|e| StoreError::Backend(format!("account map serialization failed: {e}")))
}

/// Decode a stored mapping. An empty or truncated source is corrupt.
pub fn decode(bytes: &[u8]) -> Result<AccountMap, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashbox_accounts::{AccountRecord, Credential};
    use cashbox_core::Username;

    fn record(whole: i64, fraction: i64, credential: &str) -> AccountRecord {
        AccountRecord {
            whole,
            fraction,
            credential: Credential::new(credential),
        }
    }

    #[test]
    fn encodes_sorted_by_username() {
        let mut map = AccountMap::new();
        map.insert(Username::parse("user2").unwrap(), record(200, 75, "pass2"));
        map.insert(Username::parse("user1").unwrap(), record(100, 50, "pass1"));

        let text = String::from_utf8(encode(&map).unwrap()).unwrap();
        assert_eq!(
            text,
            r#"{"user1":{"whole":100,"fraction":50,"credential":"pass1"},"user2":{"whole":200,"fraction":75,"credential":"pass2"}}"#
        );
    }

    #[test]
    fn decodes_legacy_layout() {
        let map = decode(br#"{"user1": {"dollars": 100, "cents": 50, "password": "pass1"}}"#).unwrap();
        assert_eq!(map.get("user1"), Some(&record(100, 50, "pass1")));
    }

    #[test]
    fn empty_object_is_an_empty_mapping() {
        assert!(decode(b"{}").unwrap().is_empty());
    }

    #[test]
    fn malformed_sources_are_corrupt() {
        for bytes in [
            &b""[..],
            b"not json",
            b"[]",
            br#"{"user1": {"whole": 1"#,
            br#"{"user1": {"whole": "one", "fraction": 0, "credential": "p"}}"#,
            br#"{"user1": {"whole": 1, "credential": "p"}}"#,
        ] {
            assert!(
                matches!(decode(bytes), Err(StoreError::Corrupt(_))),
                "expected corrupt for {:?}",
                String::from_utf8_lossy(bytes)
            );
        }
    }
}
