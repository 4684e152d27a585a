// keyring-core/src/crypto/fingerprint.rs
//
// Keyring identity: first 4 bytes of HASH160(identity), rendered as 0x-hex.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Bytes of HASH160 kept in a fingerprint
pub const FINGERPRINT_LEN: usize = 4;

/// RIPEMD160(SHA256(data))
#[must_use]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}

/// Compute the fingerprint of a public identity.
///
/// For a compressed secp256k1 public key this equals the BIP-32 key
/// fingerprint. The output is never secret.
#[must_use]
pub fn compute_fingerprint(identity: &[u8]) -> String {
    let hash = hash160(identity);
    format!("0x{}", hex::encode(&hash[..FINGERPRINT_LEN]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hash160_vector() {
        // HASH160 of the empty string
        assert_eq!(
            hex::encode(hash160(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    #[test]
    fn test_format() {
        let fp = compute_fingerprint(b"");
        assert_eq!(fp, "0xb472a266");
        assert_eq!(fp.len(), 2 + FINGERPRINT_LEN * 2);
    }

    proptest! {
        #[test]
        fn fingerprint_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..128)) {
            prop_assert_eq!(compute_fingerprint(&data), compute_fingerprint(&data));
        }

        #[test]
        fn fingerprint_is_lowercase_hex(data in proptest::collection::vec(any::<u8>(), 0..128)) {
            let fp = compute_fingerprint(&data);
            prop_assert!(fp.starts_with("0x"));
            prop_assert_eq!(fp.len(), 10);
            prop_assert!(fp[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
