// keyring-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation: BIP-32 / BIP-44
//
// Used by: Ethereum and EVM chains
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{ChildNumber, DerivationPath, XPrv};
use std::str::FromStr;
use zeroize::Zeroizing;

/// A BIP-32 extended private key positioned somewhere in the tree
///
/// # Security
/// - The inner signing key zeroizes on drop
/// - Private key bytes are handed out wrapped in `Zeroizing`
#[derive(Clone)]
pub struct Secp256k1Node {
    xprv: XPrv,
}

impl std::fmt::Debug for Secp256k1Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1Node")
            .field("depth", &self.xprv.attrs().depth)
            .finish_non_exhaustive()
    }
}

impl Secp256k1Node {
    /// Derive the node at `path` from a BIP-39 seed
    ///
    /// # Arguments
    /// * `seed` - 64 bytes BIP-39 seed
    /// * `path` - Derivation path (e.g. "m/44'/60'/0'/0")
    pub fn from_seed(seed: &[u8], path: &str) -> WalletResult<Self> {
        let derivation_path = DerivationPath::from_str(path).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid path '{}': {}",
                path, e
            )))
        })?;

        let xprv = XPrv::derive_from_path(seed, &derivation_path).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Failed to derive '{}': {}",
                path, e
            )))
        })?;

        Ok(Self { xprv })
    }

    /// Derive the normal (non-hardened) child at `index`
    pub fn derive_child(&self, index: u32) -> WalletResult<Self> {
        let child_num = ChildNumber::new(index, false).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid index {}: {}",
                index, e
            )))
        })?;

        let xprv = self
            .xprv
            .derive_child(child_num)
            .map_err(|e| WalletError::Crypto(CryptoError::DerivationFailed(e.to_string())))?;

        Ok(Self { xprv })
    }

    /// Compressed SEC1 public key (33 bytes)
    pub fn public_key_bytes(&self) -> [u8; 33] {
        self.xprv.public_key().to_bytes()
    }

    /// 32-byte secret scalar, auto-zeroize on drop
    pub fn private_key_bytes(&self) -> Zeroizing<[u8; 32]> {
        let key_bytes: [u8; 32] = self.xprv.private_key().to_bytes().into();
        Zeroizing::new(key_bytes)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::fingerprint::compute_fingerprint;

    const TEST_SEED: &str = "16270f7b026afe7a3746efbfcf43e083500951db9e2699d1e4f372515dabcc80459b9181c3937b5faa4b8f7602f886553d2c32c5f12f3331cef40153aead4de6";

    #[test]
    fn test_child_matches_full_path() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let root = Secp256k1Node::from_seed(&seed, "m/44'/60'/0'/0").unwrap();

        for i in 0..3u32 {
            let via_child = root.derive_child(i).unwrap();
            let via_path =
                Secp256k1Node::from_seed(&seed, &format!("m/44'/60'/0'/0/{}", i)).unwrap();
            assert_eq!(&*via_child.private_key_bytes(), &*via_path.private_key_bytes());
        }
    }

    #[test]
    fn test_children_differ() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let root = Secp256k1Node::from_seed(&seed, "m/44'/60'/0'/0").unwrap();
        let k0 = root.derive_child(0).unwrap().private_key_bytes();
        let k1 = root.derive_child(1).unwrap().private_key_bytes();
        assert_ne!(&*k0, &*k1);
    }

    #[test]
    fn test_fingerprint_matches_bip32() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let node = Secp256k1Node::from_seed(&seed, "m/44'/60'/0'/0").unwrap();
        let expected = format!("0x{}", hex::encode(node.xprv.public_key().fingerprint()));
        assert_eq!(compute_fingerprint(&node.public_key_bytes()), expected);
    }

    #[test]
    fn test_invalid_path() {
        let seed = hex::decode(TEST_SEED).unwrap();
        assert!(Secp256k1Node::from_seed(&seed, "invalid").is_err());
        assert!(Secp256k1Node::from_seed(&seed, "m/44'/x").is_err());
    }

    #[test]
    fn test_hardened_index_rejected_as_child() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let root = Secp256k1Node::from_seed(&seed, "m/44'/60'/0'/0").unwrap();
        assert!(root.derive_child(0x8000_0000).is_err());
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let node = Secp256k1Node::from_seed(&seed, "m/44'/60'/0'/0").unwrap();
        let debug = format!("{:?}", node);
        assert!(!debug.contains(&hex::encode(&*node.private_key_bytes())));
        assert!(debug.contains("depth: 4"));
    }
}
