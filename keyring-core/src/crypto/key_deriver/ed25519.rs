// keyring-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation: SLIP-0010 Standard
//
// Used by: Pocket Network
// Algorithm: HMAC-SHA512 (unlike BIP-32, hardened derivation only)
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// SLIP-0010 defines no public (normal) child derivation for ed25519, so every
// path level is derived hardened whether or not it is written with a `'`.
// m/44'/635'/0'/0 and m/44'/635'/0'/0' name the same node.

use crate::crypto::paths::parse_path;
use crate::error::{CryptoError, WalletError, WalletResult};
use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// SLIP-0010 master key seed constant
const MASTER_SECRET: &[u8] = b"ed25519 seed";

/// Hardened offset added to every child index
const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Ed25519 SLIP-0010 node: private key + chain code
///
/// # Security
/// - Both halves are `Zeroizing` and wiped on drop
/// - Debug output is redacted
#[derive(Clone)]
pub struct Ed25519Node {
    key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
    depth: u8,
}

impl std::fmt::Debug for Ed25519Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Node")
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl Ed25519Node {
    /// Derive the node at `path` from a BIP-39 seed
    ///
    /// # Arguments
    /// * `seed` - 64 bytes BIP-39 seed
    /// * `path` - Absolute derivation path starting with `m/`
    pub fn from_seed(seed: &[u8], path: &str) -> WalletResult<Self> {
        if !path.trim().starts_with("m/") {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Path must start with 'm/': {}",
                path
            ))));
        }
        let segments = parse_path(path).ok_or_else(|| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid path '{}'",
                path
            )))
        })?;

        let mut node = Self::master(seed)?;
        for segment in segments {
            node = node.derive_child(segment.index)?;
        }
        Ok(node)
    }

    /// Master key generation
    ///
    /// I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
    /// IL (32 bytes) = private key
    /// IR (32 bytes) = chain code
    fn master(seed: &[u8]) -> WalletResult<Self> {
        let mut mac = HmacSha512::new_from_slice(MASTER_SECRET).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;
        mac.update(seed);
        Ok(Self::split(mac, 0))
    }

    /// Hardened child derivation
    ///
    /// Data = 0x00 || parent_key || ser32(index + 0x80000000)
    /// I = HMAC-SHA512(Key = parent_chain_code, Data = Data)
    pub fn derive_child(&self, index: u32) -> WalletResult<Self> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Index {} out of range",
                index
            ))));
        }

        let mut mac = HmacSha512::new_from_slice(&*self.chain_code).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;

        mac.update(&[0x00]);
        mac.update(&*self.key);
        mac.update(&(index | HARDENED_OFFSET).to_be_bytes());

        Ok(Self::split(mac, self.depth.saturating_add(1)))
    }

    fn split(mac: HmacSha512, depth: u8) -> Self {
        let result = mac.finalize().into_bytes();

        // Copy into a stack buffer we fully control, then zeroize
        let mut buf = [0u8; 64];
        buf.copy_from_slice(&result);

        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);
        buf.zeroize();

        Self {
            key,
            chain_code,
            depth,
        }
    }

    /// 32-byte ed25519 verifying key
    pub fn public_key_bytes(&self) -> [u8; 32] {
        SigningKey::from_bytes(&self.key).verifying_key().to_bytes()
    }

    /// 64-byte keypair: secret seed followed by the public key
    pub fn keypair_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(SigningKey::from_bytes(&self.key).to_keypair_bytes())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEED: &str = "16270f7b026afe7a3746efbfcf43e083500951db9e2699d1e4f372515dabcc80459b9181c3937b5faa4b8f7602f886553d2c32c5f12f3331cef40153aead4de6";

    // SLIP-0010 ed25519 test vector 1
    const VECTOR_SEED: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn test_slip0010_vector_master() {
        let seed = hex::decode(VECTOR_SEED).unwrap();
        let master = Ed25519Node::master(&seed).unwrap();
        assert_eq!(
            hex::encode(*master.key),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(*master.chain_code),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
    }

    #[test]
    fn test_slip0010_vector_child() {
        // Chain m/0H
        let seed = hex::decode(VECTOR_SEED).unwrap();
        let node = Ed25519Node::from_seed(&seed, "m/0'").unwrap();
        assert_eq!(
            hex::encode(*node.key),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
        assert_eq!(
            hex::encode(node.public_key_bytes()),
            "8c8a13df77a28f3445213a0f432fde644acaa215fc72dcdf300d5efaa85d350c"
        );
    }

    #[test]
    fn test_unhardened_segments_are_hardened() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let a = Ed25519Node::from_seed(&seed, "m/44'/635'/0'/0").unwrap();
        let b = Ed25519Node::from_seed(&seed, "m/44'/635'/0'/0'").unwrap();
        assert_eq!(&*a.key, &*b.key);
    }

    #[test]
    fn test_child_matches_full_path() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let root = Ed25519Node::from_seed(&seed, "m/44'/635'/0'/0").unwrap();
        let child = root.derive_child(3).unwrap();
        let direct = Ed25519Node::from_seed(&seed, "m/44'/635'/0'/0/3").unwrap();
        assert_eq!(&*child.key, &*direct.key);
        assert_eq!(child.depth, 5);
    }

    #[test]
    fn test_keypair_layout() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let node = Ed25519Node::from_seed(&seed, "m/44'/635'/0'/0").unwrap();
        let keypair = node.keypair_bytes();
        assert_eq!(&keypair[..32], &*node.key);
        assert_eq!(&keypair[32..], &node.public_key_bytes());
    }

    #[test]
    fn test_invalid_path_format() {
        let seed = hex::decode(TEST_SEED).unwrap();
        assert!(Ed25519Node::from_seed(&seed, "invalid").is_err());
        assert!(Ed25519Node::from_seed(&seed, "44'/635'/0'").is_err()); // Missing m/
        assert!(Ed25519Node::from_seed(&seed, "m/44'/abc").is_err());
    }

    #[test]
    fn test_child_index_out_of_range() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let root = Ed25519Node::from_seed(&seed, "m/44'/635'/0'/0").unwrap();
        assert!(root.derive_child(HARDENED_OFFSET).is_err());
    }
}
