// keyring-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Multi-Curve Support
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  └─ EVM                    └─ Pocket            │
// └─────────────────────────────────────────────────┘
//
// An HD keyring keeps one root node at its base path and derives every
// address as child `index` of that root.

pub mod ed25519;
pub mod secp256k1;

// Re-exports
pub use ed25519::Ed25519Node;
pub use secp256k1::Secp256k1Node;

use crate::crypto::fingerprint::compute_fingerprint;
use crate::error::{CryptoError, WalletError, WalletResult};
use crate::keyring::KeyType;
use zeroize::Zeroizing;

/// BIP-39 seed length
pub const SEED_LEN: usize = 64;

// =============================================================================
// UNIFIED NODE
// =============================================================================
/// A derivation node on either curve
#[derive(Debug, Clone)]
pub enum HdNode {
    Secp256k1(Secp256k1Node),
    Ed25519(Ed25519Node),
}

impl HdNode {
    /// Derive the node at `path` for the curve of `key_type`
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `path` - Derivation path (e.g., "m/44'/60'/0'/0")
    /// * `key_type` - Curve family
    pub fn from_seed(seed: &[u8], path: &str, key_type: KeyType) -> WalletResult<Self> {
        Self::validate_seed(seed)?;

        Ok(match key_type {
            KeyType::Secp256k1 => HdNode::Secp256k1(Secp256k1Node::from_seed(seed, path)?),
            KeyType::Ed25519 => HdNode::Ed25519(Ed25519Node::from_seed(seed, path)?),
        })
    }

    /// Child `index` one level below this node
    pub fn derive_child(&self, index: u32) -> WalletResult<Self> {
        Ok(match self {
            HdNode::Secp256k1(node) => HdNode::Secp256k1(node.derive_child(index)?),
            HdNode::Ed25519(node) => HdNode::Ed25519(node.derive_child(index)?),
        })
    }

    #[inline]
    pub fn key_type(&self) -> KeyType {
        match self {
            HdNode::Secp256k1(_) => KeyType::Secp256k1,
            HdNode::Ed25519(_) => KeyType::Ed25519,
        }
    }

    /// Compressed secp256k1 key (33 bytes) or ed25519 verifying key (32 bytes)
    pub fn public_key_bytes(&self) -> Vec<u8> {
        match self {
            HdNode::Secp256k1(node) => node.public_key_bytes().to_vec(),
            HdNode::Ed25519(node) => node.public_key_bytes().to_vec(),
        }
    }

    /// Fingerprint of this node's public key
    pub fn fingerprint(&self) -> String {
        compute_fingerprint(&self.public_key_bytes())
    }

    /// Key material a wallet is built from.
    ///
    /// 32-byte scalar for secp256k1, 64-byte keypair (seed || public key)
    /// for ed25519.
    pub fn private_key_bytes(&self) -> Zeroizing<Vec<u8>> {
        match self {
            HdNode::Secp256k1(node) => Zeroizing::new(node.private_key_bytes().to_vec()),
            HdNode::Ed25519(node) => Zeroizing::new(node.keypair_bytes().to_vec()),
        }
    }

    /// Validate seed length
    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != SEED_LEN {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected {} bytes, got {}",
                SEED_LEN,
                seed.len()
            ))));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
