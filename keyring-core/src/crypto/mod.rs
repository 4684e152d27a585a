// keyring-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic Generation**: BIP-39 phrases (12 to 24 words) via [`WalletMnemonic`].
//! - **Key Derivation**: BIP-32 secp256k1 and SLIP-0010 ed25519 nodes via [`HdNode`].
//! - **Derivation Paths**: default keyring roots and path parsing via [`DerivationPaths`].
//! - **Fingerprints**: keyring identity via [`compute_fingerprint`].

pub mod fingerprint;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use fingerprint::compute_fingerprint;
pub use key_deriver::HdNode;
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::DerivationPaths;
