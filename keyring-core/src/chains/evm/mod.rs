// keyring-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! # Key Features
//! - **Address Derivation**: lower-cased Keccak-256 addresses via [`EvmAddress`].
//! - **Signing**: Transactions (EIP-2718 envelopes), Messages (EIP-191), and Typed Data (EIP-712) via [`EvmWallet`].

pub mod address;
pub mod signer;

// Re-exports for cleaner API access
pub use address::EvmAddress;
pub use signer::EvmWallet;
