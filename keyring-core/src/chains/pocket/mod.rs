// keyring-core/src/chains/pocket/mod.rs

//! Pocket Network Chain Support
//!
//! - **Wallet**: ed25519 keypair, SHA-256 addresses, codec-driven signing via [`PocketWallet`].
//! - **Codec seam**: [`TxCodec`] turns a [`PocketTransaction`] into sign-doc and signed bytes.

pub mod codec;
pub mod wallet;

pub use codec::{CoinDenom, PocketTransaction, TransactionOptions, TxCodec, TxSignature};
pub use wallet::PocketWallet;
