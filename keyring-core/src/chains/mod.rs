// keyring-core/src/chains/mod.rs

//! Curve wallets
//!
//! [`CurveWallet`] is the one place signing dispatches on curve. Keyrings look
//! a wallet up by address and hand it the request; a request for a mode the
//! curve has no notion of fails with `UnsupportedOperation`.

pub mod evm;
pub mod pocket;

pub use evm::EvmWallet;
pub use pocket::{PocketTransaction, PocketWallet, TransactionOptions, TxCodec};

use crate::error::{WalletError, WalletResult};
use crate::keyring::KeyType;
use alloy::{dyn_abi::TypedData, rpc::types::eth::TransactionRequest};

/// A transaction for either chain family
pub enum Transaction<'a> {
    Evm(TransactionRequest),
    Pocket {
        tx: &'a PocketTransaction,
        codec: &'a dyn TxCodec,
        options: TransactionOptions,
    },
}

impl Transaction<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Transaction::Evm(_) => "EVM",
            Transaction::Pocket { .. } => "Pocket",
        }
    }
}

impl std::fmt::Debug for Transaction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transaction::Evm(tx) => f.debug_tuple("Evm").field(tx).finish(),
            Transaction::Pocket { tx, options, .. } => f
                .debug_struct("Pocket")
                .field("tx", tx)
                .field("options", options)
                .finish_non_exhaustive(),
        }
    }
}

/// A single-key wallet on one curve
#[derive(Debug, Clone)]
pub enum CurveWallet {
    Evm(EvmWallet),
    Pocket(PocketWallet),
}

impl CurveWallet {
    /// Build from raw key material: a 32-byte scalar for secp256k1, a
    /// 64-byte keypair for ed25519.
    pub fn from_key_bytes(key_type: KeyType, bytes: &[u8]) -> WalletResult<Self> {
        Ok(match key_type {
            KeyType::Secp256k1 => CurveWallet::Evm(EvmWallet::from_bytes(bytes)?),
            KeyType::Ed25519 => CurveWallet::Pocket(PocketWallet::from_keypair_bytes(bytes)?),
        })
    }

    /// Build from the text form a keyring serializes
    pub fn from_private_key(key_type: KeyType, priv_key: &str) -> WalletResult<Self> {
        Ok(match key_type {
            KeyType::Secp256k1 => CurveWallet::Evm(EvmWallet::from_hex(priv_key)?),
            KeyType::Ed25519 => CurveWallet::Pocket(PocketWallet::from_hex(priv_key)?),
        })
    }

    #[inline]
    pub fn key_type(&self) -> KeyType {
        match self {
            CurveWallet::Evm(_) => KeyType::Secp256k1,
            CurveWallet::Pocket(_) => KeyType::Ed25519,
        }
    }

    pub fn address(&self) -> &str {
        match self {
            CurveWallet::Evm(w) => w.address(),
            CurveWallet::Pocket(w) => w.address(),
        }
    }

    pub fn public_key(&self) -> String {
        match self {
            CurveWallet::Evm(w) => w.public_key(),
            CurveWallet::Pocket(w) => w.public_key(),
        }
    }

    pub fn private_key(&self) -> String {
        match self {
            CurveWallet::Evm(w) => w.private_key(),
            CurveWallet::Pocket(w) => w.private_key(),
        }
    }

    // =========================================================================
    // SIGNING DISPATCH
    // =========================================================================

    pub async fn sign_transaction(&self, tx: Transaction<'_>) -> WalletResult<String> {
        match (self, tx) {
            (CurveWallet::Evm(w), Transaction::Evm(request)) => w.sign_transaction(request).await,
            (CurveWallet::Pocket(w), Transaction::Pocket { tx, codec, options }) => {
                w.sign_transaction(tx, codec, &options)
            }
            (wallet, tx) => Err(Self::unsupported(
                wallet.key_type(),
                &format!("signing {} transactions", tx.kind()),
            )),
        }
    }

    pub fn sign_transaction_verified(&self, tx: Transaction<'_>) -> WalletResult<bool> {
        match (self, tx) {
            (CurveWallet::Pocket(w), Transaction::Pocket { tx, codec, options }) => {
                w.sign_transaction_verified(tx, codec, &options)
            }
            (wallet, _) => Err(Self::unsupported(
                wallet.key_type(),
                "verified transaction signing",
            )),
        }
    }

    pub fn sign_typed_data(&self, data: &TypedData) -> WalletResult<String> {
        match self {
            CurveWallet::Evm(w) => w.sign_typed_data(data),
            CurveWallet::Pocket(_) => Err(Self::unsupported(KeyType::Ed25519, "typed data signing")),
        }
    }

    pub fn sign_message(&self, message: &[u8]) -> WalletResult<String> {
        match self {
            CurveWallet::Evm(w) => w.sign_message(message),
            CurveWallet::Pocket(_) => Err(Self::unsupported(KeyType::Ed25519, "message signing")),
        }
    }

    fn unsupported(key_type: KeyType, what: &str) -> WalletError {
        WalletError::UnsupportedOperation(format!("{} is not supported for {} keys", what, key_type))
    }
}

// =============================================================================
// TESTS
// =============================================================================
