// keyring-core/src/keyring/mod.rs

//! Keyrings
//!
//! A keyring owns private key material for one curve and hands out addresses.
//! [`HdKeyring`] derives them from a mnemonic, [`FixedKeyring`] wraps a single
//! imported key. Both implement [`Keyring`], as does the sum type
//! [`AnyKeyring`] returned by [`deserialize_keyring`].

pub mod address_index;
pub mod fixed;
pub mod hd;
pub mod options;
pub mod record;
pub mod registry;

pub use address_index::{normalize_address, AddressIndex};
pub use fixed::FixedKeyring;
pub use hd::HdKeyring;
pub use options::{HdKeyringOptions, KeyTypeDefaults, KeyringDiagnostic, PathPolicy};
pub use record::{SerializedFixedKeyring, SerializedHdKeyring, SerializedKeyring};
pub use registry::{deserialize_keyring, deserialize_keyring_str, deserialize_keyring_with_passphrase};

use crate::chains::{CurveWallet, Transaction};
use crate::error::{CryptoError, WalletError, WalletResult};
use alloy::dyn_abi::TypedData;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Record format version written by [`Keyring::serialize_sync`]
pub const SERIALIZATION_VERSION: u32 = 1;

// =============================================================================
// ENUMS
// =============================================================================

/// Curve family a keyring's keys live on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// EVM chains
    Secp256k1,
    /// Pocket Network
    Ed25519,
}

impl KeyType {
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyType::Secp256k1 => "secp256k1",
            KeyType::Ed25519 => "ed25519",
        }
    }
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BIP-39 keyrings derive child addresses, fixed keyrings cannot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyringType {
    #[serde(rename = "bip39")]
    Hd,
    #[serde(rename = "fixed")]
    Fixed,
}

impl KeyringType {
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyringType::Hd => "bip39",
            KeyringType::Fixed => "fixed",
        }
    }
}

impl std::fmt::Display for KeyringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// KEYRING CONTRACT
// =============================================================================

/// Behavior shared by every keyring.
///
/// Async methods never suspend; they exist so callers that also drive real
/// I/O can treat every keyring call the same way. Mutation takes `&mut self`,
/// so a keyring shared across tasks needs an outer lock.
#[async_trait]
pub trait Keyring: Send + Sync {
    /// Record type produced by [`Keyring::serialize_sync`]
    type Serialized: Serialize + Send;

    fn keyring_type(&self) -> KeyringType;

    fn key_type(&self) -> KeyType;

    /// Derivation root, empty for fixed keyrings
    fn path(&self) -> &str;

    fn fingerprint(&self) -> &str;

    // =========================================================================
    // ADDRESSES
    // =========================================================================

    /// Addresses in derivation order, EVM addresses lower-cased
    fn get_addresses_sync(&self) -> Vec<String>;

    async fn get_addresses(&self) -> Vec<String> {
        self.get_addresses_sync()
    }

    /// Derive `n` more addresses and return only the new ones
    fn add_addresses_sync(&mut self, n: i64) -> WalletResult<Vec<String>>;

    async fn add_addresses(&mut self, n: i64) -> WalletResult<Vec<String>> {
        self.add_addresses_sync(n)
    }

    // =========================================================================
    // KEY EXPORT
    // =========================================================================

    fn get_private_key(&self, address: &str) -> WalletResult<String>;

    fn get_public_key(&self, address: &str) -> WalletResult<String>;

    // =========================================================================
    // SIGNING
    // =========================================================================

    /// Wallet that signs for `address`, or the keyring's foreign-address error
    fn wallet_for(&self, address: &str) -> WalletResult<&CurveWallet>;

    async fn sign_transaction(
        &self,
        address: &str,
        tx: Transaction<'_>,
    ) -> WalletResult<String> {
        let wallet = rejected(self.fingerprint(), "sign_transaction", self.wallet_for(address))?;
        rejected(
            self.fingerprint(),
            "sign_transaction",
            wallet.sign_transaction(tx).await,
        )
    }

    /// Pocket only: sign and report whether the signature verifies
    async fn sign_transaction_verified(
        &self,
        address: &str,
        tx: Transaction<'_>,
    ) -> WalletResult<bool> {
        let wallet = rejected(
            self.fingerprint(),
            "sign_transaction_verified",
            self.wallet_for(address),
        )?;
        rejected(
            self.fingerprint(),
            "sign_transaction_verified",
            wallet.sign_transaction_verified(tx),
        )
    }

    /// EVM only: EIP-712
    async fn sign_typed_data(&self, address: &str, data: &TypedData) -> WalletResult<String> {
        let wallet = rejected(self.fingerprint(), "sign_typed_data", self.wallet_for(address))?;
        rejected(self.fingerprint(), "sign_typed_data", wallet.sign_typed_data(data))
    }

    /// EVM only: EIP-191
    async fn sign_message(&self, address: &str, message: &[u8]) -> WalletResult<String> {
        let wallet = rejected(self.fingerprint(), "sign_message", self.wallet_for(address))?;
        rejected(self.fingerprint(), "sign_message", wallet.sign_message(message))
    }

    // =========================================================================
    // SERIALIZATION
    // =========================================================================

    fn serialize_sync(&self) -> Self::Serialized;

    async fn serialize(&self) -> Self::Serialized {
        self.serialize_sync()
    }
}

/// Log refused requests; the error itself goes back to the caller unchanged
fn rejected<T>(fingerprint: &str, operation: &'static str, result: WalletResult<T>) -> WalletResult<T> {
    if let Err(e) = &result {
        warn!(fingerprint, operation, error = %e, "keyring operation rejected");
    }
    result
}

// =============================================================================
// ANY KEYRING
// =============================================================================

/// Either keyring variant, as produced by the registry
#[derive(Debug)]
pub enum AnyKeyring {
    Hd(HdKeyring),
    Fixed(FixedKeyring),
}

impl AnyKeyring {
    pub fn as_hd(&self) -> Option<&HdKeyring> {
        match self {
            AnyKeyring::Hd(k) => Some(k),
            AnyKeyring::Fixed(_) => None,
        }
    }

    pub fn as_fixed(&self) -> Option<&FixedKeyring> {
        match self {
            AnyKeyring::Fixed(k) => Some(k),
            AnyKeyring::Hd(_) => None,
        }
    }

    /// Serialized record as JSON text
    pub fn serialize_json(&self) -> WalletResult<String> {
        serde_json::to_string(&self.serialize_sync())
            .map_err(|e| WalletError::Crypto(CryptoError::EncodingFailed(e.to_string())))
    }
}

impl From<HdKeyring> for AnyKeyring {
    fn from(keyring: HdKeyring) -> Self {
        AnyKeyring::Hd(keyring)
    }
}

impl From<FixedKeyring> for AnyKeyring {
    fn from(keyring: FixedKeyring) -> Self {
        AnyKeyring::Fixed(keyring)
    }
}

macro_rules! delegate {
    ($self:ident, $k:ident => $e:expr) => {
        match $self {
            AnyKeyring::Hd($k) => $e,
            AnyKeyring::Fixed($k) => $e,
        }
    };
}

#[async_trait]
impl Keyring for AnyKeyring {
    type Serialized = SerializedKeyring;

    fn keyring_type(&self) -> KeyringType {
        delegate!(self, k => k.keyring_type())
    }

    fn key_type(&self) -> KeyType {
        delegate!(self, k => k.key_type())
    }

    fn path(&self) -> &str {
        delegate!(self, k => k.path())
    }

    fn fingerprint(&self) -> &str {
        delegate!(self, k => k.fingerprint())
    }

    fn get_addresses_sync(&self) -> Vec<String> {
        delegate!(self, k => k.get_addresses_sync())
    }

    fn add_addresses_sync(&mut self, n: i64) -> WalletResult<Vec<String>> {
        delegate!(self, k => k.add_addresses_sync(n))
    }

    fn get_private_key(&self, address: &str) -> WalletResult<String> {
        delegate!(self, k => k.get_private_key(address))
    }

    fn get_public_key(&self, address: &str) -> WalletResult<String> {
        delegate!(self, k => k.get_public_key(address))
    }

    fn wallet_for(&self, address: &str) -> WalletResult<&CurveWallet> {
        delegate!(self, k => k.wallet_for(address))
    }

    fn serialize_sync(&self) -> SerializedKeyring {
        match self {
            AnyKeyring::Hd(k) => SerializedKeyring::Hd(k.serialize_sync()),
            AnyKeyring::Fixed(k) => SerializedKeyring::Fixed(k.serialize_sync()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
