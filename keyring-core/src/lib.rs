// keyring-core/src/lib.rs

//! Keyring core for a multi-chain wallet.
//!
//! - [`HdKeyring`] derives addresses from a BIP-39 mnemonic.
//! - [`FixedKeyring`] wraps one imported private key.
//! - [`deserialize_keyring`] turns a stored record back into the right keyring.
//!
//! Keys live on secp256k1 (EVM chains) or ed25519 (Pocket Network).

pub mod chains;
pub mod crypto;
pub mod error;
pub mod keyring;
pub mod logging;

pub use chains::{CurveWallet, Transaction};
pub use error::{CryptoError, MnemonicError, WalletError, WalletResult};
pub use keyring::{
    deserialize_keyring, deserialize_keyring_str, deserialize_keyring_with_passphrase,
    AnyKeyring, FixedKeyring, HdKeyring, HdKeyringOptions, KeyType, Keyring, KeyringDiagnostic,
    KeyringType, PathPolicy, SerializedKeyring, SERIALIZATION_VERSION,
};
