// keyring-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid mnemonic: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("Unsupported serialization: {0}")]
    UnsupportedSerialization(String),

    #[error("Address not found in keyring: {0}")]
    AddressNotFound(String),

    #[error("Address mismatch: keyring holds {expected}, got {actual}")]
    AddressMismatch { expected: String, actual: String },

    #[error("Unable to derive an address: keyring has no derivation capability")]
    DerivationUnsupported,

    #[error("New account index out of range: {current} + {requested} exceeds 2^31 - 1 or is negative")]
    IndexOutOfRange { current: u32, requested: i64 },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Cannot infer key type from derivation path '{0}'")]
    UnresolvedKeyType(String),
}

impl WalletError {
    /// True for errors caused by a caller asking about an address this keyring does not own.
    pub fn is_foreign_address(&self) -> bool {
        matches!(self, Self::AddressNotFound(_) | Self::AddressMismatch { .. })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("Unsupported entropy strength: {0} bits")]
    InvalidStrength(usize),

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
