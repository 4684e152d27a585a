// keyring-core/src/keyring/fixed.rs
//
// Fixed Keyring - exactly one imported private key, no derivation.

use crate::chains::CurveWallet;
use crate::crypto::compute_fingerprint;
use crate::error::{WalletError, WalletResult};
use crate::keyring::{
    normalize_address, KeyType, Keyring, KeyringType, SerializedFixedKeyring,
    SERIALIZATION_VERSION,
};
use async_trait::async_trait;
use tracing::debug;

/// Keyring wrapping a single private key
#[derive(Debug)]
pub struct FixedKeyring {
    key_type: KeyType,
    fingerprint: String,
    address: String,
    wallet: CurveWallet,
}

impl FixedKeyring {
    /// Import `private_key` for `key_type`.
    ///
    /// secp256k1 keys are 64 hex chars with optional `0x`; ed25519 keys are
    /// 128 hex chars (seed || public key).
    pub fn new(key_type: KeyType, private_key: &str) -> WalletResult<Self> {
        let wallet = CurveWallet::from_private_key(key_type, private_key)?;
        let address = normalize_address(wallet.address()).to_lowercase();
        let fingerprint = compute_fingerprint(address.as_bytes());

        debug!(%fingerprint, %key_type, "created fixed keyring");

        Ok(Self {
            key_type,
            fingerprint,
            address,
            wallet,
        })
    }

    /// Restore from a record
    pub fn deserialize(record: &SerializedFixedKeyring) -> WalletResult<Self> {
        if record.version != SERIALIZATION_VERSION {
            return Err(WalletError::UnsupportedSerialization(format!(
                "Unknown serialization version {}",
                record.version
            )));
        }
        if record.keyring_type != KeyringType::Fixed {
            return Err(WalletError::UnsupportedSerialization(
                "Only fixed keyrings containing a single private key are supported".to_string(),
            ));
        }

        Self::new(record.key_type, &record.private_key)
    }

    /// The keyring's only address
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    fn owns(&self, address: &str) -> bool {
        self.address.eq_ignore_ascii_case(address)
    }
}

#[async_trait]
impl Keyring for FixedKeyring {
    type Serialized = SerializedFixedKeyring;

    fn keyring_type(&self) -> KeyringType {
        KeyringType::Fixed
    }

    fn key_type(&self) -> KeyType {
        self.key_type
    }

    fn path(&self) -> &str {
        ""
    }

    fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    fn get_addresses_sync(&self) -> Vec<String> {
        vec![self.address.clone()]
    }

    fn add_addresses_sync(&mut self, _n: i64) -> WalletResult<Vec<String>> {
        Err(WalletError::DerivationUnsupported)
    }

    fn get_private_key(&self, address: &str) -> WalletResult<String> {
        if !self.owns(address) {
            return Err(WalletError::AddressNotFound(address.to_string()));
        }
        Ok(self.wallet.private_key())
    }

    fn get_public_key(&self, address: &str) -> WalletResult<String> {
        if !self.owns(address) {
            return Err(WalletError::AddressNotFound(address.to_string()));
        }
        Ok(self.wallet.public_key())
    }

    fn wallet_for(&self, address: &str) -> WalletResult<&CurveWallet> {
        if !self.owns(address) {
            return Err(WalletError::AddressMismatch {
                expected: self.address.clone(),
                actual: address.to_lowercase(),
            });
        }
        Ok(&self.wallet)
    }

    fn serialize_sync(&self) -> SerializedFixedKeyring {
        SerializedFixedKeyring {
            fingerprint: self.fingerprint.clone(),
            version: SERIALIZATION_VERSION,
            keyring_type: KeyringType::Fixed,
            key_type: self.key_type,
            private_key: self.wallet.private_key(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
