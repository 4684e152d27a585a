// keyring-core/src/keyring/record.rs
//
// Serialized keyring records, version 1.
//
// Field declaration order is the emitted JSON key order and is part of the
// wire format.

use crate::keyring::{KeyType, KeyringType};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// HD keyring record
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedHdKeyring {
    pub version: u32,
    pub fingerprint: String,
    pub mnemonic: String,
    pub keyring_type: KeyringType,
    pub key_type: KeyType,
    pub path: String,
    /// Number of derived addresses
    pub address_index: u32,
}

impl Drop for SerializedHdKeyring {
    fn drop(&mut self) {
        self.mnemonic.zeroize();
    }
}

impl std::fmt::Debug for SerializedHdKeyring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerializedHdKeyring")
            .field("version", &self.version)
            .field("fingerprint", &self.fingerprint)
            .field("mnemonic", &"[REDACTED]")
            .field("keyring_type", &self.keyring_type)
            .field("key_type", &self.key_type)
            .field("path", &self.path)
            .field("address_index", &self.address_index)
            .finish()
    }
}

/// Fixed keyring record
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedFixedKeyring {
    pub fingerprint: String,
    pub version: u32,
    pub keyring_type: KeyringType,
    pub key_type: KeyType,
    pub private_key: String,
}

impl Drop for SerializedFixedKeyring {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl std::fmt::Debug for SerializedFixedKeyring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerializedFixedKeyring")
            .field("fingerprint", &self.fingerprint)
            .field("version", &self.version)
            .field("keyring_type", &self.keyring_type)
            .field("key_type", &self.key_type)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Either record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerializedKeyring {
    Hd(SerializedHdKeyring),
    Fixed(SerializedFixedKeyring),
}

impl SerializedKeyring {
    pub fn fingerprint(&self) -> &str {
        match self {
            SerializedKeyring::Hd(r) => &r.fingerprint,
            SerializedKeyring::Fixed(r) => &r.fingerprint,
        }
    }
}

impl From<SerializedHdKeyring> for SerializedKeyring {
    fn from(record: SerializedHdKeyring) -> Self {
        SerializedKeyring::Hd(record)
    }
}

impl From<SerializedFixedKeyring> for SerializedKeyring {
    fn from(record: SerializedFixedKeyring) -> Self {
        SerializedKeyring::Fixed(record)
    }
}
