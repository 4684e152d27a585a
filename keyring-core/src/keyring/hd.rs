// keyring-core/src/keyring/hd.rs
//
// HD Keyring - BIP-39 mnemonic → root node at the keyring path → child
// wallets at path/0, path/1, ...

use crate::chains::CurveWallet;
use crate::crypto::{HdNode, WalletMnemonic};
use crate::error::{WalletError, WalletResult};
use crate::keyring::{
    AddressIndex, HdKeyringOptions, KeyType, Keyring, KeyTypeDefaults, KeyringDiagnostic,
    KeyringType, SerializedHdKeyring, SERIALIZATION_VERSION,
};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Highest running address count; child indices stay below 2^31
pub const MAX_ADDRESS_COUNT: i64 = (1 << 31) - 1;

/// Hierarchical deterministic keyring
///
/// # Security
/// - Mnemonic and root node zeroize on drop
/// - The passphrase is used once for seed expansion and never stored
#[derive(Debug)]
pub struct HdKeyring {
    key_type: KeyType,
    path: String,
    fingerprint: String,
    mnemonic: WalletMnemonic,
    root: HdNode,
    address_count: u32,
    index: AddressIndex,
    diagnostics: Vec<KeyringDiagnostic>,
}

impl HdKeyring {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Build a keyring from options, generating a mnemonic if none is given
    pub fn new(options: HdKeyringOptions) -> WalletResult<Self> {
        let (key_type, diagnostic) = options.resolve_key_type()?;
        if let Some(KeyringDiagnostic::DefaultedKeyType { path, key_type }) = &diagnostic {
            warn!(
                path = path.as_deref().unwrap_or(""),
                %key_type,
                "initialized without a known path or key type, defaulting"
            );
        }

        let defaults = KeyTypeDefaults::for_key_type(key_type);
        let path = options
            .path
            .clone()
            .unwrap_or_else(|| defaults.path.to_string());

        let mnemonic = match options.mnemonic.as_deref() {
            Some(phrase) if !phrase.trim().is_empty() => WalletMnemonic::from_phrase(phrase)?,
            _ => WalletMnemonic::generate(options.strength.unwrap_or(defaults.strength))?,
        };

        let seed = mnemonic.to_seed_bytes(options.passphrase.as_deref())?;
        let root = HdNode::from_seed(&*seed, &path, key_type)?;
        let fingerprint = root.fingerprint();

        debug!(%fingerprint, %key_type, %path, "created HD keyring");

        Ok(Self {
            key_type,
            path,
            fingerprint,
            mnemonic,
            root,
            address_count: 0,
            index: AddressIndex::new(),
            diagnostics: diagnostic.into_iter().collect(),
        })
    }

    /// Fresh keyring on the default path of `key_type`
    pub fn generate(key_type: KeyType) -> WalletResult<Self> {
        Self::new(HdKeyringOptions::new().key_type(key_type))
    }

    /// Restore from a record created without a passphrase
    pub fn deserialize(record: &SerializedHdKeyring) -> WalletResult<Self> {
        Self::deserialize_with_passphrase(record, None)
    }

    /// Restore from a record. The passphrase is not part of the record, so a
    /// keyring built with one must be given it again.
    pub fn deserialize_with_passphrase(
        record: &SerializedHdKeyring,
        passphrase: Option<&str>,
    ) -> WalletResult<Self> {
        if record.version != SERIALIZATION_VERSION {
            return Err(WalletError::UnsupportedSerialization(format!(
                "Unknown serialization version {}",
                record.version
            )));
        }
        if record.keyring_type != KeyringType::Hd {
            return Err(WalletError::UnsupportedSerialization(
                "HD keyrings only support BIP-39 style records".to_string(),
            ));
        }

        // A record always carries its phrase; restoring must never generate one
        WalletMnemonic::from_phrase(&record.mnemonic)?;

        let mut options = HdKeyringOptions::new()
            .key_type(record.key_type)
            .path(record.path.as_str())
            .mnemonic(record.mnemonic.as_str());
        if let Some(passphrase) = passphrase {
            options = options.passphrase(passphrase);
        }

        let mut keyring = Self::new(options)?;
        keyring.add_addresses_sync(i64::from(record.address_index))?;

        debug!(
            fingerprint = %keyring.fingerprint,
            addresses = record.address_index,
            "restored HD keyring"
        );
        Ok(keyring)
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Notes about how construction resolved ambiguous input
    pub fn diagnostics(&self) -> &[KeyringDiagnostic] {
        &self.diagnostics
    }

    /// Number of addresses derived so far
    #[inline]
    pub fn address_count(&self) -> u32 {
        self.address_count
    }

    /// The keyring's mnemonic. Never log this value.
    pub fn mnemonic(&self) -> &str {
        self.mnemonic.phrase()
    }

    fn lookup(&self, address: &str) -> WalletResult<&CurveWallet> {
        self.index
            .get(address)
            .ok_or_else(|| WalletError::AddressNotFound(address.to_string()))
    }
}

#[async_trait]
impl Keyring for HdKeyring {
    type Serialized = SerializedHdKeyring;

    fn keyring_type(&self) -> KeyringType {
        KeyringType::Hd
    }

    fn key_type(&self) -> KeyType {
        self.key_type
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    fn get_addresses_sync(&self) -> Vec<String> {
        self.index.addresses()
    }

    /// Derive the next `n` children. Nothing is committed unless every child
    /// derives.
    fn add_addresses_sync(&mut self, n: i64) -> WalletResult<Vec<String>> {
        let current = self.address_count;
        if n < 0 || i64::from(current) + n > MAX_ADDRESS_COUNT {
            return Err(WalletError::IndexOutOfRange {
                current,
                requested: n,
            });
        }
        // Bounded by MAX_ADDRESS_COUNT above
        let n = n as u32;

        let mut derived = Vec::new();
        for index in current..current + n {
            let child = self.root.derive_child(index)?;
            derived.push(CurveWallet::from_key_bytes(
                self.key_type,
                &child.private_key_bytes(),
            )?);
        }

        let added: Vec<String> = derived
            .into_iter()
            .map(|wallet| self.index.insert(wallet))
            .collect();
        self.address_count += n;

        debug!(
            fingerprint = %self.fingerprint,
            from = current,
            count = n,
            "derived addresses"
        );
        Ok(added)
    }

    fn get_private_key(&self, address: &str) -> WalletResult<String> {
        Ok(self.lookup(address)?.private_key())
    }

    fn get_public_key(&self, address: &str) -> WalletResult<String> {
        Ok(self.lookup(address)?.public_key())
    }

    fn wallet_for(&self, address: &str) -> WalletResult<&CurveWallet> {
        self.lookup(address)
    }

    fn serialize_sync(&self) -> SerializedHdKeyring {
        SerializedHdKeyring {
            version: SERIALIZATION_VERSION,
            fingerprint: self.fingerprint.clone(),
            mnemonic: self.mnemonic.phrase().to_string(),
            keyring_type: KeyringType::Hd,
            key_type: self.key_type,
            path: self.path.clone(),
            address_index: self.address_count,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
