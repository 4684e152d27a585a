// keyring-core/src/keyring/options.rs
//
// HD keyring configuration: construction options, per-curve defaults and the
// key-type resolution policy.

use crate::crypto::paths::DerivationPaths;
use crate::error::{WalletError, WalletResult};
use crate::keyring::KeyType;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Mnemonic strength used when none is configured
pub const DEFAULT_STRENGTH: usize = 256;

/// Curve used when neither a key type nor a known path is given
pub const FALLBACK_KEY_TYPE: KeyType = KeyType::Ed25519;

// =============================================================================
// DEFAULTS TABLE
// =============================================================================

/// Construction defaults for one curve family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTypeDefaults {
    pub key_type: KeyType,
    pub path: &'static str,
    pub strength: usize,
}

impl KeyTypeDefaults {
    pub const fn for_key_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            path: DerivationPaths::default_for(key_type),
            strength: DEFAULT_STRENGTH,
        }
    }
}

// =============================================================================
// POLICY
// =============================================================================

/// What to do when the key type cannot be inferred
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPolicy {
    /// Fall back to ed25519 and record a [`KeyringDiagnostic`]
    #[default]
    Legacy,
    /// Refuse with `UnresolvedKeyType`
    Strict,
}

/// Caller-visible notes about how a keyring was constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyringDiagnostic {
    /// No key type and no known default path; `key_type` was assumed
    DefaultedKeyType {
        path: Option<String>,
        key_type: KeyType,
    },
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Options for [`HdKeyring::new`](crate::keyring::HdKeyring::new).
///
/// Every field is optional. Missing values come from the
/// [`KeyTypeDefaults`] of the resolved key type; a missing mnemonic is
/// generated.
///
/// # Security
/// - `mnemonic` and `passphrase` are wiped on drop and redacted from Debug
#[derive(Clone, Default, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct HdKeyringOptions {
    #[serde(default)]
    #[zeroize(skip)]
    pub key_type: Option<KeyType>,
    #[serde(default)]
    pub strength: Option<usize>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub mnemonic: Option<String>,
    #[serde(default)]
    pub passphrase: Option<String>,
    #[serde(default)]
    #[zeroize(skip)]
    pub path_policy: PathPolicy,
}

impl std::fmt::Debug for HdKeyringOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdKeyringOptions")
            .field("key_type", &self.key_type)
            .field("strength", &self.strength)
            .field("path", &self.path)
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "[REDACTED]"))
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .field("path_policy", &self.path_policy)
            .finish()
    }
}

impl HdKeyringOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = Some(key_type);
        self
    }

    pub fn strength(mut self, bits: usize) -> Self {
        self.strength = Some(bits);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn mnemonic(mut self, phrase: impl Into<String>) -> Self {
        self.mnemonic = Some(phrase.into());
        self
    }

    pub fn passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }

    pub fn path_policy(mut self, policy: PathPolicy) -> Self {
        self.path_policy = policy;
        self
    }

    /// Resolve the curve family.
    ///
    /// Explicit key type, then a known default path, then the policy.
    pub fn resolve_key_type(&self) -> WalletResult<(KeyType, Option<KeyringDiagnostic>)> {
        if let Some(key_type) = self.key_type {
            return Ok((key_type, None));
        }

        if let Some(key_type) = self.path.as_deref().and_then(DerivationPaths::infer_key_type) {
            return Ok((key_type, None));
        }

        match self.path_policy {
            PathPolicy::Legacy => Ok((
                FALLBACK_KEY_TYPE,
                Some(KeyringDiagnostic::DefaultedKeyType {
                    path: self.path.clone(),
                    key_type: FALLBACK_KEY_TYPE,
                }),
            )),
            PathPolicy::Strict => Err(WalletError::UnresolvedKeyType(
                self.path.clone().unwrap_or_default(),
            )),
        }
    }
}
