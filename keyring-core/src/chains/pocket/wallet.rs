// keyring-core/src/chains/pocket/wallet.rs
//
// Pocket Wallet - one ed25519 keypair
// Address = SHA-256(public key)[..20], lower-case hex without prefix

use crate::chains::pocket::codec::{PocketTransaction, TransactionOptions, TxCodec, TxSignature};
use crate::error::{WalletError, WalletResult};
use ed25519_dalek::{Signer, SigningKey, Verifier};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Pocket address length in bytes
pub const ADDRESS_LEN: usize = 20;

/// Largest integer a JavaScript number holds exactly; sign-doc entropy stays below it
const MAX_SAFE_ENTROPY: u64 = (1 << 53) - 1;

/// Pocket Network wallet
///
/// # Security
/// - `SigningKey` is `ZeroizeOnDrop`
/// - Debug output never shows key material
#[derive(Clone)]
pub struct PocketWallet {
    signing_key: SigningKey,
    address: String,
}

impl std::fmt::Debug for PocketWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PocketWallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl PocketWallet {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Build from a 64-byte keypair (secret seed || public key).
    ///
    /// The embedded public key must match the secret.
    pub fn from_keypair_bytes(bytes: &[u8]) -> WalletResult<Self> {
        let keypair: &[u8; 64] = bytes.try_into().map_err(|_| {
            WalletError::InvalidKeyMaterial(format!(
                "ed25519 private key must be 64 bytes, got {}",
                bytes.len()
            ))
        })?;

        let signing_key = SigningKey::from_keypair_bytes(keypair).map_err(|e| {
            WalletError::InvalidKeyMaterial(format!("Inconsistent ed25519 keypair: {}", e))
        })?;

        let address = Self::address_from_public_key(&signing_key.verifying_key().to_bytes());
        Ok(Self {
            signing_key,
            address,
        })
    }

    /// Build from 128 hex chars
    pub fn from_hex(priv_key: &str) -> WalletResult<Self> {
        let bytes = Zeroizing::new(
            hex::decode(priv_key)
                .map_err(|e| WalletError::InvalidKeyMaterial(format!("Invalid hex: {}", e)))?,
        );
        Self::from_keypair_bytes(&bytes)
    }

    /// SHA-256 of the public key, first 20 bytes, hex
    pub fn address_from_public_key(public_key: &[u8; 32]) -> String {
        let hash = Sha256::digest(public_key);
        hex::encode(&hash[..ADDRESS_LEN])
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// 64 hex chars
    pub fn public_key(&self) -> String {
        hex::encode(self.signing_key.verifying_key().to_bytes())
    }

    /// 128 hex chars (seed || public key). Never log this value.
    pub fn private_key(&self) -> String {
        hex::encode(Zeroizing::new(self.signing_key.to_keypair_bytes()).as_slice())
    }

    // =========================================================================
    // SIGNING
    // =========================================================================

    /// Sign `tx` and return the codec's signed transaction bytes as hex
    pub fn sign_transaction(
        &self,
        tx: &PocketTransaction,
        codec: &dyn TxCodec,
        options: &TransactionOptions,
    ) -> WalletResult<String> {
        let entropy = Self::entropy();
        let doc = codec.sign_doc(tx, entropy, options)?;

        let signature = TxSignature {
            public_key: self.signing_key.verifying_key().to_bytes(),
            signature: self.sign_bytes(&doc),
        };

        let encoded = codec.encode_signed(tx, entropy, options, &signature)?;
        Ok(hex::encode(encoded))
    }

    /// Sign `tx` and report whether the signature verifies against this wallet's key
    pub fn sign_transaction_verified(
        &self,
        tx: &PocketTransaction,
        codec: &dyn TxCodec,
        options: &TransactionOptions,
    ) -> WalletResult<bool> {
        let doc = codec.sign_doc(tx, Self::entropy(), options)?;
        let signature = ed25519_dalek::Signature::from_bytes(&self.sign_bytes(&doc));
        Ok(self
            .signing_key
            .verifying_key()
            .verify(&doc, &signature)
            .is_ok())
    }

    /// Detached ed25519 signature over raw bytes
    pub fn sign_bytes(&self, bytes: &[u8]) -> [u8; 64] {
        self.signing_key.sign(bytes).to_bytes()
    }

    fn entropy() -> i64 {
        // Masked to 53 bits, always fits in i64
        (OsRng.next_u64() & MAX_SAFE_ENTROPY) as i64
    }
}

// =============================================================================
// TESTS
// =============================================================================
