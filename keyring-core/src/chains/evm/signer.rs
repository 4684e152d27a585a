// keyring-core/src/chains/evm/signer.rs
//
// EVM Wallet - offline signing for one secp256k1 key
// EIP-191 (Personal Sign), EIP-712 (Typed Data), EIP-1559/2930/2718 transactions

use crate::chains::evm::address::EvmAddress;
use crate::error::{CryptoError, WalletError, WalletResult};
use alloy::{
    dyn_abi::TypedData,
    eips::eip2718::Encodable2718,
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Signature, B256},
    rpc::types::eth::TransactionRequest,
    signers::{local::LocalSigner, SignerSync},
};
use k256::ecdsa::SigningKey;
use zeroize::Zeroizing;

/// EVM Wallet
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: the inner `SigningKey` wipes itself on drop
/// - **No Debug Leak**: custom Debug impl never prints the private key
///
/// # Performance
/// - **Cached Address**: address and public key are computed once at construction
/// - **Sync Variants**: message and typed-data signing need no runtime
#[derive(Clone)]
pub struct EvmWallet {
    signer: LocalSigner<SigningKey>,
    address: String,
    public_key: [u8; 65],
}

impl std::fmt::Debug for EvmWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmWallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl EvmWallet {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Build a wallet from a 32-byte secp256k1 scalar
    pub fn from_bytes(priv_key: &[u8]) -> WalletResult<Self> {
        let address = EvmAddress::derive_from_slice(priv_key)?;
        let public_key = EvmAddress::public_key_from_slice(priv_key)?;

        let signing_key = SigningKey::from_slice(priv_key).map_err(|e| {
            WalletError::InvalidKeyMaterial(format!(
                "Invalid private key (must be 32 bytes): {}",
                e
            ))
        })?;

        Ok(Self {
            signer: LocalSigner::from(signing_key),
            address,
            public_key,
        })
    }

    /// Build a wallet from hex text, with or without the `0x` prefix
    pub fn from_hex(priv_key: &str) -> WalletResult<Self> {
        let body = priv_key
            .strip_prefix("0x")
            .or_else(|| priv_key.strip_prefix("0X"))
            .unwrap_or(priv_key);
        let bytes = Zeroizing::new(
            hex::decode(body)
                .map_err(|e| WalletError::InvalidKeyMaterial(format!("Invalid hex: {}", e)))?,
        );
        Self::from_bytes(&bytes)
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Lower-cased `0x` address
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// `0x04…` uncompressed public key
    pub fn public_key(&self) -> String {
        format!("0x{}", hex::encode(self.public_key))
    }

    /// `0x` + 64 hex. Never log this value.
    pub fn private_key(&self) -> String {
        format!("0x{}", hex::encode(self.signer.credential().to_bytes()))
    }

    // =========================================================================
    // TRANSACTION SIGNING (EIP-155, EIP-1559, EIP-2930)
    // =========================================================================

    /// Sign a transaction offline and return the EIP-2718 envelope as `0x` hex.
    ///
    /// The request must be complete (nonce, gas, fees, chain id); nothing is
    /// filled in from a provider.
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> WalletResult<String> {
        let wallet = EthereumWallet::from(self.signer.clone());

        let envelope = tx
            .build(&wallet)
            .await
            .map_err(|e| WalletError::Crypto(CryptoError::SigningFailed(e.to_string())))?;

        Ok(format!("0x{}", hex::encode(envelope.encoded_2718())))
    }

    // =========================================================================
    // MESSAGE SIGNING (EIP-191)
    // =========================================================================

    /// Sign with the "\x19Ethereum Signed Message:\n{len}" prefix
    pub fn sign_message(&self, message: &[u8]) -> WalletResult<String> {
        let signature = self
            .signer
            .sign_message_sync(message)
            .map_err(|e| WalletError::Crypto(CryptoError::SigningFailed(e.to_string())))?;
        Ok(Self::encode_signature(&signature))
    }

    // =========================================================================
    // TYPED DATA SIGNING (EIP-712)
    // =========================================================================

    /// Sign EIP-712 typed data given as a JSON-shaped `TypedData` document
    pub fn sign_typed_data(&self, data: &TypedData) -> WalletResult<String> {
        let hash = data
            .eip712_signing_hash()
            .map_err(|e| WalletError::Crypto(CryptoError::EncodingFailed(e.to_string())))?;
        let signature = self.sign_hash(&hash)?;
        Ok(Self::encode_signature(&signature))
    }

    fn sign_hash(&self, hash: &B256) -> WalletResult<Signature> {
        self.signer
            .sign_hash_sync(hash)
            .map_err(|e| WalletError::Crypto(CryptoError::SigningFailed(e.to_string())))
    }

    /// r || s || v, `0x` hex
    fn encode_signature(signature: &Signature) -> String {
        format!("0x{}", hex::encode(signature.as_bytes()))
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
