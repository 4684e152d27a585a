// keyring-core/src/chains/evm/address.rs
//
// EVM Address Module
// Keccak-256, secp256k1, lower-case hex rendering

use crate::error::{WalletError, WalletResult};
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::Zeroize;

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// # Security
/// - Zeroize: intermediate hash bytes are wiped after use
/// - No Storage: this module never keeps the private key
pub struct EvmAddress;

impl EvmAddress {
    // =========================================================================
    // CORE: Private Key → Address Bytes (20 bytes)
    // =========================================================================

    /// Derive the 20 address bytes from a borrowed private key.
    ///
    /// # Algorithm (Ethereum Yellow Paper)
    /// 1. `priv_key` (32B) → secp256k1 → `pub_key` (uncompressed, 65B)
    /// 2. Drop the 0x04 prefix → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    ///
    /// # ⚠ Security Note
    /// The caller is responsible for zeroing `priv_key` after this call.
    pub fn derive_bytes_from_slice(priv_key: &[u8]) -> WalletResult<[u8; 20]> {
        let public_key = Self::public_key_from_slice(priv_key)?;

        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(&public_key[1..]);
        hasher.finalize(&mut hash);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        hash.zeroize();

        Ok(address)
    }

    /// Derive the lower-cased `0x` address string from a borrowed private key.
    #[inline]
    pub fn derive_from_slice(priv_key: &[u8]) -> WalletResult<String> {
        let bytes = Self::derive_bytes_from_slice(priv_key)?;
        Ok(format!("0x{}", hex::encode(bytes)))
    }

    /// Uncompressed SEC1 public key (65 bytes, leading 0x04)
    pub fn public_key_from_slice(priv_key: &[u8]) -> WalletResult<[u8; 65]> {
        // SecretKey::from_slice zero-pads short input; require the full scalar
        if priv_key.len() != 32 {
            return Err(WalletError::InvalidKeyMaterial(format!(
                "secp256k1 private key must be 32 bytes, got {}",
                priv_key.len()
            )));
        }
        let secret_key = SecretKey::from_slice(priv_key).map_err(|e| {
            WalletError::InvalidKeyMaterial(format!("Invalid secp256k1 private key: {}", e))
        })?;

        let encoded = secret_key.public_key().to_encoded_point(false);
        let mut out = [0u8; 65];
        out.copy_from_slice(encoded.as_bytes());
        Ok(out)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str =
        "501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5";
    const TEST_ADDRESS: &str = "0xb611c31e4284bf7a7dad3296e62880f14b3b15dd";

    // Anvil/Hardhat account #0
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn test_derive_from_slice() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(EvmAddress::derive_from_slice(&priv_key).unwrap(), TEST_ADDRESS);
    }

    #[test]
    fn test_derive_anvil() {
        let priv_key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        assert_eq!(EvmAddress::derive_from_slice(&priv_key).unwrap(), ANVIL_ADDRESS);
    }

    #[test]
    fn test_derive_consistency() {
        let raw = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let string_addr = EvmAddress::derive_from_slice(&raw).unwrap();
        let bytes_addr = EvmAddress::derive_bytes_from_slice(&raw).unwrap();
        assert_eq!(string_addr, format!("0x{}", hex::encode(bytes_addr)));
    }

    #[test]
    fn test_public_key_is_uncompressed() {
        let raw = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        let public_key = EvmAddress::public_key_from_slice(&raw).unwrap();
        assert_eq!(public_key[0], 0x04);
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(EvmAddress::derive_from_slice(&[1u8; 31]).is_err());
        assert!(EvmAddress::derive_from_slice(&[0u8; 33]).is_err());
        assert!(EvmAddress::derive_from_slice(&[]).is_err());
    }

    #[test]
    fn test_zero_private_key_rejected() {
        assert!(matches!(
            EvmAddress::derive_from_slice(&[0u8; 32]),
            Err(WalletError::InvalidKeyMaterial(_))
        ));
    }
}
