// keyring-core/src/keyring/address_index.rs
//
// Address → wallet map, insertion ordered.

use crate::chains::CurveWallet;
use indexmap::IndexMap;

/// Canonical form of an address used as an index key.
///
/// `0x`/`0X`-prefixed (EVM) addresses are lower-cased with a `0x` prefix;
/// anything else is returned unchanged.
pub fn normalize_address(address: &str) -> String {
    match address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
    {
        Some(body) => format!("0x{}", body.to_ascii_lowercase()),
        None => address.to_string(),
    }
}

/// Wallets of one keyring keyed by normalized address
#[derive(Debug, Clone, Default)]
pub struct AddressIndex {
    wallets: IndexMap<String, CurveWallet>,
}

impl AddressIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wallet under its normalized address and return that key
    pub fn insert(&mut self, wallet: CurveWallet) -> String {
        let key = normalize_address(wallet.address());
        self.wallets.insert(key.clone(), wallet);
        key
    }

    /// Normalized lookup first, then the literal string
    pub fn get(&self, address: &str) -> Option<&CurveWallet> {
        self.wallets
            .get(&normalize_address(address))
            .or_else(|| self.wallets.get(address))
    }

    /// Keys in insertion order
    pub fn addresses(&self) -> Vec<String> {
        self.wallets.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyring::KeyType;
    use proptest::prelude::*;

    fn evm(key: &str) -> CurveWallet {
        CurveWallet::from_private_key(KeyType::Secp256k1, key).unwrap()
    }

    fn pocket(seed: u8) -> CurveWallet {
        let keypair = ed25519_dalek::SigningKey::from_bytes(&[seed; 32]).to_keypair_bytes();
        CurveWallet::from_key_bytes(KeyType::Ed25519, &keypair).unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize_address("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266"),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(normalize_address("0XABCDEF"), "0xabcdef");
        assert_eq!(normalize_address("ABCDEF"), "ABCDEF");
        assert_eq!(normalize_address(""), "");
    }

    #[test]
    fn test_insertion_order_and_lookup() {
        let mut index = AddressIndex::new();
        let a = index.insert(evm(
            "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        ));
        let b = index.insert(evm(
            "501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5",
        ));

        assert_eq!(index.addresses(), vec![a.clone(), b]);
        let upper = a.to_uppercase().replacen("0X", "0x", 1);
        assert_eq!(index.get(&upper).map(CurveWallet::address), Some(a.as_str()));
        assert!(index.get("0x0000000000000000000000000000000000000000").is_none());
    }

    #[test]
    fn test_pocket_addresses_are_literal() {
        let mut index = AddressIndex::new();
        let key = index.insert(pocket(1));
        assert!(index.get(&key).is_some());
        assert!(index.get(&key.to_uppercase()).is_none());
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC{0,64}") {
            let once = normalize_address(&s);
            prop_assert_eq!(normalize_address(&once), once.clone());
        }

        #[test]
        fn normalize_ignores_hex_case(body in "[0-9a-fA-F]{40}") {
            let lower = normalize_address(&format!("0x{}", body.to_lowercase()));
            prop_assert_eq!(normalize_address(&format!("0X{}", body.to_uppercase())), lower.clone());
            prop_assert_eq!(normalize_address(&format!("0x{}", body)), lower);
        }
    }
}
