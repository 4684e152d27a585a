// keyring-core/src/keyring/registry.rs
//
// Versioned deserializer: untyped record → concrete keyring.

use crate::error::{WalletError, WalletResult};
use crate::keyring::{
    AnyKeyring, FixedKeyring, HdKeyring, KeyType, KeyringType, SerializedFixedKeyring,
    SerializedHdKeyring, SERIALIZATION_VERSION,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Rebuild a keyring from a version 1 record.
///
/// Returns `Ok(None)` when the record carries neither a mnemonic nor a
/// private key for its keyring type, so the caller can try other readings.
pub fn deserialize_keyring(record: &Value) -> WalletResult<Option<AnyKeyring>> {
    deserialize_keyring_with_passphrase(record, None)
}

/// [`deserialize_keyring`] for HD records created with a passphrase
pub fn deserialize_keyring_with_passphrase(
    record: &Value,
    passphrase: Option<&str>,
) -> WalletResult<Option<AnyKeyring>> {
    let version = record.get("version").and_then(Value::as_u64);
    if version != Some(u64::from(SERIALIZATION_VERSION)) {
        return Err(WalletError::UnsupportedSerialization(format!(
            "Cannot deserialize keyring version: {}",
            record.get("version").unwrap_or(&Value::Null)
        )));
    }

    let keyring_type: KeyringType = field(record, "keyringType")?;
    let key_type: KeyType = field(record, "keyType")?;

    debug!(%keyring_type, %key_type, "deserializing keyring record");

    match keyring_type {
        KeyringType::Hd if has_text(record, "mnemonic") => {
            let hd: SerializedHdKeyring = parse(record)?;
            Ok(Some(AnyKeyring::Hd(HdKeyring::deserialize_with_passphrase(
                &hd, passphrase,
            )?)))
        }
        KeyringType::Fixed if has_text(record, "privateKey") => {
            let fixed: SerializedFixedKeyring = parse(record)?;
            Ok(Some(AnyKeyring::Fixed(FixedKeyring::deserialize(&fixed)?)))
        }
        _ => Ok(None),
    }
}

/// Parse JSON text, then [`deserialize_keyring`]
pub fn deserialize_keyring_str(json: &str) -> WalletResult<Option<AnyKeyring>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| WalletError::UnsupportedSerialization(format!("Invalid JSON: {}", e)))?;
    deserialize_keyring(&value)
}

fn field<T: DeserializeOwned>(record: &Value, name: &str) -> WalletResult<T> {
    let raw = record.get(name).cloned().unwrap_or(Value::Null);
    serde_json::from_value(raw.clone())
        .map_err(|_| WalletError::UnsupportedSerialization(format!("Invalid {}: {}", name, raw)))
}

fn has_text(record: &Value, name: &str) -> bool {
    record
        .get(name)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

fn parse<T: DeserializeOwned>(record: &Value) -> WalletResult<T> {
    serde_json::from_value(record.clone())
        .map_err(|e| WalletError::UnsupportedSerialization(format!("Malformed record: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyring::{HdKeyringOptions, Keyring};
    use serde_json::json;

    const MNEMONIC: &str = "dream dinosaur poem cherry brief hand injury ice stuff steel bench vacant amazing bar uncover";
    const EVM_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn hd_record() -> Value {
        let mut keyring = HdKeyring::new(
            HdKeyringOptions::new()
                .mnemonic(MNEMONIC)
                .key_type(KeyType::Secp256k1),
        )
        .unwrap();
        keyring.add_addresses_sync(2).unwrap();
        serde_json::to_value(keyring.serialize_sync()).unwrap()
    }

    #[test]
    fn test_dispatches_hd() {
        let record = hd_record();
        let keyring = deserialize_keyring(&record).unwrap().unwrap();
        assert_eq!(keyring.keyring_type(), KeyringType::Hd);
        assert_eq!(keyring.fingerprint(), record["fingerprint"]);
        assert_eq!(keyring.get_addresses_sync().len(), 2);
    }

    #[test]
    fn test_dispatches_fixed() {
        let fixed = FixedKeyring::new(KeyType::Secp256k1, EVM_KEY).unwrap();
        let json = serde_json::to_string(&fixed.serialize_sync()).unwrap();

        let keyring = deserialize_keyring_str(&json).unwrap().unwrap();
        assert!(keyring.as_fixed().is_some());
        assert_eq!(keyring.fingerprint(), fixed.fingerprint());
    }

    #[test]
    fn test_passphrase_is_forwarded() {
        let keyring = HdKeyring::new(
            HdKeyringOptions::new()
                .mnemonic(MNEMONIC)
                .passphrase("1234")
                .key_type(KeyType::Ed25519),
        )
        .unwrap();
        let record = serde_json::to_value(keyring.serialize_sync()).unwrap();

        let restored = deserialize_keyring_with_passphrase(&record, Some("1234"))
            .unwrap()
            .unwrap();
        assert_eq!(restored.fingerprint(), keyring.fingerprint());
    }

    #[test]
    fn test_rejects_version_two() {
        let mut record = hd_record();
        record["version"] = json!(2);
        assert!(matches!(
            deserialize_keyring(&record),
            Err(WalletError::UnsupportedSerialization(_))
        ));

        record.as_object_mut().unwrap().remove("version");
        assert!(matches!(
            deserialize_keyring(&record),
            Err(WalletError::UnsupportedSerialization(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_enums() {
        let mut record = hd_record();
        record["keyringType"] = json!("ledger");
        assert!(matches!(
            deserialize_keyring(&record),
            Err(WalletError::UnsupportedSerialization(_))
        ));

        let mut record = hd_record();
        record["keyType"] = json!("sr25519");
        assert!(matches!(
            deserialize_keyring(&record),
            Err(WalletError::UnsupportedSerialization(_))
        ));
    }

    #[test]
    fn test_unrecognized_record_is_none() {
        let record = json!({
            "version": 1,
            "fingerprint": "0x00000000",
            "keyringType": "bip39",
            "keyType": "ed25519",
            "privateKey": "abcd",
        });
        assert!(deserialize_keyring(&record).unwrap().is_none());

        let record = json!({
            "version": 1,
            "keyringType": "fixed",
            "keyType": "secp256k1",
            "privateKey": "",
        });
        assert!(deserialize_keyring(&record).unwrap().is_none());
    }

    #[test]
    fn test_invalid_json_text() {
        assert!(matches!(
            deserialize_keyring_str("{not json"),
            Err(WalletError::UnsupportedSerialization(_))
        ));
    }
}
