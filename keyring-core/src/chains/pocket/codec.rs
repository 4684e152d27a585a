// keyring-core/src/chains/pocket/codec.rs
//
// Pocket Network transaction model and the encoder seam.
//
// The wallet never builds Pocket wire bytes itself. A caller-supplied
// `TxCodec` turns a `PocketTransaction` into the canonical sign-doc bytes and,
// once signed, into the broadcastable `StdTx` bytes.

use crate::error::WalletResult;
use serde::{Deserialize, Serialize};

/// Pocket coin denomination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinDenom {
    Upokt,
    Pokt,
}

/// An unsigned Pocket transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PocketTransaction {
    /// Chain-specific message body (e.g. a `pos/Send` message), opaque here
    pub tx_msg: serde_json::Value,
    pub chain_id: String,
    pub fee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_denom: Option<CoinDenom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Encoder switches forwarded untouched to the codec
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOptions {
    pub use_legacy_tx_codec: bool,
}

/// Detached ed25519 signature plus the signer's public key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxSignature {
    pub public_key: [u8; 32],
    pub signature: [u8; 64],
}

/// Pocket transaction encoder.
///
/// `entropy` is the per-transaction nonce embedded in the sign doc. The wallet
/// draws it once per signing and passes the same value to both calls, so
/// `encode_signed` must wrap exactly the document `sign_doc` produced.
pub trait TxCodec: Send + Sync {
    /// Canonical bytes to sign
    fn sign_doc(
        &self,
        tx: &PocketTransaction,
        entropy: i64,
        options: &TransactionOptions,
    ) -> WalletResult<Vec<u8>>;

    /// Signed transaction bytes ready to broadcast
    fn encode_signed(
        &self,
        tx: &PocketTransaction,
        entropy: i64,
        options: &TransactionOptions,
        signature: &TxSignature,
    ) -> WalletResult<Vec<u8>>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use serde_json::json;

    /// JSON stand-in for the amino/protobuf encoders
    pub struct JsonCodec;

    impl TxCodec for JsonCodec {
        fn sign_doc(
            &self,
            tx: &PocketTransaction,
            entropy: i64,
            options: &TransactionOptions,
        ) -> WalletResult<Vec<u8>> {
            let doc = json!({
                "chain_id": tx.chain_id,
                "entropy": entropy.to_string(),
                "fee": [{ "amount": tx.fee, "denom": tx.fee_denom }],
                "memo": tx.memo.clone().unwrap_or_default(),
                "msg": tx.tx_msg,
                "legacy": options.use_legacy_tx_codec,
            });
            Ok(serde_json::to_vec(&doc).unwrap_or_default())
        }

        fn encode_signed(
            &self,
            tx: &PocketTransaction,
            entropy: i64,
            options: &TransactionOptions,
            signature: &TxSignature,
        ) -> WalletResult<Vec<u8>> {
            let doc: serde_json::Value =
                serde_json::from_slice(&self.sign_doc(tx, entropy, options)?).unwrap_or_default();
            let signed = json!({
                "doc": doc,
                "signature": {
                    "pub_key": hex::encode(signature.public_key),
                    "signature": hex::encode(signature.signature),
                },
            });
            Ok(serde_json::to_vec(&signed).unwrap_or_default())
        }
    }

    pub fn send_transaction() -> PocketTransaction {
        PocketTransaction {
            tx_msg: json!({
                "type": "pos/Send",
                "value": {
                    "from_address": "792c5f1a6c087f20316a802d325fdfbb9b41482a",
                    "to_address": "5db4684f8277a04e3ccb9f0dd47297dcd86d36ce",
                    "amount": "1000000",
                },
            }),
            chain_id: "testnet".to_string(),
            fee: "10000".to_string(),
            fee_denom: Some(CoinDenom::Upokt),
            memo: Some("keyring test".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_json_shape() {
        let tx: PocketTransaction = serde_json::from_str(
            r#"{"txMsg":{"type":"pos/Send"},"chainId":"mainnet","fee":"10000","feeDenom":"upokt"}"#,
        )
        .unwrap();
        assert_eq!(tx.chain_id, "mainnet");
        assert_eq!(tx.fee_denom, Some(CoinDenom::Upokt));
        assert_eq!(tx.memo, None);

        let back = serde_json::to_value(&tx).unwrap();
        assert!(back.get("memo").is_none());
        assert_eq!(back["feeDenom"], "upokt");
    }

    #[test]
    fn test_denominations_are_lowercase() {
        assert_eq!(serde_json::to_string(&CoinDenom::Upokt).unwrap(), r#""upokt""#);
        assert_eq!(serde_json::to_string(&CoinDenom::Pokt).unwrap(), r#""pokt""#);
        assert!(serde_json::from_str::<CoinDenom>(r#""Upokt""#).is_err());
    }

    #[test]
    fn test_options_default_to_current_codec() {
        assert!(!TransactionOptions::default().use_legacy_tx_codec);
        let opts: TransactionOptions = serde_json::from_str(r#"{"useLegacyTxCodec":true}"#).unwrap();
        assert!(opts.use_legacy_tx_codec);
    }
}
