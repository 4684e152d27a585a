// keyring-core/src/crypto/paths.rs
//
// Derivation Paths Module - keyring root paths per curve family
// BIP-44 (Purpose), SLIP-44 (Coin Types), SLIP-0010 (ed25519)

use crate::keyring::KeyType;

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Keyring root paths.
///
/// A keyring's root sits at depth 4 (`m/44'/coin'/account'/change`); child
/// addresses are derived one level below it, so depth 5 is the address index.
pub struct DerivationPaths;

impl DerivationPaths {
    /// Default EVM root, the same one MetaMask uses
    pub const EVM: &'static str = "m/44'/60'/0'/0";

    /// Default Pocket Network root.
    ///
    /// Ed25519 derivation hardens every level, the trailing `0` included.
    pub const POCKET: &'static str = "m/44'/635'/0'/0";

    /// Default root path for a curve family
    #[inline]
    pub const fn default_for(key_type: KeyType) -> &'static str {
        match key_type {
            KeyType::Secp256k1 => Self::EVM,
            KeyType::Ed25519 => Self::POCKET,
        }
    }

    /// Curve family a path is the known default for, if any.
    ///
    /// Lookup goes through [`KNOWN_DEFAULT_PATHS`] in table order.
    pub fn infer_key_type(path: &str) -> Option<KeyType> {
        KNOWN_DEFAULT_PATHS
            .iter()
            .find(|(known, _)| *known == path)
            .map(|(_, key_type)| *key_type)
    }
}

/// Key-type inference table, consulted when a keyring is built from a path
/// without an explicit key type.
pub const KNOWN_DEFAULT_PATHS: [(&str, KeyType); 2] = [
    (DerivationPaths::EVM, KeyType::Secp256k1),
    (DerivationPaths::POCKET, KeyType::Ed25519),
];

// =============================================================================
// PATH PARSING
// =============================================================================
/// One parsed path segment: index plus whether it was written hardened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegment {
    pub index: u32,
    pub hardened: bool,
}

/// Parse `m/a'/b/c'` (or a relative `a'/b`) into segments.
///
/// Accepts both `'` and `h` as hardened markers. Indices must fit in 31 bits.
pub fn parse_path(path: &str) -> Option<Vec<PathSegment>> {
    let path = path.trim();
    let rest = match path.strip_prefix('m') {
        Some("") => return Some(Vec::new()),
        Some(r) => r.strip_prefix('/')?,
        None => path,
    };

    rest.split('/')
        .map(|segment| {
            let segment = segment.trim();
            let (digits, hardened) = match segment
                .strip_suffix('\'')
                .or_else(|| segment.strip_suffix('h'))
            {
                Some(d) => (d, true),
                None => (segment, false),
            };
            let index: u32 = digits.parse().ok()?;
            (index < 0x8000_0000).then_some(PathSegment { index, hardened })
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        assert_eq!(DerivationPaths::default_for(KeyType::Secp256k1), "m/44'/60'/0'/0");
        assert_eq!(DerivationPaths::default_for(KeyType::Ed25519), "m/44'/635'/0'/0");
    }

    #[test]
    fn test_infer_key_type() {
        assert_eq!(
            DerivationPaths::infer_key_type("m/44'/60'/0'/0"),
            Some(KeyType::Secp256k1)
        );
        assert_eq!(
            DerivationPaths::infer_key_type("m/44'/635'/0'/0"),
            Some(KeyType::Ed25519)
        );
        assert_eq!(DerivationPaths::infer_key_type("m/44'/501'/0'/0'"), None);
        assert_eq!(DerivationPaths::infer_key_type(""), None);
    }

    #[test]
    fn test_parse_path() {
        let segments = parse_path("m/44'/60'/0'/0").unwrap();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], PathSegment { index: 44, hardened: true });
        assert_eq!(segments[3], PathSegment { index: 0, hardened: false });

        assert_eq!(
            parse_path("7").unwrap(),
            vec![PathSegment { index: 7, hardened: false }]
        );
        assert_eq!(parse_path("m/1h").unwrap()[0].hardened, true);
        assert!(parse_path("m").unwrap().is_empty());
    }

    #[test]
    fn test_parse_path_rejects_garbage() {
        assert!(parse_path("invalid").is_none());
        assert!(parse_path("m/").is_none());
        assert!(parse_path("m/44'//0").is_none());
        assert!(parse_path("m/2147483648").is_none());
        assert!(parse_path("x/44'").is_none());
    }
}
