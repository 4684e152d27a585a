// keyring-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 phrase validation, generation and seed expansion
// Standard: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Supported word counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Entropy bytes needed for this word count
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    /// Map an entropy strength in bits (128..=256, step 32) to a word count
    pub fn from_strength(bits: usize) -> WalletResult<Self> {
        match bits {
            128 => Ok(WordCount::Twelve),
            160 => Ok(WordCount::Fifteen),
            192 => Ok(WordCount::Eighteen),
            224 => Ok(WordCount::TwentyOne),
            256 => Ok(WordCount::TwentyFour),
            other => Err(MnemonicError::InvalidStrength(other).into()),
        }
    }
}

/// Wallet Mnemonic - BIP-39 phrase owned by an HD keyring
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: the phrase is overwritten when the struct is dropped
/// - **CSPRNG**: generation uses `OsRng`
/// - **No Debug Leak**: custom Debug impl never prints the phrase
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh mnemonic with the given entropy strength in bits
    ///
    /// # Arguments
    /// * `strength_bits` - 128, 160, 192, 224 or 256
    pub fn generate(strength_bits: usize) -> WalletResult<Self> {
        Self::with_word_count(WordCount::from_strength(strength_bits)?)
    }

    /// Generate a fresh mnemonic with a specific word count
    pub fn with_word_count(word_count: WordCount) -> WalletResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        // Stack-allocated entropy buffer (max 32 bytes)
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy[..entropy_size]);

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size]);
        entropy.zeroize();
        let mnemonic = mnemonic.map_err(|e| MnemonicError::Bip39Error(e.to_string()))?;

        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Restore a mnemonic from an existing phrase
    ///
    /// # Validation
    /// - Word count (12, 15, 18, 21, 24)
    /// - Every word is in the BIP-39 English wordlist
    /// - Checksum
    ///
    /// Whitespace is normalized to single spaces; the normalized phrase is what
    /// gets serialized.
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        let count = normalized.len();

        if !matches!(count, 12 | 15 | 18 | 21 | 24) {
            return Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(
                count,
            )));
        }

        let normalized_phrase = normalized.join(" ");
        Mnemonic::parse(&normalized_phrase).map_err(Self::classify)?;

        Ok(Self {
            phrase: normalized_phrase,
            word_count: count,
        })
    }

    fn classify(e: bip39::Error) -> WalletError {
        let err = match e {
            bip39::Error::UnknownWord(idx) => MnemonicError::UnknownWord(format!("#{idx}")),
            bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
            bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
            other => MnemonicError::Bip39Error(other.to_string()),
        };
        WalletError::Mnemonic(err)
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The mnemonic phrase. Never log this value.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Entropy strength of this mnemonic in bits
    pub fn strength_bits(&self) -> usize {
        // 11 bits per word, one checksum bit per 32 bits of entropy
        self.word_count * 11 * 32 / 33
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// Expand into a 64-byte BIP-39 seed (PBKDF2-HMAC-SHA512)
    ///
    /// # Arguments
    /// * `passphrase` - Optional BIP-39 passphrase, empty string when absent
    pub fn to_seed_bytes(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        let password = passphrase.unwrap_or("");
        let mnemonic = Mnemonic::parse(&self.phrase).map_err(Self::classify)?;
        Ok(Zeroizing::new(mnemonic.to_seed(password)))
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
