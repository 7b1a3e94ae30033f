// Copyright (c) 2025 Prefix Heap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lanai Trie.

use serde::{Deserialize, Serialize};

/// The set of symbols a trie accepts in its keys.
///
/// Any symbol outside the alphabet makes `insert` fail with
/// `LanaiTrieError::InvalidInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// `a` through `z`
    LowercaseAscii,
    /// ASCII letters of both cases and digits
    AsciiAlphanumeric,
    /// Printable 7-bit ASCII (control characters rejected)
    Ascii,
    /// Any Unicode scalar value
    #[default]
    Unicode,
    /// Exactly the characters of the given string
    Custom(String),
}

impl Alphabet {
    /// Returns whether `symbol` belongs to this alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        match self {
            Self::LowercaseAscii => symbol.is_ascii_lowercase(),
            Self::AsciiAlphanumeric => symbol.is_ascii_alphanumeric(),
            Self::Ascii => symbol.is_ascii() && !symbol.is_ascii_control(),
            Self::Unicode => true,
            Self::Custom(symbols) => symbols.contains(symbol),
        }
    }

    /// Short name used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LowercaseAscii => "lowercase_ascii",
            Self::AsciiAlphanumeric => "ascii_alphanumeric",
            Self::Ascii => "ascii",
            Self::Unicode => "unicode",
            Self::Custom(_) => "custom",
        }
    }
}

/// Configuration options for the Lanai Trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanaiTrieConfig {
    /// Symbols accepted in keys
    pub alphabet: Alphabet,

    /// Whether keys are compared case-sensitively. When false, keys are
    /// lower-cased before validation and traversal.
    pub case_sensitive: bool,

    /// Maximum key length in symbols
    pub max_depth: usize,
}

impl LanaiTrieConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accepted alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Sets whether keys are case-sensitive.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the maximum key length. Values below 1 are raised to 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Unicode,
            case_sensitive: true,
            max_depth: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_membership() {
        assert!(Alphabet::LowercaseAscii.contains('q'));
        assert!(!Alphabet::LowercaseAscii.contains('Q'));
        assert!(!Alphabet::LowercaseAscii.contains('1'));

        assert!(Alphabet::AsciiAlphanumeric.contains('Q'));
        assert!(Alphabet::AsciiAlphanumeric.contains('7'));
        assert!(!Alphabet::AsciiAlphanumeric.contains('-'));

        assert!(Alphabet::Ascii.contains('-'));
        assert!(Alphabet::Ascii.contains(' '));
        assert!(!Alphabet::Ascii.contains('\n'));
        assert!(!Alphabet::Ascii.contains('é'));

        assert!(Alphabet::Unicode.contains('é'));
        assert!(Alphabet::Unicode.contains('\n'));

        let dna = Alphabet::Custom("ACGT".to_string());
        assert!(dna.contains('G'));
        assert!(!dna.contains('U'));
    }

    #[test]
    fn test_builder() {
        let config = LanaiTrieConfig::new()
            .with_alphabet(Alphabet::LowercaseAscii)
            .with_case_sensitive(false)
            .with_max_depth(0);

        assert_eq!(config.alphabet, Alphabet::LowercaseAscii);
        assert!(!config.case_sensitive);
        assert_eq!(config.max_depth, 1);
    }

    #[test]
    fn test_alphabet_serde_names() {
        let json = serde_json::to_string(&Alphabet::AsciiAlphanumeric).unwrap();
        assert_eq!(json, "\"ascii_alphanumeric\"");

        let parsed: Alphabet = serde_json::from_str("{\"custom\":\"xyz\"}").unwrap();
        assert_eq!(parsed, Alphabet::Custom("xyz".to_string()));
    }
}
