//! Trie configuration module.
//!
//! Settings used to build a [`LanaiTrie`](crate::data_structures::LanaiTrie)
//! from configuration files and environment variables.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::{Alphabet, LanaiTrieConfig};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound for `max_depth`; keys longer than this are never useful.
pub const MAX_DEPTH_LIMIT: usize = 65_536;

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrieSettings {
    /// Symbols accepted in keys
    pub alphabet: Alphabet,

    /// Whether keys are compared case-sensitively
    pub case_sensitive: bool,

    /// Maximum key length in symbols
    pub max_depth: usize,
}

impl Default for TrieSettings {
    fn default() -> Self {
        let defaults = LanaiTrieConfig::default();
        Self {
            alphabet: defaults.alphabet,
            case_sensitive: defaults.case_sensitive,
            max_depth: defaults.max_depth,
        }
    }
}

impl TrieSettings {
    /// Converts the settings into a trie configuration.
    pub fn to_trie_config(&self) -> LanaiTrieConfig {
        LanaiTrieConfig::new()
            .with_alphabet(self.alphabet.clone())
            .with_case_sensitive(self.case_sensitive)
            .with_max_depth(self.max_depth)
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::invalid(
                "trie.max_depth",
                format!("must be between 1 and {MAX_DEPTH_LIMIT}"),
            ));
        }

        if let Alphabet::Custom(symbols) = &self.alphabet {
            if symbols.is_empty() {
                return Err(ConfigError::invalid(
                    "trie.alphabet",
                    "custom alphabet cannot be empty",
                ));
            }

            // Keys are lower-cased before validation, so an uppercase
            // symbol could never match.
            if !self.case_sensitive {
                if let Some(symbol) = symbols.chars().find(|c| c.is_uppercase()) {
                    return Err(ConfigError::invalid(
                        "trie.alphabet",
                        format!(
                            "uppercase symbol {symbol:?} cannot match case-insensitive keys"
                        ),
                    ));
                }
            }
        }

        Ok(())
    }
}
