use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::alphabet::Alphabet;
use crate::codec::{Codec, DEFAULT_BIT_WIDTH, DEFAULT_MIN_LENGTH, DEFAULT_PAD};
use crate::errors::ConfigError;

/// A named alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    pub chars: String,
}

/// A named codec profile loaded from TOML.
///
/// Missing fields fall back to the crate defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Name of an entry in `[alphabets]`
    #[serde(default = "default_alphabet_name")]
    pub alphabet: String,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_bit_width")]
    pub bit_width: u32,
    /// Single pad character, as a string so TOML stays readable
    #[serde(default = "default_pad")]
    pub pad: String,
}

fn default_alphabet_name() -> String {
    "default".to_string()
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_bit_width() -> u32 {
    DEFAULT_BIT_WIDTH
}

fn default_pad() -> String {
    DEFAULT_PAD.to_string()
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            alphabet: default_alphabet_name(),
            min_length: default_min_length(),
            bit_width: default_bit_width(),
            pad: default_pad(),
        }
    }
}

impl CodecConfig {
    /// Returns the pad character, which must be exactly one character.
    pub fn pad_char(&self) -> Result<char, ConfigError> {
        let mut chars = self.pad.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConfigError::BadPad(self.pad.clone())),
        }
    }
}

/// Alphabets and codec profiles, keyed by name.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SidConfig {
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    #[serde(default)]
    pub codecs: HashMap<String, CodecConfig>,
}

impl SidConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Built-in configuration compiled into the crate.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(include_str!("../sid.toml"))
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with the built-in alphabets and profiles
    /// 2. Override with ~/.config/sid/sid.toml if it exists
    /// 3. Override with ./sid.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file_if_present(&config_dir.join("sid").join("sid.toml"));
        }
        config.merge_file_if_present(Path::new("sid.toml"));

        Ok(config)
    }

    fn merge_file_if_present(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                tracing::debug!(path = %path.display(), "loaded configuration overrides");
                self.merge(other);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring configuration file");
            }
        }
    }

    /// Merge another config into this one, overriding entries with the same name
    pub fn merge(&mut self, other: SidConfig) {
        self.alphabets.extend(other.alphabets);
        self.codecs.extend(other.codecs);
    }

    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    pub fn get_codec(&self, name: &str) -> Option<&CodecConfig> {
        self.codecs.get(name)
    }

    /// Builds the codec described by profile `name`.
    pub fn codec(&self, name: &str) -> Result<Codec, ConfigError> {
        let profile = self
            .get_codec(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;
        self.build(profile)
    }

    /// Builds a codec from a profile, resolving its alphabet by name.
    pub fn build(&self, profile: &CodecConfig) -> Result<Codec, ConfigError> {
        let chars = &self
            .get_alphabet(&profile.alphabet)
            .ok_or_else(|| ConfigError::UnknownAlphabet(profile.alphabet.clone()))?
            .chars;
        let alphabet = Alphabet::new(chars)?;
        Ok(Codec::from_alphabet(
            profile.min_length,
            profile.bit_width,
            profile.pad_char()?,
            alphabet,
        )?)
    }
}
