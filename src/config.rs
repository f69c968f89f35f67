use serde::Deserialize;
use std::collections::HashMap;

use crate::codec::{Codec, Family};
use crate::errors::ConfigError;
use crate::variant::CustomVariant;

/// Configuration for a single codec variant loaded from TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct VariantConfig {
    /// Block family providing the geometry (radix85, base64, base32, hex)
    pub family: Family,
    /// Ordered alphabet; its length must match the family's radix
    pub alphabet: String,
    /// Optional padding symbol (e.g. "=" for the RFC variants)
    #[serde(default)]
    pub padding: Option<String>,
    /// Whether encoding emits padding; defaults to true when a padding
    /// symbol is set
    #[serde(default)]
    pub generates_padding: Option<bool>,
    /// Whether decoding rejects inputs not ending on a full block
    #[serde(default)]
    pub requires_padding: bool,
    /// Characters skipped during decoding (e.g. "-" or "\n")
    #[serde(default)]
    pub ignore: String,
    /// Characters that terminate the encoded stream
    #[serde(default)]
    pub eof: String,
    /// Fold input symbols to the alphabet's case before classification
    #[serde(default)]
    pub case_insensitive: bool,
    /// Input symbols read as another symbol (e.g. Crockford's O -> 0)
    #[serde(default)]
    pub normalize: HashMap<String, String>,
}

impl VariantConfig {
    /// Build a runtime [`Codec`] from this configuration.
    pub fn build(&self) -> Result<Codec, ConfigError> {
        let mut variant = CustomVariant::new(self.alphabet.as_bytes())?;
        if let Some(padding) = self.padding.as_ref().and_then(|s| s.bytes().next()) {
            variant = variant.with_padding(padding)?;
        }
        if let Some(generates) = self.generates_padding {
            variant = variant.with_generates_padding(generates);
        }
        variant = variant.with_requires_padding(self.requires_padding);
        if !self.ignore.is_empty() {
            variant = variant.with_ignored(self.ignore.as_bytes())?;
        }
        if !self.eof.is_empty() {
            variant = variant.with_eof(self.eof.as_bytes())?;
        }
        if self.case_insensitive {
            variant = variant.with_case_insensitive(true);
        }
        for (from, to) in &self.normalize {
            if let (Some(from), Some(to)) = (from.bytes().next(), to.bytes().next()) {
                variant = variant.with_alias(from, to)?;
            }
        }
        Codec::new(self.family, variant)
    }
}

/// The registry of named codec variants.
#[derive(Debug, Deserialize)]
pub struct VariantsConfig {
    pub variants: HashMap<String, VariantConfig>,
}

impl VariantsConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The built-in variants embedded at compile time.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../variants.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations:
    /// 1. Start with the built-in variants
    /// 2. Override with ~/.config/base-r/variants.toml if it exists
    /// 3. Override with ./variants.toml if it exists in the current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-r").join("variants.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => config.merge(user_config),
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("variants.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => config.merge(local_config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merge another config into this one, overriding existing variants.
    pub fn merge(&mut self, other: VariantsConfig) {
        for (name, variant) in other.variants {
            self.variants.insert(name, variant);
        }
    }

    pub fn get(&self, name: &str) -> Option<&VariantConfig> {
        self.variants.get(name)
    }
}
