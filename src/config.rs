//! JSON run configuration.
//!
//! A configuration names rotors the way an operator would: left to right,
//! by catalog name (`"I"`, `"Beta"`) or as a raw wiring string. Text fields
//! may contain spaces, punctuation and lowercase; they are cleaned before
//! reaching the core.
//!
//! ```json
//! {
//!   "rotors": ["I", "II", "III"],
//!   "reflector": "B",
//!   "ciphertext": "JSJCW EEZHZ NBNNO KOTIN",
//!   "crib": "WETTERVORHERSAGE",
//!   "offset": 0,
//!   "check": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bombe::Bombe;
use crate::error::BombeError;
use crate::machine::catalog::{reflector_by_name, rotor_by_name};
use crate::machine::{Reflector, Wiring};
use crate::multi::Component;
use crate::utils::converter::sanitize;

/// Failure to load a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Bombe(#[from] BombeError),
}

/// Everything needed to set up one Bombe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BombeConfig {
    /// Rotors, left to right.
    pub rotors: Vec<String>,
    #[serde(default = "BombeConfig::default_reflector")]
    pub reflector: String,
    pub ciphertext: String,
    pub crib: String,
    /// Position in the ciphertext where the crib starts.
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "BombeConfig::default_check")]
    pub check: bool,
}

impl BombeConfig {
    fn default_reflector() -> String {
        "B".to_string()
    }

    const fn default_check() -> bool {
        true
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    /// [`ConfigError::Json`] on malformed JSON, unknown fields or missing
    /// required fields.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`BombeConfig::from_json_str`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Ciphertext from the crib offset onwards, cleaned.
    ///
    /// # Errors
    /// [`BombeError::OffsetOutOfRange`] if the offset is past the end.
    pub fn aligned_ciphertext(&self) -> Result<String, BombeError> {
        let ciphertext = sanitize(&self.ciphertext);
        if self.offset > ciphertext.len() {
            return Err(BombeError::OffsetOutOfRange {
                offset: self.offset,
                len: ciphertext.len(),
            });
        }
        Ok(ciphertext[self.offset..].to_string())
    }

    /// Sets up the Bombe described by this configuration.
    ///
    /// # Errors
    /// Unknown rotor or reflector names, a bad offset, and every error of
    /// [`Bombe::new`].
    pub fn build(&self) -> Result<Bombe, BombeError> {
        let ciphertext = self.aligned_ciphertext()?;
        let crib = sanitize(&self.crib);
        let rotors = self
            .rotors
            .iter()
            .map(|r| resolve_rotor(r))
            .collect::<Result<Vec<_>, _>>()?;
        let reflector = Reflector::parse(&resolve_reflector(&self.reflector)?.spec)?;

        // The Bombe wants the fast rotor first.
        let specs: Vec<&str> = rotors.iter().rev().map(|c| c.spec.as_str()).collect();
        Bombe::new(&specs, reflector, &ciphertext, &crib, self.check)
    }
}

/// Resolves a rotor given by catalog name or as a wiring string.
///
/// # Errors
/// [`BombeError::UnknownRotor`] if `name` is neither.
pub fn resolve_rotor(name: &str) -> Result<Component, BombeError> {
    if let Some(entry) = rotor_by_name(name) {
        return Ok(entry.into());
    }
    let spec = name.trim();
    match Wiring::parse(spec) {
        Ok(_) => Ok(Component::new(spec, spec)),
        Err(_) => Err(BombeError::UnknownRotor(name.to_string())),
    }
}

/// Resolves a reflector given by catalog name or as a pair list.
///
/// # Errors
/// [`BombeError::UnknownReflector`] if `name` is neither.
pub fn resolve_reflector(name: &str) -> Result<Component, BombeError> {
    if let Some(entry) = reflector_by_name(name) {
        return Ok(entry.into());
    }
    let spec = name.trim();
    match Reflector::parse(spec) {
        Ok(_) => Ok(Component::new(spec, spec)),
        Err(_) => Err(BombeError::UnknownReflector(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "rotors": ["I", "II", "III"],
        "ciphertext": "jsjcw eezhz nbnno kotin ghppr kpbrp",
        "crib": "Wetter vorhersage fuer"
    }"#;

    #[test]
    fn test_defaults() {
        let config = BombeConfig::from_json_str(CONFIG).unwrap();
        assert_eq!(config.reflector, "B");
        assert_eq!(config.offset, 0);
        assert!(config.check);
    }

    #[test]
    fn test_build_cleans_text() {
        let config = BombeConfig::from_json_str(CONFIG).unwrap();
        let bombe = config.build().unwrap();
        assert_eq!(bombe.rotor_count(), 3);
        assert_eq!(bombe.loops(), 2);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let raw = r#"{"rotors": ["I"], "ciphertext": "AB", "crib": "BA", "speed": 3}"#;
        assert!(matches!(
            BombeConfig::from_json_str(raw),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_offset() {
        let mut config = BombeConfig::from_json_str(CONFIG).unwrap();
        config.offset = 5;
        assert_eq!(&config.aligned_ciphertext().unwrap()[..5], "EEZHZ");
        config.offset = 31;
        assert_eq!(
            config.aligned_ciphertext().err(),
            Some(BombeError::OffsetOutOfRange { offset: 31, len: 30 })
        );
    }

    #[test]
    fn test_resolve_rotor() {
        assert_eq!(resolve_rotor("iii").unwrap().name, "III");
        let raw = "BDFHJLCPRTXVZNYEIWGAKMUSQO";
        assert_eq!(resolve_rotor(raw).unwrap().spec, raw);
        assert_eq!(
            resolve_rotor("IX").err(),
            Some(BombeError::UnknownRotor("IX".to_string()))
        );
    }

    #[test]
    fn test_resolve_reflector() {
        assert_eq!(resolve_reflector("c thin").unwrap().name, "C Thin");
        assert_eq!(
            resolve_reflector("D").err(),
            Some(BombeError::UnknownReflector("D".to_string()))
        );
    }

    #[test]
    fn test_config_error_wraps_bombe_error() {
        let err: ConfigError = BombeError::CribTooShort.into();
        assert_eq!(err.to_string(), "Crib is too short");
    }
}
