//! Reflector: a fixed, fixed-point-free involution on the alphabet.

use std::str::FromStr;

use super::pairs::parse_pairs;
use crate::error::BombeError;
use crate::utils::converter::ALPHABET_LEN;

/// Reflector wired as 13 letter pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    map: [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Parses a reflector from 13 space-separated pairs, e.g.
    /// `"AY BR CU DH EQ FS GL IP JX KN MO TZ VW"`.
    ///
    /// # Errors
    /// Returns [`BombeError::InvalidReflector`] unless the pairs cover every
    /// letter exactly once.
    pub fn parse(spec: &str) -> Result<Self, BombeError> {
        let pairs = parse_pairs(spec, false).map_err(BombeError::InvalidReflector)?;
        let mut map = [0u8; ALPHABET_LEN];
        for (i, slot) in pairs.iter().enumerate() {
            match slot {
                Some(o) => map[i] = *o,
                None => {
                    return Err(BombeError::InvalidReflector(format!(
                        "'{}' does not cover every letter",
                        spec
                    )))
                }
            }
        }
        Ok(Reflector { map })
    }

    /// Reflects a letter.
    #[inline]
    pub fn transform(&self, c: u8) -> u8 {
        self.map[c as usize]
    }
}

impl FromStr for Reflector {
    type Err = BombeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reflector::parse(s)
    }
}
