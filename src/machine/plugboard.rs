//! Plugboard (Steckerbrett): letter swaps applied either side of the rotors.

use std::str::FromStr;

use super::pairs::parse_pairs;
use crate::error::BombeError;
use crate::utils::converter::ALPHABET_LEN;

/// Partial letter-swap table; unplugged letters map to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    map: [u8; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// A plugboard with no cables.
    pub fn identity() -> Self {
        let mut map = [0u8; ALPHABET_LEN];
        for (i, m) in map.iter_mut().enumerate() {
            *m = i as u8;
        }
        Plugboard { map }
    }

    /// Parses a space-separated pair list such as `"AR GK OX"`.
    ///
    /// A letter paired with itself is accepted and means "unplugged".
    ///
    /// # Errors
    /// Returns [`BombeError::InvalidPlugboard`] for malformed pairs or a
    /// letter used twice.
    pub fn parse(spec: &str) -> Result<Self, BombeError> {
        let pairs = parse_pairs(spec, true).map_err(BombeError::InvalidPlugboard)?;
        let mut board = Self::identity();
        for (i, slot) in pairs.iter().enumerate() {
            if let Some(o) = slot {
                board.map[i] = *o;
            }
        }
        Ok(board)
    }

    /// Builds a plugboard from already-validated letter pairs.
    ///
    /// Pairs are expected to be mutually consistent; a later pair simply
    /// overwrites an earlier one touching the same letter.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        let mut board = Self::identity();
        for &(a, b) in pairs {
            board.map[a as usize % ALPHABET_LEN] = b % ALPHABET_LEN as u8;
            board.map[b as usize % ALPHABET_LEN] = a % ALPHABET_LEN as u8;
        }
        board
    }

    /// Swaps a letter through the plugboard.
    #[inline]
    pub fn transform(&self, c: u8) -> u8 {
        self.map[c as usize]
    }
}

impl FromStr for Plugboard {
    type Err = BombeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plugboard::parse(s)
    }
}
