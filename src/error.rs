//! Error types for the Bombe library.

use thiserror::Error;

/// Errors produced by the Bombe library.
///
/// Every variant is a configuration problem detected before a run starts.
/// A rotor setting that fails to produce a stop is a normal outcome and is
/// never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BombeError {
    /// The crib is longer than the ciphertext it is aligned against.
    #[error("Crib overruns supplied ciphertext")]
    CribOverrunsCiphertext,
    /// The crib has fewer than 2 letters.
    #[error("Crib is too short")]
    CribTooShort,
    /// The crib has more than 25 letters.
    #[error("Crib is too long")]
    CribTooLong,
    /// Crib and ciphertext share a letter at the same position.
    #[error("Invalid crib: character {letter} at pos {position} in both ciphertext and crib")]
    SelfMappedLetter {
        /// The shared letter.
        letter: char,
        /// Offset from the start of the crib.
        position: usize,
    },
    /// A character outside `A`..`Z` reached the core.
    #[error("Invalid character '{0}': expected an uppercase letter A-Z")]
    InvalidLetter(char),
    /// A rotor wiring string is not a permutation of the alphabet.
    #[error("Rotor wiring must be 26 unique uppercase letters: {0}")]
    InvalidRotorWiring(String),
    /// A reflector specification is not 13 pairs covering every letter.
    #[error("Reflector must be exactly 13 pairs covering every letter: {0}")]
    InvalidReflector(String),
    /// A plugboard specification is malformed.
    #[error("Invalid plugboard specification: {0}")]
    InvalidPlugboard(String),
    /// The number of rotors is outside the supported range.
    #[error("Number of rotors must be between {min} and {max}, got {got}")]
    InvalidRotorCount {
        /// Minimum accepted rotor count.
        min: usize,
        /// Maximum accepted rotor count.
        max: usize,
        /// Rotor count supplied.
        got: usize,
    },
    /// A rotor pool cannot fill every rotor slot with a distinct rotor.
    #[error("Rotor pool needs at least {needed} rotors, got {got}")]
    RotorPoolTooSmall {
        /// Distinct rotors required.
        needed: usize,
        /// Rotors in the pool.
        got: usize,
    },
    /// A search was requested with no reflectors to try.
    #[error("Reflector pool is empty")]
    EmptyReflectorPool,
    /// A rotor name is not in the catalog and is not a valid wiring.
    #[error("Unknown rotor: {0}")]
    UnknownRotor(String),
    /// A reflector name is not in the catalog and is not a valid pair list.
    #[error("Unknown reflector: {0}")]
    UnknownReflector(String),
    /// The crib offset points past the end of the ciphertext.
    #[error("Crib offset {offset} is beyond the end of the ciphertext ({len} letters)")]
    OffsetOutOfRange {
        /// Requested offset.
        offset: usize,
        /// Ciphertext length.
        len: usize,
    },
    /// Ring settings or start positions do not match the rotor count.
    #[error("Expected {expected} letters for {what}, got {got}")]
    SettingLength {
        /// Which setting was malformed.
        what: &'static str,
        /// Number of rotors.
        expected: usize,
        /// Letters supplied.
        got: usize,
    },
}
