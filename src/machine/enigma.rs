//! A complete Enigma machine: plugboard, three or four rotors, reflector.
//!
//! The Bombe never needs this (it only models the scrambler), but it is
//! the natural way to produce matching ciphertext/crib pairs and to check
//! a recovered key by decrypting with it.

use std::sync::Arc;

use super::{Plugboard, Reflector, Rotor, Wiring};
use crate::error::BombeError;
use crate::utils::converter::{a2i, i2a, letters};

/// Smallest supported rotor count.
const MIN_ROTORS: usize = 3;

/// Largest supported rotor count (M4 with a fourth, non-stepping rotor).
const MAX_ROTORS: usize = 4;

/// Enigma machine with regular stepping and the double-step anomaly.
#[derive(Debug, Clone)]
pub struct EnigmaMachine {
    /// Ordered right (fast) to left.
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl EnigmaMachine {
    /// Builds a machine.
    ///
    /// # Parameters
    /// - `rotors`: wiring specs ordered left to right as seen by the operator.
    /// - `reflector`: the reflector.
    /// - `rings`: ring settings, one letter per rotor, left to right.
    /// - `positions`: start window letters, one per rotor, left to right.
    /// - `plugboard`: the plugboard.
    ///
    /// # Errors
    /// Returns [`BombeError::InvalidRotorCount`] for anything but 3 or 4
    /// rotors, [`BombeError::SettingLength`] when `rings` or `positions` do
    /// not have one letter per rotor, and parse errors for bad wirings.
    pub fn new(
        rotors: &[&str],
        reflector: Reflector,
        rings: &str,
        positions: &str,
        plugboard: Plugboard,
    ) -> Result<Self, BombeError> {
        if !(MIN_ROTORS..=MAX_ROTORS).contains(&rotors.len()) {
            return Err(BombeError::InvalidRotorCount {
                min: MIN_ROTORS,
                max: MAX_ROTORS,
                got: rotors.len(),
            });
        }
        let rings = Self::setting_letters(rings, "ring settings", rotors.len())?;
        let positions = Self::setting_letters(positions, "rotor positions", rotors.len())?;

        let mut built = Vec::with_capacity(rotors.len());
        for ((spec, ring), pos) in rotors.iter().zip(rings).zip(positions).rev() {
            let wiring = Arc::new(Wiring::parse(spec)?);
            built.push(Rotor::new(wiring, ring, pos));
        }

        Ok(EnigmaMachine {
            rotors: built,
            reflector,
            plugboard,
        })
    }

    fn setting_letters(
        setting: &str,
        what: &'static str,
        expected: usize,
    ) -> Result<Vec<u8>, BombeError> {
        let parsed = letters(setting.trim())?;
        if parsed.len() != expected {
            return Err(BombeError::SettingLength {
                what,
                expected,
                got: parsed.len(),
            });
        }
        Ok(parsed)
    }

    /// Advances the rotors for one key press.
    ///
    /// Only the three rightmost rotors step. A middle rotor sitting on its
    /// notch steps itself and its left neighbour (double step).
    pub fn step(&mut self) {
        if self.rotors[1].at_notch() {
            self.rotors[1].step();
            self.rotors[2].step();
        } else if self.rotors[0].at_notch() {
            self.rotors[1].step();
        }
        self.rotors[0].step();
    }

    /// Presses one key: steps, then encrypts the letter.
    pub fn encrypt_letter(&mut self, c: u8) -> u8 {
        self.step();
        let mut letter = self.plugboard.transform(c);
        for rotor in &self.rotors {
            letter = rotor.transform(letter);
        }
        letter = self.reflector.transform(letter);
        for rotor in self.rotors.iter().rev() {
            letter = rotor.rev_transform(letter);
        }
        self.plugboard.transform(letter)
    }

    /// Encrypts (or, equivalently, decrypts) a string of uppercase letters.
    ///
    /// # Errors
    /// Returns [`BombeError::InvalidLetter`] on any character outside `A`..`Z`.
    /// The machine state is only advanced for letters before the error.
    pub fn encrypt(&mut self, text: &str) -> Result<String, BombeError> {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            let l = a2i(c)?;
            out.push(i2a(self.encrypt_letter(l)));
        }
        Ok(out)
    }

    /// Current window letters, left to right.
    pub fn positions(&self) -> String {
        self.rotors.iter().rev().map(|r| i2a(r.window())).collect()
    }
}
