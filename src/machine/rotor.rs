//! Rotor wiring tables and positioned rotors.
//!
//! A [`Wiring`] is parsed once and shared through an [`Arc`]; every
//! [`Rotor`] built from it carries only its own ring setting and position.
//! The Bombe relies on this to hand the same fast-rotor table to dozens of
//! scramblers without duplicating it.

use std::str::FromStr;
use std::sync::Arc;

use crate::error::BombeError;
use crate::utils::converter::{a2i, mod26, ALPHABET_LEN};

/// Immutable rotor wiring: forward and backward letter maps plus the
/// turnover notches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    forward: [u8; ALPHABET_LEN],
    backward: [u8; ALPHABET_LEN],
    notches: Vec<u8>,
}

impl Wiring {
    /// Parses a wiring specification.
    ///
    /// The specification is a permutation of `A`..`Z` giving the output
    /// contact for each input contact, optionally followed by `<` and the
    /// notch letters (the window letters at which this rotor carries the
    /// next one), e.g. `"EKMFLGDQVZNTOWYHXUSPAIBRCJ<Q"`.
    ///
    /// # Errors
    /// Returns [`BombeError::InvalidRotorWiring`] if the permutation part is
    /// not exactly 26 distinct uppercase letters or a notch is not a letter.
    pub fn parse(spec: &str) -> Result<Self, BombeError> {
        let invalid = || BombeError::InvalidRotorWiring(spec.to_string());
        let (perm, notch_spec) = match spec.split_once('<') {
            Some((perm, notches)) => (perm, notches),
            None => (spec, ""),
        };

        let chars: Vec<char> = perm.trim().chars().collect();
        if chars.len() != ALPHABET_LEN {
            return Err(invalid());
        }
        let mut forward = [0u8; ALPHABET_LEN];
        let mut backward = [u8::MAX; ALPHABET_LEN];
        for (i, &c) in chars.iter().enumerate() {
            let out = a2i(c).map_err(|_| invalid())?;
            if backward[out as usize] != u8::MAX {
                return Err(invalid());
            }
            forward[i] = out;
            backward[out as usize] = i as u8;
        }

        let mut notches = Vec::new();
        for c in notch_spec.trim().chars() {
            let n = a2i(c).map_err(|_| invalid())?;
            if !notches.contains(&n) {
                notches.push(n);
            }
        }

        Ok(Wiring {
            forward,
            backward,
            notches,
        })
    }

    /// Maps a contact on the right-hand side to the left-hand side.
    pub fn forward(&self, c: u8) -> u8 {
        self.forward[c as usize]
    }

    /// Maps a contact on the left-hand side back to the right-hand side.
    pub fn backward(&self, c: u8) -> u8 {
        self.backward[c as usize]
    }

    /// Window letters at which this rotor carries its left neighbour.
    pub fn notches(&self) -> &[u8] {
        &self.notches
    }
}

impl FromStr for Wiring {
    type Err = BombeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Wiring::parse(s)
    }
}

/// A rotor placed in a machine: shared wiring, ring setting and position.
///
/// `position` is the internal offset of the wiring core, i.e. the visible
/// window letter minus the ring setting.
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: Arc<Wiring>,
    ring: u8,
    pos: u8,
}

impl Rotor {
    /// Places `wiring` with the given ring setting and visible start letter.
    pub fn new(wiring: Arc<Wiring>, ring_setting: u8, window: u8) -> Self {
        Rotor {
            wiring,
            ring: ring_setting % ALPHABET_LEN as u8,
            pos: mod26(window as i32 - ring_setting as i32),
        }
    }

    /// Builds a rotor with ring setting and position `A` from a wiring spec.
    ///
    /// # Errors
    /// Propagates [`Wiring::parse`] failures.
    pub fn from_spec(spec: &str) -> Result<Self, BombeError> {
        Ok(Rotor::new(Arc::new(Wiring::parse(spec)?), 0, 0))
    }

    /// Returns a rotor sharing this one's wiring, reset to ring `A`, position `A`.
    pub fn fresh_copy(&self) -> Self {
        Rotor::new(Arc::clone(&self.wiring), 0, 0)
    }

    /// Passes a letter right-to-left through the rotor at its current position.
    #[inline]
    pub fn transform(&self, c: u8) -> u8 {
        let p = self.pos as usize;
        let out = self.wiring.forward[(c as usize + p) % ALPHABET_LEN] as usize;
        ((out + ALPHABET_LEN - p) % ALPHABET_LEN) as u8
    }

    /// Passes a letter left-to-right through the rotor at its current position.
    #[inline]
    pub fn rev_transform(&self, c: u8) -> u8 {
        let p = self.pos as usize;
        let out = self.wiring.backward[(c as usize + p) % ALPHABET_LEN] as usize;
        ((out + ALPHABET_LEN - p) % ALPHABET_LEN) as u8
    }

    /// Advances the rotor by one position.
    #[inline]
    pub fn step(&mut self) {
        self.pos = (self.pos + 1) % ALPHABET_LEN as u8;
    }

    /// Internal core offset (`0..26`).
    pub fn position(&self) -> u8 {
        self.pos
    }

    /// Sets the internal core offset; taken modulo 26.
    pub fn set_position(&mut self, pos: u8) {
        self.pos = pos % ALPHABET_LEN as u8;
    }

    /// Letter visible in the machine window.
    pub fn window(&self) -> u8 {
        (self.pos + self.ring) % ALPHABET_LEN as u8
    }

    /// Whether the next key press carries the neighbouring rotor.
    pub fn at_notch(&self) -> bool {
        self.wiring.notches.contains(&self.window())
    }

    /// The shared wiring table.
    pub fn wiring(&self) -> &Arc<Wiring> {
        &self.wiring
    }
}
