//! Scrambler: one menu edge's view of the machine.
//!
//! A scrambler is an Enigma that only ever processes one letter and never
//! carries: it owns a private copy of the fast rotor (sharing the wiring
//! table) set `offset` places ahead, and borrows everything else from the
//! [`SharedScrambler`], which is passed in explicitly rather than held as a
//! reference.

use crate::machine::Rotor;
use crate::shared_scrambler::SharedScrambler;
use crate::utils::converter::{i2a, mod26, ALPHABET_LEN};

/// Index of a scrambler within its Bombe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScramblerId(pub usize);

/// Fast rotor plus the two menu letters this scrambler connects.
pub(crate) struct Scrambler {
    rotor: Rotor,
    offset: u8,
    ends: Option<(u8, u8)>,
}

impl Scrambler {
    /// Creates a scrambler for the crib position `offset`.
    ///
    /// # Parameters
    /// - `rotor`: a fresh fast rotor (position `A`).
    /// - `offset`: crib position of the edge, added to the rotor position.
    /// - `ends`: the two menu letters wired to this scrambler, or `None` for
    ///   a pure position indicator.
    pub(crate) fn new(rotor: Rotor, offset: usize, ends: Option<(u8, u8)>) -> Self {
        let mut scrambler = Scrambler {
            rotor,
            offset: (offset % ALPHABET_LEN) as u8,
            ends,
        };
        scrambler.apply_offset();
        scrambler
    }

    /// Replaces the fast rotor; the crib offset is applied again.
    pub(crate) fn change_rotor(&mut self, rotor: Rotor) {
        self.rotor = rotor;
        self.apply_offset();
    }

    fn apply_offset(&mut self) {
        let pos = self.rotor.position() + self.offset;
        self.rotor.set_position(pos);
    }

    /// Advances the fast rotor. The shared rotors are stepped separately.
    ///
    /// A real Bombe drives the Enigma's slow rotor fastest; stepping the
    /// fast rotor fastest instead keeps most scramblers on cached routes.
    /// The same settings are visited, in a different order.
    #[inline]
    pub(crate) fn step(&mut self) {
        self.rotor.step();
    }

    /// Runs a letter through the whole scrambler.
    #[inline]
    pub(crate) fn transform(&self, shared: &mut SharedScrambler, c: u8) -> u8 {
        let pos = self.rotor.position();
        if let Some(out) = shared.cached(pos, c) {
            return out;
        }
        let mut letter = self.rotor.transform(c);
        letter = shared.transform(letter);
        letter = self.rotor.rev_transform(letter);
        shared.store(pos, c, letter);
        letter
    }

    /// Given one menu letter this scrambler is attached to, returns the other.
    ///
    /// An indicator scrambler has no ends and returns its input.
    #[inline]
    pub(crate) fn other_end(&self, end: u8) -> u8 {
        match self.ends {
            Some((a, b)) if a == end => b,
            Some((a, _)) => a,
            None => end,
        }
    }

    /// Fast-rotor position.
    pub(crate) fn position(&self) -> u8 {
        self.rotor.position()
    }

    /// Forces the fast-rotor position, used to undo trial stepping.
    pub(crate) fn set_position(&mut self, pos: u8) {
        self.rotor.set_position(pos);
    }

    /// Rotor setting a real Enigma needs to make this scrambler's connections.
    ///
    /// Enigma steps before the current flows, so the fast rotor is read one
    /// place back. Slow rotors are treated as static. Letters run slowest
    /// rotor first, as an operator would set them.
    pub(crate) fn position_string(&self, shared: &SharedScrambler) -> String {
        let mut letters = Vec::with_capacity(shared.rotors().len() + 1);
        letters.push(i2a(mod26(self.rotor.position() as i32 - 1)));
        for rotor in shared.rotors() {
            letters.push(i2a(rotor.position()));
        }
        letters.iter().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Reflector;

    const ROTOR_III: &str = "BDFHJLCPRTXVZNYEIWGAKMUSQO";
    const ROTOR_II: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";
    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
    const UKW_B: &str = "AY BR CU DH EQ FS GL IP JX KN MO TZ VW";

    fn shared() -> SharedScrambler {
        let rotors = vec![
            Rotor::from_spec(ROTOR_II).unwrap(),
            Rotor::from_spec(ROTOR_I).unwrap(),
        ];
        SharedScrambler::new(rotors, Reflector::parse(UKW_B).unwrap())
    }

    #[test]
    fn test_offset_applied_to_position() {
        let fast = Rotor::from_spec(ROTOR_III).unwrap();
        let s = Scrambler::new(fast, 27, Some((0, 1)));
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn test_transform_matches_uncached_route() {
        let mut sh = shared();
        let fast = Rotor::from_spec(ROTOR_III).unwrap();
        let s = Scrambler::new(fast.clone(), 4, Some((0, 1)));
        let mut probe = fast;
        probe.set_position(4);
        for c in 0..26u8 {
            let expected = probe.rev_transform(sh.transform(probe.transform(c)));
            assert_eq!(s.transform(&mut sh, c), expected);
            // Second call is served from the cache.
            assert_eq!(s.transform(&mut sh, c), expected);
        }
    }

    #[test]
    fn test_transform_is_involution() {
        let mut sh = shared();
        let s = Scrambler::new(Rotor::from_spec(ROTOR_III).unwrap(), 0, None);
        for c in 0..26u8 {
            let out = s.transform(&mut sh, c);
            assert_ne!(out, c);
            assert_eq!(s.transform(&mut sh, out), c);
        }
    }

    #[test]
    fn test_other_end() {
        let s = Scrambler::new(Rotor::from_spec(ROTOR_III).unwrap(), 0, Some((3, 7)));
        assert_eq!(s.other_end(3), 7);
        assert_eq!(s.other_end(7), 3);
        let indicator = Scrambler::new(Rotor::from_spec(ROTOR_III).unwrap(), 0, None);
        assert_eq!(indicator.other_end(5), 5);
    }

    #[test]
    fn test_position_string_rolls_fast_rotor_back() {
        let sh = shared();
        let s = Scrambler::new(Rotor::from_spec(ROTOR_III).unwrap(), 0, None);
        // Fast rotor at A reads as Z; shared rotors at A.
        assert_eq!(s.position_string(&sh), "AAZ");
    }

    #[test]
    fn test_step_and_change_rotor() {
        let mut s = Scrambler::new(Rotor::from_spec(ROTOR_III).unwrap(), 2, Some((0, 1)));
        s.step();
        assert_eq!(s.position(), 3);
        s.change_rotor(Rotor::from_spec(ROTOR_I).unwrap());
        assert_eq!(s.position(), 2);
    }
}
