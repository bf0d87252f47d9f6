//! SharedScrambler: the part of the machine every scrambler has in common.
//!
//! All of the Bombe's scramblers move in step, so at any moment they share
//! the positions of every rotor except the fast one. This struct owns those
//! slower rotors and the reflector, and keeps two caches:
//!
//! - `lower`: the route through the slow rotors and reflector for all 26
//!   inputs, regenerated whenever the slow rotors move.
//! - `higher`: full routes including the fast rotor, keyed by fast-rotor
//!   position and filled lazily by [`Scrambler`](crate::scrambler::Scrambler)s.
//!   After the fast rotor steps, most scramblers land on a position another
//!   scrambler has already computed.
//!
//! Both routes are involutions (a reflector sits in the middle), so every
//! lookup fills two cache entries.

use crate::machine::{Reflector, Rotor};
use crate::utils::converter::ALPHABET_LEN;

/// Marker for a cache slot that has not been computed yet.
const UNSET: u8 = u8::MAX;

/// Slow rotors, reflector and the route caches built on them.
pub(crate) struct SharedScrambler {
    /// Ordered from the second-fastest rotor to the slowest.
    rotors: Vec<Rotor>,
    reflector: Reflector,
    lower: [u8; ALPHABET_LEN],
    higher: [[u8; ALPHABET_LEN]; ALPHABET_LEN],
}

impl SharedScrambler {
    /// Creates the shared state for the given slow rotors and reflector.
    ///
    /// # Parameters
    /// - `rotors`: every rotor except the fast one, ordered fast to slow.
    /// - `reflector`: the reflector in use.
    pub(crate) fn new(rotors: Vec<Rotor>, reflector: Reflector) -> Self {
        let mut shared = SharedScrambler {
            rotors,
            reflector,
            lower: [UNSET; ALPHABET_LEN],
            higher: [[UNSET; ALPHABET_LEN]; ALPHABET_LEN],
        };
        shared.cache_gen();
        shared
    }

    /// Replaces the slow rotors and reflector and flushes both caches.
    pub(crate) fn change_rotors(&mut self, rotors: Vec<Rotor>, reflector: Reflector) {
        self.rotors = rotors;
        self.reflector = reflector;
        self.cache_gen();
    }

    /// Steps the slow rotors after a carry.
    ///
    /// # Parameters
    /// - `n`: how many rotors move on this step, counting the fast rotor,
    ///   so the first `n - 1` shared rotors advance by one.
    pub(crate) fn step(&mut self, n: usize) {
        for rotor in self.rotors.iter_mut().take(n.saturating_sub(1)) {
            rotor.step();
        }
        self.cache_gen();
    }

    /// Clears `higher` and recomputes `lower` for the current positions.
    fn cache_gen(&mut self) {
        self.lower = [UNSET; ALPHABET_LEN];
        for row in self.higher.iter_mut() {
            *row = [UNSET; ALPHABET_LEN];
        }
        for i in 0..ALPHABET_LEN as u8 {
            if self.lower[i as usize] != UNSET {
                continue;
            }
            let mut letter = i;
            for rotor in &self.rotors {
                letter = rotor.transform(letter);
            }
            letter = self.reflector.transform(letter);
            for rotor in self.rotors.iter().rev() {
                letter = rotor.rev_transform(letter);
            }
            self.lower[i as usize] = letter;
            self.lower[letter as usize] = i;
        }
    }

    /// Maps a letter through the slow rotors, reflector and back.
    #[inline]
    pub(crate) fn transform(&self, c: u8) -> u8 {
        self.lower[c as usize]
    }

    /// Cached full route for a scrambler whose fast rotor sits at `fast_pos`.
    #[inline]
    pub(crate) fn cached(&self, fast_pos: u8, c: u8) -> Option<u8> {
        match self.higher[fast_pos as usize][c as usize] {
            UNSET => None,
            out => Some(out),
        }
    }

    /// Records that `a` and `b` are connected at fast-rotor position `fast_pos`.
    #[inline]
    pub(crate) fn store(&mut self, fast_pos: u8, a: u8, b: u8) {
        let row = &mut self.higher[fast_pos as usize];
        row[a as usize] = b;
        row[b as usize] = a;
    }

    /// The slow rotors, fast to slow.
    pub(crate) fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn direct(s: &SharedScrambler, c: u8) -> u8 {
        let mut letter = c;
        for r in s.rotors() {
            letter = r.transform(letter);
        }
        letter = s.reflector.transform(letter);
        for r in s.rotors().iter().rev() {
            letter = r.rev_transform(letter);
        }
        letter
    }

    #[test]
    fn test_lower_cache_matches_direct_route() {
        let s = shared();
        for c in 0..26u8 {
            assert_eq!(s.transform(c), direct(&s, c));
        }
    }

    #[test]
    fn test_lower_cache_is_involution() {
        let s = shared();
        for c in 0..26u8 {
            assert_eq!(s.transform(s.transform(c)), c);
            assert_ne!(s.transform(c), c);
        }
    }

    #[test]
    fn test_step_moves_only_carried_rotors() {
        let mut s = shared();
        s.step(1);
        assert_eq!(s.rotors()[0].position(), 0);
        s.step(2);
        assert_eq!(s.rotors()[0].position(), 1);
        assert_eq!(s.rotors()[1].position(), 0);
        s.step(3);
        assert_eq!(s.rotors()[0].position(), 2);
        assert_eq!(s.rotors()[1].position(), 1);
    }

    #[test]
    fn test_step_regenerates_cache() {
        let mut s = shared();
        s.step(2);
        for c in 0..26u8 {
            assert_eq!(s.transform(c), direct(&s, c));
        }
    }

    #[test]
    fn test_higher_cache_store_and_flush() {
        let mut s = shared();
        assert_eq!(s.cached(3, 5), None);
        s.store(3, 5, 9);
        assert_eq!(s.cached(3, 5), Some(9));
        assert_eq!(s.cached(3, 9), Some(5));
        s.step(2);
        assert_eq!(s.cached(3, 5), None);
    }

    #[test]
    fn test_change_rotors_flushes() {
        let mut s = shared();
        s.store(0, 1, 2);
        let rotors = vec![
            Rotor::from_spec(ROTOR_I).unwrap(),
            Rotor::from_spec(ROTOR_II).unwrap(),
        ];
        s.change_rotors(rotors, Reflector::parse(UKW_B).unwrap());
        assert_eq!(s.cached(0, 1), None);
        for c in 0..26u8 {
            assert_eq!(s.transform(c), direct(&s, c));
        }
    }
}
