//! Bombe: exhaustive search of rotor settings consistent with a crib.
//!
//! The machine is wired from the menu: 26 bundles of 26 wires (one bundle
//! per letter, one wire per possible plugboard partner), a scrambler for
//! every menu edge joining the bundles of its two letters, and Welchman's
//! diagonal board joining wire `j` of bundle `i` to wire `i` of bundle `j`.
//!
//! For each rotor setting the machine assumes one plugboard pair for the
//! most connected letter (the test register), lets current flow from it,
//! and counts how many wires of the test register end up live:
//!
//! ```text
//! 26     every hypothesis contradicts itself  -> no stop
//! 25     all but one wire live                -> the dead wire is the pair
//! 1      only the assumed wire live           -> the assumption holds
//! 2..24  boxing stop                          -> checking machine decides
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::error::BombeError;
use crate::machine::{Plugboard, Reflector, Rotor};
use crate::menu::Menu;
use crate::scrambler::{Scrambler, ScramblerId};
use crate::shared_scrambler::SharedScrambler;
use crate::utils::converter::{i2a, letters, ALPHABET_LEN};

/// Smallest number of rotors a Bombe can be set up with.
pub const MIN_ROTORS: usize = 1;

/// Largest number of rotors a Bombe can be set up with.
pub const MAX_ROTORS: usize = 4;

/// Plugboard field reported for stops the machine could not resolve.
pub const UNKNOWN_STECKERS: &str = "??";

/// Longest trial decryption shown for a stop. Beyond 26 letters the middle
/// rotor is certain to have moved, which the preview does not model.
const PREVIEW_LEN: usize = 26;

/// Number of wires: 26 bundles of 26.
const WIRE_COUNT: usize = ALPHABET_LEN * ALPHABET_LEN;

/// A rotor setting that survived the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Start position, one letter per rotor, slowest rotor first.
    pub setting: String,
    /// Inferred plugboard pairs (`"AB CD"`), or [`UNKNOWN_STECKERS`].
    pub steckers: String,
    /// Trial decryption of the start of the ciphertext.
    pub preview: String,
}

impl Candidate {
    /// Whether the plugboard could not be determined for this stop.
    pub fn is_unknown_steckers(&self) -> bool {
        self.steckers == UNKNOWN_STECKERS
    }
}

/// Progress report passed to the callback of [`Bombe::run_with_progress`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Loops in the menu.
    pub loops: usize,
    /// Stops found so far.
    pub stops: usize,
    /// Fraction of rotor settings tried, in `(0, 1]`.
    pub fraction: f64,
}

/// A configured Bombe, ready to run.
pub struct Bombe {
    ciphertext: Vec<u8>,
    rotor_count: usize,
    check: bool,
    loops: usize,
    wires: [bool; WIRE_COUNT],
    energise_count: usize,
    /// Hypothesis the wire table currently holds, if it holds a clean one.
    energised_with: Option<u8>,
    shared: SharedScrambler,
    scramblers: Vec<Scrambler>,
    /// Scramblers attached to each letter's bundle.
    registers: Vec<Vec<ScramblerId>>,
    /// Scrambler at crib offset 0, used to read the setting.
    indicator: ScramblerId,
    test_register: u8,
    test_input: u8,
    steps_taken: usize,
}

impl Bombe {
    /// Sets up a Bombe.
    ///
    /// The crib must line up with the start of `ciphertext`; no attempt is
    /// made to find a better alignment. Rotor stepping inside the crib is not
    /// modelled, so a crib that spans a middle-rotor turnover will be missed.
    ///
    /// # Parameters
    /// - `rotors`: wiring specs ordered fast to slow (Enigma right to left).
    ///   Notch suffixes are accepted and ignored.
    /// - `reflector`: the reflector.
    /// - `ciphertext`: uppercase ciphertext.
    /// - `crib`: uppercase known plaintext for the start of the ciphertext.
    /// - `check`: run the checking machine on stops.
    ///
    /// # Errors
    /// Any crib problem from [`Menu::build`], [`BombeError::InvalidLetter`]
    /// for non-letters, [`BombeError::InvalidRotorCount`] and wiring parse
    /// errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use bombe::{Bombe, Reflector};
    ///
    /// let reflector = Reflector::parse("AY BR CU DH EQ FS GL IP JX KN MO TZ VW").unwrap();
    /// let err = Bombe::new(&["BDFHJLCPRTXVZNYEIWGAKMUSQO"], reflector, "ABC", "ABD", true);
    /// assert!(err.is_err());
    /// ```
    pub fn new(
        rotors: &[&str],
        reflector: Reflector,
        ciphertext: &str,
        crib: &str,
        check: bool,
    ) -> Result<Self, BombeError> {
        let ciphertext = letters(ciphertext)?;
        let crib = letters(crib)?;
        let mut menu = Menu::build(&ciphertext, &crib)?;
        let base = Self::init_rotors(rotors)?;
        let subgraph = menu.best_subgraph();

        let shared = SharedScrambler::new(base[1..].to_vec(), reflector);
        let mut scramblers = Vec::with_capacity(subgraph.edges.len() + 1);
        let mut registers = vec![Vec::new(); ALPHABET_LEN];
        let mut indicator = None;
        for edge in &subgraph.edges {
            let id = ScramblerId(scramblers.len());
            scramblers.push(Scrambler::new(
                base[0].fresh_copy(),
                edge.position,
                Some((edge.crib, edge.cipher)),
            ));
            if edge.position == 0 {
                indicator = Some(id);
            }
            registers[edge.crib as usize].push(id);
            registers[edge.cipher as usize].push(id);
        }
        // The real machine keeps a separate indicator drum; reuse the offset-0
        // scrambler when the menu has one.
        let indicator = match indicator {
            Some(id) => id,
            None => {
                scramblers.push(Scrambler::new(base[0].fresh_copy(), 0, None));
                ScramblerId(scramblers.len() - 1)
            }
        };

        debug!(
            test_register = %i2a(subgraph.most_connected),
            test_input = %i2a(subgraph.first_neighbour),
            scramblers = scramblers.len(),
            "bombe wired"
        );

        Ok(Bombe {
            ciphertext,
            rotor_count: base.len(),
            check,
            loops: subgraph.loops,
            wires: [false; WIRE_COUNT],
            energise_count: 0,
            energised_with: None,
            shared,
            scramblers,
            registers,
            indicator,
            test_register: subgraph.most_connected,
            test_input: subgraph.first_neighbour,
            steps_taken: 0,
        })
    }

    fn init_rotors(rotors: &[&str]) -> Result<Vec<Rotor>, BombeError> {
        if !(MIN_ROTORS..=MAX_ROTORS).contains(&rotors.len()) {
            return Err(BombeError::InvalidRotorCount {
                min: MIN_ROTORS,
                max: MAX_ROTORS,
                got: rotors.len(),
            });
        }
        rotors.iter().map(|spec| Rotor::from_spec(spec)).collect()
    }

    /// Swaps in a new rotor set and reflector, keeping the menu.
    ///
    /// All rotors return to position `A`.
    ///
    /// # Errors
    /// [`BombeError::InvalidRotorCount`] or a wiring parse error; the Bombe
    /// is left unchanged in that case.
    pub fn change_rotors(&mut self, rotors: &[&str], reflector: Reflector) -> Result<(), BombeError> {
        let base = Self::init_rotors(rotors)?;
        self.shared.change_rotors(base[1..].to_vec(), reflector);
        for scrambler in &mut self.scramblers {
            scrambler.change_rotor(base[0].fresh_copy());
        }
        self.rotor_count = base.len();
        self.steps_taken = 0;
        self.reset_wires();
        Ok(())
    }

    /// Loops in the selected menu; more loops means fewer false stops.
    pub fn loops(&self) -> usize {
        self.loops
    }

    /// The letter whose bundle is measured.
    pub fn test_register(&self) -> u8 {
        self.test_register
    }

    /// The plugboard partner assumed for the test register on every trial.
    pub fn test_input(&self) -> u8 {
        self.test_input
    }

    /// Number of rotors in use.
    pub fn rotor_count(&self) -> usize {
        self.rotor_count
    }

    /// Rotor settings a full run tries: 26 to the power of the rotor count.
    pub fn total_positions(&self) -> usize {
        ALPHABET_LEN.pow(self.rotor_count as u32)
    }

    /// Live wires on the test register since the last reset.
    pub fn energised_count(&self) -> usize {
        self.energise_count
    }

    /// Whether wire `j` of bundle `i` is live.
    pub fn is_energised(&self, i: u8, j: u8) -> bool {
        self.wires[Self::wire(i, j)]
    }

    #[inline]
    fn wire(i: u8, j: u8) -> usize {
        ALPHABET_LEN * i as usize + j as usize
    }

    /// De-energises every wire.
    pub fn reset_wires(&mut self) {
        self.wires = [false; WIRE_COUNT];
        self.energise_count = 0;
        self.energised_with = None;
    }

    /// Energises wire `j` of bundle `i` and everything connected to it.
    ///
    /// Stops early once all 26 wires of the test register are live.
    pub fn energise(&mut self, i: u8, j: u8) {
        self.energised_with = None;
        self.energise_from(i, j);
    }

    /// Clears the board and energises the hypothesis that the test register
    /// is plugged to `pair`.
    fn energise_hypothesis(&mut self, pair: u8) {
        self.reset_wires();
        self.energise_from(self.test_register, pair);
        self.energised_with = Some(pair);
    }

    fn energise_from(&mut self, i: u8, j: u8) {
        let idx = Self::wire(i, j);
        if self.wires[idx] {
            return;
        }
        self.wires[idx] = true;
        // Diagonal board: if i is plugged to j, j is plugged to i.
        self.wires[Self::wire(j, i)] = true;
        if i == self.test_register || j == self.test_register {
            self.energise_count += 1;
            if self.energise_count == ALPHABET_LEN {
                return;
            }
        }

        if self.propagate(i, j) || i == j {
            return;
        }
        self.propagate(j, i);
    }

    /// Feeds `letter` through every scrambler on `register`'s bundle.
    ///
    /// Returns `true` once the test register is saturated.
    fn propagate(&mut self, register: u8, letter: u8) -> bool {
        let attached = self.registers[register as usize].len();
        for k in 0..attached {
            let id = self.registers[register as usize][k];
            let scrambler = &self.scramblers[id.0];
            let out = scrambler.transform(&mut self.shared, letter);
            let other = scrambler.other_end(register);
            if !self.wires[Self::wire(other, out)] {
                self.energise_from(other, out);
                if self.energise_count == ALPHABET_LEN {
                    return true;
                }
            }
        }
        false
    }

    /// Steps every scrambler one setting, carrying into slower rotors.
    ///
    /// # Returns
    /// How many rotors moved, counting the fast rotor.
    pub fn step(&mut self) -> usize {
        self.steps_taken = (self.steps_taken + 1) % self.total_positions();
        // Wires left from the last setting no longer belong to any hypothesis.
        self.energised_with = None;
        let mut n = 1;
        let mut period = 1;
        for _ in 1..self.rotor_count {
            period *= ALPHABET_LEN;
            if self.steps_taken % period == 0 {
                n += 1;
            } else {
                break;
            }
        }
        if n > 1 {
            self.shared.step(n);
        }
        for scrambler in &mut self.scramblers {
            scrambler.step();
        }
        n
    }

    /// Start position an Enigma needs for the setting currently under test.
    pub fn indicator_position(&self) -> String {
        self.scramblers[self.indicator.0].position_string(&self.shared)
    }

    /// Decrypts the start of the ciphertext at the current setting.
    ///
    /// Only the supplied plugboard pairs are applied and the middle rotor is
    /// held still, so the result is at most 26 letters. The indicator
    /// position is restored afterwards.
    pub fn try_decrypt(&mut self, steckers: &[(u8, u8)]) -> String {
        let plugboard = Plugboard::from_pairs(steckers);
        let indicator = self.indicator.0;
        let initial = self.scramblers[indicator].position();
        let len = self.ciphertext.len().min(PREVIEW_LEN);
        let mut out = String::with_capacity(len);
        for k in 0..len {
            let c = plugboard.transform(self.ciphertext[k]);
            let t = self.scramblers[indicator].transform(&mut self.shared, c);
            out.push(i2a(plugboard.transform(t)));
            self.scramblers[indicator].step();
        }
        self.scramblers[indicator].set_position(initial);
        out
    }

    /// Checking machine: assumes the test register is plugged to `pair` and
    /// reads off the implied partner of every letter.
    ///
    /// # Returns
    /// `None` if some letter ends up with more than one live wire (a
    /// contradiction), otherwise every implied pair, starting with the
    /// assumed one.
    pub fn checking_machine(&mut self, pair: u8) -> Option<Vec<(u8, u8)>> {
        if self.energised_with != Some(pair) {
            self.energise_hypothesis(pair);
        }

        let mut pairs = vec![ordered(self.test_register, pair)];
        for i in 0..ALPHABET_LEN as u8 {
            let mut live = (0..ALPHABET_LEN as u8).filter(|&j| self.wires[Self::wire(i, j)]);
            let Some(partner) = live.next() else {
                continue;
            };
            if live.next().is_some() {
                trace!(
                    hypothesis = %i2a(pair),
                    letter = %i2a(i),
                    "checking machine contradiction"
                );
                return None;
            }
            let p = ordered(i, partner);
            if !pairs.contains(&p) {
                pairs.push(p);
            }
        }
        Some(pairs)
    }

    /// Interprets the wire table after a trial.
    ///
    /// # Returns
    /// A candidate if the setting is a stop that survives checking.
    pub fn check_stop(&mut self) -> Option<Candidate> {
        let count = self.energise_count;
        if count == ALPHABET_LEN {
            return None;
        }
        let t = self.test_register;
        let pair = match count {
            // The hypothesis was wrong; the one dead wire is the right one.
            25 => (0..ALPHABET_LEN as u8).find(|&j| !self.wires[Self::wire(t, j)])?,
            // The hypothesis was right.
            1 => self.test_input,
            _ => return self.boxing_stop(),
        };
        let steckers = if self.check {
            self.checking_machine(pair)?
        } else {
            vec![(t, pair)]
        };
        Some(self.candidate(&steckers))
    }

    /// A stop with no single hypothesis: try all 26 on the checking machine.
    fn boxing_stop(&mut self) -> Option<Candidate> {
        if !self.check {
            return Some(self.unknown_candidate());
        }
        let mut found = None;
        for pair in 0..ALPHABET_LEN as u8 {
            if let Some(steckers) = self.checking_machine(pair) {
                if found.is_some() {
                    return Some(self.unknown_candidate());
                }
                found = Some(steckers);
            }
        }
        found.map(|steckers| self.candidate(&steckers))
    }

    fn candidate(&mut self, steckers: &[(u8, u8)]) -> Candidate {
        Candidate {
            setting: self.indicator_position(),
            steckers: format_steckers(steckers),
            preview: self.try_decrypt(steckers),
        }
    }

    fn unknown_candidate(&mut self) -> Candidate {
        Candidate {
            setting: self.indicator_position(),
            steckers: UNKNOWN_STECKERS.to_string(),
            preview: self.try_decrypt(&[]),
        }
    }

    /// Tries every rotor setting and returns the stops.
    pub fn run(&mut self) -> Vec<Candidate> {
        self.run_with_progress(|_| {})
    }

    /// Tries every rotor setting, reporting progress each time the carry
    /// reaches the third rotor.
    pub fn run_with_progress<F>(&mut self, mut progress: F) -> Vec<Candidate>
    where
        F: FnMut(Progress),
    {
        let total = self.total_positions();
        info!(
            rotors = self.rotor_count,
            positions = total,
            loops = self.loops,
            check = self.check,
            "bombe run started"
        );

        let mut result = Vec::new();
        for i in 1..=total {
            self.energise_hypothesis(self.test_input);
            if let Some(stop) = self.check_stop() {
                debug!(setting = %stop.setting, steckers = %stop.steckers, "stop");
                result.push(stop);
            }
            let moved = self.step();
            if moved > 2 {
                progress(Progress {
                    loops: self.loops,
                    stops: result.len(),
                    fraction: i as f64 / total as f64,
                });
            }
        }

        info!(stops = result.len(), "bombe run finished");
        result
    }
}

/// Orders a pair so each plugboard cable is reported once.
fn ordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Formats plugboard pairs as space-separated letter pairs.
pub(crate) fn format_steckers(pairs: &[(u8, u8)]) -> String {
    pairs
        .iter()
        .map(|&(a, b)| format!("{}{}", i2a(a), i2a(b)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::converter::a2i;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
    const ROTOR_II: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";
    const ROTOR_III: &str = "BDFHJLCPRTXVZNYEIWGAKMUSQO";
    const UKW_B: &str = "AY BR CU DH EQ FS GL IP JX KN MO TZ VW";

    // WETTERVORHERSAGEFUERDIEBISKAYA on I-II-III, rings AAA, start BLA,
    // plugboard AR GK OX.
    const CIPHERTEXT: &str = "JSJCWEEZHZNBNNOKOTINGHPPRKPBRP";
    const CRIB: &str = "WETTERVORHERSAGEFUER";

    /// Steps from AAA to BLA: slow B, middle L, fast one past A.
    const STEPS_TO_BLA: usize = 676 + 11 * 26 + 1;

    fn bombe(check: bool) -> Bombe {
        Bombe::new(
            &[ROTOR_III, ROTOR_II, ROTOR_I],
            Reflector::parse(UKW_B).unwrap(),
            CIPHERTEXT,
            CRIB,
            check,
        )
        .unwrap()
    }

    fn at_known_setting(check: bool) -> Bombe {
        let mut b = bombe(check);
        for _ in 0..STEPS_TO_BLA {
            b.step();
        }
        b
    }

    #[test]
    fn test_menu_facts() {
        let b = bombe(true);
        assert_eq!(b.loops(), 2);
        assert_eq!(b.test_register(), a2i('E').unwrap());
        assert_eq!(b.test_input(), a2i('S').unwrap());
        assert_eq!(b.total_positions(), 17576);
    }

    #[test]
    fn test_invalid_rotor_count() {
        let err = Bombe::new(&[], Reflector::parse(UKW_B).unwrap(), CIPHERTEXT, CRIB, true)
            .err()
            .unwrap();
        assert_eq!(
            err,
            BombeError::InvalidRotorCount {
                min: 1,
                max: 4,
                got: 0
            }
        );
    }

    #[test]
    fn test_initial_position_string() {
        let b = bombe(true);
        assert_eq!(b.indicator_position(), "AAZ");
    }

    #[test]
    fn test_step_carries() {
        let mut b = bombe(true);
        for _ in 0..25 {
            assert_eq!(b.step(), 1);
        }
        assert_eq!(b.step(), 2);
        for _ in 0..(26 * 25 - 1) {
            b.step();
        }
        assert_eq!(b.step(), 3);
        assert_eq!(b.indicator_position(), "BAZ");
    }

    #[test]
    fn test_known_setting_position_string() {
        let b = at_known_setting(true);
        assert_eq!(b.indicator_position(), "BLA");
    }

    #[test]
    fn test_wires_symmetric_after_energise() {
        let mut b = bombe(true);
        for _ in 0..40 {
            b.reset_wires();
            b.energise(b.test_register(), b.test_input());
            for i in 0..26u8 {
                for j in 0..26u8 {
                    assert_eq!(b.is_energised(i, j), b.is_energised(j, i));
                }
            }
            assert!(b.energised_count() >= 1);
            b.step();
        }
    }

    #[test]
    fn test_known_setting_stops_with_checking() {
        let mut b = at_known_setting(true);
        b.energise_hypothesis(b.test_input());
        let stop = b.check_stop().expect("known setting must stop");
        assert_eq!(stop.setting, "BLA");
        assert_eq!(stop.steckers, "EE AR BB CC FF GK HH II JJ NN OX SS TT UU VV WW ZZ");
        assert_eq!(stop.preview, "WETTERVORHERSAGEFUERDDENSS");
    }

    #[test]
    fn test_known_setting_stops_without_checking() {
        let mut b = at_known_setting(false);
        b.energise_hypothesis(b.test_input());
        let stop = b.check_stop().expect("known setting must stop");
        assert_eq!(stop.setting, "BLA");
        assert_eq!(stop.steckers, "EE");
    }

    #[test]
    fn test_checking_machine_idempotent() {
        let mut b = at_known_setting(true);
        let e = a2i('E').unwrap();
        let first = b.checking_machine(e);
        let second = b.checking_machine(e);
        assert!(first.is_some());
        assert_eq!(first, second);

        let s = a2i('S').unwrap();
        assert_eq!(b.checking_machine(s), b.checking_machine(s));
    }

    #[test]
    fn test_try_decrypt_restores_indicator() {
        let mut b = at_known_setting(true);
        let before = b.indicator_position();
        let preview = b.try_decrypt(&[(0, 17), (6, 10), (14, 23)]);
        assert_eq!(&preview[..CRIB.len()], CRIB);
        assert_eq!(b.indicator_position(), before);
    }

    #[test]
    fn test_change_rotors_resets_positions() {
        let mut b = at_known_setting(true);
        b.change_rotors(&[ROTOR_I, ROTOR_II, ROTOR_III], Reflector::parse(UKW_B).unwrap())
            .unwrap();
        assert_eq!(b.indicator_position(), "AAZ");
        assert_eq!(b.energised_count(), 0);
        assert!(b
            .change_rotors(&[ROTOR_I, "NOTAROTOR"], Reflector::parse(UKW_B).unwrap())
            .is_err());
    }

    #[test]
    fn test_indicator_added_when_offset_zero_not_in_menu() {
        // Position 0 (A-B) is cut off from the C-D-E-C triangle the menu picks.
        let b = Bombe::new(
            &[ROTOR_III],
            Reflector::parse(UKW_B).unwrap(),
            "BDEC",
            "ACDE",
            true,
        )
        .unwrap();
        assert_eq!(b.loops(), 1);
        assert_eq!(b.scramblers.len(), 4);
        assert_eq!(b.indicator_position(), "Z");
    }

    #[test]
    fn test_checking_machine_after_step_matches_fresh_bombe() {
        let e = a2i('E').unwrap();
        let mut checked = bombe(true);
        let mut fresh = bombe(true);
        for _ in 0..STEPS_TO_BLA - 1 {
            checked.step();
            fresh.step();
        }
        checked.checking_machine(e);
        checked.step();
        fresh.step();

        let result = checked.checking_machine(e);
        assert!(result.is_some());
        assert_eq!(result, fresh.checking_machine(e));
    }

    /// Lights every wire of the test register except `dead`.
    fn all_but_one_live(b: &mut Bombe, dead: u8) {
        b.reset_wires();
        let t = b.test_register();
        for j in (0..ALPHABET_LEN as u8).filter(|&j| j != dead) {
            b.wires[Bombe::wire(t, j)] = true;
            b.wires[Bombe::wire(j, t)] = true;
        }
        b.energise_count = ALPHABET_LEN - 1;
    }

    #[test]
    fn test_check_stop_reads_the_dead_wire() {
        let mut b = at_known_setting(false);
        let dead = a2i('K').unwrap();
        all_but_one_live(&mut b, dead);
        let stop = b.check_stop().expect("25 live wires is a stop");
        assert_eq!(stop.setting, "BLA");
        assert_eq!(stop.steckers, format_steckers(&[(b.test_register(), dead)]));
        assert_eq!(stop.steckers, "EK");
    }

    #[test]
    fn test_check_stop_saturated_register_is_not_a_stop() {
        let mut b = at_known_setting(false);
        all_but_one_live(&mut b, 0);
        let t = b.test_register();
        b.wires[Bombe::wire(t, 0)] = true;
        b.energise_count = ALPHABET_LEN;
        assert!(b.check_stop().is_none());
    }

    #[test]
    fn test_check_stop_boxing_without_checking_is_unknown() {
        let mut b = at_known_setting(false);
        b.reset_wires();
        b.energise_count = 5;
        let stop = b.check_stop().expect("boxing stop is reported unchecked");
        assert!(stop.is_unknown_steckers());
        assert_eq!(stop.setting, "BLA");
        assert_eq!(stop.preview.len(), ALPHABET_LEN);
    }

    #[test]
    fn test_format_steckers() {
        assert_eq!(format_steckers(&[(0, 17), (4, 4)]), "AR EE");
        assert_eq!(format_steckers(&[]), "");
    }
}
