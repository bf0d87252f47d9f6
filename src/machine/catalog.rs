//! Historical Enigma rotor and reflector wirings, addressable by name.

/// A named rotor wiring in `PERMUTATION<NOTCHES` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Conventional name, e.g. `"III"` or `"Beta"`.
    pub name: &'static str,
    /// Wiring specification accepted by [`Wiring::parse`](super::Wiring::parse)
    /// or [`Reflector::parse`](super::Reflector::parse).
    pub spec: &'static str,
}

/// Rotors I-VIII of the Wehrmacht and Kriegsmarine machines.
#[rustfmt::skip]
pub const ROTORS: [CatalogEntry; 8] = [
    CatalogEntry { name: "I", spec: "EKMFLGDQVZNTOWYHXUSPAIBRCJ<Q" },
    CatalogEntry { name: "II", spec: "AJDKSIRUXBLHWTMCQGZNPYFVOE<E" },
    CatalogEntry { name: "III", spec: "BDFHJLCPRTXVZNYEIWGAKMUSQO<V" },
    CatalogEntry { name: "IV", spec: "ESOVPZJAYQUIRHXLNFTGKDCMWB<J" },
    CatalogEntry { name: "V", spec: "VZBRGITYUPSDNHLXAWMJQOFECK<Z" },
    CatalogEntry { name: "VI", spec: "JPGVOUMFYQBENHZRDKASXLICTW<ZM" },
    CatalogEntry { name: "VII", spec: "NZJHGRCXMYSWBOUFAIVLPEKQDT<ZM" },
    CatalogEntry { name: "VIII", spec: "FKQHTLXOCBJSPDZRAMEWNIUYGV<ZM" },
];

/// Non-stepping fourth-slot rotors of the M4.
#[rustfmt::skip]
pub const FOURTH_ROTORS: [CatalogEntry; 2] = [
    CatalogEntry { name: "Beta", spec: "LEYJVCNIXWPBQMDRTAKZGFUHOS" },
    CatalogEntry { name: "Gamma", spec: "FSOKANUERHMBTIYCWLQPZXVGJD" },
];

/// Reflectors: B and C for three-rotor machines, the thin variants for the M4.
#[rustfmt::skip]
pub const REFLECTORS: [CatalogEntry; 4] = [
    CatalogEntry { name: "B", spec: "AY BR CU DH EQ FS GL IP JX KN MO TZ VW" },
    CatalogEntry { name: "C", spec: "AF BV CP DJ EI GO HY KR LZ MX NW QT SU" },
    CatalogEntry { name: "B Thin", spec: "AE BN CK DQ FU GY HW IJ LO MP RX SZ TV" },
    CatalogEntry { name: "C Thin", spec: "AR BD CO EJ FN GT HK IV LM PW QZ SX UY" },
];

fn find(entries: &'static [CatalogEntry], name: &str) -> Option<&'static CatalogEntry> {
    let name = name.trim();
    entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Looks up a rotor (I-VIII, Beta, Gamma) by name, ignoring case.
pub fn rotor_by_name(name: &str) -> Option<&'static CatalogEntry> {
    find(&ROTORS, name).or_else(|| find(&FOURTH_ROTORS, name))
}

/// Looks up a reflector by name, ignoring case.
pub fn reflector_by_name(name: &str) -> Option<&'static CatalogEntry> {
    find(&REFLECTORS, name)
}
