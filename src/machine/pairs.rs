//! Parsing of space-separated letter pair lists (`"AB CD EF"`).
//!
//! Shared by [`Reflector`](super::Reflector) and [`Plugboard`](super::Plugboard),
//! which differ only in how strict they are about coverage.

use crate::utils::converter::{a2i, ALPHABET_LEN};

/// Parses a pair list into a partial involution.
///
/// Each letter may appear in at most one pair. A pair of a letter with
/// itself is kept as a fixed point when `allow_self` is set.
///
/// # Returns
/// `map[i] = Some(j)` for every paired letter, `None` for the rest. The
/// error string describes the first offending pair.
pub(crate) fn parse_pairs(
    spec: &str,
    allow_self: bool,
) -> Result<[Option<u8>; ALPHABET_LEN], String> {
    let mut map = [None; ALPHABET_LEN];
    for pair in spec.split_whitespace() {
        let chars: Vec<char> = pair.chars().collect();
        if chars.len() != 2 {
            return Err(format!("'{}' is not a pair of letters", pair));
        }
        let a = a2i(chars[0]).map_err(|e| e.to_string())?;
        let b = a2i(chars[1]).map_err(|e| e.to_string())?;
        if a == b && !allow_self {
            return Err(format!("'{}' connects a letter to itself", pair));
        }
        if map[a as usize].is_some() || map[b as usize].is_some() {
            return Err(format!("'{}' reuses a letter already paired", pair));
        }
        map[a as usize] = Some(b);
        map[b as usize] = Some(a);
    }
    Ok(map)
}
