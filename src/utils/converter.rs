//! Letter-to-index conversion utilities.
//!
//! All of the core logic works on letters as integers `0..26`; characters
//! only appear at the edges of the API. These helpers do the translation.

use crate::error::BombeError;

/// Number of letters in the alphabet the machine works with.
pub const ALPHABET_LEN: usize = 26;

/// Converts an uppercase letter to its index (`'A'` is 0).
///
/// # Errors
/// Returns [`BombeError::InvalidLetter`] for anything outside `A`..`Z`.
pub fn a2i(c: char) -> Result<u8, BombeError> {
    if c.is_ascii_uppercase() {
        Ok(c as u8 - b'A')
    } else {
        Err(BombeError::InvalidLetter(c))
    }
}

/// Converts a letter index back to an uppercase character.
///
/// The index is taken modulo 26.
pub fn i2a(i: u8) -> char {
    (b'A' + i % ALPHABET_LEN as u8) as char
}

/// Converts a whole string of uppercase letters to indices.
///
/// # Errors
/// Returns [`BombeError::InvalidLetter`] on the first character outside `A`..`Z`.
pub fn letters(text: &str) -> Result<Vec<u8>, BombeError> {
    text.chars().map(a2i).collect()
}

/// Converts a slice of letter indices to a string.
pub fn to_text(letters: &[u8]) -> String {
    letters.iter().map(|&l| i2a(l)).collect()
}

/// Strips everything but ASCII letters and uppercases the rest.
///
/// Used on user-supplied text before it reaches the strict core.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Non-negative modulo 26.
pub(crate) fn mod26(x: i32) -> u8 {
    x.rem_euclid(ALPHABET_LEN as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a2i_bounds() {
        assert_eq!(a2i('A'), Ok(0));
        assert_eq!(a2i('Z'), Ok(25));
    }

    #[test]
    fn test_a2i_rejects_lowercase_and_digits() {
        assert_eq!(a2i('a'), Err(BombeError::InvalidLetter('a')));
        assert_eq!(a2i('7'), Err(BombeError::InvalidLetter('7')));
    }

    #[test]
    fn test_i2a_wraps() {
        assert_eq!(i2a(0), 'A');
        assert_eq!(i2a(25), 'Z');
        assert_eq!(i2a(26), 'A');
    }

    #[test]
    fn test_letters_and_back() {
        let l = letters("BOMBE").unwrap();
        assert_eq!(l, vec![1, 14, 12, 1, 4]);
        assert_eq!(to_text(&l), "BOMBE");
    }

    #[test]
    fn test_letters_reports_first_bad_char() {
        assert_eq!(letters("AB-C"), Err(BombeError::InvalidLetter('-')));
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Wetter vorhersage, 1941!"), "WETTERVORHERSAGE");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_mod26_negative() {
        assert_eq!(mod26(-1), 25);
        assert_eq!(mod26(-27), 25);
        assert_eq!(mod26(52), 0);
    }
}
