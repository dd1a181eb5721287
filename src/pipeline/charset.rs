//! Character pool construction
//!
//! Maps the charset and letter-case selections to the concrete sequence of
//! characters the generator samples from. Duplicates in a pool are kept:
//! they weight the uniform draw towards the repeated characters.

use std::collections::HashSet;

use super::request::{CharsetChoice, LetterCase};

pub const DIGITS: &str = "1234567890";
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered characters eligible for sampling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of different characters, ignoring repetition
    pub fn distinct_len(&self) -> usize {
        self.chars.iter().collect::<HashSet<_>>().len()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct codes of `length` characters this pool can produce.
    ///
    /// Returns `None` if the count overflows `u128`.
    pub fn code_space(&self, length: usize) -> Option<u128> {
        let exponent = u32::try_from(length).ok()?;
        (self.distinct_len() as u128).checked_pow(exponent)
    }
}

impl From<&str> for CharacterPool {
    fn from(s: &str) -> Self {
        Self::new(s.chars().collect())
    }
}

/// Build the character pool for a charset and letter case.
///
/// `case` is ignored for numeric and custom sets.
pub fn build_character_set(charset: &CharsetChoice, case: LetterCase) -> CharacterPool {
    let letters = match case {
        LetterCase::Upper => ALPHABET.to_string(),
        LetterCase::Lower => ALPHABET.to_lowercase(),
        LetterCase::Mixed => format!("{}{}", ALPHABET, ALPHABET.to_lowercase()),
    };

    match charset {
        CharsetChoice::Alphanumeric => CharacterPool::from(format!("{}{}", DIGITS, letters).as_str()),
        CharsetChoice::Letters => CharacterPool::from(letters.as_str()),
        CharsetChoice::Numeric => CharacterPool::from(DIGITS),
        CharsetChoice::Custom(custom) => CharacterPool::from(custom.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_len_ignores_repeats() {
        let pool = CharacterPool::from("AAB");
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.distinct_len(), 2);
    }

    #[test]
    fn test_code_space() {
        let pool = CharacterPool::from("AB");
        assert_eq!(pool.code_space(1), Some(2));
        assert_eq!(pool.code_space(10), Some(1024));
        assert_eq!(CharacterPool::from(DIGITS).code_space(6), Some(1_000_000));
    }

    #[test]
    fn test_code_space_overflow() {
        let pool = CharacterPool::from(DIGITS);
        assert_eq!(pool.code_space(100), None);
    }

    #[test]
    fn test_custom_pool_keeps_multibyte_chars() {
        let pool = build_character_set(&CharsetChoice::Custom("ěšč".to_string()), LetterCase::Upper);
        assert_eq!(pool.chars(), &['ě', 'š', 'č']);
    }
}
