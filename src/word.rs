use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const WORD_LENGTH: usize = 5;

/// A five letter word, stored as lowercase ascii bytes in `a..=z`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // only a-z bytes ever get in
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(input: &str) -> Result<Word> {
        let lower = input.to_ascii_lowercase();
        if lower.chars().count() != WORD_LENGTH {
            return Err(Error::InvalidWordLength {
                word: input.to_owned(),
                expected: WORD_LENGTH,
            });
        }
        if let Some(letter) = lower.chars().find(|ch| !ch.is_ascii_lowercase()) {
            return Err(Error::InvalidWordLetter {
                word: input.to_owned(),
                letter,
            });
        }
        let mut letters = [0; WORD_LENGTH];
        letters.copy_from_slice(lower.as_bytes());
        Ok(Word(letters))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn to_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "unsupported letter");
    usize::from(letter - b'a')
}

#[derive(Clone, Copy, Default, Debug)]
pub(crate) struct LetterSet {
    set: u32,
}

impl LetterSet {
    pub(crate) fn from_word(word: &Word) -> LetterSet {
        let mut set = LetterSet::default();
        for &letter in word.letters() {
            set.insert(letter);
        }
        set
    }

    pub(crate) fn insert(&mut self, letter: u8) {
        self.set |= 1u32 << to_index(letter);
    }

    pub(crate) fn contains(&self, letter: u8) -> bool {
        (self.set & (1u32 << to_index(letter))) != 0
    }
}

#[derive(Default, Debug)]
pub(crate) struct LetterCount {
    map: [usize; 26],
}

impl LetterCount {
    pub(crate) fn from_word(word: &Word) -> LetterCount {
        let mut count = LetterCount::default();
        for &letter in word.letters() {
            count.increment(letter);
        }
        count
    }

    pub(crate) fn increment(&mut self, letter: u8) {
        self.map[to_index(letter)] += 1;
    }

    pub(crate) fn get(&self, letter: u8) -> usize {
        self.map[to_index(letter)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_lowercases() {
        let word: Word = "CrAnE".parse().unwrap();
        assert_eq!(word.as_str(), "crane");
        assert_eq!(word.to_string(), "crane");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            "cranes".parse::<Word>(),
            Err(Error::InvalidWordLength {
                word: "cranes".into(),
                expected: 5
            })
        );
        assert!(matches!("".parse::<Word>(), Err(Error::InvalidWordLength { .. })));
    }

    #[test]
    fn rejects_non_letters() {
        assert_eq!(
            "cr4ne".parse::<Word>(),
            Err(Error::InvalidWordLetter {
                word: "cr4ne".into(),
                letter: '4'
            })
        );
        // five chars but not five bytes
        assert!(matches!(
            "crané".parse::<Word>(),
            Err(Error::InvalidWordLetter { letter: 'é', .. })
        ));
    }

    #[test]
    fn orders_lexicographically() {
        let a: Word = "abbey".parse().unwrap();
        let b: Word = "abbot".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn counts_letters() {
        let word: Word = "sheet".parse().unwrap();
        let count = LetterCount::from_word(&word);
        assert_eq!(count.get(b'e'), 2);
        assert_eq!(count.get(b's'), 1);
        assert_eq!(count.get(b'z'), 0);

        let set = LetterSet::from_word(&word);
        assert!(set.contains(b'h'));
        assert!(!set.contains(b'a'));
    }
}
