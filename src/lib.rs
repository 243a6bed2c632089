//! Narrows a word list down to the words consistent with wordle feedback and ranks what is left
//! to suggest the next guess.
//!
//! Feedback follows the usual wordle scoring of repeated letters: exact hits are marked first,
//! then the remaining copies of a letter are marked present left to right for as long as the
//! secret has unmatched copies, and missing after that.

pub mod error;
pub mod feedback;
pub mod matcher;
pub mod ranker;
pub mod session;
pub mod word;

pub use error::{Error, Result};
pub use feedback::{Feedback, GuessRecord, Mark};
pub use session::{solve, Session, Status};
pub use word::{Word, WORD_LENGTH};

/// All the words the secret may be, sorted and without duplicates
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<Word>,
    skipped: usize,
}

impl Dictionary {
    /// Reads one word per line, lines which are not exactly five lowercase ascii letters are
    /// skipped (a system word list also has proper nouns and every other length)
    pub fn parse(text: &str) -> Result<Dictionary> {
        let mut skipped = 0;
        let mut words = Vec::new();
        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if line.len() == WORD_LENGTH && line.bytes().all(|b| b.is_ascii_lowercase()) {
                words.push(line.parse()?);
            } else {
                skipped += 1;
            }
        }
        Dictionary::from_words(words).map(|dictionary| Dictionary { skipped, ..dictionary })
    }

    pub fn from_words(mut words: Vec<Word>) -> Result<Dictionary> {
        if words.is_empty() {
            return Err(Error::EmptyDictionary);
        }
        words.sort_unstable();
        words.dedup();
        Ok(Dictionary { words, skipped: 0 })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// number of lines [`Dictionary::parse`] left out
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }
}
