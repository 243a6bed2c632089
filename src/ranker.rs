use std::cmp::Reverse;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::feedback::Feedback;
use crate::word::{LetterSet, Word, WORD_LENGTH};

/// Positional letter statistics over a set of candidate words
pub struct Scoring {
    /// number of words having a letter at a position
    count: [[u32; 26]; WORD_LENGTH],
}

impl Scoring {
    pub fn new(words: &[Word]) -> Scoring {
        let mut count = [[0; 26]; WORD_LENGTH];
        for word in words {
            for (position, &letter) in word.letters().iter().enumerate() {
                count[position][usize::from(letter - b'a')] += 1;
            }
        }
        Scoring { count }
    }

    /// scores a word by summing how many words share its letter at each position, a letter seen
    /// earlier in the same word only counts half since it tells us less about the rest
    pub fn word_score(&self, word: &Word) -> u32 {
        let mut seen = LetterSet::default();
        let mut total = 0;
        for (position, &letter) in word.letters().iter().enumerate() {
            let score = self.count[position][usize::from(letter - b'a')];
            total += if seen.contains(letter) { score / 2 } else { score };
            seen.insert(letter);
        }
        total
    }
}

/// Orders candidates best first along with their scores, equal scores in alphabetical order
pub fn rank_scored(candidates: &[Word]) -> Result<Vec<(Word, u32)>> {
    if candidates.is_empty() {
        return Err(Error::NoCandidates);
    }
    let scoring = Scoring::new(candidates);
    let mut scored = candidates
        .iter()
        .map(|word| (*word, scoring.word_score(word)))
        .collect::<Vec<_>>();
    scored.sort_unstable_by_key(|&(word, score)| (Reverse(score), word));
    Ok(scored)
}

pub fn rank(candidates: &[Word]) -> Result<Vec<Word>> {
    Ok(rank_scored(candidates)?.into_iter().map(|(word, _)| word).collect())
}

/// Entropy in bits of the feedback `guess` gets across `candidates`, higher means the feedback
/// is expected to split the candidates into smaller groups
pub fn entropy(guess: &Word, candidates: &[Word]) -> f64 {
    let mut patterns = HashMap::<Feedback, usize>::new();
    for secret in candidates {
        *patterns.entry(Feedback::compute(guess, secret)).or_default() += 1;
    }
    // summed in a fixed order so equal splits give bit identical scores
    let mut sizes = patterns.into_values().collect::<Vec<_>>();
    sizes.sort_unstable();
    let total = candidates.len() as f64;
    sizes
        .into_iter()
        .map(|size| {
            let p = size as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Orders `guesses` by their [`entropy`] over `candidates`, best first, equal scores in
/// alphabetical order
pub fn rank_by_entropy(candidates: &[Word], guesses: &[Word]) -> Result<Vec<(Word, f64)>> {
    if candidates.is_empty() {
        return Err(Error::NoCandidates);
    }
    let mut scored = guesses
        .iter()
        .map(|guess| (*guess, entropy(guess, candidates)))
        .collect::<Vec<_>>();
    scored.sort_unstable_by(|(a, a_bits), (b, b_bits)| b_bits.total_cmp(a_bits).then(a.cmp(b)));
    Ok(scored)
}
