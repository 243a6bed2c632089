use crate::feedback::{Feedback, GuessRecord, Mark};
use crate::word::{LetterCount, LetterSet, Word};

/// Whether `candidate` could be the secret given that `guess` received `feedback`.
///
/// Every hit pins its letter, every other mark forbids its letter at that position. A letter
/// marked hit or present `n` times must occur at least `n` times in the candidate, and exactly
/// `n` times once any copy of it is marked missing.
pub fn is_consistent(candidate: &Word, guess: &Word, feedback: &Feedback) -> bool {
    let mut marked = LetterCount::default();
    let mut missed = LetterSet::default();

    for ((&c, &g), &mark) in candidate.letters().iter().zip(guess.letters()).zip(feedback.marks()) {
        match mark {
            Mark::Hit => {
                if c != g {
                    return false;
                }
                marked.increment(g);
            }
            Mark::Present => {
                if c == g {
                    return false;
                }
                marked.increment(g);
            }
            Mark::Miss => {
                if c == g {
                    return false;
                }
                missed.insert(g);
            }
        }
    }

    let have = LetterCount::from_word(candidate);
    guess.letters().iter().all(|&letter| {
        let need = marked.get(letter);
        let got = have.get(letter);
        got >= need && (!missed.contains(letter) || got == need)
    })
}

/// Keeps the candidates consistent with `record`, in their original order
pub fn filter(candidates: &[Word], record: &GuessRecord) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| is_consistent(candidate, record.guess(), record.feedback()))
        .copied()
        .collect()
}
