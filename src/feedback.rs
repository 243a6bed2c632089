//! Wordle feedback: the per letter marks a guess receives and the records pairing them with
//! guesses.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::word::{LetterCount, LetterSet, Word, WORD_LENGTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// green, the letter is in this exact position
    Hit,
    /// orange, the letter is somewhere else in the word
    Present,
    /// grey, the letter is not in the word, or not that many times
    Miss,
}

impl Mark {
    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol.to_ascii_lowercase() {
            'o' | 'g' => Some(Mark::Hit),
            '?' | 'y' => Some(Mark::Present),
            'x' | '*' | 'b' | '-' => Some(Mark::Miss),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Hit => 'o',
            Mark::Present => '?',
            Mark::Miss => 'x',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    pub const ALL_HIT: Feedback = Feedback([Mark::Hit; WORD_LENGTH]);

    pub fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Scores `guess` against `secret` the way wordle does: exact hits first, then every other
    /// letter left to right is present while the secret still has an unmatched copy of it
    pub fn compute(guess: &Word, secret: &Word) -> Feedback {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut unmatched = LetterCount::default();

        for (i, (g, s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                marks[i] = Mark::Hit;
            } else {
                unmatched.increment(*s);
            }
        }

        let mut used = LetterCount::default();
        for (i, &g) in guess.letters().iter().enumerate() {
            if marks[i] != Mark::Hit && used.get(g) < unmatched.get(g) {
                marks[i] = Mark::Present;
                used.increment(g);
            }
        }

        Feedback(marks)
    }
}

impl FromStr for Feedback {
    type Err = Error;

    fn from_str(input: &str) -> Result<Feedback> {
        if input.chars().count() != WORD_LENGTH {
            return Err(Error::InvalidFeedbackLength {
                feedback: input.to_owned(),
                expected: WORD_LENGTH,
            });
        }
        let mut marks = [Mark::Miss; WORD_LENGTH];
        for (position, (symbol, mark)) in input.chars().zip(marks.iter_mut()).enumerate() {
            *mark = Mark::from_symbol(symbol).ok_or_else(|| Error::InvalidFeedbackSymbol {
                feedback: input.to_owned(),
                position,
                symbol,
            })?;
        }
        Ok(Feedback(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// A guess together with the feedback it got. Only feedback that wordle could actually produce
/// for the guess is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    pub fn new(guess: Word, feedback: Feedback) -> Result<GuessRecord> {
        let impossible = |letter: u8| Error::InvalidFeedbackForGuess {
            guess: guess.to_string(),
            feedback: feedback.to_string(),
            letter: char::from(letter),
        };

        // a letter is only marked missing once every later copy of it is missing too, present
        // marks are handed out left to right
        let mut missed = LetterSet::default();
        // positions not pinned by a hit, and how many of those hold each letter in the guess
        let mut open = 0;
        let mut present = LetterCount::default();
        let mut blocked = LetterCount::default();
        for (&letter, &mark) in guess.letters().iter().zip(feedback.marks()) {
            match mark {
                Mark::Miss => {
                    missed.insert(letter);
                    blocked.increment(letter);
                    open += 1;
                }
                Mark::Present if missed.contains(letter) => return Err(impossible(letter)),
                Mark::Present => {
                    present.increment(letter);
                    blocked.increment(letter);
                    open += 1;
                }
                Mark::Hit => {}
            }
        }

        // every present copy needs an open position where the guess had a different letter
        let crowded = guess
            .letters()
            .iter()
            .find(|&&letter| present.get(letter) > open - blocked.get(letter));
        match crowded {
            Some(&letter) => Err(impossible(letter)),
            None => Ok(GuessRecord { guess, feedback }),
        }
    }

    /// Parses a guessed word and its feedback string
    pub fn parse(guess: &str, feedback: &str) -> Result<GuessRecord> {
        GuessRecord::new(guess.parse()?, feedback.parse()?)
    }

    pub fn guess(&self) -> &Word {
        &self.guess
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.feedback)
    }
}

#[cfg(test)]
macro_rules! fb {
    ($s:literal) => {
        $s.parse::<$crate::feedback::Feedback>().unwrap()
    };
}

#[cfg(test)]
pub(crate) use fb;

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        s.parse().unwrap()
    }

    mod compute {
        use super::*;

        #[test]
        fn all_hit() {
            assert_eq!(Feedback::compute(&w("crane"), &w("crane")), Feedback::ALL_HIT);
        }

        #[test]
        fn all_miss() {
            assert_eq!(Feedback::compute(&w("quick"), &w("dream")), fb!("xxxxx"));
        }

        #[test]
        fn mixed() {
            assert_eq!(Feedback::compute(&w("crane"), &w("charm")), fb!("o?oxx"));
        }

        #[test]
        fn repeated_guess_letter_single_in_secret() {
            // one e in the secret, so only the first unmatched e is present
            assert_eq!(Feedback::compute(&w("sheet"), &w("beach")), fb!("x??xx"));
        }

        #[test]
        fn hit_takes_precedence_over_earlier_present() {
            assert_eq!(Feedback::compute(&w("aaddd"), &w("baccc")), fb!("xoxxx"));
        }

        #[test]
        fn repeated_letters_both_ways() {
            assert_eq!(Feedback::compute(&w("sheet"), &w("crepe")), fb!("xxo?x"));
            assert_eq!(Feedback::compute(&w("speed"), &w("creep")), fb!("x?oox"));
            assert_eq!(Feedback::compute(&w("geese"), &w("creep")), fb!("x?oxx"));
        }
    }

    mod parse {
        use super::*;

        #[test]
        fn accepts_every_alphabet() {
            assert_eq!(fb!("gy*bx"), fb!("o?xxx"));
            assert_eq!(fb!("GY-XO"), fb!("o?xxo"));
        }

        #[test]
        fn displays_canonical_symbols() {
            assert_eq!(fb!("gy*b-").to_string(), "o?xxx");
        }

        #[test]
        fn rejects_unknown_symbol() {
            assert_eq!(
                "oo!xx".parse::<Feedback>(),
                Err(Error::InvalidFeedbackSymbol {
                    feedback: "oo!xx".into(),
                    position: 2,
                    symbol: '!'
                })
            );
        }

        #[test]
        fn rejects_wrong_length() {
            assert!(matches!(
                "oox".parse::<Feedback>(),
                Err(Error::InvalidFeedbackLength { expected: 5, .. })
            ));
        }
    }

    mod record {
        use super::*;

        #[test]
        fn present_after_miss_of_same_letter_is_impossible() {
            assert_eq!(
                GuessRecord::parse("sheet", "xxx?x"),
                Err(Error::InvalidFeedbackForGuess {
                    guess: "sheet".into(),
                    feedback: "xxx?x".into(),
                    letter: 'e'
                })
            );
        }

        #[test]
        fn present_letters_need_somewhere_to_go() {
            // every position already holds an a
            assert_eq!(
                GuessRecord::parse("aaaaa", "?????"),
                Err(Error::InvalidFeedbackForGuess {
                    guess: "aaaaa".into(),
                    feedback: "?????".into(),
                    letter: 'a'
                })
            );
            // the only position without an a is the hit b
            assert!(matches!(
                GuessRecord::parse("aaaab", "????o"),
                Err(Error::InvalidFeedbackForGuess { letter: 'a', .. })
            ));
            assert!(matches!(
                GuessRecord::parse("abaca", "?o?o?"),
                Err(Error::InvalidFeedbackForGuess { letter: 'a', .. })
            ));
            assert!(GuessRecord::parse("abcde", "?????").is_ok());
            assert!(GuessRecord::parse("aabcd", "?x??o").is_ok());
        }

        #[test]
        fn hit_after_miss_of_same_letter_is_fine() {
            assert!(GuessRecord::parse("sheet", "xxxox").is_ok());
            assert!(GuessRecord::parse("sheet", "xx?xx").is_ok());
        }

        #[test]
        fn computed_feedback_is_always_accepted() {
            let words = ["sheet", "crepe", "geese", "eerie", "speed", "abbey", "mamma", "llama"];
            for guess in words {
                for secret in words {
                    let feedback = Feedback::compute(&w(guess), &w(secret));
                    assert!(
                        GuessRecord::new(w(guess), feedback).is_ok(),
                        "{guess} vs {secret} gave {feedback}"
                    );
                }
            }
        }

        #[test]
        fn propagates_parse_errors() {
            assert!(matches!(
                GuessRecord::parse("shee", "xxxxx"),
                Err(Error::InvalidWordLength { .. })
            ));
            assert!(matches!(
                GuessRecord::parse("sheet", "xxxxz"),
                Err(Error::InvalidFeedbackSymbol { .. })
            ));
        }
    }
}
