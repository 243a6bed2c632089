pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("`{word}` is not a {expected} letter word")]
    InvalidWordLength { word: String, expected: usize },
    #[error("`{word}` contains `{letter}`, only the letters a-z are allowed")]
    InvalidWordLetter { word: String, letter: char },
    #[error("feedback `{feedback}` must have exactly {expected} symbols")]
    InvalidFeedbackLength { feedback: String, expected: usize },
    #[error(
        "invalid feedback symbol `{symbol}` at {position} in `{feedback}` \
         (use `o` hit, `?` present, `x` miss)"
    )]
    InvalidFeedbackSymbol {
        feedback: String,
        position: usize,
        symbol: char,
    },
    #[error("feedback `{feedback}` for `{guess}` is impossible, no word fits its `{letter}` marks")]
    InvalidFeedbackForGuess {
        guess: String,
        feedback: String,
        letter: char,
    },
    #[error("got {words} guessed words but {feedbacks} feedback strings")]
    MismatchedRecords { words: usize, feedbacks: usize },
    #[error("no candidates left, the feedback is contradictory or the word list is incomplete")]
    NoCandidates,
    #[error("the dictionary contains no five letter words")]
    EmptyDictionary,
}
