use crate::error::{Error, Result};
use crate::feedback::GuessRecord;
use crate::word::Word;
use crate::{matcher, ranker, Dictionary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// this many candidates are still possible
    Narrowed(usize),
    /// the secret is known
    Solved(Word),
}

/// The guesses made so far in one game and the words they still allow
pub struct Session<'d> {
    dictionary: &'d Dictionary,
    records: Vec<GuessRecord>,
    candidates: Vec<Word>,
}

impl<'d> Session<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Session<'d> {
        Session {
            dictionary,
            records: Vec::new(),
            candidates: dictionary.words().to_vec(),
        }
    }

    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn status(&self) -> Status {
        // an all hit record leaves only its guess, so one candidate covers that too
        match self.candidates.as_slice() {
            [only] => Status::Solved(*only),
            candidates => Status::Narrowed(candidates.len()),
        }
    }

    /// Narrows the candidates with another guess.
    ///
    /// Feedback that rules out every remaining word is rejected with [`Error::NoCandidates`] and
    /// leaves the session as it was, so the round can be entered again.
    pub fn apply(&mut self, record: GuessRecord) -> Result<Status> {
        let remaining = matcher::filter(&self.candidates, &record);
        if remaining.is_empty() {
            return Err(Error::NoCandidates);
        }
        self.candidates = remaining;
        self.records.push(record);
        Ok(self.status())
    }

    /// Up to `limit` of the best next guesses, best first
    pub fn suggestions(&self, limit: usize) -> Result<Vec<(Word, u32)>> {
        let mut ranked = ranker::rank_scored(&self.candidates)?;
        ranked.truncate(limit);
        Ok(ranked)
    }

    /// Like [`Session::suggestions`] but ranked by how well each candidate splits the others
    pub fn entropy_suggestions(&self, limit: usize) -> Result<Vec<(Word, f64)>> {
        let mut ranked = ranker::rank_by_entropy(&self.candidates, &self.candidates)?;
        ranked.truncate(limit);
        Ok(ranked)
    }

    pub fn reset(&mut self) {
        self.records.clear();
        self.candidates = self.dictionary.words().to_vec();
    }
}

/// Applies every record in order and ranks what is left
pub fn solve(dictionary: &Dictionary, records: &[GuessRecord]) -> Result<Vec<Word>> {
    let mut session = Session::new(dictionary);
    for record in records {
        session.apply(*record)?;
    }
    ranker::rank(session.candidates())
}
