use std::collections::HashSet;

use log::debug;

use super::dictionary::Dictionary;
use super::scoring::{self, GuessRow, KeyboardHints, LetterState};

/// Game phase. `Won` and `Lost` are passed through on the way to
/// `WaitingRestart` and are never left in place after a guess commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Lost,
    WaitingRestart,
}

/// Why a transcript did not change the game.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GuessRejection {
    #[error("game is not accepting guesses")]
    NotPlaying,
    #[error("no five letter word in transcript")]
    NoCandidate,
    #[error("{0} is not in the word list")]
    NotInDictionary(String),
    #[error("{0} was already guessed")]
    AlreadyGuessed(String),
}

/// One user's game.
#[derive(Clone, Debug)]
pub struct GameSession {
    target: String,
    rows: Vec<GuessRow>,
    current_row: usize,
    phase: Phase,
    hints: KeyboardHints,
    guessed: HashSet<String>,
}

impl GameSession {
    /// Starts a game for `target`, an uppercase five letter word.
    pub fn new(target: impl Into<String>, max_guesses: usize) -> Self {
        let max_guesses = max_guesses.max(1);
        Self {
            target: target.into(),
            rows: vec![GuessRow::default(); max_guesses],
            current_row: 0,
            phase: Phase::Playing,
            hints: KeyboardHints::default(),
            guessed: HashSet::new(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn max_guesses(&self) -> usize {
        self.rows.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    pub fn has_guessed(&self, word: &str) -> bool {
        self.guessed.contains(word)
    }

    /// Whether the last committed row matched the target.
    pub fn is_won(&self) -> bool {
        self.current_row
            .checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .is_some_and(|row| row.iter().all(|cell| cell.state == LetterState::Correct))
    }

    /// Tries to commit the guess carried by a normalized transcript. A
    /// rejection leaves the session untouched.
    pub fn submit(
        &mut self,
        normalized: &str,
        dictionary: &Dictionary,
    ) -> Result<(), GuessRejection> {
        if self.phase != Phase::Playing {
            return Err(GuessRejection::NotPlaying);
        }

        let candidate =
            scoring::extract_candidate(normalized).ok_or(GuessRejection::NoCandidate)?;
        if !dictionary.is_valid_guess(&candidate) {
            return Err(GuessRejection::NotInDictionary(candidate));
        }
        if self.guessed.contains(&candidate) {
            return Err(GuessRejection::AlreadyGuessed(candidate));
        }

        self.commit(candidate);
        Ok(())
    }

    fn commit(&mut self, guess: String) {
        let states = scoring::score_guess(&guess, &self.target);
        for (letter, &state) in guess.chars().zip(&states) {
            self.hints.record(letter, state);
        }

        self.rows[self.current_row] = scoring::scored_row(&guess, &states);
        self.current_row += 1;

        if guess == self.target {
            self.phase = Phase::Won;
        } else if self.current_row >= self.rows.len() {
            self.phase = Phase::Lost;
        }

        debug!("committed guess {guess} on row {} ({:?})", self.current_row, self.phase);
        self.guessed.insert(guess);

        if matches!(self.phase, Phase::Won | Phase::Lost) {
            self.phase = Phase::WaitingRestart;
        }
    }
}
