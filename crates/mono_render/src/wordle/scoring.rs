//! Letter scoring and transcript parsing.

use std::collections::BTreeMap;

use super::WORD_LENGTH;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Cell not filled by any guess yet.
    #[default]
    Empty,
    Correct,
    Present,
    Absent,
}

impl LetterState {
    fn rank(self) -> u8 {
        match self {
            LetterState::Empty => 0,
            LetterState::Absent => 1,
            LetterState::Present => 2,
            LetterState::Correct => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LetterResult {
    pub letter: Option<char>,
    pub state: LetterState,
}

pub type GuessRow = [LetterResult; WORD_LENGTH];

/// Best known state per letter across every committed guess.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    letters: BTreeMap<char, LetterState>,
}

impl KeyboardHints {
    /// Records `state` for `letter` unless a stronger state is already known.
    /// Correct is never downgraded; Absent can still be upgraded later.
    pub fn record(&mut self, letter: char, state: LetterState) {
        if state == LetterState::Empty {
            return;
        }
        let entry = self.letters.entry(letter).or_insert(state);
        if state.rank() > entry.rank() {
            *entry = state;
        }
    }

    pub fn get(&self, letter: char) -> Option<LetterState> {
        self.letters.get(&letter).copied()
    }

    /// Letters currently in `state`, alphabetically.
    pub fn letters_in(&self, state: LetterState) -> Vec<char> {
        self.letters
            .iter()
            .filter(|(_, known)| **known == state)
            .map(|(&letter, _)| letter)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Trims surrounding whitespace and uppercases ASCII letters.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// True when the normalized transcript asks for a new game.
pub fn wants_restart(normalized: &str) -> bool {
    normalized.contains("PLAY AGAIN") || normalized.contains("NEW GAME")
}

/// Picks the guess out of a normalized transcript: the last whitespace
/// separated token that, after trailing `. , ! ?` are stripped, is exactly five
/// ASCII letters. Speech often carries filler words before the real guess.
pub fn extract_candidate(normalized: &str) -> Option<String> {
    normalized
        .split_whitespace()
        .map(|token| token.trim_end_matches(['.', ',', '!', '?']))
        .filter(|token| {
            token.len() == WORD_LENGTH && token.bytes().all(|byte| byte.is_ascii_alphabetic())
        })
        .last()
        .map(str::to_string)
}

/// Scores `guess` against `target` with standard duplicate-letter handling.
///
/// Exact matches are claimed first and consume their target letter; the
/// remaining letters are then marked Present while unclaimed copies of the
/// letter are left in the target, and Absent otherwise.
pub fn score_guess(guess: &str, target: &str) -> [LetterState; WORD_LENGTH] {
    let guess: Vec<char> = guess.chars().collect();
    let mut remaining: Vec<Option<char>> = target.chars().map(Some).collect();
    let mut states = [LetterState::Absent; WORD_LENGTH];

    for ((state, &letter), slot) in states.iter_mut().zip(&guess).zip(remaining.iter_mut()) {
        if *slot == Some(letter) {
            *state = LetterState::Correct;
            *slot = None;
        }
    }

    for (state, &letter) in states.iter_mut().zip(&guess) {
        if *state == LetterState::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
            *slot = None;
            *state = LetterState::Present;
        }
    }

    states
}

/// Combines a guess with its scores into a grid row.
pub fn scored_row(guess: &str, states: &[LetterState; WORD_LENGTH]) -> GuessRow {
    let mut row = GuessRow::default();
    for ((cell, letter), &state) in row.iter_mut().zip(guess.chars()).zip(states) {
        *cell = LetterResult { letter: Some(letter), state };
    }
    row
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Absent, Correct, Empty, Present};
    use super::*;

    #[test]
    fn slate_against_crane() {
        assert_eq!(score_guess("SLATE", "CRANE"), [Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn exact_match_is_all_correct() {
        assert_eq!(score_guess("CRANE", "CRANE"), [Correct; WORD_LENGTH]);
    }

    #[test]
    fn misplaced_letters_are_present() {
        assert_eq!(score_guess("NACRE", "CRANE"), [Present, Present, Present, Present, Correct]);
    }

    #[test]
    fn duplicate_letters_follow_two_pass_rules() {
        // SPEED has two E's, ERASE has two E's and one S.
        assert_eq!(score_guess("ERASE", "SPEED"), [Present, Absent, Absent, Present, Present]);
    }

    #[test]
    fn extra_copies_beyond_target_are_absent() {
        // One E in CRANE: the exact E wins, the leading E is absent.
        assert_eq!(score_guess("EERIE", "CRANE"), [Absent, Absent, Present, Absent, Correct]);
        // Two E's guessed, one present in the target.
        assert_eq!(score_guess("GEESE", "THEIR"), [Absent, Absent, Correct, Absent, Absent]);
    }

    #[test]
    fn row_carries_letters_and_states() {
        let row = scored_row("SLATE", &score_guess("SLATE", "CRANE"));
        assert_eq!(row[0], LetterResult { letter: Some('S'), state: Absent });
        assert_eq!(row[2], LetterResult { letter: Some('A'), state: Correct });
    }

    #[test]
    fn last_five_letter_token_wins() {
        let normalized = normalize("  um, I think CRANE... no wait, slate!  ");
        assert_eq!(extract_candidate(&normalized), Some("SLATE".to_string()));
        assert_eq!(extract_candidate("MY GUESS IS PLANT."), Some("PLANT".to_string()));
        assert_eq!(extract_candidate("HELLO THERE WORLD?"), Some("WORLD".to_string()));
    }

    #[test]
    fn tokens_must_be_alphabetic() {
        assert_eq!(extract_candidate("ABC12 A-B-C"), None);
        assert_eq!(extract_candidate("TOO LONGWORD"), None);
        assert_eq!(extract_candidate(""), None);
    }

    #[test]
    fn restart_phrases_match_anywhere() {
        assert!(wants_restart(&normalize("ok let's play again please")));
        assert!(wants_restart("START A NEW GAME"));
        assert!(!wants_restart("PLAY"));
    }

    #[test]
    fn hints_prefer_the_strongest_state() {
        let mut hints = KeyboardHints::default();
        hints.record('E', Absent);
        assert_eq!(hints.get('E'), Some(Absent));
        hints.record('E', Present);
        assert_eq!(hints.get('E'), Some(Present));
        hints.record('E', Correct);
        hints.record('E', Absent);
        hints.record('E', Present);
        assert_eq!(hints.get('E'), Some(Correct));
        hints.record('A', Empty);
        assert_eq!(hints.get('A'), None);
    }

    #[test]
    fn hint_groups_are_sorted() {
        let mut hints = KeyboardHints::default();
        for letter in ['T', 'B', 'S'] {
            hints.record(letter, Absent);
        }
        hints.record('A', Correct);
        assert_eq!(hints.letters_in(Absent), vec!['B', 'S', 'T']);
        assert_eq!(hints.letters_in(Correct), vec!['A']);
        assert!(hints.letters_in(Present).is_empty());
    }
}
