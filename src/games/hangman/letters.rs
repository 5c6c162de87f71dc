//! Per-letter guess state over a fixed answer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// State of one letter of the alphabet within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterState {
    /// Not guessed yet.
    Unused,
    /// Guessed, and present in the answer.
    Correct,
    /// Guessed, and absent from the answer.
    Incorrect,
}

/// The answer being guessed and the state of all 26 letters.
///
/// Answers are uppercased on construction and may contain only ASCII
/// letters and spaces, with at least one letter. The state map always
/// holds an entry for every letter `'A'..='Z'`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangmanLetters {
    answer: String,
    category: String,
    states: FxHashMap<char, LetterState>,
}

impl HangmanLetters {
    /// Create letter state for `answer`, filed under `category`.
    pub fn new(answer: &str, category: &str) -> Result<Self, GameError> {
        let answer = answer.to_uppercase();
        if answer.chars().any(|c| !c.is_ascii_alphabetic() && c != ' ')
            || !answer.chars().any(|c| c.is_ascii_alphabetic())
        {
            return Err(GameError::InvalidAnswer);
        }
        let states = ('A'..='Z').map(|c| (c, LetterState::Unused)).collect();
        Ok(Self {
            answer,
            category: category.to_string(),
            states,
        })
    }

    /// Guess a letter, marking it correct or incorrect.
    ///
    /// Returns whether the letter occurs in the answer. Case is
    /// normalized; anything that is not a letter is an error.
    pub fn make_guess(&mut self, letter: char) -> Result<bool, GameError> {
        let letter = Self::normalize(letter)?;
        Ok(self.record_guess(letter))
    }

    /// Record a guess for an already-normalized uppercase letter.
    pub(crate) fn record_guess(&mut self, letter: char) -> bool {
        let correct = self.answer.contains(letter);
        self.states.insert(
            letter,
            if correct {
                LetterState::Correct
            } else {
                LetterState::Incorrect
            },
        );
        correct
    }

    /// The current state of a letter. `Unused` until guessed.
    pub fn letter_state(&self, letter: char) -> Result<LetterState, GameError> {
        let letter = Self::normalize(letter)?;
        Ok(self
            .states
            .get(&letter)
            .copied()
            .unwrap_or(LetterState::Unused))
    }

    /// Whether every letter of the answer has been guessed correctly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.answer
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .all(|c| self.states.get(&c) == Some(&LetterState::Correct))
    }

    /// The uppercase answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// The category the answer was drawn from.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// All 26 letter states.
    #[must_use]
    pub fn states(&self) -> &FxHashMap<char, LetterState> {
        &self.states
    }

    fn normalize(letter: char) -> Result<char, GameError> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(upper)
        } else {
            Err(GameError::InvalidLetter { letter })
        }
    }
}
