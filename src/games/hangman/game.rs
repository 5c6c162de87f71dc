//! A hangman session: lives, guess counters, scoring, display state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::letters::{HangmanLetters, LetterState};
use crate::core::{GameKind, Score};
use crate::error::GameError;
use crate::rules::{GameResult, MoveOutcome, PuzzleEngine};

/// Number of lives a session starts with.
pub const STARTING_LIVES: i32 = 3;

/// A guess forwarded from the UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HangmanGuess {
    /// A single-letter guess.
    Letter(char),
    /// An attempt at the whole answer.
    Answer(String),
}

/// One game of hangman over a fixed answer.
///
/// Tracks lives, per-letter guesses, and whole-answer attempts, and
/// produces the score once the game is won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangmanGame {
    letters: HangmanLetters,
    num_lives: i32,
    num_answer_guesses: u32,
    num_wrong_letters: u32,
    num_correct_letters: u32,
}

impl HangmanGame {
    /// Start a game over `answer`, filed under `category`.
    pub fn new(answer: &str, category: &str) -> Result<Self, GameError> {
        Ok(Self {
            letters: HangmanLetters::new(answer, category)?,
            num_lives: STARTING_LIVES,
            num_answer_guesses: 0,
            num_wrong_letters: 0,
            num_correct_letters: 0,
        })
    }

    /// Guess the entire answer, case-insensitively.
    ///
    /// A correct guess reveals every letter and costs nothing; a wrong
    /// one costs a life and counts against the score. Returns whether the
    /// guess matched.
    pub fn make_answer_guess(&mut self, guess: &str) -> bool {
        let correct = guess.to_uppercase() == self.letters.answer();
        if correct {
            self.reveal_answer();
        } else {
            self.num_lives -= 1;
            self.num_answer_guesses += 1;
        }
        debug!(correct, lives = self.num_lives, "answer guess");
        correct
    }

    /// Guess a single letter.
    ///
    /// Returns `Ok(true)` when the guess was accepted — the first use of
    /// this letter, right or wrong — and `Ok(false)` with no state change
    /// when the letter was already used. The return value signals
    /// acceptance, not correctness.
    pub fn make_letter_guess(&mut self, guess: char) -> Result<bool, GameError> {
        if self.letters.letter_state(guess)? != LetterState::Unused {
            return Ok(false);
        }
        if self.letters.make_guess(guess)? {
            self.num_correct_letters += 1;
        } else {
            self.num_wrong_letters += 1;
            self.num_lives -= 1;
        }
        debug!(letter = %guess, lives = self.num_lives, "letter guess");
        Ok(true)
    }

    /// Mark every letter of the answer correct.
    ///
    /// Bypasses the guess counters: revealing is not guessing.
    pub fn reveal_answer(&mut self) {
        let answer = self.letters.answer().to_string();
        for c in answer.chars().filter(|c| c.is_ascii_alphabetic()) {
            self.letters.record_guess(c);
        }
    }

    /// The masked answer: correctly guessed letters and spaces pass
    /// through, everything else renders as `'_'`.
    #[must_use]
    pub fn game_state(&self) -> String {
        self.letters
            .answer()
            .chars()
            .map(|c| {
                if c == ' ' || self.letters.letter_state(c) == Ok(LetterState::Correct) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// The masked answer padded so no word straddles a `max_width` line
    /// boundary.
    ///
    /// When a word (plus its separating space) does not fit the rest of
    /// the current line, spaces pad to the next boundary and the word
    /// starts there. A word longer than `max_width` is placed after a
    /// single space and left unsplit.
    #[must_use]
    pub fn fixed_game_state(&self, max_width: usize) -> String {
        assert!(max_width > 0, "width must be positive");

        let state = self.game_state();
        let mut words: Vec<&str> = state.split(' ').collect();
        while words.last() == Some(&"") {
            words.pop();
        }

        let mut words = words.into_iter();
        let mut out = String::from(words.next().unwrap_or(""));

        for word in words {
            let available = max_width - (out.len() % max_width);
            if available == max_width {
                // Already at a line boundary; no separating space needed.
                out.push_str(word);
            } else if word.len() + 1 <= available {
                out.push(' ');
                out.push_str(word);
            } else {
                out.push(' ');
                if word.len() <= max_width {
                    while out.len() % max_width != 0 {
                        out.push(' ');
                    }
                }
                out.push_str(word);
            }
        }
        out
    }

    /// The score for a won game; `-1` for any other state.
    #[must_use]
    pub fn score(&self) -> i32 {
        if self.did_user_win() {
            self.letters.answer().len() as i32 * 2
                - self.num_wrong_letters as i32 * 2
                - self.num_correct_letters as i32
                - self.num_answer_guesses as i32
        } else {
            -1
        }
    }

    /// Whether the player revealed the answer with lives to spare.
    #[must_use]
    pub fn did_user_win(&self) -> bool {
        self.num_lives > 0 && self.letters.is_solved()
    }

    /// Whether the session can accept no further guesses.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.did_user_win() || self.num_lives <= 0
    }

    /// Length of the longest space-separated word of the answer.
    #[must_use]
    pub fn longest_word_length(&self) -> usize {
        self.letters
            .answer()
            .split(' ')
            .map(str::len)
            .max()
            .unwrap_or(0)
    }

    /// The uppercase answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        self.letters.answer()
    }

    /// The category the answer was drawn from.
    #[must_use]
    pub fn category(&self) -> &str {
        self.letters.category()
    }

    /// Lives remaining.
    #[must_use]
    pub fn num_lives(&self) -> i32 {
        self.num_lives
    }

    /// Wrong whole-answer attempts so far.
    #[must_use]
    pub fn num_answer_guesses(&self) -> u32 {
        self.num_answer_guesses
    }

    /// Accepted letter guesses that missed.
    #[must_use]
    pub fn num_wrong_letters(&self) -> u32 {
        self.num_wrong_letters
    }

    /// Accepted letter guesses that hit.
    #[must_use]
    pub fn num_correct_letters(&self) -> u32 {
        self.num_correct_letters
    }

    /// The per-letter state tracker.
    #[must_use]
    pub fn letters(&self) -> &HangmanLetters {
        &self.letters
    }
}

impl PuzzleEngine for HangmanGame {
    type Move = HangmanGuess;

    fn is_valid_move(&self, mv: &HangmanGuess) -> bool {
        match mv {
            HangmanGuess::Letter(c) => c.is_ascii_alphabetic(),
            HangmanGuess::Answer(_) => true,
        }
    }

    fn apply_move(&mut self, mv: &HangmanGuess) -> Result<MoveOutcome, GameError> {
        if self.is_game_over() {
            return Ok(MoveOutcome::Ignored);
        }
        match mv {
            HangmanGuess::Letter(c) => Ok(if self.make_letter_guess(*c)? {
                MoveOutcome::Applied
            } else {
                MoveOutcome::Ignored
            }),
            HangmanGuess::Answer(guess) => {
                // Right or wrong, an answer guess always mutates: it either
                // reveals the board or costs a life.
                self.make_answer_guess(guess);
                Ok(MoveOutcome::Applied)
            }
        }
    }

    fn outcome(&self) -> Option<GameResult> {
        if self.did_user_win() {
            Some(GameResult::Won)
        } else if self.num_lives <= 0 {
            Some(GameResult::Lost)
        } else {
            None
        }
    }

    fn final_score(&self) -> Option<Score> {
        self.did_user_win()
            .then(|| Score::new(self.score(), GameKind::Hangman))
    }
}
