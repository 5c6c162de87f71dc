//! Hangman: reveal the answer one letter at a time, three lives.

mod game;
mod letters;

pub use game::{HangmanGame, HangmanGuess, STARTING_LIVES};
pub use letters::{HangmanLetters, LetterState};
