//! Invalid-input errors raised at the engine boundary.
//!
//! Only malformed *input* is an error: a guess that is not a letter, or an
//! answer with nothing in it to guess. Illegal but well-formed game
//! actions (moving on a solved board, re-guessing a used letter) are not
//! errors; the engines ignore them and say so through
//! [`MoveOutcome`](crate::rules::MoveOutcome).

use thiserror::Error;

/// An input the engines refuse to act on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A guess that is not an ASCII letter.
    #[error("not a letter: {letter:?}")]
    InvalidLetter {
        /// The offending character, as received.
        letter: char,
    },

    /// An answer without a single letter, or with characters outside
    /// ASCII letters and spaces.
    #[error("answer must contain at least one letter and only letters and spaces")]
    InvalidAnswer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GameError::InvalidLetter { letter: '7' };
        assert_eq!(format!("{}", err), "not a letter: '7'");
    }
}
