/*!
Errors produced while reading documents and navigating them.

Every error is fatal: a failed [`read`](crate::read) never returns a partial document.
Parse errors carry the byte offset into the input where they were detected, along
with the offending character or substring.
*/

use thiserror::Error;

/**
An error reading or navigating a JSON document.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /**
    The input ran out while looking for whitespace, a delimiter or a closing quote.
    */
    #[error("unexpected end of input looking for {expected}, checking from {offset}")]
    UnexpectedEndOfInput {
        offset: usize,
        expected: &'static str,
    },
    /**
    A `null`, `true` or `false` candidate didn't match its expected spelling.
    */
    #[error("invalid literal `{literal}` at {offset}")]
    InvalidLiteral { offset: usize, literal: String },
    /**
    A numeric span was neither a valid integer nor a valid decimal.
    */
    #[error("invalid number literal `{literal}` at {offset}")]
    InvalidNumber { offset: usize, literal: String },
    /**
    An unescaped `\` was followed by an unrecognized sequence.
    */
    #[error("invalid escape sequence `{sequence}` at {offset}")]
    InvalidEscape { offset: usize, sequence: String },
    /**
    A string range fell outside of the input.
    */
    #[error("out of bounds building string from {from} to {to} in input of length {len}")]
    OutOfBounds { from: usize, to: usize, len: usize },
    /**
    A separator, terminator or trailing character wasn't the one the grammar needs.
    */
    #[error("unexpected character `{found}` at {offset}, expected {expected}")]
    UnexpectedCharacter {
        offset: usize,
        found: char,
        expected: &'static str,
    },
    /**
    A node was asked for an interpretation that doesn't match its value.
    */
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /**
    The byte offset into the input the error was detected at, if the error came from parsing.
    */
    pub fn offset(&self) -> Option<usize> {
        match *self {
            Error::UnexpectedEndOfInput { offset, .. }
            | Error::InvalidLiteral { offset, .. }
            | Error::InvalidNumber { offset, .. }
            | Error::InvalidEscape { offset, .. }
            | Error::UnexpectedCharacter { offset, .. } => Some(offset),
            Error::OutOfBounds { from, .. } => Some(from),
            Error::TypeMismatch { .. } => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
