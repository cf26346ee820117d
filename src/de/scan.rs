/*!
Position-based scanning over the raw input.

The scanner holds nothing but a reference to the input. Every operation takes a position
and returns a new one, so the decoder threads positions through its recursive calls
instead of sharing a cursor.

Positions are byte offsets. Everything the scanner looks for is ASCII, so a position it
returns is always on a character boundary.
*/

use crate::{
    error::{Error, Result},
    unescape::decode_string,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Scanner<'input> {
    input: &'input str,
}

impl<'input> Scanner<'input> {
    #[inline]
    pub(crate) fn new(input: &'input str) -> Self {
        Scanner { input }
    }

    #[inline]
    pub(crate) fn peek(&self, pos: usize) -> Option<u8> {
        self.input.as_bytes().get(pos).copied()
    }

    /**
    The character starting at `pos`, for error reporting.
    */
    pub(crate) fn char_at(&self, pos: usize) -> char {
        self.input
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    #[inline]
    pub(crate) fn slice(&self, from: usize, to: usize) -> &'input str {
        self.input.get(from..to).unwrap_or("")
    }

    /**
    Find the first position at or after `pos` that isn't whitespace.
    */
    pub(crate) fn skip_whitespace(&self, pos: usize) -> Result<usize> {
        self.input
            .as_bytes()
            .get(pos..)
            .and_then(|rest| rest.iter().position(|b| !b.is_ascii_whitespace()))
            .map(|skipped| pos + skipped)
            .ok_or(Error::UnexpectedEndOfInput {
                offset: pos,
                expected: "non-whitespace",
            })
    }

    /**
    Find the first position at or after `pos` holding `delim` that isn't escaped.

    A `\` escapes the character after it, unless it's been escaped itself.
    So `\\"` ends on the `"` but `\\\"` doesn't.
    */
    pub(crate) fn find_unescaped(&self, delim: u8, pos: usize) -> Result<usize> {
        let mut escape = false;

        for (i, &curr) in self.input.as_bytes().iter().enumerate().skip(pos) {
            if !escape && curr == delim {
                return Ok(i);
            }

            escape = !escape && curr == b'\\';
        }

        Err(Error::UnexpectedEndOfInput {
            offset: pos,
            expected: expected_delim(delim),
        })
    }

    /**
    Decode the string in `from..to`.
    */
    #[inline]
    pub(crate) fn decode_string(&self, from: usize, to: usize) -> Result<String> {
        decode_string(self.input, from, to)
    }

    /**
    Find the end of the run of letters starting at `pos`.
    */
    pub(crate) fn literal_end(&self, pos: usize) -> usize {
        let rest = self.input.get(pos..).unwrap_or("");

        // letters aren't only ASCII, so `nullé` is one run
        rest.char_indices()
            .find(|(_, ch)| !ch.is_alphabetic())
            .map(|(i, _)| pos + i)
            .unwrap_or(pos + rest.len())
    }

    /**
    Find the end of the run of characters that could be part of a number starting at `pos`.
    */
    pub(crate) fn number_end(&self, pos: usize) -> usize {
        self.end_of(pos, |b| {
            b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')
        })
    }

    #[inline]
    fn end_of(&self, pos: usize, mut f: impl FnMut(u8) -> bool) -> usize {
        let bytes = self.input.as_bytes();

        let mut end = pos;
        while end < bytes.len() && f(bytes[end]) {
            end += 1;
        }

        end
    }
}

fn expected_delim(delim: u8) -> &'static str {
    match delim {
        b'"' => "`\"`",
        b':' => "`:`",
        b',' => "`,`",
        b'}' => "`}`",
        b']' => "`]`",
        _ => "a delimiter",
    }
}
