/*!
String unescaping for JSON documents.

Strings are decoded straight out of the input buffer between two positions found by the
scanner. Escapes are resolved left to right, so the output for a given escape can depend
on what's already been unescaped:

- `\b` is a destructive backspace. It removes the previously unescaped character
  rather than inserting a `U+0008`.
- `\uXXXX` produces a single UTF-16 code unit. A high surrogate that's immediately
  followed by a low surrogate escape becomes a single character. Surrogates that
  don't pair up are replaced with `U+FFFD`.
*/

use crate::{
    error::{Error, Result},
    std_ext::char::{is_high_surrogate, try_from_utf16_surrogate_pair},
};

/**
Escapes that map directly onto a single character.
*/
const ESCAPES: [(char, char); 7] = [
    ('n', '\n'),
    ('t', '\t'),
    ('f', '\u{0c}'),
    ('r', '\r'),
    ('/', '/'),
    ('\\', '\\'),
    ('"', '"'),
];

/**
Decode the string in `input[from..to]`, resolving any escapes in it.

The range is the content between a pair of quotes, not including the quotes themselves.
*/
pub(crate) fn decode_string(input: &str, from: usize, to: usize) -> Result<String> {
    // `get` also rejects reversed ranges and ranges that split a character
    let raw = input.get(from..to).ok_or(Error::OutOfBounds {
        from,
        to,
        len: input.len(),
    })?;

    // most strings don't contain any escapes at all
    if !raw.as_bytes().contains(&b'\\') {
        return Ok(raw.to_owned());
    }

    let mut unescaped = Unescaped {
        buf: String::with_capacity(raw.len()),
        high_surrogate: None,
    };

    let mut chars = raw.char_indices();
    while let Some((i, curr)) = chars.next() {
        if curr != '\\' {
            unescaped.push(curr);
            continue;
        }

        let offset = from + i;
        let escaped = match chars.next() {
            Some((_, escaped)) => escaped,
            None => {
                return Err(Error::InvalidEscape {
                    offset,
                    sequence: "\\".to_owned(),
                })
            }
        };

        match escaped {
            'b' => unescaped.backspace(),
            'u' => {
                // the 4 hex digits follow the `\u`
                let unit = raw
                    .get(i + 2..i + 6)
                    .filter(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()))
                    .and_then(|digits| u16::from_str_radix(digits, 16).ok())
                    .ok_or_else(|| Error::InvalidEscape {
                        offset,
                        sequence: raw[i..].chars().take(6).collect(),
                    })?;

                unescaped.push_unit(unit);

                // skip over the digits
                chars.nth(3);
            }
            escaped => match lookup(escaped) {
                Some(ch) => unescaped.push(ch),
                None => {
                    return Err(Error::InvalidEscape {
                        offset,
                        sequence: format!("\\{}", escaped),
                    })
                }
            },
        }
    }

    Ok(unescaped.finish())
}

#[inline]
fn lookup(escaped: char) -> Option<char> {
    ESCAPES
        .iter()
        .find(|(from, _)| *from == escaped)
        .map(|(_, to)| *to)
}

struct Unescaped {
    buf: String,
    /**
    A previously decoded `\u` escape that should be the first half of a surrogate pair.
    */
    high_surrogate: Option<u16>,
}

impl Unescaped {
    #[inline]
    fn push(&mut self, ch: char) {
        self.flush_surrogate();
        self.buf.push(ch);
    }

    fn push_unit(&mut self, unit: u16) {
        match self.high_surrogate.take() {
            Some(high) => match try_from_utf16_surrogate_pair(high, unit) {
                Ok(ch) => self.buf.push(ch),
                Err(_) => {
                    self.buf.push(char::REPLACEMENT_CHARACTER);
                    self.push_unit(unit);
                }
            },
            None if is_high_surrogate(unit) => self.high_surrogate = Some(unit),
            // lone low surrogates aren't valid chars
            None => self
                .buf
                .push(char::from_u32(unit as u32).unwrap_or(char::REPLACEMENT_CHARACTER)),
        }
    }

    fn backspace(&mut self) {
        if self.high_surrogate.take().is_none() {
            self.buf.pop();
        }
    }

    #[inline]
    fn flush_surrogate(&mut self) {
        if self.high_surrogate.take().is_some() {
            self.buf.push(char::REPLACEMENT_CHARACTER);
        }
    }

    fn finish(mut self) -> String {
        self.flush_surrogate();
        self.buf
    }
}
