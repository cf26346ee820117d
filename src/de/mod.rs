/*!
Deserialization for JSON documents.

The decoder is a recursive descent over the input that looks at a single byte to decide
what kind of value comes next. It doesn't build an intermediate tree: each step produces
the final [`Value`] directly along with the position just past it, and the enclosing map
or array picks up scanning from there.

Parsing is lenient in the same places the scanner is. A map key is whatever sits
between the next two unescaped quotes after a `{` or `,`, and a `:` is searched for
rather than expected right after the key. Everything that's read is still checked,
so literals, numbers, escapes and separators that don't fit produce an [`Error`].

Recursion depth follows the nesting depth of the document. There's no cap on it, so
degenerate inputs like `[[[[[[[[[[[[[[[[[[[[[[[[[..` can exhaust the stack.
*/

mod num;
mod scan;
mod value;

use std::collections::HashMap;

use crate::error::{Error, Result};

pub(crate) use scan::Scanner;
pub use value::Value;

/**
Decode a single JSON value that may be surrounded by whitespace.
*/
pub(crate) fn decode(input: &str) -> Result<Value> {
    let scanner = Scanner::new(input);

    let start = scanner.skip_whitespace(0)?;
    let (value, end) = decode_value(scanner, start)?;

    // only whitespace may follow the value
    if let Ok(trailing) = scanner.skip_whitespace(end) {
        return Err(Error::UnexpectedCharacter {
            offset: trailing,
            found: scanner.char_at(trailing),
            expected: "end of input",
        });
    }

    Ok(value)
}

/**
Decode the value starting at `from`.

Returns the value and the position immediately after it.
*/
pub(crate) fn decode_value(scanner: Scanner, from: usize) -> Result<(Value, usize)> {
    match scanner.peek(from) {
        Some(b'{') => decode_map(scanner, from),
        Some(b'[') => decode_arr(scanner, from),
        Some(b'"') => {
            let closing_quote = scanner.find_unescaped(b'"', from + 1)?;
            let s = scanner.decode_string(from + 1, closing_quote)?;

            Ok((Value::Str(s), closing_quote + 1))
        }
        Some(b'n') => decode_literal(scanner, from, "null", Value::Null),
        Some(b't') => decode_literal(scanner, from, "true", Value::Bool(true)),
        Some(b'f') => decode_literal(scanner, from, "false", Value::Bool(false)),
        Some(_) => decode_num(scanner, from),
        None => Err(Error::UnexpectedEndOfInput {
            offset: from,
            expected: "a value",
        }),
    }
}

fn decode_map(scanner: Scanner, from: usize) -> Result<(Value, usize)> {
    test_assert_eq!(Some(b'{'), scanner.peek(from));

    let mut map = HashMap::new();

    let next = scanner.skip_whitespace(from + 1)?;
    if let Some(b'}') = scanner.peek(next) {
        return Ok((Value::Map(map), next + 1));
    }

    let mut delim = from;
    loop {
        let key_start = scanner.find_unescaped(b'"', delim)? + 1;
        let key_end = scanner.find_unescaped(b'"', key_start)?;
        let key = scanner.decode_string(key_start, key_end)?;

        let colon = scanner.find_unescaped(b':', key_end + 1)?;
        let value_start = scanner.skip_whitespace(colon + 1)?;
        let (value, value_end) = decode_value(scanner, value_start)?;

        // duplicate keys overwrite earlier ones
        map.insert(key, value);

        delim = scanner.skip_whitespace(value_end)?;
        match scanner.peek(delim) {
            Some(b',') => continue,
            Some(b'}') => return Ok((Value::Map(map), delim + 1)),
            _ => {
                return Err(Error::UnexpectedCharacter {
                    offset: delim,
                    found: scanner.char_at(delim),
                    expected: "`,` or `}`",
                })
            }
        }
    }
}

fn decode_arr(scanner: Scanner, from: usize) -> Result<(Value, usize)> {
    test_assert_eq!(Some(b'['), scanner.peek(from));

    let mut arr = Vec::new();

    let next = scanner.skip_whitespace(from + 1)?;
    if let Some(b']') = scanner.peek(next) {
        return Ok((Value::Arr(arr), next + 1));
    }

    let mut delim = from;
    loop {
        let value_start = scanner.skip_whitespace(delim + 1)?;
        let (value, value_end) = decode_value(scanner, value_start)?;

        arr.push(value);

        delim = scanner.skip_whitespace(value_end)?;
        match scanner.peek(delim) {
            Some(b',') => continue,
            Some(b']') => return Ok((Value::Arr(arr), delim + 1)),
            _ => {
                return Err(Error::UnexpectedCharacter {
                    offset: delim,
                    found: scanner.char_at(delim),
                    expected: "`,` or `]`",
                })
            }
        }
    }
}

fn decode_literal(
    scanner: Scanner,
    from: usize,
    expected: &'static str,
    value: Value,
) -> Result<(Value, usize)> {
    let end = scanner.literal_end(from);
    let literal = scanner.slice(from, end);

    if literal != expected {
        return Err(Error::InvalidLiteral {
            offset: from,
            literal: literal.to_owned(),
        });
    }

    Ok((value, end))
}

fn decode_num(scanner: Scanner, from: usize) -> Result<(Value, usize)> {
    let end = scanner.number_end(from);
    let literal = scanner.slice(from, end);

    match num::classify(literal) {
        Some(value) => {
            test_assert!(end > from);

            Ok((value, end))
        }
        // if nothing looked like a number then report the character that stopped it
        None if literal.is_empty() => Err(Error::InvalidNumber {
            offset: from,
            literal: scanner.char_at(from).to_string(),
        }),
        None => Err(Error::InvalidNumber {
            offset: from,
            literal: literal.to_owned(),
        }),
    }
}
