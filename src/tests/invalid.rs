/*
Invalid inputs fail the whole read with an error that points at where the problem is.

Many of these cases come from deciding on semantics for almost-JSON the decoder could
trip over, like misspelled literals or missing separators.
*/

use crate::{read, Error};

fn read_err(input: &str) -> Error {
    match read(input) {
        Ok(document) => panic!("expected `{}` to fail, got {:?}", input, document),
        Err(e) => e,
    }
}

#[test]
fn err_invalid_literal_value() {
    let input = r#"{"foo": thevalue}"#;

    assert_eq!(
        Error::InvalidLiteral {
            offset: 8,
            literal: "thevalue".to_owned()
        },
        read_err(input)
    );
}

#[test]
fn err_invalid_literal_value_before_valid() {
    // a bad value aborts the read, nothing after it is decoded
    let input = "{\n    \"foo\": thevalue,\n    \"bar\": \"ohoh\"\n}";

    assert!(matches!(
        read_err(input),
        Error::InvalidLiteral { offset: 13, .. }
    ));
}

#[test]
fn err_invalid_literal_non_ascii() {
    let input = r#"{"foo": trueé}"#;

    assert_eq!(
        Error::InvalidLiteral {
            offset: 8,
            literal: "trueé".to_owned()
        },
        read_err(input)
    );
}

#[test]
fn err_invalid_literals() {
    for (input, literal) in [
        ("nul", "nul"),
        ("nulll", "nulll"),
        ("tru", "tru"),
        ("trueish", "trueish"),
        ("fals", "fals"),
        ("falsey", "falsey"),
        ("[nool]", "nool"),
        ("[nullé]", "nullé"),
        ("falseß", "falseß"),
    ] {
        match read_err(input) {
            Error::InvalidLiteral { literal: found, .. } => assert_eq!(literal, found, "{}", input),
            e => panic!("unexpected error for `{}`: {:?}", input, e),
        }
    }
}

#[test]
fn err_invalid_numbers() {
    for (input, offset, literal) in [
        ("-", 0, "-"),
        (".", 0, "."),
        ("1e", 0, "1e"),
        ("1.2.3", 0, "1.2.3"),
        ("[1, 2-3]", 4, "2-3"),
        ("{\"a\": --1}", 6, "--1"),
        ("[1,]", 3, "]"),
        ("{\"a\": }", 6, "}"),
        ("x", 0, "x"),
    ] {
        assert_eq!(
            Error::InvalidNumber {
                offset,
                literal: literal.to_owned()
            },
            read_err(input),
            "{}",
            input
        );
    }
}

#[test]
fn err_invalid_escape() {
    let input = r#"{"a": "this string has an invalid \j escape in it"}"#;

    assert_eq!(
        Error::InvalidEscape {
            offset: 34,
            sequence: "\\j".to_owned()
        },
        read_err(input)
    );
}

#[test]
fn err_invalid_escape_in_key() {
    let input = r#"{"a\q": 1}"#;

    assert!(matches!(
        read_err(input),
        Error::InvalidEscape { offset: 3, .. }
    ));
}

#[test]
fn err_invalid_codepoint() {
    let input = r#""\u00g0""#;

    assert!(matches!(
        read_err(input),
        Error::InvalidEscape { offset: 1, .. }
    ));
}

#[test]
fn err_empty() {
    for input in ["", "   ", "\n\t"] {
        assert!(
            matches!(read_err(input), Error::UnexpectedEndOfInput { .. }),
            "{:?}",
            input
        );
    }
}

#[test]
fn err_incomplete_string() {
    let input = r#"{"a":"this string is not finished}"#;

    assert!(matches!(
        read_err(input),
        Error::UnexpectedEndOfInput { offset: 6, .. }
    ));
}

#[test]
fn err_incomplete_string_escape() {
    // this string ends with an odd number of escapes so isn't terminated
    let input = r#""\\\u\\\""#;

    assert!(matches!(
        read_err(input),
        Error::UnexpectedEndOfInput { .. }
    ));
}

#[test]
fn err_incomplete_containers() {
    for input in ["{", "[", "[1", "[1,", "{\"a\"", "{\"a\":", "{\"a\": 1", "{\"a\": 1,"] {
        assert!(
            matches!(read_err(input), Error::UnexpectedEndOfInput { .. }),
            "{}",
            input
        );
    }
}

#[test]
fn err_missing_separator() {
    assert_eq!(
        Error::UnexpectedCharacter {
            offset: 3,
            found: '2',
            expected: "`,` or `]`"
        },
        read_err("[1 2]")
    );
    assert_eq!(
        Error::UnexpectedCharacter {
            offset: 8,
            found: '"',
            expected: "`,` or `}`"
        },
        read_err(r#"{"a": 1 "b": 2}"#)
    );
}

#[test]
fn err_mismatched_terminator() {
    assert!(matches!(
        read_err(r#"{"a": 1]"#),
        Error::UnexpectedCharacter { offset: 7, found: ']', .. }
    ));
    assert!(matches!(
        read_err("[1}"),
        Error::UnexpectedCharacter { offset: 2, found: '}', .. }
    ));
}

#[test]
fn err_trailing_content() {
    assert_eq!(
        Error::UnexpectedCharacter {
            offset: 5,
            found: 'x',
            expected: "end of input"
        },
        read_err("true x")
    );
    assert!(matches!(
        read_err("{} {}"),
        Error::UnexpectedCharacter { offset: 3, found: '{', .. }
    ));
    assert!(matches!(
        read_err("1 ß"),
        Error::UnexpectedCharacter { offset: 2, found: 'ß', .. }
    ));
}

#[test]
fn err_deeply_nested_invalid() {
    let input = "[[[[[[[[[[{\"a\": [nope]}]]]]]]]]]]";

    assert!(matches!(
        read_err(input),
        Error::InvalidLiteral { offset: 17, .. }
    ));
}
