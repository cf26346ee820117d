/*!
# `wheel-json`

A small JSON decoder that reads a document straight into a tree of typed values.

There's no separate token stream or syntax tree. The decoder walks the input once,
recursively, and every step produces a final [`Value`] along with the position just
after it. The resulting [`Document`] can then be navigated with [`Node::get`],
[`Node::elements`] and [`Node::value_as`].

```
let doc = wheel_json::read(r#"{"foo": {"bar": [1, 2, 3], "baz": "qux"}}"#)?;

let bar = doc.get("foo")?.get("bar")?;
let ints = bar
    .elements()?
    .into_iter()
    .map(|elem| elem.value_as::<i32>())
    .collect::<Result<Vec<_>, _>>()?;

assert_eq!(vec![Some(1), Some(2), Some(3)], ints);
assert_eq!(Some("qux"), doc.get("foo")?.get("baz")?.value_as::<&str>()?);
# Ok::<(), wheel_json::Error>(())
```

## Numbers

Numbers keep their precision. Integers are read as an `i32`, `i64` or arbitrary precision
integer, whichever is narrowest. Decimals are read as an `f64` when that's exactly the
number that was written, and an arbitrary precision decimal otherwise.

## Strings

The escape `\b` is a destructive backspace: it removes the character before it instead
of inserting a `U+0008`.
*/

#![deny(warnings)]
#![allow(clippy::redundant_static_lifetimes)]

#[macro_use]
mod macros;

mod std_ext;

mod error;
mod node;
mod unescape;

pub mod de;

pub use de::Value;
pub use error::{Error, Result};
pub use node::{Document, FromValue, Node};

pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;

/**
Read a JSON document.

The input must contain exactly one JSON value, optionally surrounded by whitespace.
Any error aborts the whole read, there's no partial result.
*/
pub fn read(input: &str) -> Result<Document> {
    tracing::trace!(len = input.len(), "reading document");

    match de::decode(input) {
        Ok(root) => Ok(Document::new(root)),
        Err(err) => {
            tracing::debug!(%err, offset = ?err.offset(), "failed to read document");

            Err(err)
        }
    }
}
