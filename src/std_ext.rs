/*!
This module has some "standard" extensions used in the decoder.

These extensions follow the same layout as Rust's standard library.
*/

pub(crate) mod char;
