/*!
Macro helpers for the decoder.

These macros assert decoder invariants in tests or when the `checked` cfg is enabled,
just to try catch any positions that drift out of the input early. In regular builds
they compile to nothing.
*/

macro_rules! test_assert {
    ($($tokens:tt)*) => {{
        #[cfg(any(test, checked))]
        {
            assert!($($tokens)*);
        }
    }};
}

macro_rules! test_assert_eq {
    ($($tokens:tt)*) => {{
        #[cfg(any(test, checked))]
        {
            assert_eq!($($tokens)*);
        }
    }};
}
