/*!
Read-only navigation over decoded documents.

A [`Document`] owns the decoded tree. [`Node`]s are cheap, copyable views into it that
can be queried any number of times in any order. Typed access is lazy: nothing about
the tree is checked until a caller asks for a particular interpretation of a node.
*/

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    de::Value,
    error::{Error, Result},
};

// the value of keys that aren't in a map
static NULL: Value = Value::Null;

/**
A decoded JSON document.

The document is the root node of the tree, it supports the same accessors as [`Node`].
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

/**
A view of a single value within a [`Document`].
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node<'doc> {
    value: &'doc Value,
}

impl Document {
    #[inline]
    pub(crate) fn new(root: Value) -> Self {
        Document { root }
    }

    /**
    The root node of the document.
    */
    #[inline]
    pub fn root(&self) -> Node<'_> {
        Node { value: &self.root }
    }

    /**
    The elements of the root array.

    See [`Node::elements`].
    */
    pub fn elements(&self) -> Result<Vec<Node<'_>>> {
        self.root().elements()
    }

    /**
    The value of a key in the root map.

    See [`Node::get`].
    */
    pub fn get(&self, key: &str) -> Result<Node<'_>> {
        self.root().get(key)
    }

    /**
    Interpret the root value as a `T`.

    See [`Node::value_as`].
    */
    pub fn value_as<'doc, T: FromValue<'doc>>(&'doc self) -> Result<Option<T>> {
        self.root().value_as()
    }

    /**
    Take the decoded root value out of the document.
    */
    #[inline]
    pub fn into_value(self) -> Value {
        self.root
    }
}

#[cfg(any(test, feature = "serde_json"))]
impl Document {
    /**
    Convert a document into a [`serde_json::Value`].
    */
    pub fn to_value(&self) -> serde_json::Value {
        self.root.to_json()
    }
}

impl<'doc> Node<'doc> {
    /**
    The elements of an array, in order.

    Fails with [`Error::TypeMismatch`] if this node isn't an array.
    */
    pub fn elements(self) -> Result<Vec<Node<'doc>>> {
        match self.value {
            Value::Arr(arr) => Ok(arr.iter().map(|value| Node { value }).collect()),
            other => Err(mismatch("array", other)),
        }
    }

    /**
    The value of a key in a map.

    A key that isn't in the map produces a node for `null`, so a missing key and a key
    explicitly set to `null` look the same.

    Fails with [`Error::TypeMismatch`] if this node isn't a map.
    */
    pub fn get(self, key: &str) -> Result<Node<'doc>> {
        match self.value {
            Value::Map(map) => Ok(Node {
                value: map.get(key).unwrap_or(&NULL),
            }),
            other => Err(mismatch("map", other)),
        }
    }

    /**
    Interpret this node as a `T`.

    Returns `Ok(None)` if the node is `null`. Fails with [`Error::TypeMismatch`]
    if the node's value can't be represented as a `T`.
    */
    pub fn value_as<T: FromValue<'doc>>(self) -> Result<Option<T>> {
        if self.value.is_null() {
            return Ok(None);
        }

        T::from_value(self.value)
            .map(Some)
            .ok_or_else(|| mismatch(T::KIND, self.value))
    }

    #[inline]
    pub fn value(self) -> &'doc Value {
        self.value
    }

    #[inline]
    pub fn kind(self) -> &'static str {
        self.value.kind()
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.value.is_null()
    }
}

#[cold]
fn mismatch(expected: &'static str, found: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

/**
A type that a [`Node`] can be interpreted as.

Integers can be read as any wider integer type, so an `i32` value can be read as an `i64`
or a `BigInt`. Every other kind needs an exact match.
*/
pub trait FromValue<'doc>: Sized {
    /**
    The name of the kind of value this type reads, for error messages.
    */
    const KIND: &'static str;

    fn from_value(value: &'doc Value) -> Option<Self>;
}

impl<'doc> FromValue<'doc> for bool {
    const KIND: &'static str = "bool";

    fn from_value(value: &'doc Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'doc> FromValue<'doc> for &'doc str {
    const KIND: &'static str = "string";

    fn from_value(value: &'doc Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'doc> FromValue<'doc> for String {
    const KIND: &'static str = "string";

    fn from_value(value: &'doc Value) -> Option<Self> {
        value.as_str().map(ToOwned::to_owned)
    }
}

impl<'doc> FromValue<'doc> for i32 {
    const KIND: &'static str = "i32";

    fn from_value(value: &'doc Value) -> Option<Self> {
        match *value {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }
}

impl<'doc> FromValue<'doc> for i64 {
    const KIND: &'static str = "i64";

    fn from_value(value: &'doc Value) -> Option<Self> {
        match *value {
            Value::Int(n) => Some(n.into()),
            Value::Long(n) => Some(n),
            _ => None,
        }
    }
}

impl<'doc> FromValue<'doc> for BigInt {
    const KIND: &'static str = "big integer";

    fn from_value(value: &'doc Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(BigInt::from(*n)),
            Value::Long(n) => Some(BigInt::from(*n)),
            Value::BigInt(n) => Some(n.clone()),
            _ => None,
        }
    }
}

impl<'doc> FromValue<'doc> for f64 {
    const KIND: &'static str = "f64";

    fn from_value(value: &'doc Value) -> Option<Self> {
        match *value {
            Value::Double(n) => Some(n),
            _ => None,
        }
    }
}

impl<'doc> FromValue<'doc> for BigDecimal {
    const KIND: &'static str = "big decimal";

    fn from_value(value: &'doc Value) -> Option<Self> {
        match value {
            Value::BigDecimal(n) => Some(n.clone()),
            _ => None,
        }
    }
}
