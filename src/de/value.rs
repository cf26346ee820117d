use std::collections::HashMap;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/**
A decoded JSON value.

Numbers are kept in the narrowest representation that's exact for their literal,
so `1` is an [`Value::Int`] but `2147483648` is a [`Value::Long`].
*/
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Str(String),
    Int(i32),
    Long(i64),
    BigInt(BigInt),
    Double(f64),
    BigDecimal(BigDecimal),
    /**
    An object. Duplicate keys keep the last value.
    */
    Map(HashMap<String, Value>),
    Arr(Vec<Value>),
}

impl Value {
    /**
    The name of the kind of value this is, for error messages.
    */
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Int(_) => "i32",
            Value::Long(_) => "i64",
            Value::BigInt(_) => "big integer",
            Value::Double(_) => "f64",
            Value::BigDecimal(_) => "big decimal",
            Value::Map(_) => "map",
            Value::Arr(_) => "array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        if let Value::Int(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Value::Long(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_big_int(&self) -> Option<&BigInt> {
        if let Value::BigInt(n) = self {
            Some(n)
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        if let Value::Double(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_big_decimal(&self) -> Option<&BigDecimal> {
        if let Value::BigDecimal(n) = self {
            Some(n)
        } else {
            None
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        if let Value::Map(map) = self {
            Some(map)
        } else {
            None
        }
    }

    pub fn as_arr(&self) -> Option<&[Value]> {
        if let Value::Arr(arr) = self {
            Some(arr)
        } else {
            None
        }
    }
}

#[cfg(any(test, feature = "serde_json"))]
impl Value {
    /**
    Convert a value into a [`serde_json::Value`].

    Arbitrary precision numbers that `serde_json` can't represent are converted into strings.
    */
    pub fn to_json(&self) -> serde_json::Value {
        use std::str::FromStr;

        fn num_or_str(n: String) -> serde_json::Value {
            match serde_json::Number::from_str(&n) {
                Ok(num) => serde_json::Value::Number(num),
                _ => serde_json::Value::String(n),
            }
        }

        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::Int(n) => serde_json::Value::Number((*n).into()),
            Value::Long(n) => serde_json::Value::Number((*n).into()),
            Value::BigInt(n) => num_or_str(n.to_string()),
            Value::Double(n) => match serde_json::Number::from_f64(*n) {
                Some(num) => serde_json::Value::Number(num),
                None => serde_json::Value::Null,
            },
            Value::BigDecimal(n) => num_or_str(n.to_string()),
            Value::Map(map) => {
                let mut value = serde_json::Map::with_capacity(map.len());

                for (k, v) in map {
                    value.insert(k.clone(), v.to_json());
                }

                serde_json::Value::Object(value)
            }
            Value::Arr(arr) => serde_json::Value::Array(arr.iter().map(Value::to_json).collect()),
        }
    }
}
