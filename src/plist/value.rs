//! Untyped value tree produced by the plist decoder

use super::error::{PlistError, Result};
use indexmap::IndexMap;
use std::fmt;

/// Key/value mapping of one `<dict>`, in document order
pub type Dict = IndexMap<String, Value>;

/// One decoded plist value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `<string>` content
    Str(String),

    /// `<integer>` content
    Int(i64),

    /// `<dict>` with its key/value pairs
    Dict(Dict),

    /// `<array>` children; the decoder only produces `Dict` elements here
    Array(Vec<Value>),
}

/// Variant tag of a [`Value`], used in type mismatch reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
    Dict,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Str => "string",
            ValueKind::Int => "integer",
            ValueKind::Dict => "dict",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::Dict(_) => ValueKind::Dict,
            Value::Array(_) => ValueKind::Array,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> PlistError {
        PlistError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Borrow the string content, or report a type mismatch
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::Str)),
        }
    }

    /// Integer content, or a type mismatch
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(other.mismatch(ValueKind::Int)),
        }
    }

    /// Borrow the dict, or report a type mismatch
    pub fn as_dict(&self) -> Result<&Dict> {
        match self {
            Value::Dict(d) => Ok(d),
            other => Err(other.mismatch(ValueKind::Dict)),
        }
    }

    /// Borrow the array elements, or report a type mismatch
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    /// Take ownership of the dict, or report a type mismatch
    pub fn into_dict(self) -> Result<Dict> {
        match self {
            Value::Dict(d) => Ok(d),
            other => Err(other.mismatch(ValueKind::Dict)),
        }
    }
}

/// Look up a required key
pub fn require<'a>(dict: &'a Dict, key: &str) -> Result<&'a Value> {
    dict.get(key).ok_or_else(|| PlistError::MissingKey {
        key: key.to_string(),
    })
}

/// String value under `key`, or `default` when absent or not a string
pub fn string_or<'a>(dict: &'a Dict, key: &str, default: &'a str) -> &'a str {
    dict.get(key)
        .and_then(|v| v.as_str().ok())
        .unwrap_or(default)
}
