use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::datatype::DataType;

/// A typed cell value. Untagged so it (de)serializes straight to a JSON
/// boolean/number/string, which is the on-disk record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
}

/// A scalar literal as classified by the parser: quoted text is always
/// `Str`, bare `true`/`false` is `Bool`, bare digits are `Int`. The
/// parser rejects every other bare token, so no "raw string" survives
/// past tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Value {
    /// Coerces a literal to the declared column type.
    ///
    /// A bool never becomes 0/1, and nothing is implicitly stringified;
    /// quoted digits are accepted for int columns and quoted
    /// `true`/`false` for bool columns.
    pub fn coerce(literal: &Literal, dtype: DataType) -> Result<Value, Error> {
        match dtype {
            DataType::Int => match literal {
                Literal::Int(n) => Ok(Value::Int(*n)),
                Literal::Str(s) => s
                    .trim()
                    .parse::<i64>()
                    .map(Value::Int)
                    .map_err(|_| type_mismatch("int", literal)),
                Literal::Bool(_) => Err(type_mismatch("int", literal)),
            },
            DataType::Bool => match literal {
                Literal::Bool(b) => Ok(Value::Bool(*b)),
                Literal::Str(s) => match s.trim().to_lowercase().as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    _ => Err(type_mismatch("bool", literal)),
                },
                Literal::Int(_) => Err(type_mismatch("bool", literal)),
            },
            DataType::Str => match literal {
                Literal::Str(s) => Ok(Value::Str(s.clone())),
                _ => Err(type_mismatch("str", literal)),
            },
        }
    }
}

fn type_mismatch(expected: &'static str, literal: &Literal) -> Error {
    let got = match literal {
        Literal::Bool(b) => b.to_string(),
        Literal::Int(n) => n.to_string(),
        Literal::Str(s) => s.clone(),
    };
    Error::TypeMismatch { expected, got }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}
