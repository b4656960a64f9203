// src/value.rs
//
// Boxed dynamic values.
//
// The source language is dynamically checked, so generated code needs one
// representation for values whose static type is Object or dynamic. A
// numeric operand that arrives boxed is unboxed through `as_num`; that
// boundary is where a non-numeric value surfaces as
// `UnsupportedNumericKind`, the analogue of an impossible third numeric
// kind reaching an abstract-supertype overload.

use std::fmt;
use std::sync::Arc;

use crate::collections::List;
use crate::errors::RuntimeError;
use crate::instance::Instance;
use crate::numeric::{Num, float, int};

/// A dynamically typed source-language value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    List(Arc<List>),
    Instance(Arc<Instance>),
}

impl Value {
    /// Unbox a numeric operand for the dispatch fallback.
    pub fn as_num(&self) -> Result<Num, RuntimeError> {
        match *self {
            Value::Int(value) => Ok(Num::Int(value)),
            Value::Float(value) => Ok(Num::Float(value)),
            ref other => Err(RuntimeError::UnsupportedNumericKind {
                found: other.kind_name().to_string(),
            }),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "double",
            Value::Str(_) => "String",
            Value::List(_) => "List",
            Value::Instance(_) => "instance",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<Num> for Value {
    fn from(value: Num) -> Self {
        match value {
            Num::Int(value) => Value::Int(value),
            Num::Float(value) => Value::Float(value),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(Arc::from(value))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", int::to_string(*value)),
            Value::Float(value) => write!(f, "{}", float::to_string(*value)),
            Value::Str(value) => write!(f, "{}", value),
            Value::List(list) => {
                let items: Vec<String> =
                    list.values().iter().map(Value::to_string).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Instance(instance) => match instance.runtime_type().class() {
                Some(class) => write!(f, "Instance of '{}'", class),
                None => write!(f, "Instance"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_unbox() {
        assert!(matches!(Value::Int(3).as_num(), Ok(Num::Int(3))));
        assert!(matches!(Value::Float(1.1).as_num(), Ok(Num::Float(_))));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let err = Value::from("foo").as_num().unwrap_err();
        assert_eq!(
            err,
            RuntimeError::UnsupportedNumericKind {
                found: "String".to_string(),
            }
        );
        assert!(Value::Null.as_num().is_err());
        assert!(Value::Bool(true).as_num().is_err());
    }

    #[test]
    fn display_matches_source_language_rendering() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(42.12).to_string(), "42.12");
        assert_eq!(Value::Float(4.0).to_string(), "4.0");
        assert_eq!(Value::from("foo").to_string(), "foo");
    }
}
