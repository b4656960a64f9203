// src/errors.rs
//! Runtime errors (R01xx).
//!
//! Every variant is a precondition violation that a correct code generator
//! never produces. None of them is caught or retried inside this crate;
//! they propagate to the caller and terminate the offending operation.

use miette::Diagnostic;
use thiserror::Error;

use crate::identity::ClassId;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("type '{name}' is already declared")]
    #[diagnostic(code(R0101))]
    DuplicateTypeDeclaration { name: String },

    #[error("superclass of '{name}' is already linked")]
    #[diagnostic(
        code(R0102),
        help("link_superclass must run exactly once per class, after all declarations")
    )]
    AlreadyLinked { name: String },

    #[error("linking '{name}' would create a cycle in the superclass chain")]
    #[diagnostic(code(R0103))]
    CyclicHierarchy { name: String },

    #[error("type '{name}' expects {expected} type arguments, found {found}")]
    #[diagnostic(code(R0104))]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("no binding for type parameter {index} of {owner}")]
    #[diagnostic(
        code(R0105),
        help("the environment chain built at the generated call site does not cover this parameter")
    )]
    UnboundTypeParameter { owner: ClassId, index: u32 },

    #[error("operand is not a numeric value: {found}")]
    #[diagnostic(code(R0106))]
    UnsupportedNumericKind { found: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = RuntimeError::ArityMismatch {
            name: "List".to_string(),
            expected: 1,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "type 'List' expects 1 type arguments, found 2"
        );

        let err = RuntimeError::UnboundTypeParameter {
            owner: crate::identity::ClassId::new(3),
            index: 0,
        };
        assert_eq!(err.to_string(), "no binding for type parameter 0 of class#3");
    }
}
