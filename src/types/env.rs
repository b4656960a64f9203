// src/types/env.rs
//
// Substitution environments for closing open type expressions.
//
// An environment is an immutable chain of binding frames, one per generic
// declaration in scope at the generated call site. Evaluation is a pure
// recursive walk with no shared mutable state, so environments are freely
// shared across call frames and threads.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::errors::RuntimeError;
use crate::identity::ClassId;
use crate::types::expr::{ClassTypeExpr, TypeExpr, TypeParamRef};
use crate::types::registry::TypeRegistry;

/// Bindings of one frame - inline up to 2 (most generics have 1-2 params)
pub type BindingVec = SmallVec<[TypeExpr; 2]>;

/// Chain of type-parameter bindings used to close open type expressions.
#[derive(Debug, Clone)]
pub struct TypeEnvironment {
    frame: Option<Arc<Frame>>,
}

#[derive(Debug)]
struct Frame {
    owner: ClassId,
    bindings: BindingVec,
    parent: TypeEnvironment,
}

impl TypeEnvironment {
    /// The distinguished root environment: binds nothing and is the
    /// identity evaluator for closed expressions.
    pub const ROOT: TypeEnvironment = TypeEnvironment { frame: None };

    pub fn is_root(&self) -> bool {
        self.frame.is_none()
    }

    /// Child environment binding the type parameters of `owner`.
    ///
    /// The bindings must cover the owner's full arity; the parent chain is
    /// left untouched.
    pub fn extend(
        &self,
        registry: &TypeRegistry,
        owner: ClassId,
        bindings: impl Into<BindingVec>,
    ) -> Result<TypeEnvironment, RuntimeError> {
        let bindings = bindings.into();
        let info = registry.info(owner);
        if bindings.len() != info.arity() as usize {
            return Err(RuntimeError::ArityMismatch {
                name: info.name().to_string(),
                expected: info.arity() as usize,
                found: bindings.len(),
            });
        }
        Ok(TypeEnvironment {
            frame: Some(Arc::new(Frame {
                owner,
                bindings,
                parent: self.clone(),
            })),
        })
    }

    /// Resolve every type-parameter reference in `expr` through the chain,
    /// producing a closed expression.
    ///
    /// A closed input is returned structurally unchanged, which makes
    /// evaluation idempotent and lets constant expressions be shared.
    pub fn evaluate(&self, expr: &TypeExpr) -> Result<TypeExpr, RuntimeError> {
        if expr.is_closed() {
            return Ok(expr.clone());
        }
        match expr {
            TypeExpr::Param(reference) => self.lookup(reference),
            TypeExpr::Class(class_expr) => {
                let args = class_expr
                    .args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TypeExpr::Class(ClassTypeExpr {
                    class: class_expr.class,
                    args: Arc::from(args),
                }))
            }
        }
    }

    fn lookup(&self, reference: &TypeParamRef) -> Result<TypeExpr, RuntimeError> {
        let mut env = self;
        while let Some(frame) = env.frame.as_deref() {
            if frame.owner == reference.owner {
                return match frame.bindings.get(reference.index as usize) {
                    Some(binding) => Ok(binding.clone()),
                    None => Err(RuntimeError::UnboundTypeParameter {
                        owner: reference.owner,
                        index: reference.index,
                    }),
                };
            }
            env = &frame.parent;
        }
        Err(RuntimeError::UnboundTypeParameter {
            owner: reference.owner,
            index: reference.index,
        })
    }
}
