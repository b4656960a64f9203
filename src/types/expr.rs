// src/types/expr.rs
//
// Reified type expressions.
//
// A `TypeExpr` is the runtime stand-in for an erased generic type: a
// reference to a declared class together with its type arguments, or a
// reference to a type parameter of an enclosing generic declaration.
// Expressions are pure values with structural equality; argument lists are
// shared `Arc` slices so closed expressions clone cheaply.

use std::sync::Arc;

use crate::errors::RuntimeError;
use crate::identity::ClassId;
use crate::types::registry::TypeRegistry;

/// A possibly-generic reference to a declared class, or a reference to a
/// type parameter that an environment must resolve before use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Class(ClassTypeExpr),
    Param(TypeParamRef),
}

/// Class reference with type arguments.
///
/// `args` is empty for non-generic and raw-generic references; otherwise its
/// length equals the class's type parameter arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassTypeExpr {
    pub class: ClassId,
    pub args: Arc<[TypeExpr]>,
}

/// Reference to type parameter `index` of the generic declaration `owner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeParamRef {
    pub owner: ClassId,
    pub index: u32,
}

impl TypeExpr {
    /// Non-generic or raw reference to `class`, with no arity check needed.
    pub fn raw(class: ClassId) -> TypeExpr {
        TypeExpr::Class(ClassTypeExpr {
            class,
            args: Arc::from(Vec::new()),
        })
    }

    /// Generic reference to `class` with `args` type arguments.
    ///
    /// An empty argument list is the raw form and always succeeds; a
    /// nonzero count must match the declared arity.
    pub fn of(
        registry: &TypeRegistry,
        class: ClassId,
        args: Vec<TypeExpr>,
    ) -> Result<TypeExpr, RuntimeError> {
        let info = registry.info(class);
        if !args.is_empty() && args.len() != info.arity() as usize {
            return Err(RuntimeError::ArityMismatch {
                name: info.name().to_string(),
                expected: info.arity() as usize,
                found: args.len(),
            });
        }
        Ok(TypeExpr::Class(ClassTypeExpr {
            class,
            args: Arc::from(args),
        }))
    }

    /// Reference to type parameter `index` of `owner`.
    pub fn param(owner: ClassId, index: u32) -> TypeExpr {
        TypeExpr::Param(TypeParamRef { owner, index })
    }

    /// True when the expression contains no type-parameter references.
    pub fn is_closed(&self) -> bool {
        match self {
            TypeExpr::Param(_) => false,
            TypeExpr::Class(c) => c.args.iter().all(TypeExpr::is_closed),
        }
    }

    /// The referenced class, when this is a class reference.
    pub fn class(&self) -> Option<ClassId> {
        match self {
            TypeExpr::Class(c) => Some(c.class),
            TypeExpr::Param(_) => None,
        }
    }

    /// Type arguments (empty for parameter references and raw forms).
    pub fn args(&self) -> &[TypeExpr] {
        match self {
            TypeExpr::Class(c) => &c.args,
            TypeExpr::Param(_) => &[],
        }
    }

    /// Render with class names resolved through the registry.
    pub fn display(&self, registry: &TypeRegistry) -> String {
        match self {
            TypeExpr::Param(r) => {
                format!("{}.P{}", registry.info(r.owner).name(), r.index)
            }
            TypeExpr::Class(c) => {
                let name = registry.info(c.class).name();
                if c.args.is_empty() {
                    name.to_string()
                } else {
                    let args: Vec<String> =
                        c.args.iter().map(|a| a.display(registry)).collect();
                    format!("{}<{}>", name, args.join(", "))
                }
            }
        }
    }
}
