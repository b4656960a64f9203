// src/types/registry.rs
//
// Arena of class descriptors with the declare-all / link-all bootstrap.
//
// Class hierarchies can reference each other before every descriptor
// exists, so construction is two-phase: `declare` registers every class
// with no superclass link, then `link_superclass` patches the links once
// all descriptors exist. After both passes the registry is published
// process-wide through `install`, and from then on it is read-only and
// shared without locking.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::errors::RuntimeError;
use crate::identity::ClassId;
use crate::types::expr::TypeExpr;

/// Immutable descriptor for one declared class.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    id: ClassId,
    name: String,
    arity: u32,
    superclass: Option<TypeExpr>,
    linked: bool,
}

impl TypeInfo {
    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of type parameters of the class declaration.
    pub fn arity(&self) -> u32 {
        self.arity
    }

    /// Superclass expression. None before linking and, permanently, for
    /// the universal root class.
    pub fn superclass(&self) -> Option<&TypeExpr> {
        self.superclass.as_ref()
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }
}

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

/// Process-wide registry of class descriptors.
///
/// Single-writer during bootstrap (`&mut` methods), then frozen by
/// `install`. Handles index into a `Vec`; name lookup is only used while
/// declaring and for diagnostics.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    infos: Vec<TypeInfo>,
    by_name: FxHashMap<String, ClassId>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// First bootstrap phase: register a class with no superclass link.
    pub fn declare(&mut self, name: &str, arity: u32) -> Result<ClassId, RuntimeError> {
        if self.by_name.contains_key(name) {
            return Err(RuntimeError::DuplicateTypeDeclaration {
                name: name.to_string(),
            });
        }
        let id = ClassId::new(self.infos.len() as u32);
        tracing::debug!(name, arity, id = id.index(), "declare class");
        self.infos.push(TypeInfo {
            id,
            name: name.to_string(),
            arity,
            superclass: None,
            linked: false,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Second bootstrap phase: patch the superclass link of `class`.
    ///
    /// Runs at most once per class; the universal root class is never
    /// linked. A cycle can only close at its final link, so detection
    /// walks the chain as built so far.
    pub fn link_superclass(
        &mut self,
        class: ClassId,
        superclass: TypeExpr,
    ) -> Result<(), RuntimeError> {
        let info = self.info(class);
        if info.linked {
            return Err(RuntimeError::AlreadyLinked {
                name: info.name.clone(),
            });
        }
        if self.would_cycle(class, &superclass) {
            return Err(RuntimeError::CyclicHierarchy {
                name: self.info(class).name.clone(),
            });
        }
        tracing::debug!(
            class = %self.info(class).name,
            superclass = %superclass.display(self),
            "link superclass"
        );
        let info = &mut self.infos[class.index() as usize];
        info.superclass = Some(superclass);
        info.linked = true;
        Ok(())
    }

    fn would_cycle(&self, class: ClassId, superclass: &TypeExpr) -> bool {
        let mut cursor = superclass.class();
        while let Some(current) = cursor {
            if current == class {
                return true;
            }
            cursor = self
                .info(current)
                .superclass
                .as_ref()
                .and_then(TypeExpr::class);
        }
        false
    }

    pub fn info(&self, class: ClassId) -> &TypeInfo {
        &self.infos[class.index() as usize]
    }

    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// True once every class except at most one root is linked.
    pub fn is_fully_linked(&self) -> bool {
        self.infos.iter().filter(|info| !info.linked).count() <= 1
    }

    /// Nominal subtype check: walks the superclass chain from `class`.
    ///
    /// Type arguments are not inspected; variance is the front-end's
    /// concern.
    pub fn is_subtype_of(&self, class: ClassId, other: ClassId) -> bool {
        let mut cursor = Some(class);
        while let Some(current) = cursor {
            if current == other {
                return true;
            }
            cursor = self
                .info(current)
                .superclass
                .as_ref()
                .and_then(TypeExpr::class);
        }
        false
    }

    /// Publish the fully linked registry for the lifetime of the process.
    ///
    /// The `OnceLock` publish is the barrier between the single-writer
    /// bootstrap and concurrent readers: no thread can observe a
    /// half-linked registry through `global`. Installing twice, or before
    /// linking finished, is a bootstrap defect.
    pub fn install(self) -> &'static TypeRegistry {
        assert!(
            self.is_fully_linked(),
            "type registry installed before all superclasses were linked"
        );
        tracing::debug!(classes = self.infos.len(), "install type registry");
        if GLOBAL.set(self).is_err() {
            panic!("type registry installed twice");
        }
        GLOBAL.get().expect("registry was just installed")
    }

    /// The installed process-wide registry, if bootstrap has completed.
    pub fn global() -> Option<&'static TypeRegistry> {
        GLOBAL.get()
    }
}
