// src/instance.rs
//
// Generic instance objects.
//
// A generated constructor receives a closed TypeExpr (the result of
// evaluating the declaration-site template against the enclosing
// environment) ahead of the ordinary arguments, and the object retains it
// so later generic operations can consult the reified type. Fields are
// Value slots addressed by index, assigned by the code generator.

use std::sync::{Arc, RwLock};

use crate::types::expr::TypeExpr;
use crate::value::Value;

/// A class instance carrying its reified runtime type.
#[derive(Debug)]
pub struct Instance {
    runtime_type: TypeExpr,
    fields: RwLock<Vec<Value>>,
}

impl Instance {
    /// Allocate an instance with `field_count` null-initialized slots.
    ///
    /// `runtime_type` must be closed; generated call sites obtain it from
    /// `TypeEnvironment::evaluate`.
    pub fn new(runtime_type: TypeExpr, field_count: usize) -> Arc<Instance> {
        debug_assert!(runtime_type.is_closed());
        Arc::new(Instance {
            runtime_type,
            fields: RwLock::new(vec![Value::Null; field_count]),
        })
    }

    /// The closed type expression the instance was constructed with.
    pub fn runtime_type(&self) -> &TypeExpr {
        &self.runtime_type
    }

    pub fn field_count(&self) -> usize {
        self.fields.read().unwrap().len()
    }

    /// Get field value by slot index
    pub fn field(&self, slot: usize) -> Value {
        self.fields.read().unwrap()[slot].clone()
    }

    /// Set field value by slot index
    pub fn set_field(&self, slot: usize, value: Value) {
        self.fields.write().unwrap()[slot] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::registry::TypeRegistry;

    #[test]
    fn retains_runtime_type_and_slots() {
        let mut registry = TypeRegistry::new();
        let _object = registry.declare("Object", 0).unwrap();
        let culture = registry.declare("Culture", 0).unwrap();

        let instance = Instance::new(TypeExpr::raw(culture), 2);
        assert_eq!(instance.runtime_type(), &TypeExpr::raw(culture));
        assert_eq!(instance.field_count(), 2);

        assert!(instance.field(0).is_null());
        instance.set_field(0, Value::Int(42));
        instance.set_field(1, Value::from("red"));
        assert!(matches!(instance.field(0), Value::Int(42)));
        assert_eq!(instance.field(1).to_string(), "red");
    }
}
