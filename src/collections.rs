// src/collections.rs
//! Runtime support for the generic List type.
//!
//! This is the minimal collection surface the instantiation protocol
//! needs: a list object is constructed from a closed `List<E>` type
//! expression, retains it, and exposes the reified element type for
//! generic operations. The full collection library lives outside this
//! layer.

use std::sync::{Arc, RwLock};

use crate::types::expr::TypeExpr;
use crate::value::Value;

/// A growable list carrying its reified runtime type.
#[derive(Debug)]
pub struct List {
    runtime_type: TypeExpr,
    items: RwLock<Vec<Value>>,
}

impl List {
    /// Empty list with the given closed `List<E>` type expression.
    pub fn new(runtime_type: TypeExpr) -> Arc<List> {
        Self::from_arguments(runtime_type, Vec::new())
    }

    /// Generated factory call sites pass the evaluated type expression
    /// followed by the initial elements.
    pub fn from_arguments(runtime_type: TypeExpr, items: Vec<Value>) -> Arc<List> {
        debug_assert!(runtime_type.is_closed());
        Arc::new(List {
            runtime_type,
            items: RwLock::new(items),
        })
    }

    pub fn runtime_type(&self) -> &TypeExpr {
        &self.runtime_type
    }

    /// The reified element type: the list's first type argument, absent
    /// only for a raw reference.
    pub fn element_type(&self) -> Option<&TypeExpr> {
        self.runtime_type.args().first()
    }

    pub fn push(&self, value: Value) {
        self.items.write().unwrap().push(value);
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.items.read().unwrap().get(index).cloned()
    }

    pub fn set(&self, index: usize, value: Value) {
        self.items.write().unwrap()[index] = value;
    }

    /// Snapshot of the current elements.
    pub fn values(&self) -> Vec<Value> {
        self.items.read().unwrap().clone()
    }
}
