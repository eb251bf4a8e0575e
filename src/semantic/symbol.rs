use std::collections::HashMap;
use thiserror::Error;

use super::value::Value;

/// Returned by `declare` when a name is introduced twice. The first
/// declaration's value stays in place; the caller records the error and
/// keeps walking.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Variable '{name}' redeclared.")]
pub struct DuplicateDeclaration {
    pub name: String,
}

/// Declare-once variable table. A value may change across assignments but
/// a name can only be introduced once; iteration follows declaration
/// order so reports stay stable.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    values: HashMap<String, Value>,
    order: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &str) -> Result<(), DuplicateDeclaration> {
        if self.values.contains_key(name) {
            return Err(DuplicateDeclaration {
                name: name.to_string(),
            });
        }
        self.values.insert(name.to_string(), Value::Noob);
        self.order.push(name.to_string());
        Ok(())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// No-op for undeclared names; assignment to an unknown name is the
    /// caller's error to report.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        }
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.order
            .iter()
            .map(move |name| (name.as_str(), &self.values[name.as_str()]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
