//! Method tables — the composed value produced by a class transform.
//!
//! A `MethodTable` is an ordered map of member name to callable. It plays the
//! role of a decorated type: the class transform installs one generated
//! method per interface member, and invariants can check the result for
//! interface membership.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::interface::MemberLookup;

/// Type alias for a generated method implementation.
pub type MethodFn = Arc<
    dyn Fn(
            std::collections::HashMap<String, Value>,
        ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>>
        + Send
        + Sync,
>;

/// An ordered collection of named methods.
///
/// Installing a method under an existing name overwrites the previous entry.
#[derive(Clone, Default)]
pub struct MethodTable {
    /// Diagnostic label for the table (e.g. the decorated type's name).
    label: String,
    methods: BTreeMap<String, MethodFn>,
}

impl fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodTable")
            .field("label", &self.label)
            .field("methods", &self.method_names())
            .finish()
    }
}

impl MethodTable {
    /// Create an empty method table with a diagnostic label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            methods: BTreeMap::new(),
        }
    }

    /// The table's diagnostic label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Install `method` under `name`, overwriting any existing entry.
    ///
    /// Returns the previous method, if one was installed.
    pub fn install(&mut self, name: impl Into<String>, method: MethodFn) -> Option<MethodFn> {
        self.methods.insert(name.into(), method)
    }

    /// Look up a method by name.
    pub fn get(&self, name: &str) -> Option<&MethodFn> {
        self.methods.get(name)
    }

    /// Whether a method is installed under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Names of all installed methods, in sorted order.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    /// Number of installed methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether the table has no methods.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Invoke the method installed under `name`.
    pub fn invoke(
        &self,
        name: &str,
        args: std::collections::HashMap<String, Value>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        match self.methods.get(name) {
            Some(method) => method(args),
            None => Err(format!("{} has no method `{}`", self.label, name).into()),
        }
    }
}

impl MemberLookup for MethodTable {
    fn has_member(&self, name: &str) -> bool {
        self.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn constant(value: i64) -> MethodFn {
        Arc::new(move |_args| Ok(Value::from(value)))
    }

    #[test]
    fn test_install_and_invoke() {
        let mut table = MethodTable::new("Dummy");
        table.install("answer", constant(42));

        let result = table.invoke("answer", HashMap::new()).unwrap();
        assert_eq!(result, Value::from(42));
    }

    #[test]
    fn test_install_overwrites() {
        let mut table = MethodTable::new("Dummy");
        assert!(table.install("answer", constant(1)).is_none());
        assert!(table.install("answer", constant(2)).is_some());

        let result = table.invoke("answer", HashMap::new()).unwrap();
        assert_eq!(result, Value::from(2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_invoke_unknown_method() {
        let table = MethodTable::new("Dummy");
        let err = table.invoke("missing", HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_member_lookup() {
        let mut table = MethodTable::new("Dummy");
        table.install("run", constant(0));
        assert!(table.has_member("run"));
        assert!(!table.has_member("walk"));
    }

    #[test]
    fn test_debug_lists_method_names() {
        let mut table = MethodTable::new("Dummy");
        table.install("run", constant(0));
        let rendered = format!("{:?}", table);
        assert!(rendered.contains("Dummy"));
        assert!(rendered.contains("run"));
    }
}
