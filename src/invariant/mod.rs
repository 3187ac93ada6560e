//! # Capability invariants
//!
//! Builds named predicates asserting that a value provides an interface.
//! A predicate never panics and never returns an error type — failure is
//! communicated through [`InvariantResult`], leaving enforcement to whatever
//! validation framework consumes it.

use std::fmt;

use crate::interface::{InterfaceDescription, MemberLookup};

/// Outcome of an invariant check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantResult {
    /// The value satisfies the interface.
    Ok,
    /// The value does not satisfy the interface; the message names both the
    /// value and the interface.
    Failed(String),
}

impl InvariantResult {
    /// Whether the check passed.
    pub fn is_ok(&self) -> bool {
        matches!(self, InvariantResult::Ok)
    }

    /// The failure message, if the check failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            InvariantResult::Ok => None,
            InvariantResult::Failed(message) => Some(message),
        }
    }
}

/// A named predicate closing over an interface description.
///
/// Built by [`provides`]; the name is derived from the interface so that
/// multiple invariants stay distinguishable in diagnostics.
pub struct Invariant<I: InterfaceDescription> {
    name: String,
    interface: I,
}

impl<I: InterfaceDescription> fmt::Debug for Invariant<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invariant")
            .field("name", &self.name)
            .field("interface", &self.interface.name())
            .finish()
    }
}

impl<I: InterfaceDescription> Invariant<I> {
    /// The predicate's derived name: `provides_<InterfaceName>_invariant`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether `value` provides the interface.
    pub fn check(&self, value: &dyn MemberLookup) -> InvariantResult {
        if self.interface.provided_by(value) {
            InvariantResult::Ok
        } else {
            InvariantResult::Failed(format!(
                "{:?} doesn't provide {}",
                value,
                self.interface.name()
            ))
        }
    }
}

/// Create an invariant asserting that a value provides `interface`.
pub fn provides<I: InterfaceDescription>(interface: I) -> Invariant<I> {
    let name = format!("provides_{}_invariant", interface.name());
    Invariant { name, interface }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::InterfaceSchema;

    #[derive(Debug)]
    struct Bare;

    impl MemberLookup for Bare {
        fn has_member(&self, _name: &str) -> bool {
            false
        }
    }

    fn runnable() -> InterfaceSchema {
        InterfaceSchema::new("IRunnable").with_method("run")
    }

    #[test]
    fn test_invariant_name_derived_from_interface() {
        let invariant = provides(runnable());
        assert_eq!(invariant.name(), "provides_IRunnable_invariant");
    }

    #[test]
    fn test_satisfying_value_passes() {
        use crate::decorator::MethodTable;
        use std::sync::Arc;

        let mut table = MethodTable::new("Runner");
        table.install("run", Arc::new(|_args| Ok(serde_json::Value::Null)));

        let invariant = provides(runnable());
        let result = invariant.check(&table);
        assert!(result.is_ok());
        assert_eq!(result.message(), None);
    }

    #[test]
    fn test_failure_names_value_and_interface() {
        let invariant = provides(runnable());
        let result = invariant.check(&Bare);
        assert!(!result.is_ok());
        let message = result.message().unwrap();
        assert!(message.contains("Bare"));
        assert!(message.contains("doesn't provide IRunnable"));
    }

    #[test]
    fn test_distinct_interfaces_yield_distinct_names() {
        let a = provides(InterfaceSchema::new("IAlpha"));
        let b = provides(InterfaceSchema::new("IBeta"));
        assert_ne!(a.name(), b.name());
    }
}
