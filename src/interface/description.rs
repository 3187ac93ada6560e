//! Core traits for consuming an externally-defined interface description.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a named interface member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// A callable member.
    Method,
    /// A plain data attribute.
    Attribute,
}

impl MemberKind {
    /// Whether this member is callable.
    pub fn is_method(self) -> bool {
        matches!(self, MemberKind::Method)
    }
}

/// What a value must expose to be checked for interface membership.
///
/// The `Debug` bound exists so failed invariant checks can name the value
/// they rejected.
pub trait MemberLookup: fmt::Debug {
    /// Whether the value carries a member under `name`.
    fn has_member(&self, name: &str) -> bool;
}

/// An externally-supplied capability description.
///
/// Implementations report a set of unique member names and classify each of
/// them. The decorator generator and the invariant builder only ever talk to
/// an interface through this trait.
pub trait InterfaceDescription {
    /// Diagnostic name of the interface (e.g. `"IDeployer"`).
    fn name(&self) -> &str;

    /// The unique member names this interface declares.
    fn member_names(&self) -> BTreeSet<String>;

    /// Classify a member reported by [`member_names`](Self::member_names).
    ///
    /// Returns `None` for names the interface does not know about.
    fn classify(&self, member: &str) -> Option<MemberKind>;

    /// The capability-membership check: does `value` provide this interface?
    ///
    /// The default implementation requires every method member to resolve
    /// via [`MemberLookup::has_member`].
    fn provided_by(&self, value: &dyn MemberLookup) -> bool {
        self.member_names().iter().all(|member| {
            self.classify(member) != Some(MemberKind::Method) || value.has_member(member)
        })
    }
}

impl<T: InterfaceDescription + ?Sized> InterfaceDescription for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn member_names(&self) -> BTreeSet<String> {
        (**self).member_names()
    }

    fn classify(&self, member: &str) -> Option<MemberKind> {
        (**self).classify(member)
    }

    fn provided_by(&self, value: &dyn MemberLookup) -> bool {
        (**self).provided_by(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Everything;

    impl MemberLookup for Everything {
        fn has_member(&self, _name: &str) -> bool {
            true
        }
    }

    #[derive(Debug)]
    struct Nothing;

    impl MemberLookup for Nothing {
        fn has_member(&self, _name: &str) -> bool {
            false
        }
    }

    struct TwoMethods;

    impl InterfaceDescription for TwoMethods {
        fn name(&self) -> &str {
            "ITwoMethods"
        }

        fn member_names(&self) -> BTreeSet<String> {
            ["start", "stop"].iter().map(|s| s.to_string()).collect()
        }

        fn classify(&self, member: &str) -> Option<MemberKind> {
            match member {
                "start" | "stop" => Some(MemberKind::Method),
                _ => None,
            }
        }
    }

    #[test]
    fn test_default_provided_by() {
        assert!(TwoMethods.provided_by(&Everything));
        assert!(!TwoMethods.provided_by(&Nothing));
    }

    #[test]
    fn test_reference_delegation() {
        let iface = &TwoMethods;
        assert_eq!(iface.name(), "ITwoMethods");
        assert_eq!(iface.member_names().len(), 2);
        assert_eq!(iface.classify("start"), Some(MemberKind::Method));
        assert!(iface.provided_by(&Everything));
    }

    #[test]
    fn test_member_kind_is_method() {
        assert!(MemberKind::Method.is_method());
        assert!(!MemberKind::Attribute.is_method());
    }
}
