//! Explicit schema-backed interface descriptor.
//!
//! `InterfaceSchema` is the descriptor object shipped with this crate: a
//! plain, serializable map of member name to [`MemberSchema`]. It exists so
//! consumers (and tests) can declare an interface without bringing their own
//! capability system.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::description::{InterfaceDescription, MemberKind};

/// Schema for a single interface member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSchema {
    /// Whether the member is a method or a plain attribute.
    pub kind: MemberKind,

    /// Human-readable description of the member.
    #[serde(default)]
    pub description: Option<String>,
}

impl MemberSchema {
    /// Schema for a callable member.
    pub fn method() -> Self {
        Self {
            kind: MemberKind::Method,
            description: None,
        }
    }

    /// Schema for a plain data attribute.
    pub fn attribute() -> Self {
        Self {
            kind: MemberKind::Attribute,
            description: None,
        }
    }

    /// Builder method to attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named, explicit interface description.
///
/// Example:
/// ```
/// use interface_tools::interface::{InterfaceDescription, InterfaceSchema, MemberKind};
///
/// let deployer = InterfaceSchema::new("IDeployer")
///     .with_method("discover_state")
///     .with_method("calculate_changes");
///
/// assert_eq!(deployer.classify("discover_state"), Some(MemberKind::Method));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceSchema {
    /// Interface name used in diagnostics.
    pub name: String,

    /// Human-readable description of the interface as a whole.
    #[serde(default)]
    pub description: Option<String>,

    /// Member name to member schema.
    #[serde(default)]
    pub members: BTreeMap<String, MemberSchema>,
}

impl InterfaceSchema {
    /// Create an empty interface schema with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            members: BTreeMap::new(),
        }
    }

    /// Builder method to set the interface-level description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to declare a method member.
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.members.insert(name.into(), MemberSchema::method());
        self
    }

    /// Builder method to declare a data attribute member.
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.members.insert(name.into(), MemberSchema::attribute());
        self
    }

    /// Builder method to declare a member with a full schema.
    pub fn with_member(mut self, name: impl Into<String>, member: MemberSchema) -> Self {
        self.members.insert(name.into(), member);
        self
    }
}

impl InterfaceDescription for InterfaceSchema {
    fn name(&self) -> &str {
        &self.name
    }

    fn member_names(&self) -> BTreeSet<String> {
        self.members.keys().cloned().collect()
    }

    fn classify(&self, member: &str) -> Option<MemberKind> {
        self.members.get(member).map(|m| m.kind)
    }
}
