//! # Interface descriptions
//!
//! The seam between this crate and whatever capability/interface system the
//! caller brings. An interface is consumed purely through the
//! [`InterfaceDescription`] trait: enumerate member names, classify each one
//! as a method or a plain attribute, and answer membership queries against a
//! concrete value.
//!
//! [`InterfaceSchema`] is the crate's own descriptor implementation — an
//! explicit, serializable schema object. Callers with their own interface
//! machinery implement [`InterfaceDescription`] directly instead.

pub mod description;
pub mod schema;

pub use description::{InterfaceDescription, MemberKind, MemberLookup};
pub use schema::{InterfaceSchema, MemberSchema};
