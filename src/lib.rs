//! # interface-tools
//!
//! Generic tooling around capability descriptions: apply a uniform
//! transformation to every method an interface declares, check that a
//! callable's declared parameter list exactly matches a required keyword
//! set, and build named invariants asserting interface membership.
//!
//! Three independent pieces, no shared state:
//!
//! - [`decorator`] — builds a reusable [`ClassTransform`] that installs one
//!   generated method per interface member onto a [`MethodTable`].
//! - [`signature`] — validates a declared [`FunctionSignature`] against a
//!   keyword-argument set, reporting unexpected, missing, and
//!   optional-but-unsupplied names.
//! - [`invariant`] — wraps an interface in a named pass/fail predicate for
//!   external validation frameworks.
//!
//! The capability system itself stays external: interfaces are consumed
//! through the [`interface::InterfaceDescription`] seam, with
//! [`InterfaceSchema`] as the descriptor implementation shipped here.

pub mod decorator;
pub mod interface;
pub mod invariant;
pub mod signature;

pub use decorator::{
    make_decorator, simple_factory, ClassTransform, DecoratorContext, DecoratorError, MethodFn,
    MethodTable,
};
pub use interface::{InterfaceDescription, InterfaceSchema, MemberKind, MemberLookup, MemberSchema};
pub use invariant::{provides, Invariant, InvariantResult};
pub use signature::{validate_signature_against_kwargs, FunctionSignature, SignatureMismatch};
