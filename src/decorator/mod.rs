//! # Capability decorator generator
//!
//! Applies a method-decorator factory uniformly across every method member
//! of an interface. The generator validates the interface shape once, up
//! front — most decorator factories assume they are wrapping a callable, so
//! an interface carrying plain data attributes is rejected before any target
//! is touched.
//!
//! The resulting [`ClassTransform`] is a reusable builder: it consumes a
//! [`MethodTable`], installs one generated method per interface member, and
//! returns the composed table. A factory failure propagates and discards the
//! partially-built value.

pub mod method_table;

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::interface::{InterfaceDescription, MemberKind};

pub use method_table::{MethodFn, MethodTable};

/// Errors from building or applying a class transform.
#[derive(Debug, Error)]
pub enum DecoratorError {
    /// The interface reports a member that is not a method.
    #[error(
        "{decorator_name} does not support interfaces with non-method members: \
         `{member}` on {interface} is not a method"
    )]
    NonMethodMember {
        /// Name of the decorator being constructed.
        decorator_name: String,
        /// Name of the offending interface.
        interface: String,
        /// The member that failed classification.
        member: String,
    },

    /// The method-decorator factory failed while producing a replacement.
    /// The factory's own message passes through unchanged.
    #[error("{0}")]
    MethodDecorator(Box<dyn std::error::Error + Send + Sync>),
}

/// Pass-through context forwarded verbatim to the method-decorator factory.
///
/// Carries the extra positional and keyword arguments supplied at
/// [`make_decorator`] time.
#[derive(Debug, Clone, Default)]
pub struct DecoratorContext {
    /// Extra positional arguments.
    pub args: Vec<Value>,
    /// Extra keyword arguments.
    pub kwargs: HashMap<String, Value>,
}

impl DecoratorContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append a positional argument.
    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Builder method to set a keyword argument.
    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }
}

/// Type alias for a method-decorator factory.
///
/// Called once per interface member with the member name and the pass-through
/// context; returns the replacement implementation to install.
pub type MethodDecoratorFactory = Box<
    dyn Fn(&str, &DecoratorContext) -> Result<MethodFn, Box<dyn std::error::Error + Send + Sync>>
        + Send
        + Sync,
>;

/// A reusable transformation installing generated methods on a target table.
///
/// Produced by [`make_decorator`]; construction has already validated that
/// every interface member is a method.
pub struct ClassTransform<I: InterfaceDescription> {
    decorator_name: String,
    interface: I,
    factory: MethodDecoratorFactory,
    context: DecoratorContext,
}

impl<I: InterfaceDescription> fmt::Debug for ClassTransform<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassTransform")
            .field("decorator_name", &self.decorator_name)
            .field("interface", &self.interface.name())
            .finish()
    }
}

impl<I: InterfaceDescription> ClassTransform<I> {
    /// Name of the decorator this transform was built for.
    pub fn decorator_name(&self) -> &str {
        &self.decorator_name
    }

    /// Name of the interface driving the transform.
    pub fn interface_name(&self) -> &str {
        self.interface.name()
    }

    /// Install one generated method per interface member onto `target`.
    ///
    /// Members are processed in sorted name order; existing entries under the
    /// same names are overwritten. If the factory fails for a member, the
    /// error propagates, no later members are processed, and the
    /// partially-built table is discarded.
    pub fn apply(&self, mut target: MethodTable) -> Result<MethodTable, DecoratorError> {
        for member in self.interface.member_names() {
            let replacement = (self.factory)(&member, &self.context)
                .map_err(DecoratorError::MethodDecorator)?;
            log::debug!(
                "{}: installing `{}` from {} onto {}",
                self.decorator_name,
                member,
                self.interface.name(),
                target.label(),
            );
            target.install(member, replacement);
        }
        Ok(target)
    }
}

/// Build a class transform that decorates every method of `interface`.
///
/// `factory` is invoked lazily, once per member, at [`ClassTransform::apply`]
/// time; `context` is forwarded to it verbatim on every call. Validation of
/// the interface shape happens here, eagerly: if any member of `interface`
/// classifies as a non-method (or fails to classify at all), construction
/// fails and no transform is returned.
pub fn make_decorator<I, F>(
    decorator_name: impl Into<String>,
    interface: I,
    factory: F,
    context: DecoratorContext,
) -> Result<ClassTransform<I>, DecoratorError>
where
    I: InterfaceDescription,
    F: Fn(&str, &DecoratorContext) -> Result<MethodFn, Box<dyn std::error::Error + Send + Sync>>
        + Send
        + Sync
        + 'static,
{
    let decorator_name = decorator_name.into();

    for member in interface.member_names() {
        if !interface.classify(&member).is_some_and(MemberKind::is_method) {
            return Err(DecoratorError::NonMethodMember {
                decorator_name,
                interface: interface.name().to_string(),
                member,
            });
        }
    }

    Ok(ClassTransform {
        decorator_name,
        interface,
        factory: Box::new(factory),
        context,
    })
}

/// Convenience for factories that ignore the pass-through context.
///
/// Wraps a `Fn(&str) -> MethodFn` into a full factory.
pub fn simple_factory<F>(
    factory: F,
) -> impl Fn(&str, &DecoratorContext) -> Result<MethodFn, Box<dyn std::error::Error + Send + Sync>>
       + Send
       + Sync
       + 'static
where
    F: Fn(&str) -> MethodFn + Send + Sync + 'static,
{
    move |member, _context| Ok(factory(member))
}
