//! # Signature compatibility checking
//!
//! Validates that a callable's declared parameter list can be satisfied by
//! exactly a given set of keyword-argument names. Instead of runtime
//! introspection, callables declare their shape up front as a
//! [`FunctionSignature`]: an ordered parameter list whose trailing run may
//! carry defaults. Validation is pure set algebra and reports precisely
//! which names are unexpected, missing, or optional-but-unsupplied.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single named parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Parameter {
    name: String,
    has_default: bool,
}

/// The declared named-parameter shape of a callable.
///
/// Parameters are ordered, and default-bearing (optional) parameters always
/// form a suffix of the list — enforced by construction: [`new`] takes the
/// required parameters and [`with_optional`] appends the optional ones.
/// Variadic catch-all parameters are unrepresentable.
///
/// [`new`]: FunctionSignature::new
/// [`with_optional`]: FunctionSignature::with_optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    parameters: Vec<Parameter>,
}

impl FunctionSignature {
    /// Declare a signature with the given required parameters, in order.
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: required
                .into_iter()
                .map(|name| Parameter {
                    name: name.into(),
                    has_default: false,
                })
                .collect(),
        }
    }

    /// Builder method appending default-bearing parameters after the
    /// required ones.
    pub fn with_optional<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters.extend(optional.into_iter().map(|name| Parameter {
            name: name.into(),
            has_default: true,
        }));
        self
    }

    /// All declared parameter names.
    pub fn accepted_arguments(&self) -> BTreeSet<String> {
        self.parameters.iter().map(|p| p.name.clone()).collect()
    }

    /// The subset of parameter names that carry defaults.
    pub fn optional_arguments(&self) -> BTreeSet<String> {
        self.parameters
            .iter()
            .filter(|p| p.has_default)
            .map(|p| p.name.clone())
            .collect()
    }

    /// Parameter names in declaration order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the signature declares no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// A callable's parameters do not exactly match the supplied keyword set.
///
/// All three diagnostic sets are always populated, including
/// `missing_optional_arguments`, which never triggers the failure on its own
/// but is reported for complete diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "signature mismatch: unexpected arguments {unexpected_arguments:?}, \
     missing arguments {missing_arguments:?}, \
     missing optional arguments {missing_optional_arguments:?}"
)]
pub struct SignatureMismatch {
    /// Supplied names the callable does not accept.
    pub unexpected_arguments: BTreeSet<String>,
    /// Required names not supplied.
    pub missing_arguments: BTreeSet<String>,
    /// Default-bearing names not supplied.
    pub missing_optional_arguments: BTreeSet<String>,
}

/// Validate that a callable declaring `signature` can be invoked with
/// exactly the names in `keyword_arguments`.
///
/// Succeeds when every required parameter is supplied and nothing outside
/// the accepted set is supplied; optional parameters may be freely omitted.
/// Pure and deterministic — identical inputs always produce the identical
/// outcome.
pub fn validate_signature_against_kwargs(
    signature: &FunctionSignature,
    keyword_arguments: &BTreeSet<String>,
) -> Result<(), SignatureMismatch> {
    let accepted_arguments = signature.accepted_arguments();
    let optional_arguments = signature.optional_arguments();

    let unexpected_arguments: BTreeSet<String> = keyword_arguments
        .difference(&accepted_arguments)
        .cloned()
        .collect();
    let missing_arguments: BTreeSet<String> = accepted_arguments
        .difference(keyword_arguments)
        .filter(|name| !optional_arguments.contains(*name))
        .cloned()
        .collect();

    if !missing_arguments.is_empty() || !unexpected_arguments.is_empty() {
        let mismatch = SignatureMismatch {
            unexpected_arguments,
            missing_arguments,
            missing_optional_arguments: optional_arguments
                .difference(keyword_arguments)
                .cloned()
                .collect(),
        };
        log::debug!("signature validation failed: {}", mismatch);
        return Err(mismatch);
    }

    Ok(())
}
