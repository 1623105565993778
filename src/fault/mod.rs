//! Structured failure payloads.
//!
//! A [`Fault`] is an immutable description of something that went wrong:
//! a machine-readable `code`, a short `title`, a human-readable `detail`
//! and a [`FaultSource`] recording where the problem originated. It is the
//! failure side of every [`Outcome`](crate::Outcome) and the payload of the
//! `Maybe<Fault>` validation chains.
//!
//! [`AggregateFault`] folds several faults into one. It is produced by the
//! batch combinators (`flatten_outcomes`, `reduce_outcomes`,
//! `reduce_flattened`) and never by single-value `bind` chains.
//!
//! # Richer failure kinds
//!
//! Domain error types become faults through `From`:
//!
//! ```rust
//! use faultline::{Fault, Outcome};
//!
//! enum SignupError {
//!     EmailTaken(String),
//! }
//!
//! impl From<SignupError> for Fault {
//!     fn from(error: SignupError) -> Self {
//!         match error {
//!             SignupError::EmailTaken(email) => Fault::new(
//!                 "signup.email_taken",
//!                 "Email already registered",
//!                 format!("{email} belongs to another account"),
//!             ),
//!         }
//!     }
//! }
//!
//! let outcome: Outcome<u64> = Outcome::failure(SignupError::EmailTaken("a@b.c".into()));
//! assert_eq!(outcome.failure_ref().map(|fault| fault.code()), Some("signup.email_taken"));
//! ```

mod aggregate;

pub use aggregate::AggregateFault;

use std::fmt;

use crate::vacancy::Vacancy;

/// Where a fault originated.
///
/// Both parts are optional: `pointer` locates the offending element in a
/// request document (for example `/data/attributes/email`), `parameter`
/// names the offending query or call parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaultSource {
    pointer: Option<String>,
    parameter: Option<String>,
}

impl FaultSource {
    /// Creates an empty source.
    #[inline]
    pub const fn new() -> Self {
        Self {
            pointer: None,
            parameter: None,
        }
    }

    /// Returns a copy of this source pointing at `pointer`.
    #[must_use]
    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = Some(pointer.into());
        self
    }

    /// Returns a copy of this source naming `parameter`.
    #[must_use]
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// The document pointer, if any.
    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref()
    }

    /// The parameter name, if any.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Returns `true` if neither a pointer nor a parameter is recorded.
    pub const fn is_empty(&self) -> bool {
        self.pointer.is_none() && self.parameter.is_none()
    }
}

/// An immutable description of a domain failure.
///
/// # Examples
///
/// ```rust
/// use faultline::{Fault, FaultSource};
///
/// let fault = Fault::new("order.empty", "Empty order", "an order needs at least one line")
///     .with_source(FaultSource::new().with_pointer("/data/lines"));
///
/// assert_eq!(fault.code(), "order.empty");
/// assert_eq!(fault.source().pointer(), Some("/data/lines"));
/// assert_eq!(
///     fault.to_string(),
///     "[order.empty] Empty order: an order needs at least one line"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fault {
    code: String,
    title: String,
    detail: String,
    source: FaultSource,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    faults: Vec<Self>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
    aggregate: bool,
}

#[cfg(feature = "serde")]
#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Fault {
    /// Creates a fault with an empty source.
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            detail: detail.into(),
            source: FaultSource::new(),
            faults: Vec::new(),
            aggregate: false,
        }
    }

    /// Returns a copy of this fault with the given source.
    #[must_use]
    pub fn with_source(mut self, source: FaultSource) -> Self {
        self.source = source;
        self
    }

    /// The machine-readable code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The short summary.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The human-readable explanation.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Where the fault originated.
    pub const fn source(&self) -> &FaultSource {
        &self.source
    }

    /// Returns `true` if this fault was built from an [`AggregateFault`],
    /// including an empty one.
    pub const fn is_aggregate(&self) -> bool {
        self.aggregate
    }

    /// The faults folded into this one, in evaluation order.
    ///
    /// Always empty unless [`is_aggregate`](Self::is_aggregate) is `true`.
    pub fn faults(&self) -> &[Self] {
        &self.faults
    }

    pub(crate) fn aggregate(
        code: String,
        title: String,
        detail: String,
        faults: Vec<Self>,
    ) -> Self {
        Self {
            code,
            title,
            detail,
            source: FaultSource::new(),
            faults,
            aggregate: true,
        }
    }

    pub(crate) fn into_faults(self) -> Vec<Self> {
        self.faults
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}] {}: {}", self.code, self.title, self.detail)
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.faults
            .first()
            .map(|fault| fault as &(dyn std::error::Error + 'static))
    }
}

impl Vacancy for Fault {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_fault_accessors() {
        let fault = Fault::new("code", "title", "detail");
        assert_eq!(fault.code(), "code");
        assert_eq!(fault.title(), "title");
        assert_eq!(fault.detail(), "detail");
        assert!(fault.source().is_empty());
        assert!(!fault.is_aggregate());
        assert!(fault.faults().is_empty());
    }

    #[rstest]
    fn test_fault_with_source() {
        let source = FaultSource::new()
            .with_pointer("/data/name")
            .with_parameter("name");
        let fault = Fault::new("code", "title", "detail").with_source(source.clone());
        assert_eq!(fault.source(), &source);
        assert_eq!(fault.source().parameter(), Some("name"));
    }

    #[rstest]
    fn test_fault_equality_includes_every_field() {
        let base = Fault::new("code", "title", "detail");
        assert_eq!(base, Fault::new("code", "title", "detail"));
        assert_ne!(base, Fault::new("code", "title", "other"));
        assert_ne!(
            base.clone(),
            base.with_source(FaultSource::new().with_parameter("id"))
        );
    }

    #[rstest]
    fn test_plain_fault_has_no_error_source() {
        let fault = Fault::new("code", "title", "detail");
        assert!(fault.source.is_empty());
        assert!(Error::source(&fault).is_none());
    }
}
