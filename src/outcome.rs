//! Outcome type - a success value or a [`Fault`].
//!
//! `Outcome<T>` is a [`OneOf`] specialized to `(T, Fault)`: the left side
//! holds the success value, the right side the fault. Chains built with
//! [`Outcome::bind`] short-circuit on the first failure and propagate that
//! fault unchanged; batches that must report every failure use the
//! accumulating combinators in [`extensions`](crate::extensions).
//!
//! # Examples
//!
//! ```rust
//! use faultline::{Fault, Outcome};
//!
//! fn parse(text: &str) -> Outcome<i32> {
//!     text.parse::<i32>()
//!         .map_err(|error| Fault::new("parse", "Not a number", error.to_string()))
//!         .into()
//! }
//!
//! fn positive(number: i32) -> Outcome<i32> {
//!     if number > 0 {
//!         Outcome::success(number)
//!     } else {
//!         Outcome::failure(Fault::new("range", "Out of range", "must be positive"))
//!     }
//! }
//!
//! assert_eq!(parse("12").bind(positive).try_success(), Ok(12));
//! assert_eq!(
//!     parse("x").bind(positive).failure_ref().map(Fault::code),
//!     Some("parse")
//! );
//! ```

use std::fmt;
#[cfg(feature = "async")]
use std::future::IntoFuture;

#[cfg(feature = "async")]
use futures::future::{Ready, ready};

use crate::error::InvalidCastError;
use crate::fault::{AggregateFault, Fault};
use crate::maybe::Maybe;
use crate::one_of::OneOf;
use crate::vacancy::Vacancy;

/// A success value of type `T`, or a [`Fault`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T> {
    inner: OneOf<T, Fault>,
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// A successful outcome.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self {
            inner: OneOf::Left(value),
        }
    }

    /// A failed outcome.
    #[inline]
    pub fn failure(fault: impl Into<Fault>) -> Self {
        Self {
            inner: OneOf::Right(fault.into()),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this outcome holds a success value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.inner.is_left()
    }

    /// Returns `true` if this outcome holds a fault.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.inner.is_right()
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Chains an `Outcome`-returning continuation.
    ///
    /// On failure the continuation is never invoked and the original fault
    /// propagates. On success the continuation's outcome is returned
    /// directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::{Fault, Outcome};
    ///
    /// let failed: Outcome<i32> = Outcome::failure(Fault::new("E1", "first", "failed"));
    /// let chained = failed.clone().bind(|_| Outcome::success(2));
    /// assert_eq!(chained, failed);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, continuation: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.inner {
            OneOf::Left(value) => continuation(value),
            OneOf::Right(fault) => Outcome::failure(fault),
        }
    }

    /// Chains a validation step that reports at most one fault.
    ///
    /// On failure the original fault is returned as `Some(fault)` without
    /// invoking `validation`. On success the validation's result is
    /// returned as-is; `None` means it found nothing wrong.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::{Fault, Maybe, Outcome};
    ///
    /// let verdict = Outcome::success("ok").bind_fault(|_| Maybe::<Fault>::none());
    /// assert!(verdict.is_none());
    /// ```
    #[inline]
    pub fn bind_fault<F>(self, validation: F) -> Maybe<Fault>
    where
        F: FnOnce(T) -> Maybe<Fault>,
    {
        match self.inner {
            OneOf::Left(value) => validation(value),
            OneOf::Right(fault) => Maybe::some(fault),
        }
    }

    /// Transforms the success value, leaving a fault untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            inner: self.inner.map_left(function),
        }
    }

    /// Transforms the fault, leaving a success value untouched.
    #[inline]
    #[must_use]
    pub fn map_fault<F>(self, function: F) -> Self
    where
        F: FnOnce(Fault) -> Fault,
    {
        Self {
            inner: self.inner.map_right(function),
        }
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Eliminates the outcome, invoking exactly one branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::{Fault, Outcome};
    ///
    /// let outcome: Outcome<i32> = Outcome::success(3);
    /// let text = outcome.match_with(|value| value.to_string(), |fault| fault.code().to_string());
    /// assert_eq!(text, "3");
    /// ```
    #[inline]
    pub fn match_with<R, S, F>(self, success_function: S, failure_function: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Fault) -> R,
    {
        self.inner.match_with(success_function, failure_function)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        self.inner.left_ref()
    }

    /// Returns a reference to the fault if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&Fault> {
        self.inner.right_ref()
    }

    /// Casts to the success value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCastError`] if this outcome is a failure.
    pub fn try_success(self) -> Result<T, InvalidCastError> {
        match self.inner {
            OneOf::Left(value) => Ok(value),
            OneOf::Right(_) => Err(InvalidCastError::new::<T>("Outcome::Failure")),
        }
    }

    /// Casts to the fault.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCastError`] if this outcome is a success.
    pub fn try_failure(self) -> Result<Fault, InvalidCastError> {
        match self.inner {
            OneOf::Left(_) => Err(InvalidCastError::new::<Fault>("Outcome::Success")),
            OneOf::Right(fault) => Ok(fault),
        }
    }

    /// Returns the underlying two-sided union.
    #[inline]
    pub fn into_one_of(self) -> OneOf<T, Fault> {
        self.inner
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Fault> {
        match self.inner {
            OneOf::Left(value) => Ok(value),
            OneOf::Right(fault) => Err(fault),
        }
    }
}

// =============================================================================
// Asynchronous Operations
// =============================================================================

#[cfg(feature = "async")]
impl<T> Outcome<T> {
    /// An already-resolved success.
    #[inline]
    pub fn success_async(value: T) -> Ready<Self> {
        ready(Self::success(value))
    }

    /// An already-resolved failure.
    #[inline]
    pub fn failure_async(fault: impl Into<Fault>) -> Ready<Self> {
        ready(Self::failure(fault))
    }

    /// Lifts this outcome into an already-resolved future.
    #[inline]
    pub fn as_async(self) -> Ready<Self> {
        ready(self)
    }

    /// Chains a continuation that may be deferred.
    ///
    /// The continuation is invoked at most once, and never on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Outcome;
    ///
    /// let doubled = futures::executor::block_on(
    ///     Outcome::success(4).bind_async(|value| async move { Outcome::success(value * 2) }),
    /// );
    /// assert_eq!(doubled.try_success(), Ok(8));
    /// ```
    pub async fn bind_async<U, F, Next>(self, continuation: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = Outcome<U>>,
    {
        match self.inner {
            OneOf::Left(value) => continuation(value).await,
            OneOf::Right(fault) => Outcome::failure(fault),
        }
    }

    /// Chains a deferred validation step; see [`bind_fault`](Self::bind_fault).
    pub async fn bind_fault_async<F, Next>(self, validation: F) -> Maybe<Fault>
    where
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = Maybe<Fault>>,
    {
        match self.inner {
            OneOf::Left(value) => validation(value).await,
            OneOf::Right(fault) => Maybe::some(fault),
        }
    }

    /// Transforms the success value with a deferred function.
    pub async fn map_async<U, F, Next>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = U>,
    {
        match self.inner {
            OneOf::Left(value) => Outcome::success(function(value).await),
            OneOf::Right(fault) => Outcome::failure(fault),
        }
    }

    /// Eliminates the outcome with branches that may be deferred.
    pub async fn match_async<R, S, F, SuccessFuture, FailureFuture>(
        self,
        success_function: S,
        failure_function: F,
    ) -> R
    where
        S: FnOnce(T) -> SuccessFuture,
        F: FnOnce(Fault) -> FailureFuture,
        SuccessFuture: IntoFuture<Output = R>,
        FailureFuture: IntoFuture<Output = R>,
    {
        self.inner
            .match_async(success_function, failure_function)
            .await
    }
}

#[cfg(feature = "async")]
impl<T> IntoFuture for Outcome<T> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            OneOf::Left(value) => formatter.debug_tuple("Success").field(value).finish(),
            OneOf::Right(fault) => formatter.debug_tuple("Failure").field(fault).finish(),
        }
    }
}

impl<T> Vacancy for Outcome<T> {}

impl<T> From<Fault> for Outcome<T> {
    #[inline]
    fn from(fault: Fault) -> Self {
        Self::failure(fault)
    }
}

impl<T> From<AggregateFault> for Outcome<T> {
    #[inline]
    fn from(aggregate: AggregateFault) -> Self {
        Self::failure(aggregate)
    }
}

impl<T> From<OneOf<T, Fault>> for Outcome<T> {
    #[inline]
    fn from(inner: OneOf<T, Fault>) -> Self {
        Self { inner }
    }
}

impl<T, E: Into<Fault>> From<Result<T, E>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Fault> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
enum OutcomeRef<'a, T> {
    Success(&'a T),
    Failure(&'a Fault),
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
enum OutcomeOwned<T> {
    Success(T),
    Failure(Fault),
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Outcome<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let borrowed = match &self.inner {
            OneOf::Left(value) => OutcomeRef::Success(value),
            OneOf::Right(fault) => OutcomeRef::Failure(fault),
        };
        serde::Serialize::serialize(&borrowed, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Outcome<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let owned = <OutcomeOwned<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(match owned {
            OutcomeOwned::Success(value) => Self::success(value),
            OutcomeOwned::Failure(fault) => Self::failure(fault),
        })
    }
}
