//! Maybe type - zero or one value, normalized at construction.
//!
//! `Maybe<T>` is either `Some(value)` or `None`. Unlike a plain `Option`, it
//! re-validates its payload: [`Maybe::some`] returns `None` when the value
//! is its type's absence marker (see [`Vacancy`]). The storage is private,
//! so every `Some` in circulation carries a meaningful value.
//!
//! Terminal consumption goes through the total [`Maybe::match_with`]; the
//! only partial accessor is the explicit [`Maybe::try_cast`].
//!
//! # Examples
//!
//! ```rust
//! use faultline::Maybe;
//!
//! let parsed = Maybe::some("42")
//!     .bind(|text| Maybe::from_option(text.parse::<u32>().ok()))
//!     .map(|number| number * 2)
//!     .filter(|number| *number > 10);
//!
//! assert_eq!(parsed.match_with(|number| number, || 0), 84);
//!
//! // Zero is `u32`'s absence marker.
//! assert!(Maybe::some(0_u32).is_none());
//! ```

use std::fmt;
#[cfg(feature = "async")]
use std::future::IntoFuture;

#[cfg(feature = "async")]
use futures::future::{Ready, ready};

use crate::error::InvalidCastError;
use crate::fault::Fault;
use crate::outcome::Outcome;
use crate::vacancy::Vacancy;

/// Zero or one value of type `T`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Maybe<T> {
    value: Option<T>,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value`, or returns `None` if the value is vacant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    ///
    /// assert!(Maybe::some(5).is_some());
    /// assert!(Maybe::some(0).is_none());
    /// assert!(Maybe::some(None::<&str>).is_none());
    /// ```
    #[inline]
    pub fn some(value: T) -> Self
    where
        T: Vacancy,
    {
        if value.is_vacant() {
            tracing::trace!(
                payload = std::any::type_name::<T>(),
                "vacant payload collapsed to None"
            );
            Self::none()
        } else {
            Self { value: Some(value) }
        }
    }

    /// The empty variant.
    #[inline]
    pub const fn none() -> Self {
        Self { value: None }
    }

    /// Converts an `Option`, normalizing a vacant payload to `None`.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self
    where
        T: Vacancy,
    {
        option.map_or_else(Self::none, Self::some)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.value.is_none()
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Applies a `Maybe`-returning function to the value, if any.
    ///
    /// `None` propagates without invoking `function`. The returned `Maybe`
    /// is passed through as-is: it was built by a `Maybe` constructor and is
    /// already normalized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    ///
    /// let halve = |number: i32| if number % 2 == 0 { Maybe::some(number / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).bind(halve), Maybe::some(4));
    /// assert_eq!(Maybe::some(7).bind(halve), Maybe::none());
    /// assert_eq!(Maybe::<i32>::none().bind(halve), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.value {
            Some(value) => function(value),
            None => Maybe::none(),
        }
    }

    /// Transforms the value, if any, normalizing the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).map(|number| number * 2), Maybe::some(6));
    /// // The mapped value is vacant, so the result collapses.
    /// assert_eq!(Maybe::some(3).map(|number| number - 3), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        U: Vacancy,
        F: FnOnce(T) -> U,
    {
        match self.value {
            Some(value) => Maybe::some(function(value)),
            None => Maybe::none(),
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).filter(|number| number % 2 == 0), Maybe::some(4));
    /// assert_eq!(Maybe::some(3).filter(|number| number % 2 == 0), Maybe::none());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Returns this value if present, otherwise the result of `next`.
    ///
    /// `next` is invoked only for `None`; a `Some` passes through.
    #[inline]
    #[must_use]
    pub fn bi_bind<F>(self, next: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.value {
            Some(_) => self,
            None => next(),
        }
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Eliminates the `Maybe`, invoking exactly one branch.
    ///
    /// Branches returning `()` give the side-effect form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    ///
    /// let greeting = Maybe::some("Ada").match_with(|name| format!("hello {name}"), || "hello".to_string());
    /// assert_eq!(greeting, "hello Ada");
    /// ```
    #[inline]
    pub fn match_with<R, S, N>(self, some_function: S, none_function: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.value {
            Some(value) => some_function(value),
            None => none_function(),
        }
    }

    /// Runs `action` on the value, if present.
    #[inline]
    pub fn if_some<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }
    }

    /// Runs `action` if no value is present.
    #[inline]
    pub fn if_none<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if self.value.is_none() {
            action();
        }
    }

    // =========================================================================
    // Coalescing
    // =========================================================================

    /// Returns the value, or `fallback` if none is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    ///
    /// assert_eq!(Maybe::some(99).coalesce(1), 99);
    /// assert_eq!(Maybe::none().coalesce(1), 1);
    /// ```
    #[inline]
    pub fn coalesce(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    /// Returns the value, or computes a fallback if none is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::none().coalesce_with(|| 7), 7);
    /// assert_eq!(Maybe::some(5).coalesce_with(|| 7), 5);
    /// ```
    #[inline]
    pub fn coalesce_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(fallback)
    }

    /// Returns this `Maybe` if it holds a value, otherwise `fallback`.
    ///
    /// This is the container-shaped fallback used by `Maybe<Fault>` chains
    /// that supply a default fault.
    #[inline]
    #[must_use]
    pub fn coalesce_maybe(self, fallback: Self) -> Self {
        if self.is_some() { self } else { fallback }
    }

    /// Like [`coalesce_maybe`](Self::coalesce_maybe), computing the fallback
    /// only when needed.
    #[inline]
    #[must_use]
    pub fn coalesce_maybe_with<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_some() { self } else { fallback() }
    }

    // =========================================================================
    // Accumulation
    // =========================================================================

    /// Starts an accumulating sequence: this value followed by `next()`.
    ///
    /// Unlike [`bind`](Self::bind), `next` is evaluated whether this value
    /// is `Some` or `None`, so a batch of independent checks keeps every
    /// individual outcome. The sequence is lazy: `next` runs exactly once,
    /// when the sequence is iterated past this value. A sequence that is
    /// dropped or cut short before reaching `next` (for example with
    /// `.take(1)`) never runs it, so consume the whole sequence when every
    /// check must execute. Further stages are appended with
    /// [`MaybeIteratorExt::and_collect`].
    ///
    /// [`MaybeIteratorExt::and_collect`]: crate::extensions::MaybeIteratorExt::and_collect
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    ///
    /// let results: Vec<Maybe<i32>> = Maybe::<i32>::none().and_collect(|| Maybe::some(1)).collect();
    /// assert_eq!(results, vec![Maybe::none(), Maybe::some(1)]);
    /// ```
    pub fn and_collect<F>(self, next: F) -> impl Iterator<Item = Self>
    where
        F: FnOnce() -> Self,
    {
        std::iter::once(self).chain(std::iter::once_with(next))
    }

    /// Starts an accumulating sequence: this value followed by `next`.
    pub fn and_collect_value(self, next: Self) -> impl Iterator<Item = Self> {
        [self, next].into_iter()
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            value: self.value.as_ref(),
        }
    }

    /// Iterates over the value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.value.iter()
    }

    /// Converts into a plain `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Casts to the payload.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCastError`] if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    ///
    /// assert_eq!(Maybe::some("test").try_cast(), Ok("test"));
    /// assert!(Maybe::<&str>::none().try_cast().is_err());
    /// ```
    pub fn try_cast(self) -> Result<T, InvalidCastError> {
        self.value
            .ok_or_else(|| InvalidCastError::new::<T>("Maybe::None"))
    }
}

// =============================================================================
// Fault Validation Chains
// =============================================================================

impl Maybe<Fault> {
    /// Builds an `Outcome`: success with `value` when no fault is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::{Fault, Maybe};
    ///
    /// let passed = Maybe::<Fault>::none().to_outcome(1);
    /// assert_eq!(passed.try_success(), Ok(1));
    ///
    /// let failed = Maybe::some(Fault::new("code", "title", "detail")).to_outcome(1);
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn to_outcome<T>(self, value: T) -> Outcome<T> {
        match self.value {
            Some(fault) => Outcome::failure(fault),
            None => Outcome::success(value),
        }
    }

    /// Builds an `Outcome`, producing the success value only when no fault
    /// is present.
    #[inline]
    pub fn to_outcome_with<T, F>(self, producer: F) -> Outcome<T>
    where
        F: FnOnce() -> T,
    {
        match self.value {
            Some(fault) => Outcome::failure(fault),
            None => Outcome::success(producer()),
        }
    }

    /// Returns `outcome` when no fault is present, otherwise the fault.
    #[inline]
    pub fn chain_outcome<T>(self, outcome: Outcome<T>) -> Outcome<T> {
        match self.value {
            Some(fault) => Outcome::failure(fault),
            None => outcome,
        }
    }

    /// Invokes `producer` when no fault is present, otherwise returns the
    /// fault without invoking it.
    #[inline]
    pub fn chain_outcome_with<T, F>(self, producer: F) -> Outcome<T>
    where
        F: FnOnce() -> Outcome<T>,
    {
        match self.value {
            Some(fault) => Outcome::failure(fault),
            None => producer(),
        }
    }
}

// =============================================================================
// Asynchronous Operations
// =============================================================================

#[cfg(feature = "async")]
impl<T> Maybe<T> {
    /// An already-resolved `Some`, normalized like [`Maybe::some`].
    #[inline]
    pub fn some_async(value: T) -> Ready<Self>
    where
        T: Vacancy,
    {
        ready(Self::some(value))
    }

    /// An already-resolved `None`.
    #[inline]
    pub fn none_async() -> Ready<Self> {
        ready(Self::none())
    }

    /// Lifts this value into an already-resolved future.
    #[inline]
    pub fn as_async(self) -> Ready<Self> {
        ready(self)
    }

    /// Chains a continuation that may be deferred.
    ///
    /// `continuation` may return a future or a plain `Maybe` (which resolves
    /// immediately). It is invoked at most once, and only for `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    ///
    /// let length = futures::executor::block_on(
    ///     Maybe::some("test").bind_async(|text| async move { Maybe::some(text.len()) }),
    /// );
    /// assert_eq!(length, Maybe::some(4));
    /// ```
    pub async fn bind_async<U, F, Next>(self, continuation: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = Maybe<U>>,
    {
        match self.value {
            Some(value) => continuation(value).await,
            None => Maybe::none(),
        }
    }

    /// Transforms the value with a deferred function, normalizing the result.
    pub async fn map_async<U, F, Next>(self, function: F) -> Maybe<U>
    where
        U: Vacancy,
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = U>,
    {
        match self.value {
            Some(value) => Maybe::some(function(value).await),
            None => Maybe::none(),
        }
    }

    /// Eliminates the `Maybe` with branches that may be deferred.
    ///
    /// Exactly one branch is invoked and awaited.
    pub async fn match_async<R, S, N, SomeFuture, NoneFuture>(
        self,
        some_function: S,
        none_function: N,
    ) -> R
    where
        S: FnOnce(T) -> SomeFuture,
        N: FnOnce() -> NoneFuture,
        SomeFuture: IntoFuture<Output = R>,
        NoneFuture: IntoFuture<Output = R>,
    {
        match self.value {
            Some(value) => some_function(value).await,
            None => none_function().await,
        }
    }

    /// Invokes `next` only when no value is present.
    pub async fn bi_bind_async<F, Next>(self, next: F) -> Self
    where
        F: FnOnce() -> Next,
        Next: IntoFuture<Output = Self>,
    {
        match self.value {
            Some(_) => self,
            None => next().await,
        }
    }
}

#[cfg(feature = "async")]
impl Maybe<Fault> {
    /// Builds an `Outcome`, awaiting the success value only when no fault is
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::{Fault, Maybe};
    ///
    /// let outcome = futures::executor::block_on(
    ///     Maybe::<Fault>::none().to_outcome_async(|| async { 1 }),
    /// );
    /// assert_eq!(outcome.try_success(), Ok(1));
    /// ```
    pub async fn to_outcome_async<T, F, Next>(self, producer: F) -> Outcome<T>
    where
        F: FnOnce() -> Next,
        Next: IntoFuture<Output = T>,
    {
        match self.value {
            Some(fault) => Outcome::failure(fault),
            None => Outcome::success(producer().await),
        }
    }

    /// Awaits the `Outcome` produced by `producer` when no fault is present;
    /// otherwise returns the fault without invoking it.
    pub async fn chain_outcome_async<T, F, Next>(self, producer: F) -> Outcome<T>
    where
        F: FnOnce() -> Next,
        Next: IntoFuture<Output = Outcome<T>>,
    {
        match self.value {
            Some(fault) => Outcome::failure(fault),
            None => producer().await,
        }
    }
}

#[cfg(feature = "async")]
impl<T> IntoFuture for Maybe<T> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    /// A `Maybe` is an already-resolved computation, so synchronous
    /// continuations can be passed wherever a deferred one is accepted.
    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            None => formatter.write_str("None"),
        }
    }
}

impl<T: Vacancy> From<T> for Maybe<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

impl<T> Vacancy for Maybe<T> {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_none()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de> + Vacancy,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_default_is_none() {
        assert!(Maybe::<String>::default().is_none());
    }

    #[rstest]
    fn test_from_normalizes() {
        assert!(Maybe::from(0_u32).is_none());
        assert!(Maybe::from(1_u32).is_some());
        assert!(Maybe::from_option(Some(false)).is_none());
    }

    #[rstest]
    fn test_bind_does_not_renormalize_continuation_result() {
        let nested: Maybe<Maybe<i32>> = Maybe::some(Maybe::some(1));
        let flattened = nested.bind(|inner| Maybe::some(inner));
        assert_eq!(flattened, Maybe::some(Maybe::some(1)));
    }

    #[rstest]
    fn test_and_collect_is_lazy_until_iterated() {
        let calls = Cell::new(0);
        let sequence = Maybe::some(1).and_collect(|| {
            calls.set(calls.get() + 1);
            Maybe::none()
        });
        assert_eq!(calls.get(), 0);

        let results: Vec<Maybe<i32>> = sequence.collect();
        assert_eq!(calls.get(), 1);
        assert_eq!(results, vec![Maybe::some(1), Maybe::none()]);
    }

    #[rstest]
    fn test_and_collect_cut_short_never_runs_next() {
        let calls = Cell::new(0);
        let first: Vec<Maybe<i32>> = Maybe::some(1)
            .and_collect(|| {
                calls.set(calls.get() + 1);
                Maybe::none()
            })
            .take(1)
            .collect();
        assert_eq!(first, vec![Maybe::some(1)]);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Maybe::some(3)), "Some(3)");
        assert_eq!(format!("{:?}", Maybe::<i32>::none()), "None");
    }
}
