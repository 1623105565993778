//! Combinators on futures that resolve to a container.
//!
//! These let a chain keep going without awaiting every intermediate step:
//!
//! ```rust
//! use faultline::Maybe;
//! use faultline::extensions::MaybeFutureExt;
//!
//! let result = futures::executor::block_on(
//!     Maybe::some(2)
//!         .as_async()
//!         .bind_async(|value| async move { Maybe::some(value + 1) })
//!         .map_async(|value| async move { value * 10 }),
//! );
//! assert_eq!(result, Maybe::some(30));
//! ```

use std::future::{Future, IntoFuture};

use crate::fault::Fault;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::vacancy::Vacancy;

// =============================================================================
// Maybe
// =============================================================================

/// Chaining for futures resolving to [`Maybe`].
///
/// Every method awaits the receiver first and then behaves like the
/// corresponding inherent method on `Maybe`.
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    /// See [`Maybe::bind_async`].
    fn bind_async<U, F, Next>(self, continuation: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = Maybe<U>>,
    {
        async move { self.await.bind_async(continuation).await }
    }

    /// See [`Maybe::map_async`].
    fn map_async<U, F, Next>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        U: Vacancy,
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = U>,
    {
        async move { self.await.map_async(function).await }
    }

    /// See [`Maybe::match_async`].
    fn match_async<R, S, N, SomeFuture, NoneFuture>(
        self,
        some_function: S,
        none_function: N,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SomeFuture,
        N: FnOnce() -> NoneFuture,
        SomeFuture: IntoFuture<Output = R>,
        NoneFuture: IntoFuture<Output = R>,
    {
        async move {
            self.await
                .match_async(some_function, none_function)
                .await
        }
    }

    /// See [`Maybe::bi_bind_async`].
    ///
    /// Once a stage produces a value, every later `bi_bind_async` in the
    /// chain is skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    /// use faultline::extensions::MaybeFutureExt;
    ///
    /// let first = futures::executor::block_on(
    ///     Maybe::<i32>::none()
    ///         .as_async()
    ///         .bi_bind_async(|| async { Maybe::some(1) })
    ///         .bi_bind_async(|| -> Maybe<i32> { panic!("skipped once a value exists") }),
    /// );
    /// assert_eq!(first, Maybe::some(1));
    /// ```
    fn bi_bind_async<F, Next>(self, next: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce() -> Next,
        Next: IntoFuture<Output = Maybe<T>>,
    {
        async move { self.await.bi_bind_async(next).await }
    }
}

impl<T, Fut> MaybeFutureExt<T> for Fut where Fut: Future<Output = Maybe<T>> {}

/// Conversions for futures resolving to a `Maybe<Fault>` validation result.
pub trait FaultFutureExt: Future<Output = Maybe<Fault>> + Sized {
    /// See [`Maybe::to_outcome_async`].
    fn to_outcome_async<T, F, Next>(self, producer: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Next,
        Next: IntoFuture<Output = T>,
    {
        async move { self.await.to_outcome_async(producer).await }
    }

    /// See [`Maybe::chain_outcome_async`].
    fn chain_outcome_async<T, F, Next>(self, producer: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Next,
        Next: IntoFuture<Output = Outcome<T>>,
    {
        async move { self.await.chain_outcome_async(producer).await }
    }
}

impl<Fut> FaultFutureExt for Fut where Fut: Future<Output = Maybe<Fault>> {}

// =============================================================================
// Outcome
// =============================================================================

/// Chaining for futures resolving to [`Outcome`].
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// See [`Outcome::bind_async`].
    fn bind_async<U, F, Next>(self, continuation: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = Outcome<U>>,
    {
        async move { self.await.bind_async(continuation).await }
    }

    /// See [`Outcome::bind_fault_async`].
    fn bind_fault_async<F, Next>(self, validation: F) -> impl Future<Output = Maybe<Fault>>
    where
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = Maybe<Fault>>,
    {
        async move { self.await.bind_fault_async(validation).await }
    }

    /// See [`Outcome::map_async`].
    fn map_async<U, F, Next>(self, function: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = U>,
    {
        async move { self.await.map_async(function).await }
    }

    /// See [`Outcome::match_async`].
    fn match_async<R, S, F, SuccessFuture, FailureFuture>(
        self,
        success_function: S,
        failure_function: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SuccessFuture,
        F: FnOnce(Fault) -> FailureFuture,
        SuccessFuture: IntoFuture<Output = R>,
        FailureFuture: IntoFuture<Output = R>,
    {
        async move {
            self.await
                .match_async(success_function, failure_function)
                .await
        }
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}
