//! Sequence combinators over `Maybe`.

use std::iter::{Chain, Flatten, Once, OnceWith};

use crate::maybe::Maybe;
use crate::vacancy::Vacancy;

/// Combinators for iterators of [`Maybe`].
///
/// # Examples
///
/// ```rust
/// use faultline::{Fault, Maybe};
/// use faultline::extensions::MaybeIteratorExt;
///
/// let check_name = || Maybe::<Fault>::none();
/// let check_email = || Maybe::some(Fault::new("email", "Invalid email", "missing @"));
/// let check_age = || Maybe::<Fault>::none();
///
/// // Every check runs, whatever the earlier ones reported.
/// let results: Vec<Maybe<Fault>> = check_name()
///     .and_collect(check_email)
///     .and_collect(check_age)
///     .collect();
///
/// assert_eq!(results.len(), 3);
/// assert!(results[1].is_some());
/// ```
pub trait MaybeIteratorExt<T>: Iterator<Item = Maybe<T>> + Sized {
    /// Appends a stage whose result is kept regardless of earlier stages.
    ///
    /// `next` is evaluated exactly once, when iteration reaches it. If the
    /// iterator is dropped before that, `next` never runs.
    fn and_collect<F>(self, next: F) -> Chain<Self, OnceWith<F>>
    where
        F: FnOnce() -> Maybe<T>,
    {
        self.chain(std::iter::once_with(next))
    }

    /// Appends an already-computed stage.
    fn and_collect_value(self, next: Maybe<T>) -> Chain<Self, Once<Maybe<T>>> {
        self.chain(std::iter::once(next))
    }

    /// Yields only the present values, in order.
    fn somes(self) -> Flatten<Self> {
        self.flatten()
    }

    /// Projects every present value into a single result.
    ///
    /// Returns `None` when no element holds a value; otherwise `projection`
    /// receives all present values in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    /// use faultline::extensions::MaybeIteratorExt;
    ///
    /// let maybes = vec![Maybe::some(1), Maybe::none(), Maybe::some(2)];
    /// assert_eq!(maybes.into_iter().reduce_somes(|values| values.len()), Maybe::some(2));
    ///
    /// let empty: Vec<Maybe<i32>> = vec![Maybe::none(), Maybe::none()];
    /// assert_eq!(empty.into_iter().reduce_somes(|values| values.len()), Maybe::none());
    /// ```
    fn reduce_somes<U, F>(self, projection: F) -> Maybe<U>
    where
        U: Vacancy,
        F: FnOnce(Vec<T>) -> U,
    {
        let values: Vec<T> = self.somes().collect();
        if values.is_empty() {
            Maybe::none()
        } else {
            Maybe::some(projection(values))
        }
    }
}

impl<T, I> MaybeIteratorExt<T> for I where I: Iterator<Item = Maybe<T>> {}

/// First-match selection over any iterator.
pub trait CoalesceExt: Iterator + Sized {
    /// Returns the first `Some` produced by `selector`, or `fallback`.
    ///
    /// Elements after the first match are not visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Maybe;
    /// use faultline::extensions::CoalesceExt;
    ///
    /// let positive = |item: u32| if item > 0 { Maybe::some(item) } else { Maybe::none() };
    ///
    /// assert_eq!(vec![0, 1, 2].into_iter().coalesce(positive, Maybe::some(99)), Maybe::some(1));
    /// assert_eq!(vec![0, 0].into_iter().coalesce(positive, Maybe::some(99)), Maybe::some(99));
    /// ```
    fn coalesce<U, F>(self, selector: F, fallback: Maybe<U>) -> Maybe<U>
    where
        F: FnMut(Self::Item) -> Maybe<U>,
    {
        self.map(selector).find(Maybe::is_some).unwrap_or(fallback)
    }
}

impl<I: Iterator> CoalesceExt for I {}
