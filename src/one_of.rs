//! OneOf type - a value that is exactly one of two independently typed values.
//!
//! `OneOf<L, R>` holds either a `Left(L)` or a `Right(R)`. The tag is chosen
//! by the constructor, never by inspecting the payload, so `OneOf<i32, i32>`
//! is as meaningful as `OneOf<String, i32>`.
//!
//! It is also the representation behind [`Outcome`](crate::Outcome), where
//! the left side carries the success value and the right side the fault.
//!
//! # Examples
//!
//! ```rust
//! use faultline::OneOf;
//!
//! let left: OneOf<&str, i32> = OneOf::Left("test");
//! let right: OneOf<&str, i32> = OneOf::Right(123);
//!
//! let describe = |one_of: OneOf<&str, i32>| {
//!     one_of.match_with(|text| format!("text {text}"), |number| format!("number {number}"))
//! };
//! assert_eq!(describe(left), "text test");
//! assert_eq!(describe(right), "number 123");
//! ```

use std::fmt;
#[cfg(feature = "async")]
use std::future::IntoFuture;

use crate::error::InvalidCastError;
use crate::vacancy::Vacancy;

/// A value that is exactly one of two types.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OneOf<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> OneOf<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Eliminates the `OneOf` by applying exactly one of two functions.
    ///
    /// Passing closures that return `()` performs a side effect on whichever
    /// side is populated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::OneOf;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Side { Left, Right }
    ///
    /// let one_of: OneOf<&str, i32> = OneOf::Right(123);
    /// assert_eq!(one_of.match_with(|_| Side::Left, |_| Side::Right), Side::Right);
    /// ```
    #[inline]
    pub fn match_with<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Like [`match_with`](Self::match_with), for branches that return
    /// deferred results.
    ///
    /// Only the selected branch is invoked, and it is awaited once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::OneOf;
    ///
    /// let one_of: OneOf<&str, i32> = OneOf::Left("test");
    /// let length = futures::executor::block_on(
    ///     one_of.match_async(|text| async move { text.len() }, |_| async { 0 }),
    /// );
    /// assert_eq!(length, 4);
    /// ```
    #[cfg(feature = "async")]
    pub async fn match_async<T, F, G, LeftFuture, RightFuture>(
        self,
        left_function: F,
        right_function: G,
    ) -> T
    where
        F: FnOnce(L) -> LeftFuture,
        G: FnOnce(R) -> RightFuture,
        LeftFuture: IntoFuture<Output = T>,
        RightFuture: IntoFuture<Output = T>,
    {
        match self {
            Self::Left(value) => left_function(value).await,
            Self::Right(value) => right_function(value).await,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<L>`, discarding a right value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, discarding a left value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts from `&OneOf<L, R>` to `OneOf<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> OneOf<&L, &R> {
        match self {
            Self::Left(value) => OneOf::Left(value),
            Self::Right(value) => OneOf::Right(value),
        }
    }

    /// A sequence holding the left value, or nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::OneOf;
    ///
    /// let left: OneOf<&str, i32> = OneOf::Left("test");
    /// assert_eq!(left.left_iter().collect::<Vec<_>>(), vec!["test"]);
    ///
    /// let right: OneOf<&str, i32> = OneOf::Right(1);
    /// assert_eq!(right.left_iter().count(), 0);
    /// ```
    #[inline]
    pub fn left_iter(self) -> std::option::IntoIter<L> {
        self.left().into_iter()
    }

    /// A sequence holding the right value, or nothing.
    #[inline]
    pub fn right_iter(self) -> std::option::IntoIter<R> {
        self.right().into_iter()
    }

    // =========================================================================
    // Explicit Casts
    // =========================================================================

    /// Casts to the left payload.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCastError`] if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::OneOf;
    ///
    /// let left: OneOf<&str, i32> = OneOf::Left("test");
    /// assert_eq!(left.try_left(), Ok("test"));
    ///
    /// let right: OneOf<&str, i32> = OneOf::Right(1);
    /// assert!(right.try_left().is_err());
    /// ```
    pub fn try_left(self) -> Result<L, InvalidCastError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(InvalidCastError::new::<L>("OneOf::Right")),
        }
    }

    /// Casts to the right payload.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCastError`] if this is a `Left` value.
    pub fn try_right(self) -> Result<R, InvalidCastError> {
        match self {
            Self::Left(_) => Err(InvalidCastError::new::<R>("OneOf::Left")),
            Self::Right(value) => Ok(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> OneOf<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => OneOf::Left(function(value)),
            Self::Right(value) => OneOf::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> OneOf<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => OneOf::Left(value),
            Self::Right(value) => OneOf::Right(function(value)),
        }
    }

    /// Swaps the two sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::OneOf;
    ///
    /// let left: OneOf<i32, String> = OneOf::Left(42);
    /// assert_eq!(left.swap(), OneOf::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> OneOf<R, L> {
        match self {
            Self::Left(value) => OneOf::Right(value),
            Self::Right(value) => OneOf::Left(value),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for OneOf<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> Vacancy for OneOf<L, R> {}

impl<L, R> From<Result<L, R>> for OneOf<L, R> {
    /// `Ok(value)` becomes `Left(value)` and `Err(error)` becomes
    /// `Right(error)`, the same sides [`Outcome`](crate::Outcome) uses for
    /// success and fault.
    #[inline]
    fn from(result: Result<L, R>) -> Self {
        match result {
            Ok(value) => Self::Left(value),
            Err(error) => Self::Right(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_one_of_with_same_types_keeps_constructor_tag() {
        let left: OneOf<i32, i32> = OneOf::Left(1);
        let right: OneOf<i32, i32> = OneOf::Right(1);
        assert!(left.is_left());
        assert!(right.is_right());
        assert_ne!(left, right);
    }

    #[rstest]
    fn test_try_right_on_left_names_state() {
        let left: OneOf<&str, i32> = OneOf::Left("test");
        let error = left.try_right().unwrap_err();
        assert_eq!(error.state, "OneOf::Left");
        assert_eq!(error.target, "i32");
    }

    #[rstest]
    fn test_result_conversion_puts_ok_on_left() {
        let ok: Result<i32, String> = Ok(42);
        assert_eq!(OneOf::from(ok), OneOf::<i32, String>::Left(42));

        let err: Result<i32, String> = Err("error".to_string());
        assert_eq!(OneOf::from(err), OneOf::<i32, String>::Right("error".to_string()));
    }
}
