//! Sequence projections over `OneOf`.

use crate::one_of::OneOf;

/// Projections for iterators of [`OneOf`].
///
/// # Examples
///
/// ```rust
/// use faultline::OneOf;
/// use faultline::extensions::OneOfIteratorExt;
///
/// let one_ofs: Vec<OneOf<&str, i32>> = vec![OneOf::Left("A"), OneOf::Right(2), OneOf::Left("B")];
///
/// assert_eq!(one_ofs.clone().into_iter().lefts().collect::<Vec<_>>(), vec!["A", "B"]);
/// assert_eq!(one_ofs.into_iter().rights().collect::<Vec<_>>(), vec![2]);
/// ```
pub trait OneOfIteratorExt<L, R>: Iterator<Item = OneOf<L, R>> + Sized {
    /// Yields the left values, in order.
    fn lefts(self) -> impl Iterator<Item = L> {
        self.filter_map(OneOf::left)
    }

    /// Yields the right values, in order.
    fn rights(self) -> impl Iterator<Item = R> {
        self.filter_map(OneOf::right)
    }
}

impl<L, R, I> OneOfIteratorExt<L, R> for I where I: Iterator<Item = OneOf<L, R>> {}
