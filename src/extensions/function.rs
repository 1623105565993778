//! Function composition.

/// Left-to-right composition of single-argument functions.
///
/// `first.compose(second)` is the function `x ↦ second(first(x))`.
///
/// # Examples
///
/// ```rust
/// use faultline::extensions::ComposeExt;
///
/// let length = |text: &str| text.len();
/// let double = |number: usize| number * 2;
/// let describe = |number: usize| format!("{number} units");
///
/// let pipeline = length.compose(double).compose(describe);
/// assert_eq!(pipeline("input"), "10 units");
/// ```
pub trait ComposeExt<A, B>: Fn(A) -> B + Sized {
    /// Returns a function applying `self`, then `next`.
    fn compose<C, G>(self, next: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        move |input| next(self(input))
    }
}

impl<A, B, F> ComposeExt<A, B> for F where F: Fn(A) -> B {}
