//! Absence markers for `Maybe` payloads.
//!
//! `Maybe::some` re-validates its payload: a value that is its type's
//! "nothing" (zero, `false`, an empty `Option`, ...) collapses to `None`
//! instead of producing a `Some` that carries no information. The
//! [`Vacancy`] trait is how a type reports that.
//!
//! # Examples
//!
//! ```rust
//! use faultline::{Maybe, Vacancy};
//!
//! assert!(0_i32.is_vacant());
//! assert!(!7_i32.is_vacant());
//! assert!(Maybe::some(0_u8).is_none());
//!
//! // Strings have no null, so they are never vacant.
//! assert!(Maybe::some(String::new()).is_some());
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Reports whether a value is its type's absence marker.
///
/// The provided method returns `false`, so a type whose every value is
/// meaningful implements the trait with an empty body:
///
/// ```rust
/// use faultline::{Maybe, Vacancy};
///
/// struct UserId(String);
///
/// impl Vacancy for UserId {}
///
/// assert!(Maybe::some(UserId("42".to_string())).is_some());
/// ```
///
/// With the `derive` feature, `#[derive(Vacancy)]` treats a struct as vacant
/// when all of its fields are, and an enum as vacant when it holds the unit
/// variant marked `#[vacant]`.
pub trait Vacancy {
    /// Returns `true` if this value stands for "no value".
    #[inline]
    fn is_vacant(&self) -> bool {
        false
    }
}

macro_rules! impl_zero_vacancy {
    ($($type:ty),* $(,)?) => {
        $(
            impl Vacancy for $type {
                #[inline]
                fn is_vacant(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_zero_vacancy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Vacancy for f32 {
    #[inline]
    fn is_vacant(&self) -> bool {
        *self == 0.0
    }
}

impl Vacancy for f64 {
    #[inline]
    fn is_vacant(&self) -> bool {
        *self == 0.0
    }
}

impl Vacancy for bool {
    #[inline]
    fn is_vacant(&self) -> bool {
        !*self
    }
}

impl Vacancy for char {
    #[inline]
    fn is_vacant(&self) -> bool {
        *self == '\0'
    }
}

impl Vacancy for () {
    #[inline]
    fn is_vacant(&self) -> bool {
        true
    }
}

impl Vacancy for Duration {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_zero()
    }
}

impl<T> Vacancy for Option<T> {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_none()
    }
}

// Owned and borrowed handles have no null state.
impl<T: ?Sized> Vacancy for &T {}
impl<T: ?Sized> Vacancy for &mut T {}
impl<T: ?Sized> Vacancy for Box<T> {}
impl<T: ?Sized> Vacancy for Rc<T> {}
impl<T: ?Sized> Vacancy for Arc<T> {}
impl<T: ?Sized + ToOwned> Vacancy for Cow<'_, T> {}
impl Vacancy for String {}
impl<T> Vacancy for Vec<T> {}
impl<T> Vacancy for VecDeque<T> {}
impl<K, V, S> Vacancy for HashMap<K, V, S> {}
impl<T, S> Vacancy for HashSet<T, S> {}
impl<K, V> Vacancy for BTreeMap<K, V> {}
impl<T> Vacancy for BTreeSet<T> {}

macro_rules! impl_tuple_vacancy {
    ($(($($name:ident : $index:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Vacancy),+> Vacancy for ($($name,)+) {
                #[inline]
                fn is_vacant(&self) -> bool {
                    $(self.$index.is_vacant())&&+
                }
            }
        )*
    };
}

impl_tuple_vacancy!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(-1, false)]
    fn test_integer_vacancy(#[case] value: i64, #[case] expected: bool) {
        assert_eq!(value.is_vacant(), expected);
    }

    #[rstest]
    fn test_float_vacancy() {
        assert!(0.0_f64.is_vacant());
        assert!((-0.0_f64).is_vacant());
        assert!(!f64::NAN.is_vacant());
        assert!(!1.5_f32.is_vacant());
    }

    #[rstest]
    fn test_option_vacancy() {
        assert!(None::<i32>.is_vacant());
        assert!(!Some(0).is_vacant());
    }

    #[rstest]
    fn test_tuple_vacant_only_when_every_element_is() {
        assert!((0, false).is_vacant());
        assert!(!(0, true).is_vacant());
        assert!(!(1, 0, '\0').is_vacant());
    }

    #[rstest]
    fn test_handles_are_never_vacant() {
        assert!(!String::new().is_vacant());
        assert!(!"".is_vacant());
        assert!(!Vec::<i32>::new().is_vacant());
        assert!(!Arc::new(0).is_vacant());
    }
}
