//! Derive macro for the faultline `Vacancy` trait.
//!
//! `Maybe::some` collapses a payload to `None` when the payload reports itself
//! as vacant. This crate generates that report for user types.
//!
//! # Example
//!
//! ```rust,ignore
//! use faultline::{Maybe, Vacancy};
//!
//! #[derive(Vacancy)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! #[derive(Vacancy)]
//! enum Priority {
//!     #[vacant]
//!     Unset,
//!     Low,
//!     High,
//! }
//!
//! assert!(Maybe::some(Point { x: 0, y: 0 }).is_none());
//! assert!(Maybe::some(Point { x: 0, y: 1 }).is_some());
//! assert!(Maybe::some(Priority::Unset).is_none());
//! assert!(Maybe::some(Priority::High).is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod vacancy;

use proc_macro::TokenStream;

/// Derive macro implementing `faultline::Vacancy`.
///
/// # Structs
///
/// A struct is vacant when every one of its fields is vacant, mirroring a
/// zero-initialised value. Unit structs carry no data and are always vacant.
/// Every field type must itself implement `Vacancy`.
///
/// # Enums
///
/// An enum is vacant only when it holds the unit variant marked `#[vacant]`.
/// At most one variant may carry the marker; without it the enum is never
/// vacant.
///
/// # Example
///
/// ```rust,ignore
/// use faultline::Vacancy;
///
/// #[derive(Vacancy)]
/// struct Money(u64);
///
/// assert!(Money(0).is_vacant());
/// assert!(!Money(5).is_vacant());
/// ```
#[proc_macro_derive(Vacancy, attributes(vacant))]
pub fn derive_vacancy(input: TokenStream) -> TokenStream {
    vacancy::derive_vacancy_impl(input)
}
