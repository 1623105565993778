//! # faultline
//!
//! Explicit absence and explicit failure for Rust, with combinators for
//! chaining, matching and aggregating them.
//!
//! ## Overview
//!
//! - **[`Maybe`]**: an optional value whose "empty" values (see
//!   [`Vacancy`]) normalize to `None`
//! - **[`Outcome`]**: a success value or a [`Fault`]
//! - **[`OneOf`]**: a value that is exactly one of two types
//! - **[`Fault`]** and **[`AggregateFault`]**: structured failure payloads
//! - **[`extensions`]**: sequence, deferred and function combinators
//!
//! `bind` chains short-circuit on the first failure. The batch combinators
//! in [`extensions`] evaluate everything and fold every failure into one
//! [`AggregateFault`].
//!
//! ## Feature Flags
//!
//! - `async`: deferred combinators (`*_async`) built on `futures` (default)
//! - `derive`: `#[derive(Vacancy)]` (default)
//! - `serde`: `Serialize`/`Deserialize` for the containers and faults
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use faultline::prelude::*;
//!
//! fn validate_name(name: &str) -> Maybe<Fault> {
//!     if name.is_empty() {
//!         Maybe::some(Fault::new("name.empty", "Missing name", "a name is required"))
//!     } else {
//!         Maybe::none()
//!     }
//! }
//!
//! let registered = validate_name("Ada").to_outcome_with(|| "Ada".to_uppercase());
//! assert_eq!(registered.try_success(), Ok("ADA".to_string()));
//!
//! let rejected = validate_name("").to_outcome_with(|| "never built".to_string());
//! assert_eq!(rejected.failure_ref().map(Fault::code), Some("name.empty"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

// Lets `#[derive(Vacancy)]` expand to `::faultline::Vacancy` inside this crate too.
extern crate self as faultline;

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the fault types and every extension trait.
///
/// # Usage
///
/// ```rust
/// use faultline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::InvalidCastError;
    pub use crate::extensions::*;
    pub use crate::fault::{AggregateFault, Fault, FaultSource};
    pub use crate::maybe::Maybe;
    pub use crate::one_of::OneOf;
    pub use crate::outcome::Outcome;
    pub use crate::Vacancy;
}

mod error;
pub mod extensions;
mod fault;
mod maybe;
mod one_of;
mod outcome;
mod vacancy;

pub use error::InvalidCastError;
pub use fault::{AggregateFault, Fault, FaultSource};
pub use maybe::Maybe;
pub use one_of::OneOf;
pub use outcome::Outcome;
pub use vacancy::Vacancy;

/// Derives [`Vacancy`] for structs and enums.
///
/// A struct is vacant when every field is vacant. An enum is vacant when it
/// holds the unit variant marked `#[vacant]`.
///
/// ```rust
/// use faultline::{Maybe, Vacancy};
///
/// #[derive(Vacancy)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// #[derive(Vacancy)]
/// enum Status {
///     #[vacant]
///     Unknown,
///     Active,
/// }
///
/// assert!(Maybe::some(Point { x: 0, y: 0 }).is_none());
/// assert!(Maybe::some(Point { x: 1, y: 0 }).is_some());
/// assert!(Maybe::some(Status::Unknown).is_none());
/// assert!(Maybe::some(Status::Active).is_some());
/// ```
#[cfg(feature = "derive")]
pub use faultline_derive::Vacancy;
