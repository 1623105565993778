//! Combinators over sequences, deferred computations, and functions.
//!
//! The containers carry their own single-value combinators; this module adds
//! the ones that operate on *collections* of containers and on futures that
//! resolve to them. Everything is exposed as extension traits with blanket
//! implementations, so importing the trait (or the [`prelude`](crate::prelude))
//! is enough.
//!
//! Two failure-propagation policies live side by side:
//!
//! - **short-circuit**: `bind` chains stop at the first failure and hand it on
//!   unchanged;
//! - **accumulate**: [`MaybeIteratorExt::and_collect`] evaluates every stage,
//!   and [`OutcomeIteratorExt::reduce_outcomes`] and friends evaluate every
//!   element and fold all failures into one [`AggregateFault`].
//!
//! [`AggregateFault`]: crate::AggregateFault
//!
//! # Examples
//!
//! ```rust
//! use faultline::prelude::*;
//!
//! let outcomes = vec![
//!     Outcome::success(1),
//!     Outcome::failure(Fault::new("E2", "second", "failed")),
//!     Outcome::success(3),
//!     Outcome::failure(Fault::new("E4", "fourth", "failed")),
//! ];
//!
//! let total = outcomes.clone().into_iter().reduce_outcomes(|values| values.iter().sum::<i32>());
//! let fault = total.try_failure().unwrap();
//! let codes: Vec<&str> = fault.faults().iter().map(Fault::code).collect();
//! assert_eq!(codes, vec!["E2", "E4"]);
//!
//! assert_eq!(outcomes.into_iter().successes().collect::<Vec<_>>(), vec![1, 3]);
//! ```

mod function;
#[cfg(feature = "async")]
mod future;
mod maybe;
mod one_of;
mod outcome;

pub use function::ComposeExt;
#[cfg(feature = "async")]
pub use future::{FaultFutureExt, MaybeFutureExt, OutcomeFutureExt};
pub use maybe::{CoalesceExt, MaybeIteratorExt};
pub use one_of::OneOfIteratorExt;
pub use outcome::OutcomeIteratorExt;
