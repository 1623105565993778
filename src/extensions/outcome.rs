//! Batch combinators over `Outcome`.

use super::one_of::OneOfIteratorExt;
use crate::fault::{AggregateFault, Fault};
use crate::one_of::OneOf;
use crate::outcome::Outcome;

/// Projections and accumulating reductions for iterators of [`Outcome`].
///
/// The reductions evaluate every element. If any element failed, the result
/// is a single failure whose fault is an [`AggregateFault`] of *all* the
/// failures, in their original order, and the projection is never invoked.
pub trait OutcomeIteratorExt<T>: Iterator<Item = Outcome<T>> + Sized {
    /// Yields the success values, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::{Fault, Outcome};
    /// use faultline::extensions::OutcomeIteratorExt;
    ///
    /// let outcomes = vec![Outcome::success(1), Outcome::failure(Fault::new("E2", "t", "d")), Outcome::success(3)];
    /// assert_eq!(outcomes.into_iter().successes().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    fn successes(self) -> impl Iterator<Item = T> {
        self.map(Outcome::into_one_of).lefts()
    }

    /// Yields the faults, in order.
    fn failures(self) -> impl Iterator<Item = Fault> {
        self.map(Outcome::into_one_of).rights()
    }

    /// Projects every success value into a single outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Outcome;
    /// use faultline::extensions::OutcomeIteratorExt;
    ///
    /// let outcomes = vec![Outcome::success(1), Outcome::success(2), Outcome::success(3)];
    /// let total = outcomes.into_iter().reduce_outcomes(|values| values.into_iter().sum::<i32>());
    /// assert_eq!(total.try_success(), Ok(6));
    /// ```
    fn reduce_outcomes<U, F>(self, projection: F) -> Outcome<U>
    where
        F: FnOnce(Vec<T>) -> U,
    {
        let (values, faults) = partition_outcomes(self);
        if faults.is_empty() {
            Outcome::success(projection(values))
        } else {
            Outcome::failure(AggregateFault::new(faults))
        }
    }

    /// Projects the concatenation of every successful collection.
    fn reduce_flattened<U, V, F>(self, projection: F) -> Outcome<V>
    where
        T: IntoIterator<Item = U>,
        F: FnOnce(Vec<U>) -> V,
    {
        self.reduce_outcomes(|collections| {
            projection(collections.into_iter().flatten().collect())
        })
    }

    /// Concatenates every successful collection, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::Outcome;
    /// use faultline::extensions::OutcomeIteratorExt;
    ///
    /// let outcomes = vec![
    ///     Outcome::success(vec![1]),
    ///     Outcome::success(vec![2, 3]),
    ///     Outcome::success(vec![]),
    ///     Outcome::success(vec![4, 5, 6]),
    /// ];
    /// assert_eq!(outcomes.into_iter().flatten_outcomes().try_success(), Ok(vec![1, 2, 3, 4, 5, 6]));
    /// ```
    fn flatten_outcomes<U>(self) -> Outcome<Vec<U>>
    where
        T: IntoIterator<Item = U>,
    {
        self.reduce_flattened(|values| values)
    }
}

impl<T, I> OutcomeIteratorExt<T> for I where I: Iterator<Item = Outcome<T>> {}

fn partition_outcomes<T>(outcomes: impl Iterator<Item = Outcome<T>>) -> (Vec<T>, Vec<Fault>) {
    let mut values = Vec::new();
    let mut faults = Vec::new();
    for outcome in outcomes {
        match outcome.into_one_of() {
            OneOf::Left(value) => values.push(value),
            OneOf::Right(fault) => faults.push(fault),
        }
    }
    (values, faults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fault(code: &str) -> Fault {
        Fault::new(code, "title", "detail")
    }

    #[rstest]
    fn test_reduce_skips_projection_on_failure() {
        let outcomes = vec![Outcome::success(1), Outcome::failure(fault("E2"))];
        let reduced: Outcome<i32> = outcomes.into_iter().reduce_outcomes(|_| {
            panic!("projection must not run when a failure is present")
        });
        assert!(reduced.is_failure());
    }

    #[rstest]
    fn test_flatten_aggregates_every_failure() {
        let outcomes: Vec<Outcome<Vec<i32>>> = vec![
            Outcome::failure(fault("E1")),
            Outcome::success(vec![1]),
            Outcome::failure(fault("E3")),
        ];
        let aggregated = outcomes.into_iter().flatten_outcomes().try_failure().unwrap();
        assert_eq!(aggregated.code(), "AggregateFault");
        assert_eq!(aggregated.faults(), &[fault("E1"), fault("E3")]);
    }

    #[rstest]
    fn test_reduce_of_empty_batch_is_success() {
        let outcomes: Vec<Outcome<i32>> = Vec::new();
        let count = outcomes.into_iter().reduce_outcomes(|values| values.len());
        assert_eq!(count.try_success(), Ok(0));
    }
}
