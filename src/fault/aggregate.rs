//! Faults merged from a batch of independent failures.

use super::Fault;
use crate::error::InvalidCastError;

const AGGREGATE_CODE: &str = "AggregateFault";
const AGGREGATE_TITLE: &str = "Aggregate errors";

/// An ordered collection of faults presented as a single fault.
///
/// The derived `code` is `"AggregateFault"`, the `title` is
/// `"Aggregate errors"` and the `detail` lists every contained fault, one
/// per line, in insertion order.
///
/// # Examples
///
/// ```rust
/// use faultline::{AggregateFault, Fault};
///
/// let aggregate = AggregateFault::new([
///     Fault::new("E2", "Second", "second failed"),
///     Fault::new("E4", "Fourth", "fourth failed"),
/// ]);
/// assert_eq!(aggregate.len(), 2);
/// assert_eq!(
///     aggregate.detail(),
///     "[E2] Second: second failed\n[E4] Fourth: fourth failed"
/// );
///
/// let fault = Fault::from(aggregate);
/// assert!(fault.is_aggregate());
/// assert_eq!(fault.faults()[1].code(), "E4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateFault {
    faults: Vec<Fault>,
}

impl AggregateFault {
    /// Collects `faults`, preserving their order.
    pub fn new(faults: impl IntoIterator<Item = Fault>) -> Self {
        let faults: Vec<Fault> = faults.into_iter().collect();
        tracing::debug!(count = faults.len(), "aggregating faults");
        Self { faults }
    }

    /// The contained faults in insertion order.
    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }

    /// The number of contained faults.
    pub fn len(&self) -> usize {
        self.faults.len()
    }

    /// Returns `true` if no faults were collected.
    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }

    /// Always `"AggregateFault"`.
    pub const fn code(&self) -> &'static str {
        AGGREGATE_CODE
    }

    /// Always `"Aggregate errors"`.
    pub const fn title(&self) -> &'static str {
        AGGREGATE_TITLE
    }

    /// Every contained fault rendered on its own line.
    pub fn detail(&self) -> String {
        self.faults
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Consumes the aggregate, returning the contained faults.
    pub fn into_faults(self) -> Vec<Fault> {
        self.faults
    }
}

impl From<AggregateFault> for Fault {
    fn from(aggregate: AggregateFault) -> Self {
        let detail = aggregate.detail();
        Self::aggregate(
            AGGREGATE_CODE.to_string(),
            AGGREGATE_TITLE.to_string(),
            detail,
            aggregate.faults,
        )
    }
}

impl TryFrom<Fault> for AggregateFault {
    type Error = InvalidCastError;

    fn try_from(fault: Fault) -> Result<Self, Self::Error> {
        if fault.is_aggregate() {
            Ok(Self {
                faults: fault.into_faults(),
            })
        } else {
            Err(InvalidCastError::new::<Self>("Fault"))
        }
    }
}

impl FromIterator<Fault> for AggregateFault {
    fn from_iter<I: IntoIterator<Item = Fault>>(iterator: I) -> Self {
        Self::new(iterator)
    }
}
