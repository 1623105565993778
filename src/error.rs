//! Contract-violation errors.
//!
//! Domain failures travel as [`Fault`](crate::Fault) values. The only
//! operation that signals failure any other way is the explicit cast
//! (`Maybe::try_cast`, `OneOf::try_left`, `Outcome::try_success`, ...),
//! which reports misuse of the API through [`InvalidCastError`].

/// Returned when a container is cast to a payload it does not hold.
///
/// # Examples
///
/// ```rust
/// use faultline::{InvalidCastError, Maybe};
///
/// let error: InvalidCastError = Maybe::<i32>::none().try_cast().unwrap_err();
/// assert_eq!(error.state, "Maybe::None");
/// assert_eq!(error.target, "i32");
/// assert_eq!(format!("{error}"), "invalid cast: Maybe::None does not hold a value of type i32");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid cast: {state} does not hold a value of type {target}")]
pub struct InvalidCastError {
    /// The variant the container actually held.
    pub state: &'static str,
    /// The requested payload type.
    pub target: &'static str,
}

impl InvalidCastError {
    pub(crate) fn new<Target>(state: &'static str) -> Self {
        let target = std::any::type_name::<Target>();
        tracing::debug!(state, target, "rejected invalid cast");
        Self { state, target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cast_error_display() {
        let error = InvalidCastError::new::<String>("OneOf::Right");
        assert_eq!(
            format!("{error}"),
            "invalid cast: OneOf::Right does not hold a value of type alloc::string::String"
        );
    }

    #[test]
    fn test_invalid_cast_error_equality() {
        let first = InvalidCastError::new::<u8>("Maybe::None");
        let second = InvalidCastError::new::<u8>("Maybe::None");
        let third = InvalidCastError::new::<u16>("Maybe::None");
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[test]
    fn test_invalid_cast_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(InvalidCastError::new::<i32>("Outcome::Failure"));
        assert!(error.source().is_none());
    }
}
