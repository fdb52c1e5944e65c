use crate::Error;

/// A strictly positive integer.
///
/// The invariant `n >= 1` is verified at construction and preserved for the
/// lifetime of the value.
///
/// # Examples
///
/// ```
/// use duet_core::{Error, Positive};
///
/// let n = Positive::new(5).unwrap();
/// assert_eq!(n.into_inner(), 5);
///
/// assert_eq!(Positive::new(0), Err(Error::InvalidArgument));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Positive(u64);

impl Positive {
    /// Constructs a new `Positive` if `value > 0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `value <= 0`.
    pub fn new(value: i64) -> Result<Self, Error> {
        u64::try_from(value)
            .ok()
            .filter(|&n| n > 0)
            .map(Self)
            .ok_or(Error::InvalidArgument)
    }

    /// Consumes the wrapper and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> u64 {
        self.0
    }

    /// Returns the next smaller positive integer, or `None` at one.
    #[must_use]
    pub fn pred(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        assert_eq!(Positive::new(1).map(Positive::into_inner), Ok(1));
        assert_eq!(Positive::new(20).unwrap().into_inner(), 20);
        assert_eq!(Positive::new(i64::MAX).unwrap().into_inner(), 9_223_372_036_854_775_807);
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert_eq!(Positive::new(0), Err(Error::InvalidArgument));
        assert_eq!(Positive::new(-1), Err(Error::InvalidArgument));
        assert_eq!(Positive::new(i64::MIN), Err(Error::InvalidArgument));
    }

    #[test]
    fn pred_stops_at_one() {
        let three = Positive::new(3).unwrap();
        let one = Positive::new(1).unwrap();
        assert_eq!(three.pred().and_then(Positive::pred), Some(one));
        assert_eq!(one.pred(), None);
    }
}
