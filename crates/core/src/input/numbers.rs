use std::{fmt, ops::Index};

use crate::{Error, Number};

/// A non-empty, ordered sequence of numbers.
///
/// The invariant `len() >= 1` is verified at construction and preserved by
/// every public operation, so [`first`](Self::first) and [`last`](Self::last)
/// never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Numbers(Vec<Number>);

impl Numbers {
    /// Constructs a sequence from any collection of numeric values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoData`] if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use duet_core::{Error, Numbers};
    ///
    /// let numbers = Numbers::new([1, 2, 3]).unwrap();
    /// assert_eq!(numbers.len(), 3);
    ///
    /// assert_eq!(Numbers::new(Vec::<i64>::new()), Err(Error::NoData));
    /// ```
    pub fn new<I>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<Number>,
    {
        let values: Vec<Number> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(Error::NoData);
        }
        Ok(Self(values))
    }

    /// Constructs a sequence holding a single value.
    #[must_use]
    pub fn singleton(value: Number) -> Self {
        Self(vec![value])
    }

    /// Appends a value to the end of the sequence.
    pub fn push(&mut self, value: Number) {
        self.0.push(value);
    }

    /// Returns the number of elements, always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Number {
        self.0[0]
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Number {
        self.0[self.0.len() - 1]
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Number] {
        &self.0
    }
}

impl Index<usize> for Numbers {
    type Output = Number;

    fn index(&self, index: usize) -> &Number {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Numbers {
    type Item = &'a Number;
    type IntoIter = std::slice::Iter<'a, Number>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders as a bracketed, comma-separated list: `[1, 3, 6]`.
impl fmt::Display for Numbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
