use thiserror::Error;

/// Errors raised when input fails a precondition check.
///
/// Each variant corresponds to one rejected input shape. The messages are
/// part of the console output and stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("num argument has to be positive number.")]
    InvalidArgument,

    #[error("No data")]
    NoData,

    #[error("List is required")]
    NotAList,

    #[error("Only number type is allowed")]
    NotNumberType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            Error::InvalidArgument.to_string(),
            "num argument has to be positive number."
        );
        assert_eq!(Error::NoData.to_string(), "No data");
        assert_eq!(Error::NotAList.to_string(), "List is required");
        assert_eq!(
            Error::NotNumberType.to_string(),
            "Only number type is allowed"
        );
    }
}
