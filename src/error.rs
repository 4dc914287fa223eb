use thiserror::Error;

/// Result type for emission operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the value-dispatch boundary.
///
/// Saturating counter imbalance (extra `dedent`/`resume` calls) is a defined
/// no-op, not an error; see the builder docs.
#[derive(Debug, Error)]
pub enum Error {
    /// A dynamic value had a shape the dispatcher does not recognize.
    ///
    /// The conversion fails before anything reaches the buffer, so a
    /// rejected value never leaves malformed partial output behind.
    #[error("unsupported value kind '{kind}'")]
    UnsupportedValue { kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_value_message_names_the_shape() {
        let err = Error::UnsupportedValue { kind: "object" };
        assert_eq!(err.to_string(), "unsupported value kind 'object'");
    }
}
