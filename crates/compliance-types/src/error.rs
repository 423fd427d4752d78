//! Errors

use thiserror::Error;

/// Compliance types error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// String is not a member of the named enumeration
    #[error("Unknown {kind} value: `{value}`")]
    UnknownVariant {
        /// Enumeration name
        kind: &'static str,
        /// Rejected wire value
        value: String,
    },
}

impl Error {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_display() {
        let error = Error::unknown("Classification", "secret");
        assert_eq!(error.to_string(), "Unknown Classification value: `secret`");
    }
}
