/// Error returned when a value type is constructed from fields outside of
/// their allowed ranges.
///
/// This signals a programming error in the caller rather than bad user input;
/// untrusted text should go through a [`Pattern`](crate::pattern::Pattern)
/// instead.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RangeError {
    /// A numeric field is larger than its upper limit.
    #[error("{field} of {identifier} must be from 0 to {max}, but was {value}")]
    OutOfRange {
        /// The identifier being constructed.
        identifier: &'static str,
        /// The offending field.
        field: &'static str,
        /// The largest allowed value.
        max: u64,
        /// The value that was supplied.
        value: u64,
    },

    /// The bank code is not exactly four decimal digits.
    #[error("bank code must be exactly 4 decimal digits, but was '{0}'")]
    BankCode(String),
}

impl RangeError {
    /// Checks that `value` does not exceed `max`.
    pub(crate) fn check(
        identifier: &'static str,
        field: &'static str,
        value: impl Into<u64>,
        max: u64,
    ) -> Result<(), Self> {
        let value = value.into();
        if value > max {
            tracing::debug!(identifier, field, value, max, "field out of range");
            return Err(Self::OutOfRange {
                identifier,
                field,
                max,
                value,
            });
        }
        Ok(())
    }
}

/// Error returned when a format selector is not recognised.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Format '{format}' is not valid for {identifier}, expected one of: {expected}")]
pub struct UnknownFormatError {
    pub(crate) format: String,
    pub(crate) identifier: &'static str,
    pub(crate) expected: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_upper_limit() {
        assert_eq!(RangeError::check("birth number", "sequence", 999u16, 999), Ok(()));
    }

    #[test]
    fn check_rejects_values_above_limit() {
        let error = RangeError::check("birth number", "sequence", 1000u16, 999).unwrap_err();
        assert_eq!(
            error.to_string(),
            "sequence of birth number must be from 0 to 999, but was 1000"
        );
    }

    #[test]
    fn unknown_format_display() {
        let error = UnknownFormatError {
            format: "X".to_string(),
            identifier: "account number",
            expected: "S, F",
        };
        assert_eq!(
            error.to_string(),
            "Format 'X' is not valid for account number, expected one of: S, F"
        );
    }
}
