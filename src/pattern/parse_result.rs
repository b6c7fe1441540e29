use super::ParseError;

/// The result of an attempt to parse a text into a value.
///
/// Callers that need to inspect a failure without error propagation check
/// [`ParseResult::is_success`] first. Callers that skip the check get the
/// original failure back when they access the value, through
/// [`ParseResult::value`] or [`ParseResult::into_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ParseResult<T> {
    outcome: Result<T, ParseError>,
}

impl<T> ParseResult<T> {
    /// Creates a successful result.
    pub const fn for_value(value: T) -> Self {
        Self { outcome: Ok(value) }
    }

    /// Creates a failed result.
    pub const fn for_error(error: ParseError) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    /// Whether parsing succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns the parsed value, or the failure that prevented parsing.
    ///
    /// # Errors
    ///
    /// Returns the original [`ParseError`] if parsing failed.
    pub fn value(&self) -> Result<&T, ParseError> {
        self.outcome.as_ref().map_err(Clone::clone)
    }

    /// Returns the failure, or `None` if parsing succeeded.
    #[must_use]
    pub const fn error(&self) -> Option<&ParseError> {
        match &self.outcome {
            Ok(_) => None,
            Err(error) => Some(error),
        }
    }

    /// Consumes the result, returning the value or the original failure.
    ///
    /// # Errors
    ///
    /// Returns the original [`ParseError`] if parsing failed.
    pub fn into_value(self) -> Result<T, ParseError> {
        self.outcome
    }

    /// Maps the parsed value, keeping any failure.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        ParseResult {
            outcome: self.outcome.map(f),
        }
    }
}

impl<T> From<ParseResult<T>> for Result<T, ParseError> {
    fn from(result: ParseResult<T>) -> Self {
        result.into_value()
    }
}

impl<T> From<Result<T, ParseError>> for ParseResult<T> {
    fn from(outcome: Result<T, ParseError>) -> Self {
        Self { outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdentifierKind;

    fn failure() -> ParseError {
        ParseError::Format {
            kind: IdentifierKind::BirthNumber,
            input: "123456".to_string(),
            expected: "YYMMDD/SSS[C]",
        }
    }

    #[test]
    fn success_exposes_value() {
        let result = ParseResult::for_value(42);
        assert!(result.is_success());
        assert_eq!(result.value(), Ok(&42));
        assert_eq!(result.error(), None);
        assert_eq!(result.into_value(), Ok(42));
    }

    #[test]
    fn failure_reraises_on_every_access() {
        let result = ParseResult::<u32>::for_error(failure());
        assert!(!result.is_success());
        assert_eq!(result.value(), Err(failure()));
        assert_eq!(result.value(), Err(failure()));
        assert_eq!(result.error(), Some(&failure()));
        assert_eq!(result.into_value(), Err(failure()));
    }

    #[test]
    fn map_keeps_failure() {
        let mapped = ParseResult::<u32>::for_error(failure()).map(|value| value + 1);
        assert_eq!(mapped.error(), Some(&failure()));

        let mapped = ParseResult::for_value(1).map(|value| value + 1);
        assert_eq!(mapped.into_value(), Ok(2));
    }

    #[test]
    fn converts_to_and_from_result() {
        let result: Result<u32, ParseError> = ParseResult::for_value(7).into();
        assert_eq!(result, Ok(7));

        let result: ParseResult<u32> = Err(failure()).into();
        assert!(!result.is_success());
    }
}
