//! Text patterns for identifiers.
//!
//! A [`Pattern`] converts between text and a strongly-typed identifier value.
//! Parsing never panics on bad input: expected failures come back as a failed
//! [`ParseResult`]. Parsing only checks the shape of the text; whether the
//! parsed value is also valid is answered by the value itself.

use std::fmt;

use crate::domain::{Identifier, IdentifierKind};

mod digits;

/// The outcome of parsing a text.
pub mod parse_result;
pub use parse_result::ParseResult;

mod account_number;
pub use account_number::AccountNumberPattern;

mod birth_number;
pub use birth_number::BirthNumberPattern;

mod identification_number;
pub use identification_number::IdentificationNumberPattern;

/// A textual pattern of an identifier, used to parse text into a value and to
/// format a value back into text.
///
/// Parsing and formatting use the same shape, although parsing may accept
/// more than formatting produces.
pub trait Pattern {
    /// The identifier produced by parsing.
    type Value: Identifier;

    /// Parses `text` into a value.
    ///
    /// A text that does not have the shape of the pattern yields a failed
    /// result with [`ParseErrorKind::Format`].
    fn parse(&self, text: &str) -> ParseResult<Self::Value>;

    /// Formats `value` according to the pattern.
    ///
    /// Formatting does not depend on the validity of the value.
    fn format(&self, value: &Self::Value) -> String;

    /// Parses text that may be absent.
    ///
    /// `None` fails with [`ParseErrorKind::ArgumentNull`] before any format
    /// check is made.
    fn parse_optional(&self, text: Option<&str>) -> ParseResult<Self::Value> {
        match text {
            Some(text) => self.parse(text),
            None => ParseResult::for_error(ParseError::Missing {
                kind: <Self::Value as Identifier>::KIND,
            }),
        }
    }

    /// Formats `value` and appends it to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to accept the text.
    fn append_format<W: fmt::Write>(&self, value: &Self::Value, sink: &mut W) -> fmt::Result {
        sink.write_str(&self.format(value))
    }
}

/// Errors that can occur while parsing an identifier from text.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// No text was supplied at all.
    #[error("No {kind} was supplied")]
    Missing {
        /// The identifier that was expected.
        kind: IdentifierKind,
    },

    /// The text does not have the shape of the pattern.
    #[error("Unable to parse {kind} '{input}': expected {expected}")]
    Format {
        /// The identifier that was expected.
        kind: IdentifierKind,
        /// The offending text.
        input: String,
        /// Description of the accepted shape.
        expected: &'static str,
    },
}

impl ParseError {
    /// Returns the category of the failure.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::Missing { .. } => ParseErrorKind::ArgumentNull,
            Self::Format { .. } => ParseErrorKind::Format,
        }
    }

    fn format(kind: IdentifierKind, input: &str, expected: &'static str) -> Self {
        tracing::debug!(%kind, input, expected, "text does not match pattern");
        Self::Format {
            kind,
            input: input.to_string(),
            expected,
        }
    }
}

/// Categories of [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input was absent; a precondition violation of the caller.
    ArgumentNull,
    /// The input did not match the expected shape.
    Format,
}
