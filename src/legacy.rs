//! Parsers predating the [`Pattern`](crate::pattern::Pattern) API.
//!
//! They accept the same text as the corresponding patterns but report
//! failures directly as an `Err` instead of a [`ParseResult`].
//!
//! [`ParseResult`]: crate::pattern::ParseResult

use crate::{
    domain::{AccountNumber, BirthNumber, IdentificationNumber, Identifier},
    pattern::{
        AccountNumberPattern, BirthNumberPattern, IdentificationNumberPattern, ParseError, Pattern,
    },
};

/// Parses possibly absent input into an identifier.
pub trait IdentifierParser {
    /// The identifier produced by the parser.
    type Output: Identifier;

    /// Parses the input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Missing`] if `input` is `None`, or
    /// [`ParseError::Format`] if it does not have the expected shape.
    fn parse(&self, input: Option<&str>) -> Result<Self::Output, ParseError>;
}

/// Parses account numbers in the `prefix-number/bank_code` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountNumberParser;

impl IdentifierParser for AccountNumberParser {
    type Output = AccountNumber;

    fn parse(&self, input: Option<&str>) -> Result<AccountNumber, ParseError> {
        AccountNumberPattern::STANDARD
            .parse_optional(input)
            .into_value()
    }
}

/// Parses birth numbers written as 9 or 10 plain digits.
#[deprecated(note = "use `BirthNumberPattern::NUMBER` instead")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthNumberParser;

#[allow(deprecated)]
impl IdentifierParser for BirthNumberParser {
    type Output = BirthNumber;

    fn parse(&self, input: Option<&str>) -> Result<BirthNumber, ParseError> {
        BirthNumberPattern::NUMBER.parse_optional(input).into_value()
    }
}

/// Parses 8 digit identification numbers.
#[deprecated(note = "use `IdentificationNumberPattern::STANDARD` instead")]
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentificationNumberParser;

#[allow(deprecated)]
impl IdentifierParser for IdentificationNumberParser {
    type Output = IdentificationNumber;

    fn parse(&self, input: Option<&str>) -> Result<IdentificationNumber, ParseError> {
        IdentificationNumberPattern::STANDARD
            .parse_optional(input)
            .into_value()
    }
}
