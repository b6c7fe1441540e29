use std::sync::LazyLock;

use regex::Regex;

use super::{ParseError, ParseResult, Pattern, digits};
use crate::domain::{IdentificationNumber, Identifier};

static STANDARD_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{7})([0-9])$").expect("identification number expression is valid")
});

/// A [`Pattern`] for [`IdentificationNumber`]s: exactly 8 digits including
/// leading zeros.
///
/// - `00007064` is the number 706 with check digit 4
/// - `69663963` is the number 6966396 with check digit 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentificationNumberPattern {
    _private: (),
}

impl IdentificationNumberPattern {
    /// The standard 8 digit pattern.
    pub const STANDARD: Self = Self { _private: () };
}

impl Pattern for IdentificationNumberPattern {
    type Value = IdentificationNumber;

    fn parse(&self, text: &str) -> ParseResult<IdentificationNumber> {
        let Some(captures) = STANDARD_FORM.captures(text) else {
            return ParseResult::for_error(ParseError::format(
                IdentificationNumber::KIND,
                text,
                "8 digits (DDDDDDDC)",
            ));
        };

        let number = digits::group(&captures, 1)
            .and_then(|number| u32::try_from(number).ok())
            .unwrap_or_default();
        let check_digit = digits::group(&captures, 2)
            .and_then(|digit| u8::try_from(digit).ok())
            .unwrap_or_default();

        ParseResult::for_value(IdentificationNumber::from_parsed(number, check_digit, text))
    }

    fn format(&self, value: &IdentificationNumber) -> String {
        value.to_string()
    }
}
