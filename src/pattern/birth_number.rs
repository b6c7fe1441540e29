use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{ParseError, ParseResult, Pattern, digits};
use crate::domain::{BirthNumber, BirthNumberFormat, Identifier};

static SLASH_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})([0-9]{2})([0-9]{2})/([0-9]{3})([0-9])?$")
        .expect("birth number slash expression is valid")
});

static PLAIN_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})([0-9]{2})([0-9]{2})([0-9]{3})([0-9])?$")
        .expect("birth number plain expression is valid")
});

/// A [`Pattern`] for [`BirthNumber`]s.
///
/// The text has the form `YYMMDD[/]SSS[C]` where
/// - `YY` is the year within the century,
/// - `MM` is the month, plus 50 for women and possibly plus 20 (from 2004)
///   when the sequence numbers of the day are exhausted,
/// - `DD` is the day of the month,
/// - `SSS` is the sequence number within the day,
/// - `C` is the check digit, present only for numbers assigned from 1954.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthNumberPattern {
    format: BirthNumberFormat,
}

impl BirthNumberPattern {
    /// The 9 or 10 digit form with a slash between the date and the sequence,
    /// e.g. `675914/1488`.
    pub const STANDARD: Self = Self {
        format: BirthNumberFormat::Standard,
    };

    /// The 9 or 10 digit form without a slash, e.g. `6759141488`.
    pub const NUMBER: Self = Self {
        format: BirthNumberFormat::Number,
    };

    fn regex(self) -> &'static Regex {
        match self.format {
            BirthNumberFormat::Standard => &*SLASH_FORM,
            BirthNumberFormat::Number => &*PLAIN_FORM,
        }
    }

    const fn expected(self) -> &'static str {
        match self.format {
            BirthNumberFormat::Standard => "YYMMDD/SSS[C]",
            BirthNumberFormat::Number => "YYMMDDSSS[C]",
        }
    }
}

/// Reads a two digit group, which always fits a `u8`.
fn date_part(captures: &Captures<'_>, index: usize) -> u8 {
    digits::group(captures, index)
        .and_then(|part| u8::try_from(part).ok())
        .unwrap_or_default()
}

impl Pattern for BirthNumberPattern {
    type Value = BirthNumber;

    fn parse(&self, text: &str) -> ParseResult<BirthNumber> {
        let Some(captures) = self.regex().captures(text) else {
            return ParseResult::for_error(ParseError::format(
                BirthNumber::KIND,
                text,
                self.expected(),
            ));
        };

        let sequence = digits::group(&captures, 4)
            .and_then(|sequence| u16::try_from(sequence).ok())
            .unwrap_or_default();
        let check_digit = digits::group(&captures, 5).and_then(|digit| u8::try_from(digit).ok());

        ParseResult::for_value(BirthNumber::from_parsed(
            date_part(&captures, 1),
            date_part(&captures, 2),
            date_part(&captures, 3),
            sequence,
            check_digit,
            text,
        ))
    }

    fn format(&self, value: &BirthNumber) -> String {
        value.display(self.format).to_string()
    }
}
