use std::sync::LazyLock;

use regex::Regex;

use super::{ParseError, ParseResult, Pattern, digits};
use crate::domain::{AccountNumber, AccountNumberFormat, Identifier};

/// Standard form of an account number: `[prefix-]number/bank_code`.
///
/// Decree no. 169/2011 of the Czech National Bank only requires the prefix to
/// be "clearly separated"; a dash is what everyone uses. A bare leading dash
/// with no prefix digits is tolerated.
static STANDARD_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([0-9]{1,6})-|-?)([0-9]{2,10})/([0-9]{4})$")
        .expect("account number expression is valid")
});

const EXPECTED: &str = "prefix-number/bank_code, e.g. 19-123457/0710";

/// A [`Pattern`] for [`AccountNumber`]s.
///
/// Both patterns accept the same input (with or without leading zeros); they
/// differ only in how they format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountNumberPattern {
    format: AccountNumberFormat,
}

impl AccountNumberPattern {
    /// Formats without leading zeros, omitting a zero prefix (`19-123457/0710`).
    pub const STANDARD: Self = Self {
        format: AccountNumberFormat::Standard,
    };

    /// Formats with the prefix padded to 6 digits and the number padded to 10
    /// digits (`000019-0000123457/0710`).
    pub const FULL: Self = Self {
        format: AccountNumberFormat::Full,
    };
}

impl Pattern for AccountNumberPattern {
    type Value = AccountNumber;

    fn parse(&self, text: &str) -> ParseResult<AccountNumber> {
        let Some(captures) = STANDARD_FORM.captures(text) else {
            return ParseResult::for_error(ParseError::format(
                AccountNumber::KIND,
                text,
                EXPECTED,
            ));
        };

        let prefix = digits::group(&captures, 2).unwrap_or_default();
        let number = digits::group(&captures, 3).unwrap_or_default();
        let bank_code = captures.get(4).map_or("", |group| group.as_str());

        ParseResult::for_value(AccountNumber::from_parsed(prefix, number, bank_code, text))
    }

    fn format(&self, value: &AccountNumber) -> String {
        value.display(self.format).to_string()
    }
}
