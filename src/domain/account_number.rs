use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::{
    Identifier, IdentifierKind, RangeError, UnknownFormatError,
    checksum::{self, MODULUS},
};
use crate::pattern::{AccountNumberPattern, ParseError, Pattern};

const IDENTIFIER: &str = "account number";
const PREFIX_MAX: u64 = 999_999;
const NUMBER_MAX: u64 = 9_999_999_999;
const BANK_CODE_LENGTH: usize = 4;

/// A bank account number used in the Czech Republic.
///
/// It consists of three parts:
/// - an optional prefix of up to 6 digits,
/// - the account number proper of up to 10 digits,
/// - a 4 digit bank code.
///
/// The prefix is separated by a dash and the bank code by a slash, e.g.
/// `19-123457/0710`.
///
/// Equality and hashing consider the three parts only; the original input
/// text is kept for diagnostics.
#[derive(Debug, Clone)]
pub struct AccountNumber {
    prefix: u64,
    number: u64,
    bank_code: String,
    input: Option<String>,
}

impl AccountNumber {
    /// Creates an account number from its parts.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the prefix has more than 6 digits, the
    /// number more than 10 digits or the bank code is not exactly 4 decimal
    /// digits.
    pub fn new(prefix: u64, number: u64, bank_code: impl Into<String>) -> Result<Self, RangeError> {
        let bank_code = bank_code.into();
        RangeError::check(IDENTIFIER, "prefix", prefix, PREFIX_MAX)?;
        RangeError::check(IDENTIFIER, "number", number, NUMBER_MAX)?;
        if bank_code.len() != BANK_CODE_LENGTH || !bank_code.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(%bank_code, "bank code is not 4 digits");
            return Err(RangeError::BankCode(bank_code));
        }

        Ok(Self {
            prefix,
            number,
            bank_code,
            input: None,
        })
    }

    /// Creates an account number from parts already checked by a pattern.
    pub(crate) fn from_parsed(prefix: u64, number: u64, bank_code: &str, input: &str) -> Self {
        debug_assert!(prefix <= PREFIX_MAX && number <= NUMBER_MAX);
        debug_assert_eq!(bank_code.len(), BANK_CODE_LENGTH);
        Self {
            prefix,
            number,
            bank_code: bank_code.to_string(),
            input: Some(input.to_string()),
        }
    }

    /// Returns the prefix part, `0` when the account has no prefix.
    #[must_use]
    pub const fn prefix(&self) -> u64 {
        self.prefix
    }

    /// Returns the number part of the account.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Returns the code of the bank holding the account.
    #[must_use]
    pub fn bank_code(&self) -> &str {
        &self.bank_code
    }

    /// Returns the text this account number was parsed from, if any.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Weighted checksum of the prefix.
    #[must_use]
    pub fn prefix_checksum(&self) -> u64 {
        checksum::account_part(self.prefix)
    }

    /// Weighted checksum of the number.
    #[must_use]
    pub fn number_checksum(&self) -> u64 {
        checksum::account_part(self.number)
    }

    /// Number of digits of the number part that are not zero.
    #[must_use]
    pub fn non_zero_digit_count(&self) -> usize {
        checksum::non_zero_digits(self.number)
    }

    /// Checks whether the account number is valid.
    ///
    /// An account number is valid when
    /// - the prefix checksum is divisible by 11,
    /// - the number checksum is divisible by 11,
    /// - the number has at least two non-zero digits.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.prefix_checksum() % MODULUS == 0
            && self.number_checksum() % MODULUS == 0
            && self.non_zero_digit_count() >= 2
    }

    /// Returns a displayable representation in the given format.
    ///
    /// ```
    /// use identifiers::{AccountNumber, AccountNumberFormat};
    ///
    /// let account = AccountNumber::new(0, 12, "0100").unwrap();
    /// assert_eq!(account.display(AccountNumberFormat::Standard).to_string(), "12/0100");
    /// assert_eq!(
    ///     account.display(AccountNumberFormat::Full).to_string(),
    ///     "000000-0000000012/0100"
    /// );
    /// ```
    #[must_use]
    pub const fn display(&self, format: AccountNumberFormat) -> FormattedAccountNumber<'_> {
        FormattedAccountNumber {
            account: self,
            format,
        }
    }

    /// Formats the account number using a textual format selector.
    ///
    /// `None` selects the standard format; otherwise the selector is parsed as
    /// an [`AccountNumberFormat`].
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownFormatError`] if the selector is not supported.
    pub fn to_string_with(&self, format: Option<&str>) -> Result<String, UnknownFormatError> {
        let format = format.map_or(Ok(AccountNumberFormat::Standard), str::parse)?;
        Ok(self.display(format).to_string())
    }
}

impl PartialEq for AccountNumber {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix
            && self.number == other.number
            && self.bank_code == other.bank_code
    }
}

impl Eq for AccountNumber {}

impl Hash for AccountNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prefix.hash(state);
        self.number.hash(state);
        self.bank_code.hash(state);
    }
}

impl Identifier for AccountNumber {
    const KIND: IdentifierKind = IdentifierKind::AccountNumber;

    fn is_valid(&self) -> bool {
        Self::is_valid(self)
    }

    fn input(&self) -> Option<&str> {
        Self::input(self)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.display(AccountNumberFormat::Standard).fmt(f)
    }
}

impl FromStr for AccountNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountNumberPattern::STANDARD.parse(s).into_value()
    }
}

/// Output shapes of an account number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountNumberFormat {
    /// No leading zeros; the prefix is omitted when it is zero (`19-123457/0710`).
    #[default]
    Standard,
    /// Prefix padded to 6 digits and number padded to 10 digits, both always
    /// present (`000019-0000123457/0710`).
    Full,
}

impl FromStr for AccountNumberFormat {
    type Err = UnknownFormatError;

    /// Parses `S` (standard) or `F` (full), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("S") {
            Ok(Self::Standard)
        } else if s.eq_ignore_ascii_case("F") {
            Ok(Self::Full)
        } else {
            Err(UnknownFormatError {
                format: s.to_string(),
                identifier: IDENTIFIER,
                expected: "S, F",
            })
        }
    }
}

/// An account number bound to an output format.
///
/// Returned by [`AccountNumber::display`].
#[derive(Debug, Clone, Copy)]
pub struct FormattedAccountNumber<'a> {
    account: &'a AccountNumber,
    format: AccountNumberFormat,
}

impl fmt::Display for FormattedAccountNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let AccountNumber {
            prefix,
            number,
            bank_code,
            ..
        } = self.account;
        match self.format {
            AccountNumberFormat::Standard if *prefix == 0 => write!(f, "{number}/{bank_code}"),
            AccountNumberFormat::Standard => write!(f, "{prefix}-{number}/{bank_code}"),
            AccountNumberFormat::Full => write!(f, "{prefix:06}-{number:010}/{bank_code}"),
        }
    }
}
