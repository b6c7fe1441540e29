use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use super::{Identifier, IdentifierKind, RangeError, checksum};
use crate::pattern::{IdentificationNumberPattern, ParseError, Pattern};

const IDENTIFIER: &str = "identification number";
const NUMBER_MAX: u64 = 9_999_999;
const CHECK_DIGIT_MAX: u64 = 9;

/// Identification number of a legal person (IČO), either a company or a
/// self-employed trader.
///
/// It is written as 8 digits including leading zeros: 7 digits of the number
/// followed by a check digit, e.g. `00007064` is the number 706 with check
/// digit 4.
#[derive(Debug, Clone)]
pub struct IdentificationNumber {
    number: u32,
    check_digit: u8,
    input: Option<String>,
}

impl IdentificationNumber {
    /// Creates an identification number from the first seven digits and the
    /// check digit.
    ///
    /// The check digit does not have to be correct for the number.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the number exceeds 9 999 999 or the check
    /// digit exceeds 9.
    pub fn new(number: u32, check_digit: u8) -> Result<Self, RangeError> {
        RangeError::check(IDENTIFIER, "number", number, NUMBER_MAX)?;
        RangeError::check(IDENTIFIER, "check digit", check_digit, CHECK_DIGIT_MAX)?;
        Ok(Self {
            number,
            check_digit,
            input: None,
        })
    }

    /// Creates an identification number from parts already checked by a
    /// pattern.
    pub(crate) fn from_parsed(number: u32, check_digit: u8, input: &str) -> Self {
        Self {
            number,
            check_digit,
            input: Some(input.to_string()),
        }
    }

    /// The number formed by the first seven digits.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The check digit, i.e. the last digit.
    #[must_use]
    pub const fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// Returns the text this identification number was parsed from, if any.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// The check digit required by the checksum of the first seven digits.
    #[must_use]
    pub fn expected_check_digit(&self) -> u8 {
        checksum::identification_check_digit(checksum::identification_modulo(u64::from(
            self.number,
        )))
    }

    /// Checks whether the check digit matches the expected one.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check_digit == self.expected_check_digit()
    }
}

impl PartialEq for IdentificationNumber {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.check_digit == other.check_digit
    }
}

impl Eq for IdentificationNumber {}

impl Hash for IdentificationNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
        self.check_digit.hash(state);
    }
}

impl Identifier for IdentificationNumber {
    const KIND: IdentifierKind = IdentifierKind::IdentificationNumber;

    fn is_valid(&self) -> bool {
        Self::is_valid(self)
    }

    fn input(&self) -> Option<&str> {
        Self::input(self)
    }
}

impl fmt::Display for IdentificationNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:07}{}", self.number, self.check_digit)
    }
}

impl FromStr for IdentificationNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentificationNumberPattern::STANDARD.parse(s).into_value()
    }
}
