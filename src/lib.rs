//! Czech National Identifiers
//!
//! Parsing, validation and formatting of bank account numbers, birth numbers
//! (rodné číslo) and identification numbers of legal persons (IČO).
//!
//! Text is turned into a value by a [`Pattern`]; the value then reports
//! whether it is valid. A text can be well-formed and still invalid:
//!
//! ```
//! use identifiers::{BirthNumberPattern, Pattern};
//!
//! let result = BirthNumberPattern::STANDARD.parse("675914/1488");
//! let birth_number = result.value().unwrap();
//! assert!(birth_number.is_valid());
//! assert!(birth_number.belongs_to_woman());
//! assert_eq!(birth_number.month(), 9);
//!
//! let result = BirthNumberPattern::STANDARD.parse("675914/1489");
//! assert!(!result.value().unwrap().is_valid());
//! ```

pub mod domain;
pub use domain::{
    AccountNumber, AccountNumberFormat, BirthNumber, BirthNumberFormat, IdentificationNumber,
    Identifier, IdentifierKind, RangeError, UnknownFormatError,
};

pub mod pattern;
pub use pattern::{
    AccountNumberPattern, BirthNumberPattern, IdentificationNumberPattern, ParseError,
    ParseErrorKind, ParseResult, Pattern,
};

/// Configuration of the command-line tool.
pub mod config;
pub use config::Config;

pub mod legacy;
