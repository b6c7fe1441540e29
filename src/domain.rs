//! Domain models for Czech identifiers.
//!
//! This module contains the immutable value types (bank account numbers,
//! birth numbers and identification numbers of legal persons), the checksum
//! arithmetic they are validated with, and the errors raised when a value is
//! constructed from out-of-range fields.

use std::fmt;

use serde::Serialize;

/// Weighted modulo-11 checksums shared by the identifiers.
pub mod checksum;

/// Czech bank account numbers.
pub mod account_number;
pub use account_number::{AccountNumber, AccountNumberFormat};

/// Czech birth numbers (rodné číslo).
pub mod birth_number;
pub use birth_number::{BirthNumber, BirthNumberFormat};

/// Identification numbers of legal persons (IČO).
pub mod identification_number;
pub use identification_number::IdentificationNumber;

mod error;
pub use error::{RangeError, UnknownFormatError};

/// The kinds of identifier understood by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierKind {
    /// A bank account number, e.g. `19-123457/0710`.
    AccountNumber,
    /// A birth number, e.g. `675914/1488`.
    BirthNumber,
    /// An identification number of a legal person, e.g. `00007064`.
    IdentificationNumber,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::AccountNumber => "account number",
            Self::BirthNumber => "birth number",
            Self::IdentificationNumber => "identification number",
        };
        f.write_str(name)
    }
}

/// Contract shared by every identifier value type.
///
/// A value is always structurally well-formed once constructed; whether it is
/// also logically valid (checksums, calendar dates) is answered by
/// [`Identifier::is_valid`].
pub trait Identifier {
    /// The kind of identifier this type represents.
    const KIND: IdentifierKind;

    /// Whether the identifier satisfies all of its numeric invariants.
    fn is_valid(&self) -> bool;

    /// The text the value was parsed from, if it was parsed at all.
    fn input(&self) -> Option<&str>;
}
