//! Identifier kinds accepted on the command line and the reports printed
//! for them.

use identifiers::{
    AccountNumber, BirthNumber, Config, IdentificationNumber, IdentifierKind, ParseError,
};
use serde::Serialize;

/// The kind of identifier given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    /// Bank account number, e.g. 19-123457/0710
    #[value(alias = "acc")]
    Account,
    /// Birth number, e.g. 675914/1488 or 6759141488
    #[value(alias = "rc")]
    BirthNumber,
    /// Identification number of a legal person, e.g. 00007064
    #[value(alias = "ic")]
    Ico,
}

impl Kind {
    pub const fn identifier_kind(self) -> IdentifierKind {
        match self {
            Self::Account => IdentifierKind::AccountNumber,
            Self::BirthNumber => IdentifierKind::BirthNumber,
            Self::Ico => IdentifierKind::IdentificationNumber,
        }
    }

    pub fn parse(self, text: &str) -> Result<Parsed, ParseError> {
        match self {
            Self::Account => text.parse().map(Parsed::Account),
            Self::BirthNumber => text.parse().map(Parsed::BirthNumber),
            Self::Ico => text.parse().map(Parsed::Ico),
        }
    }
}

/// A successfully parsed identifier of any kind.
#[derive(Debug, Clone)]
pub enum Parsed {
    Account(AccountNumber),
    BirthNumber(BirthNumber),
    Ico(IdentificationNumber),
}

impl Parsed {
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Account(account) => account.is_valid(),
            Self::BirthNumber(birth_number) => birth_number.is_valid(),
            Self::Ico(number) => number.is_valid(),
        }
    }

    /// Formats the identifier in the format chosen by the configuration.
    pub fn formatted(&self, config: &Config) -> String {
        match self {
            Self::Account(account) => account.display(config.account_format()).to_string(),
            Self::BirthNumber(birth_number) => birth_number
                .display(config.birth_number_format())
                .to_string(),
            Self::Ico(number) => number.to_string(),
        }
    }

    /// Formats the identifier using an explicit format selector.
    pub fn formatted_with(&self, selector: &str) -> anyhow::Result<String> {
        let text = match self {
            Self::Account(account) => account.to_string_with(Some(selector))?,
            Self::BirthNumber(birth_number) => birth_number.to_string_with(Some(selector))?,
            Self::Ico(number) if selector.eq_ignore_ascii_case("S") => number.to_string(),
            Self::Ico(_) => anyhow::bail!(
                "Format '{selector}' is not valid for identification number, expected one of: S"
            ),
        };
        Ok(text)
    }

    /// Derived fields, in display order.
    pub fn details(&self) -> Vec<Detail> {
        match self {
            Self::Account(account) => vec![
                Detail::new("prefix", account.prefix()),
                Detail::new("number", account.number()),
                Detail::new("bank code", account.bank_code()),
                Detail::new("prefix checksum", account.prefix_checksum()),
                Detail::new("number checksum", account.number_checksum()),
                Detail::new("non-zero digits", account.non_zero_digit_count()),
            ],
            Self::BirthNumber(birth_number) => {
                let sex = if birth_number.belongs_to_woman() {
                    "female"
                } else {
                    "male"
                };
                let date_of_birth = birth_number
                    .date_of_birth()
                    .map_or_else(|| "-".to_string(), |date| date.to_string());
                let scheme = if birth_number.is_after_1954() {
                    "10 digits (from 1954)"
                } else {
                    "9 digits (before 1954)"
                };
                vec![
                    Detail::new("date of birth", date_of_birth),
                    Detail::new("year", birth_number.year()),
                    Detail::new("month", birth_number.month()),
                    Detail::new("day", birth_number.day()),
                    Detail::new("sex", sex),
                    Detail::new("sequence", birth_number.sequence()),
                    Detail::new("scheme", scheme),
                    Detail::new("check digit", optional(birth_number.check_digit())),
                    Detail::new(
                        "expected check digit",
                        optional(birth_number.expected_check_digit()),
                    ),
                ]
            }
            Self::Ico(number) => vec![
                Detail::new("number", number.number()),
                Detail::new("check digit", number.check_digit()),
                Detail::new("expected check digit", number.expected_check_digit()),
            ],
        }
    }
}

fn optional(value: Option<u8>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

/// A named derived field of an identifier.
#[derive(Debug, Clone, Serialize)]
pub struct Detail {
    pub name: &'static str,
    pub value: String,
}

impl Detail {
    fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Invalid,
    Unparseable,
}

/// The outcome of checking a single input.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: String,
    pub kind: IdentifierKind,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Detail>,
}

impl Report {
    pub fn new(kind: Kind, input: &str, config: &Config, with_details: bool) -> Self {
        match kind.parse(input) {
            Ok(parsed) => {
                let status = if parsed.is_valid() {
                    Status::Valid
                } else {
                    Status::Invalid
                };
                tracing::info!(input, ?status, "checked identifier");
                Self {
                    input: input.to_string(),
                    kind: kind.identifier_kind(),
                    status,
                    formatted: Some(parsed.formatted(config)),
                    error: None,
                    details: if with_details {
                        parsed.details()
                    } else {
                        Vec::new()
                    },
                }
            }
            Err(error) => Self {
                input: input.to_string(),
                kind: kind.identifier_kind(),
                status: Status::Unparseable,
                formatted: None,
                error: Some(error.to_string()),
                details: Vec::new(),
            },
        }
    }
}
