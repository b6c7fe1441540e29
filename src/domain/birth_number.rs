use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Identifier, IdentifierKind, RangeError, UnknownFormatError, checksum};
use crate::pattern::{BirthNumberPattern, ParseError, Pattern};

const IDENTIFIER: &str = "birth number";
const DATE_PART_MAX: u64 = 99;
const SEQUENCE_MAX: u64 = 999;
const CHECK_DIGIT_MAX: u64 = 9;

/// Two digit years below this are in the later of the two possible centuries.
const CENTURY_THRESHOLD: u8 = 54;

/// Added to the month part of birth numbers assigned to women.
///
/// See law no. 133/2000 Coll., § 13 (5).
pub const WOMAN_MONTH_SHIFT: u8 = 50;

/// Added to the month part when all sequence numbers of a day are used up.
///
/// Only applies from 2004 onwards, see law no. 133/2000 Coll., § 13 (5).
pub const EXHAUSTION_MONTH_SHIFT: u8 = 20;

/// First year in which the exhaustion shift may be used.
const EXHAUSTION_SINCE: i32 = 2004;

/// A birth number (rodné číslo) assigned to every person born in the Czech
/// Republic.
///
/// It consists of a date of birth (`YYMMDD`), a three digit sequence number
/// and, for numbers assigned from 1954 onwards, a check digit. Examples:
///
/// - `675914/1488`: a woman born 1967-09-14 with sequence 148 and check digit 8
/// - `350105/321`: a man born 1935-01-05 with sequence 321
///
/// The month part carries the sex of the holder (women have 50 added) and,
/// from 2004, a possible exhaustion shift of 20. Decoding is permissive: a
/// month part that decodes outside `1..=12` is kept and simply makes the
/// number invalid.
#[derive(Debug, Clone)]
pub struct BirthNumber {
    year_part: u8,
    month_part: u8,
    day_part: u8,
    sequence: u16,
    check_digit: Option<u8>,
    input: Option<String>,
}

impl BirthNumber {
    /// Creates a birth number from its parts.
    ///
    /// `check_digit` must be `None` for numbers assigned before 1954.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if a date part exceeds 99, the sequence
    /// exceeds 999 or the check digit exceeds 9.
    pub fn new(
        year_part: u8,
        month_part: u8,
        day_part: u8,
        sequence: u16,
        check_digit: Option<u8>,
    ) -> Result<Self, RangeError> {
        RangeError::check(IDENTIFIER, "year part", year_part, DATE_PART_MAX)?;
        RangeError::check(IDENTIFIER, "month part", month_part, DATE_PART_MAX)?;
        RangeError::check(IDENTIFIER, "day part", day_part, DATE_PART_MAX)?;
        RangeError::check(IDENTIFIER, "sequence", sequence, SEQUENCE_MAX)?;
        if let Some(check_digit) = check_digit {
            RangeError::check(IDENTIFIER, "check digit", check_digit, CHECK_DIGIT_MAX)?;
        }

        Ok(Self {
            year_part,
            month_part,
            day_part,
            sequence,
            check_digit,
            input: None,
        })
    }

    /// Creates a birth number from parts already checked by a pattern.
    pub(crate) fn from_parsed(
        year_part: u8,
        month_part: u8,
        day_part: u8,
        sequence: u16,
        check_digit: Option<u8>,
        input: &str,
    ) -> Self {
        Self {
            year_part,
            month_part,
            day_part,
            sequence,
            check_digit,
            input: Some(input.to_string()),
        }
    }

    /// The two digit year, as written.
    #[must_use]
    pub const fn year_part(&self) -> u8 {
        self.year_part
    }

    /// The month part, as written (including any shifts).
    #[must_use]
    pub const fn month_part(&self) -> u8 {
        self.month_part
    }

    /// The day part, as written.
    #[must_use]
    pub const fn day_part(&self) -> u8 {
        self.day_part
    }

    /// The sequence number within the day.
    #[must_use]
    pub const fn sequence(&self) -> u16 {
        self.sequence
    }

    /// The check digit, `None` for numbers assigned before 1954.
    #[must_use]
    pub const fn check_digit(&self) -> Option<u8> {
        self.check_digit
    }

    /// Returns the text this birth number was parsed from, if any.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Whether the number uses the 10 digit scheme introduced in 1954.
    #[must_use]
    pub const fn is_after_1954(&self) -> bool {
        self.check_digit.is_some()
    }

    /// Whether the number belongs to a woman.
    #[must_use]
    pub const fn belongs_to_woman(&self) -> bool {
        self.month_part > WOMAN_MONTH_SHIFT
    }

    /// The four digit year of birth.
    ///
    /// The century is derived from the presence of the check digit: numbers
    /// with a check digit fall in 1954–2053, numbers without one in
    /// 1854–1953.
    #[must_use]
    pub fn year(&self) -> i32 {
        let century = match (self.is_after_1954(), self.year_part < CENTURY_THRESHOLD) {
            (true, true) => 2000,
            (true, false) | (false, true) => 1900,
            (false, false) => 1800,
        };
        century + i32::from(self.year_part)
    }

    /// The month of birth with the woman and exhaustion shifts removed.
    ///
    /// The result is outside `1..=12` when the month part is not a valid
    /// encoding.
    #[must_use]
    pub fn month(&self) -> u8 {
        let mut month = self.month_part;
        if self.belongs_to_woman() {
            month -= WOMAN_MONTH_SHIFT;
        }
        if self.year() >= EXHAUSTION_SINCE && month > EXHAUSTION_MONTH_SHIFT {
            month -= EXHAUSTION_MONTH_SHIFT;
        }
        month
    }

    /// The day of birth.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day_part
    }

    /// The date of birth, or `None` if the date parts do not form a real
    /// calendar date.
    #[must_use]
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.year(),
            u32::from(self.month()),
            u32::from(self.day_part),
        )
    }

    /// The check digit the number should have, `None` before 1954.
    #[must_use]
    pub fn expected_check_digit(&self) -> Option<u8> {
        self.is_after_1954().then(|| {
            checksum::birth_number_check_digit(
                self.year_part,
                self.month_part,
                self.day_part,
                self.sequence,
            )
        })
    }

    /// Checks whether the birth number is valid.
    ///
    /// The date of birth must exist and, from 1954, the check digit must match
    /// the expected one.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.date_of_birth().is_some() && self.expected_check_digit() == self.check_digit
    }

    /// Returns a displayable representation in the given format.
    ///
    /// ```
    /// use identifiers::{BirthNumber, BirthNumberFormat};
    ///
    /// let birth_number = BirthNumber::new(67, 59, 14, 148, Some(8)).unwrap();
    /// assert_eq!(birth_number.display(BirthNumberFormat::Standard).to_string(), "675914/1488");
    /// assert_eq!(birth_number.display(BirthNumberFormat::Number).to_string(), "6759141488");
    /// ```
    #[must_use]
    pub const fn display(&self, format: BirthNumberFormat) -> FormattedBirthNumber<'_> {
        FormattedBirthNumber {
            birth_number: self,
            format,
        }
    }

    /// Formats the birth number using a textual format selector.
    ///
    /// `None` selects the standard (slash) format.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownFormatError`] if the selector is not supported.
    pub fn to_string_with(&self, format: Option<&str>) -> Result<String, UnknownFormatError> {
        let format = format.map_or(Ok(BirthNumberFormat::Standard), str::parse)?;
        Ok(self.display(format).to_string())
    }
}

impl PartialEq for BirthNumber {
    fn eq(&self, other: &Self) -> bool {
        self.year_part == other.year_part
            && self.month_part == other.month_part
            && self.day_part == other.day_part
            && self.sequence == other.sequence
            && self.check_digit == other.check_digit
    }
}

impl Eq for BirthNumber {}

impl Hash for BirthNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.year_part.hash(state);
        self.month_part.hash(state);
        self.day_part.hash(state);
        self.sequence.hash(state);
        self.check_digit.hash(state);
    }
}

impl Identifier for BirthNumber {
    const KIND: IdentifierKind = IdentifierKind::BirthNumber;

    fn is_valid(&self) -> bool {
        Self::is_valid(self)
    }

    fn input(&self) -> Option<&str> {
        Self::input(self)
    }
}

impl fmt::Display for BirthNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.display(BirthNumberFormat::Standard).fmt(f)
    }
}

impl FromStr for BirthNumber {
    type Err = ParseError;

    /// Parses either the slash form (`YYMMDD/SSS[C]`) or the plain form
    /// (`YYMMDDSSS[C]`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = if s.contains('/') {
            BirthNumberPattern::STANDARD
        } else {
            BirthNumberPattern::NUMBER
        };
        pattern.parse(s).into_value()
    }
}

/// Output shapes of a birth number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BirthNumberFormat {
    /// Slash between the date and the sequence (`675914/1488`).
    #[default]
    Standard,
    /// Plain digits including leading zeros (`6759141488`).
    Number,
}

impl FromStr for BirthNumberFormat {
    type Err = UnknownFormatError;

    /// Parses `S` (standard) or `N` (number), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("S") {
            Ok(Self::Standard)
        } else if s.eq_ignore_ascii_case("N") {
            Ok(Self::Number)
        } else {
            Err(UnknownFormatError {
                format: s.to_string(),
                identifier: IDENTIFIER,
                expected: "S, N",
            })
        }
    }
}

/// A birth number bound to an output format.
///
/// Returned by [`BirthNumber::display`].
#[derive(Debug, Clone, Copy)]
pub struct FormattedBirthNumber<'a> {
    birth_number: &'a BirthNumber,
    format: BirthNumberFormat,
}

impl fmt::Display for FormattedBirthNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let BirthNumber {
            year_part,
            month_part,
            day_part,
            sequence,
            check_digit,
            ..
        } = self.birth_number;
        let separator = match self.format {
            BirthNumberFormat::Standard => "/",
            BirthNumberFormat::Number => "",
        };
        write!(f, "{year_part:02}{month_part:02}{day_part:02}{separator}{sequence:03}")?;
        if let Some(check_digit) = check_digit {
            write!(f, "{check_digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use test_case::test_case;

    use super::*;

    fn birth_number(year: u8, month: u8, day: u8, check_digit: Option<u8>) -> BirthNumber {
        BirthNumber::new(year, month, day, 0, check_digit).unwrap()
    }

    #[test_case(0, 0, 0)]
    #[test_case(99, 99, 99)]
    fn accepts_0_to_99_in_date_parts(year: u8, month: u8, day: u8) {
        assert!(BirthNumber::new(year, month, day, 0, None).is_ok());
    }

    #[test_case(100, 0, 0, "year part")]
    #[test_case(0, 100, 0, "month part")]
    #[test_case(0, 0, 100, "day part")]
    fn rejects_date_parts_above_99(year: u8, month: u8, day: u8, expected_field: &str) {
        let error = BirthNumber::new(year, month, day, 0, None).unwrap_err();
        assert!(
            matches!(error, RangeError::OutOfRange { field, value: 100, .. } if field == expected_field)
        );
    }

    #[test_case(0)]
    #[test_case(999)]
    fn accepts_0_to_999_in_sequence(sequence: u16) {
        assert!(BirthNumber::new(0, 0, 0, sequence, None).is_ok());
    }

    #[test]
    fn rejects_sequence_above_999() {
        assert!(BirthNumber::new(0, 0, 0, 1000, None).is_err());
    }

    #[test_case(None)]
    #[test_case(Some(0))]
    #[test_case(Some(9))]
    fn accepts_missing_or_single_digit_check_digit(check_digit: Option<u8>) {
        assert!(BirthNumber::new(0, 0, 0, 0, check_digit).is_ok());
    }

    #[test]
    fn rejects_check_digit_above_9() {
        assert!(BirthNumber::new(0, 0, 0, 0, Some(10)).is_err());
    }

    #[test_case(1, 1)]
    #[test_case(5, 5)]
    #[test_case(12, 12)]
    #[test_case(51, 1)]
    #[test_case(57, 7)]
    #[test_case(62, 12)]
    fn month_part_is_shifted_by_50_for_women(month_part: u8, expected: u32) {
        let date = birth_number(0, month_part, 1, Some(0)).date_of_birth().unwrap();
        assert_eq!(date.month(), expected);
    }

    #[test_case(21, 1)]
    #[test_case(29, 9)]
    #[test_case(32, 12)]
    #[test_case(71, 1)]
    #[test_case(74, 4)]
    #[test_case(82, 12)]
    fn month_part_is_shifted_by_20_when_exhausted_from_2004(month_part: u8, expected: u32) {
        let date = birth_number(4, month_part, 1, Some(0)).date_of_birth().unwrap();
        assert_eq!(date.month(), expected);
    }

    fn invalid_month_parts(year_part: u8) -> Vec<u8> {
        let after_2003 = (0..=99).filter(|m| {
            !((1..=12).contains(m)
                || (21..=32).contains(m)
                || (51..=62).contains(m)
                || (71..=82).contains(m))
        });
        let before_2004 =
            (0..=99).filter(|m| !((1..=12).contains(m) || (51..=62).contains(m)));
        if year_part < 4 {
            before_2004.collect()
        } else {
            after_2003.collect()
        }
    }

    #[test_case(17; "after 2003")]
    #[test_case(1; "before 2004")]
    fn invalid_month_part_has_no_date_of_birth(year_part: u8) {
        for month_part in invalid_month_parts(year_part) {
            let birth_number = birth_number(year_part, month_part, 1, Some(0));
            assert_eq!(birth_number.date_of_birth(), None, "month part {month_part}");
            assert!(!(1..=12).contains(&birth_number.month()), "month part {month_part}");
        }
    }

    #[test_case(17; "after 2003")]
    #[test_case(1; "before 2004")]
    fn valid_month_part_decodes_into_1_to_12(year_part: u8) {
        let invalid = invalid_month_parts(year_part);
        for month_part in (0..=99).filter(|m| !invalid.contains(m)) {
            let date = birth_number(year_part, month_part, 1, Some(0))
                .date_of_birth()
                .unwrap();
            assert!((1..=12).contains(&date.month()), "month part {month_part}");
        }
    }

    #[test]
    fn month_part_between_33_and_50_stays_out_of_range() {
        let birth_number = birth_number(17, 45, 1, Some(0));
        assert_eq!(birth_number.month(), 25);
        assert!(!birth_number.is_valid());
    }

    #[test_case(54, None, 1854)]
    #[test_case(99, None, 1899)]
    #[test_case(0, None, 1900)]
    #[test_case(53, None, 1953)]
    #[test_case(54, Some(0), 1954)]
    #[test_case(99, Some(0), 1999)]
    #[test_case(0, Some(0), 2000)]
    #[test_case(17, Some(0), 2017)]
    #[test_case(53, Some(0), 2053)]
    fn year_is_accurately_determined(year_part: u8, check_digit: Option<u8>, expected: i32) {
        let birth_number = birth_number(year_part, 1, 1, check_digit);
        assert_eq!(birth_number.year(), expected);
        assert_eq!(birth_number.date_of_birth().unwrap().year(), expected);
    }

    #[test]
    fn years_cover_1854_to_2053_without_overlap() {
        let mut years: Vec<i32> = (0..=99)
            .flat_map(|year_part| {
                [None, Some(1)]
                    .into_iter()
                    .map(move |check_digit| birth_number(year_part, 1, 1, check_digit).year())
            })
            .collect();
        years.sort_unstable();
        assert_eq!(years, (1854..2054).collect::<Vec<_>>());
    }

    #[test]
    fn year_1954_requires_a_check_digit() {
        assert_eq!(birth_number(54, 1, 1, Some(0)).year(), 1954);
        assert_eq!(birth_number(54, 1, 1, None).year(), 1854);
        assert_eq!(birth_number(53, 1, 1, None).year(), 1953);
        assert_eq!(birth_number(53, 1, 1, Some(0)).year(), 2053);
    }

    #[test_case(54, 1, 1, 1, 0)]
    #[test_case(65, 3, 19, 264, 1)]
    #[test_case(95, 59, 12, 190, 2)]
    #[test_case(67, 59, 14, 148, 8)]
    #[test_case(78, 1, 23, 354, 0)]
    fn expected_check_digit_is_number_modulo_11(
        year: u8,
        month: u8,
        day: u8,
        sequence: u16,
        expected: u8,
    ) {
        let birth_number = BirthNumber::new(year, month, day, sequence, Some(5)).unwrap();
        assert_eq!(birth_number.expected_check_digit(), Some(expected));
    }

    #[test_case(50)]
    #[test_case(53)]
    #[test_case(70)]
    fn expected_check_digit_before_1954_is_none(year_part: u8) {
        assert_eq!(birth_number(year_part, 1, 1, None).expected_check_digit(), None);
    }

    #[test_case(13)]
    #[test_case(31)]
    fn day_equals_day_part(day: u8) {
        let date = birth_number(50, 1, day, None).date_of_birth().unwrap();
        assert_eq!(date.day(), u32::from(day));
    }

    #[test_case(50, 55, 4, true)]
    #[test_case(35, 51, 5, true)]
    #[test_case(50, 62, 31, true)]
    #[test_case(53, 0, 4, false)]
    #[test_case(53, 99, 4, false)]
    #[test_case(53, 5, 99, false)]
    fn date_part_must_be_a_valid_date(year: u8, month: u8, day: u8, valid: bool) {
        assert_eq!(birth_number(year, month, day, None).is_valid(), valid);
    }

    #[test_case(0, 1, 1, 0, 8, false)]
    #[test_case(0, 1, 1, 0, 9, true)]
    #[test_case(0, 1, 1, 1, 0, true)]
    #[test_case(0, 1, 1, 1, 1, false)]
    #[test_case(54, 12, 24, 256, 1, true)]
    #[test_case(75, 52, 31, 851, 0, false)]
    fn after_1954_requires_valid_date_and_check_digit(
        year: u8,
        month: u8,
        day: u8,
        sequence: u16,
        check_digit: u8,
        valid: bool,
    ) {
        let birth_number = BirthNumber::new(year, month, day, sequence, Some(check_digit)).unwrap();
        assert_eq!(birth_number.is_valid(), valid);
    }

    #[test_case(0, 1, 1, true)]
    #[test_case(0, 12, 1, true)]
    #[test_case(0, 2, 28, true)]
    #[test_case(0, 13, 1, false)]
    #[test_case(54, 12, 70, false)]
    #[test_case(75, 2, 30, false)]
    fn before_1954_requires_valid_date(year: u8, month: u8, day: u8, valid: bool) {
        assert_eq!(birth_number(year, month, day, None).is_valid(), valid);
    }

    #[test]
    fn leap_day_depends_on_the_decoded_year() {
        // 1900 is not a leap year, 2000 is.
        assert!(!birth_number(0, 2, 29, None).is_valid());
        assert!(birth_number(0, 2, 29, Some(0)).date_of_birth().is_some());
    }

    #[test]
    fn woman_born_1967() {
        let birth_number = BirthNumber::new(67, 59, 14, 148, Some(8)).unwrap();
        assert!(birth_number.belongs_to_woman());
        assert_eq!(birth_number.year(), 1967);
        assert_eq!(birth_number.month(), 9);
        assert_eq!(birth_number.day(), 14);
        assert_eq!(
            birth_number.date_of_birth(),
            NaiveDate::from_ymd_opt(1967, 9, 14)
        );
        assert!(birth_number.is_valid());
    }

    #[test]
    fn man_born_1935() {
        let birth_number: BirthNumber = "350105/321".parse().unwrap();
        assert!(!birth_number.belongs_to_woman());
        assert!(!birth_number.is_after_1954());
        assert_eq!(birth_number.date_of_birth(), NaiveDate::from_ymd_opt(1935, 1, 5));
        assert!(birth_number.is_valid());
    }

    #[test]
    fn unspecified_format_is_standard() {
        let birth_number = BirthNumber::new(1, 2, 3, 4, Some(5)).unwrap();
        assert_eq!(birth_number.to_string_with(None).unwrap(), "010203/0045");
    }

    #[test]
    fn unsupported_format_is_an_error() {
        let birth_number = BirthNumber::new(1, 2, 3, 4, Some(5)).unwrap();
        assert!(birth_number.to_string_with(Some("unsupported")).is_err());
        assert!(birth_number.to_string_with(Some("F")).is_err());
    }

    #[test_case("N")]
    #[test_case("n")]
    fn number_format_has_9_or_10_digits(selector: &str) {
        let after = BirthNumber::new(1, 2, 3, 4, Some(5)).unwrap();
        let before = BirthNumber::new(1, 2, 3, 4, None).unwrap();
        assert_eq!(after.to_string_with(Some(selector)).unwrap(), "0102030045");
        assert_eq!(before.to_string_with(Some(selector)).unwrap(), "010203004");
    }

    #[test_case("S")]
    #[test_case("s")]
    fn standard_format_has_a_slash(selector: &str) {
        let after = BirthNumber::new(1, 2, 3, 4, Some(5)).unwrap();
        let before = BirthNumber::new(1, 2, 3, 4, None).unwrap();
        assert_eq!(after.to_string_with(Some(selector)).unwrap(), "010203/0045");
        assert_eq!(before.to_string_with(Some(selector)).unwrap(), "010203/004");
    }

    #[test_case("675914/1488"; "slash")]
    #[test_case("6759141488"; "plain")]
    fn from_str_accepts_both_shapes(text: &str) {
        let birth_number: BirthNumber = text.parse().unwrap();
        assert_eq!(birth_number, BirthNumber::new(67, 59, 14, 148, Some(8)).unwrap());
        assert_eq!(birth_number.input(), Some(text));
    }
}
