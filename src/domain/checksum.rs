//! The checksum kernel.
//!
//! Every function here is pure integer arithmetic over decimal digits. The
//! value types call into it; nothing here knows about text.

use std::iter;

/// The modulus used by every Czech identifier checksum.
pub const MODULUS: u64 = 11;

/// Weights of account number digits, rightmost digit first.
const ACCOUNT_WEIGHTS: [u64; 10] = [1, 2, 4, 8, 5, 10, 9, 7, 3, 6];

/// Number of leading digits of an identification number that carry a weight.
const IDENTIFICATION_DIGITS: u64 = 7;

/// Decimal digits of `value`, least significant first.
///
/// Zero yields a single `0` digit.
fn digits_from_right(value: u64) -> impl Iterator<Item = u64> {
    iter::successors(Some(value), |&rest| (rest >= 10).then_some(rest / 10)).map(|rest| rest % 10)
}

/// Narrows a remainder that is known to be below the modulus.
#[allow(clippy::cast_possible_truncation)]
const fn narrow(remainder: u64) -> u8 {
    debug_assert!(remainder < MODULUS);
    remainder as u8
}

/// Weighted sum of an account number part (prefix or number).
///
/// The weights `1, 2, 4, 8, 5, 10, 9, 7, 3, 6` are applied to the digits from
/// the rightmost one. Only the ten least significant digits contribute; longer
/// values are rejected by range validation, not here.
///
/// A part is valid when the result is divisible by [`MODULUS`].
///
/// ```
/// use identifiers::domain::checksum::account_part;
///
/// assert_eq!(account_part(19), 11);
/// assert_eq!(account_part(73), 17);
/// ```
#[must_use]
pub fn account_part(part: u64) -> u64 {
    digits_from_right(part)
        .zip(ACCOUNT_WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum()
}

/// Counts the decimal digits of `value` that are not zero.
#[must_use]
pub fn non_zero_digits(value: u64) -> usize {
    digits_from_right(value).filter(|&digit| digit != 0).count()
}

/// Weighted sum of the first seven digits of an identification number,
/// modulo 11.
///
/// The leftmost digit has weight 8, the seventh digit weight 2. Leading zeros
/// contribute nothing, so the weights can be assigned from the right.
#[must_use]
pub fn identification_modulo(number: u64) -> u8 {
    let weighted: u64 = digits_from_right(number)
        .zip(2..=IDENTIFICATION_DIGITS + 1)
        .map(|(digit, weight)| digit * weight)
        .sum();
    narrow(weighted % MODULUS)
}

/// Maps an identification number modulo to its expected check digit.
#[must_use]
pub const fn identification_check_digit(modulo: u8) -> u8 {
    match modulo {
        0 => 1,
        1 => 0,
        other => 11 - other,
    }
}

/// Expected check digit of a ten digit birth number.
///
/// The nine leading digits are read as one integer; its remainder modulo 11
/// is the check digit, except that a remainder of 10 becomes 0.
#[must_use]
pub fn birth_number_check_digit(year_part: u8, month_part: u8, day_part: u8, sequence: u16) -> u8 {
    let number = ((u64::from(year_part) * 100 + u64::from(month_part)) * 100
        + u64::from(day_part))
        * 1_000
        + u64::from(sequence);
    match narrow(number % MODULUS) {
        10 => 0,
        remainder => remainder,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 0; "zero")]
    #[test_case(19, 11; "two digits divisible")]
    #[test_case(73, 17; "two digits not divisible")]
    #[test_case(483, 35; "three digits")]
    #[test_case(58_509, 118; "five digits")]
    #[test_case(742_418, 132; "six digits divisible")]
    #[test_case(575_427, 152; "six digits not divisible")]
    #[test_case(765_178, 166; "number part")]
    #[test_case(9_999_999_999, 495; "ten nines")]
    fn account_part_checksum(part: u64, expected: u64) {
        assert_eq!(account_part(part), expected);
    }

    #[test]
    fn account_part_ignores_digits_beyond_ten() {
        assert_eq!(account_part(10_000_000_019), account_part(19));
    }

    #[test_case(0, 0)]
    #[test_case(10, 1)]
    #[test_case(19, 2)]
    #[test_case(400_000, 1)]
    #[test_case(5_000_000_000, 1)]
    #[test_case(9_000_000_001, 2)]
    #[test_case(1_234_567_890, 9)]
    fn counts_non_zero_digits(value: u64, expected: usize) {
        assert_eq!(non_zero_digits(value), expected);
    }

    #[test_case(706, 4; "short number")]
    #[test_case(6_966_396, 3; "seven digits")]
    #[test_case(694, 7; "another short number")]
    #[test_case(0, 1; "modulo zero")]
    #[test_case(6, 0; "modulo one")]
    fn identification_expected_check_digit(number: u64, expected: u8) {
        assert_eq!(
            identification_check_digit(identification_modulo(number)),
            expected
        );
    }

    #[test]
    fn identification_weights_run_from_eight_to_two() {
        // 1000000 has its only digit in the leftmost of seven positions.
        assert_eq!(identification_modulo(1_000_000), 8);
        assert_eq!(identification_modulo(1), 2);
    }

    #[test_case(54, 1, 1, 1, 0)]
    #[test_case(65, 3, 19, 264, 1)]
    #[test_case(95, 59, 12, 190, 2)]
    #[test_case(1, 51, 19, 448, 3)]
    #[test_case(79, 53, 22, 994, 4)]
    #[test_case(98, 11, 8, 551, 5)]
    #[test_case(55, 52, 24, 269, 6)]
    #[test_case(0, 4, 26, 620, 7)]
    #[test_case(67, 59, 14, 148, 8)]
    #[test_case(54, 55, 28, 586, 9)]
    #[test_case(78, 1, 23, 354, 0)]
    fn birth_number_check_digit_is_remainder_modulo_11(
        year: u8,
        month: u8,
        day: u8,
        sequence: u16,
        expected: u8,
    ) {
        assert_eq!(birth_number_check_digit(year, month, day, sequence), expected);
    }

    #[test]
    fn birth_number_remainder_ten_becomes_zero() {
        assert_eq!(101_001 % MODULUS, 10);
        assert_eq!(birth_number_check_digit(0, 1, 1, 1), 0);
    }
}
