//! Conversion of matched digit groups into numbers.

use regex::Captures;

/// Builds a number from a run of ASCII digits, one digit at a time.
///
/// The caller guarantees that `text` consists of ASCII digits only and is
/// short enough not to overflow.
pub fn to_number(text: &str) -> u64 {
    text.bytes()
        .fold(0, |number, digit| number * 10 + u64::from(digit - b'0'))
}

/// Returns the number captured by group `index`, if the group participated
/// in the match.
pub fn group(captures: &Captures<'_>, index: usize) -> Option<u64> {
    captures.get(index).map(|group| to_number(group.as_str()))
}
