//! Date-time literal recognition.
//!
//! TOML date-times are stored as the literal text they were written as; this
//! module only recognizes their shape (RFC 3339-like: offset or local
//! date-time, local date, local time) and reports how many bytes it spans.

#[cfg(test)]
#[path = "./time_tests.rs"]
mod tests;

use std::fmt;

/// A TOML date-time literal, kept as verbatim text.
///
/// No calendrical validation or normalization is performed; `2021-02-31`
/// round-trips unchanged.
#[derive(Clone, PartialEq, Eq)]
pub struct DateTime {
    /// The literal as written in the source
    pub text: String,
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[inline]
fn digits(input: &[u8], n: usize) -> bool {
    input.len() >= n && input[..n].iter().all(u8::is_ascii_digit)
}

/// Matches `HH:MM:SS` with an optional `.` and 1-6 fractional digits,
/// returning the matched length.
///
/// A malformed fraction (no digits, or more than six) is not consumed; the
/// caller's terminator check rejects the literal in that case.
fn time_len(input: &[u8]) -> Option<usize> {
    if !(digits(input, 2) && input.get(2) == Some(&b':')) {
        return None;
    }
    if !(digits(&input[3..], 2) && input.get(5) == Some(&b':')) {
        return None;
    }
    if !digits(&input[6..], 2) {
        return None;
    }
    if input.get(8) != Some(&b'.') {
        return Some(8);
    }
    let frac = input[9..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    match frac {
        1..=6 => Some(9 + frac),
        _ => Some(8),
    }
}

/// Matches `±HH:MM`, returning the matched length.
fn offset_len(input: &[u8]) -> Option<usize> {
    match input.first() {
        Some(b'Z') => Some(1),
        Some(b'+' | b'-') => {
            if digits(&input[1..], 2)
                && input.get(3) == Some(&b':')
                && digits(&input[4..], 2)
            {
                Some(6)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Scans a date-time literal at the start of `input`, returning the number
/// of bytes it spans.
///
/// Recognized shapes:
///
/// - `YYYY-MM-DD[T ]HH:MM:SS(.digits)?(Z|±HH:MM)?`
/// - `YYYY-MM-DD`
/// - `HH:MM:SS(.digits)?`
///
/// The space separator is only taken when a full time follows it, so
/// `d = 1979-05-27 # note` still scans as a local date. Digit counts are
/// enforced; calendar validity is not.
pub(crate) fn scan(input: &[u8]) -> Option<usize> {
    // Local time
    if input.get(2) == Some(&b':') {
        return time_len(input);
    }

    // Local date
    if !(digits(input, 4) && input.get(4) == Some(&b'-')) {
        return None;
    }
    if !(digits(&input[5..], 2) && input.get(7) == Some(&b'-')) {
        return None;
    }
    if !digits(&input[8..], 2) {
        return None;
    }

    let has_time = match input.get(10) {
        Some(b'T') => true,
        // Take the space separator only when a time follows it.
        Some(b' ') => digits(&input[11..], 2) && input.get(13) == Some(&b':'),
        _ => false,
    };
    if !has_time {
        return Some(10);
    }
    let Some(tlen) = time_len(&input[11..]) else {
        // A `T` with no time behind it fails the caller's terminator check.
        return Some(10);
    };
    let mut end = 11 + tlen;
    if let Some(olen) = offset_len(&input[end..]) {
        end += olen;
    }
    Some(end)
}
