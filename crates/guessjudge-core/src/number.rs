//! Arbitrary-size decimal integers.
//!
//! Guesses and answers are only ever compared, so an integer is kept as a
//! sign plus its normalized decimal digits. Values far outside `i64` still
//! order correctly against each other.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A decimal integer of any size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    negative: bool,
    /// Digits without leading zeros; `"0"` for zero.
    magnitude: String,
}

/// The text is not a decimal integer literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid integer literal")]
pub struct InvalidInteger;

impl Integer {
    /// The value as an `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }
}

impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Self {
            negative: n < 0,
            magnitude: n.unsigned_abs().to_string(),
        }
    }
}

/// Accepts surrounding whitespace, an optional sign, and ASCII digits with
/// single underscores allowed between them (`1_000`).
impl FromStr for Integer {
    type Err = InvalidInteger;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        if body.is_empty()
            || body.starts_with('_')
            || body.ends_with('_')
            || body.contains("__")
            || !body.bytes().all(|b| b.is_ascii_digit() || b == b'_')
        {
            return Err(InvalidInteger);
        }

        let digits: String = body.chars().filter(|&c| c != '_').collect();
        let magnitude = match digits.trim_start_matches('0') {
            "" => "0",
            rest => rest,
        };

        Ok(Self {
            negative: negative && magnitude != "0",
            magnitude: magnitude.to_string(),
        })
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.magnitude)
    }
}

fn cmp_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitude(&self.magnitude, &other.magnitude),
            (true, true) => cmp_magnitude(&other.magnitude, &self.magnitude),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
