use chrono::TimeDelta;
use std::fmt;

use crate::compile;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

// Largest magnitude accepted; one more than i64::MAX so that the most
// negative value can still be expressed.
const LIMIT: u64 = 1 << 63;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    Invalid(String),
    MissingUnit(String),
    UnknownUnit(String, String),
}

impl DurationError {
    pub fn message(&self) -> String {
        match self {
            DurationError::Invalid(input) => format!("invalid duration {:?}", input),
            DurationError::MissingUnit(input) => {
                format!("missing unit in duration {:?}", input)
            }
            DurationError::UnknownUnit(unit, input) => {
                format!("unknown unit {:?} in duration {:?}", unit, input)
            }
        }
    }
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DurationError {}

/// Does the entire content have the shape of a duration literal? This does
/// not guarantee that parse_duration() succeeds; numbers that overflow are
/// only detected there.
pub fn is_duration(content: &str) -> bool {
    let re = compile!(
        r"^[-+]?(?:0|(?:(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:ns|us|µs|μs|ms|s|m|h))+)$"
    );
    re.is_match(content)
}

fn unit_scale(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Parse a duration literal into a signed TimeDelta.
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let mut s = input;
    let mut negative = false;

    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(TimeDelta::zero());
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;

    while !s.is_empty() {
        // each component begins with a digit or the decimal point
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        let before = s.len();
        let (whole, rest) = leading_int(s).ok_or_else(invalid)?;
        s = rest;
        let pre = before != s.len();

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut post = false;
        if let Some(rest) = s.strip_prefix('.') {
            let before = rest.len();
            let (f, sc, rest) = leading_fraction(rest);
            fraction = f;
            scale = sc;
            s = rest;
            post = before != s.len();
        }

        if !pre && !post {
            // no digits at all, eg "." or ".s"
            return Err(invalid());
        }

        let end = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if end == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let unit = &s[..end];
        s = &s[end..];

        let per = unit_scale(unit)
            .ok_or_else(|| DurationError::UnknownUnit(unit.to_string(), input.to_string()))?;

        if whole > LIMIT / per {
            return Err(invalid());
        }
        let mut value = whole * per;

        if fraction > 0 {
            value += (fraction as f64 * (per as f64 / scale)) as u64;
            if value > LIMIT {
                return Err(invalid());
            }
        }

        total = total
            .checked_add(value)
            .filter(|total| *total <= LIMIT)
            .ok_or_else(invalid)?;
    }

    let nanos = if negative {
        -i128::from(total)
    } else {
        i128::from(total)
    };
    let nanos = i64::try_from(nanos).map_err(|_| invalid())?;

    Ok(TimeDelta::nanoseconds(nanos))
}

// Consume leading ASCII digits. Returns None on overflow.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let mut x: u64 = 0;
    let mut i = 0;

    for b in s.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        if x > (LIMIT - 1) / 10 {
            return None;
        }
        x = x * 10 + u64::from(b - b'0');
        if x > LIMIT {
            return None;
        }
        i += 1;
    }

    Some((x, &s[i..]))
}

// Consume the digits after a decimal point, returning the digits as an
// integer and the power of ten they are scaled by. Digits beyond what fits
// are consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let mut x: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    let mut i = 0;

    for b in s.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        i += 1;
        if overflow {
            continue;
        }
        if x > (LIMIT - 1) / 10 {
            overflow = true;
            continue;
        }
        let y = x * 10 + u64::from(b - b'0');
        if y > LIMIT {
            overflow = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }

    (x, scale, &s[i..])
}
