//! The Timespan value: separate calendar counts plus a fine-grained duration.

use chrono::{DateTime, Days, Months, TimeDelta, TimeZone};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::error::TimespanError;
use crate::formatting::render_timespan;

/// A span of time with calendar-scale and sub-day components held
/// separately.
///
/// Years, months, and days are kept distinct because their lengths vary; a
/// Timespan only acquires a precise length when applied to a specific point
/// in time with from_time(). Weeks are folded into days when parsing and are
/// not stored.
///
/// Two Timespans that are equivalent at one instant need not be at another.
/// "2D" and "48h" are the same length except across a daylight saving
/// cutover, where "2D" is 47 or 49 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timespan {
    years: i32,
    months: i32,
    days: i32,
    duration: TimeDelta,
}

impl Timespan {
    /// # Panics
    ///
    /// Panics if `duration` is outside the range of a signed 64-bit count
    /// of nanoseconds, the largest duration a timespan string can express.
    /// Use `checked_new()` to get None instead.
    pub fn new(years: i32, months: i32, days: i32, duration: TimeDelta) -> Timespan {
        match Timespan::checked_new(years, months, days, duration) {
            Some(timespan) => timespan,
            None => panic!("duration {} out of range for a Timespan", duration),
        }
    }

    pub fn checked_new(
        years: i32,
        months: i32,
        days: i32,
        duration: TimeDelta,
    ) -> Option<Timespan> {
        if !in_range(duration) {
            return None;
        }
        Some(Timespan {
            years,
            months,
            days,
            duration,
        })
    }

    pub fn years(&self) -> i32 {
        self.years
    }

    pub fn months(&self) -> i32 {
        self.months
    }

    pub fn days(&self) -> i32 {
        self.days
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0 && self.duration.is_zero()
    }

    /// Field-wise sum. No carry-over or normalization is performed: 8
    /// months plus 9 months is 17 months, never 1 year 5 months. Returns
    /// None if any field overflows, including a duration beyond what
    /// `new()` accepts.
    pub fn checked_add(&self, other: &Timespan) -> Option<Timespan> {
        Timespan::checked_new(
            self.years
                .checked_add(other.years)?,
            self.months
                .checked_add(other.months)?,
            self.days
                .checked_add(other.days)?,
            self.duration
                .checked_add(&other.duration)?,
        )
    }

    /// The point in time reached by applying this Timespan to `instant`.
    ///
    /// Years and months are applied first, then days, both on the local
    /// wall clock of the instant's time zone; the duration is then added as
    /// an absolute amount. A day that doesn't exist in the target month is
    /// clamped to the last day of that month rather than normalized into the
    /// next one: Jan 31 plus 1M is Feb 28, not Mar 3. Returns None if the
    /// result is out of range or falls on a local time that doesn't exist.
    pub fn from_time<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let months = self
            .years
            .checked_mul(12)?
            .checked_add(self.months)?;

        let result = shift_months(instant.clone(), months)?;
        let result = shift_days(result, self.days)?;

        result.checked_add_signed(self.duration)
    }

    /// Whether the two Timespans, each applied at `instant`, arrive at the
    /// same point in time. Unlike `==`, "2D" and "48h" are equal here except
    /// across a daylight saving transition.
    pub fn equal_at<Tz: TimeZone>(&self, other: &Timespan, instant: &DateTime<Tz>) -> bool {
        match (self.from_time(instant), other.from_time(instant)) {
            (Some(one), Some(two)) => one == two,
            _ => false,
        }
    }
}

fn in_range(duration: TimeDelta) -> bool {
    duration
        .num_nanoseconds()
        .is_some()
}

fn shift_months<Tz: TimeZone>(instant: DateTime<Tz>, months: i32) -> Option<DateTime<Tz>> {
    let amount = Months::new(months.unsigned_abs());
    if months < 0 {
        instant.checked_sub_months(amount)
    } else {
        instant.checked_add_months(amount)
    }
}

fn shift_days<Tz: TimeZone>(instant: DateTime<Tz>, days: i32) -> Option<DateTime<Tz>> {
    let amount = Days::new(u64::from(days.unsigned_abs()));
    if days < 0 {
        instant.checked_sub_days(amount)
    } else {
        instant.checked_add_days(amount)
    }
}

impl Default for Timespan {
    fn default() -> Self {
        Timespan::new(0, 0, 0, TimeDelta::zero())
    }
}

/// # Panics
///
/// Panics on overflow, as the integer operators do. Use `checked_add()` to
/// get None instead.
impl Add for Timespan {
    type Output = Timespan;

    fn add(self, other: Timespan) -> Timespan {
        match self.checked_add(&other) {
            Some(sum) => sum,
            None => panic!("overflow when adding timespans"),
        }
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_timespan(self))
    }
}

impl FromStr for Timespan {
    type Err = TimespanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parsing::parse(s)
    }
}

// Serialized in the canonical string form.

impl Serialize for Timespan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&render_timespan(self))
    }
}

impl<'de> Deserialize<'de> for Timespan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(de::Error::custom)
    }
}
