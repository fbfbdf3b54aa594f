//! The calendar-scale categories a coefficient can be attached to.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magnitude {
    Year,
    Month,
    Week,
    Day,
}

impl Magnitude {
    /// Canonical order, most coarse to most fine. Periods in a timespan
    /// string must appear in this order.
    pub const ORDER: [Magnitude; 4] = [
        Magnitude::Year,
        Magnitude::Month,
        Magnitude::Week,
        Magnitude::Day,
    ];

    /// Look up the category for a given designator. Only the canonical
    /// (upper case) letters are recognized here.
    pub fn from_glyph(glyph: char) -> Option<Magnitude> {
        match glyph {
            'Y' => Some(Magnitude::Year),
            'M' => Some(Magnitude::Month),
            'W' => Some(Magnitude::Week),
            'D' => Some(Magnitude::Day),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Magnitude::Year => 'Y',
            Magnitude::Month => 'M',
            Magnitude::Week => 'W',
            Magnitude::Day => 'D',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Magnitude::Year => "year",
            Magnitude::Month => "month",
            Magnitude::Week => "week",
            Magnitude::Day => "day",
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
