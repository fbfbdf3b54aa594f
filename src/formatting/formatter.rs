//! Formatter turning a Timespan into tagged fragments

use crate::duration::format_duration;
use crate::formatting::*;
use crate::language::{Magnitude, Timespan};

/// Break a Timespan into (Syntax, String) fragments. Years, months, days,
/// and duration are emitted in that order, zero fields omitted. An all-zero
/// Timespan produces no fragments at all.
pub fn format_with_renderer(timespan: &Timespan) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    output.format_period(Magnitude::Year, timespan.years());
    output.format_period(Magnitude::Month, timespan.months());
    output.format_period(Magnitude::Day, timespan.days());

    if !timespan
        .duration()
        .is_zero()
    {
        output.append(Syntax::Duration, &format_duration(timespan.duration()));
    }

    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
    negative: bool,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
            negative: false,
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    // A negative coefficient makes later unsigned ones negative when parsed
    // back, so a positive value following a negative one needs an explicit
    // '+' to survive the round trip.
    fn format_period(&mut self, magnitude: Magnitude, value: i32) {
        if value == 0 {
            return;
        }

        if value < 0 {
            self.append(Syntax::Sign, "-");
        } else if self.negative {
            self.append(Syntax::Sign, "+");
        }
        self.negative = value < 0;

        self.append(
            Syntax::Coefficient,
            &value
                .unsigned_abs()
                .to_string(),
        );
        self.append(Syntax::Magnitude, &magnitude.glyph().to_string());
    }
}
