//! Calendar-aware spans of time.
//!
//! A timespan string is one or more periods (a signed coefficient followed by
//! one of the magnitudes `Y`, `M`, `W`, `D` or `d`) and an optional trailing
//! duration literal such as `5h6m7s`:
//!
//! ```text
//! timespan    := periods | duration | periods duration
//! periods     := period | periods period
//! period      := coefficient MAGNITUDE | SIGN coefficient MAGNITUDE
//! coefficient := DIGIT | coefficient DIGIT
//! ```
//!
//! Magnitudes must appear from largest to smallest, each at most once, with
//! no whitespace anywhere. Weeks are folded into days.
//!
//! A negative sign is "sticky": `-1Y2M` is minus one year and minus two
//! months. To have the months positive write `-1Y+2M`.
//!
//! ```
//! use timespan::Timespan;
//!
//! let span: Timespan = "1Y2M3W4D5h6m7s".parse().unwrap();
//! assert_eq!(span.years(), 1);
//! assert_eq!(span.days(), 25);
//! assert_eq!(span.to_string(), "1Y2M25D5h6m7s");
//! ```

pub mod duration;
pub mod error;
pub mod formatting;
pub mod language;
pub mod output;
pub mod parsing;
mod problem;
mod regex;

pub use error::TimespanError;
pub use language::{Magnitude, Timespan};
pub use parsing::parser::ParsingError;

/// Parse a timespan string.
pub fn parse(text: &str) -> Result<Timespan, TimespanError> {
    parsing::parse(text)
}

/// Render a Timespan in the canonical form accepted by parse().
pub fn render(timespan: &Timespan) -> String {
    formatting::render_timespan(timespan)
}
