//! parser for timespan strings

use tracing::debug;

use crate::error::TimespanError;
use crate::language::Timespan;

mod coefficient;
pub mod parser;
mod registry;

pub use coefficient::{Appended, Coefficient};
pub use registry::Registry;

/// Parse text such as "1Y2M3W4D5h6m7s" into a Timespan, or return the
/// error that stopped the scan.
pub fn parse(content: &str) -> Result<Timespan, TimespanError> {
    let result = parser::parse_via_scanning(content);

    match result {
        Ok(timespan) => {
            debug!(
                content,
                years = timespan.years(),
                months = timespan.months(),
                days = timespan.days(),
                "parsed"
            );
            Ok(timespan)
        }
        Err(error) => {
            debug!(content, offset = error.offset, "{}", error.problem.message());
            Err(error)
        }
    }
}
