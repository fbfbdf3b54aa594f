use chrono::TimeDelta;
use tracing::trace;

use crate::duration::{is_duration, parse_duration, DurationError};
use crate::error::TimespanError;
use crate::language::{Magnitude, Timespan};
use crate::parsing::coefficient::{Appended, Coefficient};
use crate::parsing::registry::Registry;

// Any of these present means the input has periods, not just a duration.
const MAGNITUDES: [char; 5] = ['Y', 'M', 'W', 'D', 'd'];

pub fn parse_via_scanning(content: &str) -> Result<Timespan, TimespanError> {
    let mut input = Parser::new();
    input.initialize(content);

    let result = if is_duration_only(content) {
        input.read_duration_only()
    } else {
        input.read_timespan()
    };

    match result {
        Ok(timespan) => Ok(timespan),
        Err(error) => Err(make_error(input, error)),
    }
}

fn make_error(parser: Parser<'_>, error: ParsingError) -> TimespanError {
    TimespanError {
        problem: error,
        input: parser
            .original
            .to_string(),
        offset: parser.offset,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    MisplacedSign(char, String),
    MissingCoefficient,
    UnparseableCoefficient(String),
    UnrecognizedMagnitude(char),
    IndeterminateOrder(char),
    MagnitudeRestated(Magnitude, i32, i32),
    MagnitudeOutOfOrder(Magnitude, Magnitude),
    NoValueDerived,
    BadDuration(DurationError),
}

impl ParsingError {
    pub fn message(&self) -> String {
        match self {
            ParsingError::MisplacedSign(sign, coefficient) => {
                format!("misplaced '{}' in coefficient {:?}", sign, coefficient)
            }
            ParsingError::MissingCoefficient => "missing coefficient".to_string(),
            ParsingError::UnparseableCoefficient(coefficient) => {
                format!("unparseable coefficient: {:?}", coefficient)
            }
            ParsingError::UnrecognizedMagnitude(glyph) => {
                format!("unrecognized magnitude: {:?}", glyph.to_string())
            }
            ParsingError::IndeterminateOrder(glyph) => {
                format!("indeterminate order for magnitude: {:?}", glyph.to_string())
            }
            ParsingError::MagnitudeRestated(magnitude, current, previous) => {
                let glyph = magnitude.glyph();
                format!(
                    "magnitude {} restated (current:{}{} previous:{}{})",
                    glyph, current, glyph, previous, glyph
                )
            }
            ParsingError::MagnitudeOutOfOrder(already, current) => format!(
                "magnitude out of order: {} specified before {}",
                already.label(),
                current.label()
            ),
            ParsingError::NoValueDerived => "no value derived".to_string(),
            ParsingError::BadDuration(error) => error.message(),
        }
    }
}

/// What the scan does at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step<'i> {
    /// The rest of the input is a duration literal, which ends the scan.
    Duration(&'i str),
    /// Feed this character to the coefficient (or treat it as a magnitude).
    Character(char),
    Finished,
}

#[derive(Debug)]
pub struct Parser<'i> {
    original: &'i str,
    source: &'i str,
    offset: usize,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            original: "",
            source: "",
            offset: 0,
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.original = content;
        self.source = content;
        self.offset = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn advance(&mut self, width: usize) {
        // advance the parser position
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn peek_next_char(&self) -> Option<char> {
        self.source
            .chars()
            .next()
    }

    fn step(&self) -> Step<'i> {
        if is_duration(self.source) {
            return Step::Duration(self.source);
        }
        match self.peek_next_char() {
            Some(c) => Step::Character(c),
            None => Step::Finished,
        }
    }

    /// Input with no magnitude letters at all is taken as a duration
    /// literal on its own.
    pub fn read_duration_only(&mut self) -> Result<Timespan, ParsingError> {
        let duration = parse_duration(self.source).map_err(ParsingError::BadDuration)?;
        self.advance(
            self.source
                .len(),
        );

        Ok(Timespan::new(0, 0, 0, duration))
    }

    /// Scan periods (coefficient and magnitude pairs) left to right, ending
    /// either at the end of input or at a trailing duration literal.
    pub fn read_timespan(&mut self) -> Result<Timespan, ParsingError> {
        let mut registry = Registry::new();
        let mut coefficient = Coefficient::new();
        let mut duration = TimeDelta::zero();
        let mut sign = 1;
        let mut valid = false;

        loop {
            match self.step() {
                Step::Duration(remainder) => {
                    trace!(remainder, "duration suffix");
                    // overflow is an error; shorter suffixes are not retried
                    duration = parse_duration(remainder).map_err(ParsingError::BadDuration)?;
                    valid = true;
                    self.advance(remainder.len());
                    break;
                }
                Step::Character(c) => {
                    if coefficient.append(c)? == Appended::Rejected {
                        let value = coefficient.value(sign)?;
                        registry.set(c, value)?;
                        trace!(magnitude = %c, value, "period");

                        sign = if value < 0 { -1 } else { 1 };
                        valid = true;
                        coefficient = Coefficient::new();
                    }
                    self.advance(c.len_utf8());
                }
                Step::Finished => break,
            }
        }

        if !valid {
            return Err(ParsingError::NoValueDerived);
        }

        let weeks = registry.get(Magnitude::Week);
        let days = weeks
            .checked_mul(7)
            .and_then(|days| days.checked_add(registry.get(Magnitude::Day)))
            .ok_or_else(|| {
                ParsingError::UnparseableCoefficient(format!(
                    "{}W{}D",
                    weeks,
                    registry.get(Magnitude::Day)
                ))
            })?;

        Ok(Timespan::new(
            registry.get(Magnitude::Year),
            registry.get(Magnitude::Month),
            days,
            duration,
        ))
    }
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Parser::new()
    }
}

fn is_duration_only(content: &str) -> bool {
    !content.contains(MAGNITUDES)
}
