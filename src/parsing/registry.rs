//! Bookkeeping for which magnitudes a timespan string has stated so far.

use std::collections::HashMap;

use crate::language::Magnitude;
use crate::parsing::parser::ParsingError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    is_set: bool,
    value: i32,
}

/// One entry per magnitude, all present (and unset) from creation. Owned by
/// a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: HashMap<Magnitude, Entry>,
}

impl Registry {
    pub fn new() -> Registry {
        let entries = Magnitude::ORDER
            .iter()
            .map(|magnitude| {
                (
                    *magnitude,
                    Entry {
                        is_set: false,
                        value: 0,
                    },
                )
            })
            .collect();

        Registry { entries }
    }

    /// The value stated for this magnitude, or zero if it never was.
    pub fn get(&self, magnitude: Magnitude) -> i32 {
        self.entries
            .get(&magnitude)
            .map_or(0, |entry| entry.value)
    }

    pub fn is_set(&self, magnitude: Magnitude) -> bool {
        self.entries
            .get(&magnitude)
            .is_some_and(|entry| entry.is_set)
    }

    /// Record the value for the magnitude designated by `glyph`. Each
    /// magnitude can be set once, and only while nothing at or below it in
    /// the canonical order has been set.
    pub fn set(&mut self, glyph: char, value: i32) -> Result<(), ParsingError> {
        let glyph = if glyph == 'd' { 'D' } else { glyph };

        let magnitude =
            Magnitude::from_glyph(glyph).ok_or(ParsingError::UnrecognizedMagnitude(glyph))?;

        let position = Magnitude::ORDER
            .iter()
            .position(|m| *m == magnitude)
            .ok_or(ParsingError::IndeterminateOrder(glyph))?;

        let previous = self
            .entries
            .get(&magnitude)
            .ok_or(ParsingError::UnrecognizedMagnitude(glyph))?;

        if previous.is_set {
            return Err(ParsingError::MagnitudeRestated(
                magnitude,
                value,
                previous.value,
            ));
        }

        // anything from here to the end of the order already being set
        // means this one has arrived too late
        for later in &Magnitude::ORDER[position..] {
            if self.is_set(*later) {
                return Err(ParsingError::MagnitudeOutOfOrder(*later, magnitude));
            }
        }

        if let Some(entry) = self
            .entries
            .get_mut(&magnitude)
        {
            entry.value = value;
            entry.is_set = true;
        }

        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}
