//! Incremental scanner for the signed integer preceding a magnitude letter.

use crate::parsing::parser::ParsingError;

/// What happened to a character offered to a Coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appended {
    Sign,
    Digit,
    /// Not part of a coefficient. The caller decides what it means.
    Rejected,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Coefficient {
    text: String,
}

impl Coefficient {
    pub fn new() -> Coefficient {
        Coefficient {
            text: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text
            .is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Offer the next character. A sign is only acceptable as the very first
    /// character.
    pub fn append(&mut self, c: char) -> Result<Appended, ParsingError> {
        match c {
            '-' | '+' => {
                if !self.is_empty() {
                    return Err(ParsingError::MisplacedSign(c, self.text.clone()));
                }
                self.text
                    .push(c);
                Ok(Appended::Sign)
            }
            '0'..='9' => {
                self.text
                    .push(c);
                Ok(Appended::Digit)
            }
            _ => Ok(Appended::Rejected),
        }
    }

    /// Resolve the accumulated characters to an integer. If `sign` is
    /// negative and this coefficient carries no explicit '+', a positive
    /// value is negated; an explicit sign on the coefficient always wins.
    pub fn value(&self, sign: i32) -> Result<i32, ParsingError> {
        if self.is_empty() {
            return Err(ParsingError::MissingCoefficient);
        }

        let value: i32 = self
            .text
            .parse()
            .map_err(|_| ParsingError::UnparseableCoefficient(self.text.clone()))?;

        if sign < 0 && value > 0 && !self.text.starts_with('+') {
            return Ok(-value);
        }

        Ok(value)
    }
}

#[cfg(test)]
impl From<&str> for Coefficient {
    fn from(text: &str) -> Self {
        Coefficient {
            text: text.to_string(),
        }
    }
}
