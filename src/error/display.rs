use std::fmt;

use crate::formatting::{Render, Syntax};
use crate::parsing::parser::ParsingError;
use crate::problem::generate_error_message;

/// A failure to parse a timespan string, carrying the kind of problem, the
/// input it occurred in, and the byte offset at which the scan stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimespanError {
    pub problem: ParsingError,
    pub input: String,
    pub offset: usize,
}

// Verbose detailed explanation
impl TimespanError {
    pub fn kind(&self) -> &ParsingError {
        &self.problem
    }

    pub fn full_details(&self, renderer: &dyn Render) -> String {
        let (problem, details) = generate_error_message(&self.problem, renderer);

        let column = calculate_column_number(&self.input, self.offset);

        format!(
            r#"
{}: {}

{} {}
{} {} {}
{} {}{}{}

{}
            "#,
            renderer.style(Syntax::Error, "error"),
            renderer.style(Syntax::Problem, &problem),
            renderer.style(Syntax::Gutter, " "),
            renderer.style(Syntax::Gutter, "|"),
            renderer.style(Syntax::Gutter, "1"),
            renderer.style(Syntax::Gutter, "|"),
            self.input,
            renderer.style(Syntax::Gutter, " "),
            renderer.style(Syntax::Gutter, "|"),
            " ".repeat(column + 1),
            renderer.style(Syntax::Caret, "^"),
            details
        )
        .trim_ascii()
        .to_string()
    }
}

// Concise version for internal use
impl fmt::Display for TimespanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parsing timespan {:?}: {}",
            self.input,
            self.problem
                .message()
        )
    }
}

impl std::error::Error for TimespanError {}

// Zero-origin count of characters (not bytes) before offset, so that the
// caret lines up under non-ASCII input too.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    content
        .get(..offset)
        .map_or(0, |before| {
            before
                .chars()
                .count()
        })
}
