use crate::formatting::{Render, Syntax};
use crate::parsing::parser::ParsingError;

// Show a sample timespan string the way the formatter would colour it.
fn example(renderer: &dyn Render, periods: &[(&str, char)], duration: Option<&str>) -> String {
    let mut result = String::new();
    for (coefficient, glyph) in periods {
        if let Some(rest) = coefficient.strip_prefix(['-', '+']) {
            result.push_str(&renderer.style(Syntax::Sign, &coefficient[..1]));
            result.push_str(&renderer.style(Syntax::Coefficient, rest));
        } else {
            result.push_str(&renderer.style(Syntax::Coefficient, coefficient));
        }
        result.push_str(&renderer.style(Syntax::Magnitude, &glyph.to_string()));
    }
    if let Some(duration) = duration {
        result.push_str(&renderer.style(Syntax::Duration, duration));
    }
    result
}

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError, renderer: &dyn Render) -> (String, String) {
    match error {
        ParsingError::MisplacedSign(sign, coefficient) => (
            error.message(),
            format!(
                r#"
A sign can only appear at the start of a coefficient, before any digits. The
'{}' here follows {:?}. Write the sign first, as in {}.
                "#,
                sign,
                coefficient,
                example(renderer, &[("4", 'W'), ("-1", 'D')], None)
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::MissingCoefficient => (
            error.message(),
            format!(
                r#"
Every magnitude letter must be preceded by the number it applies to, for
example {} rather than just {}.
                "#,
                example(renderer, &[("3", 'W')], None),
                renderer.style(Syntax::Magnitude, "W")
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnparseableCoefficient(coefficient) => (
            error.message(),
            format!(
                r#"
The coefficient {:?} could not be converted to a number. It may be a sign
with no digits after it, or a value too large to be represented.
                "#,
                coefficient
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnrecognizedMagnitude(_) => (
            error.message(),
            format!(
                r#"
The magnitudes are {} for years, {} for months, {} for weeks, and {} (or {})
for days. Hours, minutes, seconds and smaller units may only appear together
at the end, as in {}.
                "#,
                renderer.style(Syntax::Magnitude, "Y"),
                renderer.style(Syntax::Magnitude, "M"),
                renderer.style(Syntax::Magnitude, "W"),
                renderer.style(Syntax::Magnitude, "D"),
                renderer.style(Syntax::Magnitude, "d"),
                example(renderer, &[("2", 'D')], Some("1h30m"))
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::IndeterminateOrder(_) => (
            error.message(),
            "Internal parser error. This should not have happened! Sorry.".to_string(),
        ),
        ParsingError::MagnitudeRestated(magnitude, _, _) => (
            error.message(),
            format!(
                "Each magnitude can be given only once; the {}s value was stated twice.",
                magnitude.label()
            ),
        ),
        ParsingError::MagnitudeOutOfOrder(_, _) => (
            error.message(),
            format!(
                r#"
Magnitudes must be given from largest to smallest: years, months, weeks,
then days, as in {}. Any of them may be left out.
                "#,
                example(
                    renderer,
                    &[("1", 'Y'), ("2", 'M'), ("3", 'W'), ("4", 'D')],
                    None
                )
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::NoValueDerived => (
            error.message(),
            "The input contains neither a period nor a duration.".to_string(),
        ),
        ParsingError::BadDuration(_) => (
            error.message(),
            format!(
                r#"
A duration is a sequence of numbers each followed by one of the units {}, {},
{}, {}, {}, or {}, for example {}. It must come last.
                "#,
                renderer.style(Syntax::Duration, "h"),
                renderer.style(Syntax::Duration, "m"),
                renderer.style(Syntax::Duration, "s"),
                renderer.style(Syntax::Duration, "ms"),
                renderer.style(Syntax::Duration, "us"),
                renderer.style(Syntax::Duration, "ns"),
                renderer.style(Syntax::Duration, "1h30m")
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}
