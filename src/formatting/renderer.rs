//! Renderers for colourizing timespans and diagnostics

use owo_colors::OwoColorize;

use crate::formatting::*;
use crate::language::Timespan;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Sign => content // keyword.operator - #cc0000 (red) bold
                .color(owo_colors::Rgb(0xcc, 0x00, 0x00))
                .bold()
                .to_string(),
            Syntax::Coefficient => content // constant.numeric - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::Magnitude => content // entity.name.type - #8f5902 (brown) bold
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .bold()
                .to_string(),
            Syntax::Duration => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
            Syntax::Error => content
                .bright_red()
                .to_string(),
            Syntax::Problem => content
                .bold()
                .to_string(),
            Syntax::Gutter => content
                .bright_blue()
                .to_string(),
            Syntax::Caret => content
                .bright_red()
                .to_string(),
        }
    }
}

/// We do the formatting in two passes. First we convert the Timespan into a
/// Vec of "fragments" (Syntax tag, String pairs). Then second we apply the
/// specified renderer to each pair to result in an embellished String.
pub fn render(renderer: &dyn Render, timespan: &Timespan) -> String {
    // Pass 1: Format to tagged fragments
    let fragments = format_with_renderer(timespan);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Canonical rendering with no markup. This is what Display emits and is
/// always accepted by the parser.
pub fn render_timespan(timespan: &Timespan) -> String {
    render(&Identity, timespan)
}

fn render_to_string(renderer: &dyn Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
