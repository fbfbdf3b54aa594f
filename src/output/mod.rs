//! Output generation for the timespan CLI application

use serde::Serialize;
use tinytemplate::{error::Error, format_unescaped, TinyTemplate};
use tracing::debug;

use crate::duration::format_duration;
use crate::language::Timespan;

static TEMPLATE: &str = r#"
span:     {canonical}
years:    {years}
months:   {months}
days:     {days}
duration: {duration}
"#;

#[derive(Serialize)]
struct Context {
    canonical: String,
    years: i32,
    months: i32,
    days: i32,
    duration: String,
}

/// A field by field breakdown of a Timespan, one per line.
pub fn explain(timespan: &Timespan) -> Result<String, Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("explain", TEMPLATE)?;

    let context = Context {
        canonical: timespan.to_string(),
        years: timespan.years(),
        months: timespan.months(),
        days: timespan.days(),
        duration: format_duration(timespan.duration()),
    };

    let rendered = tt.render("explain", &context)?;
    debug!(bytes = rendered.len(), "explained");

    Ok(rendered
        .trim_ascii()
        .to_string())
}
