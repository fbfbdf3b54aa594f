use chrono::{DateTime, FixedOffset, Utc};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::IsTerminal;
use tracing::{debug, Level};

use timespan::formatting::{self, Identity, Render, Terminal};
use timespan::{output, Timespan, TimespanError};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("timespan")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Calendar-aware spans of time.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit diagnostic logging to standard error."),
        )
        .arg(
            Arg::new("raw-control-chars")
                .short('R')
                .long("raw-control-chars")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse timespans and print them in canonical form")
                .arg(
                    Arg::new("explain")
                        .long("explain")
                        .action(ArgAction::SetTrue)
                        .help("Show each field of the parsed timespan on its own line."),
                )
                .arg(
                    Arg::new("span")
                        .required(true)
                        .num_args(1..)
                        .allow_hyphen_values(true)
                        .help("The timespan to parse, for example 1Y2M3W4D5h6m7s."),
                ),
        )
        .subcommand(
            Command::new("add")
                .about("Add timespans together, field by field")
                .arg(
                    Arg::new("span")
                        .required(true)
                        .num_args(2..)
                        .allow_hyphen_values(true)
                        .help("The timespans to add."),
                ),
        )
        .subcommand(
            Command::new("apply")
                .about("Apply a timespan to a point in time")
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("RFC3339")
                        .help("The point in time to start from. Defaults to now."),
                )
                .arg(
                    Arg::new("span")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("The timespan to apply."),
                ),
        )
        .subcommand(
            Command::new("equal")
                .about("Compare two timespans")
                .arg(
                    Arg::new("at")
                        .long("at")
                        .value_name("RFC3339")
                        .help("Compare by applying both at this point in time rather than field by field."),
                )
                .arg(
                    Arg::new("span")
                        .required(true)
                        .num_args(2)
                        .allow_hyphen_values(true)
                        .help("The two timespans to compare."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let raw = matches.get_flag("raw-control-chars");
    let renderer: &dyn Render = if raw || std::io::stdout().is_terminal() {
        &Terminal
    } else {
        &Identity
    };

    match matches.subcommand() {
        Some(("parse", submatches)) => {
            let explain = submatches.get_flag("explain");
            for span in read_spans(submatches) {
                if explain {
                    match output::explain(&span) {
                        Ok(text) => println!("{}", text),
                        Err(error) => {
                            eprintln!("error: {}", error);
                            std::process::exit(1);
                        }
                    }
                } else {
                    println!("{}", formatting::render(renderer, &span));
                }
            }
        }
        Some(("add", submatches)) => {
            let mut total = Timespan::default();
            for span in read_spans(submatches) {
                total = match total.checked_add(&span) {
                    Some(sum) => sum,
                    None => {
                        eprintln!("error: sum of timespans out of range");
                        std::process::exit(1);
                    }
                };
            }
            println!("{}", formatting::render(renderer, &total));
        }
        Some(("apply", submatches)) => {
            let spans = read_spans(submatches);
            let instant = match submatches.get_one::<String>("from") {
                Some(text) => read_instant(text),
                None => Utc::now().fixed_offset(),
            };
            debug!(%instant, "applying");

            for span in spans {
                match span.from_time(&instant) {
                    Some(result) => println!("{}", result.to_rfc3339()),
                    None => {
                        eprintln!("error: {} from {} is not representable", span, instant);
                        std::process::exit(1);
                    }
                }
            }
        }
        Some(("equal", submatches)) => {
            let spans = read_spans(submatches);
            let (one, two) = (&spans[0], &spans[1]);

            let equal = match submatches.get_one::<String>("at") {
                Some(text) => one.equal_at(two, &read_instant(text)),
                None => one == two,
            };

            println!("{}", equal);
            if !equal {
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: timespan [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Parse every "span" argument, exiting with a diagnostic on the first one
/// that fails.
fn read_spans(submatches: &ArgMatches) -> Vec<Timespan> {
    let mut spans = Vec::new();

    if let Some(values) = submatches.get_many::<String>("span") {
        for text in values {
            match timespan::parse(text) {
                Ok(span) => spans.push(span),
                Err(error) => report(&error),
            }
        }
    }

    spans
}

fn read_instant(text: &str) -> DateTime<FixedOffset> {
    match DateTime::parse_from_rfc3339(text) {
        Ok(instant) => instant,
        Err(error) => {
            eprintln!("error: invalid point in time {:?}: {}", text, error);
            std::process::exit(1);
        }
    }
}

fn report(error: &TimespanError) -> ! {
    let renderer: &dyn Render = if std::io::stderr().is_terminal() {
        &Terminal
    } else {
        &Identity
    };
    eprintln!("{}", error.full_details(renderer));
    std::process::exit(1);
}
