use chrono::TimeDelta;

/// Render a TimeDelta in the standard compact form, for example `2h30m0s`,
/// `1.5s`, `500ms`, or `0s`. The output is accepted by parse_duration().
pub fn format_duration(duration: TimeDelta) -> String {
    let nanos = i128::from(duration.num_seconds()) * 1_000_000_000
        + i128::from(duration.subsec_nanos());

    let negative = nanos < 0;
    let u = nanos.unsigned_abs();

    let mut result = String::new();
    if negative {
        result.push('-');
    }

    if u == 0 {
        return "0s".to_string();
    }

    if u < 1_000_000_000 {
        // sub-second values use a smaller unit so that "1.5ms" rather than
        // "0.0015s" comes out.
        if u < 1_000 {
            result.push_str(&format!("{}ns", u));
        } else if u < 1_000_000 {
            result.push_str(&format!("{}{}µs", u / 1_000, fraction(u, 3)));
        } else {
            result.push_str(&format!("{}{}ms", u / 1_000_000, fraction(u, 6)));
        }
        return result;
    }

    let seconds = fraction(u, 9);
    let whole = u / 1_000_000_000;

    let hours = whole / 3600;
    let minutes = (whole / 60) % 60;
    let secs = whole % 60;

    if hours > 0 {
        result.push_str(&format!("{}h{}m", hours, minutes));
    } else if minutes > 0 {
        result.push_str(&format!("{}m", minutes));
    }
    result.push_str(&format!("{}{}s", secs, seconds));

    result
}

// The fractional digits below the given precision, without trailing zeros
// and with a leading '.', or empty if there are none.
fn fraction(value: u128, precision: u32) -> String {
    let digits = value % 10u128.pow(precision);
    if digits == 0 {
        return String::new();
    }

    let digits = format!("{:0width$}", digits, width = precision as usize);
    format!(
        ".{}",
        digits.trim_end_matches('0')
    )
}
