#[cfg(test)]
mod verify {
    use chrono::{TimeDelta, TimeZone, Utc};

    use timespan::parsing::parser::Parser;
    use timespan::parsing::{Appended, Coefficient, Registry};
    use timespan::{parse, Magnitude, Timespan};

    fn span(years: i32, months: i32, days: i32, duration: TimeDelta) -> Timespan {
        Timespan::new(years, months, days, duration)
    }

    #[test]
    fn good_timespans() {
        let data = [
            ("1Y", span(1, 0, 0, TimeDelta::zero())),
            ("1Y6M", span(1, 6, 0, TimeDelta::zero())),
            ("18M", span(0, 18, 0, TimeDelta::zero())),
            ("3W", span(0, 0, 21, TimeDelta::zero())),
            (
                "1h30m",
                span(0, 0, 0, TimeDelta::hours(1) + TimeDelta::minutes(30)),
            ),
            (
                "-1h30m",
                span(0, 0, 0, -TimeDelta::hours(1) - TimeDelta::minutes(30)),
            ),
            ("2D1h", span(0, 0, 2, TimeDelta::hours(1))),
            ("4W1d", span(0, 0, 29, TimeDelta::zero())),
            ("4W-1d", span(0, 0, 27, TimeDelta::zero())),
            (
                "1Y2M3W4D5h6m7s",
                span(
                    1,
                    2,
                    25,
                    TimeDelta::hours(5) + TimeDelta::minutes(6) + TimeDelta::seconds(7),
                ),
            ),
            (
                "1Y2M3W4D5h6m7s89ms",
                span(
                    1,
                    2,
                    25,
                    TimeDelta::hours(5)
                        + TimeDelta::minutes(6)
                        + TimeDelta::seconds(7)
                        + TimeDelta::milliseconds(89),
                ),
            ),
        ];

        for (text, want) in data {
            let got = parse(text).unwrap_or_else(|e| panic!("{}", e));
            assert_eq!(got, want, "parsing {:?}", text);
        }
    }

    #[test]
    fn sign_propagation() {
        let result = parse("-1Y2M").unwrap();
        assert_eq!(result.years(), -1);
        assert_eq!(result.months(), -2);

        let result = parse("-1Y+2M").unwrap();
        assert_eq!(result.years(), -1);
        assert_eq!(result.months(), 2);

        // the override itself carries forward
        let result = parse("-1Y+2M3D").unwrap();
        assert_eq!(result.days(), 3);

        let result = parse("-1Y2M-3W+4D").unwrap();
        assert_eq!(result.years(), -1);
        assert_eq!(result.months(), -2);
        assert_eq!(result.days(), -21 + 4);
    }

    #[test]
    fn pure_durations_bypass_magnitudes() {
        let result = parse("90m").unwrap();
        assert_eq!(result.years(), 0);
        assert_eq!(result.months(), 0);
        assert_eq!(result.days(), 0);
        assert_eq!(result.duration(), TimeDelta::minutes(90));

        let result = parse("-1h30m").unwrap();
        assert_eq!(result.days(), 0);
        assert_eq!(result.duration(), -TimeDelta::minutes(90));

        let result = parse("0").unwrap();
        assert!(result.is_zero());
    }

    #[test]
    fn trailing_coefficient_ignored() {
        assert_eq!(parse("1Y2").unwrap(), span(1, 0, 0, TimeDelta::zero()));
        assert_eq!(parse("1Y20").unwrap(), span(1, 0, 0, TimeDelta::zero()));
        assert_eq!(parse("-1Y-").unwrap(), span(-1, 0, 0, TimeDelta::zero()));
    }

    #[test]
    fn from_str() {
        let result: Timespan = "2Y2M2W2h30m".parse().unwrap();
        assert_eq!(
            result,
            span(2, 2, 14, TimeDelta::hours(2) + TimeDelta::minutes(30))
        );
    }

    #[test]
    fn parser_state_after_success() {
        let mut input = Parser::new();
        input.initialize("4W1d");
        let result = input.read_timespan();
        assert_eq!(result, Ok(span(0, 0, 29, TimeDelta::zero())));
        assert_eq!(input.offset(), 4);

        input.initialize("1h");
        let result = input.read_duration_only();
        assert_eq!(result, Ok(span(0, 0, 0, TimeDelta::hours(1))));
        assert_eq!(input.offset(), 2);
    }

    #[test]
    fn components_in_isolation() {
        let mut coefficient = Coefficient::new();
        assert_eq!(coefficient.append('-'), Ok(Appended::Sign));
        assert_eq!(coefficient.append('4'), Ok(Appended::Digit));
        assert_eq!(coefficient.append('W'), Ok(Appended::Rejected));
        assert_eq!(coefficient.value(1), Ok(-4));

        let mut registry = Registry::new();
        assert_eq!(registry.set('W', -4), Ok(()));
        assert_eq!(registry.get(Magnitude::Week), -4);
        assert_eq!(registry.get(Magnitude::Day), 0);
    }

    #[test]
    fn applying_parsed_span() {
        let result = parse("2M2W2h30m").unwrap();

        let base = Utc
            .with_ymd_and_hms(2014, 3, 3, 17, 0, 0)
            .unwrap();
        let want = Utc
            .with_ymd_and_hms(2014, 5, 17, 19, 30, 0)
            .unwrap();

        assert_eq!(result.from_time(&base), Some(want));
    }

    #[test]
    fn adding_parsed_spans() {
        let one = parse("2M14D2h30m").unwrap();
        let two = parse("1Y1M10D3h30m").unwrap();

        assert_eq!(one + two, parse("1Y3M24D6h").unwrap());
    }

    #[test]
    fn sums_render_parseably() {
        let half = parse("1281023h").unwrap();
        let sum = half
            .checked_add(&half)
            .unwrap();
        assert_eq!(sum.to_string(), "2562046h0m0s");
        assert_eq!(parse(&sum.to_string()).unwrap(), sum);

        let most = parse("2562047h").unwrap();
        assert_eq!(most.checked_add(&most), None);

        let negative = parse("-2562047h").unwrap();
        assert_eq!(negative.checked_add(&negative), None);
    }

    #[test]
    fn serde_uses_canonical_string() {
        let result = parse("1Y2W1h").unwrap();

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#""1Y14D1h0m0s""#);

        let back: Timespan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);

        let bad: Result<Timespan, _> = serde_json::from_str(r#""3W2W""#);
        assert!(bad.is_err());
    }
}
