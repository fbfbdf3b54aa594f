#[cfg(test)]
mod verify {
    use chrono::TimeDelta;

    use timespan::formatting::{format_with_renderer, render, Identity, Syntax};
    use timespan::{parse, Timespan};

    #[test]
    fn canonical_rendering() {
        let result = parse("2Y2M2W2h30m").unwrap();
        assert_eq!(result.to_string(), "2Y2M14D2h30m0s");
        assert_eq!(timespan::render(&result), "2Y2M14D2h30m0s");
    }

    #[test]
    fn zero_fields_omitted() {
        let result = Timespan::new(0, 3, 0, TimeDelta::zero());
        assert_eq!(result.to_string(), "3M");

        let result = Timespan::new(0, 0, 0, TimeDelta::seconds(5));
        assert_eq!(result.to_string(), "5s");

        assert_eq!(Timespan::default().to_string(), "");
    }

    #[test]
    fn signs_survive_rendering() {
        let result = parse("-1Y+2M").unwrap();
        assert_eq!(result.to_string(), "-1Y+2M");

        let result = parse("-1Y2M").unwrap();
        assert_eq!(result.to_string(), "-1Y-2M");

        let result = parse("4W-1d").unwrap();
        assert_eq!(result.to_string(), "27D");
    }

    #[test]
    fn renderer_sees_tagged_fragments() {
        let result = parse("-3D1h").unwrap();
        let fragments = format_with_renderer(&result);

        let tags: Vec<Syntax> = fragments
            .iter()
            .map(|(syntax, _)| *syntax)
            .collect();
        assert_eq!(
            tags,
            vec![
                Syntax::Sign,
                Syntax::Coefficient,
                Syntax::Magnitude,
                Syntax::Duration
            ]
        );

        assert_eq!(render(&Identity, &result), "-3D1h0m0s");
    }

    #[test]
    fn normalization_is_idempotent() {
        for text in [
            "1Y2M3W4D5h6m7s89ms",
            "-1Y2M",
            "-1Y+2M",
            "-1Y2M-3W+4D",
            "4W1d",
            "1h30m",
            "-1h30m",
            "2D1h",
            "1D-90m",
            "-0Y5D",
            "18M",
            "10d.25s",
        ] {
            let once = parse(text).unwrap();
            let twice = parse(&once.to_string()).unwrap();
            assert_eq!(once, twice, "{:?} rendered as {:?}", text, once.to_string());
        }
    }
}
