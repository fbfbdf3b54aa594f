#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::Path;

    use timespan::parsing;

    #[test]
    fn ensure_samples_parse() {
        let file = Path::new("tests/samples/valid.txt");

        assert!(file.exists(), "samples file missing");

        let content = fs::read_to_string(file).expect("Failed to read samples file");

        let mut failures = Vec::new();

        for line in content.lines() {
            let line = line.trim_ascii();
            if line.is_empty() {
                continue;
            }

            match parsing::parse(line) {
                Ok(_) => {}
                Err(e) => {
                    println!("Sample {:?} failed to parse: {}", line, e);
                    failures.push(line.to_string());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Samples should parse successfully, but {} failed",
                failures.len()
            );
        }
    }

    #[test]
    fn samples_survive_normalization() {
        let content =
            fs::read_to_string("tests/samples/valid.txt").expect("Failed to read samples file");

        for line in content
            .lines()
            .map(str::trim_ascii)
            .filter(|line| !line.is_empty())
        {
            let first = parsing::parse(line).unwrap();
            let rendered = first.to_string();

            // the all-zero span renders as nothing, which is not itself
            // parseable
            if first.is_zero() {
                assert_eq!(rendered, "");
                continue;
            }

            let second = parsing::parse(&rendered)
                .unwrap_or_else(|e| panic!("{:?} rendered as {:?}: {}", line, rendered, e));
            assert_eq!(first, second, "{:?} rendered as {:?}", line, rendered);
        }
    }
}
