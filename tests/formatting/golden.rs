#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use timespan::parsing;

    /// Golden test for canonical rendering
    ///
    /// Each line of tests/golden/canonical.txt is a timespan already in
    /// canonical form, so parsing and rendering it again must reproduce the
    /// line exactly. If this fails either the parser or the formatter is
    /// wrong, or the golden file needs updating after a deliberate change
    /// to the canonical form.
    #[test]
    fn ensure_canonical_rendering() {
        let file = Path::new("tests/golden/canonical.txt");

        assert!(file.exists(), "golden file missing");

        let content = fs::read_to_string(file).expect("Failed to read golden file");

        let mut failures = Vec::new();

        for line in content.lines() {
            let original = line.trim_ascii();
            if original.is_empty() {
                continue;
            }

            let timespan = parsing::parse(original)
                .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", original, e));
            let formatted = timespan.to_string();

            if formatted != original {
                println!("- {}", original);
                println!("+ {}", formatted);
                failures.push(original.to_string());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Golden spans should render unchanged, but {} differed",
                failures.len()
            );
        }
    }
}
