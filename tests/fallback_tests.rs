#[cfg(test)]
mod tests {
    use number_parse::{
        FailureKind, FallbackChain, LocaleProfile, NumberStyle, ProfileRegistry,
        parse_with_fallback,
    };
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    #[derive(Debug, Deserialize)]
    struct TestCase {
        input: String,
        profiles: Vec<String>,
        matched: Option<String>,
        value: Option<f64>,
    }

    #[derive(Debug, Deserialize)]
    struct TestCases {
        cases: Vec<TestCase>,
    }

    fn chain(names: &[&str]) -> FallbackChain {
        let registry = ProfileRegistry::builtin().unwrap();
        FallbackChain::from_registry(&registry, names, NumberStyle::number()).unwrap()
    }

    fn run_test_case(case: &TestCase) -> Result<(), String> {
        let names: Vec<&str> = case.profiles.iter().map(String::as_str).collect();
        let result = chain(&names).parse(&case.input);

        match (&case.matched, result) {
            (Some(expected), Ok(matched)) => {
                if &matched.profile != expected || Some(matched.value.to_f64()) != case.value {
                    return Err(format!(
                        "'{}': expected {expected} -> {:?}, got {} -> {}",
                        case.input, case.value, matched.profile, matched.value
                    ));
                }
            }
            (None, Err(failure)) => {
                if failure.kind != FailureKind::Format
                    || failure.attempted_profiles != case.profiles
                {
                    return Err(format!("'{}': unexpected failure {failure}", case.input));
                }
            }
            (expected, actual) => {
                return Err(format!(
                    "'{}': expected {expected:?}, got {actual:?}",
                    case.input
                ));
            }
        }
        Ok(())
    }

    #[test]
    fn test_fallback_cases() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fallback-cases.toml");
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let suite: TestCases = toml::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));

        let failures: Vec<String> = suite
            .cases
            .iter()
            .filter_map(|case| run_test_case(case).err())
            .collect();

        assert!(failures.is_empty(), "{}", failures.join("\n"));
    }

    #[test]
    fn test_first_match_wins() {
        let us_first = chain(&["en-US", "de-DE"]).parse("1.304").unwrap();
        assert_eq!(us_first.profile, "en-US");
        assert_eq!(us_first.index, 0);
        assert_eq!(us_first.value.to_f64(), 1.304);

        let de_first = chain(&["de-DE", "en-US"]).parse("1.304").unwrap();
        assert_eq!(de_first.profile, "de-DE");
        assert_eq!(de_first.value.to_f64(), 1304.0);
    }

    #[test]
    fn test_single_acceptor_independent_of_order() {
        for names in [["en-US", "fr-FR"], ["fr-FR", "en-US"]] {
            let matched = chain(&names).parse("1 304,16").unwrap();
            assert_eq!(matched.profile, "fr-FR");
            assert_eq!(matched.value.to_f64(), 1304.16);
        }
    }

    #[test]
    fn test_failure_lists_every_profile_in_order() {
        let err = chain(&["fr-FR", "en-US", "de-DE"]).parse("Ae9f").unwrap_err();
        assert_eq!(err.kind, FailureKind::Format);
        assert_eq!(err.input, "Ae9f");
        assert_eq!(err.attempted_profiles, ["fr-FR", "en-US", "de-DE"]);
        assert_eq!(
            err.to_string(),
            "input string was not in a correct format: 'Ae9f' (tried fr-FR, en-US, de-DE)"
        );
    }

    #[test]
    fn test_empty_input() {
        let err = chain(&["en-US", "fr-FR"]).parse("").unwrap_err();
        assert_eq!(err.kind, FailureKind::Empty);
        assert_eq!(err.attempted_profiles, ["en-US", "fr-FR"]);

        let err = parse_with_fallback("12", &[]).unwrap_err();
        assert_eq!(err.kind, FailureKind::Format);
        assert!(err.attempted_profiles.is_empty());
    }

    #[test]
    fn test_per_entry_styles() {
        let profile = LocaleProfile::invariant();
        let chain = FallbackChain::new()
            .then("decimal", NumberStyle::integer(), profile.clone())
            .then("hex", NumberStyle::hex_number(), profile);

        assert_eq!(chain.parse("42").unwrap().profile, "decimal");
        let hex = chain.parse("2A").unwrap();
        assert_eq!(hex.profile, "hex");
        assert_eq!(hex.index, 1);
        assert_eq!(hex.value.integral_magnitude(), Some(42));
    }

    #[test]
    fn test_unknown_profile() {
        let registry = ProfileRegistry::builtin().unwrap();
        let names = ["en-US", "xx-XX"];
        let err = FallbackChain::from_registry(&registry, &names, NumberStyle::number())
            .unwrap_err();
        assert_eq!(err.to_string(), "Locale not found: xx-XX");
    }
}
