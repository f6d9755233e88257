//! Property tests for the parsers and the tokenizer.

use number_parse::{
    FailureKind, LocaleProfile, NumberStyle, Tokenizer, extract_prefix, parse_number_with_profile,
};
use proptest::prelude::*;

const DELIMITERS: [char; 5] = [' ', ',', '.', ':', '\t'];

/// Fullwidth, Arabic-Indic and Bangla digits one to five
const FOREIGN_DIGITS: [char; 15] = [
    '\u{FF11}', '\u{FF12}', '\u{FF13}', '\u{FF14}', '\u{FF15}',
    '\u{0661}', '\u{0662}', '\u{0663}', '\u{0664}', '\u{0665}',
    '\u{09E7}', '\u{09E8}', '\u{09E9}', '\u{09EA}', '\u{09EB}',
];

fn styles() -> impl Strategy<Value = NumberStyle> {
    prop_oneof![
        Just(NumberStyle::integer()),
        Just(NumberStyle::float()),
        Just(NumberStyle::number()),
        Just(NumberStyle::currency()),
        Just(NumberStyle::hex_number()),
    ]
}

fn kind_or_value(text: &str, style: &NumberStyle) -> Result<String, FailureKind> {
    parse_number_with_profile(text, style, &LocaleProfile::invariant())
        .map(|n| n.to_string())
        .map_err(|f| f.kind)
}

proptest! {
    #[test]
    fn trimming_does_not_change_the_result(
        style in styles(),
        core in "[-+]?[0-9A-Fa-f,.]{0,12}",
        lead in "[ \t\n]{0,3}",
        trail in "[ \t\r]{0,3}",
    ) {
        let padded = format!("{lead}{core}{trail}");
        prop_assert_eq!(kind_or_value(&padded, &style), kind_or_value(&core, &style));
    }

    #[test]
    fn surrounding_whitespace_rejected_without_allowance(
        core in "[0-9]{1,8}",
        lead in "[ \t]{1,3}",
    ) {
        let style = NumberStyle::integer().with_surrounding_whitespace(false);
        prop_assert!(kind_or_value(&core, &style).is_ok());
        prop_assert_eq!(kind_or_value(&format!("{lead}{core}"), &style), Err(FailureKind::Format));
        prop_assert_eq!(kind_or_value(&format!("{core}{lead}"), &style), Err(FailureKind::Format));
    }

    #[test]
    fn non_ascii_digits_always_rejected(
        style in styles(),
        digits in prop::collection::vec(
            prop::sample::select(FOREIGN_DIGITS.to_vec()),
            1..6,
        ),
        ascii in "[0-9]{0,3}",
    ) {
        let foreign: String = digits.into_iter().collect();
        prop_assert_eq!(kind_or_value(&foreign, &style), Err(FailureKind::Format));
        let mixed = format!("{ascii}{foreign}");
        prop_assert_eq!(kind_or_value(&mixed, &style), Err(FailureKind::Format));
    }

    #[test]
    fn prefix_is_a_prefix(style in styles(), input in "\\PC{0,16}") {
        let prefix = extract_prefix(&input, &style, &LocaleProfile::invariant());
        prop_assert!(input.starts_with(prefix.text));
        prop_assert_eq!(prefix.consumed, prefix.text.chars().count());
    }

    #[test]
    fn join_then_split_round_trips(
        tokens in prop::collection::vec("[a-z0-9]{0,5}", 1..8),
        separator in prop::sample::select(DELIMITERS.to_vec()),
    ) {
        let tokenizer = Tokenizer::on_chars(DELIMITERS);
        let joined = tokens.join(separator.to_string().as_str());
        prop_assert_eq!(tokenizer.split(&joined), tokens);
    }

    #[test]
    fn join_then_split_round_trips_on_strings(
        tokens in prop::collection::vec("[a-z0-9]{0,5}", 1..8),
        separator in prop::sample::select(vec!["<<", "..."]),
    ) {
        let tokenizer = Tokenizer::on_strings(["<<", "..."]);
        let joined = tokens.join(separator);
        prop_assert_eq!(tokenizer.split(&joined), tokens);
    }

    #[test]
    fn split_without_removal_counts_separators(text in "[a-c ,.:\t]{0,24}") {
        let tokens = Tokenizer::on_chars(DELIMITERS).split(&text);
        let separators = text.chars().filter(|c| DELIMITERS.contains(c)).count();
        prop_assert_eq!(tokens.len(), separators + 1);
        prop_assert!(tokens.iter().all(|t| !t.contains(DELIMITERS)));
    }
}
