use crate::locale::LocaleProfile;
use crate::types::{CharClass, NumberStyle, Radix};

/// Whitespace a numeric string may be surrounded by: U+0009 to U+000D and U+0020.
pub fn is_number_whitespace(c: char) -> bool {
    matches!(c, '\u{0009}'..='\u{000D}' | ' ')
}

/// Value of an ASCII digit under `radix`.
///
/// Only ASCII digits count. Decimal digits from other scripts (fullwidth,
/// Arabic-Indic, Bangla, ...) are rejected even though Unicode classifies
/// them as decimal digits.
pub fn ascii_digit_value(c: char, radix: Radix) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    c.to_digit(radix.base()).map(|d| d as u8)
}

/// Classify one code point under `style` and `profile`.
///
/// `at_edge` marks a leading or trailing position; whitespace is only ever
/// accepted there, and there it wins over a group separator that is itself a
/// space.
pub fn classify(c: char, style: &NumberStyle, profile: &LocaleProfile, at_edge: bool) -> CharClass {
    if let Some(d) = ascii_digit_value(c, style.radix()) {
        return CharClass::Digit(d);
    }
    if at_edge && style.allows_surrounding_whitespace() && is_number_whitespace(c) {
        return CharClass::Whitespace;
    }
    if style.allows_decimal_point() && c == profile.decimal_separator {
        return CharClass::DecimalPoint;
    }
    if style.allows_thousands_separator() && c == profile.group_separator {
        return CharClass::GroupSeparator;
    }
    if style.allows_leading_sign()
        && (profile.negative_sign.starts_with(c) || profile.positive_sign.starts_with(c))
    {
        return CharClass::Sign;
    }
    CharClass::Invalid
}
