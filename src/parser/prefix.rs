use crate::locale::LocaleProfile;
use crate::parser::classify::classify;
use crate::parser::styled::parse_number_with_profile;
use crate::types::{CharClass, FailureKind, Number, NumberStyle, ParseFailure, ParseOutcome};

/// The longest lexically valid leading part of a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix<'a> {
    /// The accepted text, borrowed from the input
    pub text: &'a str,
    /// Number of code points accepted
    pub consumed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Leading,
    /// After a currency symbol that precedes the digits
    Currency { signed: bool },
    Signed,
    Integral,
    Fraction,
    Trailing,
}

/// Walks the input one lexical element at a time
struct Scanner<'p> {
    style: &'p NumberStyle,
    profile: &'p LocaleProfile,
    state: ScanState,
    seen_currency: bool,
}

/// Accumulate the longest prefix of `input` that `style` accepts.
///
/// Scanning stops at the first code point that is not acceptable in the
/// current state; nothing after it is examined. This never fails: the prefix
/// may be empty, or incomplete such as a lone sign.
///
/// # Examples
/// ```
/// use number_parse::{extract_prefix, LocaleProfile, NumberStyle};
///
/// let style = NumberStyle::hex_number();
/// let prefix = extract_prefix("  10FFxxx", &style, &LocaleProfile::invariant());
/// assert_eq!(prefix.text, "  10FF");
/// assert_eq!(prefix.consumed, 6);
/// ```
pub fn extract_prefix<'a>(
    input: &'a str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> Prefix<'a> {
    let mut scanner = Scanner {
        style,
        profile,
        state: ScanState::Leading,
        seen_currency: false,
    };
    let mut end = 0;
    let mut consumed = 0;

    while let Some(c) = input[end..].chars().next() {
        let Some(matched) = scanner.step(&input[end..], c) else {
            break;
        };
        end += matched.len();
        consumed += matched.chars().count();
    }

    Prefix {
        text: &input[..end],
        consumed,
    }
}

/// Extract the prefix of `input` and parse it under the same style.
///
/// A non-empty input without any acceptable prefix is a
/// [`FailureKind::Format`] failure; failures report the original input.
pub fn parse_prefix(
    input: &str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> ParseOutcome<Number> {
    let prefix = extract_prefix(input, style, profile);
    if prefix.text.is_empty() && !input.is_empty() {
        return Err(ParseFailure::new(FailureKind::Format, input));
    }
    parse_number_with_profile(prefix.text, style, profile).map_err(|mut failure| {
        failure.input = input.to_string();
        failure
    })
}

impl Scanner<'_> {
    /// Advance over the element at the start of `rest`, returning its text
    fn step<'a>(&mut self, rest: &'a str, c: char) -> Option<&'a str> {
        let state = self.state;
        let single = &rest[..c.len_utf8()];
        let interior = classify(c, self.style, self.profile, false);
        let edge_whitespace =
            classify(c, self.style, self.profile, true) == CharClass::Whitespace;

        let (next, matched) = match state {
            ScanState::Leading => {
                if edge_whitespace {
                    (ScanState::Leading, single)
                } else if let Some(symbol) = self.currency_at(rest) {
                    (ScanState::Currency { signed: false }, symbol)
                } else {
                    match interior {
                        CharClass::Digit(_) => (ScanState::Integral, single),
                        CharClass::DecimalPoint => (ScanState::Fraction, single),
                        CharClass::Sign => (ScanState::Signed, sign_at(rest, self.profile)?),
                        _ => return None,
                    }
                }
            }
            ScanState::Currency { signed } => match interior {
                _ if edge_whitespace => (ScanState::Currency { signed }, single),
                CharClass::Digit(_) => (ScanState::Integral, single),
                CharClass::DecimalPoint => (ScanState::Fraction, single),
                CharClass::Sign if !signed => (ScanState::Signed, sign_at(rest, self.profile)?),
                _ => return None,
            },
            ScanState::Signed => match interior {
                CharClass::Digit(_) => (ScanState::Integral, single),
                CharClass::DecimalPoint => (ScanState::Fraction, single),
                _ => (ScanState::Currency { signed: true }, self.currency_at(rest)?),
            },
            ScanState::Integral => match interior {
                CharClass::Digit(_) | CharClass::GroupSeparator => (ScanState::Integral, single),
                CharClass::DecimalPoint => (ScanState::Fraction, single),
                _ => self.trailing(rest, single, edge_whitespace)?,
            },
            ScanState::Fraction => match interior {
                CharClass::Digit(_) => (ScanState::Fraction, single),
                _ => self.trailing(rest, single, edge_whitespace)?,
            },
            ScanState::Trailing => self.trailing(rest, single, edge_whitespace)?,
        };

        if matches!(next, ScanState::Currency { .. }) {
            self.seen_currency = true;
        }
        self.state = next;
        Some(matched)
    }

    /// Whitespace or a not yet seen currency symbol after the digits
    fn trailing<'a>(
        &mut self,
        rest: &'a str,
        single: &'a str,
        edge_whitespace: bool,
    ) -> Option<(ScanState, &'a str)> {
        if edge_whitespace {
            return Some((ScanState::Trailing, single));
        }
        let symbol = self.currency_at(rest)?;
        self.seen_currency = true;
        Some((ScanState::Trailing, symbol))
    }

    /// The currency symbol at the start of `rest`, if the style takes one
    /// and none has been accepted yet
    fn currency_at<'a>(&self, rest: &'a str) -> Option<&'a str> {
        if self.seen_currency || !self.style.allows_currency_symbol() {
            return None;
        }
        let symbol = self.profile.currency_symbol.as_deref()?;
        (!symbol.is_empty() && rest.starts_with(symbol)).then(|| &rest[..symbol.len()])
    }
}

/// The full sign literal at the start of `rest`, longest first
fn sign_at<'a>(rest: &'a str, profile: &LocaleProfile) -> Option<&'a str> {
    let mut signs = [profile.negative_sign.as_str(), profile.positive_sign.as_str()];
    signs.sort_by_key(|sign| std::cmp::Reverse(sign.len()));
    signs
        .into_iter()
        .find(|sign| !sign.is_empty() && rest.starts_with(sign))
        .map(|sign| &rest[..sign.len()])
}
