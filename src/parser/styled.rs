use winnow::combinator::{opt, preceded};
use winnow::error::{ContextError, ErrMode, ParserError};
use winnow::token::{literal, take_while};
use winnow::{ModalResult, Parser};

use crate::locale::LocaleProfile;
use crate::parser::classify::{classify, is_number_whitespace};
use crate::types::*;

/// Parse a complete numeric string under `style`, using the invariant profile.
///
/// # Examples
/// ```
/// use number_parse::{parse_number, NumberStyle};
///
/// let n = parse_number(" -105 ", &NumberStyle::integer()).unwrap();
/// assert_eq!(n.to_f64(), -105.0);
/// ```
pub fn parse_number(text: &str, style: &NumberStyle) -> ParseOutcome<Number> {
    parse_number_with_profile(text, style, &LocaleProfile::invariant())
}

/// Parse a complete numeric string under `style`, reading separators and signs
/// from `profile`.
///
/// The whole string must match; trailing characters the style does not
/// accept are a [`FailureKind::Format`] failure. Use
/// [`extract_prefix`](crate::parser::extract_prefix) to tolerate them.
///
/// # Arguments
/// * `text` - The string to interpret
/// * `style` - Which lexical elements are allowed
/// * `profile` - Decimal separator, group separator, signs and currency symbol
///
/// # Returns
/// * `ParseOutcome<Number>` - The parsed number or the failure kind
pub fn parse_number_with_profile(
    text: &str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> ParseOutcome<Number> {
    let mut input = trim_surrounding_whitespace(text, style, profile);
    if input.is_empty() {
        return Err(ParseFailure::new(FailureKind::Empty, text));
    }

    let number = parse_number_body(&mut input, style, profile)
        .map_err(|_| ParseFailure::new(FailureKind::Format, text))?;

    if !input.is_empty() {
        return Err(ParseFailure::new(FailureKind::Format, text));
    }

    Ok(number)
}

/// Strip leading and trailing whitespace runs if the style allows them
pub(crate) fn trim_surrounding_whitespace<'s>(
    text: &'s str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> &'s str {
    text.trim_matches(|c: char| classify(c, style, profile, true) == CharClass::Whitespace)
}

fn parse_number_body(
    input: &mut &str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> ModalResult<Number> {
    let mut has_currency = parse_leading_currency(input, style, profile)?;
    let negative = parse_sign(input, style, profile)?;
    if !has_currency {
        has_currency = parse_leading_currency(input, style, profile)?;
    }

    let integral = parse_integral(input, style, profile)?;
    let fractional = parse_fraction(input, style, profile)?;

    if integral.is_empty() && fractional.is_none_or(str::is_empty) {
        return Err(backtrack(input));
    }

    if !has_currency {
        parse_trailing_currency(input, style, profile)?;
    }

    Ok(Number::new(
        negative,
        style.radix(),
        &integral,
        fractional.unwrap_or_default(),
    ))
}

fn backtrack(input: &&str) -> ErrMode<ContextError> {
    ErrMode::Backtrack(ContextError::from_input(input))
}

fn currency_symbol<'p>(style: &NumberStyle, profile: &'p LocaleProfile) -> Option<&'p str> {
    if style.allows_currency_symbol() {
        profile.currency_symbol.as_deref().filter(|s| !s.is_empty())
    } else {
        None
    }
}

/// Currency symbol, optionally followed by whitespace
fn parse_leading_currency(
    input: &mut &str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> ModalResult<bool> {
    let Some(symbol) = currency_symbol(style, profile) else {
        return Ok(false);
    };
    let spacing = |c: char| style.allows_surrounding_whitespace() && is_number_whitespace(c);
    opt((literal(symbol), take_while(0.., spacing)))
        .map(|matched| matched.is_some())
        .parse_next(input)
}

/// Currency symbol, optionally preceded by whitespace
fn parse_trailing_currency(
    input: &mut &str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> ModalResult<bool> {
    let Some(symbol) = currency_symbol(style, profile) else {
        return Ok(false);
    };
    let spacing = |c: char| style.allows_surrounding_whitespace() && is_number_whitespace(c);
    opt((take_while(0.., spacing), literal(symbol)))
        .map(|matched| matched.is_some())
        .parse_next(input)
}

/// Returns true for the negative sign
fn parse_sign(input: &mut &str, style: &NumberStyle, profile: &LocaleProfile) -> ModalResult<bool> {
    let starts_with_sign = input
        .chars()
        .next()
        .is_some_and(|c| classify(c, style, profile, false) == CharClass::Sign);
    if !starts_with_sign {
        return Ok(false);
    }

    // The longer sign goes first so "--" is not read as "-" followed by garbage.
    let mut signs = [
        (profile.negative_sign.as_str(), true),
        (profile.positive_sign.as_str(), false),
    ];
    signs.sort_by_key(|(sign, _)| std::cmp::Reverse(sign.len()));

    for (sign, negative) in signs {
        if !sign.is_empty() && parse_symbol(input, sign)?.is_some() {
            return Ok(negative);
        }
    }
    Err(backtrack(input))
}

fn parse_symbol<'s>(input: &mut &'s str, symbol: &str) -> ModalResult<Option<&'s str>> {
    opt(literal(symbol)).parse_next(input)
}

/// Integral digits with group separators removed; empty if there are none
fn parse_integral(
    input: &mut &str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> ModalResult<String> {
    let start = *input;
    let first_run = parse_digit_run(input, style, profile)?;
    if first_run.is_empty() || !style.allows_thousands_separator() {
        return Ok(first_run.to_string());
    }

    let grouped_tail = parse_grouped_digits(input, style, profile)?;
    let consumed = &start[..first_run.len() + grouped_tail.len()];

    if style.grouping() == Grouping::Strict
        && !has_canonical_groups(consumed, profile.group_separator)
    {
        *input = start;
        return Err(backtrack(input));
    }

    Ok(consumed
        .chars()
        .filter(|&c| c != profile.group_separator)
        .collect())
}

fn parse_digit_run<'s>(
    input: &mut &'s str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> ModalResult<&'s str> {
    take_while(0.., |c: char| {
        matches!(classify(c, style, profile, false), CharClass::Digit(_))
    })
    .parse_next(input)
}

/// Digits and group separators following the first integral digit
fn parse_grouped_digits<'s>(
    input: &mut &'s str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> ModalResult<&'s str> {
    take_while(0.., |c: char| {
        matches!(
            classify(c, style, profile, false),
            CharClass::Digit(_) | CharClass::GroupSeparator
        )
    })
    .parse_next(input)
}

/// Either no separators, or a 1-3 digit leading group followed by 3 digit groups
fn has_canonical_groups(digits: &str, separator: char) -> bool {
    let mut groups = digits.split(separator);
    let leading_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) || !digits.contains(separator));
    leading_ok && groups.all(|g| g.len() == 3)
}

/// Decimal separator followed by any number of digits
fn parse_fraction<'s>(
    input: &mut &'s str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> ModalResult<Option<&'s str>> {
    if !style.allows_decimal_point() {
        return Ok(None);
    }
    opt(preceded(
        literal(profile.decimal_separator),
        take_while(0.., |c: char| {
            matches!(classify(c, style, profile, false), CharClass::Digit(_))
        }),
    ))
    .parse_next(input)
}
