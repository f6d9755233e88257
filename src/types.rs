//! Type definitions for numeric string interpretation
//!
//! This module defines the value types shared by the parsers: the style that
//! describes which lexical elements a numeric string may contain, the parsed
//! number itself, and the failure taxonomy every parser reports through.

use std::fmt;

use thiserror::Error;

/// Numeric base of the digits a style accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    /// ASCII `0`-`9`
    #[default]
    Decimal,
    /// ASCII `0`-`9`, `A`-`F` and `a`-`f`
    Hex,
}

impl Radix {
    /// The base as an integer (10 or 16)
    pub fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

/// How strictly group separators are validated in the integral part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// A group separator is accepted anywhere after the first integral digit
    #[default]
    Lenient,
    /// Either no separators at all, or a leading group of 1-3 digits followed
    /// by groups of exactly 3 digits
    Strict,
}

/// Which lexical elements a numeric string may contain.
///
/// A hexadecimal style never allows a sign, a decimal point, group separators
/// or a currency symbol. The builder methods keep that invariant: enabling one
/// of those elements on a hex style has no effect, and switching a style to
/// hex clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberStyle {
    allow_thousands_separator: bool,
    allow_leading_sign: bool,
    allow_decimal_point: bool,
    allow_surrounding_whitespace: bool,
    allow_currency_symbol: bool,
    radix: Radix,
    grouping: Grouping,
}

impl NumberStyle {
    /// Digits only
    pub fn none() -> Self {
        Self::default()
    }

    /// Surrounding whitespace and a leading sign
    pub fn integer() -> Self {
        Self::none()
            .with_surrounding_whitespace(true)
            .with_leading_sign(true)
    }

    /// [`NumberStyle::integer`] plus a decimal point
    pub fn float() -> Self {
        Self::integer().with_decimal_point(true)
    }

    /// [`NumberStyle::float`] plus group separators
    pub fn number() -> Self {
        Self::float().with_thousands_separator(true)
    }

    /// [`NumberStyle::number`] plus the profile's currency symbol
    pub fn currency() -> Self {
        Self::number().with_currency_symbol(true)
    }

    /// Surrounding whitespace and hexadecimal digits
    pub fn hex_number() -> Self {
        Self::none()
            .with_surrounding_whitespace(true)
            .with_radix(Radix::Hex)
    }

    pub fn with_thousands_separator(mut self, allow: bool) -> Self {
        self.allow_thousands_separator = allow;
        self.normalized()
    }

    pub fn with_leading_sign(mut self, allow: bool) -> Self {
        self.allow_leading_sign = allow;
        self.normalized()
    }

    pub fn with_decimal_point(mut self, allow: bool) -> Self {
        self.allow_decimal_point = allow;
        self.normalized()
    }

    pub fn with_surrounding_whitespace(mut self, allow: bool) -> Self {
        self.allow_surrounding_whitespace = allow;
        self
    }

    pub fn with_currency_symbol(mut self, allow: bool) -> Self {
        self.allow_currency_symbol = allow;
        self.normalized()
    }

    pub fn with_radix(mut self, radix: Radix) -> Self {
        self.radix = radix;
        self.normalized()
    }

    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn allows_thousands_separator(&self) -> bool {
        self.allow_thousands_separator
    }

    pub fn allows_leading_sign(&self) -> bool {
        self.allow_leading_sign
    }

    pub fn allows_decimal_point(&self) -> bool {
        self.allow_decimal_point
    }

    pub fn allows_surrounding_whitespace(&self) -> bool {
        self.allow_surrounding_whitespace
    }

    pub fn allows_currency_symbol(&self) -> bool {
        self.allow_currency_symbol
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    fn normalized(mut self) -> Self {
        if self.radix == Radix::Hex {
            self.allow_thousands_separator = false;
            self.allow_leading_sign = false;
            self.allow_decimal_point = false;
            self.allow_currency_symbol = false;
        }
        self
    }
}

/// Classification of a single code point under a style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// A digit with its value (0-9, or 0-15 for hex)
    Digit(u8),
    /// First code point of the profile's negative or positive sign
    Sign,
    /// The profile's decimal separator
    DecimalPoint,
    /// The profile's group separator
    GroupSeparator,
    /// Whitespace at a leading or trailing position
    Whitespace,
    /// Anything the style does not accept here
    Invalid,
}

/// A parsed number, kept as digit strings so no precision is lost before the
/// caller picks a target representation.
///
/// Digits are normalized: the integral part has no leading zeros, the
/// fractional part has no trailing zeros, hex digits are upper case and zero
/// is never negative. Two numbers are therefore equal exactly when they denote
/// the same value in the same radix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    negative: bool,
    radix: Radix,
    integral: String,
    fractional: String,
}

impl Number {
    /// Build a number from raw ASCII digit strings.
    pub fn new(negative: bool, radix: Radix, integral: &str, fractional: &str) -> Self {
        let integral = integral.trim_start_matches('0').to_ascii_uppercase();
        let fractional = fractional.trim_end_matches('0').to_ascii_uppercase();
        let negative = negative && !(integral.is_empty() && fractional.is_empty());
        Self {
            negative,
            radix,
            integral,
            fractional,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Integral digits without leading zeros (empty for zero)
    pub fn integral_digits(&self) -> &str {
        &self.integral
    }

    /// Fractional digits without trailing zeros
    pub fn fractional_digits(&self) -> &str {
        &self.fractional
    }

    /// Whether the value has no fractional component
    pub fn is_integral(&self) -> bool {
        self.fractional.is_empty()
    }

    /// Magnitude of the integral part, or `None` if it does not fit in a `u128`.
    pub fn integral_magnitude(&self) -> Option<u128> {
        let base = u128::from(self.radix.base());
        self.integral.chars().try_fold(0u128, |acc, c| {
            let digit = u128::from(c.to_digit(self.radix.base())?);
            acc.checked_mul(base)?.checked_add(digit)
        })
    }

    /// Nearest `f64` to the value
    pub fn to_f64(&self) -> f64 {
        let magnitude = match self.radix {
            Radix::Decimal => {
                let integral = if self.integral.is_empty() {
                    "0"
                } else {
                    self.integral.as_str()
                };
                format!("{integral}.{}", self.fractional)
                    .parse::<f64>()
                    .unwrap_or(f64::NAN)
            }
            Radix::Hex => self
                .integral
                .chars()
                .filter_map(|c| c.to_digit(16))
                .fold(0.0, |acc, d| acc * 16.0 + f64::from(d)),
        };
        if self.negative { -magnitude } else { magnitude }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if self.radix == Radix::Hex {
            f.write_str("0x")?;
        }
        if self.integral.is_empty() {
            f.write_str("0")?;
        } else {
            f.write_str(&self.integral)?;
        }
        if !self.fractional.is_empty() {
            write!(f, ".{}", self.fractional)?;
        }
        Ok(())
    }
}

/// Why a string could not be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// No characters to interpret
    #[error("input string was empty")]
    Empty,
    /// Characters present but inconsistent with every attempted grammar
    #[error("input string was not in a correct format")]
    Format,
    /// Grammar satisfied, magnitude outside the target range
    #[error("value was either too large or too small for the target type")]
    Overflow,
}

/// A failed interpretation, with enough context to reproduce it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: '{input}'{}", render_attempts(.attempted_profiles))]
pub struct ParseFailure {
    /// The failure category callers branch on
    pub kind: FailureKind,
    /// The text exactly as it was handed to the parser
    pub input: String,
    /// Profile names tried, in attempt order (empty for single-style parses)
    pub attempted_profiles: Vec<String>,
}

impl ParseFailure {
    pub fn new(kind: FailureKind, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
            attempted_profiles: Vec::new(),
        }
    }

    pub fn with_attempted_profiles(mut self, profiles: Vec<String>) -> Self {
        self.attempted_profiles = profiles;
        self
    }
}

fn render_attempts(profiles: &[String]) -> String {
    if profiles.is_empty() {
        String::new()
    } else {
        format!(" (tried {})", profiles.join(", "))
    }
}

/// Success value or a typed failure; parsers never panic
pub type ParseOutcome<T> = Result<T, ParseFailure>;
