use num_traits::{NumCast, PrimInt};

use crate::locale::LocaleProfile;
use crate::parser::fallback::{FallbackChain, Matched};
use crate::parser::styled::parse_number_with_profile;
use crate::types::*;

/// Parse `text` into the fixed-width integer type `T`.
///
/// Lexical problems are reported as [`FailureKind::Format`] (or
/// [`FailureKind::Empty`]); a well-formed integer outside `T::MIN..=T::MAX`
/// is [`FailureKind::Overflow`]. A fractional part is accepted only when all
/// of its digits are zero.
///
/// # Examples
/// ```
/// use number_parse::{convert, FailureKind, LocaleProfile, NumberStyle};
///
/// let profile = LocaleProfile::invariant();
/// assert_eq!(convert::<i32>("2147483647", &NumberStyle::integer(), &profile), Ok(i32::MAX));
///
/// let err = convert::<i32>("2147483648", &NumberStyle::integer(), &profile).unwrap_err();
/// assert_eq!(err.kind, FailureKind::Overflow);
/// ```
pub fn convert<T: PrimInt>(
    text: &str,
    style: &NumberStyle,
    profile: &LocaleProfile,
) -> ParseOutcome<T> {
    let number = parse_number_with_profile(text, style, profile)?;
    narrow(&number).map_err(|kind| ParseFailure::new(kind, text))
}

/// Like [`convert`], taking the lexical form from the first convention in
/// `chain` that accepts it.
///
/// The range check applies to that first match only; an overflow does not
/// send the input on to later conventions.
pub fn convert_with_fallback<T: PrimInt>(
    text: &str,
    chain: &FallbackChain,
) -> ParseOutcome<Matched<T>> {
    let matched = chain.parse(text)?;
    match narrow(&matched.value) {
        Ok(value) => Ok(Matched {
            profile: matched.profile,
            index: matched.index,
            value,
        }),
        Err(kind) => {
            let attempted = chain.names().into_iter().take(matched.index + 1).collect();
            Err(ParseFailure::new(kind, text).with_attempted_profiles(attempted))
        }
    }
}

fn narrow<T: PrimInt>(number: &Number) -> Result<T, FailureKind> {
    if !number.is_integral() {
        return Err(FailureKind::Format);
    }

    // Anything past u128 is out of range for every primitive target.
    let magnitude = number.integral_magnitude().ok_or(FailureKind::Overflow)?;

    let value = if number.is_negative() {
        0i128
            .checked_sub_unsigned(magnitude)
            .and_then(<T as NumCast>::from)
    } else {
        <T as NumCast>::from(magnitude)
    };

    value.ok_or(FailureKind::Overflow)
}
