//! Parses a few strings with an en-US then fr-FR fallback chain and converts
//! a few more to `i32`, reporting every failure with its kind.

use number_parse::{
    FailureKind, FallbackChain, LocaleError, NumberStyle, ProfileRegistry, convert_with_fallback,
};

fn main() -> Result<(), LocaleError> {
    let registry = ProfileRegistry::builtin()?;
    let chain =
        FallbackChain::from_registry(&registry, &["en-US", "fr-FR"], NumberStyle::number())?;

    let values = [
        "1,304.16", "$1,456.78", "1,094", "152", "123,45 €", "1 304,16", "Ae9f",
    ];
    for value in values {
        match chain.parse(value) {
            Ok(matched) => println!("{}: {} --> {}", matched.profile, value, matched.value),
            Err(failure) => eprintln!("{failure}"),
        }
    }

    println!();

    for input in ["473", "2147483647", "-1000", "2,147,483,648", "12 apples", ""] {
        match convert_with_fallback::<i32>(input, &chain) {
            Ok(matched) if matched.value < i32::MAX => {
                println!("The new value is {}", matched.value + 1)
            }
            Ok(_) => println!("{input} cannot be incremented beyond its current value"),
            Err(failure) => match failure.kind {
                FailureKind::Overflow => eprintln!("The number cannot fit in an Int32: {failure}"),
                FailureKind::Format | FailureKind::Empty => {
                    eprintln!("Input string is not a sequence of digits: {failure}")
                }
            },
        }
    }

    Ok(())
}
