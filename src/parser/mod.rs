//! Numeric string parsing module
//!
//! Classification of single code points, prefix extraction, full-string
//! parsing under one style, ordered locale fallback and range-checked integer
//! conversion. Every parser returns a [`ParseOutcome`](crate::types::ParseOutcome).

mod classify;
mod convert;
mod fallback;
mod prefix;
mod styled;

pub use classify::{ascii_digit_value, classify, is_number_whitespace};
pub use convert::{convert, convert_with_fallback};
pub use fallback::{FallbackChain, FallbackEntry, Matched, parse_with_fallback};
pub use prefix::{Prefix, extract_prefix, parse_prefix};
pub use styled::{parse_number, parse_number_with_profile};
