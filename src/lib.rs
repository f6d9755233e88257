pub mod locale;
pub mod parser;
pub mod tokenizer;
pub mod types;

// Main API
pub use locale::{LocaleError, LocaleProfile, ProfileRegistry};
pub use parser::{
    FallbackChain, FallbackEntry, Matched, Prefix, classify, convert, convert_with_fallback,
    extract_prefix, parse_number, parse_number_with_profile, parse_prefix, parse_with_fallback,
};
pub use tokenizer::{Separators, SplitOptions, Tokenizer, split};
pub use types::*;
