use crate::locale::{LocaleError, LocaleProfile, ProfileRegistry};
use crate::parser::styled::parse_number_with_profile;
use crate::types::*;

/// One convention in a fallback chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackEntry {
    pub name: String,
    pub style: NumberStyle,
    pub profile: LocaleProfile,
}

/// A value together with the convention that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<T> {
    /// Name of the accepting profile
    pub profile: String,
    /// Position of that profile in the chain
    pub index: usize,
    pub value: T,
}

/// An ordered list of conventions tried in sequence until one accepts the input.
///
/// Order belongs to the caller: when several conventions accept a string the
/// first one wins, even if they read it as different values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackChain {
    entries: Vec<FallbackEntry>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a convention to the end of the chain
    pub fn then(
        mut self,
        name: impl Into<String>,
        style: NumberStyle,
        profile: LocaleProfile,
    ) -> Self {
        self.entries.push(FallbackEntry {
            name: name.into(),
            style,
            profile,
        });
        self
    }

    /// Build a chain from registry profiles, all parsed with the same style.
    ///
    /// # Errors
    /// [`LocaleError::NotFound`] for the first name the registry lacks.
    pub fn from_registry(
        registry: &ProfileRegistry,
        names: &[&str],
        style: NumberStyle,
    ) -> Result<Self, LocaleError> {
        names.iter().try_fold(Self::new(), |chain, name| {
            let profile = registry.require(name)?.clone();
            Ok(chain.then(*name, style, profile))
        })
    }

    pub fn entries(&self) -> &[FallbackEntry] {
        &self.entries
    }

    /// Profile names in attempt order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// See [`parse_with_fallback`]
    pub fn parse(&self, text: &str) -> ParseOutcome<Matched<Number>> {
        parse_with_fallback(text, &self.entries)
    }
}

/// Parse `text` under each entry in order and return the first success.
///
/// When every entry rejects the input the failure names all of them, in
/// order. Its kind is [`FailureKind::Empty`] when there was nothing to parse
/// and [`FailureKind::Format`] otherwise.
pub fn parse_with_fallback(text: &str, entries: &[FallbackEntry]) -> ParseOutcome<Matched<Number>> {
    let mut all_empty = true;

    for (index, entry) in entries.iter().enumerate() {
        match parse_number_with_profile(text, &entry.style, &entry.profile) {
            Ok(value) => {
                return Ok(Matched {
                    profile: entry.name.clone(),
                    index,
                    value,
                });
            }
            Err(failure) => all_empty &= failure.kind == FailureKind::Empty,
        }
    }

    let kind = if all_empty && (!entries.is_empty() || text.is_empty()) {
        FailureKind::Empty
    } else {
        FailureKind::Format
    };
    let attempted = entries.iter().map(|e| e.name.clone()).collect();
    Err(ParseFailure::new(kind, text).with_attempted_profiles(attempted))
}
