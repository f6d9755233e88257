//! Delimiter-based tokenizer
//!
//! Splits text on a set of single-character separators or an ordered list of
//! literal string separators. Every separator instance ends a token, so
//! consecutive separators produce empty tokens unless removal is requested.

/// What ends a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Separators {
    /// Any one of these code points. An empty set splits on whitespace.
    Chars(Vec<char>),
    /// Literal strings, tried in order; the first one found at a position
    /// wins. Empty strings are ignored, and a set with no non-empty string
    /// splits on whitespace.
    Strings(Vec<String>),
}

impl Separators {
    /// Byte length of the separator starting at `rest`, if any
    fn match_at(&self, rest: &str) -> Option<usize> {
        match self {
            Separators::Chars(chars) => {
                let c = rest.chars().next()?;
                let is_separator = if chars.is_empty() {
                    c.is_whitespace()
                } else {
                    chars.contains(&c)
                };
                is_separator.then(|| c.len_utf8())
            }
            Separators::Strings(strings) => {
                let mut candidates = strings.iter().filter(|s| !s.is_empty()).peekable();
                if candidates.peek().is_none() {
                    let c = rest.chars().next()?;
                    return c.is_whitespace().then(|| c.len_utf8());
                }
                candidates
                    .find(|s| rest.starts_with(s.as_str()))
                    .map(|s| s.len())
            }
        }
    }
}

/// Post-processing applied to each token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitOptions {
    /// Drop empty tokens, including those before a leading or after a
    /// trailing separator
    pub remove_empty: bool,
    /// Trim surrounding whitespace from every token (before the empty check)
    pub trim_entries: bool,
}

/// A reusable separator set plus split options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    separators: Separators,
    options: SplitOptions,
}

impl Tokenizer {
    pub fn new(separators: Separators) -> Self {
        Self {
            separators,
            options: SplitOptions::default(),
        }
    }

    /// Split on any of `chars`
    pub fn on_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self::new(Separators::Chars(chars.into_iter().collect()))
    }

    /// Split on literal strings, in priority order
    pub fn on_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Separators::Strings(strings.into_iter().map(Into::into).collect()))
    }

    pub fn remove_empty(mut self, remove: bool) -> Self {
        self.options.remove_empty = remove;
        self
    }

    pub fn trim_entries(mut self, trim: bool) -> Self {
        self.options.trim_entries = trim;
        self
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    pub fn options(&self) -> SplitOptions {
        self.options
    }

    /// See [`split`]
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        split(text, &self.separators, self.options)
    }
}

/// Split `text` into tokens.
///
/// # Examples
/// ```
/// use number_parse::{split, Separators, SplitOptions};
///
/// let seps = Separators::Strings(vec!["<<".into(), "...".into()]);
/// let options = SplitOptions { remove_empty: true, ..Default::default() };
/// assert_eq!(split("one<<two......three<four", &seps, options), ["one", "two", "three<four"]);
/// ```
pub fn split<'t>(text: &'t str, separators: &Separators, options: SplitOptions) -> Vec<&'t str> {
    let mut tokens = Vec::new();
    let mut emit = |token: &'t str| {
        let token = if options.trim_entries { token.trim() } else { token };
        if !(options.remove_empty && token.is_empty()) {
            tokens.push(token);
        }
    };

    let mut start = 0;
    let mut pos = 0;
    while let Some(c) = text[pos..].chars().next() {
        match separators.match_at(&text[pos..]) {
            Some(len) => {
                emit(&text[start..pos]);
                pos += len;
                start = pos;
            }
            None => pos += c.len_utf8(),
        }
    }
    emit(&text[start..]);

    tokens
}
