//! Locale profiles for numeric parsing
//!
//! A profile is the set of concrete separator and symbol choices one
//! formatting convention uses. Profiles are plain values handed to the
//! parsers explicitly; this module only builds them from TOML data and looks
//! them up by name or by Windows locale code.

use std::collections::HashMap;

use thiserror::Error;

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocaleError {
    /// The specified locale was not found
    #[error("Locale not found: {0}")]
    NotFound(String),
    /// The locale data is well-formed TOML but not a valid profile table
    #[error("Error parsing locale data: {0}")]
    Parse(String),
    /// The locale data is not valid TOML
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// Separators and symbols of one number formatting convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleProfile {
    pub decimal_separator: char,
    pub group_separator: char,
    pub negative_sign: String,
    pub positive_sign: String,
    pub currency_symbol: Option<String>,
}

impl Default for LocaleProfile {
    /// The invariant convention: `.` decimal, `,` groups, `-`/`+` signs.
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            negative_sign: "-".to_string(),
            positive_sign: "+".to_string(),
            currency_symbol: None,
        }
    }
}

impl LocaleProfile {
    pub fn invariant() -> Self {
        Self::default()
    }

    pub fn with_decimal_separator(mut self, c: char) -> Self {
        self.decimal_separator = c;
        self
    }

    pub fn with_group_separator(mut self, c: char) -> Self {
        self.group_separator = c;
        self
    }

    pub fn with_negative_sign(mut self, sign: impl Into<String>) -> Self {
        self.negative_sign = sign.into();
        self
    }

    pub fn with_positive_sign(mut self, sign: impl Into<String>) -> Self {
        self.positive_sign = sign.into();
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }
}

/// A named collection of profiles.
///
/// The registry is an ordinary value; build one per configuration source and
/// pass the profiles you need to the parsers.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    locale_codes: HashMap<u32, String>,
    profiles: HashMap<String, LocaleProfile>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the profiles embedded in the crate
    /// (`invariant`, `en-US`, `en-GB`, `fr-FR`, `de-DE`, `de-CH`).
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(include_str!("locale/profiles.toml"))
    }

    /// Build a registry from TOML profile data.
    ///
    /// Each top-level table is a profile keyed by name, with optional keys
    /// `decimal`, `group`, `negative_sign`, `positive_sign` and
    /// `currency_symbol`. A `[base]` table supplies defaults for every other
    /// profile and a `[codes]` table maps locale codes to profile names.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value = toml::from_str(toml_str)?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::Parse("Root is not a table".to_string()))?;

        let mut registry = Self::new();

        let base_profile = match table.get("base") {
            Some(base) => apply_profile_settings(LocaleProfile::default(), base, "base")?,
            None => LocaleProfile::default(),
        };

        for (name, value) in table {
            match name.as_str() {
                "base" => continue,
                "codes" => registry.parse_locale_codes(value)?,
                _ => {
                    let profile = apply_profile_settings(base_profile.clone(), value, name)?;
                    registry.profiles.insert(name.clone(), profile);
                }
            }
        }

        for (code, name) in &registry.locale_codes {
            if !registry.profiles.contains_key(name) {
                return Err(LocaleError::Parse(format!(
                    "Code {code:#06X} refers to unknown locale {name}"
                )));
            }
        }

        Ok(registry)
    }

    fn parse_locale_codes(&mut self, value: &toml::Value) -> Result<()> {
        let table = value
            .as_table()
            .ok_or_else(|| LocaleError::Parse("codes is not a table".to_string()))?;

        for (key, name) in table {
            let code = parse_locale_code(key).ok_or_else(|| {
                LocaleError::Parse(format!("Invalid locale code {key}"))
            })?;
            let name = name.as_str().ok_or_else(|| {
                LocaleError::Parse(format!("Locale name for code {key} is not a string"))
            })?;
            self.locale_codes.insert(code, name.to_string());
        }

        Ok(())
    }

    /// Add or replace a profile
    pub fn insert(&mut self, name: impl Into<String>, profile: LocaleProfile) {
        self.profiles.insert(name.into(), profile);
    }

    /// Get a profile by name (e.g., "en-US", "fr-FR")
    pub fn get(&self, name: &str) -> Option<&LocaleProfile> {
        self.profiles.get(name)
    }

    /// Like [`ProfileRegistry::get`], reporting a missing profile as an error
    pub fn require(&self, name: &str) -> Result<&LocaleProfile> {
        self.get(name)
            .ok_or_else(|| LocaleError::NotFound(name.to_string()))
    }

    /// Resolve a Windows locale code (e.g., 0x0409) to a profile name
    pub fn resolve_locale_code(&self, code: u32) -> Option<&str> {
        self.locale_codes.get(&code).map(|s| s.as_str())
    }

    /// Get a profile by Windows locale code
    pub fn get_by_code(&self, code: u32) -> Option<&LocaleProfile> {
        self.resolve_locale_code(code)
            .and_then(|name| self.get(name))
    }

    /// Profile names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

fn parse_locale_code(key: &str) -> Option<u32> {
    match key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => key.parse().ok(),
    }
}

/// Overlay the settings found in a TOML table onto `profile`
fn apply_profile_settings(
    mut profile: LocaleProfile,
    value: &toml::Value,
    name: &str,
) -> Result<LocaleProfile> {
    let table = value.as_table().ok_or_else(|| {
        LocaleError::Parse(format!("Locale setting {name} is not a table"))
    })?;

    if let Some(decimal) = table.get("decimal") {
        profile.decimal_separator = single_char(decimal, name, "decimal")?;
    }

    if let Some(group) = table.get("group") {
        profile.group_separator = single_char(group, name, "group")?;
    }

    if let Some(sign) = table.get("negative_sign") {
        profile.negative_sign = non_empty_str(sign, name, "negative_sign")?;
    }

    if let Some(sign) = table.get("positive_sign") {
        profile.positive_sign = non_empty_str(sign, name, "positive_sign")?;
    }

    if let Some(currency) = table.get("currency_symbol") {
        profile.currency_symbol = Some(non_empty_str(currency, name, "currency_symbol")?);
    }

    if profile.decimal_separator == profile.group_separator {
        return Err(LocaleError::Parse(format!(
            "{name}: decimal and group separators are both '{}'",
            profile.decimal_separator
        )));
    }

    Ok(profile)
}

fn single_char(value: &toml::Value, name: &str, key: &str) -> Result<char> {
    let mut chars = value.as_str().unwrap_or_default().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LocaleError::Parse(format!(
            "{name}.{key} must be a single character"
        ))),
    }
}

fn non_empty_str(value: &toml::Value, name: &str, key: &str) -> Result<String> {
    match value.as_str() {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(LocaleError::Parse(format!(
            "{name}.{key} must be a non-empty string"
        ))),
    }
}
