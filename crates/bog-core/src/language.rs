//! # Payment Page Language
//!
//! BOG renders its hosted payment page in a small set of languages.
//! Hints arrive either as an explicit body field or as an
//! `Accept-Language` style header; anything outside the supported set
//! falls back to Georgian.

use serde::{Deserialize, Serialize};

/// Languages the gateway's hosted page supports.
///
/// Unsupported tags (including "ru", which older integrations handled
/// inconsistently) all resolve to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ka,
    En,
}

impl Language {
    pub const DEFAULT: Language = Language::Ka;

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ka => "ka",
            Language::En => "en",
        }
    }

    /// Parse a language hint down to its primary subtag.
    ///
    /// Accepts bare tags ("en"), region tags ("en-US"), and weighted
    /// `Accept-Language` lists ("en-US,en;q=0.9") — only the first
    /// entry is considered.
    pub fn parse(tag: &str) -> Option<Language> {
        let primary = tag
            .split(',')
            .next()?
            .split(';')
            .next()?
            .trim()
            .split(['-', '_'])
            .next()?
            .to_ascii_lowercase();

        match primary.as_str() {
            "ka" => Some(Language::Ka),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Resolve the page language for a request.
    ///
    /// An explicit body field wins over the header hint; when the
    /// explicit field is present but unsupported, the default applies
    /// rather than falling through to the header.
    pub fn resolve(explicit: Option<&str>, header: Option<&str>) -> Language {
        match explicit {
            Some(tag) => Language::parse(tag).unwrap_or(Language::DEFAULT),
            None => header.and_then(Language::parse).unwrap_or(Language::DEFAULT),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primary_subtag() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("en-US"), Some(Language::En));
        assert_eq!(Language::parse("EN_us"), Some(Language::En));
        assert_eq!(Language::parse("ka-GE"), Some(Language::Ka));
    }

    #[test]
    fn test_parse_accept_language_list() {
        assert_eq!(Language::parse("en-US,en;q=0.9"), Some(Language::En));
        assert_eq!(Language::parse("ka,en;q=0.8"), Some(Language::Ka));
    }

    #[test]
    fn test_unsupported_tags_resolve_to_default() {
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::resolve(None, Some("fr")), Language::Ka);
        // "ru" is treated like any other unsupported tag
        assert_eq!(Language::resolve(Some("ru"), None), Language::Ka);
        assert_eq!(Language::resolve(None, None), Language::Ka);
    }

    #[test]
    fn test_explicit_field_beats_header() {
        assert_eq!(Language::resolve(Some("ka"), Some("en")), Language::Ka);
        assert_eq!(
            Language::resolve(None, Some("en-US,en;q=0.9")),
            Language::En
        );
    }
}
