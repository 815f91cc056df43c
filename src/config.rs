//! Page-level settings read from `data-*` attributes on `<body>`.
//!
//! Every value is optional. Anything missing, unparseable or out of bounds
//! falls back to its default so a bad attribute never stops the page from
//! wiring up.

use crate::contact::DEFAULT_CONTACT_ENDPOINT;
use crate::typing::DEFAULT_TYPING_DELAY_MS;
use log::Level;
use url::Url;

const DEFAULT_LOG_LEVEL: Level = Level::Info;
const TYPING_DELAY_MS_BOUNDS: (u32, u32) = (20, 1_000);
const TYPING_WORD_SEPARATOR: char = '|';

pub const DEFAULT_TYPING_WORDS: [&str; 4] = [
    "Software Engineer",
    "Full-Stack Developer",
    "Problem Solver",
    "Tech Enthusiast",
];

pub const CONTACT_ENDPOINT_ATTR: &str = "data-contact-endpoint";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";
pub const TYPING_EFFECT_ATTR: &str = "data-typing-effect";
pub const TYPING_WORDS_ATTR: &str = "data-typing-words";
pub const TYPING_DELAY_ATTR: &str = "data-typing-delay-ms";
pub const CURSOR_EFFECT_ATTR: &str = "data-cursor-effect";
pub const PARALLAX_EFFECT_ATTR: &str = "data-parallax-effect";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact_endpoint: String,
    pub log_level: Level,
    pub typing_effect: bool,
    pub typing_words: Vec<String>,
    pub typing_delay_ms: u32,
    pub cursor_effect: bool,
    pub parallax_effect: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let contact_endpoint = parse_non_empty_string(lookup(CONTACT_ENDPOINT_ATTR))
            .unwrap_or_else(|| DEFAULT_CONTACT_ENDPOINT.to_string());
        let log_level = parse_log_level(lookup(LOG_LEVEL_ATTR), DEFAULT_LOG_LEVEL);
        let typing_effect = parse_flag(lookup(TYPING_EFFECT_ATTR), false);
        let typing_words = parse_word_list(lookup(TYPING_WORDS_ATTR)).unwrap_or_else(|| {
            DEFAULT_TYPING_WORDS
                .iter()
                .map(ToString::to_string)
                .collect()
        });
        let typing_delay_ms = parse_u32_with_bounds(
            lookup(TYPING_DELAY_ATTR),
            DEFAULT_TYPING_DELAY_MS,
            TYPING_DELAY_MS_BOUNDS,
        );
        let cursor_effect = parse_flag(lookup(CURSOR_EFFECT_ATTR), false);
        let parallax_effect = parse_flag(lookup(PARALLAX_EFFECT_ATTR), false);

        Self {
            contact_endpoint,
            log_level,
            typing_effect,
            typing_words,
            typing_delay_ms,
            cursor_effect,
            parallax_effect,
        }
    }
}

/// Resolves a possibly relative endpoint against the page URL. Only
/// http(s) targets are accepted.
pub fn resolve_endpoint(page_url: &str, endpoint: &str) -> Option<Url> {
    let base = Url::parse(page_url).ok()?;
    let resolved = base.join(endpoint.trim()).ok()?;

    if resolved.scheme() == "http" || resolved.scheme() == "https" {
        Some(resolved)
    } else {
        None
    }
}

fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u32_with_bounds(raw: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match parse_non_empty_string(raw)
        .map(|value| value.to_ascii_lowercase())
        .as_deref()
    {
        Some("true" | "1" | "on" | "yes") => true,
        Some("false" | "0" | "off" | "no") => false,
        _ => default,
    }
}

fn parse_log_level(raw: Option<String>, default: Level) -> Level {
    parse_non_empty_string(raw)
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(default)
}

fn parse_word_list(raw: Option<String>) -> Option<Vec<String>> {
    let words = parse_non_empty_string(raw)?
        .split(TYPING_WORD_SEPARATOR)
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    (!words.is_empty()).then_some(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
        let attributes = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();

        SiteConfig::from_lookup(|key| attributes.get(key).cloned())
    }

    #[test]
    fn defaults_keep_decorative_effects_off() {
        let config = SiteConfig::default();

        assert_eq!(config.contact_endpoint, "send_email.php");
        assert_eq!(config.log_level, Level::Info);
        assert!(!config.typing_effect);
        assert!(!config.cursor_effect);
        assert!(!config.parallax_effect);
        assert_eq!(config.typing_words.len(), 4);
        assert_eq!(config.typing_delay_ms, 100);
    }

    #[test]
    fn attributes_override_defaults() {
        let config = config_from(&[
            ("data-contact-endpoint", " /api/contact "),
            ("data-log-level", "DEBUG"),
            ("data-typing-effect", "on"),
            ("data-typing-words", "Rustacean | Writer ||"),
            ("data-typing-delay-ms", "60"),
            ("data-cursor-effect", "true"),
            ("data-parallax-effect", "1"),
        ]);

        assert_eq!(config.contact_endpoint, "/api/contact");
        assert_eq!(config.log_level, Level::Debug);
        assert!(config.typing_effect);
        assert_eq!(config.typing_words, vec!["Rustacean", "Writer"]);
        assert_eq!(config.typing_delay_ms, 60);
        assert!(config.cursor_effect);
        assert!(config.parallax_effect);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("data-contact-endpoint", "   "),
            ("data-log-level", "loud"),
            ("data-typing-effect", "maybe"),
            ("data-typing-words", " | "),
            ("data-typing-delay-ms", "5"),
        ]);

        assert_eq!(config.contact_endpoint, "send_email.php");
        assert_eq!(config.log_level, Level::Info);
        assert!(!config.typing_effect);
        assert_eq!(config.typing_words[0], "Software Engineer");
        assert_eq!(config.typing_delay_ms, 100);
    }

    #[test]
    fn relative_endpoint_resolves_against_page() {
        let resolved = resolve_endpoint("https://example.dev/portfolio/index.html", "send_email.php")
            .expect("relative endpoint");
        assert_eq!(resolved.as_str(), "https://example.dev/portfolio/send_email.php");

        let absolute = resolve_endpoint("https://example.dev/", "http://mail.example.dev/send")
            .expect("absolute endpoint");
        assert_eq!(absolute.host_str(), Some("mail.example.dev"));
    }

    #[test]
    fn non_http_endpoints_are_rejected() {
        assert!(resolve_endpoint("https://example.dev/", "javascript:alert(1)").is_none());
        assert!(resolve_endpoint("not a url", "send_email.php").is_none());
    }
}
