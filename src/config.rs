//! Start-up configuration.
//!
//! Each key is looked up in the runtime environment (native builds only, after
//! loading `.env`), then in the environment the crate was compiled with, and
//! finally in the bundled `assets/config.env`.

use crate::types::ThemeMode;
use std::collections::HashMap;

/// Bundled config for builds that have no process environment (web)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "VITE_GEMINI_API_KEY"];
const ENDPOINT_VAR: &str = "GEMINI_ENDPOINT";
const COLOR_SCHEME_VAR: &str = "SOFTSELL_COLOR_SCHEME";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_endpoint: String,
    /// Reported color-scheme preference for hosts without `matchMedia`.
    pub color_scheme: Option<ThemeMode>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            color_scheme: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        load_dotenv();
        let bundled = parse_env_file(BUNDLED_CONFIG);
        Self::resolve(|key| {
            runtime_var(key)
                .or_else(|| build_time_var(key))
                .or_else(|| bundled.get(key).cloned())
        })
    }

    /// Builds a config from a lookup function. Blank values count as unset.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let gemini_api_key = API_KEY_VARS.iter().find_map(|key| get(key));
        if gemini_api_key.is_none() {
            tracing::warn!("no Gemini API key configured; chat replies will use the fallback");
        }

        let color_scheme = get(COLOR_SCHEME_VAR).and_then(|raw| match raw.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                tracing::warn!("ignoring {COLOR_SCHEME_VAR}: {err}");
                None
            }
        });

        Self {
            gemini_api_key,
            gemini_endpoint: get(ENDPOINT_VAR)
                .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string()),
            color_scheme,
        }
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // A missing .env is the normal case outside development.
    let _ = dotenvy::dotenv();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_key: &str) -> Option<String> {
    None
}

fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
        "VITE_GEMINI_API_KEY" => option_env!("VITE_GEMINI_API_KEY"),
        "GEMINI_ENDPOINT" => option_env!("GEMINI_ENDPOINT"),
        "SOFTSELL_COLOR_SCHEME" => option_env!("SOFTSELL_COLOR_SCHEME"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parse_env_file_skips_comments_and_blanks() {
        let parsed = parse_env_file("# comment\n\nGEMINI_API_KEY = abc \nBROKEN\nQUOTED=\"x\"\n");
        assert_eq!(parsed.get("GEMINI_API_KEY").map(String::as_str), Some("abc"));
        assert_eq!(parsed.get("QUOTED").map(String::as_str), Some("x"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn bundled_config_has_no_credential() {
        let parsed = parse_env_file(BUNDLED_CONFIG);
        assert!(!parsed.contains_key("GEMINI_API_KEY"));
    }

    #[test]
    fn resolve_defaults_when_nothing_is_set() {
        let config = AppConfig::resolve(|_| None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn resolve_accepts_vite_alias_and_ignores_blank_primary() {
        let config = AppConfig::resolve(lookup_from(&[
            ("GEMINI_API_KEY", "   "),
            ("VITE_GEMINI_API_KEY", "from-vite"),
        ]));
        assert_eq!(config.gemini_api_key.as_deref(), Some("from-vite"));
    }

    #[test]
    fn resolve_reads_endpoint_and_color_scheme() {
        let config = AppConfig::resolve(lookup_from(&[
            ("GEMINI_ENDPOINT", "http://localhost:9999/generate"),
            ("SOFTSELL_COLOR_SCHEME", "dark"),
        ]));
        assert_eq!(config.gemini_endpoint, "http://localhost:9999/generate");
        assert_eq!(config.color_scheme, Some(ThemeMode::Dark));
    }

    #[test]
    fn resolve_ignores_unknown_color_scheme() {
        let config = AppConfig::resolve(lookup_from(&[("SOFTSELL_COLOR_SCHEME", "octane")]));
        assert_eq!(config.color_scheme, None);
    }
}
