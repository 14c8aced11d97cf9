use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(skip)]
    pub created_at: Option<OffsetDateTime>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::stamped(Role::User, content.into())
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::stamped(Role::Bot, content.into())
    }

    fn stamped(role: Role, content: String) -> Self {
        Self {
            role,
            content,
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_parses_persisted_values() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::bot("hi")).unwrap();
        assert_eq!(json, r#"{"role":"bot","content":"hi"}"#);
    }
}
