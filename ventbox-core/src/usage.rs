//! Intended use of the enclosure, which selects the target tuning frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the box will mostly play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageType {
    /// Vocal-heavy, punchy bass. Tuned higher.
    #[default]
    Karaoke,
    /// General music listening. Tuned lower for extension.
    Music,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown usage type '{0}', expected 'karaoke' or 'music'")]
pub struct ParseUsageError(pub String);

impl UsageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageType::Karaoke => "karaoke",
            UsageType::Music => "music",
        }
    }
}

impl fmt::Display for UsageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsageType {
    type Err = ParseUsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "karaoke" => Ok(UsageType::Karaoke),
            "music" => Ok(UsageType::Music),
            _ => Err(ParseUsageError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Karaoke".parse::<UsageType>(), Ok(UsageType::Karaoke));
        assert_eq!(" MUSIC ".parse::<UsageType>(), Ok(UsageType::Music));
        assert_eq!(
            "jazz".parse::<UsageType>(),
            Err(ParseUsageError("jazz".to_string()))
        );
    }

    #[test]
    fn display_matches_parse() {
        for usage in [UsageType::Karaoke, UsageType::Music] {
            assert_eq!(usage.to_string().parse::<UsageType>(), Ok(usage));
        }
        assert_eq!(UsageType::default(), UsageType::Karaoke);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UsageType::Music).unwrap(), "\"music\"");
        let usage: UsageType = serde_json::from_str("\"karaoke\"").unwrap();
        assert_eq!(usage, UsageType::Karaoke);
    }
}
