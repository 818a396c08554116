//! Priority value object

use serde::{Deserialize, Serialize};

/// Priority of a todo
///
/// Stored as its lowercase string form; unknown input at creation time falls
/// back to `Normal` via [`Priority::from_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "normal" => Some(Self::Normal),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    /// Lenient parse used when creating a todo: absent or unrecognized
    /// priorities become `Normal`
    pub fn from_input(value: Option<&str>) -> Self {
        value.and_then(Self::from_str).unwrap_or(Self::Normal)
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Normal
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_values() {
        for p in [Priority::Low, Priority::Normal, Priority::High, Priority::Urgent] {
            assert_eq!(Priority::from_str(p.as_str()), Some(p));
        }
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(Priority::from_str("critical"), None);
        assert_eq!(Priority::from_str(""), None);
    }

    #[test]
    fn creation_input_falls_back_to_normal() {
        assert_eq!(Priority::from_input(None), Priority::Normal);
        assert_eq!(Priority::from_input(Some("whatever")), Priority::Normal);
        assert_eq!(Priority::from_input(Some("urgent")), Priority::Urgent);
    }
}
