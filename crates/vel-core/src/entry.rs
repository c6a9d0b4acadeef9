//! Log entries and their categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag attached to every console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    System,
    Memory,
    Analysis,
    Introspection,
    Error,
    Recovery,
    Scan,
}

impl LogCategory {
    /// Every category, in display-legend order.
    pub const ALL: [Self; 7] = [
        Self::System,
        Self::Memory,
        Self::Analysis,
        Self::Introspection,
        Self::Error,
        Self::Recovery,
        Self::Scan,
    ];

    /// Categories the feed may produce on its own. `Error` lines only come
    /// from the scripted seed.
    pub const GENERATED: [Self; 6] = [
        Self::System,
        Self::Memory,
        Self::Analysis,
        Self::Introspection,
        Self::Recovery,
        Self::Scan,
    ];

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Memory => "memory",
            Self::Analysis => "analysis",
            Self::Introspection => "introspection",
            Self::Error => "error",
            Self::Recovery => "recovery",
            Self::Scan => "scan",
        }
    }

    /// Upper-cased tag as shown inside brackets on the console.
    pub const fn label(self) -> &'static str {
        match self {
            Self::System => "SYSTEM",
            Self::Memory => "MEMORY",
            Self::Analysis => "ANALYSIS",
            Self::Introspection => "INTROSPECTION",
            Self::Error => "ERROR",
            Self::Recovery => "RECOVERY",
            Self::Scan => "SCAN",
        }
    }

    pub const fn is_generated(self) -> bool {
        !matches!(self, Self::Error)
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the console feed.
///
/// Entries are never mutated after they are appended; the feed only hands
/// out shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub category: LogCategory,
    pub message: String,
}

impl LogEntry {
    pub fn new(
        id: u64,
        timestamp: impl Into<String>,
        category: LogCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] {}", self.timestamp, self.category, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_excludes_error() {
        assert!(!LogCategory::GENERATED.contains(&LogCategory::Error));
        assert_eq!(LogCategory::GENERATED.len(), LogCategory::ALL.len() - 1);
        for category in LogCategory::GENERATED {
            assert!(category.is_generated());
        }
        assert!(!LogCategory::Error.is_generated());
    }

    #[test]
    fn test_label_is_uppercase_of_wire_name() {
        for category in LogCategory::ALL {
            assert_eq!(category.label(), category.as_str().to_uppercase());
        }
    }

    #[test]
    fn test_entry_display_line() {
        let entry = LogEntry::new(
            12,
            "2025-10-22 02:49:19",
            LogCategory::Error,
            "Archive node offline",
        );
        assert_eq!(
            entry.to_string(),
            "[2025-10-22 02:49:19] [ERROR] Archive node offline"
        );
    }

    #[test]
    fn test_category_serde_lowercase() {
        let entry = LogEntry::new(1, "t", LogCategory::Introspection, "m");
        let encoded = toml::to_string(&entry).unwrap();
        assert!(encoded.contains("category = \"introspection\""));
    }
}
