//! Claim module - the fundamental unit of a compliance audit

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a claim, drawn from a closed vocabulary.
///
/// The Oracle is instructed to emit one of these five strings; anything
/// else is coerced to `Functionality` rather than rejecting the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Handling of personal or sensitive data
    DataPrivacy,
    /// Authentication, authorization, transport security
    Security,
    /// Behavior the software is claimed to implement
    Functionality,
    /// Deployment, monitoring, backup, availability
    Operational,
    /// Licensing, regulatory, contractual obligations
    Legal,
}

impl Category {
    /// Parse a category string, defaulting to `Functionality` for unknowns.
    ///
    /// One malformed field degrades that field, not the whole record.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "data-privacy" | "data_privacy" => Category::DataPrivacy,
            "security" => Category::Security,
            "functionality" => Category::Functionality,
            "operational" => Category::Operational,
            "legal" => Category::Legal,
            _ => Category::Functionality,
        }
    }

    /// Canonical wire name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DataPrivacy => "data-privacy",
            Category::Security => "security",
            Category::Functionality => "functionality",
            Category::Operational => "operational",
            Category::Legal => "legal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a claim.
///
/// Declaration order doubles as priority order: `Critical` sorts before
/// `Low`, so a plain `sort_by_key` on severity yields priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be addressed before release
    Critical,
    /// Significant risk, address soon
    High,
    /// Moderate risk
    Medium,
    /// Nice to fix
    Low,
}

impl Severity {
    /// Parse a severity string, defaulting to `Medium` for unknowns.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Medium,
        }
    }

    /// Numeric priority, 0 is most urgent.
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }

    /// Canonical wire name for this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// All severities in priority order.
    pub fn all() -> [Severity; 4] {
        [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A claim - an atomic assertion about the codebase under audit
///
/// Claims are immutable once created; every downstream stage produces new
/// records rather than mutating these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier within one extraction (e.g. "claim-3")
    pub id: String,

    /// Document section the claim came from
    pub section: String,

    /// Claim category
    pub category: Category,

    /// Claim severity
    pub severity: Severity,

    /// The assertion text itself
    pub text: String,

    /// Whether the claim can be checked against code at all.
    /// Non-testable claims resolve to N/A without any Oracle call.
    pub testable: bool,
}
