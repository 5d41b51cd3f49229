//! Remediation tasks generated for failed or partial claims

use crate::claim::{Category, Severity};
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// Kind of change a remediation task calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemediationAction {
    /// Add new code or configuration
    Add,
    /// Modify existing code
    Modify,
    /// Remove code or configuration
    Remove,
    /// Change settings without touching code
    Configure,
}

impl RemediationAction {
    /// Parse an action string, defaulting to `Modify` for unknowns.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "add" => RemediationAction::Add,
            "modify" => RemediationAction::Modify,
            "remove" => RemediationAction::Remove,
            "configure" => RemediationAction::Configure,
            _ => RemediationAction::Modify,
        }
    }

    /// Canonical wire name for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            RemediationAction::Add => "add",
            RemediationAction::Modify => "modify",
            RemediationAction::Remove => "remove",
            RemediationAction::Configure => "configure",
        }
    }
}

/// Rough effort estimate for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimatedEffort {
    /// Minutes
    Trivial,
    /// Under a day
    Small,
    /// A few days
    Medium,
    /// A week or more
    Large,
}

impl EstimatedEffort {
    /// Parse an effort string, defaulting to `Medium` for unknowns.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "trivial" => EstimatedEffort::Trivial,
            "small" => EstimatedEffort::Small,
            "medium" => EstimatedEffort::Medium,
            "large" => EstimatedEffort::Large,
            _ => EstimatedEffort::Medium,
        }
    }

    /// Canonical wire name for this effort level.
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimatedEffort::Trivial => "trivial",
            EstimatedEffort::Small => "small",
            EstimatedEffort::Medium => "medium",
            EstimatedEffort::Large => "large",
        }
    }
}

/// A prioritized, file-targeted fix task for a FAIL or PARTIAL claim.
///
/// Tasks are globally re-sorted by severity after generation and renumbered
/// from 1, so the `id` encodes priority, not discovery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationTask {
    /// Priority-ordered id, contiguous from 1
    pub id: u32,

    /// Claim this task remediates
    pub claim_id: String,

    /// Verdict that triggered the task (Fail or Partial only)
    pub verdict: Verdict,

    /// Severity inherited from the claim
    pub severity: Severity,

    /// Category inherited from the claim
    pub category: Category,

    /// Short task title
    pub title: String,

    /// What needs doing and why
    pub description: String,

    /// Kind of change required
    pub action: RemediationAction,

    /// Files the change should target
    pub target_files: Vec<String>,

    /// Rough effort estimate
    pub estimated_effort: EstimatedEffort,

    /// Concrete implementation guidance
    pub code_guidance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parse_unknown_defaults_to_modify() {
        assert_eq!(
            RemediationAction::parse_or_default("rewrite"),
            RemediationAction::Modify
        );
        assert_eq!(
            RemediationAction::parse_or_default("ADD"),
            RemediationAction::Add
        );
    }

    #[test]
    fn test_effort_parse_unknown_defaults_to_medium() {
        assert_eq!(
            EstimatedEffort::parse_or_default("huge"),
            EstimatedEffort::Medium
        );
        assert_eq!(
            EstimatedEffort::parse_or_default("Trivial"),
            EstimatedEffort::Trivial
        );
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&RemediationAction::Configure).unwrap(),
            "\"configure\""
        );
        assert_eq!(
            serde_json::to_string(&EstimatedEffort::Small).unwrap(),
            "\"small\""
        );
    }
}
