//! Verdicts and the evidence that backs them

use crate::claim::Claim;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking a single claim against evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Evidence shows the claim is satisfied
    #[serde(rename = "PASS")]
    Pass,
    /// Evidence shows partial satisfaction with identifiable gaps
    #[serde(rename = "PARTIAL")]
    Partial,
    /// Evidence contradicts the claim or shows it unimplemented
    #[serde(rename = "FAIL")]
    Fail,
    /// Not assessable: non-testable claim, no result, or degraded batch
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Verdict {
    /// Parse a verdict string, defaulting to `NotApplicable` for unknowns.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "PASS" => Verdict::Pass,
            "PARTIAL" => Verdict::Partial,
            "FAIL" => Verdict::Fail,
            "N/A" | "NA" | "NOT APPLICABLE" => Verdict::NotApplicable,
            _ => Verdict::NotApplicable,
        }
    }

    /// Canonical wire name for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Partial => "PARTIAL",
            Verdict::Fail => "FAIL",
            Verdict::NotApplicable => "N/A",
        }
    }

    /// Whether a remediation task should be generated for this verdict.
    pub fn needs_remediation(&self) -> bool {
        matches!(self, Verdict::Fail | Verdict::Partial)
    }

    /// Display order within a report section: failures surface first.
    pub fn report_rank(&self) -> u8 {
        match self {
            Verdict::Fail => 0,
            Verdict::Partial => 1,
            Verdict::Pass => 2,
            Verdict::NotApplicable => 3,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cited code location supporting a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Path relative to the codebase root
    pub file: String,

    /// Line number within the file, when the Oracle supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u64>,

    /// Code excerpt the verdict rests on
    pub snippet: String,

    /// Oracle-reported confidence in this citation, clamped to [0, 1]
    pub confidence: f64,
}

/// The terminal result for one claim. Exactly one exists per submitted
/// claim, regardless of how the Oracle behaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimVerification {
    /// Id of the verified claim
    pub claim_id: String,

    /// The claim itself, carried for report rendering
    pub claim: Claim,

    /// Verdict reached
    pub verdict: Verdict,

    /// Supporting citations, possibly empty
    pub evidence: Vec<Evidence>,

    /// Why the verdict was reached. N/A verdicts always carry an
    /// explanation (non-testable, no result returned, or parse failure).
    pub reasoning: String,
}

impl ClaimVerification {
    /// Build an N/A verification with the given reasoning.
    pub fn not_applicable(claim: Claim, reasoning: impl Into<String>) -> Self {
        Self {
            claim_id: claim.id.clone(),
            claim,
            verdict: Verdict::NotApplicable,
            evidence: Vec::new(),
            reasoning: reasoning.into(),
        }
    }
}
