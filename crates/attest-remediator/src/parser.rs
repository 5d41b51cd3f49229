//! Parse Oracle output into remediation tasks
//!
//! Severity, category, and verdict come from the verification record, not
//! the Oracle response - the Oracle proposes the fix, it does not get to
//! reclassify the finding.

use attest_domain::{
    ClaimVerification, EstimatedEffort, RemediationAction, RemediationTask,
};
use attest_parse::{id_field, parse_array_lenient, str_field, string_list_field, ParseError};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

const TITLE_FROM_CLAIM_CHARS: usize = 60;

/// Parse one batch's remediation response into tasks.
///
/// `by_claim` maps claim ids to the verifications submitted in this
/// batch; records referencing unknown claims are dropped, as are records
/// with no description. Task ids are left at 0 - the remediator assigns
/// them after the global severity sort.
pub fn parse_tasks(
    response: &str,
    by_claim: &HashMap<String, &ClaimVerification>,
) -> Result<Vec<RemediationTask>, ParseError> {
    let records = parse_array_lenient(response)?;

    let mut tasks = Vec::new();
    for record in &records {
        match validate_task(record, by_claim) {
            Some(task) => tasks.push(task),
            None => warn!("dropping unusable remediation record"),
        }
    }
    Ok(tasks)
}

fn validate_task(
    record: &Value,
    by_claim: &HashMap<String, &ClaimVerification>,
) -> Option<RemediationTask> {
    let claim_id = id_field(record, "claimId").or_else(|| id_field(record, "claim_id"))?;
    let verification = by_claim.get(&claim_id)?;

    let description = str_field(record, "description")?;

    let title = str_field(record, "title").unwrap_or_else(|| {
        let text = &verification.claim.text;
        match text.char_indices().nth(TITLE_FROM_CLAIM_CHARS) {
            Some((offset, _)) => format!("Address: {}...", &text[..offset]),
            None => format!("Address: {}", text),
        }
    });

    let mut target_files = string_list_field(record, "targetFiles");
    if target_files.is_empty() {
        target_files = string_list_field(record, "target_files");
    }
    if target_files.is_empty() {
        target_files = verification.evidence.iter().map(|e| e.file.clone()).collect();
    }

    let action = record
        .get("action")
        .and_then(|v| v.as_str())
        .map(RemediationAction::parse_or_default)
        .unwrap_or(RemediationAction::Modify);

    let estimated_effort = record
        .get("estimatedEffort")
        .or_else(|| record.get("estimated_effort"))
        .and_then(|v| v.as_str())
        .map(EstimatedEffort::parse_or_default)
        .unwrap_or(EstimatedEffort::Medium);

    Some(RemediationTask {
        id: 0,
        claim_id,
        verdict: verification.verdict,
        severity: verification.claim.severity,
        category: verification.claim.category,
        title,
        description,
        action,
        target_files,
        estimated_effort,
        code_guidance: str_field(record, "codeGuidance")
            .or_else(|| str_field(record, "code_guidance"))
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_domain::{Category, Claim, Evidence, Severity, Verdict};
    use pretty_assertions::assert_eq;

    fn verification(id: &str, text: &str) -> ClaimVerification {
        ClaimVerification {
            claim_id: id.to_string(),
            claim: Claim {
                id: id.to_string(),
                section: "1".to_string(),
                category: Category::Security,
                severity: Severity::Critical,
                text: text.to_string(),
                testable: true,
            },
            verdict: Verdict::Fail,
            evidence: vec![Evidence {
                file: "src/auth.rs".to_string(),
                line_number: None,
                snippet: "none".to_string(),
                confidence: 0.5,
            }],
            reasoning: "missing".to_string(),
        }
    }

    fn by_claim(v: &ClaimVerification) -> HashMap<String, &ClaimVerification> {
        [(v.claim_id.clone(), v)].into_iter().collect()
    }

    #[test]
    fn test_parse_full_task() {
        let v = verification("claim-1", "MFA is required");
        let response = r#"[{
            "claimId": "claim-1",
            "title": "Add MFA enforcement",
            "description": "No MFA check exists on login",
            "action": "add",
            "targetFiles": ["src/login.rs"],
            "estimatedEffort": "large",
            "codeGuidance": "wire a TOTP check into the login handler"
        }]"#;

        let tasks = parse_tasks(response, &by_claim(&v)).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].action, RemediationAction::Add);
        assert_eq!(tasks[0].estimated_effort, EstimatedEffort::Large);
        assert_eq!(tasks[0].target_files, vec!["src/login.rs"]);
        // Classification comes from the verification, not the response.
        assert_eq!(tasks[0].severity, Severity::Critical);
        assert_eq!(tasks[0].verdict, Verdict::Fail);
    }

    #[test]
    fn test_unknown_action_and_effort_degrade() {
        let v = verification("claim-1", "text");
        let response = r#"[{
            "claimId": "claim-1", "description": "d",
            "action": "rewrite-everything", "estimatedEffort": "gigantic"
        }]"#;

        let tasks = parse_tasks(response, &by_claim(&v)).unwrap();
        assert_eq!(tasks[0].action, RemediationAction::Modify);
        assert_eq!(tasks[0].estimated_effort, EstimatedEffort::Medium);
    }

    #[test]
    fn test_missing_description_drops_record() {
        let v = verification("claim-1", "text");
        let response = r#"[{"claimId": "claim-1", "title": "t"}]"#;
        let tasks = parse_tasks(response, &by_claim(&v)).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_unknown_claim_id_drops_record() {
        let v = verification("claim-1", "text");
        let response = r#"[{"claimId": "claim-99", "description": "d"}]"#;
        let tasks = parse_tasks(response, &by_claim(&v)).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_missing_title_derived_from_claim() {
        let v = verification("claim-1", "sessions expire after 30 minutes");
        let response = r#"[{"claimId": "claim-1", "description": "d"}]"#;
        let tasks = parse_tasks(response, &by_claim(&v)).unwrap();
        assert_eq!(tasks[0].title, "Address: sessions expire after 30 minutes");
    }

    #[test]
    fn test_missing_target_files_fall_back_to_evidence() {
        let v = verification("claim-1", "text");
        let response = r#"[{"claimId": "claim-1", "description": "d"}]"#;
        let tasks = parse_tasks(response, &by_claim(&v)).unwrap();
        assert_eq!(tasks[0].target_files, vec!["src/auth.rs"]);
    }
}
