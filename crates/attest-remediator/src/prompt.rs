//! Oracle prompts for remediation task generation

use attest_domain::{ClaimVerification, Verdict};

/// System prompt enumerating the task schema and its closed vocabularies.
pub const REMEDIATION_SYSTEM_PROMPT: &str = r#"You produce concrete remediation tasks for compliance findings.
Each task must follow this exact JSON shape:

{
  "claimId": "claim-1",
  "title": "short imperative title",
  "description": "what needs doing and why",
  "action": "add" | "modify" | "remove" | "configure",
  "targetFiles": ["path/relative/to/root"],
  "estimatedEffort": "trivial" | "small" | "medium" | "large",
  "codeGuidance": "concrete implementation guidance"
}

Rules:
- One task per claim
- action and estimatedEffort must come from the closed lists above
- targetFiles must name real files from the provided evidence where possible

Output format: a JSON array of task objects only. No markdown code
blocks, no explanations."#;

fn finding_lines(verifications: &[ClaimVerification]) -> String {
    verifications
        .iter()
        .map(|v| {
            let files: Vec<&str> = v.evidence.iter().map(|e| e.file.as_str()).collect();
            format!(
                "- {} [{}, {}]: {}\n  verdict reasoning: {}\n  evidence files: {}",
                v.claim_id,
                v.claim.severity,
                v.claim.category,
                v.claim.text,
                v.reasoning,
                if files.is_empty() {
                    "none".to_string()
                } else {
                    files.join(", ")
                },
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the user prompt for one remediation batch.
///
/// FAIL and PARTIAL groups get different emphasis: a failed claim needs
/// full implementation guidance, a partial one needs only the gap closed.
pub fn remediation_prompt(
    group: Verdict,
    verifications: &[ClaimVerification],
    evidence_context: &str,
) -> String {
    let emphasis = match group {
        Verdict::Fail => {
            "These claims FAILED verification: the capability is missing or \
             contradicted. Provide full implementation guidance for each."
        }
        _ => {
            "These claims were PARTIALLY satisfied. Describe only the gap \
             that remains - do not re-describe the parts already working."
        }
    };

    format!(
        "{}\n\nFindings:\n{}\n\nCurrent code for reference:\n{}\n\n\
         Return the JSON array of remediation tasks.",
        emphasis,
        finding_lines(verifications),
        evidence_context
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_domain::{Category, Claim, Evidence, Severity};

    fn verification(id: &str, verdict: Verdict) -> ClaimVerification {
        ClaimVerification {
            claim_id: id.to_string(),
            claim: Claim {
                id: id.to_string(),
                section: "1".to_string(),
                category: Category::Security,
                severity: Severity::High,
                text: "rate limiting is enforced".to_string(),
                testable: true,
            },
            verdict,
            evidence: vec![Evidence {
                file: "src/api/limits.rs".to_string(),
                line_number: Some(3),
                snippet: "// TODO".to_string(),
                confidence: 0.8,
            }],
            reasoning: "no limiter found".to_string(),
        }
    }

    #[test]
    fn test_fail_prompt_requests_full_guidance() {
        let prompt = remediation_prompt(
            Verdict::Fail,
            &[verification("claim-1", Verdict::Fail)],
            "code",
        );
        assert!(prompt.contains("FAILED"));
        assert!(prompt.contains("full implementation guidance"));
        assert!(prompt.contains("src/api/limits.rs"));
    }

    #[test]
    fn test_partial_prompt_requests_gap_only() {
        let prompt = remediation_prompt(
            Verdict::Partial,
            &[verification("claim-2", Verdict::Partial)],
            "code",
        );
        assert!(prompt.contains("PARTIALLY"));
        assert!(prompt.contains("gap"));
        assert!(!prompt.contains("full implementation guidance"));
    }

    #[test]
    fn test_system_prompt_enumerates_schema() {
        for token in ["\"action\"", "\"estimatedEffort\"", "configure", "trivial"] {
            assert!(REMEDIATION_SYSTEM_PROMPT.contains(token));
        }
    }
}
