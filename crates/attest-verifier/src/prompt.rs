//! Oracle prompts for file selection and verification

use attest_domain::Claim;

/// System prompt for the selection phase.
pub const SELECTION_SYSTEM_PROMPT: &str = r#"You select which files could verify each compliance claim.
For each claim, pick 0-5 file paths from the provided tree that are most
likely to contain the relevant evidence. Only use paths that appear in the
tree verbatim.

Output format: a JSON array only, no markdown code blocks:
[
  {"claimId": "claim-1", "files": ["src/auth.rs", "src/session.rs"]}
]"#;

/// System prompt for the verification phase.
pub const VERIFICATION_SYSTEM_PROMPT: &str = r#"You verify compliance claims against code evidence.
For each claim, judge whether the evidence supports it:
- PASS: the evidence shows the claim is satisfied
- PARTIAL: partially satisfied, with identifiable gaps
- FAIL: contradicted or unimplemented
- N/A: the provided evidence cannot settle the claim

Output format: a JSON array only, no markdown code blocks:
[
  {
    "claimId": "claim-1",
    "verdict": "PASS" | "PARTIAL" | "FAIL" | "N/A",
    "evidence": [
      {"file": "src/auth.rs", "lineNumber": 42, "snippet": "...", "confidence": 0.9}
    ],
    "reasoning": "why this verdict"
  }
]
Return one entry for every claim listed."#;

fn claim_lines(claims: &[Claim]) -> String {
    claims
        .iter()
        .map(|c| format!("- {} [{}/{}]: {}", c.id, c.category, c.severity, c.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the user prompt for one selection call.
pub fn selection_prompt(claims: &[Claim], file_tree: &[String]) -> String {
    format!(
        "Claims:\n{}\n\nFile tree:\n{}\n\nReturn the JSON array mapping \
         each claim id to candidate files.",
        claim_lines(claims),
        file_tree.join("\n")
    )
}

/// Build the user prompt for one verification call.
pub fn verification_prompt(claims: &[Claim], evidence_context: &str) -> String {
    format!(
        "Claims to verify:\n{}\n\nCode evidence:\n{}\n\nReturn the JSON \
         array with one verdict per claim.",
        claim_lines(claims),
        evidence_context
    )
}
