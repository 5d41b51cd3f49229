//! Parse selection and verification responses
//!
//! Both parsers are tolerant per-record and per-field; a `ParseError`
//! from the lenient array parse is the caller's signal to degrade the
//! whole batch.

use attest_domain::{Evidence, Verdict};
use attest_parse::{
    f64_field_clamped, id_field, parse_array_lenient, str_field, string_list_field, u64_field,
    ParseError,
};
use std::collections::HashMap;
use tracing::warn;

/// Default confidence when the Oracle omits one on an evidence entry.
const DEFAULT_EVIDENCE_CONFIDENCE: f64 = 0.5;

/// Parsed verification entry for one claim, before reconciliation.
#[derive(Debug, Clone)]
pub struct VerdictRecord {
    /// Verdict reached by the Oracle
    pub verdict: Verdict,
    /// Evidence entries that survived field validation
    pub evidence: Vec<Evidence>,
    /// Oracle's stated reasoning
    pub reasoning: String,
}

fn claim_id_of(record: &serde_json::Value) -> Option<String> {
    id_field(record, "claimId").or_else(|| id_field(record, "claim_id"))
}

/// Parse a selection response into a claim-id -> candidate-paths map.
///
/// Entries without a claim id are dropped; the file list is capped at
/// `max_files_per_claim`.
pub fn parse_selection(
    response: &str,
    max_files_per_claim: usize,
) -> Result<HashMap<String, Vec<String>>, ParseError> {
    let records = parse_array_lenient(response)?;

    let mut selections = HashMap::new();
    for record in &records {
        let Some(claim_id) = claim_id_of(record) else {
            warn!("selection entry without claimId dropped");
            continue;
        };
        let mut files = string_list_field(record, "files");
        files.truncate(max_files_per_claim);
        selections.insert(claim_id, files);
    }
    Ok(selections)
}

/// Parse a verification response into per-claim verdict records.
///
/// Unknown verdict strings become N/A; evidence entries missing `file` or
/// `snippet` are dropped; a missing confidence defaults to 0.5 and any
/// value is clamped to [0, 1].
pub fn parse_verification(response: &str) -> Result<HashMap<String, VerdictRecord>, ParseError> {
    let records = parse_array_lenient(response)?;

    let mut verdicts = HashMap::new();
    for record in &records {
        let Some(claim_id) = claim_id_of(record) else {
            warn!("verification entry without claimId dropped");
            continue;
        };

        let verdict = record
            .get("verdict")
            .and_then(|v| v.as_str())
            .map(Verdict::parse_or_default)
            .unwrap_or(Verdict::NotApplicable);

        let evidence = record
            .get("evidence")
            .and_then(|v| v.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        let file = str_field(entry, "file")?;
                        let snippet = str_field(entry, "snippet")?;
                        Some(Evidence {
                            file,
                            line_number: u64_field(entry, "lineNumber")
                                .or_else(|| u64_field(entry, "line_number")),
                            snippet,
                            confidence: f64_field_clamped(
                                entry,
                                "confidence",
                                DEFAULT_EVIDENCE_CONFIDENCE,
                            ),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        verdicts.insert(
            claim_id,
            VerdictRecord {
                verdict,
                evidence,
                reasoning: str_field(record, "reasoning").unwrap_or_default(),
            },
        );
    }
    Ok(verdicts)
}
