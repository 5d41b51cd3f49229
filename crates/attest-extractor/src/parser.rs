//! Parse Oracle output into claims
//!
//! The response shape is never trusted: each raw record is validated
//! field-by-field into a canonical [`Claim`]. One malformed field degrades
//! that field to its default; a record is dropped only when it carries no
//! claim text at all.

use crate::error::ExtractorError;
use attest_domain::{Category, Claim, Severity};
use attest_parse::{id_field, parse_array_lenient, str_field};
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;

/// Parse an Oracle extraction response into claims.
///
/// A total parse failure after repair is fatal; no partial list comes back.
pub fn parse_claims(response: &str) -> Result<Vec<Claim>, ExtractorError> {
    let raw_records =
        parse_array_lenient(response).map_err(|e| ExtractorError::Parse(e.to_string()))?;

    let mut claims = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (idx, record) in raw_records.iter().enumerate() {
        match validate_claim(record, idx, &mut seen_ids) {
            Some(claim) => claims.push(claim),
            None => warn!("dropping claim record {} with no text", idx),
        }
    }

    Ok(claims)
}

/// Validate one raw record into a claim.
///
/// Returns `None` only when `text` is missing - the single field that
/// cannot be defaulted. Missing or duplicate ids are replaced with a
/// sequentially generated one, keeping ids unique within the extraction.
fn validate_claim(record: &Value, ordinal: usize, seen_ids: &mut HashSet<String>) -> Option<Claim> {
    let text = str_field(record, "text")?;

    let id = match id_field(record, "id") {
        Some(id) if !seen_ids.contains(&id) => id,
        _ => generate_id(ordinal, seen_ids),
    };
    seen_ids.insert(id.clone());

    let category = record
        .get("category")
        .and_then(|v| v.as_str())
        .map(Category::parse_or_default)
        .unwrap_or(Category::Functionality);

    let severity = record
        .get("severity")
        .and_then(|v| v.as_str())
        .map(Severity::parse_or_default)
        .unwrap_or(Severity::Medium);

    Some(Claim {
        id,
        section: str_field(record, "section").unwrap_or_else(|| "General".to_string()),
        category,
        severity,
        text,
        testable: record
            .get("testable")
            .and_then(|v| v.as_bool())
            .unwrap_or(true),
    })
}

fn generate_id(ordinal: usize, seen_ids: &HashSet<String>) -> String {
    let mut n = ordinal + 1;
    loop {
        let candidate = format!("claim-{}", n);
        if !seen_ids.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
