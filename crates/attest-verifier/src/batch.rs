//! Per-batch state machine
//!
//! Each batch walks `SelectingFiles -> ReadingFiles -> Verifying -> Done`.
//! Selection failure falls back to the globally tagged key files; a
//! verification failure degrades every claim in the batch to N/A. Either
//! way the batch emits exactly one verification per claim.

use crate::config::VerifierConfig;
use crate::context::assemble_context;
use crate::error::VerifierError;
use crate::parser::{parse_selection, parse_verification, VerdictRecord};
use crate::prompt::{
    selection_prompt, verification_prompt, SELECTION_SYSTEM_PROMPT, VERIFICATION_SYSTEM_PROMPT,
};
use attest_domain::{Claim, ClaimVerification, CodebaseIndex, Oracle, OracleResponse, OracleUsage};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Phase of the per-batch state machine, visible in trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    /// Asking the Oracle which files could settle each claim
    SelectingFiles,
    /// Reading the deduplicated union of selected files
    ReadingFiles,
    /// Asking the Oracle for a verdict per claim
    Verifying,
    /// Batch complete
    Done,
}

impl fmt::Display for BatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BatchPhase::SelectingFiles => "SELECTING_FILES",
            BatchPhase::ReadingFiles => "READING_FILES",
            BatchPhase::Verifying => "VERIFYING",
            BatchPhase::Done => "DONE",
        };
        write!(f, "{}", name)
    }
}

/// Result of processing one batch.
pub struct BatchOutcome {
    /// One verification per claim in the batch, in batch order
    pub verifications: Vec<ClaimVerification>,
    /// Tokens spent on this batch's calls
    pub usage: OracleUsage,
}

enum CallOutcome {
    Response(OracleResponse),
    TimedOut,
}

/// One Oracle round-trip under the configured timeout.
///
/// Transport errors propagate (fail-fast aborts the run); a timeout is
/// returned as a value because its failure policy is identical to a parse
/// failure - degrade, don't abort.
async fn call_oracle<O: Oracle>(
    oracle: &O,
    system_prompt: &str,
    user_prompt: &str,
    max_tokens: u32,
    config: &VerifierConfig,
) -> Result<CallOutcome, VerifierError> {
    match timeout(
        config.call_timeout(),
        oracle.call(system_prompt, user_prompt, max_tokens),
    )
    .await
    {
        Ok(result) => Ok(CallOutcome::Response(result?)),
        Err(_) => Ok(CallOutcome::TimedOut),
    }
}

fn fallback_selection(
    batch: &[Claim],
    index: &CodebaseIndex,
    config: &VerifierConfig,
) -> HashMap<String, Vec<String>> {
    let fallback = index.fallback_files(config.fallback_key_files);
    batch
        .iter()
        .map(|claim| (claim.id.clone(), fallback.clone()))
        .collect()
}

/// Degrade every claim in the batch to N/A with the given reasoning.
pub fn degrade_batch(batch: &[Claim], reasoning: &str) -> Vec<ClaimVerification> {
    batch
        .iter()
        .map(|claim| ClaimVerification::not_applicable(claim.clone(), reasoning))
        .collect()
}

/// Reconcile parsed verdicts against the submitted batch.
///
/// This is the completeness guarantee: every submitted claim gets a
/// result even when the Oracle ignores some of them or invents ids.
fn reconcile(
    batch: &[Claim],
    mut verdicts: HashMap<String, VerdictRecord>,
) -> Vec<ClaimVerification> {
    let verifications: Vec<ClaimVerification> = batch
        .iter()
        .map(|claim| match verdicts.remove(&claim.id) {
            Some(record) => ClaimVerification {
                claim_id: claim.id.clone(),
                claim: claim.clone(),
                verdict: record.verdict,
                evidence: record.evidence,
                reasoning: record.reasoning,
            },
            None => {
                warn!("claim {} missing from verification response", claim.id);
                ClaimVerification::not_applicable(
                    claim.clone(),
                    "no verification result returned",
                )
            }
        })
        .collect();

    if !verdicts.is_empty() {
        warn!(
            "{} verdict(s) for unknown claim ids ignored",
            verdicts.len()
        );
    }
    verifications
}

/// Run one batch through all phases.
pub async fn process_batch<O: Oracle>(
    oracle: &O,
    batch: &[Claim],
    index: &CodebaseIndex,
    config: &VerifierConfig,
) -> Result<BatchOutcome, VerifierError> {
    let mut usage = OracleUsage::default();

    debug!("batch of {}: {}", batch.len(), BatchPhase::SelectingFiles);
    let tree: Vec<String> = index
        .file_tree
        .iter()
        .take(config.file_tree_limit)
        .cloned()
        .collect();
    let selection_user = selection_prompt(batch, &tree);

    let selections = match call_oracle(
        oracle,
        SELECTION_SYSTEM_PROMPT,
        &selection_user,
        config.selection_max_tokens,
        config,
    )
    .await?
    {
        CallOutcome::Response(response) => {
            usage = usage.record(response.input_tokens, response.output_tokens);
            match parse_selection(&response.text, config.max_files_per_claim) {
                Ok(selections) => selections,
                Err(e) => {
                    warn!("selection parse failed, using key-file fallback: {}", e);
                    fallback_selection(batch, index, config)
                }
            }
        }
        CallOutcome::TimedOut => {
            warn!("selection call timed out, using key-file fallback");
            fallback_selection(batch, index, config)
        }
    };

    debug!("batch of {}: {}", batch.len(), BatchPhase::ReadingFiles);
    let context = assemble_context(Path::new(&index.root_path), &selections, config);

    debug!("batch of {}: {}", batch.len(), BatchPhase::Verifying);
    let verification_user = verification_prompt(batch, &context);

    let verifications = match call_oracle(
        oracle,
        VERIFICATION_SYSTEM_PROMPT,
        &verification_user,
        config.verification_max_tokens,
        config,
    )
    .await?
    {
        CallOutcome::Response(response) => {
            usage = usage.record(response.input_tokens, response.output_tokens);
            match parse_verification(&response.text) {
                Ok(verdicts) => reconcile(batch, verdicts),
                Err(e) => {
                    warn!("verification parse failed, degrading batch: {}", e);
                    degrade_batch(batch, "failed to parse")
                }
            }
        }
        CallOutcome::TimedOut => {
            warn!("verification call timed out, degrading batch");
            degrade_batch(batch, "failed to parse")
        }
    };

    debug!("batch of {}: {}", batch.len(), BatchPhase::Done);
    Ok(BatchOutcome {
        verifications,
        usage,
    })
}
