//! Verification run orchestration

use crate::batch::{degrade_batch, process_batch};
use crate::cancel::CancelFlag;
use crate::config::VerifierConfig;
use crate::error::VerifierError;
use attest_domain::{Claim, ClaimVerification, CodebaseIndex, Oracle, OracleUsage};
use std::sync::Arc;
use tracing::info;

/// Result of one verification run.
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    /// Exactly one verification per submitted claim, sorted by claim id
    pub verifications: Vec<ClaimVerification>,

    /// Tokens spent across all batches
    pub usage: OracleUsage,
}

/// The Verifier checks claims against a codebase index, batch by batch,
/// strictly sequentially.
pub struct Verifier<O: Oracle> {
    oracle: Arc<O>,
    config: VerifierConfig,
}

impl<O: Oracle> Verifier<O> {
    /// Create a new verifier.
    pub fn new(oracle: Arc<O>, config: VerifierConfig) -> Self {
        Self { oracle, config }
    }

    /// Verify every claim, returning exactly one verification per claim.
    ///
    /// Non-testable claims resolve to N/A before any batch is formed and
    /// cost no Oracle calls. The output is sorted by claim id, so the
    /// ordering is independent of batch completion order.
    ///
    /// # Errors
    ///
    /// Only transport-level Oracle failures abort the run. Parse failures
    /// and timeouts degrade the affected batch to N/A instead.
    pub async fn verify(
        &self,
        claims: &[Claim],
        index: &CodebaseIndex,
        cancel: &CancelFlag,
    ) -> Result<VerificationOutcome, VerifierError> {
        let mut verifications: Vec<ClaimVerification> = Vec::with_capacity(claims.len());
        let mut usage = OracleUsage::default();

        // Non-testable claims are settled up front, without the Oracle.
        let testable: Vec<Claim> = claims
            .iter()
            .filter(|claim| {
                if claim.testable {
                    true
                } else {
                    verifications.push(ClaimVerification::not_applicable(
                        (*claim).clone(),
                        "claim is not testable",
                    ));
                    false
                }
            })
            .cloned()
            .collect();

        let batch_count = testable.len().div_ceil(self.config.batch_size);
        info!(
            "verifying {} testable claims ({} non-testable) in {} batch(es)",
            testable.len(),
            claims.len() - testable.len(),
            batch_count,
        );

        for (batch_idx, batch) in testable.chunks(self.config.batch_size).enumerate() {
            if cancel.is_cancelled() {
                info!("cancelled before batch {}/{}", batch_idx + 1, batch_count);
                verifications.extend(degrade_batch(batch, "verification cancelled"));
                continue;
            }

            info!("processing batch {}/{}", batch_idx + 1, batch_count);
            let outcome = process_batch(&*self.oracle, batch, index, &self.config).await?;
            usage = usage + outcome.usage;
            verifications.extend(outcome.verifications);
        }

        // Stable output ordering regardless of batch completion order.
        verifications.sort_by(|a, b| a.claim_id.cmp(&b.claim_id));

        debug_assert_eq!(verifications.len(), claims.len());
        Ok(VerificationOutcome {
            verifications,
            usage,
        })
    }
}
