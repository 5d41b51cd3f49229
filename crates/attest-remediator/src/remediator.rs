//! Remediation run orchestration

use crate::config::RemediatorConfig;
use crate::error::RemediatorError;
use crate::parser::parse_tasks;
use crate::prompt::{remediation_prompt, REMEDIATION_SYSTEM_PROMPT};
use attest_domain::{ClaimVerification, Oracle, OracleUsage, RemediationTask, Verdict};
use attest_indexer::assemble_file_context;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{info, warn};

/// Result of one remediation run.
#[derive(Debug, Clone)]
pub struct RemediationOutcome {
    /// Tasks sorted by severity, ids contiguous from 1 in that order
    pub tasks: Vec<RemediationTask>,

    /// Tokens spent across all batches
    pub usage: OracleUsage,
}

/// The Remediator turns FAIL/PARTIAL verifications into prioritized fix
/// tasks, one Oracle call per batch.
pub struct Remediator<O: Oracle> {
    oracle: Arc<O>,
    config: RemediatorConfig,
}

impl<O: Oracle> Remediator<O> {
    /// Create a new remediator.
    pub fn new(oracle: Arc<O>, config: RemediatorConfig) -> Self {
        Self { oracle, config }
    }

    /// Generate remediation tasks for every FAIL/PARTIAL verification.
    ///
    /// PASS and N/A verifications are ignored. A batch whose response
    /// fails to parse (or times out) yields no tasks; the run continues.
    ///
    /// # Errors
    ///
    /// Only transport-level Oracle failures abort the run.
    pub async fn remediate(
        &self,
        verifications: &[ClaimVerification],
        root: &Path,
    ) -> Result<RemediationOutcome, RemediatorError> {
        let failed: Vec<&ClaimVerification> = verifications
            .iter()
            .filter(|v| v.verdict == Verdict::Fail)
            .collect();
        let partial: Vec<&ClaimVerification> = verifications
            .iter()
            .filter(|v| v.verdict == Verdict::Partial)
            .collect();

        info!(
            "remediating {} failed and {} partial finding(s)",
            failed.len(),
            partial.len()
        );

        let mut tasks = Vec::new();
        let mut usage = OracleUsage::default();

        for (group, findings) in [(Verdict::Fail, failed), (Verdict::Partial, partial)] {
            for batch in findings.chunks(self.config.batch_size) {
                let (batch_tasks, batch_usage) = self.process_batch(group, batch, root).await?;
                tasks.extend(batch_tasks);
                usage = usage + batch_usage;
            }
        }

        // Task id order == severity priority order, contiguous from 1.
        tasks.sort_by_key(|task| task.severity);
        for (idx, task) in tasks.iter_mut().enumerate() {
            task.id = (idx + 1) as u32;
        }

        info!("generated {} remediation task(s)", tasks.len());
        Ok(RemediationOutcome { tasks, usage })
    }

    async fn process_batch(
        &self,
        group: Verdict,
        batch: &[&ClaimVerification],
        root: &Path,
    ) -> Result<(Vec<RemediationTask>, OracleUsage), RemediatorError> {
        // Re-read the evidence files cited by this batch, deduplicated
        // and deterministically ordered, same truncation rules as
        // verification.
        let evidence_files: Vec<String> = batch
            .iter()
            .flat_map(|v| v.evidence.iter().map(|e| e.file.clone()))
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        let context = assemble_file_context(
            root,
            &evidence_files,
            self.config.per_file_chars,
            self.config.max_context_chars,
        );

        let owned: Vec<ClaimVerification> = batch.iter().map(|v| (*v).clone()).collect();
        let user_prompt = remediation_prompt(group, &owned, &context);

        let response = match timeout(
            self.config.call_timeout(),
            self.oracle
                .call(REMEDIATION_SYSTEM_PROMPT, &user_prompt, self.config.max_tokens),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                warn!("remediation call timed out, batch yields no tasks");
                return Ok((Vec::new(), OracleUsage::default()));
            }
        };

        let usage = OracleUsage::default().record(response.input_tokens, response.output_tokens);

        let by_claim: HashMap<String, &ClaimVerification> = batch
            .iter()
            .map(|v| (v.claim_id.clone(), *v))
            .collect();

        match parse_tasks(&response.text, &by_claim) {
            Ok(batch_tasks) => Ok((batch_tasks, usage)),
            Err(e) => {
                warn!("remediation parse failed, batch yields no tasks: {}", e);
                Ok((Vec::new(), usage))
            }
        }
    }
}
