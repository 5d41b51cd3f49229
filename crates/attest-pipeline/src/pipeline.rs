//! Audit run orchestration
//!
//! Stages run strictly sequentially: index, extract, verify, remediate,
//! report. Each stage consumes the previous stage's records by reference
//! and produces new ones; nothing is mutated across a stage boundary.

use std::path::Path;
use std::sync::Arc;

use attest_domain::{Claim, ClaimVerification, CodebaseIndex, Oracle, OracleUsage, RemediationTask};
use attest_extractor::{ClaimExtractor, ClaimSource};
use attest_indexer::index_codebase;
use attest_remediator::Remediator;
use attest_report::{compliance_score, generate_report};
use attest_verifier::{CancelFlag, Verifier};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PipelineConfig;
use crate::error::PipelineError;

/// Where the audited claims come from.
#[derive(Debug, Clone)]
pub enum AuditSource {
    /// A specification document whose assertions are extracted verbatim
    Document(String),

    /// No document exists; claims are inferred from the indexed codebase
    /// structure itself
    Codebase,
}

/// Everything one audit run produced. All fields serialize, so the whole
/// outcome can be persisted as a single JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditOutcome {
    /// Codebase snapshot the run was grounded on
    pub index: CodebaseIndex,

    /// Extracted claims
    pub claims: Vec<Claim>,

    /// Exactly one verification per claim, sorted by claim id
    pub verifications: Vec<ClaimVerification>,

    /// Remediation tasks, severity-sorted, ids contiguous from 1
    pub tasks: Vec<RemediationTask>,

    /// Rendered markdown report
    pub report: String,

    /// Token accounting summed across all stages
    pub usage: OracleUsage,
}

/// Run a complete audit against the codebase at `root`.
///
/// The cancel flag is checked between verification batches only; a
/// cancelled run still completes with N/A verdicts for unprocessed
/// claims, so the outcome is always structurally complete.
///
/// # Errors
///
/// Fatal on an invalid configuration, a bad root path, an unparsable
/// extraction response, or a transport-level Oracle failure in any
/// stage. Batch-level parse failures and timeouts degrade in place.
pub async fn run_audit<O: Oracle>(
    source: AuditSource,
    root: &Path,
    oracle: Arc<O>,
    config: &PipelineConfig,
    cancel: &CancelFlag,
) -> Result<AuditOutcome, PipelineError> {
    config.validate().map_err(PipelineError::Config)?;

    info!("audit starting at {}", root.display());
    let index = index_codebase(root, &config.indexer)?;

    let claim_source = match source {
        AuditSource::Document(text) => ClaimSource::Document(text),
        AuditSource::Codebase => ClaimSource::Codebase {
            file_tree: index.file_tree.clone(),
            key_file_summary: index.summary.clone(),
        },
    };

    let extractor = ClaimExtractor::new(Arc::clone(&oracle), config.extractor.clone());
    let extraction = extractor.extract(claim_source).await?;

    let verifier = Verifier::new(Arc::clone(&oracle), config.verifier.clone());
    let verification = verifier.verify(&extraction.claims, &index, cancel).await?;

    let remediator = Remediator::new(Arc::clone(&oracle), config.remediator.clone());
    let remediation = remediator
        .remediate(&verification.verifications, root)
        .await?;

    let report = generate_report(
        &verification.verifications,
        &remediation.tasks,
        &config.report,
    );

    let usage = extraction.usage + verification.usage + remediation.usage;
    info!(
        "audit complete: {} claims, score {:.1}%, {} task(s), {} oracle call(s)",
        extraction.claims.len(),
        compliance_score(&verification.verifications),
        remediation.tasks.len(),
        usage.calls,
    );

    Ok(AuditOutcome {
        index,
        claims: extraction.claims,
        verifications: verification.verifications,
        tasks: remediation.tasks,
        report,
        usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_domain::Verdict;
    use attest_oracle::MockOracle;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn sample_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(
            dir.path().join("src/auth.rs"),
            "fn login(user: &str, password: &str) -> bool { true }\n",
        )
        .unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"demo\"\n").unwrap();
        dir
    }

    fn scripted_oracle() -> MockOracle {
        let oracle = MockOracle::default();
        // Extraction: one testable claim, one non-testable.
        oracle.push_response(
            r#"[
                {"id": "claim-1", "section": "Security", "category": "security",
                 "severity": "critical", "text": "Passwords are hashed before storage",
                 "testable": true},
                {"id": "claim-2", "section": "Operations", "category": "operational",
                 "severity": "low", "text": "The team reviews logs weekly",
                 "testable": false}
            ]"#,
        );
        // Selection for the single batch.
        oracle.push_response(r#"[{"claimId": "claim-1", "files": ["src/auth.rs"]}]"#);
        // Verification.
        oracle.push_response(
            r#"[{
                "claimId": "claim-1",
                "verdict": "FAIL",
                "evidence": [{"file": "src/auth.rs", "lineNumber": 1,
                              "snippet": "fn login(user: &str, password: &str)",
                              "confidence": 0.9}],
                "reasoning": "login stores the password without hashing"
            }]"#,
        );
        // Remediation for the one FAIL.
        oracle.push_response(
            r#"[{
                "claimId": "claim-1",
                "title": "Hash passwords before storage",
                "description": "login() handles the raw password with no hashing step",
                "action": "modify",
                "targetFiles": ["src/auth.rs"],
                "estimatedEffort": "small",
                "codeGuidance": "run the password through a bcrypt hash before persisting"
            }]"#,
        );
        oracle
    }

    #[tokio::test]
    async fn test_full_audit_run() {
        let repo = sample_repo();
        let oracle = Arc::new(scripted_oracle());
        let config = PipelineConfig::default();

        let outcome = run_audit(
            AuditSource::Document("spec text".to_string()),
            repo.path(),
            Arc::clone(&oracle),
            &config,
            &CancelFlag::new(),
        )
        .await
        .unwrap();

        assert_eq!(outcome.claims.len(), 2);
        assert_eq!(outcome.verifications.len(), 2);

        // Output sorted by claim id.
        assert_eq!(outcome.verifications[0].claim_id, "claim-1");
        assert_eq!(outcome.verifications[0].verdict, Verdict::Fail);
        assert_eq!(outcome.verifications[1].claim_id, "claim-2");
        assert_eq!(outcome.verifications[1].verdict, Verdict::NotApplicable);
        assert_eq!(outcome.verifications[1].reasoning, "claim is not testable");

        assert_eq!(outcome.tasks.len(), 1);
        assert_eq!(outcome.tasks[0].id, 1);
        assert_eq!(outcome.tasks[0].claim_id, "claim-1");

        // One call per stage step: extract, select, verify, remediate.
        assert_eq!(oracle.call_count(), 4);
        assert_eq!(outcome.usage.calls, 4);

        assert!(outcome.report.contains("FAIL `claim-1`"));
        assert!(outcome.report.contains("Hash passwords before storage"));
        // One FAIL plus one N/A: nothing assessable passed.
        assert!(outcome.report.contains("**Compliance score:** 0.0%"));
    }

    #[tokio::test]
    async fn test_codebase_source_uses_index() {
        let repo = sample_repo();
        let oracle = Arc::new(MockOracle::default());
        let config = PipelineConfig::default();

        let outcome = run_audit(
            AuditSource::Codebase,
            repo.path(),
            Arc::clone(&oracle),
            &config,
            &CancelFlag::new(),
        )
        .await
        .unwrap();

        // Default "[]" response: no claims, but the run still completes.
        assert!(outcome.claims.is_empty());
        assert_eq!(oracle.call_count(), 1);

        // The extraction prompt carries the indexed file tree.
        let calls = oracle.recorded_calls();
        assert!(calls[0].user_prompt.contains("src/auth.rs"));
    }

    #[tokio::test]
    async fn test_unparsable_extraction_is_fatal() {
        let repo = sample_repo();
        let oracle = Arc::new(MockOracle::new("the codebase looks great to me"));
        let config = PipelineConfig::default();

        let result = run_audit(
            AuditSource::Document("spec".to_string()),
            repo.path(),
            oracle,
            &config,
            &CancelFlag::new(),
        )
        .await;

        assert!(matches!(result, Err(PipelineError::Extract(_))));
    }

    #[tokio::test]
    async fn test_missing_root_is_fatal() {
        let oracle = Arc::new(MockOracle::default());
        let config = PipelineConfig::default();

        let result = run_audit(
            AuditSource::Document("spec".to_string()),
            Path::new("/nonexistent/audit/root"),
            oracle,
            &config,
            &CancelFlag::new(),
        )
        .await;

        assert!(matches!(result, Err(PipelineError::Index(_))));
    }

    #[tokio::test]
    async fn test_invalid_config_rejected_before_any_call() {
        let repo = sample_repo();
        let oracle = Arc::new(MockOracle::default());
        let mut config = PipelineConfig::default();
        config.verifier.batch_size = 0;

        let result = run_audit(
            AuditSource::Document("spec".to_string()),
            repo.path(),
            Arc::clone(&oracle),
            &config,
            &CancelFlag::new(),
        )
        .await;

        assert!(matches!(result, Err(PipelineError::Config(_))));
        assert_eq!(oracle.call_count(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_run_still_completes() {
        let repo = sample_repo();
        let oracle = Arc::new(MockOracle::default());
        oracle.push_response(
            r#"[{"id": "claim-1", "text": "Passwords are hashed", "testable": true}]"#,
        );
        let config = PipelineConfig::default();

        let cancel = CancelFlag::new();
        cancel.cancel();

        let outcome = run_audit(
            AuditSource::Document("spec".to_string()),
            repo.path(),
            Arc::clone(&oracle),
            &config,
            &cancel,
        )
        .await
        .unwrap();

        // Extraction runs (cancellation is batch-granular), verification
        // degrades everything, remediation has nothing to do.
        assert_eq!(oracle.call_count(), 1);
        assert_eq!(outcome.verifications.len(), 1);
        assert_eq!(outcome.verifications[0].verdict, Verdict::NotApplicable);
        assert_eq!(outcome.verifications[0].reasoning, "verification cancelled");
        assert!(outcome.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_outcome_serializes_as_json() {
        let repo = sample_repo();
        let oracle = Arc::new(scripted_oracle());
        let config = PipelineConfig::default();

        let outcome = run_audit(
            AuditSource::Document("spec".to_string()),
            repo.path(),
            oracle,
            &config,
            &CancelFlag::new(),
        )
        .await
        .unwrap();

        let json = serde_json::to_string(&outcome).unwrap();
        let back: AuditOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back.claims, outcome.claims);
        assert_eq!(back.verifications, outcome.verifications);
        assert_eq!(back.tasks, outcome.tasks);
        assert_eq!(back.usage, outcome.usage);
    }
}
