//! Core ClaimExtractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_claims;
use crate::prompt::{codebase_prompt, document_prompt, EXTRACTION_SYSTEM_PROMPT};
use attest_domain::{Claim, Oracle, OracleUsage};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// What claims are extracted from: either a specification document or a
/// `(file tree, summary)` pair describing the codebase itself.
#[derive(Debug, Clone)]
pub enum ClaimSource {
    /// Raw specification document text
    Document(String),

    /// Codebase structure, used when no document exists
    Codebase {
        /// Relative file paths from the indexer
        file_tree: Vec<String>,
        /// One-line codebase description for prompt context
        key_file_summary: String,
    },
}

/// Result of one extraction: the claims plus the tokens spent making them.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// Extracted claims, ids unique within this extraction
    pub claims: Vec<Claim>,

    /// Token accounting for the single Oracle call
    pub usage: OracleUsage,
}

/// The ClaimExtractor turns a document or codebase summary into typed
/// claims with one Oracle call.
pub struct ClaimExtractor<O: Oracle> {
    oracle: Arc<O>,
    config: ExtractorConfig,
}

impl<O: Oracle> ClaimExtractor<O> {
    /// Create a new extractor.
    pub fn new(oracle: Arc<O>, config: ExtractorConfig) -> Self {
        Self { oracle, config }
    }

    /// Extract claims from the given source.
    ///
    /// # Errors
    ///
    /// Fatal on Oracle transport failure, timeout, or an unrepairable
    /// response - extraction never returns a partial claim list.
    pub async fn extract(&self, source: ClaimSource) -> Result<ExtractionOutcome, ExtractorError> {
        let user_prompt = match &source {
            ClaimSource::Document(text) => {
                info!("extracting claims from document ({} chars)", text.len());
                document_prompt(text)
            }
            ClaimSource::Codebase {
                file_tree,
                key_file_summary,
            } => {
                info!(
                    "inferring claims from codebase structure ({} files)",
                    file_tree.len()
                );
                let limited: Vec<String> = file_tree
                    .iter()
                    .take(self.config.file_tree_limit)
                    .cloned()
                    .collect();
                codebase_prompt(&limited, key_file_summary)
            }
        };

        debug!("extraction prompt: {} chars", user_prompt.len());

        let response = timeout(
            self.config.call_timeout(),
            self.oracle
                .call(EXTRACTION_SYSTEM_PROMPT, &user_prompt, self.config.max_tokens),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)??;

        let usage = OracleUsage::default().record(response.input_tokens, response.output_tokens);

        let claims = parse_claims(&response.text)?;

        info!(
            "extraction complete: {} claims ({} testable)",
            claims.len(),
            claims.iter().filter(|c| c.testable).count()
        );

        Ok(ExtractionOutcome { claims, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_oracle::MockOracle;

    fn extractor_with(oracle: MockOracle) -> ClaimExtractor<MockOracle> {
        ClaimExtractor::new(Arc::new(oracle), ExtractorConfig::default())
    }

    #[tokio::test]
    async fn test_extract_from_document() {
        let oracle = MockOracle::default();
        oracle.push_response(
            r#"[{"id": "claim-1", "section": "1", "category": "security",
                "severity": "high", "text": "TLS is enforced", "testable": true}]"#,
        );
        let extractor = extractor_with(oracle);

        let outcome = extractor
            .extract(ClaimSource::Document("spec text".to_string()))
            .await
            .unwrap();

        assert_eq!(outcome.claims.len(), 1);
        assert_eq!(outcome.usage.calls, 1);
    }

    #[tokio::test]
    async fn test_extract_empty_response() {
        let extractor = extractor_with(MockOracle::new("[]"));
        let outcome = extractor
            .extract(ClaimSource::Document("spec".to_string()))
            .await
            .unwrap();
        assert!(outcome.claims.is_empty());
    }

    #[tokio::test]
    async fn test_extract_from_codebase_limits_tree() {
        let oracle = MockOracle::new("[]");
        let probe = oracle.clone();
        let config = ExtractorConfig {
            file_tree_limit: 2,
            ..Default::default()
        };
        let extractor = ClaimExtractor::new(Arc::new(oracle), config);

        let source = ClaimSource::Codebase {
            file_tree: vec!["a.rs".into(), "b.rs".into(), "c.rs".into()],
            key_file_summary: "repo: 3 files".to_string(),
        };
        extractor.extract(source).await.unwrap();

        let calls = probe.recorded_calls();
        assert!(calls[0].user_prompt.contains("a.rs"));
        assert!(calls[0].user_prompt.contains("b.rs"));
        assert!(!calls[0].user_prompt.contains("c.rs"));
    }

    #[tokio::test]
    async fn test_unparsable_response_is_fatal() {
        let extractor = extractor_with(MockOracle::new("I refuse to answer in JSON."));
        let result = extractor
            .extract(ClaimSource::Document("spec".to_string()))
            .await;
        assert!(matches!(result, Err(ExtractorError::Parse(_))));
    }

    #[tokio::test]
    async fn test_oracle_failure_propagates() {
        let oracle = MockOracle::default();
        oracle.push_transient_error("rate limited");
        let extractor = extractor_with(oracle);

        let result = extractor
            .extract(ClaimSource::Document("spec".to_string()))
            .await;
        assert!(matches!(result, Err(ExtractorError::Oracle(_))));
    }
}
