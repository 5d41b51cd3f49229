//! Aggregated pipeline configuration

use attest_extractor::ExtractorConfig;
use attest_indexer::IndexerConfig;
use attest_remediator::RemediatorConfig;
use attest_report::ReportConfig;
use attest_verifier::VerifierConfig;
use serde::{Deserialize, Serialize};

/// Configuration for one audit run, one section per stage.
///
/// Every section has working defaults, so an empty TOML document is a
/// valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Codebase walking
    #[serde(default)]
    pub indexer: IndexerConfig,

    /// Claim extraction
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Claim verification
    #[serde(default)]
    pub verifier: VerifierConfig,

    /// Remediation task generation
    #[serde(default)]
    pub remediator: RemediatorConfig,

    /// Report rendering
    #[serde(default)]
    pub report: ReportConfig,
}

impl PipelineConfig {
    /// Validate every stage section.
    pub fn validate(&self) -> Result<(), String> {
        self.indexer.validate()?;
        self.extractor.validate()?;
        self.verifier.validate()?;
        self.remediator.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_parses_to_defaults() {
        let config: PipelineConfig = toml::from_str("").unwrap();
        assert_eq!(config.verifier.batch_size, 15);
        assert_eq!(config.report.snippet_chars, 200);
    }

    #[test]
    fn test_partial_toml_overrides_one_section() {
        let config: PipelineConfig = toml::from_str(
            r#"
            [verifier]
            batch_size = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.verifier.batch_size, 5);
        // Untouched sections keep their defaults.
        assert_eq!(config.remediator.batch_size, 15);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: PipelineConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.indexer.max_files, config.indexer.max_files);
        assert_eq!(back.verifier.batch_size, config.verifier.batch_size);
    }

    #[test]
    fn test_invalid_section_rejected() {
        let mut config = PipelineConfig::default();
        config.verifier.batch_size = 0;
        assert!(config.validate().is_err());
    }
}
