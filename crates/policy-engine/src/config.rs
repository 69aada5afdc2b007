//! Pipeline configuration
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! gives the standard behaviour. Example:
//!
//! ```toml
//! [limits]
//! key_exclusions = 5
//!
//! [summary]
//! policy_name = "Family Floater Gold"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared_types::Category;
use std::fs;
use std::path::Path;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub limits: Limits,
    pub min_lengths: MinLengths,
    pub summary: SummaryProfile,
}

impl PipelineConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// Maximum number of items kept per section
///
/// Classified sections apply their limit to each sub-kind separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub policy_identification: usize,
    pub company_details: usize,
    pub coverage_details: usize,
    pub coverage_amounts: usize,
    pub eligibility_criteria: usize,
    pub key_benefits: usize,
    pub waiting_periods: usize,
    pub key_exclusions: usize,
    pub special_features: usize,
    pub claims_process: usize,
    pub contact_info: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            policy_identification: 8,
            company_details: 6,
            coverage_details: 8,
            coverage_amounts: 5,
            eligibility_criteria: 5,
            key_benefits: 3,
            waiting_periods: 4,
            key_exclusions: 3,
            special_features: 3,
            claims_process: 6,
            contact_info: 8,
        }
    }
}

impl Limits {
    pub fn cap_for(&self, category: Category) -> usize {
        match category {
            Category::PolicyIdentification => self.policy_identification,
            Category::CompanyDetails => self.company_details,
            Category::CoverageDetails => self.coverage_details,
            Category::EligibilityCriteria => self.eligibility_criteria,
            Category::KeyBenefits => self.key_benefits,
            Category::WaitingPeriods => self.waiting_periods,
            Category::KeyExclusions => self.key_exclusions,
            Category::SpecialFeatures => self.special_features,
            Category::ClaimsProcess => self.claims_process,
            Category::ContactInfo => self.contact_info,
        }
    }
}

/// Minimum trimmed value length, in characters, for a match to be kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinLengths {
    pub key_benefits: usize,
    pub key_exclusions: usize,
    pub special_features: usize,
}

impl Default for MinLengths {
    fn default() -> Self {
        Self {
            key_benefits: 10,
            key_exclusions: 15,
            special_features: 15,
        }
    }
}

impl MinLengths {
    /// Zero for categories without a length filter
    pub fn min_for(&self, category: Category) -> usize {
        match category {
            Category::KeyBenefits => self.key_benefits,
            Category::KeyExclusions => self.key_exclusions,
            Category::SpecialFeatures => self.special_features,
            _ => 0,
        }
    }
}

/// Fixed identity lines printed at the top of the simplified summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryProfile {
    pub policy_name: String,
    pub policy_type: String,
}

impl Default for SummaryProfile {
    fn default() -> Self {
        Self {
            policy_name: "Total Health Plan".to_string(),
            policy_type: "Health Insurance".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = PipelineConfig::from_str("").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.limits.cap_for(Category::KeyExclusions), 3);
        assert_eq!(config.min_lengths.min_for(Category::ContactInfo), 0);
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [limits]
            key_exclusions = 5

            [summary]
            policy_name = "Family Floater Gold"
        "#;
        let config = PipelineConfig::from_str(toml).unwrap();
        assert_eq!(config.limits.key_exclusions, 5);
        assert_eq!(config.limits.contact_info, 8);
        assert_eq!(config.summary.policy_name, "Family Floater Gold");
        assert_eq!(config.summary.policy_type, "Health Insurance");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = PipelineConfig::from_str("[limits\nkey_benefits = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[min_lengths]\nkey_benefits = 4").unwrap();
        let config = PipelineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.min_lengths.key_benefits, 4);
        assert_eq!(config.min_lengths.key_exclusions, 15);
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = PipelineConfig::from_file("/nonexistent/policy.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/policy.toml"));
    }
}
