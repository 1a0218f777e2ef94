// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PresenterError, Result};
use crate::grouping::OrderingRules;
use crate::models::GroupingMode;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub presenter: PresenterConfig,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub ordering: OrderingRules,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PresenterConfig {
    pub grouping_mode: GroupingMode,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            grouping_mode: GroupingMode::YearCategory,
        }
    }
}

/// Localized strings handed to the presenter by the i18n layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Labels {
    pub documents: String,
    pub download: String,
    pub other_documents: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            documents: "Documente".to_string(),
            download: "Descarcă".to_string(),
            other_documents: "Alte documente".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./exports"),
            pretty: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SALONTA_DOCS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PresenterError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PresenterError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            presenter: PresenterConfig::default(),
            labels: Labels::default(),
            ordering: OrderingRules::default(),
            export: ExportConfig::default(),
        }
    }

    /// Ordering rules with the "other documents" label registered as an
    /// alias of the ungrouped sentinel.
    pub fn ordering_rules(&self) -> OrderingRules {
        self.ordering
            .clone()
            .with_ungrouped_alias(self.labels.other_documents.clone())
    }

    fn validate(&self) -> Result<()> {
        let labels = [
            ("labels.documents", &self.labels.documents),
            ("labels.download", &self.labels.download),
            ("labels.other_documents", &self.labels.other_documents),
            (
                "ordering.pinned_first_category",
                &self.ordering.pinned_first_category,
            ),
            (
                "ordering.pinned_last_category",
                &self.ordering.pinned_last_category,
            ),
            ("ordering.other_years_label", &self.ordering.other_years_label),
            ("ordering.ungrouped_sentinel", &self.ordering.ungrouped_sentinel),
        ];

        for (name, value) in labels {
            if value.trim().is_empty() {
                return Err(PresenterError::Config(format!("{} must not be empty", name)));
            }
        }

        if self.ordering.pinned_first_category == self.ordering.pinned_last_category {
            return Err(PresenterError::Config(
                "pinned_first_category and pinned_last_category must differ".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.presenter.grouping_mode, GroupingMode::YearCategory);
        assert_eq!(config.ordering.pinned_first_category, "rezultate");
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("presenter.toml");
        fs::write(
            &path,
            r#"
[presenter]
grouping_mode = "flat"

[labels]
documents = "Documents"
download = "Download"
other_documents = "Other documents"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.presenter.grouping_mode, GroupingMode::Flat);
        assert_eq!(config.labels.download, "Download");
        assert_eq!(config.ordering.other_years_label, "Alte ani");
    }

    #[test]
    fn test_rejects_identical_anchors() {
        let mut config = Config::default_config();
        config.ordering.pinned_last_category = "rezultate".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_label() {
        let mut config = Config::default_config();
        config.labels.download = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ordering_rules_carry_alias() {
        let config = Config::default_config();
        let rules = config.ordering_rules();
        assert!(rules.is_ungrouped("Alte documente"));
        assert!(rules.is_ungrouped("default"));
    }
}
