//! TOML configuration layered between built-in defaults and CLI flags.
//!
//! ```toml
//! source = "data/dados-imersao-final.csv"
//! theme = "light"
//! reference_title = "Data Engineer"
//! ranking_limit = 15
//! histogram_bins = 30
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use salary_dashboard::DashboardSettings;
use salary_ingest::DataSource;
use salary_model::MapTheme;

/// Every field is optional; unset fields keep the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub source: Option<String>,
    pub theme: Option<MapTheme>,
    pub reference_title: Option<String>,
    pub ranking_limit: Option<usize>,
    pub histogram_bins: Option<usize>,
}

impl DashboardConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse dashboard config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("load config {}", path.display()))
    }

    /// Defaults overridden by whatever the file sets.
    pub fn settings(&self) -> DashboardSettings {
        let mut settings = DashboardSettings::default();
        if let Some(theme) = self.theme {
            settings = settings.with_theme(theme);
        }
        if let Some(title) = &self.reference_title {
            settings.reference_title = title.clone();
        }
        if let Some(limit) = self.ranking_limit {
            settings.ranking_limit = limit;
        }
        if let Some(bins) = self.histogram_bins {
            settings.histogram_bins = bins;
        }
        settings
    }

    /// `--source` wins over the file, which wins over the published URL.
    pub fn data_source(&self, flag: Option<&str>) -> DataSource {
        flag.or(self.source.as_deref())
            .map(DataSource::parse)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salary_ingest::DEFAULT_SOURCE_URL;

    #[test]
    fn empty_file_keeps_defaults() {
        let config = DashboardConfig::from_toml("").expect("parse");
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.settings(), DashboardSettings::default());
        assert_eq!(
            config.data_source(None),
            DataSource::Url(DEFAULT_SOURCE_URL.to_string())
        );
    }

    #[test]
    fn file_values_override_defaults() {
        let config = DashboardConfig::from_toml(
            "theme = \"light\"\nreference_title = \"Data Engineer\"\nranking_limit = 5\n",
        )
        .expect("parse");
        let settings = config.settings();
        assert_eq!(settings.theme, MapTheme::Light);
        assert_eq!(settings.reference_title, "Data Engineer");
        assert_eq!(settings.ranking_limit, 5);
        assert_eq!(settings.histogram_bins, 40);
    }

    #[test]
    fn flag_source_beats_file_source() {
        let config = DashboardConfig::from_toml("source = \"from-file.csv\"").expect("parse");
        assert_eq!(
            config.data_source(None),
            DataSource::Path("from-file.csv".into())
        );
        assert_eq!(
            config.data_source(Some("https://example.com/data.csv")),
            DataSource::Url("https://example.com/data.csv".to_string())
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(DashboardConfig::from_toml("colour = \"red\"").is_err());
    }
}
