use crate::core::{ComplexityMetric, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = ".metricfu-scan.toml";

const DEFAULT_REPORT_PATH: &str = "tmp/metric_fu/report.yml";

/// Scanner configuration, loaded from the project root when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Report location, relative to the project base directory.
    pub report_path: String,

    /// Which MetricFu section supplies complexity scores ("saikuro" or "cane").
    pub complexity_metric: String,

    /// Glob patterns for source files to leave out of the scan.
    pub ignore_patterns: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            report_path: DEFAULT_REPORT_PATH.to_string(),
            complexity_metric: ComplexityMetric::Saikuro.display_name().to_string(),
            ignore_patterns: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from `.metricfu-scan.toml` in `base_dir`.
    ///
    /// A missing file means defaults; an unreadable or invalid file is
    /// reported and also falls back to defaults rather than aborting.
    pub fn load(base_dir: &Path) -> Self {
        let path = base_dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Cannot read {}: {e}. Using defaults.", path.display());
                return Self::default();
            }
        };

        match Self::parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid config {}: {e}. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The configured metric, parsed and validated.
    pub fn metric(&self) -> Result<ComplexityMetric> {
        self.complexity_metric
            .parse()
            .map_err(Error::Configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_metricfu_conventions() {
        let config = ScanConfig::default();
        assert_eq!(config.report_path, "tmp/metric_fu/report.yml");
        assert_eq!(config.metric().unwrap(), ComplexityMetric::Saikuro);
        assert!(config.ignore_patterns.is_empty());
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let config = ScanConfig::parse("complexity_metric = \"cane\"\n").unwrap();
        assert_eq!(config.metric().unwrap(), ComplexityMetric::Cane);
        assert_eq!(config.report_path, "tmp/metric_fu/report.yml");
    }

    #[test]
    fn loads_config_file_from_base_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "report_path = \"reports/metricfu.yml\"\nignore_patterns = [\"vendor/**\"]\n",
        )
        .unwrap();

        let config = ScanConfig::load(dir.path());
        assert_eq!(config.report_path, "reports/metricfu.yml");
        assert_eq!(config.ignore_patterns, vec!["vendor/**".to_string()]);
    }

    #[test]
    fn invalid_config_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "report_path = [3]").unwrap();

        assert_eq!(ScanConfig::load(dir.path()), ScanConfig::default());
    }

    #[test]
    fn bad_metric_string_is_a_configuration_error() {
        let config = ScanConfig {
            complexity_metric: "flog".to_string(),
            ..ScanConfig::default()
        };
        assert!(matches!(config.metric(), Err(Error::Configuration(_))));
    }
}
