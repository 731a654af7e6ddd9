//! Resolution of the MetricFu report location.

use std::path::{Path, PathBuf};

/// Resolve the configured report path against the project base directory.
///
/// Absolute paths are taken as-is. Returns `None` when the resolved path is
/// not a regular file; a missing report skips the analysis but is not an
/// error.
pub fn resolve_report(base_dir: &Path, report_path: &str) -> Option<PathBuf> {
    let candidate = Path::new(report_path);
    let resolved = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base_dir.join(candidate)
    };

    log::info!("Reading MetricFu report from {}", resolved.display());

    if resolved.is_file() {
        Some(resolved)
    } else {
        log::warn!("MetricFu report not found at {}", resolved.display());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_relative_path_against_base_dir() {
        let dir = TempDir::new().unwrap();
        let report_dir = dir.path().join("tmp/metric_fu");
        fs::create_dir_all(&report_dir).unwrap();
        fs::write(report_dir.join("report.yml"), "---\n").unwrap();

        let resolved = resolve_report(dir.path(), "tmp/metric_fu/report.yml");
        assert_eq!(resolved, Some(report_dir.join("report.yml")));
    }

    #[test]
    fn absolute_path_ignores_base_dir() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("report.yml");
        fs::write(&report, "---\n").unwrap();

        let other_base = TempDir::new().unwrap();
        let resolved = resolve_report(other_base.path(), report.to_str().unwrap());
        assert_eq!(resolved, Some(report));
    }

    #[test]
    fn missing_report_yields_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_report(dir.path(), "tmp/metric_fu/report.yml"), None);
    }

    #[test]
    fn directory_is_not_a_report() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("report.yml")).unwrap();
        assert_eq!(resolve_report(dir.path(), "report.yml"), None);
    }
}
