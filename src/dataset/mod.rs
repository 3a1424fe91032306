//! Dashboard dataset: summary cards, org tree and correlation map
//!
//! The dataset is declarative JSON. A built-in copy is embedded in the binary
//! from `data/`; a directory holding the same three files can be loaded
//! instead at startup.

pub mod validate;

use crate::correlation::CorrelationEntry;
use crate::org::{DepartmentNode, MetricSummary};
use indexmap::IndexMap;
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const SUMMARY_FILE: &str = "summary.json";
pub const ORG_FILE: &str = "org.json";
pub const CORRELATIONS_FILE: &str = "correlations.json";

#[derive(RustEmbed)]
#[folder = "data/"]
struct BuiltinData;

/// Errors raised while loading or validating a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Built-in dataset file missing: {0}")]
    MissingBuiltin(&'static str),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate department id: {0}")]
    DuplicateDepartment(String),

    #[error("Department '{dept}' lists metric '{metric}' more than once")]
    DuplicateMetric { dept: String, metric: String },

    #[error("Department with empty id under '{0}'")]
    EmptyDepartmentId(String),

    #[error("Correlation '{entry}' of '{dept}' has coefficient {coefficient} outside [-1, 1]")]
    CoefficientOutOfRange {
        dept: String,
        entry: String,
        coefficient: f64,
    },

    #[error("Correlation '{entry}' of '{dept}' has direction {direction:?} but coefficient {coefficient}")]
    DirectionMismatch {
        dept: String,
        entry: String,
        direction: crate::correlation::Direction,
        coefficient: f64,
    },

    #[error("Correlations attached to unknown department: {0}")]
    UnknownDepartment(String),
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Raw dataset, as read from disk or the embedded copy
#[derive(Debug, Clone)]
pub struct Dataset {
    pub summary: Vec<MetricSummary>,
    pub org: DepartmentNode,
    /// Department id → entry set, in file order
    pub correlations: IndexMap<String, Vec<CorrelationEntry>>,
}

impl Dataset {
    /// The sample dataset compiled into the binary
    pub fn builtin() -> DatasetResult<Self> {
        let dataset = Self {
            summary: parse_builtin(SUMMARY_FILE)?,
            org: parse_builtin(ORG_FILE)?,
            correlations: parse_builtin(CORRELATIONS_FILE)?,
        };
        info!("Loaded built-in dataset");
        Ok(dataset)
    }

    /// Load `summary.json`, `org.json` and `correlations.json` from `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> DatasetResult<Self> {
        let dir = dir.as_ref();
        let dataset = Self {
            summary: parse_file(&dir.join(SUMMARY_FILE))?,
            org: parse_file(&dir.join(ORG_FILE))?,
            correlations: parse_file(&dir.join(CORRELATIONS_FILE))?,
        };
        info!("Loaded dataset from {:?}", dir);
        Ok(dataset)
    }

    /// Built-in dataset unless a directory is given
    pub fn load(dir: Option<&Path>) -> DatasetResult<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::builtin(),
        }
    }
}

fn parse_builtin<T: DeserializeOwned>(file: &'static str) -> DatasetResult<T> {
    let asset = BuiltinData::get(file).ok_or(DatasetError::MissingBuiltin(file))?;
    serde_json::from_slice(asset.data.as_ref()).map_err(|source| DatasetError::Parse {
        file: file.to_string(),
        source,
    })
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> DatasetResult<T> {
    let bytes = std::fs::read(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| DatasetError::Parse {
        file: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.summary.len(), 3);
        assert_eq!(dataset.summary[0].id, "revenue_per_cost");
        assert_eq!(dataset.org.id, "hq");
        assert_eq!(dataset.org.department_count(), 8);
        let attached: Vec<&str> = dataset.correlations.keys().map(String::as_str).collect();
        assert_eq!(attached, vec!["hq", "south"]);
    }

    #[test]
    fn test_from_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_from_dir_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SUMMARY_FILE), "[]").unwrap();
        std::fs::write(dir.path().join(ORG_FILE), "{ not json").unwrap();
        std::fs::write(dir.path().join(CORRELATIONS_FILE), "{}").unwrap();
        match Dataset::from_dir(dir.path()) {
            Err(DatasetError::Parse { file, .. }) => assert!(file.ends_with(ORG_FILE)),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
