//! Step catalog: the ordered demo script
//!
//! A catalog is a plain `Vec<Step>`; position in the list is a step's only
//! identity. The built-in script lives in [`builtin`]. Custom scripts are
//! TOML files with one `[[steps]]` table per step:
//!
//! ```toml
//! [[steps]]
//! title = "Local Development"
//! description = "Start it with `docker run`."
//! code_title = "terminal"
//! code = """
//! # Start locally
//! $ docker run -p 8080:8080 opendata/log:latest"""
//! ```

mod builtin;

pub use builtin::builtin;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One entry of the demo script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub title: String,
    /// Narrative text. Runs wrapped in backticks are shown as inline code.
    pub description: String,
    /// Caption of the code panel (a file name, or `terminal`)
    pub code_title: String,
    /// Transcript shown in the code panel, one display line per `\n`
    pub code: String,
}

impl Step {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        code_title: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Step {
            title: title.into(),
            description: description.into(),
            code_title: code_title.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    steps: Vec<Step>,
}

/// Errors from reading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("catalog contains no steps")]
    Empty,
}

/// Parse a catalog from TOML text
pub fn parse(text: &str) -> Result<Vec<Step>, CatalogError> {
    let file: CatalogFile = toml::from_str(text)?;
    if file.steps.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(file.steps)
}

/// Read and parse a catalog file
pub fn load(path: &Path) -> Result<Vec<Step>, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let steps = parse(&text)?;
    tracing::debug!(path = %path.display(), steps = steps.len(), "loaded step catalog");
    Ok(steps)
}

/// Render a catalog as TOML, in the format [`parse`] reads
pub fn to_toml(steps: &[Step]) -> Result<String, CatalogError> {
    let file = CatalogFile {
        steps: steps.to_vec(),
    };
    Ok(toml::to_string(&file)?)
}
