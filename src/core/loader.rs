use crate::domain::model::AppRecord;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// Why a load failed. Callers that only want ids go through
/// [`extract_app_ids`], which turns all of these into a diagnostic and an
/// empty list.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File '{0}' not found.")]
    NotFound(String),

    #[error("Invalid JSON in file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Error reading file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Reads and parses the app list. The top-level JSON value must be an array
/// of objects; records are returned in file order.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<AppRecord>, LoadError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path_str.clone()),
        _ => LoadError::Io {
            path: path_str.clone(),
            source: e,
        },
    })?;

    serde_json::from_str(&content).map_err(|e| LoadError::Parse {
        path: path_str,
        source: e,
    })
}

/// Extracts every `teamsAppId` from the file, in file order. Records without
/// the field are skipped. Never fails: any load error is reported and an
/// empty list returned.
pub fn extract_app_ids<P: AsRef<Path>>(path: P) -> Vec<String> {
    match load_records(path) {
        Ok(records) => records
            .into_iter()
            .filter_map(|record| record.teams_app_id)
            .collect(),
        Err(e) => {
            tracing::warn!("Failed to load app list: {}", e);
            eprintln!("❌ Error: {}", e);
            Vec::new()
        }
    }
}
