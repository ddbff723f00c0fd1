use crate::table::Table;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("unable to reach {origin} ({reason}); check your internet connection")]
    Connection { origin: String, reason: String },
    #[error("request for {origin} failed with status {status}")]
    Status { origin: String, status: String },
    #[error("empty CSV content from {origin}")]
    EmptyData { origin: String },
    #[error("failed to parse CSV from {origin}: {reason}")]
    Parse { origin: String, reason: String },
    #[error("file not found: {origin}")]
    FileNotFound { origin: String },
    #[error("unable to read {origin}: {reason}")]
    Io { origin: String, reason: String },
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load a table from a URL or a local path. Any failure is terminal for
/// the run: there is no retry, no cache, and no partial load.
pub fn load_table(source: &str) -> Result<Table, LoadError> {
    let raw = if is_remote(source) {
        fetch_text(source)?
    } else {
        read_local(source)?
    };
    if raw.trim().is_empty() {
        return Err(LoadError::EmptyData {
            origin: source.to_string(),
        });
    }
    Table::from_csv(raw.as_bytes()).map_err(|e| LoadError::Parse {
        origin: source.to_string(),
        reason: e.to_string(),
    })
}

fn fetch_text(source: &str) -> Result<String, LoadError> {
    let client = reqwest::blocking::Client::new();
    let resp = client
        .get(source)
        .send()
        .map_err(|e| LoadError::Connection {
            origin: source.to_string(),
            reason: e.to_string(),
        })?;
    let resp = resp.error_for_status().map_err(|e| LoadError::Status {
        origin: source.to_string(),
        status: e
            .status()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    })?;
    resp.text().map_err(|e| LoadError::Io {
        origin: source.to_string(),
        reason: e.to_string(),
    })
}

fn read_local(source: &str) -> Result<String, LoadError> {
    if !Path::new(source).exists() {
        return Err(LoadError::FileNotFound {
            origin: source.to_string(),
        });
    }
    std::fs::read_to_string(source).map_err(|e| LoadError::Io {
        origin: source.to_string(),
        reason: e.to_string(),
    })
}
