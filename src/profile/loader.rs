//! Load and save session input as YAML or JSON

use super::SessionInput;
use crate::error::{PlannerError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Session file encodings, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFormat {
    Yaml,
    Json,
}

impl SessionFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(PlannerError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Load a session from a file
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<SessionInput> {
    let path = path.as_ref();
    let format = SessionFormat::from_path(path)?;
    let file = File::open(path).map_err(|e| PlannerError::io(path, e))?;

    let session = load_session_from_reader(BufReader::new(file), format)?;
    log::info!(
        "loaded session from {} ({} dependents, {} breakdown items)",
        path.display(),
        session.personal_info.dependents.len(),
        session.monthly_breakdown.len()
    );
    Ok(session)
}

/// Load a session from any reader
pub fn load_session_from_reader<R: Read>(reader: R, format: SessionFormat) -> Result<SessionInput> {
    let session: SessionInput = match format {
        SessionFormat::Yaml => serde_yaml::from_reader(reader)?,
        SessionFormat::Json => serde_json::from_reader(reader)?,
    };
    Ok(session)
}

/// Write a session to a file, format chosen by extension
pub fn save_session<P: AsRef<Path>>(path: P, session: &SessionInput) -> Result<()> {
    let path = path.as_ref();
    let format = SessionFormat::from_path(path)?;
    let file = File::create(path).map_err(|e| PlannerError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        SessionFormat::Yaml => serde_yaml::to_writer(&mut writer, session)?,
        SessionFormat::Json => serde_json::to_writer_pretty(&mut writer, session)?,
    }
    writer.flush().map_err(|e| PlannerError::io(path, e))?;
    Ok(())
}
