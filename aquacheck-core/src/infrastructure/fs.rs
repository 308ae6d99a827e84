use crate::application::report::ReportSnapshot;
use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Writes a report snapshot as pretty JSON, atomically.
///
/// The JSON goes to a temporary file next to `path` which is then renamed over
/// it, so a renderer reading `path` sees either the previous report or the new
/// one, never a truncated file. Missing parent directories are created.
pub fn persist_report(path: &Path, snapshot: &ReportSnapshot) -> Result<(), InfrastructureError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let json = snapshot.to_json()?;

    // Same directory so the rename never crosses filesystems
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(json.as_bytes())?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}
