use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hpo_model::CodeSystem;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{OutputError, Result};

/// Render a code system the way it is written to disk.
pub fn to_json_string(code_system: &CodeSystem) -> Result<String> {
    let mut text = serde_json::to_string_pretty(code_system)?;
    text.push('\n');
    Ok(text)
}

/// Write a code system to `path`, replacing any existing file.
pub fn write_code_system(path: &Path, code_system: &CodeSystem) -> Result<()> {
    write_json(path, code_system)?;
    info!(
        path = %path.display(),
        concepts = code_system.concept.len(),
        "code system written"
    );
    Ok(())
}

/// Serialize `value` as pretty JSON to `path` via a temporary sibling file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let dir = parent_dir(path);
    let temp = NamedTempFile::new_in(&dir).map_err(|source| OutputError::Create {
        dir: dir.clone(),
        source,
    })?;
    debug!(temp = %temp.path().display(), "writing to temporary file");

    let mut writer = BufWriter::new(temp);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    let temp = writer.into_inner().map_err(|err| OutputError::Write {
        path: path.to_path_buf(),
        source: err.into_error(),
    })?;

    temp.persist(path).map_err(|err| OutputError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_name_uses_current_dir() {
        assert_eq!(parent_dir(Path::new("hp.json")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("out/hp.json")), PathBuf::from("out"));
    }
}
