mod error;


pub use error::ConvertError;

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Read a whole document as UTF-8 text
///
/// A missing path maps to [`ConvertError::NotFound`]; every other failure
/// (permissions, directories, invalid UTF-8) maps to [`ConvertError::Read`].
pub fn read_document(path: &Path) -> Result<String, ConvertError> {
    let bytes = fs::read(path).map_err(|e| ConvertError::from_read(path, e))?;

    String::from_utf8(bytes).map_err(|e| {
        ConvertError::from_read(path, io::Error::new(io::ErrorKind::InvalidData, e))
    })
}

/// Write `contents` to `path` atomically
///
/// Data goes to a hidden sibling temp file first, is synced, then renamed
/// over the destination. The destination is either left untouched or fully
/// replaced.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), ConvertError> {
    let temp_path = temp_sibling(path);

    let result =
        write_and_sync(&temp_path, contents).and_then(|_| fs::rename(&temp_path, path));

    if let Err(e) = result {
        // Best effort: the temp file may not exist if creation failed
        let _ = fs::remove_file(&temp_path);
        return Err(ConvertError::write(path, e));
    }

    Ok(())
}

fn write_and_sync(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

/// Unique temp path next to `path`, e.g. `dir/.output.json.<uuid>.tmp`
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("output"))
        .to_string_lossy();
    let temp_name = format!(".{}.{}.tmp", name, Uuid::new_v4());

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(temp_name),
        _ => PathBuf::from(temp_name),
    }
}
