//! Literal file export.
//!
//! Writes template and document content to disk exactly as given, byte for
//! byte. Writes go through a sibling temporary file that is renamed into
//! place, and the temporary file is removed on any failure so no partial
//! artifacts survive an interrupted save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Validate a destination file name down to a single path component.
/// Remote-derived names flow through here, so separators and the dot
/// components are rejected rather than resolved.
pub fn sanitize_file_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return None;
    }
    Some(name.to_string())
}

/// Write `bytes` to `dir/file_name`, creating `dir` if needed.
///
/// Returns the path of the written file. An existing file with the same
/// name is replaced atomically.
pub fn export_bytes(dir: &Path, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    let file_name = sanitize_file_name(file_name).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid file name: {:?}", file_name),
        )
    })?;

    fs::create_dir_all(dir)?;
    let dest = dir.join(&file_name);
    let tmp = dir.join(format!(".{}.tmp", file_name));

    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp, &dest) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(dest)
}

/// Text variant of [`export_bytes`]; the UTF-8 bytes are written unmodified.
pub fn export_text(dir: &Path, file_name: &str, content: &str) -> io::Result<PathBuf> {
    export_bytes(dir, file_name, content.as_bytes())
}
