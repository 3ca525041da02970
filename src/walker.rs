use std::io;
use std::path::Path;

use log::{debug, trace};
use serde_json::Value;
use walkdir::WalkDir;

use crate::error::WalkError;
use crate::extensions::Extensions;

/// Recursively walks `start` and returns the full path of every entry
/// whose extension equals a member of `extensions`, byte for byte, in
/// traversal order.
///
/// Every entry reachable from `start` is a candidate, directories
/// included; a directory named `backups.yaml` matches `".yaml"` just
/// like a file would. Symbolic links are reported as the plain entries
/// the OS returns and are not followed. Zero matches yields an empty
/// vector, not an error.
///
/// Any filesystem error aborts the whole walk: a missing or unreadable
/// start path, or an I/O failure on any directory mid-traversal,
/// surfaces as [`WalkError::Traversal`] with no partial results.
///
/// ```no_run
/// let configs = extwalk::walk("deploy", [".yaml", ".yml"])?;
/// # Ok::<(), extwalk::WalkError>(())
/// ```
pub fn walk<P, E>(start: P, extensions: E) -> Result<Vec<String>, WalkError>
where
    P: AsRef<Path>,
    E: Into<Extensions>,
{
    let start = start.as_ref();
    let wanted = extensions.into().into_canonical();
    debug!(
        "walking {} against {} extension(s)",
        start.display(),
        wanted.len()
    );

    // walkdir only fails lazily on a start path that is a plain file.
    let meta = std::fs::metadata(start)?;
    if !meta.is_dir() {
        return Err(WalkError::Traversal(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{} is not a directory", start.display()),
        )));
    }

    let mut matched = Vec::new();
    // min_depth(1): the start directory itself is not a candidate.
    for entry in WalkDir::new(start).min_depth(1).follow_links(false) {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy();
        if wanted.iter().any(|ext| ext == extension_of(&name)) {
            trace!("matched {}", entry.path().display());
            matched.push(entry.path().to_string_lossy().into_owned());
        }
    }

    debug!("walk of {} matched {} entries", start.display(), matched.len());
    Ok(matched)
}

/// Loosely-typed front for [`walk`], for callers that receive both
/// arguments as untyped values. Validates that `start` is a string and
/// `extensions` is a string or a list of strings, then delegates; on
/// validation failure no traversal is attempted.
pub fn walk_value(start: &Value, extensions: &Value) -> Result<Vec<String>, WalkError> {
    let start = match start {
        Value::String(path) => path,
        _ => return Err(WalkError::StartPathNotString),
    };
    let extensions = Extensions::try_from(extensions)?;
    walk(start, extensions)
}

/// The extension of one path component: the suffix from the final dot
/// (inclusive) to the end, or the empty string when no dot is present.
fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}
