//! Path helpers for dataset and output names

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::shapefile::constants::extensions;

/// Removes the extension of the final path component, if any
///
/// Dots in parent directories are left alone.
pub fn strip_extension(path: &str) -> PathBuf {
    let path = Path::new(path);
    match path.extension() {
        Some(_) => path.with_extension(""),
        None => path.to_path_buf(),
    }
}

/// Appends `.ext` to `base` without replacing an existing dotted suffix
pub fn append_extension(base: &Path, ext: &str) -> PathBuf {
    let mut name: OsString = base.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Output document path for a user-supplied name: extension stripped, `.gpx` appended
pub fn gpx_output_path(path: &str) -> PathBuf {
    append_extension(&strip_extension(path), extensions::GPX)
}

/// Finds `<base>.<ext>`, also accepting the upper-case extension
pub fn locate_resource(base: &Path, ext: &str) -> Option<PathBuf> {
    [ext.to_lowercase(), ext.to_uppercase()]
        .iter()
        .map(|candidate| append_extension(base, candidate))
        .find(|path| path.is_file())
}
