//! Saving image bodies into the output directory.
//!
//! Bodies are written to a `.part` temp file and renamed over the final name,
//! so a failed write never leaves a truncated image at the final path.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `cat.jpg` → `cat.jpg.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Creates `dir` and any missing parents. An existing directory is fine.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Writes `bytes` to `dir/filename`, replacing any existing file of that name.
///
/// Returns the final path.
pub fn persist(dir: &Path, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    ensure_dir(dir)?;
    let final_path = dir.join(filename);
    let tmp = temp_path(&final_path);

    let result = write_synced(&tmp, bytes).and_then(|()| fs::rename(&tmp, &final_path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(final_path)
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = fs::File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}
