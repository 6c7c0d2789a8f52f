//! Atomic writes of report output.

use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use complaints_core::error::{ComplaintError, Result};
use tracing::debug;

/// Write `contents` to `path`, creating parent directories if needed.
///
/// The data goes to a sibling `<name>.tmp` file first and is then renamed
/// over `path`, so a failed write never leaves a truncated report behind.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: std::io::Error| ComplaintError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let tmp = temp_path(path).ok_or_else(|| {
        write_err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    write_then_rename(&tmp, path, |file| file.write_all(contents.as_bytes()))
        .map_err(write_err)?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Fill `tmp` with `write`, then rename it onto `path`.
///
/// On any failure `tmp` is removed, so no partial file is left behind.
fn write_then_rename<F>(tmp: &Path, path: &Path, write: F) -> std::io::Result<()>
where
    F: FnOnce(&mut File) -> std::io::Result<()>,
{
    let result = File::create(tmp)
        .and_then(|mut file| {
            write(&mut file)?;
            file.sync_all()
        })
        .and_then(|()| std::fs::rename(tmp, path));

    if result.is_err() {
        let _ = std::fs::remove_file(tmp);
    }
    result
}

/// `<dir>/<name>.tmp` next to `path`.
fn temp_path(path: &Path) -> Option<PathBuf> {
    let mut name: OsString = path.file_name()?.to_os_string();
    name.push(".tmp");
    Some(path.with_file_name(name))
}
