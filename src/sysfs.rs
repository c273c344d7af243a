//! Reading and writing single-value attribute files

use crate::errors::{CliError, Result};
use log::{debug, trace};
use nix::errno::Errno;
use nix::unistd::{access, AccessFlags};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;

/// Read the first line of `path`, without its line terminator
pub fn read_line(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => CliError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => CliError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| CliError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
    if line.ends_with('\n') {
        line.pop();
    }

    trace!("Read '{}' from {}", line, path.display());
    Ok(line)
}

/// Replace the contents of an existing attribute file with `value`.
///
/// Write access is checked up front so a missing privilege is reported as
/// such instead of as a generic open failure.
pub fn write_value(path: &Path, value: &str) -> Result<()> {
    match access(path, AccessFlags::W_OK) {
        Ok(()) => {}
        Err(Errno::ENOENT) => {
            return Err(CliError::FileOpen {
                path: path.to_path_buf(),
                source: std::io::Error::from(ErrorKind::NotFound),
            })
        }
        Err(errno) => {
            debug!("No write access to {}: {}", path.display(), errno);
            return Err(CliError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
    }

    let write_err = |e| CliError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(value.as_bytes()).map_err(write_err)?;

    debug!("Wrote '{}' to {}", value, path.display());
    Ok(())
}
