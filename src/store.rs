// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Persisted temperature.
//!
//! The state is a plain text file holding the decimal representation of the
//! last written temperature, nothing else. There is no locking: concurrent
//! runs against the same file must be serialized by the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ReadError, WriteError};

/// The file holding the last written temperature.
///
/// # Examples
///
/// ```no_run
/// use weather_temp::store::StateFile;
///
/// let state = StateFile::new("/var/lib/weather/temperature");
/// if state.read_prior()? != Some(21.5) {
///     state.write_prior(21.5)?;
/// }
/// # Ok::<(), weather_temp::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Creates a handle for the state file at `path`. Nothing is touched on
    /// disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the state file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the previously written temperature.
    ///
    /// Returns `Ok(None)` if the file does not exist or does not hold a
    /// number once surrounding whitespace is stripped (including contents
    /// that are not UTF-8). A broken file counts as "no known prior value":
    /// the next write replaces it.
    ///
    /// # Errors
    ///
    /// Returns `ReadError::Io` if the file exists but cannot be read.
    pub fn read_prior(&self) -> Result<Option<f64>, ReadError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No state file yet");
                return Ok(None);
            }
            Err(source) => {
                return Err(ReadError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let Ok(contents) = std::str::from_utf8(&bytes) else {
            tracing::warn!(path = %self.path.display(), "Ignoring non UTF-8 state file");
            return Ok(None);
        };

        match contents.trim().parse::<f64>() {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Ignoring unparsable state file: {e}"
                );
                Ok(None)
            }
        }
    }

    /// Overwrites the state file with `value`, creating it if needed.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns `WriteError::Io` if the file cannot be written.
    pub fn write_prior(&self, value: f64) -> Result<(), WriteError> {
        fs::write(&self.path, value.to_string()).map_err(|source| WriteError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), value, "Wrote state file");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn state_in(dir: &tempfile::TempDir) -> StateFile {
        StateFile::new(dir.path().join("temperature"))
    }

    #[test]
    fn missing_file_has_no_prior() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(state_in(&dir).read_prior().unwrap(), None);
    }

    #[test]
    fn reads_value_with_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);
        fs::write(state.path(), "  68\n").unwrap();
        assert_eq!(state.read_prior().unwrap(), Some(68.0));
    }

    #[test]
    fn reads_fractional_value() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);
        fs::write(state.path(), "-3.25").unwrap();
        assert_eq!(state.read_prior().unwrap(), Some(-3.25));
    }

    #[test]
    fn garbage_has_no_prior() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);
        fs::write(state.path(), "warm and sunny").unwrap();
        assert_eq!(state.read_prior().unwrap(), None);
    }

    #[test]
    fn empty_file_has_no_prior() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);
        fs::write(state.path(), "").unwrap();
        assert_eq!(state.read_prior().unwrap(), None);
    }

    #[test]
    fn non_utf8_has_no_prior() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);
        fs::write(state.path(), [0xff, 0xfe, b'7', b'0']).unwrap();
        assert_eq!(state.read_prior().unwrap(), None);
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateFile::new(dir.path());
        let err = state.read_prior().unwrap_err();
        let ReadError::Io { path, .. } = err;
        assert_eq!(path, dir.path());
    }

    #[test]
    fn write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);
        state.write_prior(70.0).unwrap();
        assert_eq!(fs::read_to_string(state.path()).unwrap(), "70");
    }

    #[test]
    fn write_truncates_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);
        fs::write(state.path(), "123456.789 and some trailing text").unwrap();
        state.write_prior(21.5).unwrap();
        assert_eq!(fs::read_to_string(state.path()).unwrap(), "21.5");
        assert_eq!(state.read_prior().unwrap(), Some(21.5));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateFile::new(dir.path().join("missing").join("temperature"));
        let err = state.write_prior(1.0).unwrap_err();
        let WriteError::Io { path, source } = err;
        assert_eq!(path, state.path());
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    }
}
