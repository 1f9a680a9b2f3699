//! Writes the final bundle to disk.

use std::fs::OpenOptions;
use std::io::prelude::*;
use std::path::Path;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write `{name}`")]
    WriteFailed { source: anyhow::Error, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Truncate,
    Append,
}

/// Writes `data` to `path`, creating the file if needed.  `Truncate`
/// replaces any existing contents; `Append` adds to the end.
pub fn save(data: &str, path: &Path, mode: SaveMode) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true);
    match mode {
        SaveMode::Truncate => options.truncate(true),
        SaveMode::Append => options.append(true),
    };

    let name = path.display().to_string();
    let mut file = options.open(path).map_err(|e| Error::WriteFailed {
        source: e.into(),
        name: name.clone(),
    })?;

    file.write_all(data.as_bytes())
        .map_err(|e| Error::WriteFailed {
            source: e.into(),
            name,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn truncate_replaces_existing_contents() {
        let dir = TempDir::new("jsrequire-save").unwrap();
        let path = dir.path().join("out.js");
        fs::write(&path, "old contents").unwrap();

        save("new", &path, SaveMode::Truncate).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn append_adds_to_the_end() {
        let dir = TempDir::new("jsrequire-save").unwrap();
        let path = dir.path().join("out.js");

        save("first;", &path, SaveMode::Append).unwrap();
        save("second;", &path, SaveMode::Append).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first;second;");
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let dir = TempDir::new("jsrequire-save").unwrap();
        let path = dir.path().join("no-such-dir").join("out.js");
        assert!(save("data", &path, SaveMode::Truncate).is_err());
    }
}
