//! Reads the named files and concatenates them into a single buffer.

use super::RawSource;
use std::fs::File;
use std::io::prelude::*;

/// The outcome of a load pass.
pub struct Loaded {
    /// Every readable file's contents, each followed by a single newline,
    /// in input order.
    pub source: RawSource,

    /// Whether the *last* attempted read succeeded.  This is a weak
    /// signal that says nothing about earlier files; check `skipped` for
    /// the real picture.
    pub last_ok: bool,

    /// Full paths of the files that could not be read, in input order.
    pub skipped: Vec<String>,
}

/// Loads `names` in order, prepending `path_prefix` to each name.
///
/// Unreadable files (including files that are not valid UTF-8) contribute
/// nothing to the buffer and do not abort the pass; they are recorded in
/// [`Loaded::skipped`].
pub fn load(names: &[String], path_prefix: &str) -> Loaded {
    let mut buffer = String::new();
    let mut last_ok = true;
    let mut skipped = Vec::new();

    for name in names {
        let full_name = format!("{}{}", path_prefix, name);
        match read_file(&full_name) {
            Ok(content) => {
                buffer.push_str(&content);
                buffer.push('\n');
                last_ok = true;
            }
            Err(_) => {
                skipped.push(full_name);
                last_ok = false;
            }
        }
    }

    Loaded {
        source: RawSource::new(buffer),
        last_ok,
        skipped,
    }
}

fn read_file(name: &str) -> std::io::Result<String> {
    let mut content = String::new();
    File::open(name)?.read_to_string(&mut content)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new("jsrequire-loader").expect("failed to create temp dir");
        fs::write(dir.path().join("a.js"), "var a = 1;").unwrap();
        fs::write(dir.path().join("b.js"), "var b = 2;").unwrap();
        dir
    }

    fn prefix(dir: &TempDir) -> String {
        format!("{}/", dir.path().display())
    }

    #[test]
    fn concatenates_in_order_with_newlines() {
        let dir = fixture_dir();
        let names = vec!["a.js".to_string(), "b.js".to_string()];
        let loaded = load(&names, &prefix(&dir));
        assert_eq!(loaded.source.inner(), "var a = 1;\nvar b = 2;\n");
        assert!(loaded.last_ok);
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn missing_files_are_skipped_silently() {
        let dir = fixture_dir();
        let names = vec!["missing.js".to_string(), "b.js".to_string()];
        let loaded = load(&names, &prefix(&dir));
        assert_eq!(loaded.source.inner(), "var b = 2;\n");
        assert_eq!(loaded.skipped.len(), 1);
        assert!(loaded.skipped[0].ends_with("missing.js"));
    }

    #[test]
    fn last_ok_reflects_only_the_final_attempt() {
        let dir = fixture_dir();

        let loaded = load(
            &["missing.js".to_string(), "b.js".to_string()],
            &prefix(&dir),
        );
        assert!(loaded.last_ok);

        let loaded = load(
            &["b.js".to_string(), "missing.js".to_string()],
            &prefix(&dir),
        );
        assert!(!loaded.last_ok);
    }

    #[test]
    fn empty_name_list_yields_empty_buffer() {
        let loaded = load(&[], "");
        assert_eq!(loaded.source.inner(), "");
        assert!(loaded.last_ok);
    }
}
