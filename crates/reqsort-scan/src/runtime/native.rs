//! Native runtime backed by `std::fs` and `walkdir`.
//!
//! ```text
//! NativeRuntime
//! ┌──────────────────┐
//! │ .read_to_string()│────▶ std::fs::read() + UTF-8 check
//! │ .write_file()    │────▶ std::fs::write()
//! │ .walk_files()    │────▶ walkdir::WalkDir (sorted by file name)
//! └──────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{Runtime, RuntimeError, RuntimeResult};

/// Filesystem runtime for real directory trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRuntime;

impl NativeRuntime {
    pub fn new() -> Self {
        Self
    }
}

fn io_error(action: &str, path: &Path, err: io::Error) -> RuntimeError {
    if err.kind() == io::ErrorKind::NotFound {
        RuntimeError::FileNotFound(path.to_path_buf())
    } else {
        RuntimeError::Io(format!("Failed to {action} {}: {err}", path.display()))
    }
}

impl Runtime for NativeRuntime {
    fn read_to_string(&self, path: &Path) -> RuntimeResult<String> {
        let bytes = std::fs::read(path).map_err(|e| io_error("read", path, e))?;
        String::from_utf8(bytes).map_err(|_| RuntimeError::InvalidUtf8(path.to_path_buf()))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> RuntimeResult<()> {
        std::fs::write(path, content).map_err(|e| io_error("write", path, e))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> RuntimeResult<PathBuf> {
        std::fs::canonicalize(path).map_err(|e| io_error("resolve", path, e))
    }

    fn walk_files(&self, root: &Path, follow_links: bool) -> RuntimeResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(follow_links)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let at = e.path().unwrap_or(root).display().to_string();
                RuntimeError::Io(format!("Failed to walk {at}: {e}"))
            })?;

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_files_sorted_and_recursive() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("lib/nested")).unwrap();
        fs::write(root.join("z.txt"), "z").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("lib/core.txt"), "core").unwrap();
        fs::write(root.join("lib/nested/deep.txt"), "deep").unwrap();

        let files = NativeRuntime.walk_files(root, false).unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("lib/core.txt"),
                PathBuf::from("lib/nested/deep.txt"),
                PathBuf::from("z.txt"),
            ]
        );
    }

    #[test]
    fn test_walk_files_empty_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();
        assert!(NativeRuntime.walk_files(temp.path(), false).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = NativeRuntime
            .read_to_string(&temp.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::FileNotFound(_)));
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = NativeRuntime.read_to_string(&path).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidUtf8(p) if p == path));
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        NativeRuntime.write_file(&path, b"hello\n").unwrap();
        assert_eq!(NativeRuntime.read_to_string(&path).unwrap(), "hello\n");
        assert!(NativeRuntime.is_file(&path));
        assert!(NativeRuntime.is_dir(temp.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_only_followed_on_request() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("linked.txt"), "x").unwrap();
        fs::write(temp.path().join("own.txt"), "y").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("link")).unwrap();

        assert_eq!(NativeRuntime.walk_files(temp.path(), false).unwrap().len(), 1);
        assert_eq!(NativeRuntime.walk_files(temp.path(), true).unwrap().len(), 2);
    }
}
