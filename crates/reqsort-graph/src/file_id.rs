use std::borrow::Cow;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Identifier for a discovered file, used as a graph vertex key.
///
/// The identifier is an absolute path with `.` and `..` components removed
/// lexically. Two identifiers compare equal exactly when their cleaned paths
/// are equal; no filesystem access happens here, so callers that care about
/// symlinks must canonicalise before constructing the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(PathBuf);

impl FileId {
    /// Create a new file identifier from an absolute path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FileIdError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(FileIdError::EmptyPath);
        }

        if !path.is_absolute() {
            return Err(FileIdError::NotAbsolute(path.to_path_buf()));
        }

        Ok(Self(path.clean()))
    }

    /// Returns the underlying path representation.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Borrow the identifier as a string for logging/serialization.
    pub fn path_string(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    /// Render the identifier relative to `root`, always with `/` separators.
    ///
    /// Files outside `root` fall back to their full path.
    ///
    /// ```
    /// use reqsort_graph::FileId;
    /// use std::path::Path;
    ///
    /// let id = FileId::new("/project/lib/util.txt").unwrap();
    /// assert_eq!(id.relative_to(Path::new("/project")), "lib/util.txt");
    /// assert_eq!(id.relative_to(Path::new("/elsewhere")), "/project/lib/util.txt");
    /// ```
    pub fn relative_to(&self, root: &Path) -> String {
        relative_path(&self.0, root)
    }
}

/// Render any `path` relative to `root` the way [`FileId::relative_to`] does.
pub fn relative_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_string())
    }
}

impl AsRef<Path> for FileId {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Serialize for FileId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.path_string())
    }
}

impl<'de> Deserialize<'de> for FileId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        FileId::new(value).map_err(serde::de::Error::custom)
    }
}

/// Error type for `FileId` construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileIdError {
    /// The provided path was empty.
    #[error("file id path is empty")]
    EmptyPath,

    /// File identifiers are always absolute.
    #[error("file id path is not absolute: '{}'", .0.display())]
    NotAbsolute(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_relative_paths() {
        assert_eq!(FileId::new(""), Err(FileIdError::EmptyPath));
        assert!(matches!(
            FileId::new("src/a.txt"),
            Err(FileIdError::NotAbsolute(_))
        ));
    }

    #[test]
    fn test_cleans_dot_components() {
        let a = FileId::new("/root/./lib/../a.txt").unwrap();
        let b = FileId::new("/root/a.txt").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_path(), Path::new("/root/a.txt"));
    }

    #[test]
    fn test_relative_to_root_with_trailing_separator() {
        let id = FileId::new("/root/nested/deep/file.txt").unwrap();
        assert_eq!(id.relative_to(Path::new("/root/")), "nested/deep/file.txt");
        assert_eq!(id.relative_to(Path::new("/root")), "nested/deep/file.txt");
    }

    #[test]
    fn test_relative_path_matches_file_id_rendering() {
        let path = Path::new("/root").join("out").join("sorted.txt");
        let id = FileId::new(&path).unwrap();
        assert_eq!(relative_path(&path, Path::new("/root")), "out/sorted.txt");
        assert_eq!(relative_path(&path, Path::new("/root")), id.relative_to(Path::new("/root")));
        assert_eq!(relative_path(&path, Path::new("/other")), "/root/out/sorted.txt");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id = FileId::new("/root/a.txt").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"/root/a.txt\"");

        let back: FileId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<FileId>("\"relative.txt\"").is_err());
    }
}
