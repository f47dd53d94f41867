//! Lexicographic ordering by root-relative path.

use std::path::Path;

use crate::file_set::FileSet;
use crate::topo::SortOrder;

/// Order files by their root-relative path string.
///
/// Comparison is plain string order on the `/`-joined relative path, so
/// `a.txt` sorts before `a/b.txt` (`.` < `/`). File ids are unique, so the
/// order is total; ties cannot occur.
pub fn sort_by_name(files: &FileSet, root: &Path) -> SortOrder {
    let mut keyed: Vec<(String, usize)> = files
        .iter()
        .enumerate()
        .map(|(index, file)| (file.relative_to(root), index))
        .collect();
    keyed.sort_unstable();

    SortOrder::new(keyed.into_iter().map(|(_, index)| index).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileId;

    fn set(paths: &[&str]) -> FileSet {
        FileSet::new(paths.iter().map(|p| FileId::new(p).unwrap())).unwrap()
    }

    #[test]
    fn test_sorts_by_relative_path_string() {
        let files = set(&["/root/z.txt", "/root/a/b.txt", "/root/a.txt", "/root/B.txt"]);
        let order = sort_by_name(&files, Path::new("/root"));

        let names: Vec<_> = order
            .files(&files)
            .map(|f| f.relative_to(Path::new("/root")))
            .collect();
        assert_eq!(names, vec!["B.txt", "a.txt", "a/b.txt", "z.txt"]);
    }

    #[test]
    fn test_empty_set() {
        assert!(sort_by_name(&FileSet::default(), Path::new("/root")).is_empty());
    }
}
