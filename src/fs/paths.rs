//! Path and directory management.

use std::path::Path;

use crate::error::Result;

/// List the names of regular files directly inside `dir`.
///
/// Names that are not valid UTF-8 cannot be matched or renamed safely; they
/// are skipped with a warning.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => tracing::warn!(
                "Skipping non UTF-8 filename in {}: {:?}",
                dir.display(),
                name
            ),
        }
    }

    Ok(names)
}

/// Check whether two paths resolve to the same file on disk.
pub fn is_same_file(a: &Path, b: &Path) -> Result<bool> {
    Ok(std::fs::canonicalize(a)? == std::fs::canonicalize(b)?)
}

/// Ensure the parent directory of `path` exists, creating it if necessary.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_file_names_skips_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("sub.png")).unwrap();
        std::fs::write(dir.path().join("sub.png").join("b.png"), b"x").unwrap();

        let names = list_file_names(dir.path()).unwrap();
        assert_eq!(names, vec!["a.png".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_file_names_skips_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Default_A.png"), b"x").unwrap();
        let raw = OsStr::from_bytes(b"Default_\xff.png");
        if std::fs::write(dir.path().join(raw), b"x").is_err() {
            // Some filesystems refuse non UTF-8 names outright.
            return;
        }

        let names = list_file_names(dir.path()).unwrap();
        assert_eq!(names, vec!["Default_A.png".to_string()]);
    }

    #[test]
    fn test_is_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        std::fs::write(&a, b"x").unwrap();
        std::fs::write(&b, b"x").unwrap();

        assert!(is_same_file(&a, &dir.path().join(".").join("a.png")).unwrap());
        assert!(!is_same_file(&a, &b).unwrap());
    }

    #[test]
    fn test_ensure_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("deeper").join("avatars.json");
        ensure_parent_dir(&out).unwrap();
        assert!(dir.path().join("nested").join("deeper").is_dir());

        // Bare filenames have an empty parent.
        ensure_parent_dir(Path::new("avatars.json")).unwrap();
    }
}
