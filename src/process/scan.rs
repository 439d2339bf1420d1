//! Document discovery.

use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use crate::{debug, log};

/// Lazily yield every file under `root` with the given extension
///
/// Traversal is serial and unsorted; hidden entries are included.
/// Symlinks to files are yielded, symlinked directories are not descended.
/// A missing root yields nothing and is reported, not treated as an error.
pub fn discover(root: &Path, extension: &str) -> impl Iterator<Item = PathBuf> {
    let walk = if root.is_dir() {
        Some(
            WalkDir::new(root)
                .parallelism(Parallelism::Serial)
                .skip_hidden(false)
                .into_iter(),
        )
    } else {
        log!("scan"; "source directory {} does not exist", root.display());
        None
    };

    let extension = extension.to_string();
    walk.into_iter()
        .flatten()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log!("warning"; "skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() || entry.file_type().is_symlink())
        .map(|entry| entry.path())
        .filter(move |path| has_extension(path, &extension))
        // resolves links; dangling ones and links to directories drop out here
        .filter(|path| path.is_file())
        .inspect(|path| debug!("scan"; "found {}", path.display()))
}

/// Case-sensitive `*.{extension}` match on the file name.
///
/// Unlike [`Path::extension`], a bare `.md` counts.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name().is_some_and(|name| {
        name.as_encoded_bytes()
            .strip_suffix(extension.as_bytes())
            .is_some_and(|stem| stem.ends_with(b"."))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sorted(root: &Path, extension: &str) -> Vec<PathBuf> {
        let mut files: Vec<_> = discover(root, extension).collect();
        files.sort();
        files
    }

    #[test]
    fn test_discovers_recursively() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("guide/deep")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("SUMMARY.md"), "").unwrap();
        fs::write(root.join("guide/intro.md"), "").unwrap();
        fs::write(root.join("guide/deep/detail.md"), "").unwrap();
        fs::write(root.join(".hidden/notes.md"), "").unwrap();
        fs::write(root.join("guide/image.png"), "").unwrap();
        fs::write(root.join("guide/README.MD"), "").unwrap();
        fs::write(root.join("guide/md"), "").unwrap();

        assert_eq!(
            sorted(root, "md"),
            vec![
                root.join(".hidden/notes.md"),
                root.join("SUMMARY.md"),
                root.join("guide/deep/detail.md"),
                root.join("guide/intro.md"),
            ]
        );
    }

    #[test]
    fn test_directories_named_like_documents_skipped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("chapter.md")).unwrap();
        fs::write(temp.path().join("chapter.md/inner.md"), "").unwrap();

        assert_eq!(
            sorted(temp.path(), "md"),
            vec![temp.path().join("chapter.md/inner.md")]
        );
    }

    #[test]
    fn test_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        assert_eq!(discover(&temp.path().join("src"), "md").count(), 0);
    }

    #[test]
    fn test_root_that_is_a_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("src");
        fs::write(&file, "").unwrap();
        assert_eq!(discover(&file, "md").count(), 0);
    }

    #[test]
    fn test_bare_extension_name_matches() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".md"), "").unwrap();
        fs::write(temp.path().join("md"), "").unwrap();
        fs::write(temp.path().join("notes.md.bak"), "").unwrap();

        assert_eq!(sorted(temp.path(), "md"), vec![temp.path().join(".md")]);
        assert!(has_extension(Path::new("a/SUMMARY.md.md"), "md"));
        assert!(!has_extension(Path::new("a/xmd"), "md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_discovered() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        let shared = temp.path().join("shared");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&shared).unwrap();
        fs::write(shared.join("README.md"), "").unwrap();
        fs::write(root.join("intro.md"), "").unwrap();

        symlink(shared.join("README.md"), root.join("README.md")).unwrap();
        symlink(shared.join("gone.md"), root.join("dangling.md")).unwrap();
        symlink(&shared, root.join("linked.md")).unwrap();

        assert_eq!(
            sorted(&root, "md"),
            vec![root.join("README.md"), root.join("intro.md")]
        );
    }

    #[test]
    fn test_other_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.md"), "").unwrap();
        fs::write(temp.path().join("b.markdown"), "").unwrap();
        assert_eq!(
            sorted(temp.path(), "markdown"),
            vec![temp.path().join("b.markdown")]
        );
    }
}
