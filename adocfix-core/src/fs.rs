//! Filesystem abstractions used for document discovery and persistence.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File extension of the documents this tool repairs.
pub const DOCUMENT_EXTENSION: &str = "adoc";

/// Abstraction over filesystem access for testability.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// List all `.adoc` files reachable from the root path, sorted.
    fn list_documents(&self, root: &Path) -> Result<Vec<PathBuf>>;
    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Write a string back to a file, replacing its contents.
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new standard filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn list_documents(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                if is_hidden(&path) {
                    continue;
                }
                let file_type = entry.file_type()?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file() && is_document(&path) {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        Ok(std::fs::write(path, contents)?)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::StdFileSystem;
    use crate::fs::FileSystem;
    use std::path::PathBuf;

    #[test]
    fn std_filesystem_lists_only_documents_sorted() {
        let root = std::env::temp_dir().join(unique_dir_name());
        std::fs::create_dir_all(root.join("modules")).expect("create temp dirs");
        std::fs::create_dir_all(root.join(".git")).expect("create hidden dir");
        std::fs::write(root.join("modules/b.adoc"), "= B").expect("write b");
        std::fs::write(root.join("a.adoc"), "= A").expect("write a");
        std::fs::write(root.join("notes.txt"), "plain").expect("write txt");
        std::fs::write(root.join(".git/c.adoc"), "= C").expect("write hidden");

        let fs = StdFileSystem::new();
        let files = fs.list_documents(&root).expect("list documents");

        assert_eq!(files, vec![root.join("a.adoc"), root.join("modules/b.adoc")]);

        std::fs::remove_dir_all(&root).expect("cleanup temp dir");
    }

    #[test]
    fn std_filesystem_reads_and_writes() {
        let root = std::env::temp_dir().join(unique_dir_name());
        std::fs::create_dir_all(&root).expect("create temp dir");
        let file_path = root.join("topic.adoc");

        let fs = StdFileSystem::new();
        fs.write_string(&file_path, "= Topic\n").expect("write file");
        let contents = fs.read_to_string(&file_path).expect("read file");
        assert_eq!(contents, "= Topic\n");

        std::fs::remove_dir_all(&root).expect("cleanup temp dir");
    }

    fn unique_dir_name() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        PathBuf::from(format!("adocfix_core_fs_test_{nanos}"))
    }
}
