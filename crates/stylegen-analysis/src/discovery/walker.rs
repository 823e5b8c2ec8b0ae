//! Depth-1 walk over the themes directory.

use std::path::Path;

use ignore::WalkBuilder;
use stylegen_core::errors::ScanError;

use super::types::ThemeSource;

/// Enumerate theme folders under `root` that contain `page_file`.
///
/// Results are sorted by folder name so discovery order, and therefore
/// artifact key order, is stable across machines. Folders without the page
/// file are skipped silently; hidden folders are never considered.
pub fn discover_themes(root: &Path, page_file: &str) -> Result<Vec<ThemeSource>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let walker = WalkBuilder::new(root)
        .max_depth(Some(1))
        .standard_filters(false)
        .hidden(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut themes = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| walk_error(root, err))?;
        if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }

        let page_path = entry.path().join(page_file);
        let name = entry.file_name().to_string_lossy().into_owned();
        if page_path.is_file() {
            themes.push(ThemeSource { name, page_path });
        } else {
            tracing::debug!(folder = %name, page_file, "skipping folder without page file");
        }
    }

    tracing::debug!(root = %root.display(), count = themes.len(), "discovered themes");
    Ok(themes)
}

fn walk_error(root: &Path, err: ignore::Error) -> ScanError {
    let message = err.to_string();
    match err.into_io_error() {
        Some(source) => ScanError::IoError {
            path: root.to_path_buf(),
            source,
        },
        None => ScanError::Walk {
            path: root.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn theme(root: &Path, name: &str, file: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), "export default function Page() {}").unwrap();
    }

    #[test]
    fn test_only_folders_with_page_file_are_themes() {
        let tmp = tempfile::TempDir::new().unwrap();
        theme(tmp.path(), "noir", "page.tsx");
        theme(tmp.path(), "brutalist", "page.tsx");
        theme(tmp.path(), "drafts", "notes.md");
        fs::write(tmp.path().join("page.tsx"), "not a theme folder").unwrap();

        let themes = discover_themes(tmp.path(), "page.tsx").unwrap();
        let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["brutalist", "noir"]);
        assert_eq!(themes[1].page_path, tmp.path().join("noir").join("page.tsx"));
    }

    #[test]
    fn test_hidden_and_nested_folders_ignored() {
        let tmp = tempfile::TempDir::new().unwrap();
        theme(tmp.path(), ".cache", "page.tsx");
        theme(&tmp.path().join("group"), "nested", "page.tsx");

        let themes = discover_themes(tmp.path(), "page.tsx").unwrap();
        assert!(themes.is_empty(), "got {themes:?}");
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = discover_themes(&tmp.path().join("absent"), "page.tsx").unwrap_err();
        assert!(matches!(err, ScanError::RootNotFound { .. }));
    }
}
