//! Path display helpers

use std::path::{Component, Path};

/// Render `path` relative to `root` with `/` separators.
///
/// Paths outside `root` are rendered in full.
pub fn relative_display(root: &Path, path: &Path) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_display_nested() {
        let root = PathBuf::from("/project");
        let path = root.join("lib").join("util").join("index.js");
        assert_eq!(relative_display(&root, &path), "lib/util/index.js");
    }

    #[test]
    fn test_relative_display_direct_child() {
        let root = PathBuf::from("/project");
        assert_eq!(relative_display(&root, &root.join("a.js")), "a.js");
    }

    #[test]
    fn test_relative_display_outside_root() {
        let root = PathBuf::from("/project");
        let path = PathBuf::from("/elsewhere/a.js");
        assert_eq!(relative_display(&root, &path), "/elsewhere/a.js");
    }
}
