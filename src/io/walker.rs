//! Artifact collection: walk a directory tree and load analyzable files.

use crate::core::SourceArtifact;
use anyhow::Result;
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Extensions analyzed when the caller does not narrow the set.
const DEFAULT_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "html", "htm", "php", "java", "cs", "py", "rb", "asp", "aspx",
    "jsp", "vb", "sql", "xml", "wsdl", "config",
];

const IGNORED_DIRS: &[&str] = &["node_modules", "target", ".git", "vendor", "__pycache__"];

/// Gather source artifacts under `root`, filtered by extension. The filter
/// applies to an explicitly named file as well as to walked directories.
/// Files that cannot be read as UTF-8 text are skipped.
pub fn collect_artifacts(root: &Path, extensions: Option<&[String]>) -> Result<Vec<SourceArtifact>> {
    if root.is_file() {
        if !has_wanted_extension(root, extensions) {
            return Ok(Vec::new());
        }
        return Ok(load_file(root).into_iter().collect());
    }

    let mut artifacts = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored(e.path()));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_wanted_extension(path, extensions) {
            continue;
        }
        if let Some(artifact) = load_file(path) {
            artifacts.push(artifact);
        }
    }

    debug!("collected {} artifacts under {}", artifacts.len(), root.display());
    Ok(artifacts)
}

fn is_ignored(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| IGNORED_DIRS.contains(&name))
}

fn has_wanted_extension(path: &Path, extensions: Option<&[String]>) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    match extensions {
        Some(wanted) => wanted.iter().any(|w| w.eq_ignore_ascii_case(ext)),
        None => DEFAULT_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
    }
}

fn load_file(path: &Path) -> Option<SourceArtifact> {
    let content = std::fs::read_to_string(path).ok()?;
    let kind = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt")
        .to_lowercase();
    Some(SourceArtifact::new(
        path.display().to_string(),
        content,
        kind,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collects_only_wanted_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "var x = 1;").unwrap();
        fs::write(dir.path().join("b.exe"), "binary-ish").unwrap();
        fs::create_dir(dir.path().join("node_modules")).unwrap();
        fs::write(dir.path().join("node_modules/c.js"), "var y = 2;").unwrap();

        let artifacts = collect_artifacts(dir.path(), None).unwrap();
        assert_eq!(artifacts.len(), 1);
        assert!(artifacts[0].path.ends_with("a.js"));
        assert_eq!(artifacts[0].kind, "js");
    }

    #[test]
    fn single_file_is_loaded_directly() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("page.html");
        fs::write(&file, "<div></div>").unwrap();
        let artifacts = collect_artifacts(&file, None).unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].kind, "html");
    }

    #[test]
    fn single_file_respects_extension_filter() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "var x = 1;").unwrap();
        assert!(collect_artifacts(&file, None).unwrap().is_empty());

        let js = dir.path().join("a.js");
        fs::write(&js, "var x = 1;").unwrap();
        let wanted = vec!["html".to_string()];
        assert!(collect_artifacts(&js, Some(&wanted)).unwrap().is_empty());
        assert_eq!(collect_artifacts(&js, None).unwrap().len(), 1);
    }
}
