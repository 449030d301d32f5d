//! Project discovery.

use walkdir::WalkDir;

use crate::builder::{BuildConfig, BuildError};

/// Find the projects directly under the configured root.
///
/// A project is a non-hidden directory containing the fragments
/// subdirectory. Names are returned in directory listing order.
pub fn discover_projects(config: &BuildConfig) -> Result<Vec<String>, BuildError> {
    let mut projects = Vec::new();

    for entry in WalkDir::new(&config.root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|source| BuildError::Discovery {
            root: config.root.clone(),
            source,
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        if entry.path().join(&config.parts_dir).exists() {
            tracing::debug!("Discovered project {}", name);
            projects.push(name);
        }
    }

    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_directories_with_parts() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("alpha/parts")).unwrap();
        fs::create_dir_all(temp.path().join("beta/parts")).unwrap();
        fs::create_dir_all(temp.path().join("gamma")).unwrap();
        fs::create_dir_all(temp.path().join(".hidden/parts")).unwrap();
        fs::write(temp.path().join("parts"), "not a project").unwrap();

        let config = BuildConfig {
            root: temp.path().to_path_buf(),
            ..Default::default()
        };

        let mut projects = discover_projects(&config).unwrap();
        projects.sort();

        assert_eq!(projects, vec!["alpha", "beta"]);
    }

    #[test]
    fn does_not_recurse() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("group/nested/parts")).unwrap();

        let config = BuildConfig {
            root: temp.path().to_path_buf(),
            ..Default::default()
        };

        assert!(discover_projects(&config).unwrap().is_empty());
    }

    #[test]
    fn unreadable_root_is_an_error() {
        let temp = tempdir().unwrap();

        let config = BuildConfig {
            root: temp.path().join("missing"),
            ..Default::default()
        };

        let err = discover_projects(&config).unwrap_err();
        assert!(matches!(err, BuildError::Discovery { .. }));
    }
}
