//! Page builder.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Configuration for assembling projects and the landing page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding the project directories
    pub root: PathBuf,

    /// Name of the fragments subdirectory inside each project
    pub parts_dir: String,

    /// Extension (without the dot) a file needs to count as a fragment
    pub extension: String,

    /// File name of the assembled page inside each project
    pub output: String,

    /// Value of the `lang` attribute on the assembled page.
    ///
    /// Defaults to `ko`: pages are authored in Korean, while the landing page
    /// chrome and the fallback description default to English.
    pub lang: String,

    /// File name of the landing page inside the root
    pub index_output: String,

    /// File name of the per-project descriptor
    pub descriptor: String,

    /// Description used when a descriptor is missing or too short (English
    /// `Project` by default, matching the landing page chrome)
    pub fallback_description: String,

    /// Landing page `<title>`
    pub title: String,

    /// Landing page heading
    pub heading: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            parts_dir: "parts".to_string(),
            extension: "html".to_string(),
            output: "index.html".to_string(),
            lang: "ko".to_string(),
            index_output: "index.html".to_string(),
            descriptor: "README.md".to_string(),
            fallback_description: "Project".to_string(),
            title: "Projects".to_string(),
            heading: "Projects".to_string(),
        }
    }
}

impl BuildConfig {
    /// Directory of a project.
    pub fn project_dir(&self, project: &str) -> PathBuf {
        self.root.join(project)
    }

    /// Fragments subdirectory of a project.
    pub fn parts_path(&self, project: &str) -> PathBuf {
        self.project_dir(project).join(&self.parts_dir)
    }

    /// Assembled page of a project.
    pub fn output_path(&self, project: &str) -> PathBuf {
        self.project_dir(project).join(&self.output)
    }

    /// Landing page in the root.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_output)
    }
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{project}: fragments directory not found: {}", path.display())]
    MissingParts { project: String, path: PathBuf },

    #[error("{project}: no .{extension} fragments in {}", path.display())]
    NoFragments {
        project: String,
        path: PathBuf,
        extension: String,
    },

    #[error("no projects to build in {}: create a directory containing a fragments folder", root.display())]
    NoProjects { root: PathBuf },

    #[error("Failed to list {}: {source}", root.display())]
    Discovery {
        root: PathBuf,
        source: walkdir::Error,
    },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to serialize project list: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BuildError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Statistics for one assembled page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    /// Project name
    pub project: String,

    /// Written file
    pub output: PathBuf,

    /// Number of fragments concatenated
    pub fragments: usize,

    /// Newline-delimited segments in the assembled text
    pub lines: usize,

    /// Size of the written file
    pub bytes: u64,
}

impl PageReport {
    /// Size in kibibytes, rounded to one decimal place.
    pub fn size_kib(&self) -> f64 {
        (self.bytes as f64 / 1024.0 * 10.0).round() / 10.0
    }
}

/// Wrap fragment bytes in the fixed document preamble and closing tag.
///
/// Fragments are appended verbatim, in the given order, with no separator.
/// Their content is not decoded or validated.
pub fn assemble<S: AsRef<[u8]>>(lang: &str, fragments: &[S]) -> Vec<u8> {
    let mut html = format!("<!doctype html>\n<html lang=\"{}\">\n", lang).into_bytes();
    for fragment in fragments {
        html.extend_from_slice(fragment.as_ref());
    }
    html.extend_from_slice(b"</html>\n");
    html
}

/// Assembles the page of a single project from its fragments.
pub struct PageBuilder<'a> {
    config: &'a BuildConfig,
}

impl<'a> PageBuilder<'a> {
    /// Create a page builder over the given configuration.
    pub fn new(config: &'a BuildConfig) -> Self {
        Self { config }
    }

    /// Build one project and write its page.
    ///
    /// Nothing is written when the fragments directory is missing or holds
    /// no fragments.
    pub fn build(&self, project: &str) -> Result<PageReport, BuildError> {
        let parts = self.config.parts_path(project);

        if !parts.is_dir() {
            return Err(BuildError::MissingParts {
                project: project.to_string(),
                path: parts,
            });
        }

        let files = self.list_fragments(&parts)?;
        if files.is_empty() {
            return Err(BuildError::NoFragments {
                project: project.to_string(),
                path: parts,
                extension: self.config.extension.clone(),
            });
        }

        let mut fragments = Vec::with_capacity(files.len());
        for file in &files {
            tracing::debug!("Reading fragment {}", file.display());
            fragments.push(fs::read(file).map_err(BuildError::io(file))?);
        }

        let html = assemble(&self.config.lang, &fragments);

        let output = self.config.output_path(project);
        fs::write(&output, &html).map_err(BuildError::io(&output))?;

        let bytes = fs::metadata(&output)
            .map_err(BuildError::io(&output))?
            .len();

        let report = PageReport {
            project: project.to_string(),
            output,
            fragments: files.len(),
            lines: html.split(|b| *b == b'\n').count(),
            bytes,
        };

        tracing::info!("Built {}", report.project);
        tracing::info!("  files: {} -> {}", report.fragments, self.config.output);
        tracing::info!("  lines: {}", report.lines);
        tracing::info!("  size:  {:.1} KB", report.size_kib());

        Ok(report)
    }

    /// Fragment files of a project, sorted by file name.
    fn list_fragments(&self, parts: &Path) -> Result<Vec<PathBuf>, BuildError> {
        let suffix = format!(".{}", self.config.extension);
        let mut files = Vec::new();

        for entry in WalkDir::new(parts)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| BuildError::Discovery {
                root: parts.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if name.ends_with(&suffix) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}
