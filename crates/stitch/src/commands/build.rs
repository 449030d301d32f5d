//! Build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use stitch_static::{BuildConfig, Site};

/// Configuration file structure (stitch.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    build: BuildSettings,
    #[serde(default)]
    index: IndexSettings,
}

#[derive(Debug, Deserialize)]
struct BuildSettings {
    #[serde(default = "default_parts_dir")]
    parts_dir: String,
    #[serde(default = "default_extension")]
    extension: String,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_lang")]
    lang: String,
}

#[derive(Debug, Deserialize)]
struct IndexSettings {
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_descriptor")]
    descriptor: String,
    #[serde(default = "default_fallback")]
    fallback: String,
    #[serde(default = "default_title")]
    title: String,
    /// Heading above the project list (defaults to the title)
    heading: Option<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            parts_dir: default_parts_dir(),
            extension: default_extension(),
            output: default_output(),
            lang: default_lang(),
        }
    }
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            descriptor: default_descriptor(),
            fallback: default_fallback(),
            title: default_title(),
            heading: None,
        }
    }
}

fn default_parts_dir() -> String {
    "parts".to_string()
}
fn default_extension() -> String {
    "html".to_string()
}
fn default_output() -> String {
    "index.html".to_string()
}
fn default_lang() -> String {
    "ko".to_string()
}
fn default_descriptor() -> String {
    "README.md".to_string()
}
fn default_fallback() -> String {
    "Project".to_string()
}
fn default_title() -> String {
    "Projects".to_string()
}

impl ConfigFile {
    fn into_build_config(self, root: PathBuf) -> BuildConfig {
        let heading = self.index.heading.unwrap_or_else(|| self.index.title.clone());

        BuildConfig {
            root,
            parts_dir: self.build.parts_dir,
            extension: self.build.extension.trim_start_matches('.').to_string(),
            output: self.build.output,
            lang: self.build.lang,
            index_output: self.index.output,
            descriptor: self.index.descriptor,
            fallback_description: self.index.fallback,
            title: self.index.title,
            heading,
        }
    }
}

/// Load configuration from the config file if it exists.
///
/// An explicitly requested file must exist; the default `stitch.toml` is
/// optional. Returns an error if the file exists but is malformed.
fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ConfigFile> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = root.join("stitch.toml");
            if !path.exists() {
                return Ok(ConfigFile::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    tracing::debug!("Loaded config from {}", config_path.display());

    Ok(config)
}

/// Run the build command.
pub fn run(root: PathBuf, config: Option<PathBuf>, project: Option<&str>) -> Result<()> {
    let file_config = load_config(&root, config.as_deref())?;
    let site = Site::new(file_config.into_build_config(root));

    let report = site.build(project)?;

    tracing::info!(
        "Built {} page(s), listed {} project(s) in {}",
        report.pages.len(),
        report.index.entries.len(),
        report.index.output.display()
    );

    Ok(())
}
