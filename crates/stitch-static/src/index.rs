//! Landing page generation.

use std::fs;
use std::path::PathBuf;

use crate::builder::{BuildConfig, BuildError};
use crate::descriptor::describe;
use crate::templates::{LandingContext, ProjectEntry, TemplateEngine};

/// Result of writing the landing page.
#[derive(Debug, Clone)]
pub struct IndexReport {
    /// Written file
    pub output: PathBuf,

    /// Entries listed on the page
    pub entries: Vec<ProjectEntry>,
}

/// Writes the landing page listing every project.
pub struct IndexGenerator<'a> {
    config: &'a BuildConfig,
    templates: TemplateEngine,
}

impl<'a> IndexGenerator<'a> {
    /// Create an index generator over the given configuration.
    pub fn new(config: &'a BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Display record for one project.
    pub fn entry(&self, project: &str) -> Result<ProjectEntry, BuildError> {
        let desc = describe(
            &self.config.project_dir(project),
            &self.config.descriptor,
            &self.config.fallback_description,
        )?;

        Ok(ProjectEntry {
            name: capitalize(project),
            path: project.to_string(),
            desc,
        })
    }

    /// Render and write the landing page for `projects`, in the given order.
    pub fn generate(&self, projects: &[String]) -> Result<IndexReport, BuildError> {
        let entries = projects
            .iter()
            .map(|project| self.entry(project))
            .collect::<Result<Vec<_>, _>>()?;

        let context = LandingContext {
            title: self.config.title.clone(),
            heading: self.config.heading.clone(),
            projects: entries,
        };

        let html = self.templates.render_landing(&context)?;

        let output = self.config.index_path();
        fs::write(&output, html).map_err(BuildError::io(&output))?;

        tracing::info!("Generated landing page {}", output.display());

        Ok(IndexReport {
            output,
            entries: context.projects,
        })
    }
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
