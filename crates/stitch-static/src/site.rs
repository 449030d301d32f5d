//! Build orchestration for a whole root.

use crate::builder::{BuildConfig, BuildError, PageBuilder, PageReport};
use crate::discovery::discover_projects;
use crate::index::{IndexGenerator, IndexReport};

/// Result of a site build.
#[derive(Debug)]
pub struct SiteReport {
    /// Pages built during this run, in build order
    pub pages: Vec<PageReport>,

    /// Landing page written at the end of the run
    pub index: IndexReport,
}

/// Builds projects and regenerates the landing page.
pub struct Site {
    config: BuildConfig,
}

impl Site {
    /// Create a site over the given configuration.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build `target`, or every discovered project when `None`.
    ///
    /// The landing page always lists every discovered project. The first
    /// error stops the run; pages written before it are kept and the
    /// landing page is not regenerated.
    pub fn build(&self, target: Option<&str>) -> Result<SiteReport, BuildError> {
        match target {
            Some(project) => self.build_one(project),
            None => self.build_all(),
        }
    }

    fn build_one(&self, project: &str) -> Result<SiteReport, BuildError> {
        tracing::info!("Building {}...", project);

        let page = PageBuilder::new(&self.config).build(project)?;

        let projects = discover_projects(&self.config)?;
        let index = IndexGenerator::new(&self.config).generate(&projects)?;

        Ok(SiteReport {
            pages: vec![page],
            index,
        })
    }

    fn build_all(&self) -> Result<SiteReport, BuildError> {
        let projects = discover_projects(&self.config)?;
        if projects.is_empty() {
            return Err(BuildError::NoProjects {
                root: self.config.root.clone(),
            });
        }

        tracing::info!("Building all projects ({})...", projects.len());

        let builder = PageBuilder::new(&self.config);
        let pages = projects
            .iter()
            .map(|project| builder.build(project))
            .collect::<Result<Vec<_>, _>>()?;

        let index = IndexGenerator::new(&self.config).generate(&projects)?;

        tracing::info!("Build complete");

        Ok(SiteReport { pages, index })
    }
}
