//! Page assembly for stitch.
//!
//! Concatenates ordered HTML fragments into one page per project and writes a
//! landing page listing every project under a root directory.

pub mod builder;
pub mod descriptor;
pub mod discovery;
pub mod index;
pub mod site;
pub mod templates;

pub use builder::{assemble, BuildConfig, BuildError, PageBuilder, PageReport};
pub use discovery::discover_projects;
pub use index::{IndexGenerator, IndexReport};
pub use site::{Site, SiteReport};
pub use templates::ProjectEntry;
