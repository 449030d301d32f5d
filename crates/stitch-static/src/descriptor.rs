//! Short project descriptions taken from the descriptor file.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::builder::BuildError;

/// Zero-based index of the descriptor line holding the description.
const DESCRIPTION_LINE: usize = 2;

/// Extract the description from descriptor text.
///
/// Uses the third line only. A missing or empty third line yields `fallback`.
/// A leading markdown heading marker is stripped before trimming.
pub fn description_from(text: &str, fallback: &str) -> String {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^#+\s+").expect("Invalid heading marker regex"));

    let line = text
        .split('\n')
        .nth(DESCRIPTION_LINE)
        .filter(|line| !line.is_empty())
        .unwrap_or(fallback);

    RE.replace(line, "").trim().to_string()
}

/// Describe the project in `project_dir`.
///
/// Invalid UTF-8 in the descriptor is replaced rather than rejected.
pub fn describe(project_dir: &Path, descriptor: &str, fallback: &str) -> Result<String, BuildError> {
    let path = project_dir.join(descriptor);

    if !path.exists() {
        return Ok(fallback.to_string());
    }

    let bytes = fs::read(&path).map_err(BuildError::io(&path))?;
    Ok(description_from(&String::from_utf8_lossy(&bytes), fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn strips_heading_marker() {
        let text = "# Title\n\n## My Project\nmore";
        assert_eq!(description_from(text, "Project"), "My Project");
    }

    #[test]
    fn keeps_plain_third_line() {
        let text = "# Title\n\n  Listening dashboard  \n";
        assert_eq!(description_from(text, "Project"), "Listening dashboard");
    }

    #[test]
    fn short_descriptor_falls_back() {
        assert_eq!(description_from("# Title\n", "Project"), "Project");
        assert_eq!(description_from("", "Project"), "Project");
    }

    #[test]
    fn empty_third_line_falls_back() {
        assert_eq!(description_from("a\nb\n\nd", "Project"), "Project");
    }

    #[test]
    fn heading_without_space_is_kept() {
        assert_eq!(description_from("a\nb\n#tag", "Project"), "#tag");
    }

    #[test]
    fn handles_crlf() {
        let text = "# Title\r\n\r\n## Dashboard\r\n";
        assert_eq!(description_from(text, "Project"), "Dashboard");
    }

    #[test]
    fn missing_descriptor_falls_back() {
        let temp = tempdir().unwrap();
        let desc = describe(temp.path(), "README.md", "Project").unwrap();
        assert_eq!(desc, "Project");
    }

    #[test]
    fn reads_descriptor_file() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("README.md"), "# demo\n\n### Survey page\n").unwrap();

        let desc = describe(temp.path(), "README.md", "Project").unwrap();
        assert_eq!(desc, "Survey page");
    }

    #[test]
    fn non_utf8_descriptor_is_decoded_lossily() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("README.md"), b"# demo\n\n## caf\xe9\n").unwrap();

        let desc = describe(temp.path(), "README.md", "Project").unwrap();
        assert_eq!(desc, "caf\u{FFFD}");
    }
}
