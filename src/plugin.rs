//! Host build integration.
//!
//! [`AuthorsPlugin`] is the seam between the rendering core and the host
//! documentation build. The host owns its page manifest, file collection, and
//! site assembly; the plugin exposes exactly three operations:
//!
//! 1. [`generate`](AuthorsPlugin::generate) — run once before the build: read
//!    the authors file (resolved as a sibling of the docs directory), load and
//!    render it, and keep the text for the rest of the build.
//! 2. [`register_page`](AuthorsPlugin::register_page) — append the virtual
//!    page to the host's manifest unless a page with the same path is already
//!    there (first wins, so a hand-written `authors.md` takes precedence).
//! 3. [`page_content`](AuthorsPlugin::page_content) — serve the rendered text
//!    for the configured page path, declining any other path so the host's
//!    normal handling applies.
//!
//! Nothing here aborts the host build: a missing authors file becomes a fixed
//! fallback page with a logged warning, and every loader failure renders the
//! "no authors" page.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

use crate::config::PluginConfig;
use crate::load;
use crate::render;

/// Page content substituted when the authors source file does not exist.
pub const NOT_FOUND_FALLBACK: &str = "Authors file not found. No authors page content is available.";

/// Minimal view of one entry in the host's page manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPage {
    /// Source path of the page, relative to the docs directory.
    pub src_path: String,
}

/// The authors page generator, configured once and driven by the host's
/// build lifecycle. Holds the rendered text for the duration of one build.
#[derive(Debug, Default)]
pub struct AuthorsPlugin {
    config: PluginConfig,
    rendered: Option<String>,
}

impl AuthorsPlugin {
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            rendered: None,
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Path of the authors source, resolved one level above the docs
    /// directory (the conventional project root).
    pub fn source_path(&self, docs_dir: &Path) -> PathBuf {
        docs_dir.join("..").join(&self.config.authors_file)
    }

    /// Run the load → render pipeline once and keep the text for this build.
    ///
    /// A missing source file yields the fixed fallback page; any other read
    /// failure does the same but is logged at error severity. Never fails.
    pub fn generate(&mut self, docs_dir: &Path) -> &str {
        let source = self.source_path(docs_dir);
        let rendered = match fs::read_to_string(&source) {
            Ok(raw) => render::render(&load::load(&raw, &self.config.page_params_key)),
            Err(err) => {
                if err.kind() == ErrorKind::NotFound {
                    warn!(
                        path = %source.display(),
                        "authors file not found; using fallback page content"
                    );
                } else {
                    error!(
                        path = %source.display(),
                        %err,
                        "authors file could not be read; using fallback page content"
                    );
                }
                format!("{NOT_FOUND_FALLBACK}\n")
            }
        };
        self.rendered.insert(rendered).as_str()
    }

    /// Append the virtual page to the host's manifest unless a page with the
    /// same path already exists. Idempotent; first wins.
    pub fn register_page(&self, pages: &mut Vec<ManifestPage>) {
        if pages.iter().any(|p| p.src_path == self.config.output_page) {
            return;
        }
        pages.push(ManifestPage {
            src_path: self.config.output_page.clone(),
        });
    }

    /// Serve the rendered text for the configured page path; `None` for any
    /// other path (or before [`generate`](Self::generate) has run), which
    /// hands control back to the host.
    pub fn page_content(&self, path: &str) -> Option<&str> {
        if path == self.config.output_page {
            self.rendered.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NO_AUTHORS_SENTENCE;
    use std::fs;
    use tempfile::TempDir;

    /// Build a `{project}/docs` tree with an optional `.authors.yml` beside
    /// the docs directory.
    fn project(authors_yml: Option<&str>) -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let docs_dir = tmp.path().join("docs");
        fs::create_dir(&docs_dir).unwrap();
        if let Some(content) = authors_yml {
            fs::write(tmp.path().join(".authors.yml"), content).unwrap();
        }
        (tmp, docs_dir)
    }

    #[test]
    fn generate_renders_authors_from_sibling_file() {
        let (_tmp, docs_dir) = project(Some("authors:\n  ann:\n    name: Ann\n"));
        let mut plugin = AuthorsPlugin::default();
        let page = plugin.generate(&docs_dir);
        assert!(page.contains("## Ann"));
    }

    #[test]
    fn missing_source_yields_exactly_the_fallback() {
        let (_tmp, docs_dir) = project(None);
        let mut plugin = AuthorsPlugin::default();
        let page = plugin.generate(&docs_dir);
        assert_eq!(page, format!("{NOT_FOUND_FALLBACK}\n"));
        assert!(!page.contains(NO_AUTHORS_SENTENCE));
    }

    #[test]
    fn missing_source_fallback_ignores_other_configuration() {
        let (_tmp, docs_dir) = project(None);
        let mut plugin = AuthorsPlugin::new(PluginConfig {
            output_page: "team.md".to_string(),
            page_params_key: "params".to_string(),
            ..PluginConfig::default()
        });
        assert_eq!(
            plugin.generate(&docs_dir),
            format!("{NOT_FOUND_FALLBACK}\n")
        );
    }

    #[test]
    fn custom_authors_file_name_is_resolved() {
        let tmp = TempDir::new().unwrap();
        let docs_dir = tmp.path().join("docs");
        fs::create_dir(&docs_dir).unwrap();
        fs::write(tmp.path().join("people.yml"), "authors:\n  b:\n    name: Ben\n").unwrap();

        let mut plugin = AuthorsPlugin::new(PluginConfig {
            authors_file: "people.yml".to_string(),
            ..PluginConfig::default()
        });
        assert!(plugin.generate(&docs_dir).contains("## Ben"));
    }

    #[test]
    fn register_page_appends_once() {
        let plugin = AuthorsPlugin::default();
        let mut pages = vec![ManifestPage {
            src_path: "index.md".to_string(),
        }];

        plugin.register_page(&mut pages);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].src_path, "authors.md");

        plugin.register_page(&mut pages);
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn register_page_leaves_existing_page_alone() {
        let plugin = AuthorsPlugin::default();
        let mut pages = vec![
            ManifestPage {
                src_path: "index.md".to_string(),
            },
            ManifestPage {
                src_path: "authors.md".to_string(),
            },
        ];
        plugin.register_page(&mut pages);
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn page_content_matches_only_the_output_page() {
        let (_tmp, docs_dir) = project(Some("authors:\n  ann:\n    name: Ann\n"));
        let mut plugin = AuthorsPlugin::default();
        plugin.generate(&docs_dir);

        assert!(plugin.page_content("authors.md").is_some());
        assert_eq!(plugin.page_content("index.md"), None);
        assert_eq!(plugin.page_content("docs/authors.md"), None);
    }

    #[test]
    fn page_content_declines_before_generation() {
        let plugin = AuthorsPlugin::default();
        assert_eq!(plugin.page_content("authors.md"), None);
    }
}
