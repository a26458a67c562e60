//! Authors source loading and validation.
//!
//! Parses the raw `.authors.yml` text into an [`AuthorsDocument`]. The source
//! is author-maintained and frequently hand-edited, so loading never fails:
//! every structural problem degrades to defaults with a logged warning (or a
//! logged error for a syntax-level parse failure), and the renderer always
//! gets something it can turn into a page.
//!
//! ## Source Layout
//!
//! ```yaml
//! page_params:            # key name configurable, all fields optional
//!   title: Our Team
//!   description: The people behind the project.
//!   avatar_size: 120
//!   avatar_shape: circle  # circle | square (default)
//!   avatar_align: left    # left | right | center (default)
//! authors:
//!   jdoe:                 # mapping key becomes the author id
//!     name: Jane Doe
//!     affiliation: Example Labs
//!     description: Maintainer.
//!     avatar: https://example.com/jane.png
//!     email: jane@example.com
//!     github: jdoe
//!     linkedin: jane-doe
//!     twitter: jdoe
//! ```
//!
//! ## Degradation Rules
//!
//! - Unparseable text → error logged, empty document.
//! - Top level not a mapping (including empty input) → warning, empty document.
//! - Page-params entry not a mapping → warning, stock page params.
//! - `authors` absent or not a mapping → warning, no authors.
//! - Author entry not a mapping → warning, record keeps only its id.
//!
//! Author order in the document is the mapping order of the source and is the
//! rendering order.

use serde_yaml::{Mapping, Value};
use tracing::{error, warn};

use crate::style::{AvatarAlign, AvatarShape};

/// Page title used when the source does not override it.
pub const DEFAULT_TITLE: &str = "Our Amazing Authors";

/// Avatar edge length in pixels used when the source does not override it.
pub const DEFAULT_AVATAR_SIZE: i64 = 100;

/// Page-level rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub title: String,
    pub description: Option<String>,
    /// Used verbatim in the avatar style, even if non-positive.
    pub avatar_size: i64,
    pub avatar_shape: AvatarShape,
    pub avatar_align: AvatarAlign,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: None,
            avatar_size: DEFAULT_AVATAR_SIZE,
            avatar_shape: AvatarShape::default(),
            avatar_align: AvatarAlign::default(),
        }
    }
}

/// One contributor's presentational data plus the id derived from its
/// mapping key. All fields except `id` are optional and passed through
/// verbatim — absence means the renderer skips the corresponding line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: String,
    pub name: Option<String>,
    pub affiliation: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

/// Validated root value: page params plus authors in source order.
///
/// Constructed fresh per build, never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorsDocument {
    pub page_params: PageParams,
    pub authors: Vec<AuthorRecord>,
}

/// Parse raw source text into a document. Total: every failure mode yields a
/// renderable (possibly empty) document.
pub fn load(raw: &str, page_params_key: &str) -> AuthorsDocument {
    let value: Value = match serde_yaml::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            error!(%err, "authors source failed to parse");
            return AuthorsDocument::default();
        }
    };

    let Some(root) = value.as_mapping() else {
        warn!("authors source should be a mapping with an `authors` key at the top level");
        return AuthorsDocument::default();
    };

    let page_params = match root.get(page_params_key) {
        None => PageParams::default(),
        Some(entry) => match entry.as_mapping() {
            Some(mapping) => page_params_from(mapping),
            None => {
                warn!(
                    key = page_params_key,
                    "page params entry is not a mapping; using defaults"
                );
                PageParams::default()
            }
        },
    };

    let authors = match root.get("authors") {
        Some(entry) => match entry.as_mapping() {
            Some(mapping) => authors_from(mapping),
            None => {
                warn!("`authors` is not a mapping; no authors loaded");
                Vec::new()
            }
        },
        None => {
            warn!("missing `authors` mapping; no authors loaded");
            Vec::new()
        }
    };

    AuthorsDocument {
        page_params,
        authors,
    }
}

/// Extract page params, defaulting each field independently.
fn page_params_from(mapping: &Mapping) -> PageParams {
    PageParams {
        title: str_field(mapping, "title").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: str_field(mapping, "description"),
        avatar_size: mapping
            .get("avatar_size")
            .and_then(Value::as_i64)
            .unwrap_or(DEFAULT_AVATAR_SIZE),
        avatar_shape: str_field(mapping, "avatar_shape")
            .map(|s| AvatarShape::parse(&s))
            .unwrap_or_default(),
        avatar_align: str_field(mapping, "avatar_align")
            .map(|s| AvatarAlign::parse(&s))
            .unwrap_or_default(),
    }
}

/// Build author records in mapping order.
fn authors_from(mapping: &Mapping) -> Vec<AuthorRecord> {
    let mut authors = Vec::with_capacity(mapping.len());

    for (key, details) in mapping {
        let Some(id) = key_to_id(key) else {
            warn!("author entry key is not a scalar; entry skipped");
            continue;
        };

        let mut record = AuthorRecord {
            id,
            ..AuthorRecord::default()
        };

        match details.as_mapping() {
            Some(details) => {
                record.name = str_field(details, "name");
                record.affiliation = str_field(details, "affiliation");
                record.description = str_field(details, "description");
                record.avatar = str_field(details, "avatar");
                record.email = str_field(details, "email");
                record.github = str_field(details, "github");
                record.linkedin = str_field(details, "linkedin");
                record.twitter = str_field(details, "twitter");
            }
            None => {
                warn!(author = %record.id, "author entry is not a mapping; only the id was kept");
            }
        }

        authors.push(record);
    }

    authors
}

/// Stringify a scalar mapping key. Non-scalar keys have no sensible id.
fn key_to_id(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// String-typed field lookup. Non-string values are treated as absent; no
/// coercion.
fn str_field(mapping: &Mapping, key: &str) -> Option<String> {
    mapping.get(key).and_then(Value::as_str).map(str::to_string)
}
