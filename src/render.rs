//! Authors page rendering.
//!
//! Turns an [`AuthorsDocument`] into the final Markdown text, with embedded
//! HTML for the avatar presentation. Rendering is deterministic and
//! order-preserving: authors appear in source order, the same document always
//! produces byte-identical output, and absent fields are skipped outright —
//! no placeholders, no stray blank lines.
//!
//! ## Page Shape
//!
//! ```text
//! # {title}
//!
//! {description}                       (if present)
//!
//! ## {author name}
//! <img ...> / <p><img ...></p>        (if avatar present)
//! **Affiliation:** ...                (if present)
//!
//! {author description}                (if present)
//! **Email:** [..](mailto:..)          (if present)
//!
//! **Connect:** [GitHub](..) | ...     (if any social handle present)
//! <div style="clear:both;"></div>     (only after a floated avatar)
//!
//! ---
//! ```
//!
//! HTML fragments are built with [maud](https://maud.lambda.xyz/), so field
//! values are escaped in attribute position automatically.

use maud::html;

use crate::load::{AuthorRecord, AuthorsDocument, PageParams};
use crate::style::{Placement, avatar_style};

/// Emitted in place of the author list when it is empty for any reason
/// (no entries, schema problem, parse failure).
pub const NO_AUTHORS_SENTENCE: &str =
    "No authors found or an error occurred while loading the authors data.";

/// Heading shown for an author with no `name` field.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Render the full authors page.
pub fn render(doc: &AuthorsDocument) -> String {
    let mut page = format!("# {}\n\n", doc.page_params.title);

    if let Some(description) = &doc.page_params.description {
        page.push_str(description);
        page.push_str("\n\n");
    }

    if doc.authors.is_empty() {
        page.push_str(NO_AUTHORS_SENTENCE);
        page.push('\n');
        return page;
    }

    for author in &doc.authors {
        render_author(&mut page, author, &doc.page_params);
    }

    page
}

/// Render one author block, ending with the `---` separator.
fn render_author(page: &mut String, author: &AuthorRecord, params: &PageParams) {
    let display_name = author.name.as_deref().unwrap_or(UNKNOWN_AUTHOR);
    page.push_str(&format!("## {display_name}\n"));

    // A floated avatar stays open until cleared; the clear goes after the
    // author's last field.
    let mut needs_clear = false;

    if let Some(avatar) = &author.avatar {
        let (style, placement) = avatar_style(
            params.avatar_size,
            params.avatar_shape,
            params.avatar_align,
        );
        let img = html! {
            img src=(avatar) alt=(display_name) style=(style);
        };
        match placement {
            Placement::Centered => {
                let wrapped = html! {
                    p style="text-align:center;" { (img) }
                };
                page.push_str(&wrapped.into_string());
                page.push('\n');
            }
            Placement::Float => {
                page.push_str(&img.into_string());
                page.push('\n');
                needs_clear = true;
            }
        }
    }

    if let Some(affiliation) = &author.affiliation {
        page.push_str(&format!("**Affiliation:** {affiliation}\n"));
    }

    if let Some(description) = &author.description {
        page.push_str(&format!("\n{description}\n"));
    }

    if let Some(email) = &author.email {
        page.push_str(&format!("**Email:** [{email}](mailto:{email})\n"));
    }

    let mut social_links = Vec::new();
    if let Some(github) = &author.github {
        social_links.push(format!("[GitHub](https://github.com/{github})"));
    }
    if let Some(linkedin) = &author.linkedin {
        social_links.push(format!("[LinkedIn](https://www.linkedin.com/in/{linkedin})"));
    }
    if let Some(twitter) = &author.twitter {
        social_links.push(format!("[Twitter](https://twitter.com/{twitter})"));
    }
    if !social_links.is_empty() {
        page.push_str(&format!("\n**Connect:** {}\n", social_links.join(" | ")));
    }

    if needs_clear {
        let clear = html! {
            div style="clear:both;" {}
        };
        page.push_str(&clear.into_string());
        page.push('\n');
    }

    page.push_str("\n---\n\n");
}
