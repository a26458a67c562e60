//! # Authors Page
//!
//! Generates a contributors page for documentation sites from a `.authors.yml`
//! file kept in the project root. The page lists each author with an avatar,
//! affiliation, bio, email, and social links, rendered as Markdown with a
//! little inline HTML for avatar layout.
//!
//! # Architecture: Load → Render, Behind Two Hooks
//!
//! ```text
//! .authors.yml  →  load      →  AuthorsDocument   (YAML → validated data)
//! AuthorsDocument → render   →  Markdown text     (deterministic page)
//! plugin            ↳ registration + content-provider hooks for the host
//! ```
//!
//! The pipeline is a pair of pure stages wrapped by one thin host-facing
//! layer. This separation exists for three reasons:
//!
//! - **Resilience**: the authors file is hand-edited; the loader degrades on
//!   every malformed shape instead of failing the host build.
//! - **Testability**: load and render are pure functions over plain values,
//!   so the whole rendering contract is unit-testable without a filesystem.
//! - **Host independence**: the host documentation build only sees two narrow
//!   hooks (register the virtual page, serve its content) — no framework
//!   types cross the boundary in either direction.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`load`] | Parses and validates the authors YAML into [`load::AuthorsDocument`], degrading gracefully |
//! | [`render`] | Renders the document to the final Markdown/HTML page text |
//! | [`style`] | Maps avatar size/shape/alignment to an inline style string and placement mode |
//! | [`config`] | `PluginConfig` loading (TOML, sparse overrides, stock defaults) |
//! | [`plugin`] | Host integration: source read, page registration, content serving |
//!
//! # Design Decisions
//!
//! ## Never Fail the Host Build
//!
//! Every problem with the authors file — missing, unparseable, wrong shape —
//! produces a renderable page plus a logged warning or error (via the
//! [`tracing`](https://docs.rs/tracing) facade; the host installs the
//! subscriber). A documentation build should not go red because someone
//! mis-indented a contributor entry.
//!
//! ## Permissive Presentation Values
//!
//! Unrecognized `avatar_shape` / `avatar_align` values silently fall back to
//! `square` / `center` rather than being rejected. See [`style`].
//!
//! ## Maud Over String-Pasted HTML
//!
//! The embedded HTML fragments (`<img>`, the centered wrapper, the clearing
//! element) are built with [Maud](https://maud.lambda.xyz/), so attribute
//! values are escaped automatically and malformed markup is a compile error.

pub mod config;
pub mod load;
pub mod plugin;
pub mod render;
pub mod style;
