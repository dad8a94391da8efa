//! # imgsrc
//!
//! Image URL rewriter for storefront media backends. Given an image URL or
//! site-relative path, imgsrc produces the string an `<img src>` (or
//! `srcset`) should carry: qualified under the media path, tagged with
//! optimization query parameters, and pointed at the right origin for the
//! deployment.
//!
//! # Architecture: One Pure Function, Explicit Config
//!
//! The whole crate is built around a single pure function:
//!
//! ```text
//! rewrite(input, options, config) -> String
//! ```
//!
//! Configuration is an explicit [`MediaConfig`] the hosting application
//! loads once and passes into every call — there is no global state, no
//! environment lookup at rewrite time. This exists for three reasons:
//!
//! - **Testability**: every behavior is reachable from a struct literal,
//!   no environment mutation or test-ordering hazards.
//! - **Concurrency**: the rewriter is trivially safe to call from any number
//!   of rendering threads; config is read-only shared data.
//! - **Determinism**: the same `(input, options, config)` triple always
//!   yields the same string.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`rewrite`] | The rewriter itself — origin stripping, media-path prefixing, query assembly, origin re-prepending |
//! | [`config`] | `imgsrc.toml` loading, defaults merging, validation |
//! | [`params`] | Per-call options: image kind, dimensions, quality, crop, fit |
//! | [`parts`] | URL string splitting into origin / path / query, with exact reassembly |
//! | [`query`] | Ordered query-parameter lists and the merge policy |
//! | [`srcset`] | Responsive `srcset` attribute generation over configured widths |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Never Fail
//!
//! The rewriter has no error path. Third-party URLs, unrecognized image
//! kinds, schemeless strings, even empty input all come back as *some*
//! deterministic string — unchanged whenever the rewriter does not
//! understand them. A storefront page with one odd image URL should render
//! that URL as-is, not refuse to render.
//!
//! ## Structured Splitting Over Substring Surgery
//!
//! All URL dissection goes through [`parts::UrlParts`], which separates
//! origin, path, and query into fields and guarantees byte-exact
//! reassembly. The rewriter's contract is over exact strings — a
//! normalizing URL parser would rewrite inputs it was supposed to pass
//! through — so splitting is deliberately lossless and local. The `url`
//! crate is still used where real URL semantics matter: validating the
//! configured backend origin.
//!
//! ## Query Merging Over Blind Appending
//!
//! Inputs that already carry a query string are merged, not suffixed:
//! existing parameters keep their positions, requested ones overwrite in
//! place or append in canonical order. Rewriting is therefore idempotent —
//! feeding a rewritten URL back through produces the same URL, which
//! matters when server-rendered markup is hydrated and rewritten again.

pub mod config;
pub mod output;
pub mod params;
pub mod parts;
pub mod query;
pub mod rewrite;
pub mod srcset;

pub use config::{ConfigError, MediaConfig, OptimizingOrigin, SrcsetConfig};
pub use params::{Fit, ImageKind, Quality, RewriteOptions};
pub use rewrite::rewrite;
pub use srcset::srcset;

#[cfg(test)]
pub(crate) mod test_helpers;
