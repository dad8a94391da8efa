//! Responsive `srcset` attribute generation.
//!
//! A storefront image component rarely wants a single URL — it wants one
//! candidate per configured width so the browser can pick. Each candidate is
//! a full rewrite with that width, so srcset output inherits every rewriter
//! rule: base-dir qualification, origin stripping, and backend-mode absolute
//! URLs.

use crate::config::MediaConfig;
use crate::params::{ImageKind, RewriteOptions};
use crate::rewrite::rewrite;

/// Build a `srcset` attribute value for the input, one candidate per
/// configured width.
///
/// Candidates are emitted in the configured width order as
/// `<url> <width>w`, joined by `", "`.
pub fn srcset(input: &str, kind: ImageKind, config: &MediaConfig) -> String {
    config
        .srcset
        .widths
        .iter()
        .map(|&width| {
            let options = RewriteOptions {
                kind: Some(kind),
                width: Some(width),
                ..RewriteOptions::default()
            };
            format!("{} {width}w", rewrite(input, &options, config))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
