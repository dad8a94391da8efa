//! The URL rewriter.
//!
//! A pure, total function over `(input, options, config)`: given an image URL
//! or site-relative path, produce the string an `<img src>` should carry —
//! origin-adjusted for the media backend, base-dir qualified for the image
//! kind, and tagged with optimization query parameters.
//!
//! # Decision Order
//!
//! 1. **Origin stripping** — an absolute input under
//!    `backend_origin + media_path` is made relative again, starting at the
//!    media path. A backend origin that carries a mount path
//!    (`https://cdn:8000/shop`) is stripped whole.
//! 2. **Passthrough** — no image kind means no further rewriting. Callers
//!    with unrecognized kind strings hold `None` here, so third-party and
//!    malformed inputs flow through untouched.
//! 3. **Media-path prefixing** — relative product/category paths are
//!    qualified under `media_path + base_dir`, exactly once. Paths already
//!    carrying the base (or the full media prefix) are never double-prefixed.
//! 4. **Query assembly** — the fixed optimization defaults plus any sizing
//!    options, merged into an existing query under the policy in
//!    [`query`](crate::query).
//! 5. **Origin re-prepending** — in `backend` mode, relative media paths get
//!    the backend origin back, producing an absolute URL.
//!
//! There are no error conditions: every input yields some string
//! deterministically, and inputs the rewriter does not understand come back
//! unchanged.

use crate::config::{MediaConfig, OptimizingOrigin};
use crate::params::{ImageKind, RewriteOptions};
use crate::parts::UrlParts;
use crate::query::ParamList;

/// Optimization defaults sent with every rewritten image URL.
const DEFAULT_PARAMS: [(&str, &str); 2] = [("auto", "webp"), ("format", "pjpg")];

/// Rewrite an image URL or path for the media backend.
///
/// See the module docs for the decision order. The function never fails and
/// never mutates `config`.
pub fn rewrite(input: &str, options: &RewriteOptions, config: &MediaConfig) -> String {
    let input = strip_backend_origin(input, config);

    let Some(kind) = options.kind else {
        return input;
    };

    let mut parts = UrlParts::split(&input);
    if !parts.is_absolute() {
        parts.path = prefixed_path(&parts.path, kind, config);
    }

    let mut params = match parts.query.as_deref() {
        Some(raw) => ParamList::parse(raw),
        None => ParamList::new(),
    };
    params.merge(&desired_params(options));
    parts.query = Some(params.to_string());

    let rewritten = parts.assemble();

    match (config.optimizing_origin, config.backend_origin_trimmed()) {
        (OptimizingOrigin::Backend, Some(origin))
            if !parts.is_absolute() && path_has_prefix(&parts.path, &config.media_path) =>
        {
            format!("{origin}{rewritten}")
        }
        _ => rewritten,
    }
}

/// Step 1: make a backend-qualified absolute URL relative again.
fn strip_backend_origin(input: &str, config: &MediaConfig) -> String {
    if let Some(origin) = config.backend_origin_trimmed() {
        let prefix = format!("{origin}{}", config.media_path);
        if let Some(rest) = input.strip_prefix(&prefix) {
            // Only strip at a segment boundary — "/mediafoo" is not "/media".
            if rest.is_empty() || rest.starts_with(['/', '?']) {
                return format!("{}{rest}", config.media_path);
            }
        }
    }
    input.to_string()
}

/// Step 3: qualify a relative path under the kind's base directory.
///
/// - already under `media_path + base` → untouched (idempotence);
/// - already under `base` → prepend `media_path` only;
/// - otherwise → prepend `media_path + base`.
fn prefixed_path(path: &str, kind: ImageKind, config: &MediaConfig) -> String {
    let Some(base) = kind.base_dir() else {
        return path.to_string();
    };
    let qualified = format!("{}{base}", config.media_path);
    if path_has_prefix(path, &qualified) {
        path.to_string()
    } else if path_has_prefix(path, base) {
        join(&config.media_path, path)
    } else {
        join(&qualified, path)
    }
}

/// Step 4: the parameters this rewrite wants on the URL, in canonical order.
fn desired_params(options: &RewriteOptions) -> ParamList {
    let mut params = ParamList::new();
    for (key, value) in DEFAULT_PARAMS {
        params.set(key, value);
    }
    if let Some(width) = options.width {
        params.set("width", width.to_string());
    }
    if let Some(height) = options.height {
        params.set("height", height.to_string());
    }
    if let Some(quality) = options.quality {
        params.set("quality", quality.value().to_string());
    }
    if let Some(crop) = options.crop {
        params.set("crop", crop.to_string());
    }
    if let Some(fit) = options.fit {
        params.set("fit", fit.as_str());
    }
    params
}

/// Prefix match that only counts whole path segments.
fn path_has_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Concatenate, inserting a `/` for un-rooted paths.
fn join(prefix: &str, path: &str) -> String {
    if path.is_empty() || path.starts_with('/') {
        format!("{prefix}{path}")
    } else {
        format!("{prefix}/{path}")
    }
}
