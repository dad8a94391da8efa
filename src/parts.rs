//! Centralized URL string splitting.
//!
//! The rewriter reasons about three pieces of an input URL independently:
//! the origin (scheme + authority), the path, and the query string. All
//! splitting lives here so every caller sees the same boundaries, and so
//! reassembly is guaranteed to round-trip byte-for-byte — the rewriter's
//! contract is over exact strings, not normalized URLs.
//!
//! Relative inputs (`/media/foo.jpg`) have no origin. Inputs that are neither
//! absolute URLs nor rooted paths still split cleanly: whatever precedes the
//! first `?` is the path, whatever follows is the query.

/// A URL string split into origin, path, and query.
///
/// `assemble` reverses `split` exactly: for any input,
/// `UrlParts::split(s).assemble() == s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Scheme + authority (e.g. `https://cdn.example.com:8000`) for absolute
    /// inputs, `None` for relative ones.
    pub origin: Option<String>,
    /// Path portion. For relative inputs this is everything before the `?`.
    pub path: String,
    /// Raw query string without the leading `?`, if one was present.
    pub query: Option<String>,
}

impl UrlParts {
    /// Split a URL string. Never fails — unparseable inputs land entirely
    /// in `path` (or `origin` for scheme-only forms) and round-trip unchanged.
    pub fn split(input: &str) -> Self {
        let (head, query) = match input.split_once('?') {
            Some((head, query)) => (head, Some(query.to_string())),
            None => (input, None),
        };

        if !has_scheme(head) {
            return Self {
                origin: None,
                path: head.to_string(),
                query,
            };
        }

        // Origin ends at the first `/` after the `//` authority marker.
        // Scheme-only forms (`data:...` without `//`) carry no path at all.
        let path_start = head.find("//").and_then(|authority| {
            head[authority + 2..]
                .find('/')
                .map(|slash| authority + 2 + slash)
        });

        match path_start {
            Some(idx) => Self {
                origin: Some(head[..idx].to_string()),
                path: head[idx..].to_string(),
                query,
            },
            None => Self {
                origin: Some(head.to_string()),
                path: String::new(),
                query,
            },
        }
    }

    /// Whether the input carried a scheme + authority.
    pub fn is_absolute(&self) -> bool {
        self.origin.is_some()
    }

    /// Reassemble into a single URL string.
    pub fn assemble(&self) -> String {
        let mut out = String::new();
        if let Some(origin) = &self.origin {
            out.push_str(origin);
        }
        out.push_str(&self.path);
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        out
    }
}

/// Whether the string begins with a URL scheme (`https:`, `data:`, ...).
///
/// A scheme is a letter followed by letters, digits, `+`, `-`, or `.`,
/// terminated by `:` — and the `:` must come before any `/` or `?`, so
/// rooted paths and query-only strings are never mistaken for schemes.
pub fn has_scheme(input: &str) -> bool {
    let Some(colon) = input.find(':') else {
        return false;
    };
    if let Some(slash) = input.find(['/', '?']) {
        if slash < colon {
            return false;
        }
    }
    let scheme = &input[..colon];
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
