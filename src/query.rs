//! Ordered query-parameter assembly and merging.
//!
//! Query strings are modeled as an ordered list of key/value pairs rather
//! than a map: the rewriter's output order is part of its contract, and
//! inputs that already carry a query must survive a rewrite without their
//! parameters being shuffled.
//!
//! ## Merge Policy
//!
//! When a rewrite adds parameters to an input that already has a query:
//!
//! - existing pairs keep their positions;
//! - a desired key that already exists overwrites the value in place;
//! - desired keys not yet present are appended, in the rewriter's canonical
//!   order.
//!
//! Rewriting a URL that already carries exactly the desired parameters is
//! therefore a no-op, which keeps the rewriter idempotent end to end.

use std::fmt;

/// An ordered list of query parameters.
///
/// Values are optional so that bare flags (`?flag`) round-trip without
/// growing an `=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList {
    pairs: Vec<(String, Option<String>)>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (no leading `?`) into ordered pairs.
    ///
    /// Splits on `&`, then on the first `=` of each piece. Empty pieces
    /// (from `a&&b`) are dropped; a piece without `=` becomes a bare flag.
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .split('&')
            .filter(|piece| !piece.is_empty())
            .map(|piece| match piece.split_once('=') {
                Some((key, value)) => (key.to_string(), Some(value.to_string())),
                None => (piece.to_string(), None),
            })
            .collect();
        Self { pairs }
    }

    /// Set `key` to `value`: overwrite in place if present, append otherwise.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = Some(value.into());
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Merge `desired` into `self` under the module's merge policy.
    pub fn merge(&mut self, desired: &ParamList) {
        for (key, value) in &desired.pairs {
            match value {
                Some(v) => self.set(key, v.clone()),
                None => {
                    if !self.pairs.iter().any(|(k, _)| k == key) {
                        self.pairs.push((key.clone(), None));
                    }
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for ParamList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            match value {
                Some(v) => write!(f, "{key}={v}")?,
                None => f.write_str(key)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Parse + serialize tests
    // =========================================================================

    #[test]
    fn parse_and_display_round_trip() {
        let raw = "auto=webp&format=pjpg&width=100";
        assert_eq!(ParamList::parse(raw).to_string(), raw);
    }

    #[test]
    fn parse_bare_flag_round_trips_without_equals() {
        assert_eq!(ParamList::parse("flag&width=100").to_string(), "flag&width=100");
    }

    #[test]
    fn parse_empty_value_keeps_equals() {
        assert_eq!(ParamList::parse("quality=").to_string(), "quality=");
    }

    #[test]
    fn parse_drops_empty_pieces() {
        assert_eq!(ParamList::parse("a=1&&b=2").to_string(), "a=1&b=2");
    }

    #[test]
    fn empty_list_displays_as_empty_string() {
        assert_eq!(ParamList::new().to_string(), "");
        assert!(ParamList::new().is_empty());
    }

    // =========================================================================
    // set tests
    // =========================================================================

    #[test]
    fn set_appends_new_key() {
        let mut params = ParamList::parse("auto=webp");
        params.set("width", "100");
        assert_eq!(params.to_string(), "auto=webp&width=100");
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut params = ParamList::parse("width=50&height=40");
        params.set("width", "100");
        assert_eq!(params.to_string(), "width=100&height=40");
    }

    // =========================================================================
    // Merge policy tests
    // =========================================================================

    #[test]
    fn merge_into_empty_preserves_desired_order() {
        let mut params = ParamList::new();
        let mut desired = ParamList::new();
        desired.set("auto", "webp");
        desired.set("format", "pjpg");
        desired.set("width", "100");
        params.merge(&desired);
        assert_eq!(params.to_string(), "auto=webp&format=pjpg&width=100");
    }

    #[test]
    fn merge_keeps_existing_positions() {
        // width sits first in the input; merging the canonical order must not move it.
        let mut params = ParamList::parse("width=50&auto=avif");
        let mut desired = ParamList::new();
        desired.set("auto", "webp");
        desired.set("format", "pjpg");
        desired.set("width", "100");
        params.merge(&desired);
        assert_eq!(params.to_string(), "width=100&auto=webp&format=pjpg");
    }

    #[test]
    fn merge_preserves_unrelated_existing_keys() {
        let mut params = ParamList::parse("token=abc");
        let mut desired = ParamList::new();
        desired.set("auto", "webp");
        params.merge(&desired);
        assert_eq!(params.to_string(), "token=abc&auto=webp");
    }

    #[test]
    fn merge_identical_params_is_a_no_op() {
        let raw = "auto=webp&format=pjpg&width=100";
        let mut params = ParamList::parse(raw);
        let mut desired = ParamList::new();
        desired.set("auto", "webp");
        desired.set("format", "pjpg");
        desired.set("width", "100");
        params.merge(&desired);
        assert_eq!(params.to_string(), raw);
    }
}
