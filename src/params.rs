//! Parameter types for URL rewriting.
//!
//! These structs describe *what* the caller wants from a rewrite, not *how*
//! the rewrite happens. They are the interface between call sites (an image
//! component, the CLI) and the [`rewrite`](crate::rewrite) module. Everything
//! here is plain owned data — no ambient state, no lifetimes.
//!
//! ## Types
//!
//! - [`ImageKind`] — The recognized storefront image kinds. Product and
//!   category images live under fixed base directories; wysiwyg images do not.
//! - [`Quality`] — Lossy encoding quality hint (0–100). Clamped on construction.
//! - [`Fit`] — How the optimizer should fit the image into the requested box.
//! - [`RewriteOptions`] — The full options bag. `Default` is "no options",
//!   which makes a rewrite the identity function.

use std::fmt;
use std::str::FromStr;

/// Recognized storefront image kinds.
///
/// The string forms (`image-product`, `image-category`, `image-wysiwyg`) are
/// what callers outside Rust — CLI flags, page metadata — use. Anything else
/// is unrecognized: [`ImageKind::parse`] returns `None`, and a rewrite with no
/// kind passes its input through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Product,
    Category,
    Wysiwyg,
}

impl ImageKind {
    /// Parse a kind string. Unrecognized values are `None`, not an error —
    /// graceful passthrough is the rewriter's contract.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "image-product" => Some(Self::Product),
            "image-category" => Some(Self::Category),
            "image-wysiwyg" => Some(Self::Wysiwyg),
            _ => None,
        }
    }

    /// Canonical string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Product => "image-product",
            Self::Category => "image-category",
            Self::Wysiwyg => "image-wysiwyg",
        }
    }

    /// Base directory under the media path, for kinds that have one.
    ///
    /// Wysiwyg images are referenced by full media path already and get no
    /// base directory.
    pub fn base_dir(self) -> Option<&'static str> {
        match self {
            Self::Product => Some("/catalog/product"),
            Self::Category => Some("/catalog/category"),
            Self::Wysiwyg => None,
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse for boundaries that want an error message (clap).
impl FromStr for ImageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!("unrecognized image kind '{s}' (expected image-product, image-category, or image-wysiwyg)")
        })
    }
}

/// Quality hint for the image optimizer (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.parse().map_err(|_| format!("invalid quality '{s}'"))?;
        Ok(Self::new(value))
    }
}

/// How the optimizer fits the image into the requested dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Cover,
    Contain,
}

impl Fit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
        }
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" => Ok(Self::Cover),
            "contain" => Ok(Self::Contain),
            _ => Err(format!("invalid fit '{s}' (expected cover or contain)")),
        }
    }
}

/// Options for a single rewrite. All fields are independent and optional.
///
/// With no kind set, a rewrite returns its input unchanged (after origin
/// stripping) — the sizing fields only take effect alongside a kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    pub kind: Option<ImageKind>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: Option<Quality>,
    pub crop: Option<bool>,
    pub fit: Option<Fit>,
}

impl RewriteOptions {
    /// Options carrying just a kind — the common image-component case.
    pub fn for_kind(kind: ImageKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }
}
