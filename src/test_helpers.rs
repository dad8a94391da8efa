//! Shared test fixtures for the imgsrc test suite.
//!
//! Rewriter tests exercise three config shapes over and over: stock defaults,
//! a backend origin in `onboard` mode (origin stripping), and a backend
//! origin in `backend` mode (origin re-prepending). Constructing them here
//! keeps individual tests down to input + expectation.

use crate::config::{MediaConfig, OptimizingOrigin};

/// Stock defaults: `/media`, no backend origin, onboard mode.
pub fn stock_config() -> MediaConfig {
    MediaConfig::default()
}

/// A backend origin in `onboard` mode — absolute backend URLs are made
/// relative, results stay origin-less.
pub fn onboard_config(origin: &str) -> MediaConfig {
    MediaConfig {
        backend_origin: Some(origin.to_string()),
        optimizing_origin: OptimizingOrigin::Onboard,
        ..MediaConfig::default()
    }
}

/// A backend origin in `backend` mode — rewritten media paths come back
/// absolute against the origin.
pub fn backend_config(origin: &str) -> MediaConfig {
    MediaConfig {
        backend_origin: Some(origin.to_string()),
        optimizing_origin: OptimizingOrigin::Backend,
        ..MediaConfig::default()
    }
}
