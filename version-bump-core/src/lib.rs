//! Core library for version-bump.
//!
//! This crate reads a manifest file, finds its `version_code: <n> ` field,
//! and rewrites it with the next value, independent of any CLI surface.
//!
//! # Usage
//!
//! ```no_run
//! use version_bump_core::bumper;
//!
//! let bump = bumper::bump("./mobile/manifest.yaml")?;
//! println!("{} -> {}", bump.old, bump.new);
//! # Ok::<(), version_bump_core::BumpError>(())
//! ```

pub mod bumper;
pub mod error;
pub mod manifest;

// Re-export commonly used types at crate root
pub use bumper::{bump, preview, read_version, write_text};
pub use error::{BumpError, FormatError};
pub use manifest::{Bump, ManifestText};

/// Manifest location used when no path is configured.
pub const DEFAULT_MANIFEST_PATH: &str = "./mobile/manifest.yaml";
