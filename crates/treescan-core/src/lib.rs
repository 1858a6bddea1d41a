//! treescan core: scanning, tree rendering, cleanup, and data model.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! The binaries in the root package are thin argument-parsing shells
//! around the functions exported here.
//!
//! # Modules
//!
//! - [`model`]: Entry records, the scan envelope, and the arena file tree.
//! - [`platform`]: Mode-bit rendering, stat timestamps, host capabilities.
//! - [`scanner`]: Link-aware metadata extraction and the directory walker.
//! - [`tree`]: Sorted tree building plus Markdown and ASCII renderers.
//! - [`cleanup`]: Recursive `__pycache__` removal with dry-run support.
//! - [`output`]: Output targets and report writers.

pub mod cleanup;
pub mod error;
pub mod model;
pub mod output;
pub mod platform;
pub mod scanner;
pub mod tree;

pub use error::ScanError;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ScanError>;
