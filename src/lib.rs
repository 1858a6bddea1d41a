//! Shared plumbing for the treescan binaries.
//!
//! All scanning, rendering and cleanup logic lives in `treescan-core`; this
//! crate only wires command-line arguments to it.

pub mod cli;
pub mod logging;
