/// Platform-specific functionality: mode-bit rendering, link-aware stat
/// timestamps, and host capability detection.
///
/// Unix hosts read everything from `MetadataExt`; other hosts synthesise a
/// mode from the read-only flag and use the portable `std::fs` accessors.

pub mod permissions;
pub mod stat;

pub use permissions::{entry_mode, filemode};
pub use stat::{HostCapabilities, StatTimes};
