//! OS package ownership lookups.
//!
//! - [`probe`] - The fixed table of package-manager queries
//! - [`resolver`] - Walking that table to find a file's owning package

pub mod probe;
pub mod resolver;

pub use probe::{PackageFamily, PackageProbe, PACKAGE_PROBES};
pub use resolver::{package_for, PackageResolver, UNKNOWN_PACKAGE};
