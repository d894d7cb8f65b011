//! Database module providing organized access to the metadata store
//!
//! This module is organized into several sub-modules:
//! - `connection`: Database connection management and pool configuration
//! - `packages`: Package-related database operations
//! - `versions`: Package version-related database operations
//! - `dist_tags`: Dist-tag operations
//! - `stats`: Build counter operations
//! - `store`: The read contract consumed by the aggregation services
//! - `service`: Main DatabaseService that provides a unified interface

pub mod connection;
pub mod dist_tags;
pub mod packages;
pub mod service;
pub mod stats;
pub mod store;
pub mod versions;

// Re-export the main types and service for easy access
pub use connection::{DbConnection, DbPool, MIGRATIONS};
pub use service::DatabaseService;
pub use store::{MetadataStore, StoreResult};

// Re-export operation structs for advanced usage
pub use dist_tags::DistTagOperations;
pub use packages::PackageOperations;
pub use stats::StatsOperations;
pub use versions::VersionOperations;
