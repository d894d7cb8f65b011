// Re-export all models from their respective modules
pub mod dist_tag;
pub mod metadata;
pub mod package;
pub mod stats;
pub mod version;
pub mod views;

// Re-export commonly used models
pub use dist_tag::*;
pub use metadata::*;
pub use package::*;
pub use stats::*;
pub use version::*;
pub use views::*;
