//! Pure derivations the browsing UI applies to fetched catalog data.
//!
//! Nothing in here reads ambient state: the current search text, sort mode
//! and selected package manager are always passed in by the caller.

pub mod health;
pub mod install;
pub mod name;
pub mod search;
pub mod sort;
pub mod time;
pub mod urls;
pub mod view;

pub use health::RegistryHealth;
pub use install::{InstallSnippet, PackageManager, install_snippet, manifest_dependency};
pub use name::split_package_name;
pub use search::{browse_packages, search_packages};
pub use sort::{SortMode, compare_names, compare_versions, sort_packages, sort_versions};
pub use time::{format_date, parse_timestamp, time_ago, timestamp_millis};
pub use urls::{latest_tarball_url, tarball_url};
pub use view::{DependencyGroups, PackageCard, PackageLinks, PackageOverview};
