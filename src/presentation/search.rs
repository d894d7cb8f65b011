use super::sort::{SortMode, sort_packages};
use crate::models::PackageSummary;

/// Case-insensitive substring match on name or description. A blank query
/// returns every package in input order.
pub fn search_packages<'a>(query: &str, packages: &'a [PackageSummary]) -> Vec<&'a PackageSummary> {
    if query.trim().is_empty() {
        return packages.iter().collect();
    }

    let needle = query.to_lowercase();
    packages
        .iter()
        .filter(|pkg| {
            pkg.name.to_lowercase().contains(&needle)
                || pkg
                    .description
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect()
}

/// Home page listing: filter first, then order.
pub fn browse_packages<'a>(
    query: &str,
    mode: SortMode,
    packages: &'a [PackageSummary],
) -> Vec<&'a PackageSummary> {
    let mut listing = search_packages(query, packages);
    sort_packages(&mut listing, mode);
    listing
}
