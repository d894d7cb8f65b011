// Download links point at the external tarball worker; nothing here is served
// by this crate.

pub fn tarball_url(registry_base: &str, package: &str, version: &str) -> String {
    format!(
        "{}/{package}/tarball/{version}",
        registry_base.trim_end_matches('/')
    )
}

pub fn latest_tarball_url(registry_base: &str, package: &str) -> String {
    tarball_url(registry_base, package, "latest")
}
