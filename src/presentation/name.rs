/// Splits `name` at its first `/` into `(scope, short_name)`, keeping the slash
/// on the scope. Unscoped names come back as `("", name)`.
pub fn split_package_name(name: &str) -> (&str, &str) {
    match name.find('/') {
        Some(idx) => name.split_at(idx + 1),
        None => ("", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_name() {
        assert_eq!(split_package_name("left-pad"), ("", "left-pad"));
    }

    #[test]
    fn test_scoped_name() {
        assert_eq!(split_package_name("@datakit/core"), ("@datakit/", "core"));
    }

    #[test]
    fn test_only_first_slash_splits() {
        assert_eq!(split_package_name("@a/b/c"), ("@a/", "b/c"));
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(split_package_name(""), ("", ""));
        assert_eq!(split_package_name("@scope/"), ("@scope/", ""));
    }
}
