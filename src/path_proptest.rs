//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{repo_name, PathNormalizer, PathStyle};
    use proptest::prelude::*;

    // ============================================================================
    // repo_name property tests
    // ============================================================================

    proptest! {
        /// Property: `.../<name>.<ext>` always resolves to exactly `<name>`
        #[test]
        fn repo_name_strips_prefix_and_extension(
            prefix in "(https://|git@)[a-z]{1,10}\\.(com|org)[:/]([a-z0-9_-]{1,8}/){1,3}",
            name in "[a-zA-Z0-9_-][a-zA-Z0-9._-]{0,20}",
            ext in "[a-z]{1,5}",
        ) {
            let url = format!("{prefix}{name}.{ext}");
            prop_assert_eq!(repo_name(&url), name.as_str());
        }

        /// Property: without a `.` after the last `/`, the remainder is returned
        #[test]
        fn repo_name_without_extension_is_remainder(
            prefix in "https://[a-z]{1,10}\\.com/([a-z0-9_-]{1,8}/){0,3}",
            name in "[a-zA-Z0-9_-]{1,20}",
        ) {
            let url = format!("{prefix}{name}");
            prop_assert_eq!(repo_name(&url), name.as_str());
        }

        /// Property: the derived name never contains a forward slash
        #[test]
        fn repo_name_never_contains_slash(input in ".*") {
            prop_assert!(!repo_name(&input).contains('/'));
        }

        /// Property: repo_name is deterministic (same input = same output)
        #[test]
        fn repo_name_is_deterministic(input in ".*") {
            prop_assert_eq!(repo_name(&input), repo_name(&input));
        }
    }

    // ============================================================================
    // PathNormalizer property tests
    // ============================================================================

    proptest! {
        /// Property: display then expand is the same as expanding directly,
        /// for any path inside the home directory
        #[test]
        fn display_round_trips_under_home_posix(
            user in "[a-z]{1,8}",
            rest in "(/[a-zA-Z0-9._-]{1,10}){0,4}",
        ) {
            let paths = PathNormalizer::new(format!("/home/{user}"), PathStyle::Posix);
            let path = format!("/home/{user}{rest}");
            prop_assert_eq!(
                paths.to_absolute(&paths.to_display(&path)),
                paths.to_absolute(&path)
            );
        }

        /// Property: the same round trip holds with Windows separators
        #[test]
        fn display_round_trips_under_home_windows(
            user in "[a-z]{1,8}",
            rest in "([\\\\/][a-zA-Z0-9._-]{1,10}){0,4}",
        ) {
            let home = format!("C:\\Users\\{user}");
            let paths = PathNormalizer::new(home.clone(), PathStyle::Windows);
            let path = format!("{home}{rest}");
            prop_assert_eq!(
                paths.to_absolute(&paths.to_display(&path)),
                paths.to_absolute(&path)
            );
        }

        /// Property: paths outside the home directory are displayed verbatim
        #[test]
        fn display_outside_home_is_verbatim(rest in "(/[a-zA-Z0-9_-]{1,10}){1,4}") {
            let paths = PathNormalizer::new("/home/alice", PathStyle::Posix);
            let path = format!("/srv{rest}");
            prop_assert_eq!(paths.to_display(&path), path);
        }

        /// Property: to_absolute never leaves a leading home marker followed
        /// by a separator
        #[test]
        fn to_absolute_expands_home_marker(rest in "(/[a-zA-Z0-9_-]{1,10}){0,4}") {
            let paths = PathNormalizer::new("/home/alice", PathStyle::Posix);
            let expanded = paths.to_absolute(&format!("~{rest}"));
            prop_assert!(expanded.starts_with("/home/alice"));
            prop_assert!(!expanded.starts_with('~'));
        }
    }
}
