//! Property-based tests for link resolution.

use super::resolve::resolve;
use proptest::prelude::*;
use std::path::{Component, PathBuf};

// Strategy for generating path-like strings, including dotted names
fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_-]{1,20}",
        "[a-z]{1,8}\\.\\.[a-z]{1,8}",
        "\\.\\.[a-z]{1,8}",
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(
        prop_oneof![
            3 => path_component_strategy(),
            1 => Just("..".to_string()),
            1 => Just(".".to_string()),
        ],
        1..6,
    )
    .prop_map(|parts| parts.iter().collect())
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Absolute targets pass through untouched
    #[test]
    fn absolute_target_unchanged(link in absolute_path_strategy(), target in absolute_path_strategy()) {
        prop_assert_eq!(resolve(&link, &target), target);
    }

    // Relative targets land under the link's directory
    #[test]
    fn relative_target_joined_to_link_dir(link in absolute_path_strategy(), target in relative_path_strategy()) {
        let resolved = resolve(&link, &target);
        let parent = link.parent().unwrap();
        prop_assert!(resolved.starts_with(parent));
    }

    // No lexical normalization: every `..` in the target survives
    #[test]
    fn parent_components_preserved(link in absolute_path_strategy(), target in relative_path_strategy()) {
        let resolved = resolve(&link, &target);
        let count = |p: &std::path::Path| p.components().filter(|c| *c == Component::ParentDir).count();
        prop_assert_eq!(count(&resolved), count(&target));
    }

    // Names containing ".." are never navigation
    #[test]
    fn dotted_names_are_normal_components(link in absolute_path_strategy()) {
        for component in link.components().skip(1) {
            prop_assert!(matches!(component, Component::Normal(_)));
        }
    }
}
