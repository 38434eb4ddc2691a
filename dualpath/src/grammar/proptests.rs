//! Property-based tests for the path grammars.
//!
//! Note: `dots` carries its own small always-on property block for the
//! segment algorithm. This module exercises the public grammar operations.

use super::{PathGrammar, Posix, Windows};
use crate::FixedCwd;
use proptest::prelude::*;

// Strategy for generating path-like segments
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,10}",
        1 => "[a-z]{1,6}\\.[a-z]{1,3}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn plain_segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,10}(\\.[a-z]{1,3})?"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8).prop_map(|parts| parts.join("/"))
}

fn absolute_posix_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(plain_segment_strategy(), 0..6)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn mixed_separator_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((segment_strategy(), prop::bool::ANY), 1..8).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(segment, back)| format!("{segment}{}", if back { '\\' } else { '/' }))
            .collect::<String>()
    })
}

fn posix() -> Posix<FixedCwd> {
    Posix::with_cwd(FixedCwd::new("/home/user"))
}

fn windows() -> Windows<FixedCwd> {
    Windows::with_cwd(FixedCwd::new("C:\\Users\\user"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn posix_normalize_idempotent(path in relative_path_strategy(), rooted in any::<bool>()) {
        let path = if rooted { format!("/{path}") } else { path };
        let once = posix().normalize(&path);
        prop_assert_eq!(posix().normalize(&once), once);
    }

    #[test]
    fn windows_normalize_idempotent(path in mixed_separator_strategy(), drive in any::<bool>()) {
        let path = if drive { format!("C:\\{path}") } else { path };
        let once = windows().normalize(&path);
        prop_assert_eq!(windows().normalize(&once), once);
    }

    // Windows output never contains a forward slash
    #[test]
    fn windows_normalize_emits_backslashes(path in mixed_separator_strategy()) {
        prop_assert!(!windows().normalize(&path).contains('/'));
    }

    // join(a, b) == normalize(a + "/" + b) for non-empty segments
    #[test]
    fn posix_join_matches_normalize(a in relative_path_strategy(), b in relative_path_strategy()) {
        let grammar = posix();
        prop_assert_eq!(grammar.join([&a, &b]), grammar.normalize(&format!("{a}/{b}")));
    }

    // resolve against an absolute working directory is always absolute
    #[test]
    fn resolve_is_absolute(path in relative_path_strategy()) {
        let posix = posix();
        prop_assert!(posix.is_absolute(&posix.resolve([&path])));

        let windows = windows();
        prop_assert!(windows.is_absolute(&windows.resolve([&path])));
    }

    // resolve(from, relative(from, to)) == resolve(to)
    #[test]
    fn posix_relative_is_inverse(from in absolute_posix_strategy(), to in absolute_posix_strategy()) {
        let grammar = posix();
        let step = grammar.relative(&from, &to);
        prop_assert_eq!(grammar.resolve([from.as_str(), step.as_str()]), grammar.resolve([to.as_str()]));
    }

    #[test]
    fn windows_relative_is_inverse(from in absolute_posix_strategy(), to in absolute_posix_strategy()) {
        let grammar = windows();
        let from = format!("C:{from}");
        let to = format!("C:{to}");
        let step = grammar.relative(&from, &to);
        prop_assert_eq!(grammar.resolve([from.as_str(), step.as_str()]), grammar.resolve([to.as_str()]));
    }

    // format(parse(p)) == p for paths without redundant separators
    #[test]
    fn posix_parse_format_round_trip(parts in prop::collection::vec(plain_segment_strategy(), 1..6), rooted in any::<bool>()) {
        let grammar = posix();
        let path = if rooted { format!("/{}", parts.join("/")) } else { parts.join("/") };
        let parsed = grammar.parse(&path);
        prop_assert_eq!(format!("{}{}", parsed.name, parsed.ext), parsed.base.clone());
        prop_assert_eq!(grammar.format(&parsed), path);
    }

    #[test]
    fn windows_parse_format_round_trip(parts in prop::collection::vec(plain_segment_strategy(), 1..6)) {
        let grammar = windows();
        let path = format!("C:\\{}", parts.join("\\"));
        let parsed = grammar.parse(&path);
        prop_assert_eq!(parsed.root.as_str(), "C:\\");
        prop_assert_eq!(grammar.format(&parsed), path);
    }

    // basename(p) is the last segment for separator-free segments
    #[test]
    fn basename_is_last_segment(parts in prop::collection::vec(plain_segment_strategy(), 1..6)) {
        let last = parts.last().cloned().unwrap_or_default();
        prop_assert_eq!(posix().basename(&parts.join("/"), None), last.clone());
        prop_assert_eq!(windows().basename(&parts.join("\\"), None), last);
    }
}
