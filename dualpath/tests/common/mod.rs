//! Common test utilities for integration tests.
//!
//! Every grammar here reads a fixed working directory, so results never
//! depend on where the test binary runs.

use dualpath::{FixedCwd, PathGrammar, Posix, Windows};

/// Working directory reported to the POSIX grammar.
#[allow(dead_code)]
pub const POSIX_CWD: &str = "/home/tester/work";

/// Working directory reported to the Windows grammar.
#[allow(dead_code)]
pub const WINDOWS_CWD: &str = "C:\\Users\\tester\\work";

/// A POSIX grammar rooted at [`POSIX_CWD`].
#[allow(dead_code)]
pub fn posix() -> Posix<FixedCwd> {
    Posix::with_cwd(FixedCwd::new(POSIX_CWD))
}

/// A Windows grammar rooted at [`WINDOWS_CWD`].
#[allow(dead_code)]
pub fn windows() -> Windows<FixedCwd> {
    Windows::with_cwd(FixedCwd::new(WINDOWS_CWD))
}

/// Asserts that `actual` matches `expected`, or matches it once every `\`
/// in `actual` is turned into `/`.
///
/// Vectors shared by both grammars are written with `/`; the Windows grammar
/// emits `\`.
#[allow(dead_code)]
pub fn assert_same_modulo_separator(actual: &str, expected: &str, context: &str) {
    assert!(
        actual == expected || actual.replace('\\', "/") == expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

/// Parses each path, formats it back, and checks that the parts agree with
/// the single-purpose operations.
#[allow(dead_code)]
pub fn check_parse_format<G: PathGrammar>(grammar: &G, cases: &[(&str, &str)]) {
    for &(path, root) in cases {
        let parts = grammar.parse(path);

        assert_eq!(grammar.format(&parts), path, "format(parse({path:?}))");
        assert_eq!(parts.root, root, "root of {path:?}");
        if !parts.root.is_empty() {
            assert!(
                parts.dir.starts_with(&parts.root),
                "dir {:?} of {path:?} should start with root {:?}",
                parts.dir,
                parts.root
            );
        }

        let expected_dir = if parts.dir.is_empty() {
            String::new()
        } else {
            grammar.dirname(path)
        };
        assert_eq!(parts.dir, expected_dir, "dir of {path:?}");
        assert_eq!(parts.base, grammar.basename(path, None), "base of {path:?}");
        assert_eq!(parts.ext, grammar.extname(path), "ext of {path:?}");
    }
}
