//! JavaScript profile.

use super::ecmascript;
use super::{Language, ProfileSpec};

/// CommonJS idioms that TypeScript sources rarely use.
const SIGNALS: &[(&str, u32)] = &[
    (r#"\brequire\s*\(\s*['"]"#, 3),
    (r"\bmodule\.exports\b", 3),
    (r"\bexports\.[A-Za-z_$][\w$]*\s*=", 2),
    (r#"^\s*['"]use strict['"]"#, 3),
];

pub(super) const SPEC: ProfileSpec = ProfileSpec {
    language: Language::JavaScript,
    signals: &[ecmascript::SIGNALS, SIGNALS],
    comments: ecmascript::COMMENTS,
    branches: ecmascript::BRANCHES,
    async_ops: ecmascript::ASYNC_OPS,
    error_handling: ecmascript::ERROR_HANDLING,
    test_markers: ecmascript::TEST_MARKERS,
    declarations: ecmascript::DECLARATIONS,
    containers: ecmascript::CONTAINERS,
    reserved: ecmascript::RESERVED,
    return_separator: ": ",
};
