//! TypeScript profile.

use super::ecmascript;
use super::{Language, ProfileSpec};

/// Type-level syntax only TypeScript carries.
const SIGNALS: &[(&str, u32)] = &[
    (
        r"\b[A-Za-z_$][\w$]*\??\s*:\s*(?:string|number|boolean|void|any|unknown|never|object)\b",
        3,
    ),
    (r"^\s*(?:export\s+)?(?:declare\s+)?(?:interface|type)\s+[A-Z]\w*", 3),
    (r"\b(?:public|private|protected|readonly)\s+[A-Za-z_$]", 2),
    (r"\bas\s+(?:const|string|number|unknown|any)\b", 2),
    (r":\s*Promise<", 3),
    (r"^\s*(?:export\s+)?(?:const\s+)?enum\s+[A-Z]\w*", 2),
    (r"\)\s*:\s*[A-Za-z_$][\w$<>\[\]|, ]*\s*(?:\{|=>)", 2),
    (r"\bimplements\s+[A-Z]", 2),
];

pub(super) const SPEC: ProfileSpec = ProfileSpec {
    language: Language::TypeScript,
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
