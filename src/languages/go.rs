//! Go profile.

use super::{BlockComment, CallableKind, CommentSyntax, DeclarationSpec, Language, ProfileSpec};

const SIGNALS: &[(&str, u32)] = &[
    (r"^\s*package\s+\w+\s*$", 4),
    (r"^\s*func\b", 3),
    (r":=", 2),
    (r"^\s*import\s*\(\s*$", 3),
    (r#"^\s*import\s+(?:\w+\s+)?""#, 3),
    (r"\bgo\s+(?:func\b|[\w.]+\()", 2),
    (r"\bchan\b", 2),
    (r"\bdefer\b", 2),
    (r"\bfmt\.\w+", 2),
    (r"\berr\s*!=\s*nil\b", 3),
    (r"\bstruct\s*\{", 2),
    (r"\bnil\b", 1),
];

const DECLARATIONS: &[DeclarationSpec] = &[
    // func (r *T) Name[T any](a int) (int, error) {
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]*)func[ \t]*(?:\((?P<recv>[^)]*)\)[ \t]*)?(?P<name>[A-Za-z_]\w*)[ \t]*(?:\[[^\]\n]*\][ \t]*)?\((?P<params>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)\)[ \t]*(?P<ret>\([^)]*\)|[^{\n]*)",
        kind: CallableKind::Function,
    },
    // handler := func(w http.ResponseWriter) {
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]*)(?:var[ \t]+)?(?P<name>[A-Za-z_]\w*)[ \t]*:?=[ \t]*func[ \t]*\((?P<params>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)\)[ \t]*(?P<ret>\([^)]*\)|[^{\n]*)",
        kind: CallableKind::Lambda,
    },
];

pub(super) const SPEC: ProfileSpec = ProfileSpec {
    language: Language::Go,
    signals: &[SIGNALS],
    comments: CommentSyntax {
        line: &["//"],
        blocks: &[BlockComment {
            open: "/*",
            close: "*/",
            line_start: false,
        }],
        multiline_strings: &[],
    },
    branches: &[
        r"\bif\b",
        r"\bfor\b",
        r"\bcase\b",
        r"&&",
        r"\|\|",
    ],
    async_ops: &[
        r"\bgo\s+(?:func\b|[\w.]+\()",
        r"\bchan\b",
        r"<-",
        r"\bsync\.(?:WaitGroup|Mutex|RWMutex|Once)\b",
        r"\bselect\s*\{",
        r"\berrgroup\.",
    ],
    error_handling: &[
        r"\berr\s*!=\s*nil\b",
        r"\berrors\.(?:Is|As|New|Join)\b",
        r"\bfmt\.Errorf\b",
        r"\brecover\s*\(",
    ],
    test_markers: &[
        r"^\s*func\s+(?:Test|Benchmark|Example|Fuzz)\w*\s*\(",
        r"\*testing\.[TBF]\b",
        r"\bt\.(?:Run|Errorf|Fatalf|Error|Fatal)\s*\(",
    ],
    declarations: DECLARATIONS,
    containers: &[r"^\s*var\s*\(\s*$"],
    reserved: &["func", "if", "for", "switch", "select", "return"],
    return_separator: " ",
};
