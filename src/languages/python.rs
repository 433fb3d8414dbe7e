//! Python profile.

use super::{BlockComment, CallableKind, CommentSyntax, DeclarationSpec, Language, ProfileSpec};

const SIGNALS: &[(&str, u32)] = &[
    (r"^\s*(?:async\s+)?def\s+\w+\s*\(.*\)\s*(?:->.*)?:\s*(?:#.*)?$", 3),
    (r"^\s*class\s+\w+\s*(?:\(.*\))?\s*:\s*$", 3),
    (r"^\s*(?:elif|else|try|except|finally)\b.*:\s*$", 2),
    (r"^\s*(?:if|for|while|with)\b.*:\s*$", 1),
    (r"^\s*import\s+[\w.]+(?:\s+as\s+\w+)?(?:\s*,\s*[\w.]+(?:\s+as\s+\w+)?)*\s*$", 2),
    (r"^\s*from\s+\.*[\w.]*\s+import\b", 3),
    (r"\bself\.\w+", 1),
    (r"\b(?:None|True|False)\b", 1),
    (r"\bprint\s*\(", 1),
    (r"__\w+__", 2),
    (r"\blambda\b[^:]*:", 1),
    (r"^\s*@\w+", 1),
];

const DECLARATIONS: &[DeclarationSpec] = &[
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]*)(?:async[ \t]+)?def[ \t]+(?P<name>[A-Za-z_]\w*)[ \t]*\((?P<params>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)\)(?:[ \t]*->[ \t]*(?P<ret>[^:\n]+?))?[ \t]*:",
        kind: CallableKind::Function,
    },
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]*)(?P<name>[A-Za-z_]\w*)[ \t]*=[ \t]*lambda\b(?P<params>[^:\n]*):",
        kind: CallableKind::Lambda,
    },
];

pub(super) const SPEC: ProfileSpec = ProfileSpec {
    language: Language::Python,
    signals: &[SIGNALS],
    comments: CommentSyntax {
        line: &["#"],
        blocks: &[
            BlockComment {
                open: r#"""""#,
                close: r#"""""#,
                line_start: true,
            },
            BlockComment {
                open: "'''",
                close: "'''",
                line_start: true,
            },
        ],
        multiline_strings: &[r#"""""#, "'''"],
    },
    branches: &[
        r"\bif\b",
        r"\belif\b",
        r"\bfor\b",
        r"\bwhile\b",
        r"\bexcept\b",
        r"\bcase\b",
        r"\band\b",
        r"\bor\b",
    ],
    async_ops: &[
        r"\bawait\b",
        r"\basync\s+(?:with|for)\b",
        r"\basyncio\.(?:gather|create_task|wait|wait_for|run|as_completed|sleep)\b",
        r"\b(?:ThreadPoolExecutor|ProcessPoolExecutor)\b",
        r"\bthreading\.Thread\b",
    ],
    error_handling: &[r"^\s*try\s*:", r"\bexcept\b", r"\bfinally\s*:"],
    test_markers: &[
        r"^\s*(?:async\s+)?def\s+test_\w*",
        r"\bassert\b",
        r"\bpytest\.",
        r"\bunittest\.TestCase\b",
    ],
    declarations: DECLARATIONS,
    containers: &[r"^\s*class\s+\w+"],
    reserved: &[],
    return_separator: " -> ",
};
