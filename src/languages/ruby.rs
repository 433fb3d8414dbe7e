//! Ruby profile.

use super::{BlockComment, CallableKind, CommentSyntax, DeclarationSpec, Language, ProfileSpec};

const SIGNALS: &[(&str, u32)] = &[
    (r"^\s*end\s*$", 2),
    (r"\bdo\b(?:\s*\|[^|]*\|)?\s*$", 2),
    (r"^\s*def\s+(?:self\.)?\w+[?!=]?\s*(?:\(.*\))?\s*$", 3),
    (r#"^\s*require(?:_relative)?\s+['"]"#, 3),
    (r"\bputs\b", 2),
    (r"\belsif\b", 3),
    (r"\bunless\b", 2),
    (r"^\s*(?:attr_reader|attr_accessor|attr_writer)\b", 3),
    (r"^\s*(?:class|module)\s+[A-Z][\w:]*(?:\s*<\s*[\w:]+)?\s*$", 2),
    (r"\.each(?:_with_index)?\s+do\b", 2),
    (r"#\{", 2),
    (r"\bnil\b", 1),
];

const DECLARATIONS: &[DeclarationSpec] = &[
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]*)def[ \t]+(?P<name>(?:self\.)?[A-Za-z_]\w*[?!=]?)(?:[ \t]*\((?P<params>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)\))?",
        kind: CallableKind::Method,
    },
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]*)(?P<name>[a-z_]\w*)[ \t]*=[ \t]*(?:->|lambda\b)[ \t]*(?:\((?P<params>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)\))?",
        kind: CallableKind::Lambda,
    },
];

pub(super) const SPEC: ProfileSpec = ProfileSpec {
    language: Language::Ruby,
    signals: &[SIGNALS],
    comments: CommentSyntax {
        line: &["#"],
        blocks: &[BlockComment {
            open: "=begin",
            close: "=end",
            line_start: true,
        }],
        multiline_strings: &[],
    },
    branches: &[
        r"\bif\b",
        r"\belsif\b",
        r"\bunless\b",
        r"\bwhile\b",
        r"\buntil\b",
        r"\bfor\b",
        r"\bwhen\b",
        r"\brescue\b",
        r"&&",
        r"\|\|",
        r"\band\b",
        r"\bor\b",
        r"\s\?\s",
    ],
    async_ops: &[
        r"\bThread\.new\b",
        r"\bFiber\.new\b",
        r"\bRactor\.new\b",
        r"\bConcurrent::",
        r"\bQueue\.new\b",
        r"\bAsync\s*(?:do|\{)",
    ],
    error_handling: &[r"\brescue\b", r"^\s*begin\s*$", r"\bensure\b", r"\bretry\b"],
    test_markers: &[
        r"\bRSpec\.describe\b",
        r"^\s*(?:describe|context|it)\s+['\x22]",
        r"\bexpect\s*\(",
        r"\bassert(?:_equal|_nil|_raises)?\b",
        r"<\s*(?:Minitest::Test|Test::Unit::TestCase)\b",
    ],
    declarations: DECLARATIONS,
    containers: &[r"^\s*(?:class|module)\b"],
    reserved: &[],
    return_separator: "",
};
