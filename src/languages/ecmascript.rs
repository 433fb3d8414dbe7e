//! Tables shared by TypeScript and JavaScript.

use super::{BlockComment, CallableKind, CommentSyntax, DeclarationSpec};

/// Brace-and-semicolon family signals, scored for both TypeScript and JavaScript.
pub(super) const SIGNALS: &[(&str, u32)] = &[
    (r";\s*$", 1),
    (r"\{\s*$", 1),
    (r"^\s*(?:const|let|var)\s+[A-Za-z_$]", 2),
    (r"=>", 2),
    (r"===|!==", 2),
    (r"\bfunction\b", 2),
    (r"\bconsole\.\w+\s*\(", 2),
    (r#"^\s*import\s.*\bfrom\s+['"]"#, 3),
    (r"^\s*export\s", 2),
    (r"^\s*(?:if|for|while|switch)\s*\(", 1),
];

pub(super) const COMMENTS: CommentSyntax = CommentSyntax {
    line: &["//"],
    blocks: &[BlockComment {
        open: "/*",
        close: "*/",
        line_start: false,
    }],
    multiline_strings: &[],
};

pub(super) const BRANCHES: &[&str] = &[
    r"\bif\b",
    r"\bfor\b",
    r"\bwhile\b",
    r"\bcase\b",
    r"\bcatch\b",
    r"&&",
    r"\|\|",
    r"\?\?",
    r"\s\?\s",
];

pub(super) const ASYNC_OPS: &[&str] = &[
    r"\bawait\b",
    r"\.then\s*\(",
    r"\bnew\s+Promise\b",
    r"\bPromise\.(?:all|allSettled|any|race)\b",
    r"\b(?:setTimeout|setInterval|setImmediate|queueMicrotask)\s*\(",
];

pub(super) const ERROR_HANDLING: &[&str] = &[r"\btry\s*\{", r"\bcatch\b", r"\bfinally\b"];

pub(super) const TEST_MARKERS: &[&str] = &[
    r"\b(?:describe|it|test)\s*\(",
    r"\bexpect\s*\(",
    r"\bassert\.\w+\s*\(",
];

pub(super) const DECLARATIONS: &[DeclarationSpec] = &[
    // function name(a, b): T {
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]*)(?:export[ \t]+)?(?:default[ \t]+)?(?:async[ \t]+)?function\b[ \t]*\*?[ \t]*(?P<name>[A-Za-z_$][\w$]*)[ \t]*(?:<[^>\n]*>)?[ \t]*\((?P<params>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)\)(?:[ \t]*:[ \t]*(?P<ret>[^{\n]+?))?[ \t]*(?:\{|$)",
        kind: CallableKind::Function,
    },
    // const name = async (a, b): T =>
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]*)(?:export[ \t]+)?(?:const|let|var)[ \t]+(?P<name>[A-Za-z_$][\w$]*)[ \t]*(?::[^=\n]+)?=[ \t]*(?:async[ \t]+)?(?:<[^>\n]*>[ \t]*)?\((?P<params>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)\)(?:[ \t]*:[ \t]*(?P<ret>[^=\n]+?))?[ \t]*=>",
        kind: CallableKind::Lambda,
    },
    // const name = async x =>
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]*)(?:export[ \t]+)?(?:const|let|var)[ \t]+(?P<name>[A-Za-z_$][\w$]*)[ \t]*=[ \t]*(?:async[ \t]+)?(?P<params>[A-Za-z_$][\w$]*)[ \t]*=>",
        kind: CallableKind::Lambda,
    },
    // const name = function (a, b) {
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]*)(?:export[ \t]+)?(?:const|let|var)[ \t]+(?P<name>[A-Za-z_$][\w$]*)[ \t]*(?::[^=\n]+)?=[ \t]*(?:async[ \t]+)?function\b[ \t]*\*?[ \t]*(?:[A-Za-z_$][\w$]*)?[ \t]*\((?P<params>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)\)",
        kind: CallableKind::Function,
    },
    // class member: async name(a, b): T {
    DeclarationSpec {
        pattern: r"(?m)^(?P<indent>[ \t]+)(?:(?:public|private|protected|static|readonly|async|override|abstract|get|set)[ \t]+)*(?P<name>#?[A-Za-z_$][\w$]*)[ \t]*(?:<[^>\n]*>)?[ \t]*\((?P<params>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)\)(?:[ \t]*:[ \t]*(?P<ret>[^{\n]+?))?[ \t]*\{[ \t]*$",
        kind: CallableKind::Method,
    },
];

pub(super) const CONTAINERS: &[&str] = &[
    r"^\s*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\b",
    r"^\s*(?:export\s+)?(?:declare\s+)?(?:namespace|module)\s+[\w.]+\s*\{",
    // object literals: `const api = {`, `export default {`, `key: {`, `wrap({`
    r"(?:[=:(]|\bdefault)\s*\{\s*$",
];

pub(super) const RESERVED: &[&str] = &[
    "if", "for", "while", "switch", "catch", "function", "return", "else", "do", "with",
    "typeof", "await", "new", "delete", "void", "super",
];
