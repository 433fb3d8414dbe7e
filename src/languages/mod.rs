//! Per-language pattern tables.
//!
//! Every supported language is described by a [`ProfileSpec`]: plain string
//! tables for resolver signals, comment syntax, branch keywords, async idioms,
//! error-handling and test idioms, and callable declaration shapes. The tables
//! are compiled once into a [`LanguageProfile`] and looked up by [`Language`].
//!
//! # Adding a New Language
//!
//! 1. Add a variant to [`Language`] and extend `ALL`, `as_str`, `from_extension`
//! 2. Create a module (e.g. `kotlin.rs`) exporting a `SPEC: ProfileSpec`
//! 3. Register it in [`profile`] below
//! 4. Teach `analysis::imports` the language's import idiom

mod ecmascript;
mod go;
mod javascript;
mod python;
mod ruby;
mod typescript;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Languages the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
    Go,
    Ruby,
}

impl Language {
    /// All languages, in resolver tie-break order.
    pub const ALL: [Language; 5] = [
        Language::TypeScript,
        Language::JavaScript,
        Language::Python,
        Language::Go,
        Language::Ruby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Go => "go",
            Language::Ruby => "ruby",
        }
    }

    /// Human-facing name used in summaries and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Go => "Go",
            Language::Ruby => "Ruby",
        }
    }

    /// Get the file extensions associated with this language (without dot).
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::TypeScript => &["ts", "tsx", "mts", "cts"],
            Language::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Language::Python => &["py", "pyi"],
            Language::Go => &["go"],
            Language::Ruby => &["rb", "rake"],
        }
    }

    /// Determine the language from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "typescript" | "ts" | "tsx" => Ok(Language::TypeScript),
            "javascript" | "js" | "jsx" => Ok(Language::JavaScript),
            "python" | "py" => Ok(Language::Python),
            "go" | "golang" => Ok(Language::Go),
            "ruby" | "rb" => Ok(Language::Ruby),
            _ => Err(format!("unknown language: {}", s)),
        }
    }
}

/// Kind of callable a declaration pattern produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallableKind {
    Function,
    Method,
    Lambda,
}

impl CallableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallableKind::Function => "function",
            CallableKind::Method => "method",
            CallableKind::Lambda => "lambda",
        }
    }
}

impl std::fmt::Display for CallableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A block comment delimiter pair.
#[derive(Debug, Clone, Copy)]
pub struct BlockComment {
    pub open: &'static str,
    pub close: &'static str,
    /// Only recognised as the first token on a line (Python docstrings, Ruby `=begin`).
    pub line_start: bool,
}

/// Comment syntax of a language.
#[derive(Debug, Clone, Copy)]
pub struct CommentSyntax {
    pub line: &'static [&'static str],
    pub blocks: &'static [BlockComment],
    /// Delimiters of string literals that may span lines (Python triple quotes).
    pub multiline_strings: &'static [&'static str],
}

/// Uncompiled declaration shape.
///
/// Patterns run over the whole text in multi-line mode and must expose the
/// named groups `indent`, `name` and `params`; `ret` and `recv` are optional.
pub struct DeclarationSpec {
    pub pattern: &'static str,
    pub kind: CallableKind,
}

/// Static description of a language, compiled into a [`LanguageProfile`].
pub struct ProfileSpec {
    pub language: Language,
    /// Weighted per-line signal tables used by the resolver.
    pub signals: &'static [&'static [(&'static str, u32)]],
    pub comments: CommentSyntax,
    pub branches: &'static [&'static str],
    pub async_ops: &'static [&'static str],
    pub error_handling: &'static [&'static str],
    pub test_markers: &'static [&'static str],
    pub declarations: &'static [DeclarationSpec],
    /// Lines opening a body whose direct callables are members, not nested
    /// closures (classes, modules, object literals).
    pub containers: &'static [&'static str],
    /// Identifiers that look like declarations but are keywords.
    pub reserved: &'static [&'static str],
    /// Separator placed between the parameter list and a declared return type.
    pub return_separator: &'static str,
}

/// A compiled resolver signal.
pub struct Signal {
    pub regex: Regex,
    pub weight: u32,
}

/// A compiled declaration shape.
pub struct DeclarationPattern {
    pub regex: Regex,
    pub kind: CallableKind,
}

/// Compiled pattern tables for one language.
pub struct LanguageProfile {
    pub language: Language,
    pub signals: Vec<Signal>,
    pub comments: CommentSyntax,
    pub branches: Regex,
    pub async_ops: Regex,
    pub error_handling: Regex,
    pub test_markers: Regex,
    pub declarations: Vec<DeclarationPattern>,
    pub containers: Regex,
    pub reserved: &'static [&'static str],
    pub return_separator: &'static str,
}

impl LanguageProfile {
    /// Compile a static spec. Patterns are compile-time constants, so a failure
    /// here is a programming error caught by the unit tests.
    fn compile(spec: &ProfileSpec) -> Self {
        Self {
            language: spec.language,
            signals: spec
                .signals
                .iter()
                .flat_map(|table| table.iter())
                .map(|(pattern, weight)| Signal {
                    regex: compile_pattern(pattern),
                    weight: *weight,
                })
                .collect(),
            comments: spec.comments,
            branches: alternation(spec.branches),
            async_ops: alternation(spec.async_ops),
            error_handling: alternation(spec.error_handling),
            test_markers: alternation(spec.test_markers),
            declarations: spec
                .declarations
                .iter()
                .map(|d| DeclarationPattern {
                    regex: compile_pattern(d.pattern),
                    kind: d.kind,
                })
                .collect(),
            containers: alternation(spec.containers),
            reserved: spec.reserved,
            return_separator: spec.return_separator,
        }
    }

    /// Whether an identifier captured as a declaration name is a keyword.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(&name)
    }
}

fn compile_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {:?}: {}", pattern, e))
}

/// Join a pattern table into one alternation so each line is scanned once.
fn alternation(patterns: &[&str]) -> Regex {
    let joined = patterns
        .iter()
        .map(|p| format!("(?:{})", p))
        .collect::<Vec<_>>()
        .join("|");
    compile_pattern(&joined)
}

static TYPESCRIPT_PROFILE: Lazy<LanguageProfile> =
    Lazy::new(|| LanguageProfile::compile(&typescript::SPEC));

static JAVASCRIPT_PROFILE: Lazy<LanguageProfile> =
    Lazy::new(|| LanguageProfile::compile(&javascript::SPEC));

static PYTHON_PROFILE: Lazy<LanguageProfile> =
    Lazy::new(|| LanguageProfile::compile(&python::SPEC));

static GO_PROFILE: Lazy<LanguageProfile> = Lazy::new(|| LanguageProfile::compile(&go::SPEC));

static RUBY_PROFILE: Lazy<LanguageProfile> = Lazy::new(|| LanguageProfile::compile(&ruby::SPEC));

/// Get the compiled profile for a language.
pub fn profile(language: Language) -> &'static LanguageProfile {
    match language {
        Language::TypeScript => &TYPESCRIPT_PROFILE,
        Language::JavaScript => &JAVASCRIPT_PROFILE,
        Language::Python => &PYTHON_PROFILE,
        Language::Go => &GO_PROFILE,
        Language::Ruby => &RUBY_PROFILE,
    }
}
