//! Lexical metrics extraction.
//!
//! A single pass over the normalized lines produces line, comment, branch,
//! async, error-handling, test-idiom and work-marker counts; dependency
//! extraction runs as one extra pass (see `imports`).
//!
//! Counting is textual: branch keywords inside comments or strings are
//! counted too. Cyclomatic complexity is sketched as `1 + branches`.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::languages::{profile, CommentSyntax, Language};

use super::imports::extract_dependencies;
use super::types::Metrics;

lazy_static! {
    /// Work markers left in code.
    static ref WORK_MARKER: Regex = Regex::new(r"\b(?:TODO|FIXME|XXX|HACK)\b").unwrap();
}

/// Metrics plus the auxiliary counts the synthesizer needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexicalScan {
    pub metrics: Metrics,
    pub comment_lines: usize,
    pub error_handling_sites: usize,
    pub test_markers: usize,
    pub work_markers: usize,
}

/// Extract quantitative metrics from a snippet.
pub fn extract_metrics(code: &str, language: Language) -> Metrics {
    scan(code, language).metrics
}

/// Run the full lexical scan.
pub fn scan(code: &str, language: Language) -> LexicalScan {
    let profile = profile(language);
    let text = normalize_line_endings(code);

    let mut tracker = CommentTracker::new(&profile.comments);
    let mut result = LexicalScan::default();
    let mut lines = 0usize;
    let mut branches = 0usize;
    let mut async_operations = 0usize;

    for line in text.lines() {
        lines += 1;
        if tracker.classify(line).has_comment() {
            result.comment_lines += 1;
        }
        branches += profile.branches.find_iter(line).count();
        async_operations += profile.async_ops.find_iter(line).count();
        result.error_handling_sites += profile.error_handling.find_iter(line).count();
        result.test_markers += profile.test_markers.find_iter(line).count();
        result.work_markers += WORK_MARKER.find_iter(line).count();
    }

    result.metrics = Metrics {
        lines_of_code: lines,
        branches,
        async_operations,
        cyclomatic_sketch: 1 + branches,
        comment_density: density(result.comment_lines, lines),
        external_dependencies: extract_dependencies(&text, language),
    };

    tracing::debug!(
        language = %language,
        lines,
        branches,
        async_operations,
        comment_lines = result.comment_lines,
        dependencies = result.metrics.external_dependencies.len(),
        "lexical scan complete"
    );

    result
}

/// Convert CRLF and lone CR line endings to LF.
pub fn normalize_line_endings(code: &str) -> Cow<'_, str> {
    if code.contains('\r') {
        Cow::Owned(code.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(code)
    }
}

fn density(comment_lines: usize, lines: usize) -> f64 {
    let ratio = comment_lines as f64 / lines.max(1) as f64;
    ratio.clamp(0.0, 1.0)
}

/// How a line reads once block comment and multi-line string state is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    Code,
    /// Code followed by a line comment.
    TrailingComment,
    /// Entirely comment: line comment, block comment or docstring.
    Comment,
    /// Inside a string literal opened on an earlier line.
    StringBody,
}

impl LineKind {
    pub(crate) fn has_comment(self) -> bool {
        matches!(self, LineKind::Comment | LineKind::TrailingComment)
    }
}

/// Tracks block-comment and multi-line string state across lines.
pub(crate) struct CommentTracker<'a> {
    syntax: &'a CommentSyntax,
    /// Closing delimiter of the block comment we are inside, if any.
    open_block: Option<&'static str>,
    /// Closing delimiter of the multi-line string we are inside, if any.
    open_string: Option<&'static str>,
}

impl<'a> CommentTracker<'a> {
    pub(crate) fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            syntax,
            open_block: None,
            open_string: None,
        }
    }

    /// Classify one line, updating block and string state.
    pub(crate) fn classify(&mut self, line: &str) -> LineKind {
        let syntax = self.syntax;
        let trimmed = line.trim_start();

        if let Some(close) = self.open_string {
            if trimmed.contains(close) {
                self.open_string = None;
            }
            return LineKind::StringBody;
        }

        if let Some(close) = self.open_block {
            if trimmed.contains(close) {
                self.open_block = None;
            }
            return LineKind::Comment;
        }

        for block in syntax.blocks {
            let start = if block.line_start {
                trimmed.starts_with(block.open).then_some(0)
            } else {
                find_outside_string(trimmed, block.open)
            };
            if let Some(pos) = start {
                let rest = &trimmed[pos + block.open.len()..];
                if !rest.contains(block.close) {
                    self.open_block = Some(block.close);
                }
                return if pos == 0 {
                    LineKind::Comment
                } else {
                    LineKind::TrailingComment
                };
            }
        }

        let marker = syntax
            .line
            .iter()
            .filter_map(|marker| find_outside_string(trimmed, marker))
            .min();
        let code = &trimmed[..marker.unwrap_or(trimmed.len())];

        // An odd number of delimiters leaves a string open, e.g. `QUERY = """`.
        if let Some(delimiter) = syntax
            .multiline_strings
            .iter()
            .find(|d| code.matches(**d).count() % 2 == 1)
        {
            self.open_string = Some(*delimiter);
        }

        match marker {
            Some(0) => LineKind::Comment,
            Some(_) => LineKind::TrailingComment,
            None => LineKind::Code,
        }
    }
}

/// Byte offset of the first occurrence of `needle` that is not inside a string literal.
pub(crate) fn find_outside_string(line: &str, needle: &str) -> Option<usize> {
    line.match_indices(needle)
        .map(|(pos, _)| pos)
        .find(|&pos| !is_inside_string_literal(line, pos))
}

/// Check if a byte position in a line falls within a string literal.
/// Supports double-quoted, single-quoted, and backtick strings with escape handling.
pub(crate) fn is_inside_string_literal(line: &str, pos: usize) -> bool {
    let mut string_char: Option<char> = None;
    let mut escaped = false;

    for (i, ch) in line.char_indices() {
        if i >= pos {
            break;
        }

        if escaped {
            escaped = false;
            continue;
        }

        if ch == '\\' && string_char.is_some() {
            escaped = true;
            continue;
        }

        if ch == '"' || ch == '\'' || ch == '`' {
            match string_char {
                None => string_char = Some(ch),
                Some(open) if open == ch => string_char = None,
                Some(_) => {}
            }
        }
    }

    string_char.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_baseline() {
        let metrics = extract_metrics("", Language::TypeScript);
        assert_eq!(metrics, Metrics::default());
        assert_eq!(metrics.lines_of_code, 0);
        assert_eq!(metrics.cyclomatic_sketch, 1);
    }

    #[test]
    fn test_line_count_convention() {
        assert_eq!(extract_metrics("a", Language::Go).lines_of_code, 1);
        assert_eq!(extract_metrics("a\n", Language::Go).lines_of_code, 1);
        assert_eq!(extract_metrics("a\nb", Language::Go).lines_of_code, 2);
        assert_eq!(extract_metrics("a\n\n", Language::Go).lines_of_code, 2);
        assert_eq!(extract_metrics("\n", Language::Go).lines_of_code, 1);
        assert_eq!(extract_metrics("a\r\nb\r\n", Language::Go).lines_of_code, 2);
        assert_eq!(extract_metrics("a\rb", Language::Go).lines_of_code, 2);
    }

    #[test]
    fn test_typescript_branches() {
        let code = r#"
function pick(a: number, b: number): number {
  if (a > b && a > 0) {
    return a;
  }
  for (const x of [a, b]) {
    console.log(x);
  }
  return a > 0 ? a : b ?? 0;
}
"#;
        let metrics = extract_metrics(code, Language::TypeScript);
        // if, &&, for, ?, ??
        assert_eq!(metrics.branches, 5);
        assert_eq!(metrics.cyclomatic_sketch, 6);
    }

    #[test]
    fn test_python_branches_and_async() {
        let code = r#"
async def load(urls):
    results = await asyncio.gather(*[fetch(u) for u in urls])
    if not results or len(results) == 0:
        return []
    return results
"#;
        let metrics = extract_metrics(code, Language::Python);
        // for, if, or
        assert_eq!(metrics.branches, 3);
        // await, asyncio.gather
        assert_eq!(metrics.async_operations, 2);
    }

    #[test]
    fn test_go_async_operations() {
        let code = r#"
func run(jobs []Job) {
    var wg sync.WaitGroup
    results := make(chan int)
    for _, j := range jobs {
        wg.Add(1)
        go worker(j, results)
    }
    v := <-results
    _ = v
}
"#;
        let metrics = extract_metrics(code, Language::Go);
        // sync.WaitGroup, chan, go worker(, <-
        assert_eq!(metrics.async_operations, 4);
        assert_eq!(metrics.branches, 1);
    }

    #[test]
    fn test_comment_density_line_and_block() {
        let code = "/*\n * header\n */\nconst a = 1; // trailing\nconst b = 2;\n";
        let scan = scan(code, Language::JavaScript);
        // three block lines plus one trailing comment
        assert_eq!(scan.comment_lines, 4);
        assert!((scan.metrics.comment_density - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_comment_marker_inside_string_ignored() {
        let code = "const url = \"http://example.org\";\n";
        let scan = scan(code, Language::TypeScript);
        assert_eq!(scan.comment_lines, 0);
    }

    #[test]
    fn test_python_docstring_block_counts_every_line() {
        let code = "def f():\n    \"\"\"\n    Summary.\n    \"\"\"\n    return 1\n";
        let scan = scan(code, Language::Python);
        assert_eq!(scan.comment_lines, 3);
    }

    #[test]
    fn test_python_multiline_string_is_not_comment() {
        let code = "import os\nQUERY = \"\"\"\nSELECT 1\n\"\"\"\nimport requests\n\ndef run():\n    return QUERY\n";
        let scan = scan(code, Language::Python);
        assert_eq!(scan.comment_lines, 0);
        assert_eq!(scan.metrics.comment_density, 0.0);
        let deps: Vec<&str> = scan
            .metrics
            .external_dependencies
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(deps, vec!["requests"]);
    }

    #[test]
    fn test_docstring_after_multiline_string_still_counts() {
        let code = "SQL = '''\n# not a comment\n'''\ndef f():\n    \"\"\"Run it.\"\"\"\n    return SQL  # trailing\n";
        let scan = scan(code, Language::Python);
        // one-line docstring plus trailing comment
        assert_eq!(scan.comment_lines, 2);
    }

    #[test]
    fn test_python_hash_in_string_is_not_comment() {
        let code = "color = \"#fff\"\n# real comment\n";
        let scan = scan(code, Language::Python);
        assert_eq!(scan.comment_lines, 1);
    }

    #[test]
    fn test_ruby_begin_end_block() {
        let code = "=begin\nnotes\n=end\nputs 1\n";
        let scan = scan(code, Language::Ruby);
        assert_eq!(scan.comment_lines, 3);
    }

    #[test]
    fn test_density_is_bounded() {
        let code = "// a\n// b\n/* c */\n";
        let metrics = extract_metrics(code, Language::Go);
        assert!((metrics.comment_density - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_work_markers_and_error_handling() {
        let code = "// TODO: cache results\ntry {\n  run();\n} catch (e) {\n  // FIXME\n}\n";
        let scan = scan(code, Language::TypeScript);
        assert_eq!(scan.work_markers, 2);
        // try {, catch
        assert_eq!(scan.error_handling_sites, 2);
    }

    #[test]
    fn test_is_inside_string_literal() {
        assert!(!is_inside_string_literal("hello world", 0));
        assert!(is_inside_string_literal(r#""hello world""#, 3));
        assert!(!is_inside_string_literal(r#""hello" world"#, 9));
        assert!(is_inside_string_literal(r#""hello \" world""#, 10));
        // multi-byte characters before the position
        assert!(is_inside_string_literal("\"héllo // x\"", 8));
    }
}
