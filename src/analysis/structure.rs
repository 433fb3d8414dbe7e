//! Structural extraction of callable declarations.
//!
//! Declaration patterns run over the whole normalized text so that parameter
//! lists spanning several lines still match. Only top-level callables and
//! members of classes, modules or object literals are kept. A declaration
//! whose enclosing line opens another callable is nested and skipped.

use std::collections::BTreeMap;

use crate::languages::{profile, CallableKind, Language, LanguageProfile};

use super::metrics::{normalize_line_endings, CommentTracker, LineKind};
use super::naming::describe;
use super::types::FunctionInfo;

/// Default number of callables reported per snippet.
pub const DEFAULT_MAX_FUNCTIONS: usize = 25;

const TAB_WIDTH: usize = 4;

/// Extract callable declarations in source order, capped at the default limit.
pub fn extract_functions(code: &str, language: Language) -> Vec<FunctionInfo> {
    extract_functions_with(code, language, DEFAULT_MAX_FUNCTIONS)
}

/// Extract callable declarations in source order, keeping at most `max`.
pub fn extract_functions_with(code: &str, language: Language, max: usize) -> Vec<FunctionInfo> {
    let text = normalize_line_endings(code);
    let profile = profile(language);
    let line_starts = line_starts(&text);
    let outline = outline(&text, profile);

    // Keyed by line: the first pattern that claims a line wins.
    let mut by_line: BTreeMap<usize, Candidate> = BTreeMap::new();

    for decl in &profile.declarations {
        for caps in decl.regex.captures_iter(&text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.name("name")) else {
                continue;
            };

            let indent = caps.name("indent").map_or("", |m| m.as_str());
            let raw_name = name.as_str();
            if profile.is_reserved(raw_name) {
                continue;
            }

            let line = line_of(&line_starts, name.start());
            if by_line.contains_key(&line) {
                continue;
            }
            if is_nested(&outline, line, profile) {
                tracing::trace!(name = raw_name, line, "skipping nested declaration");
                continue;
            }

            by_line.insert(
                line,
                Candidate {
                    start: whole.start(),
                    header: whole.as_str().to_string(),
                    indent: indent.to_string(),
                    raw_name: raw_name.to_string(),
                    params: caps.name("params").map(|m| m.as_str().to_string()),
                    ret: caps.name("ret").map(|m| m.as_str().to_string()),
                    recv: caps.name("recv").map(|m| m.as_str().to_string()),
                    kind: decl.kind,
                    line,
                },
            );
        }
    }

    let candidates: Vec<Candidate> = by_line.into_values().collect();
    let total = candidates.len();

    let functions: Vec<FunctionInfo> = candidates
        .iter()
        .enumerate()
        .take(max)
        .map(|(i, candidate)| {
            // A multi-line receiver or parameter list can start before the previous name.
            let end = candidates
                .get(i + 1)
                .map_or(text.len(), |next| next.start)
                .max(candidate.start);
            let region = &text[candidate.start..end];
            candidate.build(profile, region)
        })
        .collect();

    if total > max {
        tracing::debug!(total, max, "callable list truncated");
    }
    tracing::debug!(language = %language, count = functions.len(), "extracted callables");

    functions
}

/// A raw declaration match awaiting conversion.
struct Candidate {
    start: usize,
    header: String,
    indent: String,
    raw_name: String,
    params: Option<String>,
    ret: Option<String>,
    recv: Option<String>,
    kind: CallableKind,
    line: usize,
}

impl Candidate {
    fn build(&self, profile: &LanguageProfile, region: &str) -> FunctionInfo {
        let language = profile.language;
        let name = self
            .raw_name
            .strip_prefix("self.")
            .unwrap_or(&self.raw_name)
            .to_string();
        let params = collapse_params(self.params.as_deref().unwrap_or(""));
        let kind = self.resolve_kind(language, &params);

        let mut signature = String::new();
        if let Some(recv) = self.recv.as_deref() {
            signature.push_str(&format!("({}) ", collapse_whitespace(recv)));
        }
        signature.push_str(&format!("{}({})", name, params));
        if let Some(ret) = self.ret.as_deref().map(clean_return).filter(|r| !r.is_empty()) {
            signature.push_str(profile.return_separator);
            signature.push_str(&ret);
        }

        let branches = profile.branches.find_iter(region).count();
        let is_async = self.header.split(|c: char| !c.is_alphanumeric() && c != '_').any(|w| w == "async")
            || profile.async_ops.is_match(region);

        FunctionInfo {
            description: describe(&name, kind, language),
            name,
            signature,
            line: self.line,
            kind,
            is_async,
            complexity: 1 + branches,
        }
    }

    fn resolve_kind(&self, language: Language, params: &str) -> CallableKind {
        match language {
            Language::Python if self.kind == CallableKind::Function => {
                let first = params.split(',').next().unwrap_or("").trim();
                if !self.indent.is_empty() && (first == "self" || first == "cls") {
                    CallableKind::Method
                } else {
                    CallableKind::Function
                }
            }
            Language::Go if self.kind == CallableKind::Function => {
                if self.recv.is_some() {
                    CallableKind::Method
                } else {
                    CallableKind::Function
                }
            }
            Language::Ruby if self.kind == CallableKind::Method => {
                if self.indent.is_empty() && !self.raw_name.starts_with("self.") {
                    CallableKind::Function
                } else {
                    CallableKind::Method
                }
            }
            _ => self.kind,
        }
    }
}

/// Extract parameter names from a signature produced by this module.
///
/// Used for documentation scaffolds. Receivers, `self`/`cls` and type
/// annotations are dropped; destructured parameters are reported as `options`.
pub fn parameter_names(signature: &str, name: &str, language: Language) -> Vec<String> {
    let open = format!("{}(", name);
    let Some(start) = signature.find(&open).map(|i| i + open.len()) else {
        return Vec::new();
    };

    let mut depth = 0usize;
    let mut end = signature.len();
    for (i, c) in signature[start..].char_indices() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' if depth == 0 => {
                end = start + i;
                break;
            }
            ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    split_top_level(&signature[start..end])
        .into_iter()
        .filter_map(|param| parameter_name(param, language))
        .collect()
}

fn parameter_name(param: &str, language: Language) -> Option<String> {
    let param = param.trim();
    if param.is_empty() {
        return None;
    }
    if param.starts_with('{') || param.starts_with('[') {
        return Some("options".to_string());
    }

    let name = match language {
        Language::TypeScript | Language::JavaScript => param
            .trim_start_matches("...")
            .split(|c| c == ':' || c == '=' || c == '?')
            .next()
            .unwrap_or("")
            .split_whitespace()
            .last()
            .unwrap_or(""),
        Language::Python => param
            .trim_start_matches('*')
            .split(|c| c == ':' || c == '=')
            .next()
            .unwrap_or(""),
        Language::Go => param.split_whitespace().next().unwrap_or(""),
        Language::Ruby => param
            .trim_start_matches(|c| c == '*' || c == '&')
            .split(|c| c == ':' || c == '=')
            .next()
            .unwrap_or(""),
    }
    .trim();

    match name {
        "" | "self" | "cls" | "/" => None,
        _ => Some(name.to_string()),
    }
}

/// Split on commas that are not nested in brackets.
fn split_top_level(params: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut last = 0;
    for (i, c) in params.char_indices() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&params[last..i]);
                last = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&params[last..]);
    parts
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collapse_params(params: &str) -> String {
    let collapsed = collapse_whitespace(params);
    collapsed.trim_end_matches(',').trim().to_string()
}

fn clean_return(ret: &str) -> String {
    collapse_whitespace(ret.trim().trim_end_matches(';'))
}

/// One source line as seen by the nesting check.
struct OutlineLine<'t> {
    text: &'t str,
    indent: usize,
    /// Blank, comment or string body: never an enclosing line.
    ignorable: bool,
}

fn outline<'t>(text: &'t str, profile: &LanguageProfile) -> Vec<OutlineLine<'t>> {
    let mut tracker = CommentTracker::new(&profile.comments);
    text.split('\n')
        .map(|line| {
            let kind = tracker.classify(line);
            let trimmed = line.trim_start();
            OutlineLine {
                text: line,
                indent: indent_columns(&line[..line.len() - trimmed.len()]),
                ignorable: trimmed.is_empty()
                    || matches!(kind, LineKind::Comment | LineKind::StringBody),
            }
        })
        .collect()
}

/// Whether the declaration on 1-indexed `line` sits inside another callable.
///
/// Walks outward through successively less-indented lines. Every enclosing
/// line must open a container body for the declaration to count as a member.
fn is_nested(outline: &[OutlineLine<'_>], line: usize, profile: &LanguageProfile) -> bool {
    let Some(index) = line.checked_sub(1) else {
        return false;
    };
    let Some(current) = outline.get(index) else {
        return false;
    };

    let mut level = current.indent;
    for enclosing in outline[..index].iter().rev() {
        if level == 0 {
            break;
        }
        if enclosing.ignorable || enclosing.indent >= level {
            continue;
        }
        if !profile.containers.is_match(enclosing.text) {
            return true;
        }
        level = enclosing.indent;
    }
    false
}

fn indent_columns(indent: &str) -> usize {
    indent
        .chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

fn line_starts(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

/// 1-indexed line containing byte offset `pos`.
fn line_of(line_starts: &[usize], pos: usize) -> usize {
    line_starts.partition_point(|&start| start <= pos)
}
