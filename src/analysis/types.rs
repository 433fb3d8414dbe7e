//! Result types produced by the analysis engine.
//!
//! Field names serialize in camelCase so the JSON report matches the shape the
//! presentation layer consumes (`detectedLanguage`, `linesOfCode`, ...).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::languages::{CallableKind, Language};

/// Quantitative facts from the lexical scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub lines_of_code: usize,
    pub branches: usize,
    pub async_operations: usize,
    /// `1 + branches`; never below 1.
    pub cyclomatic_sketch: usize,
    /// Comment lines over total lines, clamped to `[0, 1]`.
    pub comment_density: f64,
    /// Sorted, deduplicated module identifiers.
    pub external_dependencies: BTreeSet<String>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            lines_of_code: 0,
            branches: 0,
            async_operations: 0,
            cyclomatic_sketch: 1,
            comment_density: 0.0,
            external_dependencies: BTreeSet::new(),
        }
    }
}

/// A callable declaration found in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInfo {
    pub name: String,
    pub signature: String,
    pub description: String,
    /// Declaration line (1-indexed).
    pub line: usize,
    pub kind: CallableKind,
    pub is_async: bool,
    /// 1 + branches counted between this declaration and the next one.
    pub complexity: usize,
}

/// A delivery gate shown alongside the refactor plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub checked: bool,
}

/// A curated link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Everything the engine derives from one snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub detected_language: Language,
    pub summary: String,
    pub functions: Vec<FunctionInfo>,
    pub metrics: Metrics,
    pub suggestions: Vec<String>,
    pub test_ideas: Vec<String>,
    pub quick_wins: Vec<String>,
    pub docstring: String,
    pub refactor_plan: Vec<String>,
    pub checklist: Vec<ChecklistItem>,
    pub resources: Vec<Resource>,
}

impl AnalysisResult {
    /// Whether every delivery gate is already satisfied.
    pub fn all_gates_checked(&self) -> bool {
        self.checklist.iter().all(|item| item.checked)
    }
}
