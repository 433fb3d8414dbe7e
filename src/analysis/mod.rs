//! Heuristic snippet analysis.
//!
//! This module turns raw source text into an [`AnalysisResult`] without
//! parsing it. Every stage works from per-language pattern tables:
//! - Language resolution (weighted textual signals, hint as tie-breaker)
//! - Lexical metrics (lines, branches, async operations, comments, imports)
//! - Structural extraction (callable declarations and their signatures)
//! - Insight synthesis (templated summaries, suggestions and plans)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ code + hint  │────▶│ Resolver     │────▶│ Language      │
//! └──────────────┘     └──────────────┘     └───────────────┘
//!                                                   │
//!                      ┌──────────────┐             ▼
//!                      │ LexicalScan  │◀────┬───────────────┐
//!                      └──────────────┘     │ Extractors    │
//!                      ┌──────────────┐     │ (metrics,     │
//!                      │ FunctionInfo │◀────│  structure)   │
//!                      └──────────────┘     └───────────────┘
//!                              │
//!                              ▼
//!                      ┌──────────────┐     ┌───────────────┐
//!                      │ Synthesizer  │────▶│AnalysisResult │
//!                      └──────────────┘     └───────────────┘
//! ```
//!
//! The engine is stateless: compiled pattern tables are immutable statics, so
//! [`Analyzer::analyze`] may be called from any number of threads at once.

mod imports;
mod metrics;
mod naming;
mod resolver;
mod stdlib;
mod structure;
mod thresholds;
mod types;

use serde::{Deserialize, Serialize};

use crate::insights::{synthesize, Facts};
use crate::languages::Language;

pub use imports::extract_dependencies;
pub use metrics::{extract_metrics, normalize_line_endings, scan, LexicalScan};
pub use naming::{describe, split_words};
pub use resolver::{resolve, resolve_with, Resolution, DEFAULT_MIN_CONFIDENCE};
pub use structure::{extract_functions, extract_functions_with, parameter_names, DEFAULT_MAX_FUNCTIONS};
pub use thresholds::Thresholds;
pub use types::{AnalysisResult, ChecklistItem, FunctionInfo, Metrics, Resource};

/// A snippet and the language the caller believes it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub code: String,
    pub language_hint: Language,
}

impl AnalysisInput {
    pub fn new(code: impl Into<String>, language_hint: Language) -> Self {
        Self {
            code: code.into(),
            language_hint,
        }
    }

    /// Analyze with default thresholds.
    pub fn analyze(&self) -> AnalysisResult {
        analyze(&self.code, self.language_hint)
    }
}

/// Runs the full pipeline with a fixed threshold set.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    thresholds: Thresholds,
}

impl Analyzer {
    /// Create an analyzer with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the threshold set.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Analyze one snippet. Never fails; degenerate input yields defaults.
    pub fn analyze(&self, code: &str, hint: Language) -> AnalysisResult {
        let resolution = resolve_with(code, hint, self.thresholds.min_confidence);
        let language = resolution.language;

        let scan = scan(code, language);
        let functions = extract_functions_with(code, language, self.thresholds.max_functions);

        let facts = Facts {
            language,
            hint,
            blank: code.trim().is_empty(),
            scan: &scan,
            functions: &functions,
            thresholds: &self.thresholds,
        };

        let result = synthesize(&facts);
        tracing::debug!(
            language = %language,
            score = resolution.score_of(language),
            overridden = resolution.overrides_hint(),
            functions = result.functions.len(),
            suggestions = result.suggestions.len(),
            "analysis complete"
        );
        result
    }

    /// Analyze a prepared input.
    pub fn analyze_input(&self, input: &AnalysisInput) -> AnalysisResult {
        self.analyze(&input.code, input.language_hint)
    }
}

/// Analyze `code` with default thresholds.
pub fn analyze(code: &str, hint: Language) -> AnalysisResult {
    Analyzer::new().analyze(code, hint)
}
