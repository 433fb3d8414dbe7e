//! Companion - heuristic code-snippet analysis.
//!
//! Companion turns a pasted snippet into a structured report: detected
//! language, metrics, callable signatures, suggestions, test ideas, a
//! documentation scaffold, a refactor plan and curated resources. It never
//! parses or executes code; every stage is a pattern-table scan.
//!
//! # Architecture
//!
//! - `languages`: Per-language pattern tables (signals, comments, branches, declarations)
//! - `analysis`: Resolver, lexical metrics and structural extraction
//! - `insights`: Deterministic templating of the qualitative fields
//! - `config`: YAML configuration schema and discovery
//! - `report`: Output formatting (pretty, JSON)
//! - `cli`: Command-line surface
//!
//! # Example
//!
//! ```
//! use companion::{analyze, Language};
//!
//! let result = analyze("def greet(name):\n    return name\n", Language::Python);
//! assert_eq!(result.functions[0].name, "greet");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod insights;
pub mod languages;
pub mod logging;
pub mod report;
pub mod sample;

pub use analysis::{
    analyze, extract_functions, extract_metrics, resolve, AnalysisInput, AnalysisResult, Analyzer,
    FunctionInfo, Metrics, Thresholds,
};
pub use config::{Config, ConfigError};
pub use insights::{synthesize, Facts};
pub use languages::{CallableKind, Language};
