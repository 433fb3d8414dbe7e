//! Output formatting for analysis results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal panels, one per view
//! - JSON: structured output for programmatic consumption

use std::fmt::Write as _;

use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisResult, ChecklistItem, FunctionInfo, Metrics};
use crate::languages::Language;

/// Cyclomatic sketch above which the badge is rendered as a caution.
const CYCLOMATIC_CAUTION_ABOVE: usize = 12;
/// Cyclomatic sketch below which the badge is rendered as good.
const CYCLOMATIC_GOOD_BELOW: usize = 6;
/// Comment density above which the badge is rendered as good.
const COMMENTS_GOOD_ABOVE: f64 = 0.12;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Which panel(s) of the pretty report to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum View {
    /// Explain: summary, callables and metrics
    #[default]
    Summary,
    /// Improve: suggestions
    Suggestions,
    /// Test Plan: test ideas
    Tests,
    /// Docs: documentation scaffold
    Docstring,
    /// Refactor: plan and delivery checklist
    Refactor,
    /// Every panel
    All,
}

impl View {
    fn shows(self, panel: View) -> bool {
        self == View::All || self == panel
    }
}

/// One analyzed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// File path, `<stdin>` or `<sample>`.
    pub source: String,
    pub language_hint: Language,
    pub result: AnalysisResult,
}

impl ReportEntry {
    pub fn new(source: impl Into<String>, language_hint: Language, result: AnalysisResult) -> Self {
        Self {
            source: source.into(),
            language_hint,
            result,
        }
    }
}

// =============================================================================
// JSON Format
// =============================================================================

/// Versioned JSON report.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub entries: Vec<ReportEntry>,
}

/// Render entries as a pretty-printed JSON document.
pub fn render_json(entries: &[ReportEntry]) -> anyhow::Result<String> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        entries: entries.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write results in JSON format.
pub fn write_json(entries: &[ReportEntry]) -> anyhow::Result<()> {
    println!("{}", render_json(entries)?);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Render entries as colored terminal text.
pub fn render_pretty(entries: &[ReportEntry], view: View) -> String {
    let mut out = String::new();

    // Header
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {} v{}",
        "companion".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );

    for entry in entries {
        let _ = writeln!(out);
        render_entry(&mut out, entry, view);
    }

    out
}

/// Write results in pretty (human-readable) format.
pub fn write_pretty(entries: &[ReportEntry], view: View) {
    print!("{}", render_pretty(entries, view));
}

fn render_entry(out: &mut String, entry: &ReportEntry, view: View) {
    let result = &entry.result;

    let _ = writeln!(out, "  {}{}", "Source:   ".dimmed(), entry.source);
    let _ = write!(
        out,
        "  {}{}",
        "Language: ".dimmed(),
        result.detected_language.display_name()
    );
    if result.detected_language != entry.language_hint {
        let _ = write!(
            out,
            " {}",
            format!("(hint was {})", entry.language_hint.display_name()).yellow()
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out);

    write_hero_stats(out, result);
    let _ = writeln!(out);

    write_list(out, "Quick wins", &result.quick_wins);

    if view.shows(View::Summary) {
        heading(out, "Explain");
        let _ = writeln!(out, "    {}", result.summary);
        let _ = writeln!(out);
        if !result.functions.is_empty() {
            write_functions(out, &result.functions);
        }
        write_metrics(out, &result.metrics);
    }

    if view.shows(View::Suggestions) {
        write_list(out, "Improve", &result.suggestions);
    }

    if view.shows(View::Tests) {
        write_list(out, "Test Plan", &result.test_ideas);
    }

    if view.shows(View::Docstring) {
        heading(out, "Docs");
        for line in result.docstring.lines() {
            let _ = writeln!(out, "    {}", line.blue());
        }
        let _ = writeln!(
            out,
            "    {}",
            "Adapt this scaffold to capture intent, constraints and failure modes.".dimmed()
        );
        let _ = writeln!(out);
    }

    if view.shows(View::Refactor) {
        heading(out, "Refactor");
        for (i, step) in result.refactor_plan.iter().enumerate() {
            let _ = writeln!(out, "    {}. {}", i + 1, step);
        }
        let _ = writeln!(out);
        write_checklist(out, &result.checklist);
    }

    heading(out, "Resources");
    for resource in &result.resources {
        let _ = writeln!(
            out,
            "    {:<30} {}",
            resource.title.bold(),
            resource.link.blue().underline()
        );
        let _ = writeln!(out, "    {}", resource.description.dimmed());
    }
    let _ = writeln!(out);
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "  {}", title.bold());
}

fn write_hero_stats(out: &mut String, result: &AnalysisResult) {
    let _ = writeln!(
        out,
        "  {} lines analysed  {} suggested improvements  {} test ideas",
        result.metrics.lines_of_code.to_string().bold(),
        result.suggestions.len().to_string().bold(),
        result.test_ideas.len().to_string().bold()
    );
}

fn write_list(out: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(out, "  {} ({}):", title.bold(), items.len());
    for item in items {
        let _ = writeln!(out, "    • {}", item);
    }
    let _ = writeln!(out);
}

fn write_functions(out: &mut String, functions: &[FunctionInfo]) {
    let _ = writeln!(out, "  {} ({}):", "Callables".bold(), functions.len());
    for f in functions {
        let mut tags = vec![f.kind.to_string(), format!("complexity {}", f.complexity)];
        if f.is_async {
            tags.push("async".to_string());
        }
        let _ = writeln!(
            out,
            "    {}{}  {}",
            f.signature.cyan(),
            format!(":{}", f.line).dimmed(),
            format!("[{}]", tags.join(", ")).dimmed()
        );
        let _ = writeln!(out, "        {}", f.description);
    }
    let _ = writeln!(out);
}

/// Emphasis applied to a metric badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Good,
    Caution,
    Neutral,
}

pub fn cyclomatic_emphasis(cyclomatic: usize) -> Emphasis {
    if cyclomatic > CYCLOMATIC_CAUTION_ABOVE {
        Emphasis::Caution
    } else if cyclomatic < CYCLOMATIC_GOOD_BELOW {
        Emphasis::Good
    } else {
        Emphasis::Neutral
    }
}

pub fn comment_emphasis(density: f64) -> Emphasis {
    if density > COMMENTS_GOOD_ABOVE {
        Emphasis::Good
    } else {
        Emphasis::Neutral
    }
}

fn badge(label: &str, value: String, emphasis: Emphasis) -> String {
    let value = match emphasis {
        Emphasis::Good => value.green().bold(),
        Emphasis::Caution => value.yellow().bold(),
        Emphasis::Neutral => value.normal(),
    };
    format!("{} {}", label.dimmed(), value)
}

fn write_metrics(out: &mut String, metrics: &Metrics) {
    let badges = [
        badge("Lines", metrics.lines_of_code.to_string(), Emphasis::Neutral),
        badge("Branches", metrics.branches.to_string(), Emphasis::Neutral),
        badge("Async", metrics.async_operations.to_string(), Emphasis::Neutral),
        badge(
            "Cyclomatic",
            metrics.cyclomatic_sketch.to_string(),
            cyclomatic_emphasis(metrics.cyclomatic_sketch),
        ),
        badge(
            "Comments",
            format!("{:.0}%", metrics.comment_density * 100.0),
            comment_emphasis(metrics.comment_density),
        ),
        badge(
            "Dependencies",
            metrics.external_dependencies.len().to_string(),
            Emphasis::Neutral,
        ),
    ];
    let _ = writeln!(out, "  {}", "Metrics:".bold());
    let _ = writeln!(out, "    {}", badges.join("   "));

    if !metrics.external_dependencies.is_empty() {
        let modules: Vec<&str> = metrics.external_dependencies.iter().map(String::as_str).collect();
        let _ = writeln!(out, "    {} {}", "External modules:".dimmed(), modules.join(", "));
    }
    let _ = writeln!(out);
}

fn write_checklist(out: &mut String, items: &[ChecklistItem]) {
    let _ = writeln!(out, "  {}", "Delivery Checklist:".bold());
    for item in items {
        if item.checked {
            let _ = writeln!(out, "    {} {}", "[x]".green(), item.label);
        } else {
            let _ = writeln!(out, "    {} {}", "[ ]".dimmed(), item.label);
        }
    }
    let _ = writeln!(out);
}
