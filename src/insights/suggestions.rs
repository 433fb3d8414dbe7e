//! Suggestion and quick-win rules.
//!
//! Each rule is an independent `condition -> text` pair. Rules are evaluated in
//! table order; any number may fire for the same input.

use super::{plural, Facts};

struct Rule {
    id: &'static str,
    applies: fn(&Facts<'_>) -> bool,
    render: fn(&Facts<'_>) -> String,
    /// Short text surfaced as a quick win, for high-priority rules.
    quick: Option<fn(&Facts<'_>) -> String>,
}

const RULES: &[Rule] = &[
    Rule {
        id: "empty-input",
        applies: |f| f.blank,
        render: |_| {
            "No code to analyze yet. Paste a snippet to receive tailored suggestions.".to_string()
        },
        quick: Some(|_| "Paste a snippet to start the analysis.".to_string()),
    },
    Rule {
        id: "add-documentation",
        applies: |f| f.is_under_documented(),
        render: |f| {
            format!(
                "Add documentation: only {:.0}% of lines are comments. Describe intent, inputs and failure modes (aim for at least {:.0}%).",
                f.metrics().comment_density * 100.0,
                f.thresholds.min_comment_density * 100.0
            )
        },
        quick: Some(|f| match f.functions.first() {
            Some(first) => format!("Add a doc comment to {} using the Docs scaffold.", first.name),
            None => "Add a header comment explaining what this code is for.".to_string(),
        }),
    },
    Rule {
        id: "decompose",
        applies: |f| !f.blank && f.is_dense(),
        render: |f| {
            format!(
                "Consider decomposing: the cyclomatic sketch of {} exceeds the budget of {}. Extract helpers for the densest branches.",
                f.metrics().cyclomatic_sketch,
                f.thresholds.max_cyclomatic
            )
        },
        quick: Some(|f| match f.most_complex() {
            Some(worst) => format!(
                "Split {} (complexity {}) into smaller helpers.",
                worst.name, worst.complexity
            ),
            None => "Move the branching logic into small named functions.".to_string(),
        }),
    },
    Rule {
        id: "async-error-handling",
        applies: |f| f.has_unguarded_async(),
        render: |f| {
            format!(
                "Add error handling around the {}; failures are currently unhandled.",
                plural(f.metrics().async_operations, "async operation")
            )
        },
        quick: Some(|_| "Wrap async calls in error handling so failures surface.".to_string()),
    },
    Rule {
        id: "self-contained",
        applies: |f| !f.blank && f.metrics().external_dependencies.is_empty(),
        render: |_| {
            "Self-contained code with no external dependencies; consider adding unit tests that exercise it in isolation.".to_string()
        },
        quick: None,
    },
    Rule {
        id: "many-dependencies",
        applies: |f| f.dependency_count() > f.thresholds.max_dependencies,
        render: |f| {
            format!(
                "Relies on {}; consider consolidating them behind a thin adapter layer.",
                plural(f.dependency_count(), "external module")
            )
        },
        quick: None,
    },
    Rule {
        id: "work-markers",
        applies: |f| f.scan.work_markers > 0,
        render: |f| {
            format!(
                "Resolve the {} before shipping.",
                plural(f.scan.work_markers, "TODO/FIXME marker")
            )
        },
        quick: Some(|f| format!("Clear {}.", plural(f.scan.work_markers, "outstanding work marker"))),
    },
    Rule {
        id: "large-file",
        applies: |f| f.metrics().lines_of_code > f.thresholds.large_file_lines,
        render: |f| {
            format!(
                "At {} lines this file is large; split it into focused modules.",
                f.metrics().lines_of_code
            )
        },
        quick: None,
    },
    Rule {
        id: "no-callables",
        applies: |f| !f.blank && f.functions.is_empty(),
        render: |_| {
            "No named callables were found; wrap top-level logic in named functions so it can be tested and reused.".to_string()
        },
        quick: None,
    },
    Rule {
        id: "language-mismatch",
        applies: |f| f.language != f.hint,
        render: |f| {
            format!(
                "The code looks like {} rather than {}; switch the language picker for more accurate results.",
                f.language.display_name(),
                f.hint.display_name()
            )
        },
        quick: Some(|f| format!("Switch the language picker to {}.", f.language.display_name())),
    },
];

/// Note shown when no high-priority rule fires.
pub const NO_QUICK_WINS: &str = "No blocking issues spotted; polish tests and documentation next.";

/// All suggestions that apply, in rule order.
pub fn suggestions(facts: &Facts<'_>) -> Vec<String> {
    let fired: Vec<&Rule> = RULES.iter().filter(|rule| (rule.applies)(facts)).collect();
    tracing::debug!(
        rules = ?fired.iter().map(|rule| rule.id).collect::<Vec<_>>(),
        "suggestion rules fired"
    );
    fired.into_iter().map(|rule| (rule.render)(facts)).collect()
}

/// High-priority subset, capped by `max_quick_wins`.
pub fn quick_wins(facts: &Facts<'_>) -> Vec<String> {
    let wins: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(facts))
        .filter_map(|rule| rule.quick.map(|render| render(facts)))
        .take(facts.thresholds.max_quick_wins)
        .collect();

    if wins.is_empty() {
        vec![NO_QUICK_WINS.to_string()]
    } else {
        wins
    }
}
