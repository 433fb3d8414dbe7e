//! Plain-language summary.

use super::{plural, preview, Facts};

/// Cyclomatic sketch below which control flow reads as straightforward.
const STRAIGHTFORWARD_BELOW: usize = 6;

pub fn summary(facts: &Facts<'_>) -> String {
    let language = facts.language.display_name();

    if facts.blank {
        return format!(
            "No code to analyze yet. Paste a {} snippet to see its summary, metrics and suggestions.",
            language
        );
    }

    let metrics = facts.metrics();
    let mut sentences = Vec::new();

    let mut opening = format!(
        "A {}-line {} module defining {}",
        metrics.lines_of_code,
        language,
        plural(facts.functions.len(), "callable")
    );
    if !facts.functions.is_empty() {
        opening.push_str(": ");
        opening.push_str(&preview(facts.functions.iter().map(|f| f.name.as_str()), 3));
    }
    opening.push('.');
    sentences.push(opening);

    if facts.language != facts.hint {
        sentences.push(format!(
            "Detected as {} rather than the selected {}.",
            language,
            facts.hint.display_name()
        ));
    }

    if facts.functions.is_empty() {
        sentences.push("No clear structure detected; the code reads as top-level statements.".to_string());
    }

    let deps = &metrics.external_dependencies;
    if deps.is_empty() {
        sentences.push("It has no external dependencies.".to_string());
    } else {
        sentences.push(format!(
            "It imports {} ({}).",
            plural(deps.len(), "external module"),
            preview(deps.iter().map(String::as_str), 4)
        ));
    }

    if metrics.async_operations > 0 {
        sentences.push(format!(
            "It performs {}.",
            plural(metrics.async_operations, "async operation")
        ));
    }

    let cyclomatic = metrics.cyclomatic_sketch;
    let flow = if cyclomatic < STRAIGHTFORWARD_BELOW {
        format!("Control flow is straightforward (cyclomatic sketch {}).", cyclomatic)
    } else if facts.is_dense() {
        format!(
            "Control flow is dense (cyclomatic sketch {}) and would benefit from decomposition.",
            cyclomatic
        )
    } else {
        format!("Control flow is moderately branched (cyclomatic sketch {}).", cyclomatic)
    };
    sentences.push(flow);

    let percent = metrics.comment_density * 100.0;
    if facts.is_documented() {
        sentences.push(format!("Comments are plentiful ({:.0}% of lines).", percent));
    } else {
        sentences.push(format!("Comments are sparse ({:.0}% of lines).", percent));
    }

    sentences.join(" ")
}
