//! End-to-end scenarios for the analysis engine.

use companion::{analyze, Analyzer, Language};

const SINGLE_FUNCTION: &str = r#"// Doubles positive values.
export function double(value: number): number {
  if (value > 0) {
    return value * 2;
  }
  return value;
}
"#;

fn has_prefix(items: &[String], prefix: &str) -> bool {
    items.iter().any(|s| s.starts_with(prefix))
}

#[test]
fn test_empty_input() {
    let result = analyze("", Language::TypeScript);

    assert_eq!(result.metrics.lines_of_code, 0);
    assert_eq!(result.metrics.cyclomatic_sketch, 1);
    assert_eq!(result.metrics.comment_density, 0.0);
    assert!(result.functions.is_empty());
    assert!(result.metrics.external_dependencies.is_empty());
    assert_eq!(result.detected_language, Language::TypeScript);
    assert!(!result.summary.is_empty());
    assert!(!result.quick_wins.is_empty());
}

#[test]
fn test_single_line_without_newline_counts_as_one() {
    let result = analyze("x = 1", Language::Python);
    assert_eq!(result.metrics.lines_of_code, 1);
}

#[test]
fn test_single_typescript_function() {
    let result = analyze(SINGLE_FUNCTION, Language::TypeScript);

    assert_eq!(result.detected_language, Language::TypeScript);
    assert_eq!(result.functions.len(), 1);
    assert_eq!(result.functions[0].name, "double");
    assert_eq!(result.functions[0].line, 2);
    assert_eq!(result.functions[0].signature, "double(value: number): number");
    assert_eq!(result.metrics.branches, 1);
    assert_eq!(result.metrics.cyclomatic_sketch, 2);
    assert!(!result.test_ideas.is_empty());
    assert!(result.test_ideas.iter().any(|idea| idea.contains("double")));
}

#[test]
fn test_two_dependencies_in_either_order() {
    let forward = "import express from \"express\";\nimport { z } from \"zod\";\n";
    let reversed = "import { z } from \"zod\";\nimport express from \"express\";\n";

    let a = analyze(forward, Language::TypeScript);
    let b = analyze(reversed, Language::TypeScript);
    assert_eq!(a.metrics.external_dependencies.len(), 2);
    assert_eq!(a.metrics.external_dependencies, b.metrics.external_dependencies);
}

#[test]
fn test_repeated_import_counts_once() {
    let code = "import requests\nimport requests\nfrom requests import get\n";
    let result = analyze(code, Language::Python);
    assert_eq!(result.metrics.external_dependencies.len(), 1);
}

#[test]
fn test_standard_library_is_not_external() {
    let code = "import os\nimport sys\nfrom pathlib import Path\nimport numpy as np\n";
    let result = analyze(code, Language::Python);
    let deps: Vec<&str> = result
        .metrics
        .external_dependencies
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(deps, vec!["numpy"]);
}

#[test]
fn test_multiline_string_does_not_hide_code() {
    let code = r#"import os
QUERY = """
SELECT 1
"""
import requests

def run():
    if os.environ.get("DEBUG"):
        return requests.get(QUERY)
    return None
"#;
    let result = analyze(code, Language::Python);

    assert_eq!(result.metrics.lines_of_code, 10);
    assert_eq!(result.metrics.comment_density, 0.0);
    assert!(result.metrics.external_dependencies.contains("requests"));
    assert_eq!(result.functions[0].name, "run");
    assert!(has_prefix(&result.suggestions, "Add documentation"));
}

#[test]
fn test_python_overrides_go_hint() {
    let code = r#"import os

def list_files(path):
    """Return the files under path."""
    result = []
    for name in os.listdir(path):
        if name.endswith(".py"):
            result.append(name)
    return result
"#;
    let result = analyze(code, Language::Go);

    assert_eq!(result.detected_language, Language::Python);
    assert_eq!(result.functions[0].name, "list_files");
    assert!(has_prefix(&result.quick_wins, "Switch the language picker to Python"));
}

#[test]
fn test_ambiguous_text_keeps_hint() {
    for language in Language::ALL {
        let result = analyze("hello world\n", language);
        assert_eq!(result.detected_language, language);
    }
}

#[test]
fn test_dense_undocumented_code_gets_both_suggestions() {
    let mut code = String::from("function route(x) {\n");
    for i in 0..10 {
        code.push_str(&format!("  if (x === {}) {{ return {}; }}\n", i, i));
    }
    code.push_str("  return -1;\n}\n");

    let result = analyze(&code, Language::JavaScript);
    assert_eq!(result.metrics.branches, 10);
    assert_eq!(result.metrics.comment_density, 0.0);
    assert!(has_prefix(&result.suggestions, "Add documentation"));
    assert!(has_prefix(&result.suggestions, "Consider decomposing"));
}

#[test]
fn test_commented_flat_code_gets_neither_suggestion() {
    let code = r#"// Shared configuration constants.
// Values mirror the production defaults.
// Keep them in sync with the server.
export const RETRY_LIMIT = 3;
"#;
    let result = analyze(code, Language::TypeScript);
    assert_eq!(result.metrics.branches, 0);
    assert!(!has_prefix(&result.suggestions, "Add documentation"));
    assert!(!has_prefix(&result.suggestions, "Consider decomposing"));
}

#[test]
fn test_repeated_analysis_is_identical() {
    let analyzer = Analyzer::new();
    let first = analyzer.analyze(SINGLE_FUNCTION, Language::TypeScript);
    for _ in 0..5 {
        assert_eq!(analyzer.analyze(SINGLE_FUNCTION, Language::TypeScript), first);
    }
}

#[test]
fn test_functions_follow_declaration_order() {
    let code = "def zeta():\n    pass\n\ndef alpha():\n    pass\n\ndef mid():\n    pass\n";
    let result = analyze(code, Language::Python);

    let names: Vec<&str> = result.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    let lines: Vec<usize> = result.functions.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![1, 4, 7]);
}

#[test]
fn test_garbage_input_degrades_gracefully() {
    let code = "\u{0}\u{1}\u{fffd}{{{((( )))]]] \"unterminated\n/* open comment";
    for language in Language::ALL {
        let result = analyze(code, language);
        assert!(result.metrics.cyclomatic_sketch >= 1);
        assert!((0.0..=1.0).contains(&result.metrics.comment_density));
        assert!(!result.summary.is_empty());
        assert!(!result.docstring.is_empty());
    }
}

#[test]
fn test_parallel_analysis_matches_sequential() {
    use rayon::prelude::*;

    let inputs: Vec<(String, Language)> = Language::ALL
        .iter()
        .map(|&language| (SINGLE_FUNCTION.to_string(), language))
        .collect();
    let sequential: Vec<_> = inputs.iter().map(|(code, l)| analyze(code, *l)).collect();
    let parallel: Vec<_> = inputs.par_iter().map(|(code, l)| analyze(code, *l)).collect();
    assert_eq!(sequential, parallel);
}
