//! Test ideas derived from extracted callables and metrics.

use crate::languages::Language;

use super::{preview, Facts};

/// Callables with complexity above this get a branch-coverage idea.
const BRANCH_COVERAGE_ABOVE: usize = 3;

fn framework(language: Language) -> &'static str {
    match language {
        Language::TypeScript => "Vitest",
        Language::JavaScript => "Jest",
        Language::Python => "pytest",
        Language::Go => "testing package",
        Language::Ruby => "RSpec",
    }
}

pub fn test_ideas(facts: &Facts<'_>) -> Vec<String> {
    let mut ideas = Vec::new();

    for function in facts.functions {
        ideas.push(format!("Verify {} handles empty and invalid input.", function.name));
        if function.is_async {
            ideas.push(format!(
                "Verify {} behaves correctly when an awaited operation fails or times out.",
                function.name
            ));
        }
        if function.complexity > BRANCH_COVERAGE_ABOVE {
            ideas.push(format!(
                "Cover each of the {} branches in {} with a dedicated case.",
                function.complexity - 1,
                function.name
            ));
        }
    }

    if facts.functions.is_empty() {
        ideas.push("Exercise boundary values (empty, zero, maximum sizes) at the snippet's entry point.".to_string());
        ideas.push("Drive the error paths and assert on the reported failure.".to_string());
    }

    if facts.blank {
        return ideas;
    }

    let metrics = facts.metrics();
    if metrics.async_operations > 0 {
        ideas.push("Simulate slow and failing async operations to check ordering and timeouts.".to_string());
    }
    if !metrics.external_dependencies.is_empty() {
        ideas.push(format!(
            "Stub external modules ({}) to keep tests hermetic.",
            preview(metrics.external_dependencies.iter().map(String::as_str), 3)
        ));
    }
    if !facts.has_tests() {
        ideas.push(format!(
            "Start a {} suite alongside this code.",
            framework(facts.language)
        ));
    }

    ideas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fixtures::FactsFixture;

    #[test]
    fn test_ideas_reference_function_names() {
        let mut fixture = FactsFixture::new(Language::TypeScript)
            .lines(10)
            .function("loadUser", "loadUser(id)");
        fixture.functions[0].is_async = true;
        fixture.functions[0].complexity = 5;

        let ideas = test_ideas(&fixture.facts());
        assert_eq!(ideas[0], "Verify loadUser handles empty and invalid input.");
        assert!(ideas[1].contains("awaited operation fails"));
        assert_eq!(ideas[2], "Cover each of the 4 branches in loadUser with a dedicated case.");
        assert_eq!(ideas.last().map(String::as_str), Some("Start a Vitest suite alongside this code."));
    }

    #[test]
    fn test_generic_ideas_without_callables() {
        let fixture = FactsFixture::new(Language::Python).lines(4);
        let ideas = test_ideas(&fixture.facts());
        assert!(ideas[0].starts_with("Exercise boundary values"));
        assert!(ideas[1].starts_with("Drive the error paths"));
        assert!(ideas.iter().any(|i| i.contains("pytest")));
    }

    #[test]
    fn test_dependency_stub_idea() {
        let mut fixture = FactsFixture::new(Language::Go).lines(4).function("Run", "Run()");
        fixture.scan.test_markers = 1;
        fixture.scan.metrics.external_dependencies.insert("github.com/spf13/cobra".to_string());
        let ideas = test_ideas(&fixture.facts());
        assert_eq!(
            ideas.last().map(String::as_str),
            Some("Stub external modules (github.com/spf13/cobra) to keep tests hermetic.")
        );
    }

    #[test]
    fn test_blank_input_gets_generic_ideas_only() {
        let fixture = FactsFixture::blank(Language::Ruby);
        assert_eq!(test_ideas(&fixture.facts()).len(), 2);
    }
}
