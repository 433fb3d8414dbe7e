//! Refactor plan and delivery checklist.

use crate::analysis::ChecklistItem;

use super::{plural, Facts};

/// Checklist labels, in display order.
pub const CHECKLIST_LABELS: [&str; 5] = [
    "Tests added",
    "Docs updated",
    "Error handling reviewed",
    "Dependencies pinned",
    "Complexity within budget",
];

pub fn refactor_plan(facts: &Facts<'_>) -> Vec<String> {
    if facts.blank {
        return vec!["Paste code to build a refactor plan.".to_string()];
    }

    let metrics = facts.metrics();
    let mut steps = vec![if facts.has_tests() {
        "Run the existing tests and record a green baseline before changing anything.".to_string()
    } else {
        "Pin current behaviour with characterisation tests before changing anything.".to_string()
    }];

    if facts.is_dense() {
        steps.push(match facts.most_complex() {
            Some(worst) => format!(
                "Extract a helper from {} (complexity {}), starting with its deepest branch.",
                worst.name, worst.complexity
            ),
            None => "Extract the most complex branch into a named helper.".to_string(),
        });
    }

    if facts.dependency_count() > facts.thresholds.max_dependencies {
        steps.push(format!(
            "Introduce module boundaries: group the {} external dependencies behind adapters.",
            facts.dependency_count()
        ));
    }

    if facts.has_unguarded_async() {
        steps.push("Define an async error policy: wrap awaited calls and surface failures explicitly.".to_string());
    }

    if !facts.is_documented() {
        steps.push("Document the public callables using the scaffold from the Docs view.".to_string());
    }

    let many_callables = facts.functions.len() >= facts.thresholds.max_functions;
    if many_callables || metrics.lines_of_code > facts.thresholds.large_file_lines {
        steps.push(format!(
            "Split the file by responsibility; {} currently share one module.",
            plural(facts.functions.len(), "callable")
        ));
    }

    steps.push("Re-run the analysis and the tests to confirm the metrics improved without behaviour changes.".to_string());
    steps
}

pub fn checklist(facts: &Facts<'_>) -> Vec<ChecklistItem> {
    let checks = [
        facts.has_tests(),
        facts.is_documented(),
        facts.has_error_handling(),
        facts.metrics().external_dependencies.is_empty(),
        !facts.is_dense(),
    ];

    CHECKLIST_LABELS
        .iter()
        .zip(checks)
        .map(|(label, checked)| ChecklistItem {
            label: label.to_string(),
            checked,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fixtures::FactsFixture;
    use crate::languages::Language;

    #[test]
    fn test_plan_brackets_steps() {
        let fixture = FactsFixture::new(Language::TypeScript).lines(20).density(0.5);
        let plan = refactor_plan(&fixture.facts());
        assert_eq!(plan.len(), 2);
        assert!(plan[0].starts_with("Pin current behaviour"));
        assert!(plan[1].starts_with("Re-run the analysis"));
    }

    #[test]
    fn test_dense_code_extracts_helper() {
        let mut fixture = FactsFixture::new(Language::Go)
            .lines(60)
            .branches(15)
            .density(0.5)
            .function("Handle", "Handle(w, r)");
        fixture.functions[0].complexity = 16;
        let plan = refactor_plan(&fixture.facts());
        assert_eq!(
            plan[1],
            "Extract a helper from Handle (complexity 16), starting with its deepest branch."
        );
    }

    #[test]
    fn test_many_dependencies_step() {
        let mut fixture = FactsFixture::new(Language::Python).lines(20).density(0.5);
        for dep in ["a", "b", "c", "d", "e", "f"] {
            fixture.scan.metrics.external_dependencies.insert(dep.to_string());
        }
        let plan = refactor_plan(&fixture.facts());
        assert!(plan.contains(&"Introduce module boundaries: group the 6 external dependencies behind adapters.".to_string()));
    }

    #[test]
    fn test_checklist_gates() {
        let mut fixture = FactsFixture::new(Language::JavaScript).lines(10).density(0.3);
        fixture.scan.test_markers = 2;
        fixture.scan.metrics.external_dependencies.insert("lodash".to_string());

        let items = checklist(&fixture.facts());
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, CHECKLIST_LABELS.to_vec());

        let checked: Vec<bool> = items.iter().map(|i| i.checked).collect();
        assert_eq!(checked, vec![true, true, false, false, true]);
    }

    #[test]
    fn test_blank_plan() {
        let fixture = FactsFixture::blank(Language::Ruby);
        assert_eq!(refactor_plan(&fixture.facts()).len(), 1);
    }
}
