//! Insight synthesis.
//!
//! Every qualitative field of an [`AnalysisResult`] is a pure function of the
//! facts gathered by the extractors. Rules are evaluated independently and
//! concatenated in a fixed order, so identical inputs yield identical text.

mod docstring;
mod refactor;
mod resources;
mod suggestions;
mod summary;
mod test_ideas;

use crate::analysis::{AnalysisResult, FunctionInfo, LexicalScan, Metrics, Thresholds};
use crate::languages::Language;

pub use docstring::docstring;
pub use refactor::{checklist, refactor_plan, CHECKLIST_LABELS};
pub use resources::resources;
pub use suggestions::{quick_wins, suggestions};
pub use summary::summary;
pub use test_ideas::test_ideas;

/// Everything the synthesizer may consult.
#[derive(Debug, Clone, Copy)]
pub struct Facts<'a> {
    /// Resolved language.
    pub language: Language,
    /// Language the caller asked for.
    pub hint: Language,
    /// Input contained nothing but whitespace.
    pub blank: bool,
    pub scan: &'a LexicalScan,
    pub functions: &'a [FunctionInfo],
    pub thresholds: &'a Thresholds,
}

impl<'a> Facts<'a> {
    pub fn metrics(&self) -> &'a Metrics {
        &self.scan.metrics
    }

    pub fn dependency_count(&self) -> usize {
        self.scan.metrics.external_dependencies.len()
    }

    pub fn has_error_handling(&self) -> bool {
        self.scan.error_handling_sites > 0
    }

    pub fn has_tests(&self) -> bool {
        self.scan.test_markers > 0
    }

    /// Comment density strictly above the documentation threshold.
    pub fn is_documented(&self) -> bool {
        self.scan.metrics.comment_density > self.thresholds.min_comment_density
    }

    pub fn is_under_documented(&self) -> bool {
        !self.blank && self.scan.metrics.comment_density < self.thresholds.min_comment_density
    }

    /// Cyclomatic sketch above budget.
    pub fn is_dense(&self) -> bool {
        self.scan.metrics.cyclomatic_sketch > self.thresholds.max_cyclomatic
    }

    pub fn has_unguarded_async(&self) -> bool {
        self.scan.metrics.async_operations > 0 && !self.has_error_handling()
    }

    /// Callable with the highest complexity; the earliest wins ties.
    pub fn most_complex(&self) -> Option<&'a FunctionInfo> {
        self.functions
            .iter()
            .fold(None, |best: Option<&FunctionInfo>, f| match best {
                Some(b) if b.complexity >= f.complexity => Some(b),
                _ => Some(f),
            })
    }
}

/// Assemble the full result from the gathered facts.
pub fn synthesize(facts: &Facts<'_>) -> AnalysisResult {
    AnalysisResult {
        detected_language: facts.language,
        summary: summary(facts),
        functions: facts.functions.to_vec(),
        metrics: facts.metrics().clone(),
        suggestions: suggestions(facts),
        test_ideas: test_ideas(facts),
        quick_wins: quick_wins(facts),
        docstring: docstring(facts),
        refactor_plan: refactor_plan(facts),
        checklist: checklist(facts),
        resources: resources(facts.language),
    }
}

/// `"1 callable"`, `"3 callables"`.
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Comma-separated preview of at most `limit` items, with an overflow note.
pub(crate) fn preview<'s>(items: impl IntoIterator<Item = &'s str>, limit: usize) -> String {
    let items: Vec<&str> = items.into_iter().collect();
    let shown = items[..items.len().min(limit)].join(", ");
    if items.len() > limit {
        format!("{} and {} more", shown, items.len() - limit)
    } else {
        shown
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Owned backing storage for a [`Facts`] view in tests.
    pub struct FactsFixture {
        pub language: Language,
        pub hint: Language,
        pub blank: bool,
        pub scan: LexicalScan,
        pub functions: Vec<FunctionInfo>,
        pub thresholds: Thresholds,
    }

    impl FactsFixture {
        pub fn new(language: Language) -> Self {
            Self {
                language,
                hint: language,
                blank: false,
                scan: LexicalScan::default(),
                functions: Vec::new(),
                thresholds: Thresholds::default(),
            }
        }

        pub fn blank(language: Language) -> Self {
            Self {
                blank: true,
                ..Self::new(language)
            }
        }

        pub fn lines(mut self, lines: usize) -> Self {
            self.scan.metrics.lines_of_code = lines;
            self
        }

        pub fn branches(mut self, branches: usize) -> Self {
            self.scan.metrics.branches = branches;
            self.scan.metrics.cyclomatic_sketch = 1 + branches;
            self
        }

        pub fn density(mut self, density: f64) -> Self {
            self.scan.metrics.comment_density = density;
            self
        }

        pub fn function(mut self, name: &str, signature: &str) -> Self {
            self.functions.push(FunctionInfo {
                name: name.to_string(),
                signature: signature.to_string(),
                description: String::new(),
                line: self.functions.len() + 1,
                kind: crate::languages::CallableKind::Function,
                is_async: false,
                complexity: 1,
            });
            self
        }

        pub fn facts(&self) -> Facts<'_> {
            Facts {
                language: self.language,
                hint: self.hint,
                blank: self.blank,
                scan: &self.scan,
                functions: &self.functions,
                thresholds: &self.thresholds,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::FactsFixture;
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "callable"), "1 callable");
        assert_eq!(plural(0, "callable"), "0 callables");
        assert_eq!(plural(2, "line"), "2 lines");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview(["a", "b"], 3), "a, b");
        assert_eq!(preview(["a", "b", "c", "d"], 2), "a, b and 2 more");
    }

    #[test]
    fn test_most_complex_prefers_earliest_on_tie() {
        let mut fixture = FactsFixture::new(Language::Go)
            .function("first", "first()")
            .function("second", "second()")
            .function("third", "third()");
        fixture.functions[1].complexity = 4;
        fixture.functions[2].complexity = 4;
        assert_eq!(fixture.facts().most_complex().map(|f| f.name.as_str()), Some("second"));
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let fixture = FactsFixture::new(Language::Python)
            .lines(40)
            .branches(12)
            .function("load", "load(path)");
        let facts = fixture.facts();
        assert_eq!(synthesize(&facts), synthesize(&facts));
    }
}
