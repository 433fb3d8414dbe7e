//! Curated resource links.

use crate::analysis::Resource;
use crate::languages::Language;

struct Entry {
    /// `None` for entries relevant to every language.
    language: Option<Language>,
    title: &'static str,
    description: &'static str,
    link: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        language: Some(Language::TypeScript),
        title: "TypeScript Handbook",
        description: "Language reference for types, narrowing and modules.",
        link: "https://www.typescriptlang.org/docs/handbook/intro.html",
    },
    Entry {
        language: Some(Language::TypeScript),
        title: "typescript-eslint",
        description: "Type-aware lint rules that catch unsafe patterns early.",
        link: "https://typescript-eslint.io/",
    },
    Entry {
        language: Some(Language::TypeScript),
        title: "Vitest",
        description: "Fast unit testing with first-class TypeScript support.",
        link: "https://vitest.dev/guide/",
    },
    Entry {
        language: Some(Language::JavaScript),
        title: "MDN JavaScript Guide",
        description: "Authoritative reference for the language and web APIs.",
        link: "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide",
    },
    Entry {
        language: Some(Language::JavaScript),
        title: "Jest",
        description: "Batteries-included test runner with mocking and snapshots.",
        link: "https://jestjs.io/docs/getting-started",
    },
    Entry {
        language: Some(Language::Python),
        title: "PEP 8",
        description: "Style guide for Python code.",
        link: "https://peps.python.org/pep-0008/",
    },
    Entry {
        language: Some(Language::Python),
        title: "PEP 257",
        description: "Docstring conventions.",
        link: "https://peps.python.org/pep-0257/",
    },
    Entry {
        language: Some(Language::Python),
        title: "pytest",
        description: "Fixtures, parametrization and plain asserts for Python tests.",
        link: "https://docs.pytest.org/en/stable/",
    },
    Entry {
        language: Some(Language::Go),
        title: "Effective Go",
        description: "Idioms for writing clear, idiomatic Go.",
        link: "https://go.dev/doc/effective_go",
    },
    Entry {
        language: Some(Language::Go),
        title: "Go Code Review Comments",
        description: "Common review feedback collected by the Go team.",
        link: "https://go.dev/wiki/CodeReviewComments",
    },
    Entry {
        language: Some(Language::Go),
        title: "Package testing",
        description: "Table-driven tests, benchmarks and fuzzing in the standard library.",
        link: "https://pkg.go.dev/testing",
    },
    Entry {
        language: Some(Language::Ruby),
        title: "Ruby Style Guide",
        description: "Community conventions for readable Ruby.",
        link: "https://rubystyle.guide/",
    },
    Entry {
        language: Some(Language::Ruby),
        title: "RSpec",
        description: "Behaviour-driven testing for Ruby.",
        link: "https://rspec.info/documentation/",
    },
    Entry {
        language: Some(Language::Ruby),
        title: "YARD",
        description: "Documentation tags and generator for Ruby.",
        link: "https://yardoc.org/",
    },
    Entry {
        language: None,
        title: "Refactoring Guru",
        description: "Catalog of code smells and the refactorings that fix them.",
        link: "https://refactoring.guru/refactoring/catalog",
    },
    Entry {
        language: None,
        title: "Google Engineering Practices",
        description: "What reviewers look for in a code review.",
        link: "https://google.github.io/eng-practices/review/reviewer/",
    },
    Entry {
        language: None,
        title: "Semantic Versioning",
        description: "How to pin and upgrade dependencies safely.",
        link: "https://semver.org/",
    },
];

/// Entries for `language` first, then general ones; other languages are dropped.
pub fn resources(language: Language) -> Vec<Resource> {
    let specific = ENTRIES.iter().filter(|e| e.language == Some(language));
    let general = ENTRIES.iter().filter(|e| e.language.is_none());

    specific
        .chain(general)
        .map(|e| Resource {
            title: e.title.to_string(),
            description: e.description.to_string(),
            link: e.link.to_string(),
        })
        .collect()
}
