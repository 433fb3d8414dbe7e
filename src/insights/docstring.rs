//! Documentation scaffolds in each language's comment convention.

use crate::analysis::parameter_names;
use crate::languages::Language;

use super::Facts;

const RETURN_PLACEHOLDER: &str = "<describe the return value>";
const FAILURE_PLACEHOLDER: &str = "<describe failure modes>";

/// Pieces shared by every convention.
struct Scaffold {
    name: Option<String>,
    purpose: String,
    params: Vec<String>,
    is_async: bool,
}

pub fn docstring(facts: &Facts<'_>) -> String {
    let scaffold = match facts.functions.first() {
        Some(first) => Scaffold {
            name: Some(first.name.clone()),
            purpose: first.description.clone(),
            params: parameter_names(&first.signature, &first.name, facts.language),
            is_async: first.is_async,
        },
        None => Scaffold {
            name: None,
            purpose: "<describe what this module does>".to_string(),
            params: Vec::new(),
            is_async: false,
        },
    };

    match facts.language {
        Language::TypeScript | Language::JavaScript => jsdoc(&scaffold),
        Language::Python => python(&scaffold),
        Language::Go => go(&scaffold),
        Language::Ruby => yard(&scaffold),
    }
}

fn jsdoc(s: &Scaffold) -> String {
    let mut lines = vec!["/**".to_string(), format!(" * {}", s.purpose), " *".to_string()];
    for param in &s.params {
        lines.push(format!(" * @param {} - <describe {}>", param, param));
    }
    if s.is_async {
        lines.push(" * @returns A promise that resolves with <describe the result>".to_string());
    } else {
        lines.push(format!(" * @returns {}", RETURN_PLACEHOLDER));
    }
    lines.push(format!(" * @throws {}", FAILURE_PLACEHOLDER));
    lines.push(" */".to_string());
    lines.join("\n")
}

fn python(s: &Scaffold) -> String {
    let mut lines = vec![format!("\"\"\"{}", s.purpose), String::new()];
    if !s.params.is_empty() {
        lines.push("Args:".to_string());
        for param in &s.params {
            lines.push(format!("    {}: <describe {}>", param, param));
        }
        lines.push(String::new());
    }
    lines.push("Returns:".to_string());
    lines.push(format!("    {}", RETURN_PLACEHOLDER));
    lines.push(String::new());
    lines.push("Raises:".to_string());
    lines.push(format!("    {}", FAILURE_PLACEHOLDER));
    lines.push("\"\"\"".to_string());
    lines.join("\n")
}

fn go(s: &Scaffold) -> String {
    // Go doc comments open with the identifier they document.
    let opening = match &s.name {
        Some(name) => format!("// {} {}", name, lowercase_first(&s.purpose)),
        None => format!("// Package {}", s.purpose),
    };
    let mut lines = vec![opening, "//".to_string()];
    if !s.params.is_empty() {
        lines.push("// Parameters:".to_string());
        for param in &s.params {
            lines.push(format!("//   - {}: <describe {}>", param, param));
        }
        lines.push("//".to_string());
    }
    lines.push(format!("// Returns {}.", RETURN_PLACEHOLDER));
    lines.push(format!("// Errors: {}.", FAILURE_PLACEHOLDER));
    lines.join("\n")
}

fn yard(s: &Scaffold) -> String {
    let mut lines = vec![format!("# {}", s.purpose), "#".to_string()];
    for param in &s.params {
        lines.push(format!("# @param {} [Object] <describe {}>", param, param));
    }
    lines.push(format!("# @return [Object] {}", RETURN_PLACEHOLDER));
    lines.push(format!("# @raise [StandardError] {}", FAILURE_PLACEHOLDER));
    lines.join("\n")
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fixtures::FactsFixture;

    #[test]
    fn test_jsdoc_lists_parameters() {
        let mut fixture = FactsFixture::new(Language::TypeScript)
            .function("loadUser", "loadUser(id: string, force?: boolean): Promise<User>");
        fixture.functions[0].description = "Loads user from an external source.".to_string();
        fixture.functions[0].is_async = true;
        let doc = docstring(&fixture.facts());
        assert!(doc.starts_with("/**\n * Loads user from an external source."));
        assert!(doc.contains(" * @param id - <describe id>"));
        assert!(doc.contains(" * @param force - <describe force>"));
        assert!(doc.contains("A promise that resolves"));
        assert!(doc.ends_with(" */"));
    }

    #[test]
    fn test_python_docstring_sections() {
        let fixture = FactsFixture::new(Language::Python).function("save", "save(self, path, data=None)");
        let doc = docstring(&fixture.facts());
        assert!(doc.contains("Args:\n    path: <describe path>\n    data: <describe data>"));
        assert!(doc.contains("Raises:"));
        assert!(doc.ends_with("\"\"\""));
    }

    #[test]
    fn test_go_doc_starts_with_name() {
        let mut fixture = FactsFixture::new(Language::Go).function("Start", "(s *Server) Start(addr string) error");
        fixture.functions[0].description = "Starts the service.".to_string();
        let doc = docstring(&fixture.facts());
        assert!(doc.starts_with("// Start starts the service."));
        assert!(doc.contains("//   - addr: <describe addr>"));
    }

    #[test]
    fn test_module_scaffold_without_callables() {
        let fixture = FactsFixture::new(Language::Ruby);
        let doc = docstring(&fixture.facts());
        assert!(doc.starts_with("# <describe what this module does>"));
        assert!(!doc.contains("@param"));
        assert!(doc.contains("@raise"));
    }
}
