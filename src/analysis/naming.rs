//! Identifier splitting and templated callable descriptions.

use phf::phf_map;

use crate::languages::{CallableKind, Language};

/// Leading verb -> (template, subject used when the name is only the verb).
static VERB_TEMPLATES: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "get" => ("Retrieves {}.", "the requested value"),
    "set" => ("Updates {}.", "the stored value"),
    "update" => ("Updates {}.", "existing state"),
    "validate" => ("Validates {} and rejects malformed input.", "the input"),
    "verify" => ("Validates {} and rejects malformed input.", "the input"),
    "check" => ("Checks {} against the expected conditions.", "the input"),
    "ensure" => ("Ensures {} holds before continuing.", "the precondition"),
    "handle" => ("Handles {}.", "the incoming event"),
    "on" => ("Reacts to {}.", "the event"),
    "is" => ("Checks whether {}.", "the condition holds"),
    "has" => ("Checks whether it has {}.", "the expected value"),
    "can" => ("Checks whether it can {}.", "proceed"),
    "should" => ("Checks whether it should {}.", "proceed"),
    "create" => ("Constructs {}.", "a new instance"),
    "make" => ("Constructs {}.", "a new instance"),
    "build" => ("Constructs {}.", "the result"),
    "new" => ("Constructs {}.", "a new instance"),
    "fetch" => ("Loads {} from an external source.", "remote data"),
    "load" => ("Loads {}.", "the data"),
    "read" => ("Loads {}.", "the input"),
    "save" => ("Persists {}.", "the current state"),
    "write" => ("Persists {}.", "the output"),
    "store" => ("Persists {}.", "the value"),
    "persist" => ("Persists {}.", "the current state"),
    "parse" => ("Parses {} into a structured form.", "the input"),
    "format" => ("Renders {} as text.", "the value"),
    "render" => ("Renders {}.", "the view"),
    "to" => ("Converts the value to {}.", "another representation"),
    "calculate" => ("Computes {}.", "the result"),
    "compute" => ("Computes {}.", "the result"),
    "count" => ("Counts {}.", "matching items"),
    "sum" => ("Computes the total of {}.", "the values"),
    "delete" => ("Removes {}.", "the entry"),
    "remove" => ("Removes {}.", "the entry"),
    "clear" => ("Clears {}.", "accumulated state"),
    "init" => ("Initializes {}.", "required state"),
    "initialize" => ("Initializes {}.", "required state"),
    "setup" => ("Initializes {}.", "required state"),
    "configure" => ("Configures {}.", "the component"),
    "process" => ("Processes {}.", "the input"),
    "run" => ("Runs {}.", "the main routine"),
    "execute" => ("Runs {}.", "the operation"),
    "start" => ("Starts {}.", "the service"),
    "stop" => ("Stops {}.", "the service"),
    "send" => ("Sends {}.", "the message"),
    "emit" => ("Emits {}.", "an event"),
    "publish" => ("Publishes {}.", "an event"),
    "notify" => ("Notifies subscribers about {}.", "the change"),
    "find" => ("Searches for {}.", "a matching item"),
    "search" => ("Searches for {}.", "matching items"),
    "lookup" => ("Looks up {}.", "a matching entry"),
    "filter" => ("Filters {} by the given criteria.", "the collection"),
    "convert" => ("Transforms {}.", "the input"),
    "transform" => ("Transforms {}.", "the input"),
    "map" => ("Maps {} to a new shape.", "the input"),
    "merge" => ("Merges {}.", "the inputs"),
    "sort" => ("Sorts {}.", "the collection"),
    "add" => ("Adds {}.", "an item"),
    "register" => ("Registers {}.", "a handler"),
    "log" => ("Logs {}.", "diagnostic information"),
};

/// Split an identifier into lowercase words.
///
/// Handles camelCase, PascalCase, snake_case and acronyms
/// (`parseHTTPRequest` -> `parse http request`).
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// One-line description of a callable derived from its name.
pub fn describe(name: &str, kind: CallableKind, language: Language) -> String {
    match name {
        "__init__" | "constructor" | "initialize" => {
            return "Initializes a new instance and its state.".to_string();
        }
        "main" => return "Program entry point that wires dependencies and starts execution.".to_string(),
        _ => {}
    }

    let words = split_words(name);
    let Some(verb) = words.first() else {
        return "Anonymous or unnamed callable.".to_string();
    };
    let rest = words[1..].join(" ");

    if verb == "test" || (language == Language::Go && name.starts_with("Test")) {
        let subject = if rest.is_empty() { "its target".to_string() } else { rest };
        return format!("Test case exercising {}.", subject);
    }

    if language == Language::Ruby && name.ends_with('?') {
        return format!("Predicate that checks whether {}.", words.join(" "));
    }

    if let Some((template, fallback)) = VERB_TEMPLATES.get(verb.as_str()) {
        let subject = if rest.is_empty() { *fallback } else { rest.as_str() };
        return template.replacen("{}", subject, 1);
    }

    let phrase = words.join(" ");
    match kind {
        CallableKind::Lambda => format!("Inline callable implementing {} logic.", phrase),
        CallableKind::Method => format!("Method implementing {} behaviour.", phrase),
        CallableKind::Function => format!("Implements {} logic.", phrase),
    }
}
