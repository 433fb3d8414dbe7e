//! External dependency extraction.
//!
//! Collects module identifiers referenced through each language's import
//! idiom. Relative (local) imports are skipped; npm subpaths collapse to the
//! package name and Go import paths collapse to their module root.
//! Standard library modules are not external and are filtered out.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::metrics::{CommentTracker, LineKind};
use super::stdlib::is_stdlib;
use crate::languages::{profile, Language};

/// Extract the set of external modules `code` imports.
pub fn extract_dependencies(code: &str, language: Language) -> BTreeSet<String> {
    let mut imports = match language {
        Language::TypeScript | Language::JavaScript => extract_js_imports(code),
        Language::Python => extract_python_imports(code),
        Language::Go => extract_go_imports(code),
        Language::Ruby => extract_ruby_imports(code),
    };
    imports.retain(|module| !is_stdlib(language, module));
    imports
}

/// Extract imports from Python source code.
fn extract_python_imports(content: &str) -> BTreeSet<String> {
    lazy_static! {
        // import foo, bar.baz as b
        static ref IMPORT_RE: Regex = Regex::new(r"^\s*import\s+(.+)$").unwrap();
        // from foo.bar import baz
        static ref FROM_IMPORT_RE: Regex = Regex::new(r"^\s*from\s+([A-Za-z_][\w.]*)\s+import\b").unwrap();
    }

    let mut imports = BTreeSet::new();
    let mut tracker = CommentTracker::new(&profile(Language::Python).comments);

    for line in content.lines() {
        // Docstrings, comments and multi-line string bodies never import
        if matches!(
            tracker.classify(line),
            LineKind::Comment | LineKind::StringBody
        ) {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        if let Some(caps) = IMPORT_RE.captures(line) {
            let list = caps[1].split('#').next().unwrap_or("");
            for item in list.split(',') {
                let module = item.split_whitespace().next().unwrap_or("");
                if let Some(root) = python_root(module) {
                    imports.insert(root);
                }
            }
        }

        if let Some(caps) = FROM_IMPORT_RE.captures(line) {
            if let Some(root) = python_root(&caps[1]) {
                imports.insert(root);
            }
        }
    }

    imports
}

/// Top-level package of a dotted Python module path.
fn python_root(module: &str) -> Option<String> {
    let root = module.split('.').next()?;
    let valid = !root.is_empty()
        && root
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !root.starts_with(|c: char| c.is_ascii_digit());
    valid.then(|| root.to_string())
}

/// Extract imports from JavaScript/TypeScript source code.
fn extract_js_imports(content: &str) -> BTreeSet<String> {
    lazy_static! {
        // import x from 'pkg' / export { y } from 'pkg' (may span lines)
        static ref FROM_RE: Regex = Regex::new(
            r#"(?m)^[ \t]*(?:import|export)\b[^;'"]*?\bfrom[ \t]*['"]([^'"\n]+)['"]"#
        ).unwrap();
        // import 'pkg'
        static ref SIDE_EFFECT_RE: Regex = Regex::new(r#"(?m)^[ \t]*import[ \t]*['"]([^'"\n]+)['"]"#).unwrap();
        // import('pkg') and require('pkg')
        static ref CALL_RE: Regex = Regex::new(r#"\b(?:import|require)\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#).unwrap();
    }

    let mut imports = BTreeSet::new();
    let code = strip_line_comments(content, "//");

    for re in [&*FROM_RE, &*SIDE_EFFECT_RE, &*CALL_RE] {
        for caps in re.captures_iter(&code) {
            let path = &caps[1];
            if is_relative(path) {
                continue;
            }
            imports.insert(extract_npm_package_name(path));
        }
    }

    imports
}

/// Extract the package name from an npm import path.
/// For scoped packages (@org/pkg/...), returns @org/pkg.
/// For regular packages (pkg/...), returns pkg.
fn extract_npm_package_name(import_path: &str) -> String {
    if import_path.starts_with('@') {
        let parts: Vec<&str> = import_path.splitn(3, '/').collect();
        if parts.len() >= 2 {
            format!("{}/{}", parts[0], parts[1])
        } else {
            import_path.to_string()
        }
    } else {
        import_path
            .split('/')
            .next()
            .unwrap_or(import_path)
            .to_string()
    }
}

/// Extract imports from Go source code.
fn extract_go_imports(content: &str) -> BTreeSet<String> {
    lazy_static! {
        // Single import: import "package" or import alias "package"
        static ref SINGLE_IMPORT_RE: Regex = Regex::new(r#"(?m)^[ \t]*import[ \t]+(?:[\w.]+[ \t]+)?"([^"]+)""#).unwrap();
        // Import block: import ( "pkg1" "pkg2" )
        static ref IMPORT_BLOCK_RE: Regex = Regex::new(r#"(?s)\bimport\s*\((.*?)\)"#).unwrap();
        // Individual import within block, optionally aliased
        static ref BLOCK_ITEM_RE: Regex = Regex::new(r#"(?m)^[ \t]*(?:[\w.]+[ \t]+)?"([^"]+)""#).unwrap();
    }

    let mut imports = BTreeSet::new();
    let code = strip_line_comments(content, "//");

    for caps in SINGLE_IMPORT_RE.captures_iter(&code) {
        imports.insert(extract_go_module_name(&caps[1]));
    }

    for block in IMPORT_BLOCK_RE.captures_iter(&code) {
        for caps in BLOCK_ITEM_RE.captures_iter(&block[1]) {
            imports.insert(extract_go_module_name(&caps[1]));
        }
    }

    imports.retain(|path| !is_relative(path));
    imports
}

/// Extract the module name from a Go import path.
/// github.com/user/repo/pkg -> github.com/user/repo
fn extract_go_module_name(import_path: &str) -> String {
    let parts: Vec<&str> = import_path.split('/').collect();

    // Most Go modules are at least 3 parts: domain/user/repo
    if parts.len() >= 3 {
        format!("{}/{}/{}", parts[0], parts[1], parts[2])
    } else {
        import_path.to_string()
    }
}

/// Extract requires from Ruby source code.
fn extract_ruby_imports(content: &str) -> BTreeSet<String> {
    lazy_static! {
        // require 'json' / require("net/http"); require_relative is local
        static ref REQUIRE_RE: Regex = Regex::new(r#"^\s*require\s*\(?\s*['"]([^'"]+)['"]"#).unwrap();
    }

    content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(|line| REQUIRE_RE.captures(line))
        .map(|caps| caps[1].to_string())
        .filter(|path| !is_relative(path))
        .map(|path| path.split('/').next().unwrap_or(&path).to_string())
        .collect()
}

fn is_relative(path: &str) -> bool {
    path.starts_with('.') || path.starts_with('/')
}

/// Drop whole-line comments so commented-out imports are ignored.
fn strip_line_comments(content: &str, marker: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with(marker))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_extract_python_imports() {
        let content = r#"
import requests
import os, sys as system
from flask import Flask
from .local import helper
"""
import hidden
"""
# import commented
"#;
        let imports = extract_python_imports(content);
        assert_eq!(names(&imports), vec!["flask", "os", "requests", "sys"]);
    }

    #[test]
    fn test_extract_python_dotted_import() {
        let imports = extract_python_imports("import xml.etree.ElementTree as ET\n");
        assert_eq!(names(&imports), vec!["xml"]);
    }

    #[test]
    fn test_extract_js_imports() {
        let content = r#"
import express from 'express';
import { useState } from 'react';
import {
  map,
  filter,
} from "lodash/fp";
import './styles.css';
import 'reflect-metadata';
const zod = require('zod');
const lazy = await import('@babel/core/lib');
export { thing } from '../thing';
// import ghost from 'ghost';
"#;
        let imports = extract_js_imports(content);
        assert_eq!(
            names(&imports),
            vec!["@babel/core", "express", "lodash", "react", "reflect-metadata", "zod"]
        );
    }

    #[test]
    fn test_extract_npm_package_name() {
        assert_eq!(extract_npm_package_name("lodash"), "lodash");
        assert_eq!(extract_npm_package_name("lodash/get"), "lodash");
        assert_eq!(extract_npm_package_name("@types/node"), "@types/node");
        assert_eq!(extract_npm_package_name("@babel/core/lib"), "@babel/core");
    }

    #[test]
    fn test_extract_go_imports() {
        let content = r#"
package main

import (
    "fmt"
    gin "github.com/gin-gonic/gin"
    "github.com/spf13/cobra/doc"
)

import "golang.org/x/net/context"
"#;
        let imports = extract_go_imports(content);
        assert_eq!(
            names(&imports),
            vec![
                "fmt",
                "github.com/gin-gonic/gin",
                "github.com/spf13/cobra",
                "golang.org/x/net"
            ]
        );
    }

    #[test]
    fn test_extract_ruby_imports() {
        let content = "require 'json'\nrequire \"net/http\"\nrequire_relative 'helper'\n# require 'ghost'\n";
        let imports = extract_ruby_imports(content);
        assert_eq!(names(&imports), vec!["json", "net"]);
    }

    #[test]
    fn test_import_after_multiline_string_is_found() {
        let content = "import os\nQUERY = \"\"\"\nSELECT 1\n\"\"\"\nimport requests\n\ndef run():\n    return QUERY\n";
        let imports = extract_python_imports(content);
        assert_eq!(names(&imports), vec!["os", "requests"]);
    }

    #[test]
    fn test_import_inside_multiline_string_is_ignored() {
        let content = "TEMPLATE = '''\nimport hidden\n'''\nimport yaml\n";
        let imports = extract_python_imports(content);
        assert_eq!(names(&imports), vec!["yaml"]);
    }

    #[test]
    fn test_stdlib_modules_are_not_dependencies() {
        let python = extract_dependencies("import os, sys\nimport requests\n", Language::Python);
        assert_eq!(names(&python), vec!["requests"]);

        let js = extract_dependencies(
            "import fs from 'node:fs';\nconst path = require('path');\nimport express from 'express';\n",
            Language::JavaScript,
        );
        assert_eq!(names(&js), vec!["express"]);

        let go = extract_dependencies(
            "import (\n    \"fmt\"\n    \"net/http\"\n    \"github.com/google/uuid\"\n)\n",
            Language::Go,
        );
        assert_eq!(names(&go), vec!["github.com/google/uuid"]);

        let ruby = extract_dependencies("require 'json'\nrequire 'sinatra'\n", Language::Ruby);
        assert_eq!(names(&ruby), vec!["sinatra"]);
    }

    #[test]
    fn test_import_order_does_not_matter() {
        let a = "import os\nimport requests\n";
        let b = "import requests\nimport os\n";
        assert_eq!(
            extract_dependencies(a, Language::Python),
            extract_dependencies(b, Language::Python)
        );
    }
}
