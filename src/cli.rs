//! Command-line interface for companion.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::languages::Language;
use crate::report::{self, OutputFormat, ReportEntry, View};
use crate::sample::{DEFAULT_SAMPLE, SAMPLE_LANGUAGE};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Source label used for standard input.
const STDIN_SOURCE: &str = "<stdin>";
const SAMPLE_SOURCE: &str = "<sample>";

/// Coding companion - explain, improve, test and document code snippets.
///
/// Companion runs a fast heuristic scan over TypeScript, JavaScript, Python,
/// Go and Ruby snippets: it detects the language, measures branches, async
/// operations and comment density, lists callables, and drafts suggestions,
/// test ideas, a documentation scaffold and a refactor plan.
#[derive(Parser)]
#[command(name = "companion")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug diagnostics to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze files, directories or standard input
    Analyze(AnalyzeArgs),
    /// List supported languages and their file extensions
    Languages,
    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze; `-` or nothing reads standard input
    pub paths: Vec<PathBuf>,

    /// Language hint when the file extension does not decide it
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Output format (default: from config, else pretty)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Panel to show in pretty output
    #[arg(long, value_enum, default_value_t = View::Summary)]
    pub view: View,

    /// Path to configuration YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Analyze the built-in TypeScript sample instead of any input
    #[arg(long)]
    pub sample: bool,

    /// Exit non-zero when any delivery checklist gate is unchecked
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "companion.yaml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// A snippet waiting to be analyzed.
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
    pub source: String,
    pub hint: Language,
    pub code: String,
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    let default_hint = args
        .language
        .or(config.language)
        .unwrap_or(SAMPLE_LANGUAGE);

    let snippets = if args.sample {
        vec![Snippet {
            source: SAMPLE_SOURCE.to_string(),
            hint: args.language.unwrap_or(SAMPLE_LANGUAGE),
            code: DEFAULT_SAMPLE.to_string(),
        }]
    } else {
        collect_snippets(&args.paths, default_hint, &config)?
    };

    if snippets.is_empty() {
        eprintln!("Error: no supported source files found");
        return Ok(EXIT_ERROR);
    }
    tracing::info!(inputs = snippets.len(), "analyzing");

    let analyzer = Analyzer::new().with_thresholds(config.thresholds.clone());
    let entries = analyze_all(&analyzer, snippets);

    match args.format.or(config.format).unwrap_or_default() {
        OutputFormat::Json => report::write_json(&entries)?,
        OutputFormat::Pretty => report::write_pretty(&entries, args.view),
    }

    if args.strict && entries.iter().any(|e| !e.result.all_gates_checked()) {
        return Ok(EXIT_FAILED);
    }
    Ok(EXIT_SUCCESS)
}

/// Analyze snippets in parallel; output order follows input order.
pub fn analyze_all(analyzer: &Analyzer, snippets: Vec<Snippet>) -> Vec<ReportEntry> {
    snippets
        .into_par_iter()
        .map(|snippet| {
            let result = analyzer.analyze(&snippet.code, snippet.hint);
            ReportEntry::new(snippet.source, snippet.hint, result)
        })
        .collect()
}

/// Resolve command-line paths into snippets.
pub fn collect_snippets(
    paths: &[PathBuf],
    default_hint: Language,
    config: &Config,
) -> anyhow::Result<Vec<Snippet>> {
    let stdin_only = paths.is_empty() || paths.iter().all(|p| p.as_os_str() == "-");
    if stdin_only {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("reading standard input")?;
        return Ok(vec![Snippet {
            source: STDIN_SOURCE.to_string(),
            hint: default_hint,
            code: String::from_utf8_lossy(&buf).into_owned(),
        }]);
    }

    let mut snippets = Vec::new();
    for path in paths {
        if path.as_os_str() == "-" {
            tracing::warn!("ignoring `-` when file paths are also given");
            continue;
        }
        if path.is_dir() {
            for file in collect_files(path, config)? {
                snippets.push(read_snippet(&file, default_hint)?);
            }
        } else {
            snippets.push(read_snippet(path, default_hint)?);
        }
    }
    Ok(snippets)
}

/// Read a file lossily; the extension decides the hint when it is known.
pub fn read_snippet(path: &Path, default_hint: Language) -> anyhow::Result<Snippet> {
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let hint = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(Language::from_extension)
        .unwrap_or(default_hint);
    Ok(Snippet {
        source: path.display().to_string(),
        hint,
        code: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Collect supported source files under a directory, sorted by path.
pub fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let excluded = config.exclusion_matcher()?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            // Skip hidden, vendored and dependency directories
            !(e.depth() > 0
                && e.file_type().is_dir()
                && (name.starts_with('.')
                    || name == "vendor"
                    || name == "node_modules"
                    || name == "__pycache__"))
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        if excluded.is_match(relative) || excluded.is_match(path) {
            tracing::debug!(path = %path.display(), "excluded by configuration");
            continue;
        }

        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Language::from_extension)
            .is_some();
        if supported {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Run the languages command.
pub fn run_languages() -> anyhow::Result<i32> {
    for language in Language::ALL {
        let extensions: Vec<String> = language
            .extensions()
            .iter()
            .map(|e| format!(".{}", e))
            .collect();
        println!(
            "{:<12} {:<12} {}",
            language.as_str(),
            language.display_name(),
            extensions.join(" ")
        );
    }
    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() && !args.force {
        eprintln!(
            "Error: {} already exists (use --force to overwrite)",
            args.output.display()
        );
        return Ok(EXIT_ERROR);
    }

    let yaml = Config::default().to_yaml()?;
    fs::write(&args.output, yaml)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    println!("Created {}", args.output.display());
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_skips_hidden_and_vendor() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("src/app.ts"), "export const a = 1;\n").unwrap();
        fs::write(root.join("src/notes.txt"), "not code\n").unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "module.exports = 1;\n").unwrap();
        fs::write(root.join(".git/hook.py"), "print(1)\n").unwrap();
        fs::write(root.join("main.go"), "package main\n").unwrap();

        let files = collect_files(root, &Config::default()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["main.go", "src/app.ts"]);
    }

    #[test]
    fn test_collect_files_honours_exclusions() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("dist/bundle.js"), "var a;\n").unwrap();
        fs::write(root.join("app.js"), "var b;\n").unwrap();

        let config = Config {
            excluded_paths: vec!["dist/**".to_string()],
            ..Config::default()
        };
        let files = collect_files(root, &config).unwrap();
        assert_eq!(files, vec![root.join("app.js")]);
    }

    #[test]
    fn test_read_snippet_uses_extension_hint() {
        let dir = TempDir::new().unwrap();
        let py = dir.path().join("tool.py");
        fs::write(&py, b"def f():\n    return 1\n").unwrap();
        assert_eq!(read_snippet(&py, Language::Go).unwrap().hint, Language::Python);

        let unknown = dir.path().join("script");
        fs::write(&unknown, b"puts 1\xff\n").unwrap();
        let snippet = read_snippet(&unknown, Language::Ruby).unwrap();
        assert_eq!(snippet.hint, Language::Ruby);
        assert!(snippet.code.contains('\u{fffd}'));
    }

    #[test]
    fn test_analyze_all_preserves_order() {
        let snippets: Vec<Snippet> = (0..8)
            .map(|i| Snippet {
                source: format!("s{}", i),
                hint: Language::Python,
                code: format!("def f{}():\n    return {}\n", i, i),
            })
            .collect();
        let entries = analyze_all(&Analyzer::new(), snippets);
        let sources: Vec<&str> = entries.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7"]);
        assert_eq!(entries[3].result.functions[0].name, "f3");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("companion.yaml");
        let args = InitArgs {
            output: output.clone(),
            force: false,
        };
        assert_eq!(run_init(&args).unwrap(), EXIT_SUCCESS);
        assert!(Config::parse_file(&output).is_ok());
        assert_eq!(run_init(&args).unwrap(), EXIT_ERROR);

        let forced = InitArgs { force: true, ..args };
        assert_eq!(run_init(&forced).unwrap(), EXIT_SUCCESS);
    }
}
