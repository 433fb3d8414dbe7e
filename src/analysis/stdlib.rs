//! Standard library detection.
//!
//! Imports of a language's own standard library are not external
//! dependencies. Python, Node and Ruby use embedded module tables; Go
//! stdlib paths are recognized by their first path component.

use phf::phf_set;

use crate::languages::Language;

/// Top-level Python standard library modules.
static PYTHON_STDLIB: phf::Set<&'static str> = phf_set! {
    "__future__", "abc", "argparse", "array", "ast", "asyncio", "base64",
    "binascii", "bisect", "builtins", "calendar", "cmath", "codecs",
    "collections", "concurrent", "configparser", "contextlib", "contextvars",
    "copy", "csv", "ctypes", "dataclasses", "datetime", "decimal", "difflib",
    "email", "enum", "errno", "fnmatch", "fractions", "functools", "gc",
    "getpass", "gettext", "glob", "gzip", "hashlib", "heapq", "hmac", "html",
    "http", "importlib", "inspect", "io", "ipaddress", "itertools", "json",
    "logging", "lzma", "math", "mimetypes", "multiprocessing", "numbers",
    "operator", "os", "pathlib", "pickle", "platform", "pprint", "queue",
    "random", "re", "secrets", "select", "shlex", "shutil", "signal",
    "socket", "sqlite3", "ssl", "statistics", "string", "struct",
    "subprocess", "sys", "tempfile", "textwrap", "threading", "time",
    "timeit", "traceback", "types", "typing", "unittest", "urllib", "uuid",
    "warnings", "weakref", "xml", "zipfile", "zlib", "zoneinfo",
};

/// Node.js builtin modules. `node:`-prefixed imports are always builtin.
static NODE_BUILTINS: phf::Set<&'static str> = phf_set! {
    "assert", "async_hooks", "buffer", "child_process", "cluster", "console",
    "crypto", "dgram", "dns", "events", "fs", "http", "http2", "https",
    "module", "net", "os", "path", "perf_hooks", "process", "querystring",
    "readline", "stream", "string_decoder", "timers", "tls", "tty", "url",
    "util", "v8", "vm", "worker_threads", "zlib",
};

/// Ruby standard library and default gems loaded through `require`.
static RUBY_STDLIB: phf::Set<&'static str> = phf_set! {
    "abbrev", "base64", "benchmark", "bigdecimal", "cgi", "csv", "date",
    "digest", "erb", "etc", "fileutils", "find", "forwardable", "io", "ipaddr",
    "json", "logger", "monitor", "net", "observer", "open3", "open-uri",
    "openssl", "optparse", "ostruct", "pathname", "pp", "prettyprint",
    "securerandom", "set", "shellwords", "singleton", "socket", "stringio",
    "strscan", "tempfile", "time", "timeout", "tmpdir", "uri", "yaml", "zlib",
};

/// Check if a module is part of `language`'s standard library.
pub fn is_stdlib(language: Language, module: &str) -> bool {
    match language {
        Language::Python => PYTHON_STDLIB.contains(module),
        Language::TypeScript | Language::JavaScript => {
            module.starts_with("node:") || NODE_BUILTINS.contains(module)
        }
        // Go stdlib packages don't have dots in their first path component
        Language::Go => {
            let first_component = module.split('/').next().unwrap_or("");
            !first_component.contains('.')
        }
        Language::Ruby => RUBY_STDLIB.contains(module),
    }
}
