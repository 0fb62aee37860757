//! Architecture enforcement tests.
//!
//! The engine and core layers return values; only the `cli` and `ui` layers
//! write to the terminal. These tests scan the source tree so a stray
//! `println!` in the engine is caught in CI.
//!
//! # Test Categories
//!
//! 1. **Print Detection** - engine, core and tutorial must not print
//! 2. **Layer Imports** - core must not depend on engine, cli or ui

use std::fs;
use std::path::{Path, PathBuf};

/// Source directories (and files) that must stay free of terminal output.
const SILENT_LAYERS: &[&str] = &["src/engine", "src/core", "src/tutorial.rs"];

/// Macros that write straight to stdout or stderr.
const PRINT_MACROS: &[&str] = &["println!", "print!", "eprintln!", "eprint!", "dbg!"];

/// Collect every `.rs` file under `path`.
fn rust_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(path).expect("failed to read source directory") {
        let path = entry.expect("failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files
}

/// Non-test, non-comment lines of a source file.
fn code_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .map(|(i, line)| (i + 1, line))
}

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn silent_layers_do_not_print() {
    let mut violations = Vec::new();

    for layer in SILENT_LAYERS {
        for file in rust_files(&root().join(layer)) {
            let source = fs::read_to_string(&file).expect("failed to read source file");
            for (number, line) in code_lines(&source) {
                if PRINT_MACROS.iter().any(|m| line.contains(m)) {
                    violations.push(format!("{}:{}: {}", file.display(), number, line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "terminal output outside cli/ui:\n{}",
        violations.join("\n")
    );
}

#[test]
fn core_does_not_depend_on_upper_layers() {
    let mut violations = Vec::new();

    for file in rust_files(&root().join("src/core")) {
        let source = fs::read_to_string(&file).expect("failed to read source file");
        for (number, line) in code_lines(&source) {
            for upper in ["crate::engine", "crate::cli", "crate::ui"] {
                if line.contains(upper) {
                    violations.push(format!("{}:{}: {}", file.display(), number, line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "core imports an upper layer:\n{}",
        violations.join("\n")
    );
}

#[test]
fn lint_sees_the_engine() {
    // Guard against the scan silently finding nothing.
    let files = rust_files(&root().join("src/engine"));
    assert!(files.iter().any(|f| f.ends_with("repo.rs")));
}
