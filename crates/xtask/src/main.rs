//! Workspace maintenance tasks.
//!
//! `arch-check` keeps `kilmere-domain` pure: no logging, no clock, no engine,
//! and no printing from domain sources.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

const DOMAIN_CRATE: &str = "kilmere-domain";

/// Crates the domain must never depend on.
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &[
    "kilmere-engine",
    "tracing",
    "tracing-subscriber",
    "chrono",
    "dotenvy",
    "anyhow",
];

/// Source patterns that mean the domain is doing I/O or reading the wall clock.
const FORBIDDEN_DOMAIN_PATTERN: &str =
    r"\b(e?println!|e?print!|dbg!|tracing::|std::time::SystemTime|chrono::)";

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = dependency_violations(&metadata.packages);
    let domain_src = metadata.workspace_root.join("crates/domain/src");
    violations.extend(source_violations(&domain_src)?);

    if violations.is_empty() {
        println!("arch-check: {DOMAIN_CRATE} is clean");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("arch-check found {} violation(s)", violations.len())
}

fn dependency_violations(packages: &[Package]) -> Vec<String> {
    packages
        .iter()
        .filter(|p| p.name == DOMAIN_CRATE)
        .flat_map(|p| &p.dependencies)
        .filter(|d| FORBIDDEN_DOMAIN_DEPS.contains(&d.name.as_str()))
        .map(|d| format!("{DOMAIN_CRATE} depends on forbidden crate '{}'", d.name))
        .collect()
}

fn source_violations(dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(FORBIDDEN_DOMAIN_PATTERN)?;
    let mut violations = Vec::new();

    for path in rust_files(dir)? {
        let source =
            std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        for (line_no, line) in source.lines().enumerate() {
            let code = line.split("//").next().unwrap_or_default();
            if let Some(found) = pattern.find(code) {
                violations.push(format!(
                    "{}:{}: forbidden use of `{}`",
                    path.display(),
                    line_no + 1,
                    found.as_str()
                ));
            }
        }
    }

    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
