use anyhow::Context;
use serde::Deserialize;

/// Crates the domain must not depend on: it stays free of I/O and runtimes.
const DOMAIN_FORBIDDEN: &[&str] = &[
    "tokio",
    "sqlx",
    "dashmap",
    "async-trait",
    "tracing-subscriber",
    "dotenvy",
    "dugout-engine",
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
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
    let violations = domain_violations(&metadata)?;
    if !violations.is_empty() {
        anyhow::bail!(
            "dugout-domain depends on forbidden crates: {}",
            violations.join(", ")
        );
    }

    println!("arch-check passed");
    Ok(())
}

/// Normal (non-dev) dependencies of the domain crate that are forbidden.
fn domain_violations(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|package| package.name == "dugout-domain")
        .context("dugout-domain not found in workspace")?;

    Ok(domain
        .dependencies
        .iter()
        .filter(|dep| dep.kind.is_none())
        .filter(|dep| DOMAIN_FORBIDDEN.contains(&dep.name.as_str()))
        .map(|dep| dep.name.clone())
        .collect())
}
