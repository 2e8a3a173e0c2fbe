//! Custom cargo commands for the toolscout crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask catalog   - Validate data/catalog.json

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;
use toolscout::{search, Catalog, SubsequenceMatcher, TieredMatcher};

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("catalog") => catalog()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + catalog + feature build)
  test      Run all Rust tests
  check     Quick check (cargo check + clippy)
  bench     Run benchmarks
  catalog   Validate the bundled catalog
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("toolscout Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Validating bundled catalog...");
    catalog()?;
    println!("✓ Catalog valid\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running tests with diacritic folding...");
    run_cargo(&["test", "--quiet", "--features", "fold-diacritics"])?;
    println!("✓ fold-diacritics tests passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Load the bundled catalog and make sure every entry can be found by name.
fn catalog() -> Result<()> {
    let path = project_root()?.join("data/catalog.json");
    let catalog = Catalog::load(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if catalog.is_empty() {
        bail!("{} has no entries", path.display());
    }

    let overlay = TieredMatcher::default();
    let mut unreachable = Vec::new();
    for entry in catalog.entries() {
        if entry.name().trim().is_empty() {
            bail!("Entry '{}' has no name", entry.id());
        }
        let by_overlay = search(&catalog, &overlay, entry.name()).contains(entry.id());
        let by_sidebar = search(&catalog, &SubsequenceMatcher, entry.name()).contains(entry.id());
        if !(by_overlay && by_sidebar) {
            unreachable.push(entry.id());
        }
    }

    if !unreachable.is_empty() {
        bail!("Entries not found by their own name: {:?}", unreachable);
    }

    println!(
        "  {} entries in {} categories",
        catalog.len(),
        catalog.categories().len()
    );
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }
    Ok(())
}
