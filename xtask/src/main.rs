//! Custom cargo commands for lexis.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Minimum number of `INVARIANT:` markers expected under src/.
const MIN_INVARIANT_MARKERS: usize = 6;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + fixtures + tests + clippy)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("lexis Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    let markers = check_invariant_markers()?;
    println!("✓ {} invariant markers present\n", markers);

    println!("[2/4] Checking corpus fixtures...");
    let fixtures = check_corpus_fixtures()?;
    println!("✓ {} fixture(s) well-formed\n", fixtures);

    println!("[3/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
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

fn check_invariant_markers() -> Result<usize> {
    let src_dir = project_root()?.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "Expected at least {} INVARIANT markers, found {}. Someone may have removed safety comments!",
            MIN_INVARIANT_MARKERS,
            count
        );
    }

    Ok(count)
}

/// Every `data/*.txt` corpus must hold whole (identifier, body) pairs with
/// non-empty identifiers.
fn check_corpus_fixtures() -> Result<usize> {
    let data_dir = project_root()?.join("data");
    let mut checked = 0;

    for entry in fs::read_dir(&data_dir)
        .with_context(|| format!("Failed to list {}", data_dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let lines: Vec<&str> = text.lines().collect();

        if lines.len() % 2 != 0 {
            bail!("{}: odd line count {}, last identifier has no body", path.display(), lines.len());
        }
        if let Some(n) = lines.iter().step_by(2).position(|id| id.trim().is_empty()) {
            bail!("{}: empty identifier on line {}", path.display(), n * 2 + 1);
        }
        checked += 1;
    }

    Ok(checked)
}
