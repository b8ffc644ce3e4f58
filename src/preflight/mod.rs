//! Preflight checks module.
//!
//! Verifies the external tools the pipeline shells out to are available
//! before any network or filesystem work starts.

use crate::services::tools;
use colored::Colorize;

/// Result of a preflight check.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub success: bool,
    pub message: String,
    pub hint: Option<String>,
}

impl CheckResult {
    pub fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            message: message.to_string(),
            hint: None,
        }
    }

    pub fn fail(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }
}

/// Run all preflight checks.
pub fn run_preflight_checks() -> Vec<CheckResult> {
    vec![check_wget(), check_7z()]
}

fn check_wget() -> CheckResult {
    if tools::is_installed("wget", &["--version"]) {
        CheckResult::ok("wget", "found on PATH")
    } else {
        CheckResult::fail("wget", "not found", "Install wget and add it to PATH")
    }
}

fn check_7z() -> CheckResult {
    // "7z i" prints supported formats and exits 0.
    if tools::is_installed("7z", &["i"]) {
        CheckResult::ok("7z", "found on PATH")
    } else {
        CheckResult::fail("7z", "not found", "Install p7zip and add it to PATH")
    }
}

/// Print preflight check results.
pub fn print_results(results: &[CheckResult]) {
    for result in results {
        if result.success {
            println!(
                "{} {}: {}",
                "[OK]".green(),
                result.name.bold(),
                result.message
            );
        } else {
            println!(
                "{} {}: {}",
                "[FAIL]".red(),
                result.name.bold(),
                result.message
            );
            if let Some(ref hint) = result.hint {
                println!("  {} {}", "->".yellow(), hint);
            }
        }
    }
}

/// Check if all preflight checks passed.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.success)
}
