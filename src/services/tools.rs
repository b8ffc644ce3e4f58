//! External tool invocation wrappers.
//!
//! Every external command goes through `run_tool`, and every call site
//! branches on the exit status.

use crate::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

/// Captured result of one tool invocation.
#[derive(Debug)]
pub struct ToolOutput {
    /// Process exit code (-1 when terminated by a signal).
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run an external tool and capture its output.
pub fn run_tool<I, S>(tool: &str, args: I) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(tool).args(args).output()?;

    Ok(ToolOutput {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Check if a tool is installed and runnable.
pub fn is_installed(tool: &str, args: &[&str]) -> bool {
    Command::new(tool)
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn check_status(tool: &str, out: ToolOutput) -> Result<()> {
    if out.code != 0 {
        return Err(Error::ToolFailed {
            tool: tool.to_string(),
            code: out.code,
            stderr: out.stderr.trim().to_string(),
        });
    }
    Ok(())
}

fn missing_tool(error: Error, not_found: Error) -> Error {
    match error {
        Error::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound => not_found,
        other => other,
    }
}

/// Download a URL to a file using wget in quiet mode.
pub fn download(url: &str, output_path: &Path) -> Result<()> {
    let out = run_tool(
        "wget",
        [
            OsStr::new(url),
            OsStr::new("-O"),
            output_path.as_os_str(),
            OsStr::new("-q"),
        ],
    )
    .map_err(|e| missing_tool(e, Error::WgetNotFound))?;
    check_status("wget", out)
}

/// Extract an archive into a directory using 7z.
pub fn extract(archive: &Path, target_dir: &Path) -> Result<()> {
    // 7z takes the output directory glued to the -o switch.
    let mut dest = OsString::from("-o");
    dest.push(target_dir.as_os_str());

    let out = run_tool(
        "7z",
        [
            OsStr::new("e"),
            archive.as_os_str(),
            dest.as_os_str(),
            OsStr::new("-y"),
        ],
    )
    .map_err(|e| missing_tool(e, Error::SevenZipNotFound))?;
    check_status("7z", out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tool_missing_binary() {
        assert!(run_tool("definitely-not-a-real-tool-xyz", ["--version"]).is_err());
    }

    #[test]
    fn test_is_installed_missing_binary() {
        assert!(!is_installed("definitely-not-a-real-tool-xyz", &["--version"]));
    }
}
