//! Readiness checklist evaluation
//!
//! A checklist is a flat, ordered list of independent checks. Every item is
//! always evaluated; a failure never short-circuits the rest. Only the final
//! failed count decides the process exit code.

use crate::manifest::{ManifestCheck, PackageManifest};
use crate::Result;
use regex::Regex;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Warning,
}

#[derive(Debug, Clone)]
pub enum CheckKind {
    FileExists {
        path: PathBuf,
    },
    ManifestField {
        path: PathBuf,
        check: ManifestCheck,
    },
    ShellCommand {
        program: String,
        args: Vec<String>,
    },
    /// `git status --porcelain`; a dirty tree is a warning, not a failure
    GitClean,
}

#[derive(Debug, Clone)]
pub struct ChecklistItem {
    pub description: String,
    pub kind: CheckKind,
    pub severity: Severity,
}

impl ChecklistItem {
    pub fn file_exists(path: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            kind: CheckKind::FileExists { path: path.into() },
            severity: Severity::Fatal,
        }
    }

    pub fn manifest_field(
        path: impl Into<PathBuf>,
        check: ManifestCheck,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            kind: CheckKind::ManifestField {
                path: path.into(),
                check,
            },
            severity: Severity::Fatal,
        }
    }

    pub fn shell_command(
        program: impl Into<String>,
        args: &[&str],
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            kind: CheckKind::ShellCommand {
                program: program.into(),
                args: args.iter().map(|a| a.to_string()).collect(),
            },
            severity: Severity::Fatal,
        }
    }

    pub fn git_clean(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            kind: CheckKind::GitClean,
            severity: Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass { detail: Option<String> },
    Warn { detail: String },
    Fail { reason: String },
}

impl Outcome {
    fn pass() -> Self {
        Outcome::Pass { detail: None }
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail { .. })
    }
}

pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// External process boundary, injectable for tests
pub trait Launcher {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[derive(Debug)]
pub struct ValidationReport {
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<(ChecklistItem, Outcome)>,
}

impl ValidationReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluate every item in declaration order.
///
/// Warnings count toward `passed`; only `Fail` outcomes count as failures.
pub fn validate(items: &[ChecklistItem], launcher: &dyn Launcher) -> ValidationReport {
    let mut results = Vec::with_capacity(items.len());
    let mut passed = 0;
    let mut failed = 0;

    for item in items {
        let outcome = evaluate(item, launcher);
        if outcome.is_fail() {
            failed += 1;
        } else {
            passed += 1;
        }
        results.push((item.clone(), outcome));
    }

    ValidationReport {
        passed,
        failed,
        results,
    }
}

fn evaluate(item: &ChecklistItem, launcher: &dyn Launcher) -> Outcome {
    match &item.kind {
        CheckKind::FileExists { path } => {
            if path.exists() {
                Outcome::pass()
            } else {
                Outcome::Fail {
                    reason: format!("file not found: {}", path.display()),
                }
            }
        }

        CheckKind::ManifestField { path, check } => match PackageManifest::load(path) {
            Ok(manifest) => {
                if check.holds(&manifest) {
                    Outcome::pass()
                } else {
                    Outcome::Fail {
                        reason: check.failure_reason(),
                    }
                }
            }
            Err(e) => Outcome::Fail {
                reason: format!("{:#}", e),
            },
        },

        CheckKind::ShellCommand { program, args } => {
            let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
            match launcher.run(program, &arg_refs) {
                Ok(output) if output.success => Outcome::Pass {
                    detail: extract_package_size(&output.stdout)
                        .map(|size| format!("package size: {}", size)),
                },
                Ok(output) => {
                    let message = first_line(&output.stderr)
                        .or_else(|| first_line(&output.stdout))
                        .unwrap_or_else(|| format!("{} exited with non-zero status", program));
                    Outcome::Fail { reason: message }
                }
                Err(e) => Outcome::Fail {
                    reason: format!("failed to run {}: {:#}", program, e),
                },
            }
        }

        CheckKind::GitClean => match launcher.run("git", &["status", "--porcelain"]) {
            Ok(output) if output.success => {
                if output.stdout.trim().is_empty() {
                    Outcome::pass()
                } else {
                    // dirtiness blocks only when the item is declared fatal
                    let detail =
                        "uncommitted changes, consider: git add . && git commit".to_string();
                    match item.severity {
                        Severity::Warning => Outcome::Warn { detail },
                        Severity::Fatal => Outcome::Fail { reason: detail },
                    }
                }
            }
            Ok(output) => {
                let message = first_line(&output.stderr)
                    .unwrap_or_else(|| "git status failed".to_string());
                Outcome::Fail { reason: message }
            }
            Err(e) => Outcome::Fail {
                reason: format!("failed to run git: {:#}", e),
            },
        },
    }
}

/// Pull the human-readable size out of `npm pack --dry-run` output
pub fn extract_package_size(output: &str) -> Option<String> {
    let re = Regex::new(r"package size:\s*([^\n]+)").ok()?;
    re.captures(output).map(|c| c[1].trim().to_string())
}

fn first_line(text: &str) -> Option<String> {
    let line = text.lines().find(|l| !l.trim().is_empty())?;
    Some(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Launcher that answers from a canned table, keyed by program name
    struct FakeLauncher {
        responses: HashMap<String, (bool, String, String)>,
    }

    impl FakeLauncher {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
            }
        }

        fn respond(mut self, program: &str, success: bool, stdout: &str, stderr: &str) -> Self {
            self.responses.insert(
                program.to_string(),
                (success, stdout.to_string(), stderr.to_string()),
            );
            self
        }
    }

    impl Launcher for FakeLauncher {
        fn run(&self, program: &str, _args: &[&str]) -> Result<CommandOutput> {
            match self.responses.get(program) {
                Some((success, stdout, stderr)) => Ok(CommandOutput {
                    success: *success,
                    stdout: stdout.clone(),
                    stderr: stderr.clone(),
                }),
                None => anyhow::bail!("no such command: {}", program),
            }
        }
    }

    #[test]
    fn test_all_items_pass() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("README.md");
        std::fs::write(&file, "# readme").unwrap();

        let launcher = FakeLauncher::new()
            .respond("node", true, "v20.0.0", "")
            .respond("git", true, "", "");

        let items = vec![
            ChecklistItem::file_exists(&file, "readme present"),
            ChecklistItem::shell_command("node", &["--version"], "node available"),
            ChecklistItem::git_clean("working tree clean"),
        ];

        let report = validate(&items, &launcher);
        assert_eq!(report.passed, 3);
        assert_eq!(report.failed, 0);
        assert!(report.all_passed());
    }

    #[test]
    fn test_missing_file_fails_without_skipping_rest() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let present = temp_dir.path().join("LICENSE");
        std::fs::write(&present, "MIT").unwrap();
        let missing = temp_dir.path().join("dist/index.js");

        let launcher = FakeLauncher::new().respond("node", true, "v20.0.0", "");

        let items = vec![
            ChecklistItem::file_exists(&missing, "built entry point"),
            ChecklistItem::file_exists(&present, "license file"),
            ChecklistItem::shell_command("node", &["--version"], "node available"),
        ];

        let report = validate(&items, &launcher);
        assert_eq!(report.failed, 1);
        assert_eq!(report.passed, 2);
        // every item still shows up in the results, in order
        assert_eq!(report.results.len(), 3);
        assert!(report.results[0].1.is_fail());
        assert!(!report.results[1].1.is_fail());
        assert!(!report.results[2].1.is_fail());
    }

    #[test]
    fn test_dirty_git_tree_is_warning_only() {
        let launcher = FakeLauncher::new().respond("git", true, " M src/lib.rs\n", "");

        let items = vec![ChecklistItem::git_clean("working tree clean")];
        let report = validate(&items, &launcher);

        assert_eq!(report.failed, 0);
        assert_eq!(report.passed, 1);
        assert!(matches!(report.results[0].1, Outcome::Warn { .. }));
    }

    #[test]
    fn test_git_invocation_error_is_failure() {
        let launcher = FakeLauncher::new();

        let items = vec![ChecklistItem::git_clean("working tree clean")];
        let report = validate(&items, &launcher);

        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_shell_failure_captures_message() {
        let launcher = FakeLauncher::new().respond("npm", false, "", "npm ERR! not logged in\n");

        let items = vec![ChecklistItem::shell_command(
            "npm",
            &["whoami"],
            "npm login status",
        )];
        let report = validate(&items, &launcher);

        assert_eq!(report.failed, 1);
        match &report.results[0].1 {
            Outcome::Fail { reason } => assert!(reason.contains("not logged in")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_manifest_field_items() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"name": "pkg", "version": "1.0.0", "bin": {"pkg": "x.js"}, "files": ["dist"]}"#,
        )
        .unwrap();

        let launcher = FakeLauncher::new();
        let items = vec![
            ChecklistItem::manifest_field(
                &path,
                ManifestCheck::NameEquals("pkg".to_string()),
                "package name matches",
            ),
            ChecklistItem::manifest_field(
                &path,
                ManifestCheck::BinEntry("missing-bin".to_string()),
                "bin entry present",
            ),
        ];

        let report = validate(&items, &launcher);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_pack_output_size_reported() {
        let launcher = FakeLauncher::new().respond(
            "npm",
            true,
            "npm notice package: pkg@1.0.0\nnpm notice package size:  24.5 kB\n",
            "",
        );

        let items = vec![ChecklistItem::shell_command(
            "npm",
            &["pack", "--dry-run"],
            "pack dry run",
        )];
        let report = validate(&items, &launcher);

        match &report.results[0].1 {
            Outcome::Pass { detail: Some(d) } => assert_eq!(d, "package size: 24.5 kB"),
            other => panic!("expected pass with size detail, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_package_size() {
        let output = "npm notice name: pkg\nnpm notice package size:  1.2 MB\nnpm notice total files: 42\n";
        assert_eq!(extract_package_size(output).as_deref(), Some("1.2 MB"));
        assert_eq!(extract_package_size("v20.0.0"), None);
    }
}
