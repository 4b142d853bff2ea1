//! Pre-publish checklist runner
//!
//! Runs the fixed readiness checklist for the npm package: expected files,
//! package.json fields, npm environment, git status, and a pack dry run.
//! Exit-code policy lives in main: any hard failure means exit 1.

use crate::checklist::{self, ChecklistItem, Launcher, Outcome, SystemLauncher, ValidationReport};
use crate::config::{BIN_NAME, PACKAGE_NAME};
use crate::manifest::{ManifestCheck, PackageManifest};
use crate::Result;
use colored::Colorize;
use std::path::Path;

struct Section {
    title: &'static str,
    items: Vec<ChecklistItem>,
}

pub fn run(dir: &Path) -> Result<ValidationReport> {
    run_with_launcher(dir, &SystemLauncher)
}

pub fn run_with_launcher(dir: &Path, launcher: &dyn Launcher) -> Result<ValidationReport> {
    println!("\n{}", "🔍 Pre-publish check".blue());
    println!("{}", "=".repeat(50).blue());

    let mut passed = 0;
    let mut failed = 0;
    let mut results = Vec::new();

    for section in sections(dir) {
        println!("\n{}", section.title.yellow());

        let report = checklist::validate(&section.items, launcher);
        for (item, outcome) in &report.results {
            print_result(item, outcome);
        }

        passed += report.passed;
        failed += report.failed;
        results.extend(report.results);
    }

    print_summary(passed, failed);

    Ok(ValidationReport {
        passed,
        failed,
        results,
    })
}

fn sections(dir: &Path) -> Vec<Section> {
    let manifest_path = dir.join("package.json");

    let file_checks = Section {
        title: "📁 Project files:",
        items: vec![
            ChecklistItem::file_exists(&manifest_path, "package config"),
            ChecklistItem::file_exists(dir.join("README.md"), "readme"),
            ChecklistItem::file_exists(dir.join("LICENSE"), "license file"),
            ChecklistItem::file_exists(dir.join("dist/index.js"), "built entry point"),
            ChecklistItem::file_exists(dir.join("bin/imagegen-mcp.js"), "executable entry"),
            ChecklistItem::file_exists(dir.join("bin/mcp-imagegen.sh"), "unix launcher script"),
            ChecklistItem::file_exists(dir.join("bin/mcp-imagegen.cmd"), "windows launcher script"),
        ],
    };

    // A manifest that does not parse is reported as a single failed check
    // instead of failing each field check separately.
    let manifest_items = match PackageManifest::load(&manifest_path) {
        Ok(_) => vec![
            ChecklistItem::manifest_field(
                &manifest_path,
                ManifestCheck::NameEquals(PACKAGE_NAME.to_string()),
                "package name matches",
            ),
            ChecklistItem::manifest_field(
                &manifest_path,
                ManifestCheck::VersionSemver,
                "version follows semver",
            ),
            ChecklistItem::manifest_field(
                &manifest_path,
                ManifestCheck::BinEntry(BIN_NAME.to_string()),
                "bin entry configured",
            ),
            ChecklistItem::manifest_field(
                &manifest_path,
                ManifestCheck::FilesListed,
                "files list configured",
            ),
        ],
        Err(_) => vec![ChecklistItem::manifest_field(
            &manifest_path,
            ManifestCheck::Parses,
            "package.json parses",
        )],
    };

    vec![
        file_checks,
        Section {
            title: "📦 Package manifest:",
            items: manifest_items,
        },
        Section {
            title: "🌐 npm environment:",
            items: vec![
                ChecklistItem::shell_command("node", &["--version"], "node available"),
                ChecklistItem::shell_command("npm", &["--version"], "npm available"),
                ChecklistItem::shell_command("npm", &["whoami"], "npm login status"),
            ],
        },
        Section {
            title: "📝 Git status:",
            items: vec![ChecklistItem::git_clean("working tree clean")],
        },
        Section {
            title: "📦 Pack dry run:",
            items: vec![ChecklistItem::shell_command(
                "npm",
                &["pack", "--dry-run"],
                "npm pack dry run succeeds",
            )],
        },
    ]
}

fn print_result(item: &ChecklistItem, outcome: &Outcome) {
    match outcome {
        Outcome::Pass { detail } => {
            println!("{}", format!("✅ {}", item.description).green());
            if let Some(detail) = detail {
                println!("{}", format!("   {}", detail).blue());
            }
        }
        Outcome::Warn { detail } => {
            println!("{}", format!("⚠️  {}", item.description).yellow());
            println!("{}", format!("   {}", detail).yellow());
        }
        Outcome::Fail { reason } => {
            println!("{}", format!("❌ {}", item.description).red());
            println!("{}", format!("   {}", reason).red());
        }
    }
}

fn print_summary(passed: usize, failed: usize) {
    println!("\n{}", "📊 Results:".blue());
    println!("{}", "=".repeat(50).blue());

    if failed == 0 {
        println!(
            "{}",
            format!("🎉 All checks passed! ({}/{})", passed, passed).green()
        );
        println!("\n{}", "🚀 Ready to publish:".green());
        println!("{}", "   npm login".blue());
        println!("{}", "   npm publish".blue());
    } else {
        println!(
            "{}",
            format!("❌ {} checks failed, {} passed", failed, passed).red()
        );
        println!("{}", "\n🔧 Fix the issues above before publishing".red());
    }
}
