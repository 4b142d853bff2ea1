//! Static config example generator
//!
//! Writes the bundled set of example client configs plus a README into an
//! output directory. The examples are built through the synthesizer so they
//! never drift from what the wizard produces.

use crate::config::{
    self, Client, ConfigChoice, InstallMethod, McpConfig, ModelSelection, Platform, SERVER_NAME,
};
use crate::{Context, Result};
use colored::Colorize;
use std::collections::HashMap;
use std::path::Path;

const CONFIG_README: &str = include_str!("../templates/mcp_configs_readme.md");

pub fn run(output: &Path) -> Result<()> {
    std::fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))?;

    println!("{}", "🚀 Generating MCP config examples...\n".cyan());

    for (filename, config) in bundled_configs() {
        config.write_to_file(&output.join(filename))?;
        println!("{}", format!("✅ Generated: {}", filename).green());
    }

    let readme_path = output.join("README.md");
    std::fs::write(&readme_path, CONFIG_README)
        .with_context(|| format!("failed to write {}", readme_path.display()))?;
    println!("{}", "✅ Generated: README.md".green());

    println!(
        "\n{}",
        format!("🎉 Configs written to: {}", output.display()).green()
    );

    Ok(())
}

pub fn bundled_configs() -> Vec<(&'static str, McpConfig)> {
    let choice = |install, models| ConfigChoice {
        client: Client::Other,
        install,
        models,
        api_key: None,
    };

    let cursor = config::synthesize(
        &choice(InstallMethod::Npx, Some(ModelSelection::DallE3)),
        Platform::Unix,
    );

    let claude = config::synthesize(&choice(InstallMethod::Npx, None), Platform::Unix);

    // The local-script examples ship with the two most used models
    let mut local_unix =
        config::synthesize(&choice(InstallMethod::LocalScript, None), Platform::Unix);
    local_unix
        .args
        .extend(["--models", "dall-e-3", "gpt-image-1"].map(String::from));

    let mut local_windows =
        config::synthesize(&choice(InstallMethod::LocalScript, None), Platform::Windows);
    local_windows
        .args
        .extend(["--models", "dall-e-3", "gpt-image-1"].map(String::from));

    let mut advanced = McpConfig {
        mcp_servers: HashMap::new(),
    };
    advanced.mcp_servers.insert(
        "imagegen-dalle3".to_string(),
        config::synthesize(
            &choice(InstallMethod::Npx, Some(ModelSelection::DallE3)),
            Platform::Unix,
        ),
    );
    advanced.mcp_servers.insert(
        "imagegen-gpt".to_string(),
        config::synthesize(
            &choice(InstallMethod::Npx, Some(ModelSelection::GptImage1)),
            Platform::Unix,
        ),
    );

    vec![
        (
            "cursor-zero-install.json",
            McpConfig::for_server(SERVER_NAME, cursor),
        ),
        (
            "claude-desktop-zero-install.json",
            McpConfig::for_server(SERVER_NAME, claude),
        ),
        (
            "local-script-unix.json",
            McpConfig::for_server(SERVER_NAME, local_unix),
        ),
        (
            "local-script-windows.json",
            McpConfig::for_server(SERVER_NAME, local_windows),
        ),
        ("advanced-multi-model.json", advanced),
    ]
}
