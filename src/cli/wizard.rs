//! Interactive config wizard
//!
//! Asks four questions (client, install method, models, API key), shows the
//! synthesized config, and optionally saves it to a timestamped file. Answers
//! are read as raw strings so unrecognized input falls through the same
//! defaults as the synthesizer.

use crate::config::{
    self, Client, ConfigChoice, InstallMethod, McpConfig, ModelSelection, Platform, SERVER_NAME,
};
use crate::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::path::Path;

pub fn run() -> Result<()> {
    println!("\n{}", "🚀 imagegen-mcp quick config".bold());
    println!("{}", "=====================================\n".blue());

    println!("{}", "1. Pick your MCP client:".green());
    println!("   1) Cursor editor");
    println!("   2) Claude Desktop");
    println!("   3) Another MCP client");
    println!("   4) Custom setup\n");
    let answer: String = Input::new().with_prompt("Choose (1-4)").interact_text()?;
    let client = Client::from_answer(&answer);

    println!("\n{}", "2. Pick an install method:".green());
    println!("   1) npx auto-download (recommended), nothing to install");
    println!("   2) Local script, needs the project checkout");
    println!("   3) Global install, needs npm install -g\n");
    let answer: String = Input::new().with_prompt("Choose (1-3)").interact_text()?;
    let install = InstallMethod::from_answer(&answer);

    println!("\n{}", "3. Pick the OpenAI models:".green());
    println!("   1) DALL-E 3 (recommended)");
    println!("   2) GPT-Image-1");
    println!("   3) DALL-E 2");
    println!("   4) All models\n");
    let answer: String = Input::new().with_prompt("Choose (1-4)").interact_text()?;
    let models = ModelSelection::from_answer(&answer);

    println!("\n{}", "4. OpenAI API key:".green());
    let mut api_key = None;
    let has_key = Confirm::new()
        .with_prompt("Do you already have an OpenAI API key?")
        .default(false)
        .interact()?;
    if has_key {
        let input: String = Input::new()
            .with_prompt("API key (leave empty to keep the placeholder)")
            .allow_empty(true)
            .interact_text()?;
        if !input.trim().is_empty() {
            api_key = Some(input.trim().to_string());
        }
    } else {
        println!(
            "{}",
            "   💡 Get one at https://platform.openai.com/api-keys".yellow()
        );
    }

    let choice = ConfigChoice {
        client,
        install,
        models,
        api_key,
    };
    let entry = config::synthesize(&choice, Platform::current());
    let has_real_key = entry.env.get(config::API_KEY_VAR).map(String::as_str)
        != Some(config::API_KEY_PLACEHOLDER);

    let mcp_config = McpConfig::for_server(SERVER_NAME, entry);
    let json = mcp_config.to_pretty_json()?;

    println!("\n{}", "✨ Generated config:".green());
    println!("{}", "=".repeat(50).blue());
    println!("{}", json);
    println!("{}", "=".repeat(50).blue());

    let save = Confirm::new()
        .with_prompt("Save to a file?")
        .default(false)
        .interact()?;
    if save {
        let filename = format!("mcp-config-{}.json", chrono::Utc::now().timestamp_millis());
        mcp_config.write_to_file(Path::new(&filename))?;
        println!("{}", format!("✅ Config saved to: {}", filename).green());
    }

    print_instructions(client);

    if !has_real_key {
        println!("\n{}", "⚠️  Remember to replace the API key!".red());
    }

    Ok(())
}

fn print_instructions(client: Client) {
    println!("\n{}", "📋 Next steps:".bold());
    match client {
        Client::Cursor => {
            println!("1. In Cursor press Ctrl/Cmd + ,");
            println!("2. Search for \"MCP\"");
            println!("3. Click \"Edit in settings.json\"");
            println!("4. Copy the config above into the mcpServers section");
            println!("5. Save and restart Cursor");
        }
        Client::ClaudeDesktop => {
            println!("1. Find the Claude Desktop config file:");
            println!("   macOS: ~/Library/Application Support/Claude/claude_desktop_config.json");
            println!("   Windows: %APPDATA%\\Claude\\claude_desktop_config.json");
            println!("2. Add the config above to the file");
            println!("3. Restart Claude Desktop");
        }
        Client::Other | Client::Custom => {
            println!("1. Add the config above to your MCP client configuration");
            println!("2. Restart the client");
        }
    }
}
