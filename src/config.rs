//! MCP client configuration synthesis
//!
//! Maps a small set of wizard answers (client, install method, model
//! selection, API key) to the `mcpServers` entry an MCP client expects.
//! Synthesis is pure: the platform is passed in explicitly instead of being
//! read from the process environment, so the mapping is testable as-is.

use crate::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const PACKAGE_NAME: &str = "@lupinlin1/imagegen-mcp";
pub const BIN_NAME: &str = "imagegen-mcp";
pub const SERVER_NAME: &str = "imagegen-mcp";
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const API_KEY_PLACEHOLDER: &str = "your_openai_api_key_here";

const UNIX_LAUNCHER: &str = "./bin/mcp-imagegen.sh";
const WINDOWS_LAUNCHER: &str = "./bin/mcp-imagegen.cmd";
const UNIX_PROJECT_DIR: &str = "/path/to/imagegen-mcp";
const WINDOWS_PROJECT_DIR: &str = r"C:\path\to\imagegen-mcp";

/// Target platform, passed into synthesis explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// MCP client the config is for. Only affects the usage instructions the
/// wizard prints, never the synthesized record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Client {
    Cursor,
    ClaudeDesktop,
    Other,
    Custom,
}

impl Client {
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim() {
            "1" => Client::Cursor,
            "2" => Client::ClaudeDesktop,
            "3" => Client::Other,
            _ => Client::Custom,
        }
    }
}

/// How the server binary is launched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMethod {
    Npx,
    LocalScript,
    GlobalInstall,
}

impl InstallMethod {
    /// Unrecognized answers fall back to npx rather than erroring, so a
    /// stray answer still produces a working config.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim() {
            "2" => InstallMethod::LocalScript,
            "3" => InstallMethod::GlobalInstall,
            _ => InstallMethod::Npx,
        }
    }
}

/// Which models the server should expose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSelection {
    DallE3,
    GptImage1,
    DallE2,
    All,
}

impl ModelSelection {
    /// Unrecognized answers yield `None`, which leaves the args untouched.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(ModelSelection::DallE3),
            "2" => Some(ModelSelection::GptImage1),
            "3" => Some(ModelSelection::DallE2),
            "4" => Some(ModelSelection::All),
            _ => None,
        }
    }

    /// Model identifiers in the order they are passed to `--models`
    pub fn models(self) -> &'static [&'static str] {
        match self {
            ModelSelection::DallE3 => &["dall-e-3"],
            ModelSelection::GptImage1 => &["gpt-image-1"],
            ModelSelection::DallE2 => &["dall-e-2"],
            ModelSelection::All => &["dall-e-3", "gpt-image-1", "dall-e-2"],
        }
    }
}

/// Everything the wizard collects for one synthesis
#[derive(Debug, Clone)]
pub struct ConfigChoice {
    pub client: Client,
    pub install: InstallMethod,
    pub models: Option<ModelSelection>,
    pub api_key: Option<String>,
}

/// One server entry under `mcpServers`.
///
/// `args` is omitted from the JSON entirely when empty and `cwd` when absent;
/// clients read a missing `args` as "no extra flags".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub command: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    pub env: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

/// MCP configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(rename = "mcpServers")]
    pub mcp_servers: HashMap<String, ServerEntry>,
}

impl McpConfig {
    /// Wrap a single synthesized entry under the given server name
    pub fn for_server(name: &str, entry: ServerEntry) -> Self {
        let mut servers = HashMap::new();
        servers.insert(name.to_string(), entry);
        Self {
            mcp_servers: servers,
        }
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the config to a file in one call
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_pretty_json()?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Synthesize a server entry from the wizard answers.
///
/// Total and deterministic: every choice has a defined mapping and identical
/// choices on the same platform produce identical entries.
pub fn synthesize(choice: &ConfigChoice, platform: Platform) -> ServerEntry {
    let (command, mut args, cwd) = match choice.install {
        InstallMethod::Npx => (
            "npx".to_string(),
            vec![PACKAGE_NAME.to_string()],
            None,
        ),
        InstallMethod::LocalScript => {
            let (launcher, project_dir) = match platform {
                Platform::Unix => (UNIX_LAUNCHER, UNIX_PROJECT_DIR),
                Platform::Windows => (WINDOWS_LAUNCHER, WINDOWS_PROJECT_DIR),
            };
            (launcher.to_string(), Vec::new(), Some(project_dir.to_string()))
        }
        InstallMethod::GlobalInstall => (BIN_NAME.to_string(), Vec::new(), None),
    };

    if let Some(selection) = choice.models {
        args.push("--models".to_string());
        args.extend(selection.models().iter().map(|m| m.to_string()));
    }

    let key = choice
        .api_key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .unwrap_or(API_KEY_PLACEHOLDER);

    let mut env = HashMap::new();
    env.insert(API_KEY_VAR.to_string(), key.to_string());

    ServerEntry {
        command,
        args,
        env,
        cwd,
    }
}
