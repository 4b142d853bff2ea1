// Mcpgen - developer tooling for the imagegen MCP server
// Generates client configs and runs the pre-publish readiness checklist

pub mod checklist;
pub mod cli;
pub mod config;
pub mod manifest;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use checklist::{ChecklistItem, Outcome, Severity, ValidationReport};
pub use config::{ConfigChoice, McpConfig, Platform, ServerEntry};
