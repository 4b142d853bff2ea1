//! Tests for the static config example generator

use mcpgen::cli::generate;
use mcpgen::McpConfig;
use tempfile::TempDir;

#[test]
fn test_generate_writes_all_examples() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("mcp-configs");

    generate::run(&output).unwrap();

    for filename in [
        "cursor-zero-install.json",
        "claude-desktop-zero-install.json",
        "local-script-unix.json",
        "local-script-windows.json",
        "advanced-multi-model.json",
        "README.md",
    ] {
        assert!(output.join(filename).exists(), "missing {}", filename);
    }
}

#[test]
fn test_generated_configs_parse_back() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("mcp-configs");

    generate::run(&output).unwrap();

    let content = std::fs::read_to_string(output.join("cursor-zero-install.json")).unwrap();
    let config: McpConfig = serde_json::from_str(&content).unwrap();

    let entry = &config.mcp_servers["imagegen-mcp"];
    assert_eq!(entry.command, "npx");
    assert_eq!(
        entry.args,
        vec!["@lupinlin1/imagegen-mcp", "--models", "dall-e-3"]
    );
    assert_eq!(
        entry.env.get("OPENAI_API_KEY").map(String::as_str),
        Some("your_openai_api_key_here")
    );
}

#[test]
fn test_local_script_examples_carry_cwd() {
    for (filename, config) in generate::bundled_configs() {
        let entry_has_cwd = config
            .mcp_servers
            .values()
            .any(|entry| entry.cwd.is_some());
        let is_local = filename.starts_with("local-script");
        assert_eq!(entry_has_cwd, is_local, "unexpected cwd in {}", filename);
    }
}

#[test]
fn test_advanced_example_splits_models() {
    let configs = generate::bundled_configs();
    let (_, advanced) = configs
        .iter()
        .find(|(name, _)| *name == "advanced-multi-model.json")
        .unwrap();

    assert_eq!(advanced.mcp_servers.len(), 2);
    let dalle = &advanced.mcp_servers["imagegen-dalle3"];
    assert!(dalle.args.contains(&"dall-e-3".to_string()));
    let gpt = &advanced.mcp_servers["imagegen-gpt"];
    assert!(gpt.args.contains(&"gpt-image-1".to_string()));
}
