use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use mcpgen::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcpgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Developer tooling for the imagegen MCP server", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive configuration wizard
    Wizard,

    /// Write the bundled example configs
    Generate {
        /// Output directory
        #[arg(short, long, default_value = "examples/mcp-configs")]
        output: PathBuf,
    },

    /// Run the pre-publish checklist
    Check {
        /// Project directory to check
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Wizard => {
            mcpgen::cli::wizard::run()?;
        }

        Commands::Generate { output } => {
            mcpgen::cli::generate::run(&output)?;
        }

        Commands::Check { dir } => {
            let report = mcpgen::cli::check::run(&dir)?;
            if report.failed > 0 {
                std::process::exit(1);
            }
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "mcpgen", &mut io::stdout());
        }
    }

    Ok(())
}
