use clap::{Parser, Subcommand};
use doc_index::{config, generate, output, scan};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doc-index")]
#[command(about = "Generate a markdown index of numbered documentation folders")]
#[command(long_about = "\
Generate a markdown index of numbered documentation folders

Directories become categories, markdown files become links, and both are
ordered by their numeric prefix.

Content structure:

  src/
  ├── 1.setup/                 # Category (N.name)
  │   ├── 1.intro.md           # Document (N.name.md)
  │   └── 2.install.md
  ├── 2.tools/
  │   └── 10.terminals.md      # Ordered numerically: 10 after 2
  └── drafts/                  # No number prefix = not indexed

Run with no arguments to regenerate README.md from src/.
Run 'doc-index gen-config' to print a documented docindex.toml.")]
#[command(version)]
struct Cli {
    /// Content directory (overrides the config file)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Index file to write (overrides the config file)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Config file; missing is fine, defaults apply
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate the index file (default)
    Build,
    /// Scan and show what would be indexed, without writing
    Check,
    /// Print the scanned tree as JSON
    Scan,
    /// Print a stock docindex.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Build => {
            let settings = resolve_settings(&cli)?;
            let summary = generate::generate(&settings)?;
            output::print_build_output(&summary, &settings.output);
        }
        Command::Check => {
            let settings = resolve_settings(&cli)?;
            let categories = scan::scan(&settings.source)?;
            output::print_check_output(&categories, &settings.source);
        }
        Command::Scan => {
            let settings = resolve_settings(&cli)?;
            let categories = scan::scan(&settings.source)?;
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
    }

    Ok(())
}

/// Load the config file, then apply command-line overrides.
fn resolve_settings(cli: &Cli) -> Result<config::IndexConfig, config::ConfigError> {
    let mut settings = config::load_config(&cli.config)?;
    if let Some(source) = &cli.source {
        settings.source = source.clone();
    }
    if let Some(output) = &cli.output {
        settings.output = output.clone();
    }
    settings.validate()?;
    Ok(settings)
}
