use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdblocks::{Config, registry_with_config, render_page};

#[derive(Parser)]
#[command(name = "mdblocks")]
#[command(about = "Expand custom diagram blocks in Markdown into HTML")]
struct Cli {
    /// Input Markdown file
    #[arg(required_unless_present = "styles")]
    input: Option<PathBuf>,

    /// Output HTML file (defaults to input name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the aggregated stylesheet and exit
    #[arg(long)]
    styles: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // An explicit --config must load; the default path silently falls
    // back to defaults, like missing config in the preview pipeline.
    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(1);
            }
        },
        None => Config::load_or_default(Path::new("mdblocks.toml")),
    };

    let registry = registry_with_config(&config);

    if cli.styles {
        print!("{}", registry.all_styles());
        return ExitCode::SUCCESS;
    }

    let Some(input) = cli.input else {
        eprintln!("Error: no input file given");
        return ExitCode::from(1);
    };

    let markdown = match fs::read_to_string(&input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {e}", input.display());
            return ExitCode::from(1);
        }
    };

    let page = render_page(&markdown, &registry, &config);

    let output = cli.output.unwrap_or_else(|| input.with_extension("html"));

    if let Err(e) = fs::write(&output, page) {
        eprintln!("Error writing {}: {e}", output.display());
        return ExitCode::from(1);
    }

    println!("Created {}", output.display());
    ExitCode::SUCCESS
}
