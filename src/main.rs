use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use favforge::GeneratorConfig;

/// Generate favicon.ico, apple-touch-icon.png and app icons for the website
#[derive(Parser, Debug)]
#[command(name = "favforge", version, about)]
struct Cli {
    /// Existing directory that receives the generated files
    #[arg(long, default_value = "website")]
    out_dir: PathBuf,

    /// Increase diagnostic logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = GeneratorConfig {
        out_dir: cli.out_dir,
    };

    let renderer = favforge::new_renderer().context("Failed to set up the SVG renderer")?;
    favforge::generate_icons(&renderer, &config)
        .with_context(|| format!("Failed to generate icons in {}", config.out_dir.display()))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error generating icons: {:#}", e);
        std::process::exit(1);
    }
}
