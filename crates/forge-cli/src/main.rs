mod cli;
mod commands;
mod config;
mod prompter;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::Config;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("forge=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    // Load config
    let config = if args.config.exists() {
        match Config::load(&args.config) {
            Ok(c) => {
                info!("Loaded config from {:?}", args.config);
                c
            }
            Err(e) => {
                warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    } else {
        debug!("No config at {:?}, using defaults", args.config);
        Config::default()
    };
    let output_dir = config.output_dir().to_path_buf();

    match args.command {
        Command::Strings {
            file,
            text,
            query,
            json,
        } => commands::strings::run(&file, &text.apply(config.text), query.as_deref(), json),
        Command::Carve { file, json } => commands::carve::run(&file, json),
        Command::Extract {
            file,
            id,
            output_dir: dir,
        } => commands::extract::run(&file, id, dir.as_deref().unwrap_or(&output_dir)),
        Command::Replace {
            file,
            id,
            replacement,
            yes,
            output,
        } => commands::replace::run(&file, id, &replacement, yes, output, &output_dir),
        Command::Memory { file, text, output } => {
            commands::memory::run(&file, &text.apply(config.text), output, &output_dir)
        }
        Command::Repack {
            file,
            memory,
            text,
            output,
        } => commands::repack::run(
            &file,
            &memory,
            &text.apply(config.text),
            output,
            &output_dir,
        ),
        Command::Hexdump { file, offset, size } => commands::hexdump::run(&file, offset, size),
    }
}
