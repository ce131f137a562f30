mod commands;
mod config;

use clap::Parser;
use colored::Colorize;
use commands::{generate, GenerateArgs};
use std::path::PathBuf;

/// react-dts - TypeScript declarations for React class components
#[derive(Parser, Debug)]
#[command(name = "react-dts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() {
    // Diagnostics go to stderr; stdout carries only the declaration
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if let Err(err) = generate(cli.args, &cwd) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
