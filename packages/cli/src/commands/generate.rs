use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use react_dts_compiler::{generate_with_options, CompileError, CompileOptions};
use react_dts_parser::error::pretty;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to specify --name parameter")]
    MissingName,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Name of the declared module
    #[arg(long)]
    pub name: Option<String>,

    /// Component source file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Namespace the rendering library is imported under (default: React)
    #[arg(long)]
    pub library: Option<String>,

    /// Module the rendering library is imported from (default: react)
    #[arg(long)]
    pub library_module: Option<String>,

    /// Config file (default: react-dts.config.json when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn generate(args: GenerateArgs, cwd: &Path) -> Result<()> {
    let name = args.name.as_deref().ok_or(CliError::MissingName)?;
    let options = resolve_options(&args, cwd)?;
    let (source, file_name) = read_source(&args, cwd)?;

    let output = render(name, &source, &file_name, &options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Defaults, then the config file, then command line flags
fn resolve_options(args: &GenerateArgs, cwd: &Path) -> Result<CompileOptions> {
    let config = Config::load(cwd, args.config.as_deref())?;
    let mut options = config.compile_options();

    if let Some(library) = &args.library {
        options.library = library.clone();
    }
    if let Some(library_module) = &args.library_module {
        options.library_module = library_module.clone();
    }

    Ok(options)
}

/// Source text and the name used for it in diagnostics
fn read_source(args: &GenerateArgs, cwd: &Path) -> Result<(String, String)> {
    match &args.input {
        Some(input) => {
            let path = cwd.join(input);
            let source = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file_name = input
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();
            Ok((source, file_name))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok((source, "<stdin>".to_string()))
        }
    }
}

fn render(name: &str, source: &str, file_name: &str, options: &CompileOptions) -> Result<String> {
    generate_with_options(name, source, options).map_err(|err| match err {
        CompileError::Parse(e) => anyhow!("\n{}", pretty::format_error(&e, file_name, source)),
        other => anyhow::Error::new(other),
    })
}
