use anyhow::{anyhow, Context};
use react_dts_compiler::CompileOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "react-dts.config.json";

/// react-dts configuration file format
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace the rendering library is imported under
    #[serde(default)]
    pub library: Option<String>,

    /// Module the rendering library is imported from
    #[serde(default)]
    pub library_module: Option<String>,

    /// One level of indentation in the emitted declaration
    #[serde(default)]
    pub indent: Option<String>,
}

impl Config {
    /// Load config from `path`, or from the default file in `cwd`.
    ///
    /// A missing default file yields the default config; a missing explicit
    /// path is an error.
    pub fn load(cwd: &Path, path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(path) => {
                let path = cwd.join(path);
                if !path.exists() {
                    return Err(anyhow!("Config file does not exist: {}", path.display()));
                }
                path
            }
            None => PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME),
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    /// Compile options with this config layered over the defaults
    pub fn compile_options(&self) -> CompileOptions {
        let mut options = CompileOptions::default();
        if let Some(library) = &self.library {
            options.library = library.clone();
        }
        if let Some(library_module) = &self.library_module {
            options.library_module = library_module.clone();
        }
        if let Some(indent) = &self.indent {
            options.indent = indent.clone();
        }
        options
    }
}
