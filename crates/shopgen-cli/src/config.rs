use std::path::{Path, PathBuf};

use shopgen_generate::GenerateOptions;

use crate::CliError;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub out_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub customer_count: Option<u32>,
    pub order_count: Option<u32>,
    pub no_report: bool,
}

/// Load options from an optional TOML file. Missing keys keep their defaults.
pub fn load_options(path: Option<&Path>) -> Result<GenerateOptions, CliError> {
    let Some(path) = path else {
        return Ok(GenerateOptions::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_options(&content)
}

pub fn parse_options(content: &str) -> Result<GenerateOptions, CliError> {
    Ok(toml::from_str(content)?)
}

pub fn apply_overrides(mut options: GenerateOptions, overrides: Overrides) -> GenerateOptions {
    if let Some(out_dir) = overrides.out_dir {
        options.out_dir = out_dir;
    }
    if let Some(seed) = overrides.seed {
        options.seed = seed;
    }
    if let Some(count) = overrides.customer_count {
        options.customer_count = count;
    }
    if let Some(count) = overrides.order_count {
        options.order_count = count;
    }
    if overrides.no_report {
        options.write_report = false;
    }
    options
}
