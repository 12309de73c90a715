use std::env;
use std::path::PathBuf;

use shopgen_generate::{GenerateOptions, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut options = GenerateOptions::default();
    if let Some(out_dir) = env::args().nth(1) {
        options.out_dir = PathBuf::from(out_dir);
    }

    let result = GenerationEngine::new(options).run()?;
    println!("out_dir={}", result.out_dir.display());
    Ok(())
}
