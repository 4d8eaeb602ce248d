use std::path::Path;

use anyhow::Context;
use clap::Parser;
use quiz_merge::utils::{logger, validation::Validate};
use quiz_merge::{merge, MergeConfig};

fn main() -> anyhow::Result<()> {
    let config = MergeConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting quiz-merge");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let stats = merge(
        Path::new(&config.source_dir),
        Path::new(&config.dest_file),
        &config.suffix,
    )
    .with_context(|| {
        format!(
            "failed to merge '{}' files from {} into {}",
            config.suffix, config.source_dir, config.dest_file
        )
    })?;

    tracing::info!("✅ Merge completed successfully!");
    println!(
        "✅ Merged {} files ({} bytes) into {}",
        stats.files_merged, stats.bytes_written, config.dest_file
    );

    Ok(())
}
