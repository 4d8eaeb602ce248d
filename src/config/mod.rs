use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

/// Run configuration. The defaults reproduce the original hard-coded
/// behavior: merge every `.md` file of the working directory into
/// `destino.gift`.
#[derive(Debug, Clone, Parser)]
#[command(name = "quiz-merge")]
#[command(about = "Merge quiz/question files into one combined document")]
pub struct MergeConfig {
    /// Directory whose direct entries are scanned (non-recursive)
    #[arg(long, default_value = "./")]
    pub source_dir: String,

    /// Output file, created or truncated on every run
    #[arg(long, default_value = "destino.gift")]
    pub dest_file: String,

    /// Only entries whose name ends with this suffix are merged
    #[arg(long, default_value = ".md")]
    pub suffix: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for MergeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source_dir", &self.source_dir)?;
        validation::validate_path("dest_file", &self.dest_file)?;
        validation::validate_non_empty_string("suffix", &self.suffix)?;
        Ok(())
    }
}
