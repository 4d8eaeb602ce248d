pub mod config;
pub mod core;
pub mod utils;

pub use config::MergeConfig;
pub use core::merge::{merge, MergeStats};
pub use utils::error::{MergeError, Result};
