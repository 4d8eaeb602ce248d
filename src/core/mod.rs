pub mod merge;

pub use crate::utils::error::Result;
pub use merge::{merge, MergeStats};
