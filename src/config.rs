use crate::error::KgResult;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-position ease costs for the ortho split shape, lower is better.
/// Authored once; every ease-sensitive tracker reads the same table.
pub const DEFAULT_EASE_PLACEMENT: &str = concat!("52223  32225", "11112  211113", "22224  42223");

/// Zero-indexed home row of the modeled shape (top = 0).
pub const DEFAULT_HOME_ROW: usize = 1;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessConfig {
    /// Row the fingers rest on; row-distance metrics measure from here.
    #[arg(long, default_value_t = DEFAULT_HOME_ROW)]
    pub home_row: usize,

    /// Ease cost table as a placement string over the same grid shape as the
    /// assessed layout. Digits only; spaces mark the hand gap.
    #[arg(long, default_value = DEFAULT_EASE_PLACEMENT)]
    pub ease_placement: String,
}

impl Default for AssessConfig {
    fn default() -> Self {
        Self {
            home_row: DEFAULT_HOME_ROW,
            ease_placement: DEFAULT_EASE_PLACEMENT.to_string(),
        }
    }
}

impl AssessConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KgResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
