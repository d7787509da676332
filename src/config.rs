//! Engine configuration with file-backed load and save.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::AdvisorResult;

const TMP_SUFFIX: &str = "tmp";

/// Windows and bounds applied during snapshot collection and caching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Maximum transactions fetched per snapshot, newest first.
    pub transaction_limit: usize,
    /// Trailing months used for burn rate and trend fitting.
    pub trailing_months: u32,
    /// Months of cashflow projection to emit.
    pub projection_months: u32,
    pub cache_capacity: usize,
    pub cache_ttl_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            transaction_limit: 200,
            trailing_months: 6,
            projection_months: 6,
            cache_capacity: 128,
            cache_ttl_secs: 300,
        }
    }
}

impl AdvisorConfig {
    /// Loads the config from disk, falling back to defaults when absent.
    pub fn load(path: &Path) -> AdvisorResult<Self> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the config atomically via a temporary sibling file.
    pub fn save(&self, path: &Path) -> AdvisorResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        let tmp = tmp_path(path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
