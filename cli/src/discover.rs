use std::path::{Path, PathBuf};

use glob::glob;
use regex::Regex;

use crate::error::Result;

/// Collects the freshest fetch of `*.log` files in the log directory.
///
/// Fetched logs are named `{service}-{timestamp}.log`; every file carrying
/// the highest timestamp suffix forms the latest set. When no name carries a
/// parseable suffix, every log file is used. The returned paths are sorted by
/// file name.
pub fn latest_log_set(log_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = log_dir.join("*.log");
    let mut all_logs = Vec::new();
    for entry in glob(&pattern.to_string_lossy())? {
        all_logs.push(entry?);
    }
    if all_logs.is_empty() {
        return Ok(all_logs);
    }

    let suffix_pattern = Regex::new(r"-(\d+)\.log$")?;
    let mut latest_suffix: u64 = 0;
    for path in &all_logs {
        let name = path.to_string_lossy();
        if let Some(captures) = suffix_pattern.captures(&name) {
            if let Ok(suffix) = captures[1].parse::<u64>() {
                latest_suffix = latest_suffix.max(suffix);
            }
        }
    }

    let mut selected = if latest_suffix > 0 {
        let marker = format!("-{latest_suffix}.log");
        all_logs
            .into_iter()
            .filter(|path| path.to_string_lossy().ends_with(&marker))
            .collect()
    } else {
        all_logs
    };
    selected.sort();
    Ok(selected)
}
