use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use crate::params;

/// Read the selection table and collect candidate fasta filenames from
/// column 8. Lines starting with `#` are comments; rows with fewer than
/// 8 columns are skipped with a warning.
pub fn load_manifest(tsv_file: &Path) -> Result<Vec<String>> {
    let file = File::open(tsv_file)
        .with_context(|| format!("Opening manifest {} failed", tsv_file.display()))?;
    let reader = BufReader::new(file);

    let mut candidates = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line
            .with_context(|| format!("Reading manifest {} failed", tsv_file.display()))?;

        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        match fields.get(params::FNA_FILE_COLUMN) {
            Some(name) => candidates.push(name.to_string()),
            None => warn!(
                "manifest line {}: expected at least {} columns, got {}; row skipped",
                lineno + 1,
                params::FNA_FILE_COLUMN + 1,
                fields.len()
            ),
        }
    }

    Ok(candidates)
}
