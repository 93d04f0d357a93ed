use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::bufread::MultiGzDecoder;
use log::info;

use crate::params;
use crate::types::*;
use crate::{manifest, resolve};

/// Merge every resolved manifest file into one plaintext fasta.
pub fn merge(merge_params: &MergeParams) -> Result<MergeStats> {
    let candidates = manifest::load_manifest(&merge_params.tsv_file)?;
    let resolved = resolve::resolve_files(&merge_params.input_dir, &candidates);

    if resolved.missed_count > 0 {
        println!("{} are missing!", resolved.missed_count);
    }

    let out_file = File::create(&merge_params.out_file).with_context(|| {
        format!(
            "Creating output file {} failed",
            merge_params.out_file.display()
        )
    })?;
    let mut writer = BufWriter::new(out_file);

    info!("Start merging {} files...", resolved.files.len());

    let n_files = resolved.files.len();
    let mut stats = MergeStats {
        files_missing: resolved.missed_count,
        ..MergeStats::default()
    };

    for (i, (_, path)) in resolved.files.iter().enumerate() {
        let file_stats = merge_one(path, &mut writer)
            .with_context(|| format!("Merging {} failed", path.display()))?;

        println!("added {} [{}/{}]", path.display(), i + 1, n_files);
        println!(
            "{} seqs\t{} plasmids\tall seqs written delimited by a line of N's, all plasmids are ignored",
            file_stats.contig_count, file_stats.plasmid_count
        );

        stats.files_merged += 1;
        stats.contig_count += file_stats.contig_count;
        stats.plasmid_count += file_stats.plasmid_count;
    }

    writer.flush().context("Flushing merged output failed")?;
    println!("merged file written to {}", merge_params.out_file.display());

    Ok(stats)
}

/// Stream one gzip-compressed fasta into the output.
///
/// The first non-plasmid header is written verbatim. Every later non-plasmid
/// header is replaced by a line of N's sized from the first sequence line of
/// the file, so all kept contigs fold into a single record. Plasmid contigs
/// (header containing "plasmid", any case) are dropped wholesale.
pub fn merge_one(path: &Path, writer: &mut impl Write) -> Result<FileMergeStats> {
    let file =
        File::open(path).with_context(|| format!("Opening {} failed", path.display()))?;
    let mut reader = BufReader::new(MultiGzDecoder::new(BufReader::new(file)));

    let mut stats = FileMergeStats::default();
    let mut line_len = 0;
    let mut is_plasmid = false;

    let mut line = String::new();
    loop {
        line.clear();
        let n_read = reader
            .read_line(&mut line)
            .with_context(|| format!("Reading {} failed", path.display()))?;
        if n_read == 0 {
            break;
        }

        if line.contains('>') {
            is_plasmid = line.to_lowercase().contains(params::PLASMID_MARKER);
            if is_plasmid {
                stats.plasmid_count += 1;
                continue;
            }
            if stats.contig_count == 0 {
                writer.write_all(line.as_bytes())?;
            } else {
                // later headers are dropped; only the separator marks the boundary
                writeln!(writer, "{}", "N".repeat(line_len))?;
            }
            stats.contig_count += 1;
        } else if !is_plasmid {
            writer.write_all(line.as_bytes())?;
            if line_len == 0 {
                // newline excluded; fixed for the rest of the file
                line_len = line.len() - 1;
            }
        }
    }

    Ok(stats)
}
