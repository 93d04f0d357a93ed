use std::path::PathBuf;

pub struct CliParams {
    pub input_dir: PathBuf,
    pub out_file: PathBuf,
    pub tsv_file: PathBuf,
}

pub struct MergeParams {
    pub input_dir: PathBuf,
    pub out_file: PathBuf,
    pub tsv_file: PathBuf,
}

impl MergeParams {
    pub fn new(params: &CliParams) -> MergeParams {
        MergeParams {
            input_dir: params.input_dir.clone(),
            out_file: params.out_file.clone(),
            tsv_file: params.tsv_file.clone(),
        }
    }
}

/// Manifest filenames resolved against the input directory. `files` is sorted
/// lexicographically by filename so the processing order is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFiles {
    pub files: Vec<(String, PathBuf)>,
    pub missed_count: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileMergeStats {
    /// Non-plasmid contigs written (the first keeps its header, the rest are
    /// folded in behind an N-separator line).
    pub contig_count: usize,
    pub plasmid_count: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub files_merged: usize,
    pub files_missing: usize,
    pub contig_count: usize,
    pub plasmid_count: usize,
}
