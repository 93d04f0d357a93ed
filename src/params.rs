pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 0-indexed manifest column holding the fasta file name (column 8 of the
/// selection table produced by the upstream reference-selection step).
pub const FNA_FILE_COLUMN: usize = 7;

/// Substring marking a contig as a plasmid record (matched case-insensitively).
pub const PLASMID_MARKER: &str = "plasmid";
