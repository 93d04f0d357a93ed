use std::path::PathBuf;

use clap::{arg, value_parser, Command};

use crate::params;
use crate::types::CliParams;

pub fn create_cli() -> CliParams {
    let cmd = Command::new("merge-refs")
        .bin_name("merge-refs")
        .version(params::VERSION)
        .about(
            "Merge downloaded reference genomes into one single fasta file.\n\
             Contigs are delimited by a line of N's; plasmid records are dropped.\n\n\
             merge-refs -i {fna_dir} -t {selection_tsv} -o {merged_fasta}",
        )
        .args(&[
            arg!(-i --input_dir <PATH> "Directory where the gzip-compressed fasta files are located")
                .value_parser(value_parser!(PathBuf)),
            arg!(-o --output_file <PATH> "Path of the merged output file")
                .value_parser(value_parser!(PathBuf)),
            arg!(-t --tsv_file <PATH> "Selection table (tsv); column 8 holds the fasta file name")
                .value_parser(value_parser!(PathBuf)),
        ]);

    parse_cmd(cmd)
}

pub fn parse_cmd(cmd: Command) -> CliParams {
    let matches = cmd.get_matches();

    CliParams {
        input_dir: matches
            .get_one::<PathBuf>("input_dir")
            .expect("required by clap")
            .clone(),
        out_file: matches
            .get_one::<PathBuf>("output_file")
            .expect("required by clap")
            .clone(),
        tsv_file: matches
            .get_one::<PathBuf>("tsv_file")
            .expect("required by clap")
            .clone(),
    }
}
