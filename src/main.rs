use log::info;

use merge_refs::{merge, types, utils};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli_params = utils::create_cli();
    let merge_params = types::MergeParams::new(&cli_params);

    match merge::merge(&merge_params) {
        Ok(stats) => {
            info!(
                "Merged {} files ({} missing): {} contigs kept, {} plasmids dropped",
                stats.files_merged, stats.files_missing, stats.contig_count, stats.plasmid_count
            );
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
