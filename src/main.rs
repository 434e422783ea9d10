use clap::Parser;
use std::process::ExitCode;

use emojipack_lib::cli::{init_logger, Args};
use emojipack_lib::commands::pack_cmds;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = args.into_config();
    match pack_cmds::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
