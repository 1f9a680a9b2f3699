mod bundle;
mod minify;
pub mod print_macros;

use crate::{eprintln_error, eprintln_info};
use crate::ExitStatus;
use clap::Parser;
use std::error;

#[derive(Parser)]
#[clap(version = "0.1", author = "statiolake")]
struct Options {
    #[clap(short, long)]
    quiet: bool,

    #[clap(subcommand)]
    subcommand: SubCommand,
}

#[derive(clap::Subcommand)]
enum SubCommand {
    #[clap(name = "bundle", aliases = &["b"])]
    Bundle(bundle::Bundle),

    #[clap(name = "minify", aliases = &["m"])]
    Minify(minify::Minify),
}

impl SubCommand {
    fn run(self, quiet: bool) -> anyhow::Result<ExitStatus> {
        match self {
            SubCommand::Bundle(cmd) => cmd.run(quiet),
            SubCommand::Minify(cmd) => cmd.run(quiet),
        }
    }
}

pub fn main() {
    let opts = Options::parse();
    match opts.subcommand.run(opts.quiet) {
        Ok(status) => std::process::exit(status.code()),
        Err(e) => {
            eprintln_error!("{}", e);
            print_causes(opts.quiet, &*e);
            std::process::exit(1);
        }
    }
}

fn print_causes(quiet: bool, e: &dyn error::Error) {
    if quiet {
        return;
    }

    if let Some(cause) = e.source() {
        eprintln_info!("due to: {}", cause);
        print_causes(quiet, cause);
    }
}
