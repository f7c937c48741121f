use std::process;
use clap::Parser;

#[macro_use]
extern crate log;

use anyhow::Result;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;


/// Parse command line arguments and run `iqodds::run()`
fn main() -> Result<()> {
    // ----------------------------- Run CLI Parser
    let cli = parser::Cli::parse();

    // ----------------------------- Init logger.
    let verbosity = if cli.quiet {0} else {cli.verbose + 1};
    logger::Logger::init(verbosity);

    // ----------------------------- unpack Cli and run the appropriate modules.
    if let Err(e) = iqodds::run(&cli) {
        error!("{:?}", e);
        process::exit(1);
    };

    // ----------------------------- Serialize command line arguments of successful runs.
    if let Err(e) = cli.serialize() {
        error!("{:?}", e);
        process::exit(1);
    };

    Ok(())
}
