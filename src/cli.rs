use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "storage-layout-compare")]
#[command(
    version,
    about = "Compare smart contract storage layouts to detect shifted slots and storage collisions"
)]
#[command(
    long_about = "storage-layout-compare joins a local and a remote storage layout report on \
(slot, offset) and lists local variables whose position has no remote counterpart (new or \
shifted) and positions whose declared type changed (potential storage collisions).\n\n\
Reports are the pretty tables printed by `forge inspect <contract> storage`.\n\n\
Example:\n  storage-layout-compare --local local.txt --remote remote.txt"
)]
pub struct Cli {
    /// Local storage layout report
    #[arg(long, value_name = "PATH")]
    pub local: PathBuf,

    /// Remote (deployed) storage layout report
    #[arg(long, value_name = "PATH")]
    pub remote: PathBuf,
}
