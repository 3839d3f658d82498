use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "giftlog",
    version,
    about = "Scan streamer gift logs and summaries, and manage streamer profiles",
    after_help = "Recognized files: <uid>_<YYYY>-<M>-<D>.log (daily logs) and \
                  <uid>_<YYYY>-<M>.csv (monthly summaries). Anything else is ignored."
)]
pub struct Cli {
    /// Installation root holding config/, data/, output/ and logs/
    /// (default: current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the config/, data/streamers/, output/ and logs/ directories.
    Init,

    /// List recognized data files under a file or directory.
    ///
    /// Directories are walked recursively. Results are sorted by file name.
    Scan {
        /// File or directory to scan (default: <root>/data/streamers)
        path: Option<PathBuf>,
        /// Group records by streamer UID
        #[arg(long)]
        group: bool,
    },

    /// Scan, then make sure every UID seen has a streamer profile.
    Import {
        /// File or directory to scan (default: <root>/data/streamers)
        path: Option<PathBuf>,
    },

    /// Manage the streamer registry
    Streamers {
        #[command(subcommand)]
        command: StreamersCommand,
    },
}

#[derive(Subcommand)]
pub enum StreamersCommand {
    /// List all registered streamers
    List,

    /// Show one streamer profile
    Get {
        /// Streamer UID
        uid: String,
    },

    /// Register a streamer, replacing any existing profile for the UID
    Register {
        /// Streamer UID
        uid: String,
        /// Display name (default: placeholder derived from the UID)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Change the display name and/or color of a registered streamer
    Update {
        /// Streamer UID
        uid: String,
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
        /// New color as #RRGGBB
        #[arg(short, long)]
        color: Option<String>,
    },
}
