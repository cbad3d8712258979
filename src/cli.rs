use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Dockcraft - declarative multi-server container deployments
#[derive(Parser, Debug)]
#[command(name = "dockcraft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Working directory holding data.json and the rendered tree
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Color output: auto, always, never
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create data.json and render the deployment tree
    Create {
        /// Create a proxy network and collect several services
        #[arg(short, long, value_name = "NAME")]
        network: Option<String>,
    },

    /// List, add, remove or change services in data.json
    Update {
        /// Service to act on (asked for when omitted)
        #[arg(short, long)]
        service: Option<String>,

        /// Add a service
        #[arg(short, long)]
        add: bool,

        /// Remove a service
        #[arg(short, long)]
        remove: bool,

        /// Change a service
        #[arg(short, long)]
        change: bool,
    },

    /// Render the deployment tree from data.json
    Build,

    /// Create and start the containers
    Up {
        /// Stay attached to the container output
        #[arg(long)]
        attached: bool,
    },

    /// Stop and remove the containers
    Down {
        /// Also remove named volumes
        #[arg(long)]
        volumes: bool,
    },

    /// Start existing containers
    Start,

    /// Stop running containers
    Stop,

    /// Archive each running server's data directory
    Backup,

    /// Open a shell inside a server's container
    Shell {
        /// Service whose container to enter
        service: String,
    },
}
