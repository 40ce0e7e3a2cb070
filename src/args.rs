use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

/// Number, name and copy sound files for the alarm clock.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opts {
    /// Config file to use instead of the one in the config directory
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Log debug output
    #[clap(short, long, global = true)]
    pub verbose: bool,
    /// Do not open exported files or copy destinations afterwards
    #[clap(long, global = true)]
    pub no_open: bool,
    #[clap(subcommand)]
    pub action: Option<Action>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    /// Edit the sound list interactively
    Interactive {
        /// Sound files or directories to start with
        files: Vec<String>,
    },
    /// Write the sound list of the given files as JSON
    Export {
        #[clap(required = true)]
        files: Vec<String>,
        #[clap(short, long)]
        output: String,
    },
    /// Copy the given files as 0001.mp3, 0002.mp3, ... into a directory
    Copy {
        #[clap(required = true)]
        files: Vec<String>,
        #[clap(short, long)]
        destination: String,
    },
}

impl Opts {
    pub fn action(&self) -> Action {
        self.action
            .clone()
            .unwrap_or(Action::Interactive { files: vec![] })
    }
}
