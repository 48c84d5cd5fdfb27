use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Printed instead of a clap error when the positional arguments are wrong.
pub const USAGE: &str = "Usage: word-ladder <DICTIONARY> <START> <TARGET>";

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds every shortest word ladder between two dictionary words.", long_about = None)]
pub struct Cli {
    /// Dictionary file with one word per line
    pub dictionary: PathBuf,

    /// Word the ladder starts from
    pub start: String,

    /// Word the ladder has to reach
    pub target: String,

    /// Suppress verbose logging, only printing the result.
    #[clap(short, long)]
    pub quiet: bool,

    /// File receiving the verbose log.
    #[clap(long, default_value = "word-ladder.log")]
    pub log_file: PathBuf,

    /// Write the result to this file instead of stdout.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

/// What `main` should do with the command line.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// Wrong arguments: print `USAGE` and exit successfully.
    Usage,
}

impl Cli {
    /// Parses `args`, turning argument mistakes into `Invocation::Usage`.
    /// Help and version requests come back as the clap error to display.
    pub fn from_args<I, T>(args: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(Invocation::Run(cli)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Err(e)
            }
            Err(_) => Ok(Invocation::Usage),
        }
    }

    /// Start word, normalized the same way as dictionary entries.
    pub fn start_word(&self) -> String {
        self.start.trim().to_lowercase()
    }

    /// Target word, normalized the same way as dictionary entries.
    pub fn target_word(&self) -> String {
        self.target.trim().to_lowercase()
    }
}
