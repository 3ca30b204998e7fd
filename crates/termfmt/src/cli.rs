use clap::{Parser, Subcommand};
use log::LevelFilter;
use terminal_format::DEFAULT_TIMEZONE;

/// Print timestamped, colour-tagged console lines
#[derive(Parser, Debug)]
#[command(name = "termfmt", version, about)]
pub struct Cli {
    /// IANA time zone used for the timestamp, e.g. "UTC" or "America/New_York"
    #[arg(
        short,
        long,
        global = true,
        env = "TERMFMT_TIMEZONE",
        default_value = DEFAULT_TIMEZONE
    )]
    pub timezone: String,

    /// Print without colour codes. Severity lines keep markup as written,
    /// `render` prints the markup-free text
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print an INFO line to stdout
    Info { text: String },

    /// Print an ERROR line to stderr
    Error {
        text: String,

        /// Details printed gray on the next line
        #[arg(short, long)]
        debug: Option<String>,
    },

    /// Print a WARNING line to stdout
    Warning { text: String },

    /// Expand colour markup without adding a timestamp
    Render { text: String },

    /// Remove colour codes from TEXT, or from each line of stdin
    Strip { text: Option<String> },
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
