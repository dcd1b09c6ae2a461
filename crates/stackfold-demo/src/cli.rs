//! Command-line surface.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Drive the stackfold stack and transforms from the command line.
///
/// With no subcommand, runs the walkthrough: the stack scenario followed by
/// the words scenario.
#[derive(Debug, Parser)]
#[command(name = "stackfold-demo", version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins
    /// when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// How to print the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// The subcommand to run, falling back to the walkthrough.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Walkthrough)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the built-in stack and words scenarios
    Walkthrough,

    /// Push values onto a stack, pop some of them, then test membership
    Stack {
        /// Values to push, bottom first
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Number of pops to attempt
        #[arg(long, default_value_t = 1)]
        pops: usize,

        /// Value to look for after popping (repeatable)
        #[arg(long = "contains", value_name = "VALUE", allow_negative_numbers = true)]
        probes: Vec<i64>,
    },

    /// Drop excluded words, map the rest to their lengths, and sum them
    Words {
        /// Words to process
        words: Vec<String>,

        /// Word to filter out
        #[arg(long, default_value = "Potato")]
        exclude: String,

        /// Only keep words at least this many bytes long
        #[arg(long, default_value_t = 0)]
        min_len: usize,
    },

    /// Parse every value as an integer and add them up
    Sum {
        /// Integers to add
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
}
