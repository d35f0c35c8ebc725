use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "gibbs - Randomized motif discovery in DNA sequences using Gibbs sampling.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to run restarts in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for a shared motif across a set of DNA sequences.
    Run(RunArgs),
    /// Print the consensus and score of an existing motif set.
    Score(ScoreArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    // --- Core Arguments ---
    /// Path to the input sequences (FASTA or one sequence per line).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the winning motifs to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Search Overrides ---
    /// Motif length (k).
    #[arg(short = 'k', long, value_name = "INT")]
    pub motif_length: Option<usize>,

    /// Number of Gibbs iterations per restart (N). Defaults to 100.
    #[arg(short = 'n', long, value_name = "INT")]
    pub iterations: Option<usize>,

    /// Number of independent restarts (R). Defaults to 20.
    #[arg(short = 'r', long, value_name = "INT")]
    pub restarts: Option<usize>,

    /// Expected number of sequences (t); the run fails if the input disagrees.
    #[arg(short = 't', long, value_name = "INT")]
    pub sequence_count: Option<usize>,

    /// Seed for the random number generator, for reproducible runs.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    // --- Output Options ---
    /// Write a CSV summary with one row per restart.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Print each motif with its 0-based offset and source label.
    #[arg(long)]
    pub offsets: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.restarts=50
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to a motif set (FASTA or one motif per line), all motifs of equal length.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_command_parses_short_flags() {
        let cli = Cli::parse_from([
            "gibbs", "run", "-i", "seqs.fa", "-k", "8", "-n", "50", "-r", "5", "--seed", "7",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.input, PathBuf::from("seqs.fa"));
                assert_eq!(args.motif_length, Some(8));
                assert_eq!(args.iterations, Some(50));
                assert_eq!(args.restarts, Some(5));
                assert_eq!(args.seed, Some(7));
                assert!(args.output.is_none());
                assert!(!args.offsets);
            }
            other => panic!("Expected 'run' subcommand, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::parse_from(["gibbs", "score", "-i", "motifs.txt", "-vv", "-j", "2"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.threads, Some(2));
        assert!(matches!(cli.command, Commands::Score(_)));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["gibbs", "-q", "-v", "score", "-i", "m.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_requires_input() {
        assert!(Cli::try_parse_from(["gibbs", "run", "-k", "8"]).is_err());
    }
}
