use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone)]
pub enum Command {
    Fetch {
        input_path: String,
        max_concurrent: Option<usize>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "mediagrab",
    version,
    about = "Batch-download media files referenced by a CSV export, deduplicating identical content"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Extract media URLs from a CSV export and download them
    Fetch {
        #[arg(
            short = 'i',
            long = "input",
            value_name = "FILE",
            help = "CSV export to extract media URLs from"
        )]
        input: String,

        #[arg(
            short = 'n',
            long = "max-concurrent",
            value_name = "N",
            help = "Overrides the adaptive concurrency limit"
        )]
        max_concurrent: Option<usize>,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = match cli.command {
        CliCommand::Fetch {
            input,
            max_concurrent,
        } => Command::Fetch {
            input_path: input,
            max_concurrent,
        },
    };

    Args { command, log_level }
}
