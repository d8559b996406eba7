mod config;
mod input;
mod output;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seminalloc_core::Allocator;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "seminalloc",
    version,
    about = "Seminar slot allocation using the household allocation algorithm"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Assign topics to participants from their ranking files
    Assign(AssignArgs),
    /// Create a default config file at ~/.config/seminalloc/config.toml
    Init,
}

#[derive(Parser)]
struct AssignArgs {
    /// A file containing a list of topics, one per line (or a JSON array)
    #[arg(short, long)]
    topic_file: Option<PathBuf>,

    /// A file with the ranking of a single participant.
    /// First line is the participant's name, then "<rank> <topic>" lines.
    #[arg(value_name = "PARTICIPANT_RANKING", required = true)]
    rankings: Vec<PathBuf>,

    /// Seed for the random number generator (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON instead of plain lines
    #[arg(long)]
    json: bool,

    /// Maximum number of improving swaps before giving up.
    /// Default: participants^2 * topics^2.
    #[arg(long)]
    max_swaps: Option<usize>,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/seminalloc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assign(args) => {
            init_tracing(args.verbose);
            run_assign(args);
        }
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default topic file, seed, etc.");
        }
    }
}

fn run_assign(args: AssignArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let cfg = config::load_optional_config(args.config.clone());

    let topic_file = args.topic_file.clone()
        .or(cfg.topic_file)
        .unwrap_or_else(|| {
            bail("No topic file specified. Pass --topic-file or set topic_file in the config file");
        });
    let json = args.json || cfg.json.unwrap_or(false);
    let seed = args.seed
        .or(cfg.seed)
        .unwrap_or_else(|| rand::rng().random());
    let max_swaps = args.max_swaps.or(cfg.max_swaps);

    let topics = input::load_topics(&topic_file);
    let participants = input::load_participants(&args.rankings, &topics);

    info!(
        topics = topics.len(),
        participants = participants.len(),
        seed,
        "starting allocation"
    );

    let allocator = Allocator::new(&topics, &participants).unwrap_or_else(|e| bail(e));
    let allocator = match max_swaps {
        Some(cap) => allocator.with_iteration_cap(cap),
        None => allocator,
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let assignment = allocator.assign(&mut rng).unwrap_or_else(|e| bail(e));

    let rows = assignment.entries(&participants, &topics);
    let total_rank = assignment.total_rank(&participants);

    if json {
        output::print_json(&rows, total_rank, seed)
            .unwrap_or_else(|e| bail(format!("Failed to serialize result: {e}")));
    } else {
        output::print_lines(&rows);
        info!(total_rank, seed, "rank sum over all participants");
    }
}
