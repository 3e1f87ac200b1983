use std::path::PathBuf;

use clap::Parser;
use judge::{
    create_bots, error_chain, new_game, play_game, BotOptions, Config, Layout, MatchStats,
    RangeMode, SaveFile, Strategy,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Who plays each seat, in turn order (one to four seats)
    #[arg(value_enum, num_args(1..=4), default_values_t = [Strategy::Tree, Strategy::Random, Strategy::Tree])]
    seats: Vec<Strategy>,

    /// How many moves the tree search looks ahead beyond its own
    #[arg(short, long, default_value_t = 2)]
    depth: usize,

    /// Rows and columns the random bot aims for
    #[arg(long, value_enum, default_value_t = RangeMode::Full)]
    range: RangeMode,

    /// The board to start on
    #[arg(short, long, value_enum, default_value_t = Layout::Prefilled)]
    board: Layout,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Store the game in this JSON file after every move
    #[arg(short, long)]
    save_to: Option<PathBuf>,

    /// Continue the game stored in the save file instead of starting a new one
    #[arg(short, long, default_value_t = false, requires = "save_to")]
    resume: bool,

    /// Print the board before every move
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut config = Config {
        rng: StdRng::seed_from_u64(seed),
        verbose: args.verbose || args.seats.contains(&Strategy::Human),
        save_file: args.save_to.map(SaveFile::new),
    };

    let options = BotOptions {
        depth: args.depth,
        range: args.range,
    };
    let mut bots = create_bots(&args.seats, options, &mut config.rng);

    let mut stats = MatchStats::new(args.seats.len());
    let mut names = Vec::new();
    for game_idx in 0..args.num_games {
        let mut game = match &config.save_file {
            Some(save_file) if args.resume && game_idx == 0 => {
                let game = save_file.load()?;
                info!(path = %save_file.path().display(), "Resuming saved game");
                game
            }
            _ => new_game(args.board, args.seats.len())?,
        };
        if names.is_empty() {
            names = game.players().iter().map(|p| p.name.clone()).collect();
        }

        let result = match play_game(&mut game, &mut bots, &mut config) {
            Ok(result) => result,
            Err(err) => {
                info!(game_idx, "Game aborted: {}", error_chain(&*err));
                return Err(err);
            }
        };
        debug!(game_idx, winners = ?result.winners);
        stats.record(&result);
    }

    if args.num_games > 1 {
        println!("\n{}", stats.summary(&names));
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
