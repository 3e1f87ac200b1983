use clap::ValueEnum;
use curling::{Board, Game, Player, Suit};
use curling_bots::{Bot, GreedyBot, HumanBot, RandomBot, TargetRange, TreeSearchBot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Who plays a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Moves are typed in on stdin
    Human,
    /// Most valuable card on a random target
    Random,
    /// Most valuable card where it immediately scores best
    Greedy,
    /// Look-ahead search
    Tree,
}

/// Which rows and columns the random bot aims for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RangeMode {
    Full,
    /// Rows and columns 1 to 3
    R1,
    /// Rows and columns 2 to 4
    R2,
}

/// The board a game starts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// 5x5 with twelve empty cells around the rim, the rest blanks
    Standard,
    /// 5x5 with every cell but the anchor empty
    Empty,
    /// 5x5 full of blanks, play starts by pushing cards in
    Prefilled,
}

impl Layout {
    pub fn board(self) -> Board {
        match self {
            Layout::Standard => Board::standard(),
            Layout::Empty => Board::new(curling::STANDARD_SIZE),
            Layout::Prefilled => Board::prefilled(curling::STANDARD_SIZE),
        }
    }
}

impl RangeMode {
    fn target_range(self) -> Option<TargetRange> {
        match self {
            RangeMode::Full => None,
            RangeMode::R1 => Some(TargetRange::r1()),
            RangeMode::R2 => Some(TargetRange::r2()),
        }
    }
}

/// Seats are dealt these names and suits in order.
pub const SEATS: [(&str, Suit); 4] = [
    ("Matt", Suit::Heart),
    ("F. Rob", Suit::Diamond),
    ("Rob H.", Suit::Club),
    ("Player 4", Suit::Spade),
];

/// Settings shared by all bots of a run.
#[derive(Clone, Copy, Debug)]
pub struct BotOptions {
    /// How many moves the tree search looks ahead beyond its own.
    pub depth: usize,
    pub range: RangeMode,
}

/// Creates one bot per seat. Every bot gets its own RNG, seeded from `rng`.
pub fn create_bots(
    strategies: &[Strategy],
    options: BotOptions,
    rng: &mut StdRng,
) -> Vec<Box<dyn Bot>> {
    strategies
        .iter()
        .map(|strategy| {
            let bot_rng = StdRng::seed_from_u64(rng.gen());
            let bot: Box<dyn Bot> = match strategy {
                Strategy::Human => Box::new(HumanBot::stdio()),
                Strategy::Random => match options.range.target_range() {
                    Some(range) => Box::new(RandomBot::with_range(bot_rng, range)),
                    None => Box::new(RandomBot::new(bot_rng)),
                },
                Strategy::Greedy => Box::new(GreedyBot::new(bot_rng)),
                Strategy::Tree => Box::new(TreeSearchBot::new(options.depth, bot_rng)),
            };
            bot
        })
        .collect()
}

/// A fresh game on the given layout with `num_players` seats.
pub fn new_game(layout: Layout, num_players: usize) -> anyhow::Result<Game> {
    if !(1..=SEATS.len()).contains(&num_players) {
        anyhow::bail!(
            "There must be between 1 and {} players, not {}",
            SEATS.len(),
            num_players
        );
    }
    let players = SEATS[..num_players]
        .iter()
        .map(|&(name, suit)| Player::new(name, suit))
        .collect();
    Ok(Game::new(layout.board(), players))
}
