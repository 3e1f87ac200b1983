use curling::{Game, Phase, SavedGame};
use curling_bots::Bot;
use judge::{
    create_bots, new_game, play_game, BotOptions, Config, GameResult, Layout, MatchStats,
    RangeMode, SaveFile, Strategy,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config(seed: u64, save_file: Option<SaveFile>) -> Config {
    Config {
        rng: StdRng::seed_from_u64(seed),
        verbose: false,
        save_file,
    }
}

fn bots(strategies: &[Strategy], config: &mut Config) -> Vec<Box<dyn Bot>> {
    let options = BotOptions {
        depth: 0,
        range: RangeMode::R2,
    };
    create_bots(strategies, options, &mut config.rng)
}

fn play(layout: Layout, strategies: &[Strategy], seed: u64) -> (Game, GameResult) {
    let mut config = config(seed, None);
    let mut bots = bots(strategies, &mut config);
    let mut game = new_game(layout, strategies.len()).unwrap();
    let result = play_game(&mut game, &mut bots, &mut config).unwrap();
    (game, result)
}

#[test]
fn three_players_finish_after_39_moves() {
    let seats = [Strategy::Tree, Strategy::Random, Strategy::Greedy];
    for layout in [Layout::Standard, Layout::Empty, Layout::Prefilled] {
        let (game, result) = play(layout, &seats, 42);
        assert_eq!(game.phase(), Phase::Final);
        assert_eq!(game.history_len(), 39);
        assert!(game.players().iter().all(|p| p.hand.is_empty()));
        assert!(game.board().is_final());
        assert_eq!(result.scores.len(), 3);
        let best = result.scores.iter().copied().max().unwrap();
        assert!(result.winners.iter().all(|&w| result.scores[w] == best));
    }
}

#[test]
fn same_seed_same_game() {
    let seats = [Strategy::Random, Strategy::Tree];
    let (first, _) = play(Layout::Standard, &seats, 7);
    let (second, _) = play(Layout::Standard, &seats, 7);
    assert_eq!(SavedGame::from(first.state()), SavedGame::from(second.state()));
}

#[test]
fn resumed_game_plays_out_like_the_uninterrupted_one() {
    let seats = [Strategy::Greedy, Strategy::Random, Strategy::Greedy];
    let path = std::env::temp_dir().join(format!("curling_resume_{}.json", std::process::id()));

    // Play a few moves by hand and save the position.
    let mut game = new_game(Layout::Standard, 3).unwrap();
    for _ in 0..5 {
        let card = game.current_player().hand[0];
        let (row, column) = game.board().targets()[0];
        game.make_move(curling::Ply { card, row, column }).unwrap();
    }
    SaveFile::new(&path).store(&game.state()).unwrap();

    let mut config_a = config(3, None);
    let mut bots_a = bots(&seats, &mut config_a);
    let result_a = play_game(&mut game, &mut bots_a, &mut config_a).unwrap();

    let mut config_b = config(3, Some(SaveFile::new(&path)));
    let mut bots_b = bots(&seats, &mut config_b);
    let mut resumed = SaveFile::new(&path).load().unwrap();
    let result_b = play_game(&mut resumed, &mut bots_b, &mut config_b).unwrap();

    // The save file now holds the finished game.
    let finished = SaveFile::new(&path).load().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(result_a, result_b);
    assert_eq!(resumed.history_len(), 34);
    assert!(finished.is_over());
    assert_eq!(SavedGame::from(finished.state()), SavedGame::from(resumed.state()));
}

#[test]
fn tournament_statistics_add_up() {
    let seats = [Strategy::Tree, Strategy::Random, Strategy::Tree];
    let mut config = config(11, None);
    let mut bots = bots(&seats, &mut config);
    let mut stats = MatchStats::new(3);
    let num_games = 4;
    for _ in 0..num_games {
        let mut game = new_game(Layout::Prefilled, 3).unwrap();
        let result = play_game(&mut game, &mut bots, &mut config).unwrap();
        stats.record(&result);
    }
    assert_eq!(stats.num_games, num_games);
    assert!(stats.wins.iter().sum::<usize>() >= num_games);
    let margins: f64 = stats.average_margins().iter().sum();
    assert!(margins.abs() < 1e-9);
    let best_average = stats
        .average_scores()
        .into_iter()
        .fold(f64::MIN, f64::max);
    assert!(stats.average_winning_score() >= best_average);
}
