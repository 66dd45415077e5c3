use scotland_yard::game::{Colour, GameSetup, GameState, Move, RandomPlayer, Spectator};
use std::collections::BTreeSet;
use std::rc::Rc;

/// Writes every public game event to the log.
struct LogSpectator;

impl Spectator for LogSpectator {
    fn on_move_made(&self, _view: &GameState, mv: &Move) {
        log::info!("{}", mv);
    }

    fn on_round_started(&self, _view: &GameState, round: usize) {
        log::info!("Round {} started", round);
    }

    fn on_game_over(&self, view: &GameState, winners: &BTreeSet<Colour>) {
        log::info!("Game over in round {}, won by {:?}", view.current_round(), winners);
    }
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::try_init().ok();

    let path = std::env::var("GAME_CONFIG").unwrap_or_else(|_| "config/game.json".to_string());
    let setup = GameSetup::load(&path)?;
    let seed = match std::env::var("SEED").map(|s| s.parse::<u64>()) {
        Ok(Ok(seed)) => seed,
        Ok(Err(_)) => anyhow::bail!("SEED is not a valid number"),
        Err(_) => setup.seed.unwrap_or(0),
    };
    log::info!("Loaded game from {} (seed {})", path, seed);

    let mut game = setup.build(|colour| Box::new(RandomPlayer::new(seed ^ colour as u64)))?;
    game.register_spectator(Rc::new(LogSpectator))?;

    while !game.is_game_over() {
        let round = game.current_round();
        game.start_rotation()?;
        if !game.is_game_over() && game.current_round() == round {
            anyhow::bail!("no progress was made in round {}", round);
        }
    }

    for colour in game.state().players() {
        let location = game.state().player_location(colour).unwrap_or_default();
        log::info!("{} finished at {}", colour, location);
    }
    println!("Winners: {:?}", game.winning_players());
    Ok(())
}
