use super::moves::MoveSet;
use super::player::{Acceptor, Player};
use super::state::GameState;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A player that picks uniformly at random from the moves it is offered.
pub struct RandomPlayer {
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn make_move(&mut self, _view: &GameState, _location: u32, moves: &MoveSet, accept: Acceptor<'_>) {
        if let Some(chosen) = moves.iter().choose(&mut self.rng) {
            accept.accept(*chosen);
        }
    }
}
