use super::colour::Colour;
use super::moves::Move;
use super::state::GameState;
use crate::error::GameError;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Observes a game as it is played. Moves are reported with Mr X's hidden locations
/// already concealed. All methods do nothing by default.
pub trait Spectator {
    fn on_move_made(&self, _view: &GameState, _mv: &Move) {}

    fn on_round_started(&self, _view: &GameState, _round: usize) {}

    fn on_rotation_complete(&self, _view: &GameState) {}

    fn on_game_over(&self, _view: &GameState, _winners: &BTreeSet<Colour>) {}
}

/// The spectators registered with a game, notified in the order they registered.
#[derive(Default)]
pub struct Spectators {
    list: Vec<Rc<dyn Spectator>>,
}

impl Spectators {
    pub fn register(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), GameError> {
        if self.position(&spectator).is_some() {
            return Err(GameError::SpectatorAlreadyRegistered);
        }
        self.list.push(spectator);
        Ok(())
    }

    pub fn unregister(&mut self, spectator: &Rc<dyn Spectator>) -> Result<(), GameError> {
        let idx = self.position(spectator).ok_or(GameError::SpectatorNotRegistered)?;
        self.list.remove(idx);
        Ok(())
    }

    pub fn as_slice(&self) -> &[Rc<dyn Spectator>] {
        &self.list
    }

    pub fn move_made(&self, view: &GameState, mv: &Move) {
        self.list.iter().for_each(|s| s.on_move_made(view, mv));
    }

    pub fn round_started(&self, view: &GameState, round: usize) {
        self.list.iter().for_each(|s| s.on_round_started(view, round));
    }

    pub fn rotation_complete(&self, view: &GameState) {
        self.list.iter().for_each(|s| s.on_rotation_complete(view));
    }

    pub fn game_over(&self, view: &GameState, winners: &BTreeSet<Colour>) {
        self.list.iter().for_each(|s| s.on_game_over(view, winners));
    }

    /// Spectators are identified by the allocation they point to.
    fn position(&self, spectator: &Rc<dyn Spectator>) -> Option<usize> {
        self.list
            .iter()
            .position(|s| std::ptr::addr_eq(Rc::as_ptr(s), Rc::as_ptr(spectator)))
    }
}
