use super::colour::Colour;
use super::state::GameState;
use std::collections::BTreeSet;

impl GameState {
    /// Returns true if the game is over.
    ///
    /// The game ends when a detective lands on Mr X, when every detective has run out of
    /// taxi, bus and underground tickets, or, on Mr X's turn, when he cannot move or the
    /// final round has been played.
    pub fn is_game_over(&self) -> bool {
        if self.is_mr_x_captured() {
            return true;
        }
        if !self.detectives.iter().any(|d| d.tickets.has_movement_ticket()) {
            return true;
        }
        if self.current_player.is_mr_x() {
            if self.is_mr_x_stuck() {
                return true;
            }
            if self.current_round >= self.rounds.len() {
                return true;
            }
        }
        false
    }

    /// Gets the colours of the winning side, or an empty set while the game is running.
    pub fn winning_players(&self) -> BTreeSet<Colour> {
        if !self.is_game_over() {
            return BTreeSet::new();
        }
        if self.is_mr_x_stuck() || self.is_mr_x_captured() {
            self.detectives.iter().map(|d| d.colour).collect()
        } else {
            BTreeSet::from([self.mr_x.colour])
        }
    }

    /// Returns true if a detective shares Mr X's true location, revealed or not.
    fn is_mr_x_captured(&self) -> bool {
        self.detectives.iter().any(|d| d.location == self.mr_x.location)
    }

    fn is_mr_x_stuck(&self) -> bool {
        self.valid_moves(self.mr_x.colour, self.mr_x.location).is_empty()
    }
}
