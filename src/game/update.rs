use super::colour::Colour;
use super::moves::{Move, TicketMove};
use super::state::GameState;
use super::ticket::Ticket;
use crate::error::GameError;

impl GameState {
    /// Returns `Ok` if the move is one of the moves currently available to its player.
    pub fn validate_move(&self, mv: &Move) -> Result<(), GameError> {
        let colour = mv.colour();
        let location = self.true_location(colour).ok_or(GameError::InvalidMove)?;
        if self.valid_moves(colour, location).contains(mv) {
            Ok(())
        } else {
            Err(GameError::InvalidMove)
        }
    }

    /// Validates and applies a move. An invalid move is rejected before anything changes.
    ///
    /// This does not advance the turn; that is the job of [Game](super::Game).
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), GameError> {
        self.validate_move(mv)?;
        match mv {
            Move::Ticket(m) => self.apply_ticket_move(m),
            Move::Double(m) => {
                self.spend_double_ticket(m.colour);
                self.apply_ticket_move(&m.first);
                self.apply_ticket_move(&m.second);
            }
            Move::Pass { .. } => {}
        }
        Ok(())
    }

    pub(crate) fn spend_double_ticket(&mut self, colour: Colour) {
        if let Some(player) = self.player_mut(colour) {
            player.tickets.remove(Ticket::Double);
        }
    }

    /// Moves a player along a single leg.
    ///
    /// Tickets spent by detectives are handed to Mr X. When Mr X moves, the round counter
    /// advances and, on a reveal round, his new location becomes public.
    pub(crate) fn apply_ticket_move(&mut self, m: &TicketMove) {
        let reveal = self.is_reveal_round(self.current_round);
        let Some(player) = self.player_mut(m.colour) else {
            return;
        };
        player.location = m.destination;
        player.tickets.remove(m.ticket);

        if m.colour.is_detective() {
            self.mr_x.tickets.add(m.ticket);
        } else {
            if reveal {
                self.mr_x_last_location = m.destination;
            }
            self.current_round += 1;
        }
        log::debug!("{} now at {} (round {})", m.colour, m.destination, self.current_round);
    }
}
