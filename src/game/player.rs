use super::colour::Colour;
use super::moves::{Move, MoveSet};
use super::state::GameState;
use super::ticket::{Ticket, Tickets};
use serde::Serialize;
use std::collections::HashMap;

/// Decides which move a player makes. Implemented by anything that can play: a human
/// frontend, a bot, or a scripted test player.
pub trait Player {
    /// Called when it is this player's turn. `location` is the player's true location,
    /// even for Mr X. The player chooses one of `moves` and hands it to `accept`.
    fn make_move(&mut self, view: &GameState, location: u32, moves: &MoveSet, accept: Acceptor<'_>);
}

/// A one-shot handle through which a [Player] commits to its chosen move.
pub struct Acceptor<'a> {
    slot: &'a mut Option<Move>,
}

impl<'a> Acceptor<'a> {
    pub(crate) fn new(slot: &'a mut Option<Move>) -> Self {
        Self { slot }
    }

    /// Commits the chosen move. Consumes the handle, so a move can be accepted at most once.
    pub fn accept(self, chosen: Move) {
        *self.slot = Some(chosen);
    }
}

/// The initial setup of a single player.
pub struct PlayerConfiguration {
    pub colour: Colour,
    pub location: u32,
    pub tickets: HashMap<Ticket, u32>,
    pub player: Box<dyn Player>,
}

impl PlayerConfiguration {
    pub fn new(colour: Colour, location: u32, tickets: HashMap<Ticket, u32>, player: Box<dyn Player>) -> Self {
        Self {
            colour,
            location,
            tickets,
            player,
        }
    }
}

/// A player's piece on the board.
#[derive(Clone, Serialize, Debug)]
pub struct PlayerRecord {
    pub(crate) colour: Colour,
    pub(crate) location: u32,
    pub(crate) tickets: Tickets,
}

impl PlayerRecord {
    pub fn new(colour: Colour, location: u32, tickets: Tickets) -> Self {
        Self {
            colour,
            location,
            tickets,
        }
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn tickets(&self) -> &Tickets {
        &self.tickets
    }
}
