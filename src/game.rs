pub use self::colour::Colour;
pub use self::graph::{Edge, Graph, TransportGraph};
pub use self::moves::{DoubleMove, Move, MoveSet, TicketMove};
pub use self::options::{standard_rounds, GameSetup, PlayerSetup};
pub use self::player::{Acceptor, Player, PlayerConfiguration, PlayerRecord};
pub use self::random::RandomPlayer;
pub use self::spectator::{Spectator, Spectators};
pub use self::state::{GameState, Phase, NOT_STARTED};
pub use self::ticket::{Ticket, Tickets, Transport};
use crate::error::GameError;
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

mod colour;
mod graph;
mod moves;
mod options;
mod player;
mod random;
mod spectator;
mod state;
mod test;
mod ticket;
mod update;
mod valid_moves;
mod victory;

/// A game of Scotland Yard.
///
/// Owns the board state, the strategy deciding each player's moves and the spectators
/// watching the game, and drives the turn order: Mr X first, then each detective.
pub struct Game {
    state: GameState,
    /// One strategy per player, in the same order as [GameState::players].
    players: Vec<Box<dyn Player>>,
    spectators: Spectators,
}

impl Game {
    /// Creates a new game of Scotland Yard.
    pub fn new(
        rounds: Vec<bool>,
        graph: impl Graph + 'static,
        mr_x: PlayerConfiguration,
        detectives: Vec<PlayerConfiguration>,
    ) -> Result<Self, GameError> {
        if rounds.is_empty() {
            return Err(GameError::EmptyRounds);
        }
        if graph.is_empty() {
            return Err(GameError::EmptyGraph);
        }
        if !mr_x.colour.is_mr_x() {
            return Err(GameError::MrXNotBlack);
        }
        if detectives.is_empty() {
            return Err(GameError::NoDetectives);
        }

        let configurations = std::iter::once(&mr_x).chain(detectives.iter());
        let mut locations = HashSet::new();
        let mut colours = HashSet::new();
        for config in configurations.clone() {
            if !locations.insert(config.location) {
                return Err(GameError::DuplicateLocation);
            }
            if !colours.insert(config.colour) {
                return Err(GameError::DuplicateColour);
            }
        }

        let mut records = Vec::with_capacity(detectives.len() + 1);
        for config in configurations {
            let tickets = Tickets::from_map(&config.tickets)?;
            if config.colour.is_detective() {
                if tickets.has(Ticket::Secret) {
                    return Err(GameError::DetectiveHasSecretTicket);
                }
                if tickets.has(Ticket::Double) {
                    return Err(GameError::DetectiveHasDoubleTicket);
                }
            }
            records.push(PlayerRecord::new(config.colour, config.location, tickets));
        }

        let mut records = records.into_iter();
        let Some(mr_x_record) = records.next() else {
            return Err(GameError::NoDetectives);
        };
        let players = std::iter::once(mr_x.player)
            .chain(detectives.into_iter().map(|d| d.player))
            .collect();

        Ok(Game {
            state: GameState::new(rounds, Box::new(graph), mr_x_record, records.collect()),
            players,
            spectators: Spectators::default(),
        })
    }

    /// Gets the observable state of the game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn register_spectator(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), GameError> {
        self.spectators.register(spectator)
    }

    pub fn unregister_spectator(&mut self, spectator: &Rc<dyn Spectator>) -> Result<(), GameError> {
        self.spectators.unregister(spectator)
    }

    pub fn spectators(&self) -> &[Rc<dyn Spectator>] {
        self.spectators.as_slice()
    }

    pub fn current_player(&self) -> Colour {
        self.state.current_player()
    }

    pub fn current_round(&self) -> usize {
        self.state.current_round()
    }

    /// Returns true if the game is over.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn winning_players(&self) -> BTreeSet<Colour> {
        self.state.winning_players()
    }

    /// Plays one rotation: Mr X moves, then every detective in turn.
    ///
    /// Returns early, without error, if a player's strategy returns without accepting a
    /// move; the next call resumes with that same player.
    pub fn start_rotation(&mut self) -> Result<(), GameError> {
        if self.state.is_game_over() {
            return Err(GameError::GameOver);
        }

        for _ in 0..self.players.len() {
            if !self.play_turn()? {
                return Ok(());
            }
            if self.state.is_game_over() {
                let winners = self.state.winning_players();
                log::info!("Game over after round {}, won by {:?}", self.state.current_round, winners);
                self.spectators.game_over(&self.state, &winners);
                return Ok(());
            }
            if self.state.current_player.is_mr_x() {
                log::info!("Rotation complete after round {}", self.state.current_round);
                self.spectators.rotation_complete(&self.state);
                return Ok(());
            }
        }
        Ok(())
    }

    /// Asks the current player for a move and commits it. Returns `false` if no move was accepted.
    fn play_turn(&mut self) -> Result<bool, GameError> {
        let colour = self.state.current_player;
        let location = self.state.true_location(colour).ok_or(GameError::InvalidMove)?;
        let moves = self.state.valid_moves(colour, location);
        let idx = self
            .state
            .players()
            .iter()
            .position(|c| *c == colour)
            .ok_or(GameError::InvalidMove)?;

        let mut chosen = None;
        self.players[idx].make_move(&self.state, location, &moves, Acceptor::new(&mut chosen));
        let Some(mv) = chosen else {
            log::warn!("{} did not choose a move", colour);
            return Ok(false);
        };
        if mv.colour() != colour || !moves.contains(&mv) {
            return Err(GameError::InvalidMove);
        }

        log::debug!("{} chose {}", colour, mv);
        self.state.current_player = self.state.next_player(colour);
        self.commit(&mv);
        Ok(true)
    }

    /// Applies an accepted move, telling spectators only what the public may know.
    fn commit(&mut self, mv: &Move) {
        match mv {
            Move::Ticket(m) if m.colour.is_detective() => {
                self.state.apply_ticket_move(m);
                self.spectators.move_made(&self.state, mv);
            }
            Move::Ticket(m) => {
                let revealed = self.state.is_reveal_round(self.state.current_round);
                let shown = conceal(m, revealed, self.state.mr_x_last_location);
                self.state.apply_ticket_move(m);
                self.spectators.round_started(&self.state, self.state.current_round);
                self.spectators.move_made(&self.state, &shown.into());
            }
            Move::Double(m) => {
                let round = self.state.current_round;
                let first = conceal(&m.first, self.state.is_reveal_round(round), self.state.mr_x_last_location);
                let second = conceal(&m.second, self.state.is_reveal_round(round + 1), first.destination);

                self.state.spend_double_ticket(m.colour);
                self.spectators
                    .move_made(&self.state, &DoubleMove::new(m.colour, first, second).into());
                for (leg, shown) in [(m.first, first), (m.second, second)] {
                    self.state.apply_ticket_move(&leg);
                    self.spectators.round_started(&self.state, self.state.current_round);
                    self.spectators.move_made(&self.state, &shown.into());
                }
            }
            Move::Pass { .. } => self.spectators.move_made(&self.state, mv),
        }
    }
}

/// Gets the version of a leg that spectators are shown: unchanged on a reveal round,
/// otherwise with the destination replaced by the last location the public knows of.
fn conceal(m: &TicketMove, revealed: bool, last_known: u32) -> TicketMove {
    if revealed {
        *m
    } else {
        TicketMove::new(m.colour, m.ticket, last_known)
    }
}
