use super::colour::Colour;
use super::graph::Graph;
use super::player::PlayerRecord;
use super::ticket::Ticket;
use std::collections::BTreeSet;
use std::fmt;

/// The value of the round counter before Mr X has made his first move.
pub const NOT_STARTED: usize = 0;

/// Represents where the game is in its turn cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Mr X has not moved yet.
    NotStarted,
    /// The given player is due to move next.
    InRotation(Colour),
    GameOver,
}

/// Everything that is known about a game of Scotland Yard.
///
/// Strategies and spectators are handed a shared reference to this; through the public
/// accessors they only ever see Mr X's last revealed location, never his true one.
pub struct GameState {
    pub(crate) rounds: Vec<bool>,
    pub(crate) graph: Box<dyn Graph>,
    pub(crate) mr_x: PlayerRecord,
    pub(crate) detectives: Vec<PlayerRecord>,
    pub(crate) current_player: Colour,
    pub(crate) current_round: usize,
    /// Where observers believe Mr X is; only updated on reveal rounds.
    pub(crate) mr_x_last_location: u32,
}

impl GameState {
    pub(crate) fn new(
        rounds: Vec<bool>,
        graph: Box<dyn Graph>,
        mr_x: PlayerRecord,
        detectives: Vec<PlayerRecord>,
    ) -> Self {
        Self {
            rounds,
            graph,
            current_player: mr_x.colour,
            mr_x,
            detectives,
            current_round: NOT_STARTED,
            mr_x_last_location: 0,
        }
    }

    /// Gets the colours of all players, Mr X first and then the detectives in turn order.
    pub fn players(&self) -> Vec<Colour> {
        self.records().map(|p| p.colour).collect()
    }

    /// Gets the colour of the player who moves next.
    pub fn current_player(&self) -> Colour {
        self.current_player
    }

    /// Gets the number of rounds Mr X has completed.
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// Gets the reveal schedule; `true` marks a round on which Mr X's location is revealed.
    pub fn rounds(&self) -> &[bool] {
        &self.rounds
    }

    /// Returns true if Mr X's location is revealed after he moves on the given round index.
    pub fn is_reveal_round(&self, round: usize) -> bool {
        self.rounds.get(round).copied().unwrap_or(false)
    }

    pub fn graph(&self) -> &dyn Graph {
        self.graph.as_ref()
    }

    /// Gets the location of a player as the public sees it. For Mr X this is his last
    /// revealed location, or `0` if he has not been revealed yet.
    pub fn player_location(&self, colour: Colour) -> Option<u32> {
        if colour.is_mr_x() {
            return Some(self.mr_x_last_location);
        }
        self.player(colour).map(|p| p.location)
    }

    /// Gets the number of tickets of the given kind held by a player.
    pub fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Option<u32> {
        self.player(colour).map(|p| p.tickets.get(ticket))
    }

    /// Gets the current phase of the turn cycle.
    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::GameOver
        } else if self.current_round == NOT_STARTED && self.current_player.is_mr_x() {
            Phase::NotStarted
        } else {
            Phase::InRotation(self.current_player)
        }
    }

    /// Iterates over all player records, Mr X first.
    pub(crate) fn records(&self) -> impl Iterator<Item = &PlayerRecord> {
        std::iter::once(&self.mr_x).chain(self.detectives.iter())
    }

    pub(crate) fn player(&self, colour: Colour) -> Option<&PlayerRecord> {
        self.records().find(|p| p.colour == colour)
    }

    pub(crate) fn player_mut(&mut self, colour: Colour) -> Option<&mut PlayerRecord> {
        if colour.is_mr_x() {
            return Some(&mut self.mr_x);
        }
        self.detectives.iter_mut().find(|p| p.colour == colour)
    }

    /// Gets a player's true location, which for Mr X may not be public.
    pub(crate) fn true_location(&self, colour: Colour) -> Option<u32> {
        self.player(colour).map(|p| p.location)
    }

    /// Gets every location currently occupied by a detective.
    pub(crate) fn detective_locations(&self) -> BTreeSet<u32> {
        self.detectives.iter().map(|p| p.location).collect()
    }

    /// Gets the player who moves after the given one, wrapping from the last detective to Mr X.
    pub(crate) fn next_player(&self, colour: Colour) -> Colour {
        if colour.is_mr_x() {
            return self.detectives.first().map_or(self.mr_x.colour, |p| p.colour);
        }
        let idx = self.detectives.iter().position(|p| p.colour == colour);
        idx.and_then(|i| self.detectives.get(i + 1))
            .map_or(self.mr_x.colour, |p| p.colour)
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("rounds", &self.rounds)
            .field("mr_x", &self.mr_x)
            .field("detectives", &self.detectives)
            .field("current_player", &self.current_player)
            .field("current_round", &self.current_round)
            .field("mr_x_last_location", &self.mr_x_last_location)
            .finish_non_exhaustive()
    }
}
