use super::colour::Colour;
use super::graph::TransportGraph;
use super::player::{Player, PlayerConfiguration};
use super::ticket::Ticket;
use super::Game;
use crate::error::GameError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// The number of rounds in a standard game.
pub const STANDARD_ROUND_COUNT: usize = 24;

/// The rounds, counting from one, after which Mr X surfaces in a standard game.
pub const STANDARD_REVEAL_ROUNDS: [usize; 5] = [3, 8, 13, 18, 24];

/// A game setup as read from a configuration file.
#[derive(Clone, Deserialize, Debug)]
pub struct GameSetup {
    /// The reveal schedule. Defaults to the standard 24 round schedule.
    #[serde(default = "standard_rounds")]
    pub rounds: Vec<bool>,
    pub graph: TransportGraph,
    pub mr_x: PlayerSetup,
    pub detectives: Vec<PlayerSetup>,
    /// Seed for any randomised players.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// The starting position and tickets of a single player.
#[derive(Clone, Deserialize, Debug)]
pub struct PlayerSetup {
    pub colour: Colour,
    pub location: u32,
    pub tickets: HashMap<Ticket, u32>,
}

/// Gets the reveal schedule of a standard game.
pub fn standard_rounds() -> Vec<bool> {
    (1..=STANDARD_ROUND_COUNT)
        .map(|round| STANDARD_REVEAL_ROUNDS.contains(&round))
        .collect()
}

impl GameSetup {
    /// Parses a setup from JSON.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a setup from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Creates a game from this setup, asking `make_player` for the strategy behind each colour.
    pub fn build(self, mut make_player: impl FnMut(Colour) -> Box<dyn Player>) -> Result<Game, GameError> {
        let mr_x_player = make_player(self.mr_x.colour);
        let mr_x = self.mr_x.configure(mr_x_player);
        let detectives = self
            .detectives
            .into_iter()
            .map(|d| {
                let player = make_player(d.colour);
                d.configure(player)
            })
            .collect();
        Game::new(self.rounds, self.graph, mr_x, detectives)
    }
}

impl PlayerSetup {
    pub fn configure(self, player: Box<dyn Player>) -> PlayerConfiguration {
        PlayerConfiguration::new(self.colour, self.location, self.tickets, player)
    }
}
