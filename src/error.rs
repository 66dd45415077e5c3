use thiserror::Error;

/// The result of attempting to construct an invalid [Game](crate::game::Game),
/// or to perform an invalid operation on one.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("the round schedule is empty")]
    EmptyRounds,
    #[error("the transport graph is empty")]
    EmptyGraph,
    #[error("mr x must be black")]
    MrXNotBlack,
    #[error("at least one detective is required")]
    NoDetectives,
    #[error("two players share a colour")]
    DuplicateColour,
    #[error("two players share a starting location")]
    DuplicateLocation,
    #[error("a player is missing a ticket type")]
    MissingTicket,
    #[error("a detective cannot hold secret tickets")]
    DetectiveHasSecretTicket,
    #[error("a detective cannot hold double tickets")]
    DetectiveHasDoubleTicket,
    #[error("invalid game configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("could not read game configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("the selected move is not a valid move")]
    InvalidMove,
    #[error("the game is already over")]
    GameOver,
    #[error("spectator is already registered")]
    SpectatorAlreadyRegistered,
    #[error("spectator was never registered")]
    SpectatorNotRegistered,
}

impl GameError {
    /// Returns `true` if this error was raised while constructing a game,
    /// rather than by an operation on a game in progress.
    pub fn is_argument_error(&self) -> bool {
        !matches!(
            self,
            GameError::InvalidMove
                | GameError::GameOver
                | GameError::SpectatorAlreadyRegistered
                | GameError::SpectatorNotRegistered
        )
    }
}
