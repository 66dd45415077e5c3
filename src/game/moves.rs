use super::colour::Colour;
use super::ticket::Ticket;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A set of moves offered to a player. Iteration order is deterministic.
pub type MoveSet = BTreeSet<Move>;

/// A single leg of travel paid for with one ticket.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TicketMove {
    pub colour: Colour,
    pub ticket: Ticket,
    pub destination: u32,
}

/// Two consecutive legs taken by Mr X using a double ticket.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DoubleMove {
    pub colour: Colour,
    pub first: TicketMove,
    pub second: TicketMove,
}

/// A move that a player can make on their turn.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(tag = "type")]
pub enum Move {
    Ticket(TicketMove),
    Double(DoubleMove),
    /// Offered to a detective with nowhere to go.
    Pass { colour: Colour },
}

impl TicketMove {
    pub fn new(colour: Colour, ticket: Ticket, destination: u32) -> Self {
        Self { colour, ticket, destination }
    }
}

impl DoubleMove {
    pub fn new(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Self { colour, first, second }
    }

    pub fn final_destination(&self) -> u32 {
        self.second.destination
    }
}

impl Move {
    /// Gets the colour of the player making the move.
    pub fn colour(&self) -> Colour {
        match self {
            Move::Ticket(m) => m.colour,
            Move::Double(m) => m.colour,
            Move::Pass { colour } => *colour,
        }
    }
}

impl From<TicketMove> for Move {
    fn from(m: TicketMove) -> Self {
        Move::Ticket(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl fmt::Display for TicketMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} -> {}", self.colour, self.ticket, self.destination)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Ticket(m) => m.fmt(f),
            Move::Double(m) => write!(
                f,
                "{} Double({:?} -> {}, {:?} -> {})",
                m.colour, m.first.ticket, m.first.destination, m.second.ticket, m.second.destination
            ),
            Move::Pass { colour } => write!(f, "{} Pass", colour),
        }
    }
}
