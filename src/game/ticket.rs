use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A kind of ticket that a player spends to move.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    /// Stands in for any transport without revealing which was taken.
    Secret,
    /// Lets Mr X take two legs in a single turn.
    Double,
}

impl Ticket {
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// Gets the ticket needed to travel along an edge of the given transport.
    pub fn from_transport(transport: Transport) -> Self {
        match transport {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }

    /// Returns true for the tickets that correspond to a visible mode of transport.
    pub fn is_movement(self) -> bool {
        matches!(self, Ticket::Taxi | Ticket::Bus | Ticket::Underground)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The mode of transport attached to an edge of the map.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

/// The number of tickets of each kind held by a player.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Debug)]
pub struct Tickets {
    counts: [u32; 5],
}

impl Tickets {
    /// Builds a ticket pool from a configuration map, which must name every ticket kind.
    pub fn from_map(map: &HashMap<Ticket, u32>) -> Result<Self, GameError> {
        let mut tickets = Tickets::default();
        for ticket in Ticket::ALL {
            let count = map.get(&ticket).ok_or(GameError::MissingTicket)?;
            tickets.counts[ticket.index()] = *count;
        }
        Ok(tickets)
    }

    pub fn get(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    pub fn has(&self, ticket: Ticket) -> bool {
        self.get(ticket) > 0
    }

    pub fn add(&mut self, ticket: Ticket) {
        self.counts[ticket.index()] += 1;
    }

    /// Removes a single ticket. Callers only spend tickets a legal move has proven are held.
    pub fn remove(&mut self, ticket: Ticket) {
        let count = &mut self.counts[ticket.index()];
        *count = count.saturating_sub(1);
    }

    /// Returns true if any taxi, bus or underground ticket remains.
    pub fn has_movement_ticket(&self) -> bool {
        Ticket::ALL
            .into_iter()
            .filter(|t| t.is_movement())
            .any(|t| self.has(t))
    }
}
